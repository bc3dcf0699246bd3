//! Integration tests for the full render pipeline.

use casedoc::compose::{compose_pages, PageChrome};
use casedoc::render::{plan_layout, render, render_plan};
use casedoc::{inspect_bytes, Casedoc, Compression, RenderOptions, Token};
use chrono::{TimeZone, Utc};

fn fixed_options() -> RenderOptions {
    RenderOptions::new().with_generated_at(Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap())
}

/// 500 distinct four-letter words in paragraphs of 20 words.
fn long_narrative() -> String {
    let words: Vec<String> = (0..500u32)
        .map(|i| {
            let letter = |n: u32| char::from(b'a' + (n % 26) as u8);
            format!("w{}{}{}", letter(i / 676), letter(i / 26), letter(i))
        })
        .collect();

    let mut text = String::from("Executive Summary\n");
    for chunk in words.chunks(20) {
        text.push_str(&chunk.join(" "));
        text.push_str("\n\n");
    }
    text
}

/// Parse the xref table by hand and return `(object number, offset)` pairs.
fn xref_entries(pdf: &[u8]) -> Vec<(usize, usize)> {
    let text = std::str::from_utf8(pdf).unwrap();
    let startxref = text.rfind("startxref\n").unwrap();
    let xref_offset: usize = text[startxref + 10..]
        .lines()
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert!(text[xref_offset..].starts_with("xref\n"));

    text[xref_offset..]
        .lines()
        .skip(3) // "xref", "0 N", free entry
        .take_while(|line| !line.starts_with("trailer"))
        .enumerate()
        .map(|(index, line)| (index + 1, line[..10].parse().unwrap()))
        .collect()
}

#[test]
fn test_scenario_a_single_page() {
    let narrative = "Executive Summary\nAll good.\n\nRecommendation\nApprove.";
    let options = fixed_options();
    let plan = plan_layout(narrative, &options).unwrap();

    assert_eq!(plan.page_count(), 1);
    let tokens: Vec<_> = plan.tokens().map(|placed| placed.token.clone()).collect();
    assert_eq!(
        tokens,
        vec![
            Token::heading("Executive Summary"),
            Token::paragraph("All good."),
            Token::Spacer,
            Token::heading("Recommendation"),
            Token::paragraph("Approve."),
        ]
    );

    let pdf = render(narrative, "Acme Co", &options).unwrap();
    let report = inspect_bytes(&pdf).unwrap();
    assert_eq!(report.page_count, Some(1));
}

#[test]
fn test_scenario_b_empty_narrative() {
    let options = fixed_options();
    let plan = plan_layout("", &options).unwrap();

    assert_eq!(plan.page_count(), 1);
    assert_eq!(
        plan.pages[0].tokens[0].token,
        Token::paragraph("No report content available.")
    );

    let pdf = render("", "Acme Co", &options).unwrap();
    let text = String::from_utf8(pdf).unwrap();
    assert!(text.contains("(No report content available.) Tj"));
    assert!(text.contains("/Count 1"));
}

#[test]
fn test_scenario_c_truncation_and_continuation() {
    let subject: String = "Consolidated Holdings International Group "
        .repeat(3)
        .chars()
        .take(90)
        .collect();
    assert_eq!(subject.len(), 90);

    let options = fixed_options();
    let plan = plan_layout(&long_narrative(), &options).unwrap();
    assert!(plan.page_count() > 1);

    let chrome = PageChrome::new(subject.as_str(), "2026-10-19 09:30:00 UTC");
    let streams = compose_pages(&plan, &options.geometry, &options.typography, &chrome);

    let first: Vec<_> = streams[0].texts().collect();
    assert_eq!(first[1], format!("{}...", &subject[..67]));
    assert_eq!(first[4], format!("{}...", &subject[..49]));

    let last_page = streams.last().unwrap();
    let footer = last_page.texts().rev().nth(1).unwrap();
    assert_eq!(footer, format!("{}...", &subject[..55]));

    let page_one = String::from_utf8(streams[0].encode()).unwrap();
    assert!(page_one.contains("34 676 544 82 re f"));
    for stream in &streams[1..] {
        let encoded = String::from_utf8(stream.encode()).unwrap();
        assert!(encoded.contains("34 704 544 54 re f"));
        assert!(!encoded.contains("(COMPANY)"));
    }

    let pdf = render_plan(&plan, &subject, &options).unwrap();
    let report = inspect_bytes(&pdf).unwrap();
    assert_eq!(report.page_count, Some(plan.page_count() as u32));
}

#[test]
fn test_scenario_d_lowercase_heading() {
    let plan = plan_layout("financial case:\nNPV is positive.", &fixed_options()).unwrap();
    let first = &plan.pages[0].tokens[0].token;
    assert_eq!(first, &Token::heading("Financial Case"));
}

#[test]
fn test_render_is_deterministic() {
    let narrative = long_narrative();
    let options = fixed_options();
    let a = render(&narrative, "Acme Co", &options).unwrap();
    let b = render(&narrative, "Acme Co", &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_xref_offsets_point_at_objects() {
    let pdf = render(&long_narrative(), "Acme Co", &fixed_options()).unwrap();
    let entries = xref_entries(&pdf);
    assert!(!entries.is_empty());

    for (number, offset) in entries {
        let marker = format!("{} 0 obj", number);
        assert!(
            pdf[offset..].starts_with(marker.as_bytes()),
            "object {} not found at offset {}",
            number,
            offset
        );
    }
}

#[test]
fn test_object_inventory() {
    let options = fixed_options();
    let narrative = long_narrative();
    let pages = plan_layout(&narrative, &options).unwrap().page_count();
    let pdf = String::from_utf8(render(&narrative, "Acme Co", &options).unwrap()).unwrap();

    assert_eq!(pdf.matches("/Type /Catalog").count(), 1);
    assert_eq!(pdf.matches("/Type /Pages ").count(), 1);
    assert_eq!(pdf.matches("/Type /Page /Parent").count(), pages);
    assert_eq!(pdf.matches("\nstream\n").count(), pages);
    assert_eq!(pdf.matches("/Type /Font").count(), 2);
    assert!(pdf.contains(&format!("trailer\n<< /Size {} /Root 1 0 R >>", 2 * pages + 5)));
}

#[test]
fn test_compressed_output_is_consistent() {
    let options = fixed_options().with_compression(Compression::Flate);
    let pdf = render(&long_narrative(), "Acme Co", &options).unwrap();
    let report = inspect_bytes(&pdf).unwrap();

    assert!(report.page_count.unwrap() > 1);
    assert!(pdf.windows(12).any(|w| w == b"/FlateDecode"));
}

#[test]
fn test_non_ascii_subject_is_sanitized() {
    let pdf = render("Approve.", "Caf\u{e9} (Nord) \u{2014} AG", &fixed_options()).unwrap();
    assert!(pdf.is_ascii());

    let text = String::from_utf8(pdf).unwrap();
    assert!(text.contains(r"(Caf \(Nord\) AG) Tj"));
}

#[test]
fn test_render_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("case.pdf");

    let written = Casedoc::new()
        .with_generated_at(Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap())
        .render_to_file("Recommendation\nApprove.", "Acme Co", &path)
        .unwrap();

    let report = casedoc::inspect_file(&path).unwrap();
    assert_eq!(report.byte_len, written);
    assert_eq!(report.page_count, Some(1));
}
