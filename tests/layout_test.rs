//! Integration tests for tokenizing and pagination properties.

use casedoc::layout::{Geometry, Paginator, Tokenizer, Typography};
use casedoc::model::Token;

fn sample_inputs() -> Vec<String> {
    vec![
        String::new(),
        "\n\n\n".to_string(),
        "Executive Summary".to_string(),
        "word ".repeat(400),
        format!("{} tail", "x".repeat(250)),
        "Strategic Impact:\n\n\nThe initiative reduces labor pressure.\n\n".repeat(40),
        "Caf\u{e9} cr\u{e8}me \u{2014} 12\u{a0}%\tROI\r\nnext line".to_string(),
        "recommendation\nApprove with quarterly benefit tracking.".repeat(3),
    ]
}

#[test]
fn test_tokenize_never_empty() {
    let tokenizer = Tokenizer::default();
    for input in sample_inputs() {
        assert!(!tokenizer.tokenize(&input).is_empty(), "input {:?}", input);
    }
}

#[test]
fn test_paragraph_lines_within_bound() {
    let tokenizer = Tokenizer::default();
    let max = tokenizer.max_chars();
    assert_eq!(max, 83);

    for input in sample_inputs() {
        for token in tokenizer.tokenize(&input) {
            if let Token::Paragraph { text } = token {
                assert!(text.len() <= max, "line too long: {:?}", text);
                assert!(text.is_ascii());
            }
        }
    }
}

#[test]
fn test_long_word_split_into_bound_chunks() {
    let tokens = Tokenizer::default().tokenize(&format!("{} tail", "x".repeat(250)));
    let lengths: Vec<_> = tokens
        .iter()
        .filter_map(|t| t.text())
        .map(str::len)
        .collect();
    assert_eq!(lengths, vec![83, 83, 83, 1, 4]);
}

#[test]
fn test_no_leading_or_adjacent_spacers() {
    let tokenizer = Tokenizer::default();
    for input in sample_inputs() {
        let tokens = tokenizer.tokenize(&input);
        assert!(!tokens[0].is_spacer());
        for pair in tokens.windows(2) {
            assert!(!(pair[0].is_spacer() && pair[1].is_spacer()));
        }
    }
}

#[test]
fn test_placed_tokens_stay_above_floor() {
    let geometry = Geometry::letter();
    let tokenizer = Tokenizer::new(&geometry, &Typography::default());
    let paginator = Paginator::new(&geometry);

    for input in sample_inputs() {
        let plan = paginator.paginate(&tokenizer.tokenize(&input));
        assert!(plan.page_count() >= 1);
        for placed in plan.tokens() {
            assert!(placed.bottom() >= geometry.content_floor_y());
        }
        for (index, page) in plan.pages.iter().enumerate() {
            assert_eq!(page.number as usize, index + 1);
            assert!(page.tokens.iter().all(|t| t.page_index == index));
        }
    }
}

#[test]
fn test_page_count_matches_breaks() {
    let geometry = Geometry::letter();
    let tokens = vec![Token::paragraph("line"); 200];
    let plan = Paginator::new(&geometry).paginate(&tokens);

    // 34 lines on page 1, 38 on each continuation page.
    assert_eq!(plan.pages[0].tokens.len(), 34);
    assert_eq!(plan.pages[1].tokens.len(), 38);
    assert_eq!(plan.page_count(), 1 + (200 - 34 + 37) / 38);
    assert_eq!(plan.tokens().count(), 200);
}

#[test]
fn test_a4_geometry_changes_wrap_and_pages() {
    let geometry = Geometry::a4();
    let tokenizer = Tokenizer::new(&geometry, &Typography::default());
    assert_eq!(tokenizer.max_chars(), 80);

    let plan = Paginator::new(&geometry).paginate(&tokenizer.tokenize(&"word ".repeat(400)));
    assert_eq!(plan.pages[0].tokens[0].y, 668.0);
}
