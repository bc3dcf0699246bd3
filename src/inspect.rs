//! Structural checks for produced PDF files.
//!
//! This is not a parser: it only confirms that the header, trailer and
//! cross-reference table agree with the bytes they describe.

use crate::error::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// PDF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.4")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.4"
const EOF_MARKER: &[u8] = b"%%EOF";

/// Detect PDF format from the leading bytes of a file.
///
/// # Returns
/// * `Ok(PdfFormat)` if the data starts with a valid PDF header
/// * `Err(Error::UnknownFormat)` if the data is not a PDF
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfFormat { version })
}

/// Check if a version string looks like `d.d`.
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Result of a successful structural inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfReport {
    /// Header format
    pub format: PdfFormat,

    /// In-use indirect objects listed in the cross-reference table
    pub object_count: usize,

    /// `/Count` of the page tree, if found
    pub page_count: Option<u32>,

    /// Byte offset of the `xref` keyword
    pub xref_offset: usize,

    /// Total file size in bytes
    pub byte_len: usize,
}

/// Inspect a PDF file on disk.
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<PdfReport> {
    let data = fs::read(path)?;
    inspect_bytes(&data)
}

/// Verify header, trailer and every cross-reference offset.
pub fn inspect_bytes(data: &[u8]) -> Result<PdfReport> {
    let format = detect_format_from_bytes(data)?;

    let end = data
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |last| last + 1);
    if !data[..end].ends_with(EOF_MARKER) {
        return Err(Error::Corrupted("missing %%EOF marker".into()));
    }

    let xref_offset = find_startxref(data)?;
    let xref = data
        .get(xref_offset..)
        .filter(|rest| rest.starts_with(b"xref"))
        .ok_or_else(|| {
            Error::Corrupted(format!("startxref {} does not point at xref", xref_offset))
        })?;

    let xref_text = String::from_utf8_lossy(xref);
    let section_end = xref_text.find("trailer").ok_or_else(|| {
        Error::Corrupted("cross-reference table is not followed by a trailer".into())
    })?;
    let section = &xref_text[..section_end];

    let header = Regex::new(r"^xref\s+(\d+)\s+(\d+)").unwrap();
    let entry = Regex::new(r"(\d{10}) (\d{5}) ([nf])").unwrap();

    let caps = header
        .captures(section)
        .ok_or_else(|| Error::Corrupted("malformed xref subsection header".into()))?;
    let first: usize = parse_number(&caps[1])?;
    let count: usize = parse_number(&caps[2])?;

    let entries: Vec<_> = entry.captures_iter(section).collect();
    if entries.len() != count {
        return Err(Error::Corrupted(format!(
            "xref declares {} entries but lists {}",
            count,
            entries.len()
        )));
    }

    let mut object_count = 0;
    for (index, caps) in entries.iter().enumerate() {
        if &caps[3] != "n" {
            continue;
        }
        let number = first + index;
        let offset: usize = parse_number(&caps[1])?;
        let marker = format!("{} 0 obj", number);
        let points_at_object = data
            .get(offset..)
            .is_some_and(|rest| rest.starts_with(marker.as_bytes()));
        if !points_at_object {
            return Err(Error::Corrupted(format!(
                "xref offset {} for object {} does not point at '{}'",
                offset, number, marker
            )));
        }
        object_count += 1;
    }

    let page_count = Regex::new(r"/Type\s*/Pages\b[^>]*?/Count\s+(\d+)")
        .unwrap()
        .captures(&String::from_utf8_lossy(data))
        .and_then(|caps| caps[1].parse().ok());

    log::debug!(
        "Inspected {} bytes: {} objects, xref at {}",
        data.len(),
        object_count,
        xref_offset
    );

    Ok(PdfReport {
        format,
        object_count,
        page_count,
        xref_offset,
        byte_len: data.len(),
    })
}

fn find_startxref(data: &[u8]) -> Result<usize> {
    const KEYWORD: &[u8] = b"startxref";

    let position = data
        .windows(KEYWORD.len())
        .rposition(|window| window == KEYWORD)
        .ok_or_else(|| Error::Corrupted("missing startxref".into()))?;

    let digits: String = data[position + KEYWORD.len()..]
        .iter()
        .skip_while(|b| b.is_ascii_whitespace())
        .take_while(|b| b.is_ascii_digit())
        .map(|&b| b as char)
        .collect();
    parse_number(&digits)
}

fn parse_number(digits: &str) -> Result<usize> {
    digits
        .parse()
        .map_err(|_| Error::Corrupted(format!("expected a number, found '{}'", digits)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &[u8] = b"%PDF-1.4\n\
1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n\
2 0 obj\n<< /Type /Pages /Kids [] /Count 0 >>\nendobj\n\
xref\n0 3\n\
0000000000 65535 f \n\
0000000009 00000 n \n\
0000000058 00000 n \n\
trailer\n<< /Size 3 /Root 1 0 R >>\nstartxref\n110\n%%EOF";

    #[test]
    fn test_detect_valid_pdf() {
        let format = detect_format_from_bytes(b"%PDF-1.4\n").unwrap();
        assert_eq!(format.version, "1.4");
        assert_eq!(format.to_string(), "PDF 1.4");
    }

    #[test]
    fn test_detect_invalid_format() {
        assert!(matches!(
            detect_format_from_bytes(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(b"%PDF"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(b"%PDF-x.y\n"),
            Err(Error::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_inspect_minimal() {
        let report = inspect_bytes(MINIMAL).unwrap();
        assert_eq!(report.object_count, 2);
        assert_eq!(report.page_count, Some(0));
        assert_eq!(report.xref_offset, 110);
    }

    #[test]
    fn test_inspect_detects_shifted_offset() {
        let corrupted = String::from_utf8(MINIMAL.to_vec())
            .unwrap()
            .replace("0000000058 00000 n", "0000000057 00000 n");
        let result = inspect_bytes(corrupted.as_bytes());
        assert!(matches!(result, Err(Error::Corrupted(msg)) if msg.contains("object 2")));
    }

    #[test]
    fn test_inspect_missing_eof() {
        let truncated = &MINIMAL[..MINIMAL.len() - 5];
        assert!(matches!(
            inspect_bytes(truncated),
            Err(Error::Corrupted(_))
        ));
    }
}
