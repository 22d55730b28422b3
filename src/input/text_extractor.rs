//! Text extraction from document bytes

use crate::error::{Result, SkillMatchError};
use crate::input::file_detector::DocumentKind;
use pulldown_cmark::{html, Parser};
use regex::Regex;

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            SkillMatchError::PdfExtraction(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        decode_utf8(bytes)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let markdown_content = decode_utf8(bytes)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        self.html_to_text(&html_output)
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> Result<String> {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n");

        let tags = Regex::new(r"<[^>]*>")
            .map_err(|e| SkillMatchError::InvalidInput(format!("Bad tag pattern: {}", e)))?;
        let clean_text = tags
            .replace_all(&text, "")
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        let lines: Vec<&str> = clean_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        Ok(lines.join("\n"))
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| SkillMatchError::InvalidInput(format!("Document is not valid UTF-8 text: {}", e)))
}

/// Extract lowercase text from a document, dispatching on its mime type
pub fn extract_text(bytes: &[u8], mime_type: &str) -> Result<String> {
    extract_kind(bytes, DocumentKind::from_mime(mime_type))
        .map_err(|e| match e {
            SkillMatchError::UnsupportedFormat(_) => SkillMatchError::UnsupportedFormat(format!(
                "Unsupported mime type '{}'. Supported: application/pdf, text/plain, text/markdown",
                mime_type
            )),
            other => other,
        })
}

pub(crate) fn extract_kind(bytes: &[u8], kind: DocumentKind) -> Result<String> {
    let text = match kind {
        DocumentKind::Pdf => PdfExtractor.extract(bytes)?,
        DocumentKind::Text => PlainTextExtractor.extract(bytes)?,
        DocumentKind::Markdown => MarkdownExtractor.extract(bytes)?,
        DocumentKind::Unknown => {
            return Err(SkillMatchError::UnsupportedFormat(format!("{} document", kind)));
        }
    };

    Ok(text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_lowercased() {
        let text = extract_text(b"Senior SQL Developer\nPython", "text/plain").unwrap();
        assert_eq!(text, "senior sql developer\npython");
    }

    #[test]
    fn test_markdown_formatting_removed() {
        let md = b"# Jane Doe\n\n## Skills\n\n- **Python**\n- Excel & Tableau\n";
        let text = extract_text(md, "text/markdown").unwrap();

        assert!(text.contains("jane doe"));
        assert!(text.contains("python"));
        assert!(text.contains("excel & tableau"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
        assert!(!text.contains("<li>"));
    }

    #[test]
    fn test_unsupported_mime_names_the_type() {
        let err = extract_text(b"PK\x03\x04", "application/zip").unwrap_err();
        match err {
            SkillMatchError::UnsupportedFormat(msg) => assert!(msg.contains("application/zip")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_invalid_input() {
        let err = extract_text(&[0xff, 0xfe, 0x00], "text/plain").unwrap_err();
        assert!(matches!(err, SkillMatchError::InvalidInput(_)));
    }

    #[test]
    fn test_garbage_pdf_fails_extraction() {
        let err = extract_text(b"not a pdf at all", "application/pdf").unwrap_err();
        assert!(matches!(err, SkillMatchError::PdfExtraction(_)));
    }
}
