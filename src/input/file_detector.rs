//! Document type detection

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl DocumentKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => DocumentKind::Pdf,
            "txt" => DocumentKind::Text,
            "md" | "markdown" => DocumentKind::Markdown,
            _ => DocumentKind::Unknown,
        }
    }

    /// Parameters such as `; charset=utf-8` are ignored
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or_default().trim().to_lowercase();
        match essence.as_str() {
            "application/pdf" => DocumentKind::Pdf,
            "text/plain" => DocumentKind::Text,
            "text/markdown" | "text/x-markdown" => DocumentKind::Markdown,
            _ => DocumentKind::Unknown,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Text => "text/plain",
            DocumentKind::Markdown => "text/markdown",
            DocumentKind::Unknown => "application/octet-stream",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Text => "plain text",
            DocumentKind::Markdown => "Markdown",
            DocumentKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_and_mime_agree() {
        for ext in ["pdf", "TXT", "md", "markdown"] {
            let kind = DocumentKind::from_extension(ext);
            assert_ne!(kind, DocumentKind::Unknown);
            assert_eq!(DocumentKind::from_mime(kind.mime_type()), kind);
        }
        assert_eq!(DocumentKind::from_extension("docx"), DocumentKind::Unknown);
    }

    #[test]
    fn test_mime_parameters_ignored() {
        assert_eq!(DocumentKind::from_mime("Text/Plain; charset=utf-8"), DocumentKind::Text);
        assert_eq!(DocumentKind::from_mime("image/png"), DocumentKind::Unknown);
    }
}
