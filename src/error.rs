//! Error handling for the skill matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillMatchError {
    #[error("Skill catalog has no roles")]
    EmptyCatalog,

    #[error("Invalid catalog entry for role '{role}': {reason}")]
    InvalidCatalog { role: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Skill matcher error: {0}")]
    Matcher(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl SkillMatchError {
    pub(crate) fn invalid_catalog(role: &str, reason: impl Into<String>) -> Self {
        SkillMatchError::InvalidCatalog {
            role: role.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillMatchError>;
