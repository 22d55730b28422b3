//! Configuration management for the skill matcher

use crate::error::{Result, SkillMatchError};
use crate::processing::scoring::{ScoringOptions, DEFAULT_TOP_MISSING};
use crate::recommend::postings::DEFAULT_POSTING_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub catalog: CatalogConfig,
    pub postings: PostingsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub top_missing: usize,
    pub top_roles_in_report: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Custom catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
    /// Category scored when `--category` is not given; all roles when unset
    pub default_category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingsConfig {
    pub path: Option<PathBuf>,
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub include_recommendations: bool,
    pub color_output: bool,
    pub candidate_name: String,
    pub preview_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
    Pdf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                top_missing: DEFAULT_TOP_MISSING,
                top_roles_in_report: 3,
            },
            catalog: CatalogConfig::default(),
            postings: PostingsConfig {
                path: None,
                limit: DEFAULT_POSTING_LIMIT,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                include_recommendations: true,
                color_output: true,
                candidate_name: "Candidate".to_string(),
                preview_chars: 3000,
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first use
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| SkillMatchError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillMatchError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillmatch")
            .join("config.toml")
    }

    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            top_missing: self.scoring.top_missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.scoring.top_missing, 5);
        assert_eq!(config.output.format, OutputFormat::Console);
        assert_eq!(config.postings.limit, 5);
    }

    #[test]
    fn test_round_trip_keeps_custom_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.scoring.top_missing = 3;
        config.catalog.default_category = Some("Tech".to_string());
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring_options().top_missing, 3);
        assert_eq!(loaded.catalog.default_category.as_deref(), Some("Tech"));
        assert_eq!(loaded.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_malformed_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scoring = 12").unwrap();

        assert!(matches!(Config::load_from(&path), Err(SkillMatchError::Configuration(_))));
    }
}
