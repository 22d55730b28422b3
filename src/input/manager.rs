//! Input manager for reading resume files from disk

use crate::error::{Result, SkillMatchError};
use crate::input::file_detector::DocumentKind;
use crate::input::text_extractor::extract_kind;
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read `path` and return its lowercase text
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(SkillMatchError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let kind = self.detect_kind(path)?;
        if kind == DocumentKind::Unknown {
            return Err(SkillMatchError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )));
        }

        info!("Extracting {} text from: {}", kind, path.display());
        let bytes = fs::read(path).await?;
        let text = extract_kind(&bytes, kind)?;
        debug!("Extracted {} characters from {}", text.chars().count(), path.display());

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_kind(&self, path: &Path) -> Result<DocumentKind> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                SkillMatchError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(DocumentKind::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
