//! Job posting search by role name

use crate::error::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_POSTING_LIMIT: usize = 5;

fn not_available() -> String {
    "N/A".to_string()
}

fn no_url() -> String {
    "#".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default = "not_available")]
    pub title: String,
    #[serde(default = "not_available")]
    pub company: String,
    #[serde(default = "not_available")]
    pub location: String,
    #[serde(default = "no_url")]
    pub url: String,
}

/// In-memory posting list searched by title
#[derive(Debug, Clone, Default)]
pub struct PostingSearch {
    postings: Vec<JobPosting>,
}

impl PostingSearch {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }

    /// Load postings from a JSON array file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading job postings from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let postings: Vec<JobPosting> = serde_json::from_str(&content)?;
        Ok(Self::new(postings))
    }

    /// Postings whose title contains `role` (case-insensitive), in file order, at most `limit`
    pub fn search(&self, role: &str, limit: usize) -> Vec<&JobPosting> {
        let needle = role.to_lowercase();
        self.postings
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
