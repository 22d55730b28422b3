//! Skill -> learning resource lookup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub skill: String,
    pub url: String,
}

/// Course links keyed by skill name
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    links: HashMap<String, String>,
}

impl CourseCatalog {
    pub fn new(links: HashMap<String, String>) -> Self {
        Self { links }
    }

    pub fn link_for(&self, skill: &str) -> Option<&str> {
        self.links.get(skill).map(String::as_str)
    }

    /// Course links for `skills`, in the given order. Skills without a link are skipped.
    pub fn recommend<S: AsRef<str>>(&self, skills: &[S]) -> Vec<CourseRecommendation> {
        skills
            .iter()
            .filter_map(|skill| {
                let skill = skill.as_ref();
                self.link_for(skill).map(|url| CourseRecommendation {
                    skill: skill.to_string(),
                    url: url.to_string(),
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_keeps_order_and_skips_unknown() {
        let catalog = CourseCatalog::new(HashMap::from([
            ("SQL".to_string(), "https://example.com/sql".to_string()),
            ("Tableau".to_string(), "https://example.com/tableau".to_string()),
        ]));

        let recs = catalog.recommend(&["Tableau", "Cobol", "SQL"]);
        let skills: Vec<&str> = recs.iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(skills, vec!["Tableau", "SQL"]);
        assert_eq!(recs[1].url, "https://example.com/sql");
    }

    #[test]
    fn test_missing_link_is_not_an_error() {
        let catalog = CourseCatalog::default();
        assert!(catalog.link_for("Rust").is_none());
        assert!(catalog.recommend(&["Rust".to_string()]).is_empty());
    }
}
