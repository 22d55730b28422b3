//! Literal substring matching of skill names against resume text

use crate::error::{Result, SkillMatchError};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashSet;

/// Finds which skills occur anywhere in a text.
///
/// A skill is found when its lowercase form is a substring of the text. ASCII
/// letters compare case-insensitively; other characters must already be
/// lowercase in the text. There is no word-boundary check, so "r" is found
/// inside "marketing".
pub struct SkillMatcher {
    automaton: AhoCorasick,
    patterns: Vec<String>,
}

impl SkillMatcher {
    pub fn new<S: AsRef<str>>(skills: impl IntoIterator<Item = S>) -> Result<Self> {
        let mut seen = HashSet::new();
        let patterns: Vec<String> = skills
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .filter(|s| seen.insert(s.clone()))
            .collect();

        // Standard semantics are required for overlapping search, which reports
        // every pattern occurrence including ones nested inside longer skills.
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| SkillMatchError::Matcher(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { automaton, patterns })
    }

    /// Lowercased skill names present in `text`
    pub fn find_in(&self, text: &str) -> Result<FoundSkills> {
        let mut found = HashSet::new();
        let iter = self
            .automaton
            .try_find_overlapping_iter(text)
            .map_err(|e| SkillMatchError::Matcher(e.to_string()))?;

        for mat in iter {
            found.insert(self.patterns[mat.pattern().as_usize()].clone());
            if found.len() == self.patterns.len() {
                break;
            }
        }

        Ok(FoundSkills { found })
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

/// Result of one matcher pass over a text
#[derive(Debug, Clone, Default)]
pub struct FoundSkills {
    found: HashSet<String>,
}

impl FoundSkills {
    pub fn contains(&self, skill: &str) -> bool {
        self.found.contains(&skill.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}
