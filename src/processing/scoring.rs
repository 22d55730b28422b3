//! Skill match scoring: per-role match percentages, ranking and missing-skill aggregation

use crate::catalog::SkillCatalog;
use crate::error::Result;
use crate::processing::matcher::SkillMatcher;
use crate::processing::tier::{classify, Tier};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_TOP_MISSING: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOptions {
    /// How many of the most frequently missing skills to report
    pub top_missing: usize,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            top_missing: DEFAULT_TOP_MISSING,
        }
    }
}

/// Match outcome for one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub role: String,
    /// 0-100, one decimal place
    pub match_percent: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl MatchRecord {
    pub fn required_count(&self) -> usize {
        self.matched_skills.len() + self.missing_skills.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFrequency {
    pub skill: String,
    pub count: usize,
}

/// Outcome of one scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Best match first; equal scores keep catalog order
    pub records: Vec<MatchRecord>,
    /// Unweighted mean of every record's `match_percent`
    pub average_score: f64,
    /// Missing-skill counts in order of first appearance, scanning roles in catalog order
    pub missing_skill_frequency: Vec<SkillFrequency>,
    pub top_missing_skills: Vec<String>,
}

impl ScoringResult {
    pub fn best_match(&self) -> Option<&MatchRecord> {
        self.records.first()
    }

    pub fn top_records(&self, n: usize) -> &[MatchRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Number of roles missing `skill`; zero when it is never missing
    pub fn frequency_of(&self, skill: &str) -> usize {
        self.missing_skill_frequency
            .iter()
            .find(|f| f.skill == skill)
            .map_or(0, |f| f.count)
    }

    pub fn tier(&self) -> Result<Tier> {
        classify(self.average_score)
    }
}

/// Scores resume text against a skill catalog
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    options: ScoringOptions,
}

impl ScoringEngine {
    pub fn new(options: ScoringOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    /// Score `resume_text` against every role in `catalog`.
    ///
    /// The text is expected to be lowercased already. A skill counts as present
    /// when it occurs anywhere in the text as a substring. Fails without a
    /// partial result when the catalog is empty or any role is malformed.
    pub fn score(&self, resume_text: &str, catalog: &SkillCatalog) -> Result<ScoringResult> {
        catalog.validate()?;

        let matcher = SkillMatcher::new(catalog.iter().flat_map(|r| r.skills.iter()))?;
        let found = matcher.find_in(resume_text)?;

        let mut records: Vec<MatchRecord> = catalog
            .iter()
            .map(|entry| {
                let (matched_skills, missing_skills): (Vec<String>, Vec<String>) =
                    entry.skills.iter().cloned().partition(|skill| found.contains(skill));
                let match_percent =
                    round_one_decimal(100.0 * matched_skills.len() as f64 / entry.skills.len() as f64);

                MatchRecord {
                    role: entry.role.clone(),
                    match_percent,
                    matched_skills,
                    missing_skills,
                }
            })
            .collect();

        // counted in catalog order, so ties among missing skills do not depend on ranking
        let missing_skill_frequency = count_missing(&records);
        let top_missing_skills = top_missing(&missing_skill_frequency, self.options.top_missing);

        // sort_by is stable
        records.sort_by(|a, b| b.match_percent.total_cmp(&a.match_percent));

        let average_score = records.iter().map(|r| r.match_percent).sum::<f64>() / records.len() as f64;

        Ok(ScoringResult {
            records,
            average_score,
            missing_skill_frequency,
            top_missing_skills,
        })
    }
}

/// Score with default options
pub fn score(resume_text: &str, catalog: &SkillCatalog) -> Result<ScoringResult> {
    ScoringEngine::default().score(resume_text, catalog)
}

/// Round to one decimal place, halves away from zero (6.25 -> 6.3)
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn count_missing(records: &[MatchRecord]) -> Vec<SkillFrequency> {
    let mut frequency: Vec<SkillFrequency> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for skill in records.iter().flat_map(|r| r.missing_skills.iter()) {
        match index.get(skill.as_str()) {
            Some(&i) => frequency[i].count += 1,
            None => {
                index.insert(skill.as_str(), frequency.len());
                frequency.push(SkillFrequency {
                    skill: skill.clone(),
                    count: 1,
                });
            }
        }
    }

    frequency
}

fn top_missing(frequency: &[SkillFrequency], n: usize) -> Vec<String> {
    let mut ranked: Vec<&SkillFrequency> = frequency.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.into_iter().take(n).map(|f| f.skill.clone()).collect()
}
