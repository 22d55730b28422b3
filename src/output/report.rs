//! Report structures assembled from a finished scoring run

use crate::catalog::loader::RoleTips;
use crate::error::Result;
use crate::processing::scoring::{round_one_decimal, MatchRecord, ScoringResult, SkillFrequency};
use crate::processing::tier::Tier;
use crate::recommend::courses::{CourseCatalog, CourseRecommendation};
use crate::recommend::postings::{JobPosting, PostingSearch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

pub const NO_TIP: &str = "No tips available.";

/// Everything the formatters render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: AnalysisSummary,
    /// All roles, best match first
    pub roles: Vec<RoleResult>,
    pub missing_skill_frequency: Vec<SkillFrequency>,
    pub top_missing_skills: Vec<String>,
    pub courses: Vec<CourseRecommendation>,
    /// "Learn <skill>" lines for the top missing skills
    pub recommendations: Vec<String>,
    /// `None` when no postings source was given
    pub postings: Option<Vec<JobPosting>>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub average_score: f64,
    pub tier: Tier,
    pub feedback: String,
    pub best_match: Option<BestMatch>,
    /// Number of roles listed under "top matching jobs"
    pub top_roles: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestMatch {
    pub role: String,
    pub match_percent: f64,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResult {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub candidate_name: String,
    pub resume_file: String,
    /// Category scored, `None` for the whole catalog
    pub category: Option<String>,
    pub resume_preview: Option<String>,
}

/// Inputs for [`ReportBuilder`] other than the scoring result
pub struct ReportBuilder<'a> {
    tips: &'a RoleTips,
    courses: &'a CourseCatalog,
    postings: Option<&'a PostingSearch>,
    posting_limit: usize,
    top_roles: usize,
    include_recommendations: bool,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(tips: &'a RoleTips, courses: &'a CourseCatalog) -> Self {
        Self {
            tips,
            courses,
            postings: None,
            posting_limit: crate::recommend::postings::DEFAULT_POSTING_LIMIT,
            top_roles: 3,
            include_recommendations: true,
        }
    }

    pub fn with_postings(mut self, postings: &'a PostingSearch, limit: usize) -> Self {
        self.postings = Some(postings);
        self.posting_limit = limit;
        self
    }

    pub fn with_top_roles(mut self, top_roles: usize) -> Self {
        self.top_roles = top_roles;
        self
    }

    pub fn with_recommendations(mut self, include: bool) -> Self {
        self.include_recommendations = include;
        self
    }

    pub fn build(&self, result: &ScoringResult, metadata: ReportMetadata) -> Result<AnalysisReport> {
        let tier = result.tier()?;

        let tip_for = |role: &str| self.tips.tip_for(role).unwrap_or(NO_TIP).to_string();

        let best_match = result.best_match().map(|record| BestMatch {
            role: record.role.clone(),
            match_percent: record.match_percent,
            tip: tip_for(&record.role),
        });

        let roles = result
            .records
            .iter()
            .map(|record| RoleResult {
                record: record.clone(),
                tip: tip_for(&record.role),
            })
            .collect();

        let (courses, recommendations) = if self.include_recommendations {
            (
                self.courses.recommend(&result.top_missing_skills),
                result
                    .top_missing_skills
                    .iter()
                    .map(|skill| format!("Learn {}", skill))
                    .collect(),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        let postings = self.postings.map(|search| match result.best_match() {
            Some(best) => search
                .search(&best.role, self.posting_limit)
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        });

        Ok(AnalysisReport {
            summary: AnalysisSummary {
                average_score: result.average_score,
                tier,
                feedback: tier.feedback().to_string(),
                best_match,
                top_roles: self.top_roles,
            },
            roles,
            missing_skill_frequency: result.missing_skill_frequency.clone(),
            top_missing_skills: result.top_missing_skills.clone(),
            courses,
            recommendations,
            postings,
            metadata,
        })
    }
}

impl AnalysisReport {
    pub fn top_roles(&self) -> &[RoleResult] {
        &self.roles[..self.summary.top_roles.min(self.roles.len())]
    }

    /// Average score rounded half away from zero, like the per-role percents
    pub fn display_score(&self) -> f64 {
        round_one_decimal(self.summary.average_score)
    }
}

impl ReportMetadata {
    pub fn new(candidate_name: impl Into<String>, resume_file: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            candidate_name: candidate_name.into(),
            resume_file: resume_file.into(),
            category: None,
            resume_preview: None,
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_preview(mut self, preview: Option<String>) -> Self {
        self.resume_preview = preview;
        self
    }
}

/// First `max_graphemes` user-perceived characters of `text`, with "..." when cut
pub fn resume_preview(text: &str, max_graphemes: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let preview: String = graphemes.by_ref().take(max_graphemes).collect();
    if graphemes.next().is_some() {
        format!("{}...", preview.trim_end())
    } else {
        preview
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::SkillCatalog;
    use crate::processing::scoring::score;
    use std::collections::HashMap;

    pub(crate) fn sample_report() -> AnalysisReport {
        let catalog = SkillCatalog::from_pairs([
            ("Data Analyst", vec!["Python", "SQL", "Excel", "Tableau"]),
            ("Web Developer", vec!["HTML", "CSS", "JavaScript"]),
            ("Marketing Analyst", vec!["Excel", "Google Analytics", "SEO"]),
        ]);
        let result = score("python and html <b>css</b> enthusiast", &catalog).unwrap();

        let tips = RoleTips::new(HashMap::from([(
            "Web Developer".to_string(),
            "Include GitHub links to live websites.".to_string(),
        )]));
        let courses = CourseCatalog::new(HashMap::from([(
            "Excel".to_string(),
            "https://example.com/excel".to_string(),
        )]));
        let postings = PostingSearch::new(vec![JobPosting {
            title: "Junior Web Developer".to_string(),
            company: "Acme & Sons".to_string(),
            location: "Remote".to_string(),
            url: "https://jobs.example.com/1".to_string(),
        }]);

        ReportBuilder::new(&tips, &courses)
            .with_postings(&postings, 5)
            .build(&result, ReportMetadata::new("Jane <Doe>", "resumes/jane.pdf"))
            .unwrap()
    }

    #[test]
    fn test_report_summary_and_best_match_tip() {
        let report = sample_report();

        // Web Developer 66.7, Data Analyst 25.0, Marketing Analyst 0.0
        let best = report.summary.best_match.as_ref().unwrap();
        assert_eq!(best.role, "Web Developer");
        assert_eq!(best.match_percent, 66.7);
        assert_eq!(best.tip, "Include GitHub links to live websites.");
        assert_eq!(report.summary.tier, Tier::Weak);
        assert_eq!(report.display_score(), 30.6);
        assert_eq!(report.top_roles().len(), 3);
    }

    #[test]
    fn test_roles_without_tip_use_fallback() {
        let report = sample_report();
        let analyst = report.roles.iter().find(|r| r.record.role == "Data Analyst").unwrap();
        assert_eq!(analyst.tip, NO_TIP);
    }

    #[test]
    fn test_courses_and_postings_follow_lookups() {
        let report = sample_report();

        assert_eq!(report.top_missing_skills[0], "Excel");
        assert_eq!(report.courses.len(), 1);
        assert_eq!(report.courses[0].skill, "Excel");
        assert_eq!(report.recommendations[0], "Learn Excel");
        let postings = report.postings.as_ref().unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].title, "Junior Web Developer");
    }

    #[test]
    fn test_recommendations_can_be_disabled() {
        let catalog = SkillCatalog::from_pairs([("Analyst", vec!["SQL"])]);
        let result = score("", &catalog).unwrap();
        let tips = RoleTips::default();
        let courses = CourseCatalog::default();

        let report = ReportBuilder::new(&tips, &courses)
            .with_recommendations(false)
            .build(&result, ReportMetadata::new("Candidate", "cv.txt"))
            .unwrap();

        assert!(report.recommendations.is_empty());
        assert!(report.courses.is_empty());
        assert!(report.postings.is_none());
    }

    #[test]
    fn test_resume_preview_cuts_on_graphemes() {
        assert_eq!(resume_preview("short text", 100), "short text");
        assert_eq!(resume_preview("café résumé", 4), "café...");
        assert_eq!(resume_preview("ab cd", 3), "ab...");
    }
}
