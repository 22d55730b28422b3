//! SkillMatch library: resume to job-role skill matching

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod recommend;

pub use catalog::{CategorizedCatalog, RoleRequirements, SkillCatalog};
pub use config::Config;
pub use error::{Result, SkillMatchError};
pub use processing::{classify, score, MatchRecord, ScoringEngine, ScoringOptions, ScoringResult, Tier};
