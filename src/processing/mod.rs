//! Skill matching, scoring and tier classification.
//!
//! Everything here is pure: no I/O, no logging, no shared state.

pub mod matcher;
pub mod scoring;
pub mod tier;

pub use scoring::{score, MatchRecord, ScoringEngine, ScoringOptions, ScoringResult, SkillFrequency};
pub use tier::{classify, Tier};
