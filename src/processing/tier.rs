//! Overall resume score tiers

use crate::error::{Result, SkillMatchError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STRONG_THRESHOLD: f64 = 80.0;
pub const MODERATE_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Strong,   // >= 80
    Moderate, // 60-80
    Weak,     // < 60
}

impl Tier {
    /// One-line feedback for the candidate
    pub fn feedback(&self) -> &'static str {
        match self {
            Tier::Strong => "Great match! You're well-prepared for most roles.",
            Tier::Moderate => "Decent fit. You can boost your match by improving missing skills.",
            Tier::Weak => "Low match. Add more relevant skills or project work to your resume.",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Strong => "STRONG",
            Tier::Moderate => "MODERATE",
            Tier::Weak => "WEAK",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Strong => "Strong",
            Tier::Moderate => "Moderate",
            Tier::Weak => "Weak",
        };
        write!(f, "{}", name)
    }
}

/// Bucket an average match score. Lower bounds are inclusive: 80.0 is Strong, 60.0 is Moderate.
pub fn classify(average_score: f64) -> Result<Tier> {
    if !(0.0..=100.0).contains(&average_score) {
        return Err(SkillMatchError::InvalidInput(format!(
            "average score must be within 0-100, got {}",
            average_score
        )));
    }

    Ok(if average_score >= STRONG_THRESHOLD {
        Tier::Strong
    } else if average_score >= MODERATE_THRESHOLD {
        Tier::Moderate
    } else {
        Tier::Weak
    })
}
