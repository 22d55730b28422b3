//! Lookups that turn scoring results into next steps: courses and job postings

pub mod courses;
pub mod postings;
