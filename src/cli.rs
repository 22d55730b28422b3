//! CLI interface for the skill matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "skillmatch")]
#[command(about = "Match a resume against job-role skill lists")]
#[command(long_about = "Score how well a resume covers the required skills of each job role, rank the roles, and report missing skills, courses and job postings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against the skill catalog
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Only score roles in this category
        #[arg(short = 'g', long)]
        category: Option<String>,

        /// Skill catalog file (TOML); overrides the configured catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Number of most frequently missing skills to report
        #[arg(short, long)]
        top_missing: Option<usize>,

        /// Output format: console, json, markdown, html, pdf
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Job postings file (JSON array)
        #[arg(short, long)]
        postings: Option<PathBuf>,

        /// Candidate name shown in reports
        #[arg(short, long)]
        name: Option<String>,

        /// Include frequency table, role tips and resume preview
        #[arg(short, long)]
        detailed: bool,
    },

    /// Inspect the skill catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Search job postings by role name
    Postings {
        /// Role name to look for in posting titles
        #[arg(short, long)]
        role: String,

        /// Job postings file (JSON array)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Maximum number of postings to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List categories, roles and required skills
    List {
        /// Only list this category
        #[arg(short = 'g', long)]
        category: Option<String>,

        /// Skill catalog file (TOML)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        "pdf" => Ok(OutputFormat::Pdf),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html, pdf", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
