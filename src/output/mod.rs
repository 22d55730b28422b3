//! Report assembly and output formats

pub mod formatter;
pub mod pdf;
pub mod report;

pub use formatter::{ReportGenerator, OutputFormatter};
pub use report::{AnalysisReport, ReportBuilder, ReportMetadata};
