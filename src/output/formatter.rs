//! Output formatters: console, JSON, Markdown and HTML renderings of an analysis report

use crate::config::OutputFormat;
use crate::error::{Result, SkillMatchError};
use crate::output::pdf::PdfFormatter;
use crate::output::report::*;
use crate::processing::tier::Tier;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const BAR_WIDTH: usize = 40;

/// Trait for rendering analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<Vec<u8>>;
    fn supports_format(&self) -> OutputFormat;
}

/// Colored terminal output with a bar chart of role scores
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
    pdf_formatter: PdfFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SkillMatch Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; background: #f8f9fa; }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { text-align: center; border-bottom: 3px solid #4c78a8; padding-bottom: 20px; }
        h2 { color: #4c78a8; border-bottom: 2px solid #e9ecef; padding-bottom: 8px; }
        table { width: 100%; border-collapse: collapse; margin: 15px 0; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e9ecef; vertical-align: top; }
        .bar { background: #e9ecef; width: 200px; height: 14px; border-radius: 3px; }
        .bar-fill { background: #4c78a8; height: 14px; border-radius: 3px; }
        .tier { display: inline-block; padding: 6px 14px; border-radius: 20px; font-weight: bold; color: white; }
        .tier-strong { background: #28a745; }
        .tier-moderate { background: #ffc107; color: #000; }
        .tier-weak { background: #dc3545; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>SkillMatch Resume Analysis Report</h1>
        <p>Candidate: {{ candidate_name }} | Generated: {{ generated_at }}</p>

        <h2>Resume Score: {{ average_score }}%</h2>
        <p><span class="tier {{ tier_class }}">{{ tier }}</span> {{ feedback }}</p>
        {% if has_best_match %}
        <p><strong>Best Match:</strong> {{ best_role }} ({{ best_percent }}%)</p>
        <p><strong>Tip:</strong> {{ best_tip }}</p>
        {% endif %}

        <h2>Role Matches</h2>
        <table>
            <tr><th>Job</th><th>Match %</th><th></th><th>Matched Skills</th><th>Missing Skills</th><th>Role Tips</th></tr>
            {% for row in rows %}
            <tr>
                <td>{{ row.role }}</td>
                <td>{{ row.percent }}</td>
                <td><div class="bar"><div class="bar-fill" style="width: {{ row.bar_width }}%"></div></div></td>
                <td>{{ row.matched }}</td>
                <td>{{ row.missing }}</td>
                <td>{{ row.tip }}</td>
            </tr>
            {% endfor %}
        </table>

        {% if has_missing %}
        <h2>Top Missing Skills</h2>
        <ul>
            {% for skill in missing %}
            <li>{{ skill.skill }} (missing in {{ skill.count }} roles)</li>
            {% endfor %}
        </ul>
        {% endif %}

        {% if has_courses %}
        <h2>Recommended Courses</h2>
        <ul>
            {% for course in courses %}
            <li><a href="{{ course.url }}">{{ course.skill }}</a></li>
            {% endfor %}
        </ul>
        {% endif %}

        {% if has_postings %}
        <h2>Job Postings</h2>
        <ul>
            {% for posting in postings %}
            <li><a href="{{ posting.url }}">{{ posting.title }} at {{ posting.company }} ({{ posting.location }})</a></li>
            {% endfor %}
        </ul>
        {% endif %}

        <div class="metadata">
            <p>Generated by SkillMatch v{{ version }}</p>
            <p>Resume: {{ resume_file }} | Category: {{ category }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    candidate_name: String,
    generated_at: String,
    average_score: String,
    tier: String,
    tier_class: String,
    feedback: String,
    has_best_match: bool,
    best_role: String,
    best_percent: String,
    best_tip: String,
    rows: Vec<HtmlRoleRow>,
    has_missing: bool,
    missing: Vec<HtmlMissingSkill>,
    has_courses: bool,
    courses: Vec<HtmlLink>,
    has_postings: bool,
    postings: Vec<HtmlPosting>,
    version: String,
    resume_file: String,
    category: String,
}

struct HtmlRoleRow {
    role: String,
    percent: String,
    bar_width: String,
    matched: String,
    missing: String,
    tip: String,
}

struct HtmlMissingSkill {
    skill: String,
    count: usize,
}

struct HtmlLink {
    skill: String,
    url: String,
}

struct HtmlPosting {
    title: String,
    company: String,
    location: String,
    url: String,
}

fn format_timestamp(report: &AnalysisReport) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

fn category_label(report: &AnalysisReport) -> &str {
    report.metadata.category.as_deref().unwrap_or("All roles")
}

fn join_or_dash(skills: &[String]) -> String {
    if skills.is_empty() {
        "-".to_string()
    } else {
        skills.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn tier_color(tier: Tier) -> Color {
        match tier {
            Tier::Strong => Color::Green,
            Tier::Moderate => Color::Yellow,
            Tier::Weak => Color::Red,
        }
    }

    fn format_tier_badge(&self, tier: Tier) -> String {
        if self.use_colors {
            format!("[{}]", tier.label().color(Self::tier_color(tier)).bold())
        } else {
            format!("[{}]", tier.label())
        }
    }

    fn format_bar(&self, percent: f64) -> String {
        let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        self.colorize(&bar, Color::Blue)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<Vec<u8>> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 SKILLMATCH RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Candidate: {} | Category: {} | Generated: {}\n",
            report.metadata.candidate_name,
            category_label(report),
            format_timestamp(report)
        ));

        // Score and tier feedback
        output.push_str(&self.format_header(&format!("📈 Resume Score: {:.1}%", report.display_score()), 2));
        output.push_str(&format!(
            "{} {}\n",
            self.format_tier_badge(report.summary.tier),
            self.colorize(&report.summary.feedback, Self::tier_color(report.summary.tier))
        ));

        if let Some(best) = &report.summary.best_match {
            output.push_str(&format!(
                "Best Match: {} ({:.1}%)\n",
                self.colorize(&best.role, Color::Cyan),
                best.match_percent
            ));
            output.push_str(&format!("✅ Tip: {}\n", best.tip));
        }

        // Ranked table
        output.push_str(&self.format_header("Role Matches", 2));
        let role_width = report
            .roles
            .iter()
            .map(|r| r.record.role.chars().count())
            .max()
            .unwrap_or(4)
            .max(4);
        output.push_str(&format!("{:<width$}  {:>7}  Matched / Missing\n", "Job", "Match %", width = role_width));
        for role in &report.roles {
            output.push_str(&format!(
                "{:<width$}  {:>7.1}  {} / {}\n",
                role.record.role,
                role.record.match_percent,
                self.colorize(&join_or_dash(&role.record.matched_skills), Color::Green),
                self.colorize(&join_or_dash(&role.record.missing_skills), Color::Red),
                width = role_width
            ));
        }

        // Chart
        output.push_str(&self.format_header("📊 Match Score Chart", 2));
        for role in &report.roles {
            output.push_str(&format!(
                "{:<width$} {} {:>5.1}%\n",
                role.record.role,
                self.format_bar(role.record.match_percent),
                role.record.match_percent,
                width = role_width
            ));
        }

        if !report.top_missing_skills.is_empty() {
            output.push_str(&self.format_header("⚠️  Top Missing Skills", 2));
            output.push_str(&format!("{}\n", report.top_missing_skills.join(", ")));
        }

        if !report.courses.is_empty() {
            output.push_str(&self.format_header("📚 Recommended Courses", 2));
            for course in &report.courses {
                output.push_str(&format!("  • {}: {}\n", course.skill, self.colorize(&course.url, Color::BrightBlack)));
            }
        }

        if let (Some(best), Some(postings)) = (&report.summary.best_match, &report.postings) {
            output.push_str(&self.format_header("📌 Job Posting Recommendations", 2));
            if postings.is_empty() {
                output.push_str(&format!("No job postings found for {}.\n", best.role));
            } else {
                for posting in postings {
                    output.push_str(&format!(
                        "  🔹 {} at {} – {} ({})\n",
                        posting.title, posting.company, posting.location, posting.url
                    ));
                }
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Missing Skill Frequency", 3));
            for entry in &report.missing_skill_frequency {
                output.push_str(&format!("  {:<24} {}\n", entry.skill, entry.count));
            }

            output.push_str(&self.format_header("Role Tips", 3));
            for role in &report.roles {
                output.push_str(&format!("  • {}: {}\n", role.record.role, role.tip));
            }

            if let Some(preview) = &report.metadata.resume_preview {
                output.push_str(&self.format_header("📝 Resume Preview", 3));
                output.push_str(preview);
                output.push('\n');
            }
        }

        output.push_str(&format!(
            "\n{} Generated by SkillMatch v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.version
        ));

        Ok(output.into_bytes())
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<Vec<u8>> {
        if self.pretty {
            Ok(serde_json::to_vec_pretty(report)?)
        } else {
            Ok(serde_json::to_vec(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn tier_badge(tier: Tier) -> &'static str {
        match tier {
            Tier::Strong => "🟢 Strong",
            Tier::Moderate => "🟡 Moderate",
            Tier::Weak => "🔴 Weak",
        }
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<Vec<u8>> {
        let mut output = String::new();

        output.push_str("# 📊 SkillMatch Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Candidate:** {} | **Generated:** {}\n",
                report.metadata.candidate_name,
                format_timestamp(report)
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Category:** {}\n\n",
                file_name(&report.metadata.resume_file),
                category_label(report)
            ));
        }

        output.push_str(&format!(
            "## 📈 Resume Score: {:.1}% {}\n\n",
            report.display_score(),
            Self::tier_badge(report.summary.tier)
        ));
        output.push_str(&format!("{}\n\n", report.summary.feedback));

        if let Some(best) = &report.summary.best_match {
            output.push_str(&format!("**Best Match:** {} ({:.1}%)\n\n", best.role, best.match_percent));
            output.push_str(&format!("> ✅ Tip: {}\n\n", best.tip));
        }

        output.push_str("## Role Matches\n\n");
        output.push_str("| Job | Match % | Matched Skills | Missing Skills | Role Tips |\n");
        output.push_str("|-----|---------|----------------|----------------|-----------|\n");
        for role in &report.roles {
            output.push_str(&format!(
                "| {} | {:.1} | {} | {} | {} |\n",
                Self::escape_cell(&role.record.role),
                role.record.match_percent,
                Self::escape_cell(&role.record.matched_skills.join(", ")),
                Self::escape_cell(&role.record.missing_skills.join(", ")),
                Self::escape_cell(&role.tip)
            ));
        }
        output.push('\n');

        if !report.missing_skill_frequency.is_empty() {
            output.push_str("## ⚠️ Top Missing Skills\n\n");
            output.push_str("| Skill | Missing in roles |\n");
            output.push_str("|-------|------------------|\n");
            for skill in &report.top_missing_skills {
                let count = report
                    .missing_skill_frequency
                    .iter()
                    .find(|f| &f.skill == skill)
                    .map_or(0, |f| f.count);
                output.push_str(&format!("| {} | {} |\n", Self::escape_cell(skill), count));
            }
            output.push('\n');
        }

        if !report.courses.is_empty() {
            output.push_str("## 📚 Recommended Courses\n\n");
            for course in &report.courses {
                output.push_str(&format!("- [{}]({})\n", course.skill, course.url));
            }
            output.push('\n');
        }

        if let Some(postings) = report.postings.as_ref().filter(|p| !p.is_empty()) {
            output.push_str("## 📌 Job Postings\n\n");
            for posting in postings {
                output.push_str(&format!(
                    "- [{} at {} – {}]({})\n",
                    posting.title, posting.company, posting.location, posting.url
                ));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by SkillMatch v{}*\n", report.metadata.version));
        }

        Ok(output.into_bytes())
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let tier_class = match report.summary.tier {
            Tier::Strong => "tier-strong",
            Tier::Moderate => "tier-moderate",
            Tier::Weak => "tier-weak",
        };

        let rows = report
            .roles
            .iter()
            .map(|role| HtmlRoleRow {
                role: role.record.role.clone(),
                percent: format!("{:.1}", role.record.match_percent),
                bar_width: format!("{:.0}", role.record.match_percent),
                matched: join_or_dash(&role.record.matched_skills),
                missing: join_or_dash(&role.record.missing_skills),
                tip: role.tip.clone(),
            })
            .collect();

        let missing: Vec<HtmlMissingSkill> = report
            .top_missing_skills
            .iter()
            .map(|skill| HtmlMissingSkill {
                skill: skill.clone(),
                count: report
                    .missing_skill_frequency
                    .iter()
                    .find(|f| &f.skill == skill)
                    .map_or(0, |f| f.count),
            })
            .collect();

        let courses: Vec<HtmlLink> = report
            .courses
            .iter()
            .map(|c| HtmlLink {
                skill: c.skill.clone(),
                url: c.url.clone(),
            })
            .collect();

        let postings: Vec<HtmlPosting> = report
            .postings
            .iter()
            .flatten()
            .map(|p| HtmlPosting {
                title: p.title.clone(),
                company: p.company.clone(),
                location: p.location.clone(),
                url: p.url.clone(),
            })
            .collect();

        let best = report.summary.best_match.as_ref();

        HtmlTemplate {
            include_styles: self.include_styles,
            candidate_name: report.metadata.candidate_name.clone(),
            generated_at: format_timestamp(report),
            average_score: format!("{:.1}", report.display_score()),
            tier: report.summary.tier.to_string(),
            tier_class: tier_class.to_string(),
            feedback: report.summary.feedback.clone(),
            has_best_match: best.is_some(),
            best_role: best.map(|b| b.role.clone()).unwrap_or_default(),
            best_percent: best.map(|b| format!("{:.1}", b.match_percent)).unwrap_or_default(),
            best_tip: best.map(|b| b.tip.clone()).unwrap_or_default(),
            rows,
            has_missing: !missing.is_empty(),
            missing,
            has_courses: !courses.is_empty(),
            courses,
            has_postings: !postings.is_empty(),
            postings,
            version: report.metadata.version.clone(),
            resume_file: file_name(&report.metadata.resume_file),
            category: category_label(report).to_string(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<Vec<u8>> {
        let template_data = self.create_template_data(report);
        let html = template_data
            .render()
            .map_err(|e| SkillMatchError::OutputFormatting(e.to_string()))?;
        Ok(html.into_bytes())
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
            pdf_formatter: PdfFormatter::new(),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool, include_html_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
            pdf_formatter: PdfFormatter::new(),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<Vec<u8>> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
            OutputFormat::Pdf => &self.pdf_formatter,
        };
        debug_assert_eq!(formatter.supports_format(), *format);
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &[u8], file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
        OutputFormat::Pdf => "pdf",
    };

    format!("{}_skillmatch{}.{}", base_name, timestamp_suffix, extension)
}
