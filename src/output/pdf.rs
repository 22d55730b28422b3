//! PDF summary report rendered with printpdf

use crate::config::OutputFormat;
use crate::error::{Result, SkillMatchError};
use crate::output::formatter::OutputFormatter;
use crate::output::report::AnalysisReport;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 7.0;
const BODY_SIZE: f32 = 11.0;
/// Characters per body line before wrapping
const WRAP_AT: usize = 90;

pub struct PdfFormatter;

impl PdfFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfFormatter {
    fn default() -> Self {
        Self::new()
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

/// Writes lines top to bottom, starting a new page when the current one is full
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    fonts: &'a Fonts,
    layer: PdfLayerReference,
    y: f32,
    pages: usize,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, fonts: &'a Fonts, layer: PdfLayerReference) -> Self {
        let mut writer = Self {
            doc,
            fonts,
            layer,
            y: PAGE_HEIGHT - MARGIN,
            pages: 1,
        };
        writer.page_header();
        writer
    }

    fn page_header(&mut self) {
        self.layer.use_text(
            "SkillMatch Resume Analysis Report",
            14.0,
            Mm(MARGIN + 35.0),
            Mm(self.y),
            &self.fonts.bold,
        );
        self.layer.use_text(
            "Generated by SkillMatch",
            8.0,
            Mm(PAGE_WIDTH / 2.0 - 17.0),
            Mm(MARGIN / 2.0),
            &self.fonts.italic,
        );
        self.y -= LINE_HEIGHT * 2.0;
    }

    fn ensure_space(&mut self) {
        if self.y < MARGIN + LINE_HEIGHT {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
            self.pages += 1;
            self.page_header();
        }
    }

    fn heading(&mut self, text: &str) {
        self.gap();
        self.ensure_space();
        self.layer.use_text(text, 12.0, Mm(MARGIN), Mm(self.y), &self.fonts.bold);
        self.y -= LINE_HEIGHT;
    }

    fn line(&mut self, text: &str) {
        for chunk in wrap(text, WRAP_AT) {
            self.ensure_space();
            self.layer.use_text(chunk, BODY_SIZE, Mm(MARGIN), Mm(self.y), &self.fonts.regular);
            self.y -= LINE_HEIGHT;
        }
    }

    fn gap(&mut self) {
        self.y -= LINE_HEIGHT / 2.0;
    }
}

/// Split on whitespace into lines of at most `width` characters; longer words get their own line
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn pdf_error(e: impl std::fmt::Display) -> SkillMatchError {
    SkillMatchError::OutputFormatting(format!("PDF generation failed: {}", e))
}

impl PdfFormatter {
    /// Render `report`, returning the document bytes and its page count
    fn render(&self, report: &AnalysisReport) -> Result<(Vec<u8>, usize)> {
        let (doc, page, layer) = PdfDocument::new(
            "SkillMatch Resume Analysis Report",
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let fonts = Fonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?,
            italic: doc.add_builtin_font(BuiltinFont::HelveticaOblique).map_err(pdf_error)?,
        };

        let pages = {
            let first_layer = doc.get_page(page).get_layer(layer);
            let mut writer = PageWriter::new(&doc, &fonts, first_layer);

            writer.line(&format!("Candidate Name: {}", report.metadata.candidate_name));
            writer.line(&format!("Overall Resume Score: {:.1}%", report.display_score()));
            writer.line(&format!("Assessment: {} - {}", report.summary.tier, report.summary.feedback));

            writer.heading("Top Matching Jobs:");
            for role in report.top_roles() {
                writer.line(&format!("- {} ({:.1}%)", role.record.role, role.record.match_percent));
            }

            writer.heading("Top Missing Skills:");
            if report.top_missing_skills.is_empty() {
                writer.line("None");
            } else {
                writer.line(&report.top_missing_skills.join(", "));
            }

            if !report.recommendations.is_empty() {
                writer.heading("Recommendations:");
                for tip in &report.recommendations {
                    writer.line(&format!("- {}", tip));
                }
            }

            if !report.courses.is_empty() {
                writer.heading("Recommended Courses:");
                for course in &report.courses {
                    writer.line(&format!("- {}: {}", course.skill, course.url));
                }
            }

            if let Some(best) = &report.summary.best_match {
                writer.heading("Career Tip:");
                writer.line(&format!("{}: {}", best.role, best.tip));
            }

            log::debug!("PDF report rendered on {} page(s)", writer.pages);
            writer.pages
        };

        let bytes = doc.save_to_bytes().map_err(pdf_error)?;
        Ok((bytes, pages))
    }
}

impl OutputFormatter for PdfFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<Vec<u8>> {
        self.render(report).map(|(bytes, _)| bytes)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::tests::sample_report;

    #[test]
    fn test_pdf_has_pdf_header() {
        let bytes = PdfFormatter::new().format_report(&sample_report()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_wrap_breaks_long_lines() {
        let text = "alpha beta gamma delta";
        assert_eq!(wrap(text, 11), vec!["alpha beta", "gamma delta"]);
        assert_eq!(wrap(text, 100), vec![text]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_long_report_spills_onto_more_pages() {
        let mut report = sample_report();
        report.recommendations = (0..80).map(|i| format!("Learn skill number {}", i)).collect();
        let (bytes, pages) = PdfFormatter::new().render(&report).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(pages > 1, "expected several pages, got {}", pages);

        let (_, pages) = PdfFormatter::new().render(&sample_report()).unwrap();
        assert_eq!(pages, 1);
    }
}
