//! Integration tests for skillmatch

use skillmatch::catalog::loader::CatalogData;
use skillmatch::config::OutputFormat;
use skillmatch::input::InputManager;
use skillmatch::output::{ReportBuilder, ReportGenerator, ReportMetadata};
use skillmatch::processing::{ScoringEngine, ScoringOptions, Tier};
use skillmatch::SkillMatchError;
use std::path::Path;

async fn sample_text() -> String {
    let mut manager = InputManager::new();
    manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let text = sample_text().await;

    assert!(text.contains("jane doe"));
    assert!(text.contains("python, sql, excel, tableau"));
    assert_eq!(text, text.to_lowercase());
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    assert!(text.contains("jane doe"));
    assert!(text.contains("tableau"));
    assert!(text.contains("northwind traders"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(SkillMatchError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(matches!(result, Err(SkillMatchError::InvalidInput(_))));
}

#[tokio::test]
async fn test_scoring_against_one_category() {
    let text = sample_text().await;
    let data = CatalogData::builtin().unwrap();
    let tech = data.catalog.category("tech").unwrap();

    let result = ScoringEngine::default().score(&text, tech).unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].role, "Data Analyst");
    assert_eq!(result.records[0].match_percent, 100.0);
    assert!(result.records[0].missing_skills.is_empty());
    assert_eq!(result.records[1].role, "Web Developer");
    assert_eq!(result.records[1].match_percent, 0.0);
    assert_eq!(result.average_score, 50.0);
    assert_eq!(result.tier().unwrap(), Tier::Weak);
    assert_eq!(result.top_missing_skills, vec!["HTML", "CSS", "JavaScript"]);
}

#[tokio::test]
async fn test_scoring_against_whole_catalog() {
    let text = sample_text().await;
    let data = CatalogData::builtin().unwrap();
    let catalog = data.catalog.flatten();

    let result = ScoringEngine::new(ScoringOptions { top_missing: 5 })
        .score(&text, &catalog)
        .unwrap();

    let ranked: Vec<(&str, f64)> = result
        .records
        .iter()
        .map(|r| (r.role.as_str(), r.match_percent))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Data Analyst", 100.0),
            ("Marketing Analyst", 33.3),
            ("Web Developer", 0.0),
            ("UX Designer", 0.0),
        ]
    );
    assert!((result.average_score - 33.325).abs() < 1e-9);
    assert_eq!(
        result.top_missing_skills,
        vec!["HTML", "CSS", "JavaScript", "Google Analytics", "SEO"]
    );
}

#[tokio::test]
async fn test_json_report_end_to_end() {
    let text = sample_text().await;
    let data = CatalogData::builtin().unwrap();
    let catalog = data.catalog.flatten();
    let result = ScoringEngine::default().score(&text, &catalog).unwrap();

    let report = ReportBuilder::new(&data.tips, &data.courses)
        .build(&result, ReportMetadata::new("Jane Doe", "tests/fixtures/sample_resume.txt"))
        .unwrap();
    let bytes = ReportGenerator::new()
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["summary"]["tier"], "Weak");
    assert_eq!(json["summary"]["best_match"]["role"], "Data Analyst");
    assert_eq!(
        json["summary"]["best_match"]["tip"],
        "Highlight SQL and Tableau project experience."
    );
    assert_eq!(json["roles"][0]["match_percent"], 100.0);
    assert_eq!(json["metadata"]["candidate_name"], "Jane Doe");
    assert_eq!(json["recommendations"][0], "Learn HTML");
}

#[tokio::test]
async fn test_pdf_report_end_to_end() {
    let text = sample_text().await;
    let data = CatalogData::builtin().unwrap();
    let result = ScoringEngine::default()
        .score(&text, &data.catalog.flatten())
        .unwrap();

    let report = ReportBuilder::new(&data.tips, &data.courses)
        .build(&result, ReportMetadata::new("Jane Doe", "sample_resume.txt"))
        .unwrap();
    let bytes = ReportGenerator::new()
        .generate_report(&report, &OutputFormat::Pdf)
        .unwrap();

    assert!(bytes.starts_with(b"%PDF-"));
}
