//! SkillMatch: resume to job-role skill matcher

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use skillmatch::catalog::loader::CatalogData;
use skillmatch::catalog::{CategorizedCatalog, SkillCatalog};
use skillmatch::cli::{self, CatalogAction, Cli, Commands, ConfigAction};
use skillmatch::config::{Config, OutputFormat};
use skillmatch::input::InputManager;
use skillmatch::output::formatter::{save_report_to_file, suggest_filename};
use skillmatch::output::report::resume_preview;
use skillmatch::output::{ReportBuilder, ReportGenerator, ReportMetadata};
use skillmatch::processing::ScoringEngine;
use skillmatch::recommend::postings::PostingSearch;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            resume,
            category,
            catalog,
            top_missing,
            output,
            save,
            postings,
            name,
            detailed,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| anyhow!("Resume file: {}", e))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(|e| anyhow!(e))?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let catalog_path = catalog.or_else(|| config.catalog.path.clone());
            let data = CatalogData::load_or_builtin(catalog_path.as_deref())
                .context("Failed to load skill catalog")?;

            let category = category.or_else(|| config.catalog.default_category.clone());
            let selected = select_catalog(&data.catalog, category.as_deref())?;
            debug!("Scoring {} roles", selected.len());

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg}")
                    .map_err(|e| anyhow!("Invalid progress template: {}", e))?,
            );
            spinner.set_message(format!("Extracting text from {}", resume.display()));
            spinner.enable_steady_tick(Duration::from_millis(100));
            let extracted = InputManager::new().extract_text(&resume).await;
            spinner.finish_and_clear();
            let resume_text = extracted.with_context(|| format!("Failed to read resume {}", resume.display()))?;

            let mut options = config.scoring_options();
            if let Some(n) = top_missing {
                options.top_missing = n;
            }
            let result = ScoringEngine::new(options).score(&resume_text, &selected)?;

            let posting_search = match postings.or_else(|| config.postings.path.clone()) {
                Some(path) => Some(
                    PostingSearch::load(&path)
                        .with_context(|| format!("Failed to load job postings {}", path.display()))?,
                ),
                None => None,
            };

            let preview = detailed.then(|| resume_preview(&resume_text, config.output.preview_chars));
            let metadata = ReportMetadata::new(
                name.unwrap_or_else(|| config.output.candidate_name.clone()),
                resume.to_string_lossy(),
            )
            .with_category(category)
            .with_preview(preview);

            let mut builder = ReportBuilder::new(&data.tips, &data.courses)
                .with_top_roles(config.scoring.top_roles_in_report)
                .with_recommendations(config.output.include_recommendations);
            if let Some(search) = &posting_search {
                builder = builder.with_postings(search, config.postings.limit);
            }
            let report = builder.build(&result, metadata)?;

            let generator = ReportGenerator::with_options(config.output.color_output, detailed, true, true, true);
            let rendered = generator.generate_report(&report, &output_format)?;

            let save_path = match (save, output_format) {
                (Some(path), _) => Some(path),
                (None, OutputFormat::Pdf) => Some(PathBuf::from(suggest_filename(
                    &output_format,
                    &resume.to_string_lossy(),
                    false,
                ))),
                (None, _) => None,
            };

            match save_path {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("📄 Report saved to {}", path.display());
                }
                None => println!("{}", String::from_utf8_lossy(&rendered)),
            }
        }

        Commands::Catalog { action } => match action {
            CatalogAction::List { category, catalog } => {
                let catalog_path = catalog.or_else(|| config.catalog.path.clone());
                let data = CatalogData::load_or_builtin(catalog_path.as_deref())
                    .context("Failed to load skill catalog")?;

                if let Some(name) = &category {
                    // surfaces the "did you mean" hint for unknown names
                    select_catalog(&data.catalog, Some(name))?;
                }

                println!("📚 Skill Catalog\n");
                for group in data.catalog.categories() {
                    if let Some(name) = &category {
                        if !group.name.eq_ignore_ascii_case(name) {
                            continue;
                        }
                    }
                    println!("🎯 {}", group.name);
                    for role in group.catalog.iter() {
                        println!("  • {}: {}", role.role, role.skills.join(", "));
                        if let Some(tip) = data.tips.tip_for(&role.role) {
                            println!("    💡 {}", tip);
                        }
                    }
                    println!();
                }
                println!("{} course links available", data.courses.len());
            }
        },

        Commands::Postings { role, file, limit } => {
            let path = file
                .or_else(|| config.postings.path.clone())
                .ok_or_else(|| anyhow!("No postings file given; pass --file or set postings.path in the config"))?;
            let search = PostingSearch::load(&path)
                .with_context(|| format!("Failed to load job postings {}", path.display()))?;

            let hits = search.search(&role, limit.unwrap_or(config.postings.limit));
            if hits.is_empty() {
                println!("No job postings found for {}.", role);
            } else {
                println!("📌 Top Job Postings for {}:", role);
                for posting in hits {
                    println!("  🔹 {} at {} – {} ({})", posting.title, posting.company, posting.location, posting.url);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("{}", toml::to_string_pretty(&config).context("Failed to render configuration")?);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Narrow the catalog to one category, or use every role when none is given
fn select_catalog(catalog: &CategorizedCatalog, category: Option<&str>) -> anyhow::Result<SkillCatalog> {
    match category {
        None => Ok(catalog.flatten()),
        Some(name) => match catalog.category(name) {
            Some(selected) => Ok(selected.clone()),
            None => match catalog.closest_category(name) {
                Some(suggestion) => bail!("Unknown category '{}'. Did you mean '{}'?", name, suggestion),
                None => bail!(
                    "Unknown category '{}'. Available: {}",
                    name,
                    catalog.category_names().join(", ")
                ),
            },
        },
    }
}
