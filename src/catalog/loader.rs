//! Loading skill catalogs, role tips and course links from TOML

use crate::catalog::{CategorizedCatalog, Category, RoleRequirements, SkillCatalog};
use crate::error::{Result, SkillMatchError};
use crate::recommend::courses::CourseCatalog;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_CATALOG: &str = include_str!("../../data/default_catalog.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<CategoryEntry>,
    #[serde(default)]
    courses: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CategoryEntry {
    name: String,
    #[serde(default)]
    roles: Vec<RoleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoleEntry {
    name: String,
    #[serde(default)]
    skills: Vec<String>,
    tip: Option<String>,
}

/// Advice shown next to a role's result
#[derive(Debug, Clone, Default)]
pub struct RoleTips {
    tips: HashMap<String, String>,
}

impl RoleTips {
    pub fn new(tips: HashMap<String, String>) -> Self {
        Self { tips }
    }

    pub fn tip_for(&self, role: &str) -> Option<&str> {
        self.tips.get(role).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

/// Everything a catalog file provides
#[derive(Debug, Clone)]
pub struct CatalogData {
    pub catalog: CategorizedCatalog,
    pub tips: RoleTips,
    pub courses: CourseCatalog,
}

impl CatalogData {
    /// The catalog bundled with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| SkillMatchError::Configuration(format!("Failed to parse catalog: {}", e)))?;

        let mut tips = HashMap::new();
        let categories = file
            .categories
            .into_iter()
            .map(|category| {
                let roles = category
                    .roles
                    .into_iter()
                    .map(|role| {
                        if let Some(tip) = role.tip {
                            tips.insert(role.name.clone(), tip);
                        }
                        RoleRequirements::new(role.name, role.skills)
                    })
                    .collect();
                Category {
                    name: category.name,
                    catalog: SkillCatalog::new(roles),
                }
            })
            .collect();

        Ok(Self {
            catalog: CategorizedCatalog::new(categories),
            tips: RoleTips::new(tips),
            courses: CourseCatalog::new(file.courses),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading skill catalog from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let data = Self::from_toml_str(&content)?;
        debug!(
            "Catalog has {} categories, {} tips, {} course links",
            data.catalog.categories().len(),
            data.tips.len(),
            data.courses.len()
        );
        Ok(data)
    }

    /// Load `path` if given, otherwise fall back to the built-in catalog
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Using built-in skill catalog");
                Self::builtin()
            }
        }
    }
}
