//! Skill catalogs: ordered role -> required skill lists, optionally grouped by category

pub mod loader;

use crate::error::{Result, SkillMatchError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Required skills for a single job role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirements {
    pub role: String,
    pub skills: Vec<String>,
}

impl RoleRequirements {
    pub fn new<S: Into<String>>(role: impl Into<String>, skills: impl IntoIterator<Item = S>) -> Self {
        Self {
            role: role.into(),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered mapping from role name to required skills.
///
/// Roles are kept in insertion order; scoring ties are broken on this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCatalog {
    roles: Vec<RoleRequirements>,
}

impl SkillCatalog {
    pub fn new(roles: Vec<RoleRequirements>) -> Self {
        Self { roles }
    }

    /// Build a catalog from `(role, skills)` pairs, keeping their order
    pub fn from_pairs<R, S, I>(pairs: impl IntoIterator<Item = (R, I)>) -> Self
    where
        R: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self {
            roles: pairs
                .into_iter()
                .map(|(role, skills)| RoleRequirements::new(role, skills))
                .collect(),
        }
    }

    pub fn roles(&self) -> &[RoleRequirements] {
        &self.roles
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleRequirements> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn get(&self, role: &str) -> Option<&[String]> {
        self.roles
            .iter()
            .find(|r| r.role == role)
            .map(|r| r.skills.as_slice())
    }

    /// Check the catalog can be scored.
    ///
    /// Rejects an empty catalog, roles without skills, blank skill names,
    /// skills repeated within a role (case-insensitive) and repeated role names.
    pub fn validate(&self) -> Result<()> {
        if self.roles.is_empty() {
            return Err(SkillMatchError::EmptyCatalog);
        }

        let mut seen_roles = HashSet::new();
        for entry in &self.roles {
            if !seen_roles.insert(entry.role.as_str()) {
                return Err(SkillMatchError::invalid_catalog(&entry.role, "role is listed more than once"));
            }

            if entry.skills.is_empty() {
                return Err(SkillMatchError::invalid_catalog(&entry.role, "role has no required skills"));
            }

            let mut seen_skills = HashSet::new();
            for skill in &entry.skills {
                // an empty pattern is a substring of every text
                if skill.trim().is_empty() {
                    return Err(SkillMatchError::invalid_catalog(&entry.role, "skill name is blank"));
                }
                if !seen_skills.insert(skill.to_lowercase()) {
                    return Err(SkillMatchError::invalid_catalog(
                        &entry.role,
                        format!("skill '{}' is listed more than once", skill),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// A named group of roles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub catalog: SkillCatalog,
}

/// Two-level catalog: category -> role -> skills, all ordered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedCatalog {
    categories: Vec<Category>,
}

impl CategorizedCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a category by name, ignoring case
    pub fn category(&self, name: &str) -> Option<&SkillCatalog> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| &c.catalog)
    }

    /// Every role of every category, categories first-to-last
    pub fn flatten(&self) -> SkillCatalog {
        SkillCatalog::new(
            self.categories
                .iter()
                .flat_map(|c| c.catalog.roles().iter().cloned())
                .collect(),
        )
    }

    /// Closest category name to `name`, for "did you mean" hints
    pub fn closest_category(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.categories
            .iter()
            .map(|c| (c.name.as_str(), strsim::jaro_winkler(&wanted, &c.name.to_lowercase())))
            .filter(|(_, similarity)| *similarity >= 0.7)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CategorizedCatalog {
        CategorizedCatalog::new(vec![
            Category {
                name: "Tech".to_string(),
                catalog: SkillCatalog::from_pairs([
                    ("Data Analyst", vec!["Python", "SQL"]),
                    ("Web Developer", vec!["HTML", "CSS"]),
                ]),
            },
            Category {
                name: "Design".to_string(),
                catalog: SkillCatalog::from_pairs([("UX Designer", vec!["Figma"])]),
            },
        ])
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog = SkillCatalog::from_pairs([
            ("Zeta", vec!["a"]),
            ("Alpha", vec!["b"]),
            ("Mid", vec!["c"]),
        ]);
        let roles: Vec<&str> = catalog.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(catalog.get("Alpha"), Some(&["b".to_string()][..]));
        assert_eq!(catalog.get("Missing"), None);
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        let err = SkillCatalog::default().validate().unwrap_err();
        assert!(matches!(err, SkillMatchError::EmptyCatalog));
    }

    #[test]
    fn test_validate_names_role_without_skills() {
        let catalog = SkillCatalog::from_pairs([
            ("Data Analyst", vec!["Python"]),
            ("Ghost Role", Vec::<&str>::new()),
        ]);
        match catalog.validate().unwrap_err() {
            SkillMatchError::InvalidCatalog { role, .. } => assert_eq!(role, "Ghost Role"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_duplicates_and_blank_skills() {
        let dup_skill = SkillCatalog::from_pairs([("Analyst", vec!["SQL", "sql"])]);
        assert!(matches!(dup_skill.validate(), Err(SkillMatchError::InvalidCatalog { .. })));

        let blank = SkillCatalog::from_pairs([("Analyst", vec!["SQL", "  "])]);
        assert!(matches!(blank.validate(), Err(SkillMatchError::InvalidCatalog { .. })));

        let dup_role = SkillCatalog::from_pairs([("Analyst", vec!["SQL"]), ("Analyst", vec!["Excel"])]);
        assert!(matches!(dup_role.validate(), Err(SkillMatchError::InvalidCatalog { .. })));
    }

    #[test]
    fn test_category_lookup_and_flatten() {
        let catalog = sample();
        assert_eq!(catalog.category_names(), vec!["Tech", "Design"]);
        assert_eq!(catalog.category("tech").map(|c| c.len()), Some(2));
        assert!(catalog.category("Marketing").is_none());

        let flat = catalog.flatten();
        let roles: Vec<&str> = flat.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["Data Analyst", "Web Developer", "UX Designer"]);
    }

    #[test]
    fn test_closest_category_suggestion() {
        let catalog = sample();
        assert_eq!(catalog.closest_category("Desing"), Some("Design"));
        assert_eq!(catalog.closest_category("zzzzzz"), None);
    }
}
