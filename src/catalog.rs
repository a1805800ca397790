//! Task catalog.
//!
//! Static task lists per project type. A lookup for an unknown project
//! type answers with the generic fallback list rather than an error, so a
//! request always produces some workflow.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{normalize_project_type, Complexity, TaskCategory};

/// One catalog line: a task template without dependencies or duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Task identifier, shared across project types.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Trade category.
    pub category: TaskCategory,
    /// Qualitative complexity tag.
    #[serde(default)]
    pub complexity: Complexity,
}

impl CatalogEntry {
    /// Creates an entry with medium complexity.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: TaskCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            complexity: Complexity::Medium,
        }
    }

    /// Sets the complexity tag.
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }
}

/// Result of a catalog lookup.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSelection<'a> {
    /// Catalog key that was matched.
    pub project_type: &'a str,
    /// Task templates in catalog order.
    pub entries: &'a [CatalogEntry],
    /// Whether the fallback list answered the lookup.
    pub is_fallback: bool,
}

/// Task lists keyed by project type, plus the generic fallback key.
///
/// The fallback key must name one of the lists; configuration validation
/// enforces this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCatalog {
    /// Key of the list used for unrecognized project types.
    pub fallback: String,
    /// Project type → ordered task templates.
    #[serde(default)]
    pub projects: BTreeMap<String, Vec<CatalogEntry>>,
}

impl TaskCatalog {
    /// Creates an empty catalog whose fallback is `fallback`.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            projects: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a project type's task list.
    pub fn with_project(mut self, project_type: impl Into<String>, entries: Vec<CatalogEntry>) -> Self {
        self.projects
            .insert(normalize_project_type(&project_type.into()), entries);
        self
    }

    /// Looks up a project type, falling back to the generic list.
    pub fn select(&self, project_type: &str) -> CatalogSelection<'_> {
        let key = normalize_project_type(project_type);
        if let Some((name, entries)) = self.projects.get_key_value(&key) {
            return CatalogSelection {
                project_type: name,
                entries,
                is_fallback: false,
            };
        }

        match self.projects.get_key_value(&self.fallback) {
            Some((name, entries)) => CatalogSelection {
                project_type: name,
                entries,
                is_fallback: true,
            },
            None => CatalogSelection {
                project_type: &self.fallback,
                entries: &[],
                is_fallback: true,
            },
        }
    }

    /// Whether the project type has its own list.
    pub fn contains(&self, project_type: &str) -> bool {
        self.projects
            .contains_key(&normalize_project_type(project_type))
    }

    /// Known project types in key order.
    pub fn project_types(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    /// Every entry across all lists (duplicates across lists included).
    pub fn all_entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.projects.values().flatten()
    }
}
