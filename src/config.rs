//! Engine configuration.
//!
//! Bundles the three read-only tables a [`WorkflowEngine`](crate::engine::WorkflowEngine)
//! works from: the task catalog, the dependency rule table and the duration
//! estimator. A configuration is validated once when it is built and never
//! mutated afterwards, so it can be shared across threads behind an `Arc`.
//!
//! # TOML layout
//!
//! ```toml
//! [catalog]
//! fallback = "generic"
//!
//! [[catalog.projects.generic]]
//! id = "permits"
//! name = "Permits"
//! category = "planning"
//! complexity = "low"
//!
//! [rules]
//! drywall = ["permits"]
//!
//! [estimator.default_coefficients]
//! base = 2.0
//! per_sq_ft = 0.002
//!
//! [estimator.coefficients]
//! permits = { base = 5.0, per_sq_ft = 0.0 }
//! ```
//!
//! `rules` and `estimator` may be omitted; the estimator then uses the
//! default coefficient pair and multipliers.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::catalog::TaskCatalog;
use crate::error::{Result, WorkflowError};
use crate::estimator::DurationEstimator;
use crate::models::normalize_project_type;
use crate::rules::DependencyRules;
use crate::validation::validate_config;

const BUILTIN_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Deserialize)]
struct ConfigDocument {
    catalog: TaskCatalog,
    #[serde(default)]
    rules: DependencyRules,
    #[serde(default)]
    estimator: DurationEstimator,
}

/// Validated catalog, rule table and estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    catalog: TaskCatalog,
    rules: DependencyRules,
    estimator: DurationEstimator,
}

impl EngineConfig {
    /// Builds a configuration from its parts.
    ///
    /// Project-type keys and the fallback key are normalized first, then the
    /// whole configuration is validated.
    ///
    /// # Errors
    /// [`WorkflowError::Config`] if two project types normalize to the same
    /// key, [`WorkflowError::InvalidConfig`] with every validation failure
    /// otherwise.
    pub fn new(catalog: TaskCatalog, rules: DependencyRules, estimator: DurationEstimator) -> Result<Self> {
        let catalog = normalize_catalog(catalog)?;
        validate_config(&catalog, &rules, &estimator).map_err(WorkflowError::InvalidConfig)?;

        Ok(Self {
            catalog,
            rules,
            estimator,
        })
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let doc: ConfigDocument = toml::from_str(source)?;
        Self::new(doc.catalog, doc.rules, doc.estimator)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;

        info!(
            path = %path.display(),
            project_types = config.catalog.projects.len(),
            rules = config.rules.len(),
            "workflow configuration loaded"
        );

        Ok(config)
    }

    /// The built-in residential construction configuration.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CONFIG)
    }

    /// Task lists per project type.
    pub fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    /// Global dependency rule table.
    pub fn rules(&self) -> &DependencyRules {
        &self.rules
    }

    /// Duration estimator.
    pub fn estimator(&self) -> &DurationEstimator {
        &self.estimator
    }
}

fn normalize_catalog(catalog: TaskCatalog) -> Result<TaskCatalog> {
    let mut projects = BTreeMap::new();
    for (raw, entries) in catalog.projects {
        let key = normalize_project_type(&raw);
        if projects.insert(key.clone(), entries).is_some() {
            return Err(WorkflowError::Config(format!(
                "project type '{raw}' collides with another entry as '{key}'"
            )));
        }
    }

    Ok(TaskCatalog {
        fallback: normalize_project_type(&catalog.fallback),
        projects,
    })
}
