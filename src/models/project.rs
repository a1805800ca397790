//! Project request model.

use serde::{Deserialize, Serialize};

use super::Complexity;

/// Descriptor of the project a workflow is generated for.
///
/// Produced by the request-handling layer (after free-text parsing has
/// picked a project type). Square footage is not validated here: zero or
/// negative values flow through the duration formula, whose one-day floor
/// still applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    /// Project type identifier (e.g. `home-addition`).
    pub project_type: String,
    /// Conditioned floor area in square feet.
    pub square_footage: f64,
    /// Project-level complexity tier.
    pub complexity: Complexity,
}

impl ProjectRequest {
    /// Creates a request with medium complexity.
    pub fn new(project_type: impl Into<String>, square_footage: f64) -> Self {
        Self {
            project_type: project_type.into(),
            square_footage,
            complexity: Complexity::Medium,
        }
    }

    /// Sets the complexity tier.
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }
}

/// Normalizes a project-type key for catalog lookup.
///
/// Trims, lowercases and maps spaces/underscores to hyphens, so
/// `"Home Addition"` and `"home_addition"` both resolve to `home-addition`.
pub fn normalize_project_type(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}
