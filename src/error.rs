//! Error types.
//!
//! Two layers: [`AnalysisError`] is raised by the timeline analyzer on
//! malformed task graphs; [`WorkflowError`] is what crate entry points
//! return. A failed generation never yields a partial workflow.

use thiserror::Error;

use crate::validation::ValidationError;

/// Structural problem found while analysing a task graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Duplicate task ID: {0}")]
    DuplicateTaskId(String),

    #[error("Circular dependency detected involving task '{0}'")]
    CyclicDependency(String),
}

/// Error returned by configuration loading and workflow generation.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error("Workflow generation failed for '{project_type}': {source}")]
    GenerationFailed {
        project_type: String,
        #[source]
        source: AnalysisError,
    },

    #[error("Invalid complexity tier: {0} (expected low, medium or high)")]
    InvalidComplexity(String),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_error_display() {
        let err = WorkflowError::GenerationFailed {
            project_type: "deck".to_string(),
            source: AnalysisError::CyclicDependency("joists".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Workflow generation failed for 'deck': Circular dependency detected involving task 'joists'"
        );
        assert_eq!(
            WorkflowError::Config("empty".to_string()).to_string(),
            "Configuration error: empty"
        );
    }

    #[test]
    fn test_invalid_config_lists_every_issue() {
        let err = WorkflowError::InvalidConfig(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate task ID: a"),
            ValidationError::new(ValidationErrorKind::CyclicDependency, "cycle at b"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Duplicate task ID: a; cycle at b"
        );
    }

    #[test]
    fn test_generation_failure_keeps_source() {
        use std::error::Error as _;
        let err = WorkflowError::GenerationFailed {
            project_type: "x".to_string(),
            source: AnalysisError::DuplicateTaskId("a".to_string()),
        };
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Duplicate task ID: a"));
    }
}
