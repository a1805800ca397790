//! Workflow generation.
//!
//! [`WorkflowEngine`] answers a [`ProjectRequest`] with a [`Workflow`]:
//!
//! 1. Select the task list for the project type (generic fallback for
//!    unknown types)
//! 2. Attach rule-table predecessors present in the list
//! 3. Estimate every task's duration from area and complexity
//! 4. Analyse levels, parallel groups, durations and the critical path
//! 5. Group tasks into presentation phases
//!
//! The engine holds no mutable state. Clones share one configuration, and a
//! single engine can serve concurrent requests.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::analysis::TimelineAnalyzer;
use crate::config::EngineConfig;
use crate::error::{Result, WorkflowError};
use crate::graph::DependencyGraphBuilder;
use crate::models::{Complexity, ProjectRequest, Workflow};
use crate::phases::PhaseOrganizer;

/// Generates construction workflows from a shared configuration.
///
/// # Example
/// ```
/// use u_construct::engine::WorkflowEngine;
/// use u_construct::models::{Complexity, ProjectRequest};
///
/// let engine = WorkflowEngine::builtin().unwrap();
/// let request = ProjectRequest::new("kitchen-remodel", 200.0).with_complexity(Complexity::High);
/// let workflow = engine.generate(&request).unwrap();
///
/// assert!(!workflow.used_fallback);
/// assert!(workflow.optimized_duration() <= workflow.standard_duration());
/// ```
#[derive(Debug, Clone)]
pub struct WorkflowEngine {
    config: Arc<EngineConfig>,
}

impl WorkflowEngine {
    /// Creates an engine over a validated configuration.
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    /// Creates an engine over the built-in configuration.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(EngineConfig::builtin()?)))
    }

    /// The configuration this engine reads from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates the workflow for a request.
    ///
    /// Unknown project types fall back to the generic list. Rule edges to
    /// tasks outside the selected list are dropped and reported in
    /// [`Workflow::dropped_dependencies`].
    ///
    /// # Errors
    /// [`WorkflowError::GenerationFailed`] if the selected list cannot be
    /// analysed. A validated configuration never produces this.
    pub fn generate(&self, request: &ProjectRequest) -> Result<Workflow> {
        debug!(
            project_type = %request.project_type,
            square_footage = request.square_footage,
            complexity = %request.complexity,
            "generating workflow"
        );

        let selection = self.config.catalog().select(&request.project_type);
        if selection.is_fallback {
            warn!(
                requested = %request.project_type,
                fallback = selection.project_type,
                "unknown project type, using fallback task list"
            );
        }

        let graph = DependencyGraphBuilder::new(self.config.rules())
            .build(selection.entries)
            .with_estimates(self.config.estimator(), request.square_footage, request.complexity);

        let timeline = TimelineAnalyzer::new()
            .analyze(&graph.tasks)
            .map_err(|source| WorkflowError::GenerationFailed {
                project_type: selection.project_type.to_string(),
                source,
            })?;

        let phases = PhaseOrganizer::new().organize(&graph.tasks);

        debug!(
            project_type = selection.project_type,
            tasks = graph.tasks.len(),
            dropped = graph.dropped.len(),
            standard_duration = timeline.standard_duration,
            optimized_duration = timeline.optimized_duration,
            "workflow generated"
        );

        Ok(Workflow {
            request: request.clone(),
            resolved_project_type: selection.project_type.to_string(),
            used_fallback: selection.is_fallback,
            tasks: graph.tasks,
            timeline,
            phases,
            dropped_dependencies: graph.dropped,
        })
    }

    /// Generates a workflow from loose arguments.
    ///
    /// `complexity` is parsed case-insensitively (`"low"`, `"medium"`,
    /// `"high"`).
    pub fn generate_for(&self, project_type: &str, square_footage: f64, complexity: &str) -> Result<Workflow> {
        let complexity = Complexity::from_str(complexity)?;
        let request = ProjectRequest::new(project_type, square_footage).with_complexity(complexity);
        self.generate(&request)
    }
}
