//! Task model.
//!
//! A task is one unit of construction work inside a workflow: a trade
//! activity (framing, drywall), a gate (inspection), or an administrative
//! step (permits). Tasks carry their predecessor ids directly, so a task
//! list is also an adjacency list of the dependency DAG.
//!
//! # Time Representation
//! Durations are whole working days. There is no calendar: day 0 is the
//! project start and weekends/holidays are not modelled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WorkflowError;

/// Trade category of a task.
///
/// Drives phase assignment and is reported to downstream pricing layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    /// Design, permits, approvals.
    Planning,
    /// Clearing, excavation, grading, utilities.
    Sitework,
    /// Foundation and framing.
    Structural,
    /// Roofing, siding, windows, decks.
    Exterior,
    /// Electrical, plumbing and HVAC (rough-in and finish).
    Mechanical,
    /// Code inspections.
    Inspection,
    /// Insulation, drywall, interior build-out.
    Interior,
    /// Paint, trim, flooring, cabinets, fixtures.
    Finishes,
    /// Punch list, cleanup, handover.
    Completion,
}

impl TaskCategory {
    /// All categories in construction order.
    pub const ALL: [TaskCategory; 9] = [
        TaskCategory::Planning,
        TaskCategory::Sitework,
        TaskCategory::Structural,
        TaskCategory::Exterior,
        TaskCategory::Mechanical,
        TaskCategory::Inspection,
        TaskCategory::Interior,
        TaskCategory::Finishes,
        TaskCategory::Completion,
    ];

    /// Lowercase identifier used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Planning => "planning",
            TaskCategory::Sitework => "sitework",
            TaskCategory::Structural => "structural",
            TaskCategory::Exterior => "exterior",
            TaskCategory::Mechanical => "mechanical",
            TaskCategory::Inspection => "inspection",
            TaskCategory::Interior => "interior",
            TaskCategory::Finishes => "finishes",
            TaskCategory::Completion => "completion",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative complexity tier.
///
/// Used twice: as the project-level tier that selects the duration
/// multiplier, and as a per-task descriptive tag in the catalog. Only the
/// project-level tier affects durations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Simple scope, repetitive work.
    Low,
    /// Typical residential scope.
    #[default]
    Medium,
    /// Custom details, difficult access, tight tolerances.
    High,
}

impl Complexity {
    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Complexity::Low),
            "medium" => Ok(Complexity::Medium),
            "high" => Ok(Complexity::High),
            _ => Err(WorkflowError::InvalidComplexity(s.to_string())),
        }
    }
}

/// How a task's duration was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationMethod {
    /// Task-specific coefficients from the coefficient table.
    Parametric,
    /// Untabulated task; the default coefficient pair was used.
    DefaultCoefficients,
    /// Duration supplied directly by the caller.
    Manual,
}

/// Execution status placeholder.
///
/// Workflows are plans, so every generated task starts as `Pending`.
/// Tracking progress is left to the consumer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// A construction task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier, unique within a workflow (e.g. `wall-framing`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Trade category.
    pub category: TaskCategory,
    /// Qualitative complexity tag from the catalog.
    pub complexity: Complexity,
    /// Ids of tasks that must all complete before this one starts (AND-join).
    pub dependencies: Vec<String>,
    /// Duration in working days (>= 1 once estimated).
    #[serde(rename = "duration")]
    pub duration_days: u32,
    /// Provenance of `duration_days`.
    pub estimation_method: EstimationMethod,
    /// Status placeholder for downstream trackers.
    pub status: TaskStatus,
}

impl Task {
    /// Creates a task with a one-day manual duration and no dependencies.
    pub fn new(id: impl Into<String>, category: TaskCategory) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category,
            complexity: Complexity::Medium,
            dependencies: Vec::new(),
            duration_days: 1,
            estimation_method: EstimationMethod::Manual,
            status: TaskStatus::Pending,
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the complexity tag.
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Adds a predecessor id.
    pub fn with_dependency(mut self, predecessor_id: impl Into<String>) -> Self {
        self.dependencies.push(predecessor_id.into());
        self
    }

    /// Replaces the predecessor list.
    pub fn with_dependencies(mut self, predecessors: Vec<String>) -> Self {
        self.dependencies = predecessors;
        self
    }

    /// Sets a manual duration. Values below one day are raised to one.
    pub fn with_duration(mut self, days: u32) -> Self {
        self.duration_days = days.max(1);
        self.estimation_method = EstimationMethod::Manual;
        self
    }

    /// Whether this task has no predecessors.
    pub fn is_root(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Whether `id` is one of this task's predecessors.
    pub fn depends_on(&self, id: &str) -> bool {
        self.dependencies.iter().any(|d| d == id)
    }
}
