//! Timeline (analysis result) model.
//!
//! A timeline is a read-only view derived from a task DAG with durations.
//! It is produced by [`TimelineAnalyzer`](crate::analysis::TimelineAnalyzer)
//! and never mutated afterwards.
//!
//! # Durations
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `standard_duration` | Every task back to back (upper bound) |
//! | `optimized_duration` | Waves run in parallel, each wave as long as its longest task |
//! | `cpm.project_duration` | Longest path (lower bound with unlimited crews) |

use serde::{Deserialize, Serialize};

/// Analysis result for one workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Sum of all task durations (days).
    pub standard_duration: u32,
    /// Sum over waves of the longest task in the wave (days).
    pub optimized_duration: u32,
    /// Greedy longest-task walk from the roots, as ordered task ids.
    pub critical_path: Vec<String>,
    /// Waves holding more than one task.
    pub parallel_groups: Vec<Vec<String>>,
    /// Every wave, indexed by dependency level.
    pub levels: Vec<Vec<String>>,
    /// Forward/backward pass timings.
    pub cpm: CpmSchedule,
    /// Compression figures.
    pub summary: TimelineSummary,
}

impl Timeline {
    /// Dependency level of a task, if it is part of the timeline.
    pub fn level_of(&self, task_id: &str) -> Option<usize> {
        self.levels
            .iter()
            .position(|wave| wave.iter().any(|id| id == task_id))
    }

    /// Position of a task on the critical path.
    pub fn critical_path_position(&self, task_id: &str) -> Option<usize> {
        self.critical_path.iter().position(|id| id == task_id)
    }

    /// Whether the task lies on the reported critical path.
    pub fn is_on_critical_path(&self, task_id: &str) -> bool {
        self.critical_path_position(task_id).is_some()
    }

    /// Days saved by running waves in parallel.
    pub fn days_saved(&self) -> u32 {
        self.standard_duration.saturating_sub(self.optimized_duration)
    }
}

/// Earliest/latest timings of a single task (days from project start).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTiming {
    pub task_id: String,
    pub earliest_start: u32,
    pub earliest_finish: u32,
    pub latest_start: u32,
    pub latest_finish: u32,
    /// `latest_start - earliest_start`; zero on the critical chain.
    pub total_float: u32,
}

impl TaskTiming {
    /// Whether the task has no slack.
    #[inline]
    pub fn is_critical(&self) -> bool {
        self.total_float == 0
    }
}

/// Critical Path Method result.
///
/// # Reference
/// Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpmSchedule {
    /// Length of the longest path (days).
    pub project_duration: u32,
    /// Per-task timings in topological order.
    pub timings: Vec<TaskTiming>,
    /// Zero-float task ids in topological order.
    pub critical_tasks: Vec<String>,
}

impl CpmSchedule {
    /// Timing record for a task.
    pub fn timing(&self, task_id: &str) -> Option<&TaskTiming> {
        self.timings.iter().find(|t| t.task_id == task_id)
    }
}

/// Schedule compression indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSummary {
    /// Number of tasks analysed.
    pub task_count: usize,
    /// Number of dependency waves.
    pub wave_count: usize,
    /// Size of the largest parallel group (1 when nothing overlaps).
    pub max_parallelism: usize,
    /// `standard_duration - optimized_duration`.
    pub days_saved: u32,
    /// `optimized_duration / standard_duration` (1.0 for an empty timeline).
    pub compression_ratio: f64,
    /// Sum of durations along the reported critical path.
    pub critical_path_duration: u32,
}
