//! Phase organizer.
//!
//! Regroups tasks into presentation phases by category, refined by id
//! substrings where one category spans two phases:
//!
//! | Category | Id contains | Phase |
//! |----------|-------------|-------|
//! | structural | `foundation` / `footing` | Foundation |
//! | structural | otherwise | Framing |
//! | mechanical | `finish` | Mechanical Finish |
//! | mechanical | otherwise | Mechanical Rough |
//!
//! Every other category maps to a single phase. The grouping is a pure
//! function of the task list, so applying it twice gives the same result.

use crate::models::{Phase, PhaseGrouping, Task, TaskCategory};

/// Assigns tasks to presentation phases.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseOrganizer;

impl PhaseOrganizer {
    /// Creates an organizer.
    pub fn new() -> Self {
        Self
    }

    /// Phase for a single task.
    pub fn phase_for(&self, task: &Task) -> Phase {
        let id = task.id.to_ascii_lowercase();
        match task.category {
            TaskCategory::Planning => Phase::Planning,
            TaskCategory::Sitework => Phase::SiteWork,
            TaskCategory::Structural => {
                if id.contains("foundation") || id.contains("footing") {
                    Phase::Foundation
                } else {
                    Phase::Framing
                }
            }
            TaskCategory::Exterior => Phase::Exterior,
            TaskCategory::Mechanical => {
                if id.contains("finish") {
                    Phase::MechanicalFinish
                } else {
                    Phase::MechanicalRough
                }
            }
            TaskCategory::Inspection => Phase::Inspections,
            TaskCategory::Interior => Phase::Interior,
            TaskCategory::Finishes => Phase::Finishes,
            TaskCategory::Completion => Phase::Completion,
        }
    }

    /// Groups a task list, one phase per task, task-list order within a phase.
    pub fn organize(&self, tasks: &[Task]) -> PhaseGrouping {
        let mut grouping = PhaseGrouping::new();
        for task in tasks {
            grouping.push(self.phase_for(task), task.id.clone());
        }
        grouping
    }
}
