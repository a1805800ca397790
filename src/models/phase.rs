//! Presentation phases.
//!
//! Phases are a reporting view over the task list. They never feed back
//! into durations, dependencies or the critical path.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named presentation phase, ordered as a build progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "Planning")]
    Planning,
    #[serde(rename = "Site Work")]
    SiteWork,
    #[serde(rename = "Foundation")]
    Foundation,
    #[serde(rename = "Framing")]
    Framing,
    #[serde(rename = "Exterior")]
    Exterior,
    #[serde(rename = "Mechanical Rough")]
    MechanicalRough,
    #[serde(rename = "Inspections")]
    Inspections,
    #[serde(rename = "Interior")]
    Interior,
    #[serde(rename = "Finishes")]
    Finishes,
    #[serde(rename = "Mechanical Finish")]
    MechanicalFinish,
    #[serde(rename = "Completion")]
    Completion,
}

impl Phase {
    /// All phases in presentation order.
    pub const ALL: [Phase; 11] = [
        Phase::Planning,
        Phase::SiteWork,
        Phase::Foundation,
        Phase::Framing,
        Phase::Exterior,
        Phase::MechanicalRough,
        Phase::Inspections,
        Phase::Interior,
        Phase::Finishes,
        Phase::MechanicalFinish,
        Phase::Completion,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Planning => "Planning",
            Phase::SiteWork => "Site Work",
            Phase::Foundation => "Foundation",
            Phase::Framing => "Framing",
            Phase::Exterior => "Exterior",
            Phase::MechanicalRough => "Mechanical Rough",
            Phase::Inspections => "Inspections",
            Phase::Interior => "Interior",
            Phase::Finishes => "Finishes",
            Phase::MechanicalFinish => "Mechanical Finish",
            Phase::Completion => "Completion",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Partition of a workflow's task ids into phases.
///
/// Each task id appears in exactly one phase. Ids keep task-list order
/// within a phase; phases without tasks are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseGrouping {
    phases: BTreeMap<Phase, Vec<String>>,
}

impl PhaseGrouping {
    /// Creates an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task id to a phase.
    pub fn push(&mut self, phase: Phase, task_id: impl Into<String>) {
        self.phases.entry(phase).or_default().push(task_id.into());
    }

    /// Task ids assigned to `phase` (empty if none).
    pub fn tasks_in(&self, phase: Phase) -> &[String] {
        self.phases.get(&phase).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Phase a task id was assigned to.
    pub fn phase_of(&self, task_id: &str) -> Option<Phase> {
        self.phases
            .iter()
            .find(|(_, ids)| ids.iter().any(|id| id == task_id))
            .map(|(phase, _)| *phase)
    }

    /// Non-empty phases in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, &[String])> {
        self.phases.iter().map(|(p, ids)| (*p, ids.as_slice()))
    }

    /// Number of non-empty phases.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Whether no task has been assigned.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Total number of assigned task ids.
    pub fn task_count(&self) -> usize {
        self.phases.values().map(Vec::len).sum()
    }
}
