//! Workflow aggregate.
//!
//! # Output document
//!
//! A workflow serializes to a flat camelCase tree. The headline figures sit
//! at the top level:
//!
//! | Key | Source |
//! |-----|--------|
//! | `tasks` | [`Workflow::tasks`] |
//! | `standardDuration` | [`Timeline::standard_duration`] |
//! | `optimizedDuration` | [`Timeline::optimized_duration`] |
//! | `criticalPath` | [`Timeline::critical_path`] |
//! | `parallelTasks` | [`Timeline::parallel_groups`] |
//! | `phases` | [`Workflow::phases`] |
//!
//! The remaining timeline detail (`levels`, `cpm`, `summary`) follows at the
//! same level, so the document round-trips without duplicated data.

use serde::{Deserialize, Serialize};

use super::{CpmSchedule, Phase, PhaseGrouping, ProjectRequest, Task, Timeline, TimelineSummary};

/// A dependency reference that could not be resolved within the task list.
///
/// Rule-table entries name tasks from every project type, so a predecessor
/// may be absent from the selected project's list. Such edges are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedDependency {
    /// Task whose rule listed the predecessor.
    pub task_id: String,
    /// Predecessor id that is not part of the task list.
    pub missing_predecessor: String,
}

/// Generated construction workflow.
///
/// Owns the ordered task list, its timeline and the phase grouping.
/// Built once per request and read-only afterwards. Serializes to a plain
/// tree: tasks reference each other by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WorkflowDocument", from = "WorkflowDocument")]
pub struct Workflow {
    /// The request this workflow answers.
    pub request: ProjectRequest,
    /// Catalog key the task list came from.
    pub resolved_project_type: String,
    /// Whether the generic fallback list was used.
    pub used_fallback: bool,
    /// Tasks in catalog order.
    pub tasks: Vec<Task>,
    /// Durations, waves and critical path.
    pub timeline: Timeline,
    /// Presentation phases.
    pub phases: PhaseGrouping,
    /// Rule edges dropped because the predecessor is not in `tasks`.
    pub dropped_dependencies: Vec<DroppedDependency>,
}

/// Serialized form of [`Workflow`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkflowDocument {
    request: ProjectRequest,
    resolved_project_type: String,
    used_fallback: bool,
    tasks: Vec<Task>,
    standard_duration: u32,
    optimized_duration: u32,
    critical_path: Vec<String>,
    parallel_tasks: Vec<Vec<String>>,
    phases: PhaseGrouping,
    levels: Vec<Vec<String>>,
    cpm: CpmSchedule,
    summary: TimelineSummary,
    dropped_dependencies: Vec<DroppedDependency>,
}

impl From<Workflow> for WorkflowDocument {
    fn from(wf: Workflow) -> Self {
        let Timeline {
            standard_duration,
            optimized_duration,
            critical_path,
            parallel_groups,
            levels,
            cpm,
            summary,
        } = wf.timeline;

        Self {
            request: wf.request,
            resolved_project_type: wf.resolved_project_type,
            used_fallback: wf.used_fallback,
            tasks: wf.tasks,
            standard_duration,
            optimized_duration,
            critical_path,
            parallel_tasks: parallel_groups,
            phases: wf.phases,
            levels,
            cpm,
            summary,
            dropped_dependencies: wf.dropped_dependencies,
        }
    }
}

impl From<WorkflowDocument> for Workflow {
    fn from(doc: WorkflowDocument) -> Self {
        Self {
            request: doc.request,
            resolved_project_type: doc.resolved_project_type,
            used_fallback: doc.used_fallback,
            tasks: doc.tasks,
            timeline: Timeline {
                standard_duration: doc.standard_duration,
                optimized_duration: doc.optimized_duration,
                critical_path: doc.critical_path,
                parallel_groups: doc.parallel_tasks,
                levels: doc.levels,
                cpm: doc.cpm,
                summary: doc.summary,
            },
            phases: doc.phases,
            dropped_dependencies: doc.dropped_dependencies,
        }
    }
}

impl Workflow {
    /// Finds a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Sequential duration (days).
    pub fn standard_duration(&self) -> u32 {
        self.timeline.standard_duration
    }

    /// Wave-parallel duration (days).
    pub fn optimized_duration(&self) -> u32 {
        self.timeline.optimized_duration
    }

    /// Critical path task ids.
    pub fn critical_path(&self) -> &[String] {
        &self.timeline.critical_path
    }

    /// Parallel groups of task ids.
    pub fn parallel_tasks(&self) -> &[Vec<String>] {
        &self.timeline.parallel_groups
    }

    /// Tasks assigned to a phase, in task-list order.
    pub fn phase_tasks(&self, phase: Phase) -> Vec<&Task> {
        self.phases
            .tasks_in(phase)
            .iter()
            .filter_map(|id| self.task(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskCategory;

    fn sample() -> Workflow {
        let mut phases = PhaseGrouping::new();
        phases.push(Phase::Planning, "permits");
        phases.push(Phase::Planning, "design");
        phases.push(Phase::Completion, "cleanup");

        Workflow {
            request: ProjectRequest::new("deck", 250.0),
            resolved_project_type: "deck".into(),
            used_fallback: false,
            tasks: vec![
                Task::new("permits", TaskCategory::Planning).with_duration(3),
                Task::new("design", TaskCategory::Planning).with_duration(2),
                Task::new("cleanup", TaskCategory::Completion)
                    .with_duration(1)
                    .with_dependencies(vec!["permits".into(), "design".into()]),
            ],
            timeline: Timeline {
                standard_duration: 6,
                optimized_duration: 4,
                critical_path: vec!["permits".into(), "cleanup".into()],
                parallel_groups: vec![vec!["permits".into(), "design".into()]],
                levels: vec![vec!["permits".into(), "design".into()], vec!["cleanup".into()]],
                ..Timeline::default()
            },
            phases,
            dropped_dependencies: vec![DroppedDependency {
                task_id: "permits".into(),
                missing_predecessor: "site-survey".into(),
            }],
        }
    }

    #[test]
    fn test_output_keys_at_top_level() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["standardDuration"], 6);
        assert_eq!(json["optimizedDuration"], 4);
        assert_eq!(json["criticalPath"], serde_json::json!(["permits", "cleanup"]));
        assert_eq!(json["parallelTasks"], serde_json::json!([["permits", "design"]]));
        assert_eq!(json["phases"]["Planning"], serde_json::json!(["permits", "design"]));
        assert_eq!(json["resolvedProjectType"], "deck");
        assert_eq!(json["droppedDependencies"][0]["missingPredecessor"], "site-survey");
        assert!(json.get("timeline").is_none());
    }

    #[test]
    fn test_document_round_trip() {
        let wf = sample();
        let back: Workflow = serde_json::from_value(serde_json::to_value(&wf).unwrap()).unwrap();
        assert_eq!(back, wf);
    }

    #[test]
    fn test_phase_tasks_in_list_order() {
        let wf = sample();
        let ids: Vec<&str> = wf.phase_tasks(Phase::Planning).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["permits", "design"]);
    }
}
