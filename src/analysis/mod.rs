//! Timeline and critical-path analysis.
//!
//! Derives a [`Timeline`] from a task DAG whose durations are known.
//!
//! # Outputs
//!
//! | Output | Definition |
//! |--------|-----------|
//! | Standard duration | Σ duration |
//! | Dependency level | 0 for roots, else 1 + max(level of predecessors) |
//! | Parallel groups | Levels holding more than one task |
//! | Optimized duration | Σ over levels of the longest task in the level |
//! | Critical path | Greedy longest-task walk from the roots |
//! | CPM | Earliest/latest start-finish and float per task |
//!
//! Predecessor ids that do not resolve to a task in the list are ignored.
//! Duplicate ids and cycles are rejected, since neither levels nor float
//! are defined for them.
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4, 24.2

mod critical_path;
mod kpi;
mod levels;

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::AnalysisError;
use crate::models::{Task, Timeline, TimelineSummary};

/// Index-based view of a task list.
///
/// `preds[i]` and `succs[i]` hold task indices in catalog order, with
/// unresolvable and repeated predecessor ids removed.
#[derive(Debug)]
pub(crate) struct TaskGraph<'a> {
    pub(crate) tasks: &'a [Task],
    pub(crate) preds: Vec<Vec<usize>>,
    pub(crate) succs: Vec<Vec<usize>>,
}

impl<'a> TaskGraph<'a> {
    pub(crate) fn build(tasks: &'a [Task]) -> Result<Self, AnalysisError> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            if index.insert(task.id.as_str(), i).is_some() {
                return Err(AnalysisError::DuplicateTaskId(task.id.clone()));
            }
        }

        let mut preds = vec![Vec::new(); tasks.len()];
        let mut succs = vec![Vec::new(); tasks.len()];

        for (i, task) in tasks.iter().enumerate() {
            let mut seen = HashSet::new();
            for dep in &task.dependencies {
                if let Some(&p) = index.get(dep.as_str()) {
                    if seen.insert(p) {
                        preds[i].push(p);
                        succs[p].push(i);
                    }
                }
            }
        }

        Ok(Self {
            tasks,
            preds,
            succs,
        })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    pub(crate) fn duration(&self, i: usize) -> u32 {
        self.tasks[i].duration_days
    }

    pub(crate) fn ids(&self, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| self.tasks[i].id.clone()).collect()
    }
}

/// Computes timelines from task lists.
///
/// Stateless; one analyzer can serve any number of threads.
///
/// # Example
/// ```
/// use u_construct::analysis::TimelineAnalyzer;
/// use u_construct::models::{Task, TaskCategory};
///
/// let tasks = vec![
///     Task::new("footings", TaskCategory::Structural).with_duration(2),
///     Task::new("electrical", TaskCategory::Mechanical).with_duration(3).with_dependency("footings"),
///     Task::new("plumbing", TaskCategory::Mechanical).with_duration(5).with_dependency("footings"),
///     Task::new("inspection", TaskCategory::Inspection)
///         .with_duration(1)
///         .with_dependencies(vec!["electrical".into(), "plumbing".into()]),
/// ];
///
/// let timeline = TimelineAnalyzer::new().analyze(&tasks).unwrap();
/// assert_eq!(timeline.standard_duration, 11);
/// assert_eq!(timeline.optimized_duration, 8); // 2 + max(3, 5) + 1
/// assert_eq!(timeline.parallel_groups, vec![vec!["electrical", "plumbing"]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineAnalyzer;

impl TimelineAnalyzer {
    /// Creates an analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyses a task list.
    ///
    /// An empty list yields an all-zero timeline.
    ///
    /// # Errors
    /// [`AnalysisError::DuplicateTaskId`] if two tasks share an id,
    /// [`AnalysisError::CyclicDependency`] if the dependencies form a cycle.
    pub fn analyze(&self, tasks: &[Task]) -> Result<Timeline, AnalysisError> {
        let graph = TaskGraph::build(tasks)?;

        let level_of = levels::dependency_levels(&graph)?;
        let waves = levels::group_by_level(&level_of);

        let standard_duration = tasks
            .iter()
            .fold(0u32, |acc, t| acc.saturating_add(t.duration_days));
        let optimized_duration = levels::wave_duration(&graph, &waves);

        let path = critical_path::greedy_walk(&graph);
        let order = levels::topological_order(&level_of);
        let cpm = critical_path::forward_backward_pass(&graph, &order);

        let levels: Vec<Vec<String>> = waves.iter().map(|w| graph.ids(w)).collect();
        let parallel_groups: Vec<Vec<String>> = levels
            .iter()
            .filter(|w| w.len() > 1)
            .cloned()
            .collect();

        let critical_path_duration = path
            .iter()
            .fold(0u32, |acc, &i| acc.saturating_add(graph.duration(i)));

        let mut timeline = Timeline {
            standard_duration,
            optimized_duration,
            critical_path: graph.ids(&path),
            parallel_groups,
            levels,
            cpm,
            summary: TimelineSummary::default(),
        };
        timeline.summary = TimelineSummary::calculate(&timeline, tasks.len(), critical_path_duration);

        debug!(
            tasks = tasks.len(),
            waves = timeline.levels.len(),
            standard_duration,
            optimized_duration,
            cpm_duration = timeline.cpm.project_duration,
            "timeline analysed"
        );

        Ok(timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskCategory;

    fn task(id: &str, days: u32, deps: &[&str]) -> Task {
        Task::new(id, TaskCategory::Structural)
            .with_duration(days)
            .with_dependencies(deps.iter().map(|d| d.to_string()).collect())
    }

    #[test]
    fn test_empty_task_list() {
        let timeline = TimelineAnalyzer::new().analyze(&[]).unwrap();
        assert_eq!(timeline.standard_duration, 0);
        assert_eq!(timeline.optimized_duration, 0);
        assert!(timeline.critical_path.is_empty());
        assert!(timeline.parallel_groups.is_empty());
        assert!(timeline.levels.is_empty());
        assert_eq!(timeline.cpm.project_duration, 0);
        assert_eq!(timeline.summary.task_count, 0);
        assert_eq!(timeline.summary.compression_ratio, 1.0);
    }

    #[test]
    fn test_linear_chain_has_no_parallelism() {
        let tasks = vec![task("a", 2, &[]), task("b", 3, &["a"]), task("c", 4, &["b"])];
        let timeline = TimelineAnalyzer::new().analyze(&tasks).unwrap();

        assert_eq!(timeline.standard_duration, 9);
        assert_eq!(timeline.optimized_duration, 9);
        assert!(timeline.parallel_groups.is_empty());
        assert_eq!(timeline.critical_path, vec!["a", "b", "c"]);
        assert_eq!(timeline.cpm.project_duration, 9);
    }

    #[test]
    fn test_same_level_pair_counts_longest_once() {
        // Two same-level tasks (3 and 5 days) feeding one successor
        let tasks = vec![
            task("start", 1, &[]),
            task("short", 3, &["start"]),
            task("long", 5, &["start"]),
            task("join", 2, &["short", "long"]),
        ];
        let timeline = TimelineAnalyzer::new().analyze(&tasks).unwrap();

        assert_eq!(timeline.parallel_groups, vec![vec!["short", "long"]]);
        assert_eq!(timeline.standard_duration, 11);
        assert_eq!(timeline.optimized_duration, 1 + 5 + 2);
        assert_eq!(timeline.summary.days_saved, 3);
    }

    #[test]
    fn test_unresolved_predecessor_is_ignored() {
        let tasks = vec![task("a", 2, &["ghost"]), task("b", 1, &["a", "phantom"])];
        let timeline = TimelineAnalyzer::new().analyze(&tasks).unwrap();

        assert_eq!(timeline.level_of("a"), Some(0));
        assert_eq!(timeline.level_of("b"), Some(1));
        assert_eq!(timeline.critical_path, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let tasks = vec![task("a", 1, &[]), task("a", 2, &[])];
        assert_eq!(
            TimelineAnalyzer::new().analyze(&tasks),
            Err(AnalysisError::DuplicateTaskId("a".into()))
        );
    }

    #[test]
    fn test_cycle_rejected() {
        let tasks = vec![task("a", 1, &["c"]), task("b", 1, &["a"]), task("c", 1, &["b"])];
        assert!(matches!(
            TimelineAnalyzer::new().analyze(&tasks),
            Err(AnalysisError::CyclicDependency(_))
        ));
    }

    #[test]
    fn test_self_loop_rejected() {
        let tasks = vec![task("a", 1, &["a"])];
        assert_eq!(
            TimelineAnalyzer::new().analyze(&tasks),
            Err(AnalysisError::CyclicDependency("a".into()))
        );
    }

    #[test]
    fn test_independent_roots_form_one_group() {
        let tasks = vec![task("a", 4, &[]), task("b", 2, &[]), task("c", 7, &[])];
        let timeline = TimelineAnalyzer::new().analyze(&tasks).unwrap();

        assert_eq!(timeline.parallel_groups, vec![vec!["a", "b", "c"]]);
        assert_eq!(timeline.optimized_duration, 7);
        // Walk stops after the longest root: nothing succeeds it
        assert_eq!(timeline.critical_path, vec!["c"]);
        assert_eq!(timeline.summary.max_parallelism, 3);
    }
}
