//! Dependency graph construction.
//!
//! Turns catalog entries into tasks whose `dependencies` are the rule-table
//! predecessors present in the same list: for every task,
//! `dependencies = rules[id] ?? []`, minus references to tasks the project
//! does not contain. Those dropped references are logged and reported back
//! rather than treated as errors.
//!
//! Acyclicity comes from the rule table, which configuration validation
//! checks at load time.

use std::collections::HashSet;

use tracing::warn;

use crate::catalog::CatalogEntry;
use crate::estimator::DurationEstimator;
use crate::models::{Complexity, DroppedDependency, Task};
use crate::rules::DependencyRules;

/// Tasks with resolved dependency edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    /// Tasks in catalog order.
    pub tasks: Vec<Task>,
    /// Rule edges whose predecessor is not in `tasks`.
    pub dropped: Vec<DroppedDependency>,
}

impl DependencyGraph {
    /// Fills in durations and estimation provenance for every task.
    pub fn with_estimates(
        mut self,
        estimator: &DurationEstimator,
        square_footage: f64,
        complexity: Complexity,
    ) -> Self {
        for task in &mut self.tasks {
            let estimate = estimator.estimate(&task.id, square_footage, complexity);
            task.duration_days = estimate.days;
            task.estimation_method = estimate.method;
        }
        self
    }

    /// Number of resolved edges.
    pub fn edge_count(&self) -> usize {
        self.tasks.iter().map(|t| t.dependencies.len()).sum()
    }
}

/// Attaches rule-table edges to catalog entries.
#[derive(Debug, Clone, Copy)]
pub struct DependencyGraphBuilder<'a> {
    rules: &'a DependencyRules,
}

impl<'a> DependencyGraphBuilder<'a> {
    /// Creates a builder over a rule table.
    pub fn new(rules: &'a DependencyRules) -> Self {
        Self { rules }
    }

    /// Builds tasks for the given entries.
    ///
    /// Predecessors keep rule order; repeated predecessors collapse to one.
    pub fn build(&self, entries: &[CatalogEntry]) -> DependencyGraph {
        let present: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        let mut dropped = Vec::new();

        let tasks = entries
            .iter()
            .map(|entry| {
                let mut seen = HashSet::new();
                let mut dependencies = Vec::new();

                for pred in self.rules.predecessors(&entry.id) {
                    if !present.contains(pred.as_str()) {
                        warn!(
                            task_id = %entry.id,
                            missing_predecessor = %pred,
                            "dropping dependency on task outside this project"
                        );
                        dropped.push(DroppedDependency {
                            task_id: entry.id.clone(),
                            missing_predecessor: pred.clone(),
                        });
                        continue;
                    }
                    if seen.insert(pred.as_str()) {
                        dependencies.push(pred.clone());
                    }
                }

                Task::new(entry.id.clone(), entry.category)
                    .with_name(entry.name.clone())
                    .with_complexity(entry.complexity)
                    .with_dependencies(dependencies)
            })
            .collect();

        DependencyGraph { tasks, dropped }
    }
}
