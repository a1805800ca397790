//! Dependency rule table.
//!
//! Encodes construction sequencing as `task id → predecessor ids`. The
//! table is shared by every project type: a rule may name predecessors that
//! only some project types contain, and the graph builder drops those
//! edges for projects that lack them.
//!
//! Tasks without an entry have no predecessors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sequencing rules keyed by successor task id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyRules {
    rules: BTreeMap<String, Vec<String>>,
}

impl DependencyRules {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule: `task_id` waits for all of `predecessors`.
    pub fn with_rule<I, S>(mut self, task_id: impl Into<String>, predecessors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.insert(
            task_id.into(),
            predecessors.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Predecessors of a task (`ruleTable[id] ?? []`).
    pub fn predecessors(&self, task_id: &str) -> &[String] {
        self.rules.get(task_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the task has an entry.
    pub fn contains(&self, task_id: &str) -> bool {
        self.rules.contains_key(task_id)
    }

    /// All `(task, predecessors)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total number of predecessor edges.
    pub fn edge_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}
