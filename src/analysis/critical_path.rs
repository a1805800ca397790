//! Critical path: greedy walk and CPM pass.
//!
//! The reported critical path is the greedy walk: start at the roots, take
//! the longest task whose predecessors are all on the path, then continue
//! with that task's successors whose predecessors are now all on the path.
//! Ties go to the task listed first. The walk ends at the first join that
//! still waits for an unvisited branch, so it only approximates the
//! schedule-bounding chain.
//!
//! The forward/backward pass computes the exact longest path and per-task
//! float and is reported next to the walk.

use super::TaskGraph;
use crate::models::{CpmSchedule, TaskTiming};

/// Greedy longest-task walk from the roots, as task indices.
pub(crate) fn greedy_walk(graph: &TaskGraph<'_>) -> Vec<usize> {
    let mut on_path = vec![false; graph.len()];
    let mut path = Vec::new();

    let mut frontier: Vec<usize> = (0..graph.len())
        .filter(|&i| graph.preds[i].is_empty())
        .collect();

    while let Some(pick) = longest(graph, &frontier) {
        on_path[pick] = true;
        path.push(pick);

        frontier = graph.succs[pick]
            .iter()
            .copied()
            .filter(|&s| !on_path[s] && graph.preds[s].iter().all(|&p| on_path[p]))
            .collect();
    }

    path
}

/// Longest task among `candidates`; the earliest-listed wins ties.
fn longest(graph: &TaskGraph<'_>, candidates: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for &c in candidates {
        match best {
            Some(b) if graph.duration(c) <= graph.duration(b) => {}
            _ => best = Some(c),
        }
    }
    best
}

/// Forward/backward CPM pass over a topological order.
pub(crate) fn forward_backward_pass(graph: &TaskGraph<'_>, order: &[usize]) -> CpmSchedule {
    let n = graph.len();
    let mut earliest_start = vec![0u32; n];
    let mut earliest_finish = vec![0u32; n];

    for &i in order {
        let es = graph.preds[i]
            .iter()
            .map(|&p| earliest_finish[p])
            .max()
            .unwrap_or(0);
        earliest_start[i] = es;
        earliest_finish[i] = es.saturating_add(graph.duration(i));
    }

    let project_duration = earliest_finish.iter().copied().max().unwrap_or(0);

    let mut latest_start = vec![0u32; n];
    let mut latest_finish = vec![0u32; n];

    for &i in order.iter().rev() {
        let lf = graph.succs[i]
            .iter()
            .map(|&s| latest_start[s])
            .min()
            .unwrap_or(project_duration);
        latest_finish[i] = lf;
        latest_start[i] = lf.saturating_sub(graph.duration(i));
    }

    let timings: Vec<TaskTiming> = order
        .iter()
        .map(|&i| TaskTiming {
            task_id: graph.tasks[i].id.clone(),
            earliest_start: earliest_start[i],
            earliest_finish: earliest_finish[i],
            latest_start: latest_start[i],
            latest_finish: latest_finish[i],
            total_float: latest_start[i].saturating_sub(earliest_start[i]),
        })
        .collect();

    let critical_tasks = timings
        .iter()
        .filter(|t| t.is_critical())
        .map(|t| t.task_id.clone())
        .collect();

    CpmSchedule {
        project_duration,
        timings,
        critical_tasks,
    }
}
