//! Dependency levels (waves).

use super::TaskGraph;
use crate::error::AnalysisError;

/// Level of every task: 0 for roots, else 1 + the deepest predecessor.
///
/// Iterative memoized DFS. A predecessor that is still on the DFS stack
/// closes a cycle and aborts the computation.
pub(crate) fn dependency_levels(graph: &TaskGraph<'_>) -> Result<Vec<usize>, AnalysisError> {
    let n = graph.len();
    let mut level: Vec<Option<usize>> = vec![None; n];
    let mut on_stack = vec![false; n];

    for start in 0..n {
        if level[start].is_some() {
            continue;
        }

        let mut stack = vec![(start, 0usize)];
        on_stack[start] = true;

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            if let Some(&pred) = graph.preds[node].get(frame.1) {
                frame.1 += 1;
                if level[pred].is_some() {
                    continue;
                }
                if on_stack[pred] {
                    return Err(AnalysisError::CyclicDependency(
                        graph.tasks[pred].id.clone(),
                    ));
                }
                on_stack[pred] = true;
                stack.push((pred, 0));
            } else {
                let depth = graph.preds[node]
                    .iter()
                    .filter_map(|&p| level[p])
                    .map(|l| l + 1)
                    .max()
                    .unwrap_or(0);
                level[node] = Some(depth);
                on_stack[node] = false;
                stack.pop();
            }
        }
    }

    Ok(level.into_iter().map(Option::unwrap_or_default).collect())
}

/// Buckets task indices by level, catalog order within a bucket.
pub(crate) fn group_by_level(level_of: &[usize]) -> Vec<Vec<usize>> {
    let depth = level_of.iter().max().map_or(0, |&m| m + 1);
    let mut waves = vec![Vec::new(); depth];
    for (i, &l) in level_of.iter().enumerate() {
        waves[l].push(i);
    }
    waves
}

/// Σ over waves of the longest duration in the wave.
///
/// Singleton waves contribute their only task, so this equals the sum of
/// parallel-group maxima plus every task outside a group.
pub(crate) fn wave_duration(graph: &TaskGraph<'_>, waves: &[Vec<usize>]) -> u32 {
    waves
        .iter()
        .map(|w| w.iter().map(|&i| graph.duration(i)).max().unwrap_or(0))
        .fold(0u32, u32::saturating_add)
}

/// Task indices sorted by (level, catalog index).
///
/// Every predecessor sits on a strictly lower level, so this is a
/// topological order.
pub(crate) fn topological_order(level_of: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..level_of.len()).collect();
    order.sort_by_key(|&i| (level_of[i], i));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskCategory};

    fn tasks(rows: &[(&str, u32, &[&str])]) -> Vec<Task> {
        rows.iter()
            .map(|(id, d, deps)| {
                Task::new(*id, TaskCategory::Interior)
                    .with_duration(*d)
                    .with_dependencies(deps.iter().map(|s| s.to_string()).collect())
            })
            .collect()
    }

    #[test]
    fn test_levels_use_longest_chain() {
        // a → b → d and a → d: d sits below b, not beside it
        let t = tasks(&[("a", 1, &[]), ("b", 1, &["a"]), ("d", 1, &["a", "b"])]);
        let g = TaskGraph::build(&t).unwrap();
        assert_eq!(dependency_levels(&g).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_levels_independent_of_list_order() {
        // Successor listed before its predecessor
        let t = tasks(&[("late", 1, &["early"]), ("early", 1, &[])]);
        let g = TaskGraph::build(&t).unwrap();
        assert_eq!(dependency_levels(&g).unwrap(), vec![1, 0]);
        assert_eq!(topological_order(&[1, 0]), vec![1, 0]);
    }

    #[test]
    fn test_group_and_wave_duration() {
        let t = tasks(&[
            ("a", 2, &[]),
            ("b", 6, &[]),
            ("c", 3, &["a"]),
            ("d", 1, &["b", "c"]),
        ]);
        let g = TaskGraph::build(&t).unwrap();
        let levels = dependency_levels(&g).unwrap();
        let waves = group_by_level(&levels);

        assert_eq!(waves, vec![vec![0, 1], vec![2], vec![3]]);
        assert_eq!(wave_duration(&g, &waves), 6 + 3 + 1);
    }

    #[test]
    fn test_long_chain_does_not_overflow_stack() {
        let ids: Vec<String> = (0..20_000).map(|i| format!("t{i}")).collect();
        let t: Vec<Task> = ids
            .iter()
            .enumerate()
            .rev()
            .map(|(i, id)| {
                let task = Task::new(id.clone(), TaskCategory::Interior);
                if i == 0 {
                    task
                } else {
                    task.with_dependency(ids[i - 1].clone())
                }
            })
            .collect();
        let g = TaskGraph::build(&t).unwrap();
        let levels = dependency_levels(&g).unwrap();
        assert_eq!(levels.iter().max(), Some(&19_999));
    }

    #[test]
    fn test_empty_graph() {
        let g = TaskGraph::build(&[]).unwrap();
        let levels = dependency_levels(&g).unwrap();
        assert!(levels.is_empty());
        assert!(group_by_level(&levels).is_empty());
    }
}
