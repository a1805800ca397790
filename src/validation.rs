//! Configuration validation.
//!
//! Checks the structural integrity of an engine configuration once, at
//! load time, so generation never meets a malformed table. Detects:
//! - Missing or empty task lists (including the fallback list)
//! - Duplicate task IDs within a list
//! - Rule-table references to tasks that no catalog list contains
//! - Self-dependencies and circular sequencing rules (DAG validation)
//! - Non-finite or negative duration coefficients and multipliers
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::catalog::TaskCatalog;
use crate::estimator::DurationEstimator;
use crate::rules::DependencyRules;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks in one list share the same ID.
    DuplicateId,
    /// A project type has no tasks, or the fallback list is missing.
    EmptyCatalog,
    /// A rule names a task that no catalog list contains.
    UnknownTaskReference,
    /// Sequencing rules contain a cycle (self-dependency included).
    CyclicDependency,
    /// A coefficient or multiplier is negative or not finite.
    InvalidCoefficient,
}

impl ValidationError {
    /// Creates an error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates catalog, rule table and estimator together.
///
/// Checks:
/// 1. The fallback list exists and no list is empty
/// 2. No duplicate task IDs within a list
/// 3. Every rule key and predecessor names a catalogued task
/// 4. No task depends on itself, no circular rules
/// 5. Coefficients are finite and non-negative, multipliers positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(
    catalog: &TaskCatalog,
    rules: &DependencyRules,
    estimator: &DurationEstimator,
) -> ValidationResult {
    let mut errors = Vec::new();

    validate_catalog(catalog, &mut errors);
    validate_rules(catalog, rules, &mut errors);
    validate_estimator(estimator, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_catalog(catalog: &TaskCatalog, errors: &mut Vec<ValidationError>) {
    if !catalog.projects.contains_key(&catalog.fallback) {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            format!("Fallback project type '{}' has no task list", catalog.fallback),
        ));
    }

    for (project_type, entries) in &catalog.projects {
        if entries.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCatalog,
                format!("Project type '{project_type}' has no tasks"),
            ));
        }

        let mut ids = HashSet::new();
        for entry in entries {
            if !ids.insert(entry.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate task ID '{}' in project type '{project_type}'", entry.id),
                ));
            }
        }
    }
}

fn validate_rules(catalog: &TaskCatalog, rules: &DependencyRules, errors: &mut Vec<ValidationError>) {
    let known: HashSet<&str> = catalog.all_entries().map(|e| e.id.as_str()).collect();

    for (task_id, predecessors) in rules.iter() {
        if !known.contains(task_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTaskReference,
                format!("Rule for unknown task '{task_id}'"),
            ));
        }
        for pred in predecessors {
            if !known.contains(pred.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTaskReference,
                    format!("Task '{task_id}' references unknown predecessor '{pred}'"),
                ));
            }
            if pred == task_id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CyclicDependency,
                    format!("Task '{task_id}' depends on itself"),
                ));
            }
        }
    }

    // Self-loops are already reported above.
    if let Some(node) = find_cycle(rules) {
        errors.push(ValidationError::new(
            ValidationErrorKind::CyclicDependency,
            format!("Circular dependency detected involving task '{node}'"),
        ));
    }
}

fn validate_estimator(estimator: &DurationEstimator, errors: &mut Vec<ValidationError>) {
    let mut check = |what: String, value: f64, allow_zero: bool| {
        let ok = value.is_finite() && if allow_zero { value >= 0.0 } else { value > 0.0 };
        if !ok {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCoefficient,
                format!("Invalid {what}: {value}"),
            ));
        }
    };

    let d = estimator.default_coefficients;
    check("default base".to_string(), d.base, true);
    check("default per_sq_ft".to_string(), d.per_sq_ft, true);

    for (task_id, c) in &estimator.coefficients {
        check(format!("base for '{task_id}'"), c.base, true);
        check(format!("per_sq_ft for '{task_id}'"), c.per_sq_ft, true);
    }

    let m = estimator.multipliers;
    check("low multiplier".to_string(), m.low, false);
    check("medium multiplier".to_string(), m.medium, false);
    check("high multiplier".to_string(), m.high, false);
}

/// Finds a node on a cycle of the rule graph, ignoring self-loops.
///
/// # Algorithm
/// DFS over `task → predecessor` edges. Reaching a node that is still on
/// the recursion stack (a back edge) means a cycle exists.
fn find_cycle(rules: &DependencyRules) -> Option<&str> {
    let mut adj: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (task_id, predecessors) in rules.iter() {
        let edges = adj.entry(task_id).or_default();
        for pred in predecessors {
            if pred != task_id {
                edges.push(pred.as_str());
            }
        }
    }

    let mut visited = BTreeSet::new();
    let mut in_stack = BTreeSet::new();

    for &node in adj.keys() {
        if !visited.contains(node) {
            if let Some(hit) = cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
                return Some(hit);
            }
        }
    }

    None
}

fn cycle_dfs<'a>(
    node: &'a str,
    adj: &BTreeMap<&'a str, Vec<&'a str>>,
    visited: &mut BTreeSet<&'a str>,
    in_stack: &mut BTreeSet<&'a str>,
) -> Option<&'a str> {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return Some(next); // Back edge → cycle
            }
            if !visited.contains(next) {
                if let Some(hit) = cycle_dfs(next, adj, visited, in_stack) {
                    return Some(hit);
                }
            }
        }
    }

    in_stack.remove(node);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::estimator::{ComplexityMultipliers, DurationCoefficients};
    use crate::models::TaskCategory;

    fn entry(id: &str) -> CatalogEntry {
        CatalogEntry::new(id, id, TaskCategory::Structural)
    }

    fn sample_catalog() -> TaskCatalog {
        TaskCatalog::new("generic")
            .with_project("generic", vec![entry("a"), entry("b"), entry("c")])
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_config() {
        let rules = DependencyRules::new()
            .with_rule("b", ["a"])
            .with_rule("c", ["a", "b"]);
        assert!(validate_config(&sample_catalog(), &rules, &DurationEstimator::new()).is_ok());
    }

    #[test]
    fn test_missing_fallback() {
        let catalog = TaskCatalog::new("generic").with_project("deck", vec![entry("a")]);
        let errors =
            validate_config(&catalog, &DependencyRules::new(), &DurationEstimator::new()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyCatalog));
    }

    #[test]
    fn test_empty_project_list() {
        let catalog = sample_catalog().with_project("deck", vec![]);
        let errors =
            validate_config(&catalog, &DependencyRules::new(), &DurationEstimator::new()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCatalog && e.message.contains("deck")));
    }

    #[test]
    fn test_duplicate_task_id() {
        let catalog = TaskCatalog::new("generic")
            .with_project("generic", vec![entry("a"), entry("a")]);
        let errors =
            validate_config(&catalog, &DependencyRules::new(), &DurationEstimator::new()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_same_id_in_different_lists_is_fine() {
        let catalog = sample_catalog().with_project("deck", vec![entry("a")]);
        assert!(validate_config(&catalog, &DependencyRules::new(), &DurationEstimator::new()).is_ok());
    }

    #[test]
    fn test_unknown_rule_reference() {
        let rules = DependencyRules::new().with_rule("b", ["NONEXISTENT"]);
        let errors =
            validate_config(&sample_catalog(), &rules, &DurationEstimator::new()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnknownTaskReference));

        let rules = DependencyRules::new().with_rule("ghost", ["a"]);
        let errors =
            validate_config(&sample_catalog(), &rules, &DurationEstimator::new()).unwrap_err();
        assert!(errors[0].message.contains("ghost"));
    }

    #[test]
    fn test_self_dependency() {
        let rules = DependencyRules::new().with_rule("a", ["a"]);
        let errors =
            validate_config(&sample_catalog(), &rules, &DurationEstimator::new()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::CyclicDependency);
    }

    #[test]
    fn test_cyclic_dependency() {
        // a → b → c → a
        let rules = DependencyRules::new()
            .with_rule("a", ["c"])
            .with_rule("b", ["a"])
            .with_rule("c", ["b"]);
        let errors =
            validate_config(&sample_catalog(), &rules, &DurationEstimator::new()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::CyclicDependency));
    }

    #[test]
    fn test_no_cycle_in_diamond() {
        // a → {b, c} → d is a DAG even though d is reachable twice
        let catalog = sample_catalog().with_project("x", vec![entry("d")]);
        let rules = DependencyRules::new()
            .with_rule("b", ["a"])
            .with_rule("c", ["a"])
            .with_rule("d", ["b", "c"]);
        assert!(validate_config(&catalog, &rules, &DurationEstimator::new()).is_ok());
    }

    #[test]
    fn test_invalid_coefficients() {
        let estimator = DurationEstimator::new()
            .with_coefficients("a", DurationCoefficients::new(-1.0, 0.001))
            .with_multipliers(ComplexityMultipliers {
                low: 0.0,
                medium: 1.0,
                high: f64::NAN,
            });
        let errors =
            validate_config(&sample_catalog(), &DependencyRules::new(), &estimator).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidCoefficient));
    }

    #[test]
    fn test_multiple_errors() {
        let catalog = TaskCatalog::new("missing").with_project("deck", vec![entry("a"), entry("a")]);
        let rules = DependencyRules::new().with_rule("a", ["zzz"]);
        let errors = validate_config(&catalog, &rules, &DurationEstimator::new()).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
