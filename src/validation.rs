//! Structural validation for recipe selections and schedules.
//!
//! Advisory integrity checks run at the scheduler boundary by callers
//! that want them — the scheduler itself never fails and normalizes bad
//! durations instead of rejecting them. Detects:
//! - Duplicate recipe and task IDs
//! - Task dependencies referencing unknown tasks
//! - Circular task dependencies (DFS cycle detection)
//! - Same-burner window overlaps in a computed schedule
//!
//! All problems are collected; nothing short-circuits.

use std::collections::{HashMap, HashSet};

use crate::models::{RecipeInput, ScheduledDish};

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
    /// Two entities share the same ID.
    DuplicateId,
    /// A task depends on a task that doesn't exist in its recipe.
    InvalidDependency,
    /// Task dependencies form a cycle.
    CyclicDependency,
    /// Two dishes on the same burner have overlapping windows.
    OverlappingDishes,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a recipe selection before scheduling.
///
/// Checks:
/// 1. No duplicate recipe IDs
/// 2. No duplicate task IDs within a recipe
/// 3. Task dependencies reference tasks of the same recipe
/// 4. No circular task dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_recipes(recipes: &[RecipeInput]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut recipe_ids = HashSet::new();
    for recipe in recipes {
        if !recipe_ids.insert(recipe.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate recipe ID: {}", recipe.id),
            ));
        }

        // Tasks are owned by their recipe; IDs and dependencies are
        // resolved within it.
        let mut task_ids = HashSet::new();
        for task in &recipe.parallel_tasks {
            if !task_ids.insert(task.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate task ID '{}' in recipe '{}'", task.id, recipe.id),
                ));
            }
        }

        for task in &recipe.parallel_tasks {
            for dep in &task.dependencies {
                if !task_ids.contains(dep.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidDependency,
                        format!(
                            "Task '{}' in recipe '{}' depends on unknown task '{}'",
                            task.id, recipe.id, dep
                        ),
                    ));
                }
            }
        }

        if let Some(cycle_err) = detect_cycles(recipe) {
            errors.push(cycle_err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a computed schedule's burner-exclusivity invariant: no two
/// dishes on the same burner may have overlapping `[start, start+duration)`
/// windows.
pub fn validate_schedule(dishes: &[ScheduledDish]) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, a) in dishes.iter().enumerate() {
        for b in dishes.iter().skip(i + 1) {
            if a.equipment == b.equipment
                && a.start_time < b.end_time()
                && b.start_time < a.end_time()
            {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingDishes,
                    format!(
                        "Dishes '{}' and '{}' overlap on the same burner",
                        a.recipe_id, b.recipe_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in a recipe's task dependency graph using DFS.
///
/// # Algorithm
/// DFS with a recursion stack; a back edge (reaching a node already on
/// the stack) means a cycle.
fn detect_cycles(recipe: &RecipeInput) -> Option<ValidationError> {
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut all_ids: HashSet<&str> = HashSet::new();

    for task in &recipe.parallel_tasks {
        all_ids.insert(&task.id);
        for dep in &task.dependencies {
            adj.entry(dep.as_str()).or_default().push(task.id.as_str());
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in &all_ids {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!(
                    "Circular dependency in recipe '{}' involving task '{node}'",
                    recipe.id
                ),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Burner, CookingTask};

    fn recipe_with_tasks(id: &str, tasks: Vec<CookingTask>) -> RecipeInput {
        let mut recipe = RecipeInput::new(id, id).with_cooking_time(30);
        recipe.parallel_tasks = tasks;
        recipe
    }

    #[test]
    fn test_valid_selection() {
        let recipes = vec![
            recipe_with_tasks(
                "r1",
                vec![
                    CookingTask::new("t1", "切菜", 5),
                    CookingTask::new("t2", "翻炒", 10).with_dependency("t1"),
                ],
            ),
            recipe_with_tasks("r2", vec![]),
        ];
        assert!(validate_recipes(&recipes).is_ok());
    }

    #[test]
    fn test_duplicate_recipe_id() {
        let recipes = vec![RecipeInput::new("r1", "a"), RecipeInput::new("r1", "b")];
        let errors = validate_recipes(&recipes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_duplicate_task_id() {
        let recipes = vec![recipe_with_tasks(
            "r1",
            vec![
                CookingTask::new("t1", "a", 5),
                CookingTask::new("t1", "b", 5),
            ],
        )];
        let errors = validate_recipes(&recipes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("task")));
    }

    #[test]
    fn test_unknown_dependency() {
        let recipes = vec![recipe_with_tasks(
            "r1",
            vec![CookingTask::new("t1", "a", 5).with_dependency("missing")],
        )];
        let errors = validate_recipes(&recipes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidDependency));
    }

    #[test]
    fn test_cyclic_dependency() {
        // t1 → t2 → t3 → t1
        let recipes = vec![recipe_with_tasks(
            "r1",
            vec![
                CookingTask::new("t1", "a", 5).with_dependency("t3"),
                CookingTask::new("t2", "b", 5).with_dependency("t1"),
                CookingTask::new("t3", "c", 5).with_dependency("t2"),
            ],
        )];
        let errors = validate_recipes(&recipes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicDependency));
    }

    #[test]
    fn test_linear_chain_is_acyclic() {
        let recipes = vec![recipe_with_tasks(
            "r1",
            vec![
                CookingTask::new("t1", "a", 5),
                CookingTask::new("t2", "b", 5).with_dependency("t1"),
                CookingTask::new("t3", "c", 5).with_dependency("t2"),
            ],
        )];
        assert!(validate_recipes(&recipes).is_ok());
    }

    #[test]
    fn test_schedule_overlap_detected() {
        let dishes = vec![
            ScheduledDish::new("r1", "a", Burner::Left, 0, 30),
            ScheduledDish::new("r2", "b", Burner::Left, 20, 30),
        ];
        let errors = validate_schedule(&dishes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OverlappingDishes));
    }

    #[test]
    fn test_schedule_adjacent_windows_ok() {
        // Back-to-back windows share an endpoint but don't overlap.
        let dishes = vec![
            ScheduledDish::new("r1", "a", Burner::Left, 0, 30),
            ScheduledDish::new("r2", "b", Burner::Left, 30, 30),
            ScheduledDish::new("r3", "c", Burner::Right, 0, 45),
        ];
        assert!(validate_schedule(&dishes).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let recipes = vec![
            RecipeInput::new("r1", "a"),
            RecipeInput::new("r1", "b"),
            recipe_with_tasks(
                "r2",
                vec![CookingTask::new("t1", "x", 5).with_dependency("missing")],
            ),
        ];
        let errors = validate_recipes(&recipes).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
