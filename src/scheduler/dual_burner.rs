//! Dual-burner greedy scheduler.
//!
//! # Algorithm
//!
//! Longest-processing-time-first list scheduling over two machines:
//!
//! 1. Compute each recipe's total duration (cook + prep, with defaults).
//! 2. Sort by descending total duration (stable — equal durations keep
//!    input order).
//! 3. Walk the sorted list, tracking each burner's running end time. A
//!    recipe goes to its explicitly preferred burner when it has one;
//!    otherwise to whichever burner frees up first, with `left` winning
//!    ties. Its start time is the chosen burner's current end time.
//!
//! An explicit preference always wins over load balance, so a set of
//! recipes all pinned to one burner serializes on it while the other
//! stays idle.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for assignment.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies" — LPT list
//! scheduling is a 4/3-approximation of the optimal makespan on identical
//! machines.

use std::cmp::Reverse;

use crate::models::{total_duration_minutes, Burner, Equipment, RecipeInput, ScheduledDish};

/// Assigns each recipe to one of the two burners and computes start times
/// so that same-burner windows never overlap.
///
/// Never fails: an empty selection yields an empty schedule, and missing
/// or negative durations are normalized by [`RecipeInput`]'s defaults.
///
/// # Example
///
/// ```
/// use smart_chef::models::RecipeInput;
/// use smart_chef::scheduler::schedule_dual_burner;
///
/// let recipes = vec![
///     RecipeInput::new("r1", "红烧肉").with_cooking_time(60).with_prep_time(0),
///     RecipeInput::new("r2", "番茄炒蛋").with_cooking_time(30).with_prep_time(0),
/// ];
/// let dishes = schedule_dual_burner(&recipes);
/// assert_eq!(dishes.len(), 2);
/// ```
pub fn schedule_dual_burner(recipes: &[RecipeInput]) -> Vec<ScheduledDish> {
    // Stable sort keeps input order for equal durations.
    let mut order: Vec<usize> = (0..recipes.len()).collect();
    order.sort_by_key(|&i| Reverse(recipes[i].total_duration()));

    let mut left_end: i64 = 0;
    let mut right_end: i64 = 0;
    let mut dishes = Vec::with_capacity(recipes.len());

    for &i in &order {
        let recipe = &recipes[i];
        let duration = recipe.total_duration();

        let burner = match recipe.preferred_equipment() {
            Equipment::Left => Burner::Left,
            Equipment::Right => Burner::Right,
            Equipment::Shared => {
                if left_end <= right_end {
                    Burner::Left
                } else {
                    Burner::Right
                }
            }
        };

        let start_time = match burner {
            Burner::Left => {
                let start = left_end;
                left_end += duration;
                start
            }
            Burner::Right => {
                let start = right_end;
                right_end += duration;
                start
            }
        };

        dishes.push(
            ScheduledDish::new(&recipe.id, &recipe.name, burner, start_time, duration)
                .with_tasks(recipe.parallel_tasks.clone()),
        );
    }

    tracing::debug!(
        recipes = recipes.len(),
        makespan = total_duration_minutes(&dishes),
        "dual-burner schedule computed"
    );
    dishes
}

/// Estimated completion time of a schedule (minutes): the makespan,
/// `max(start + duration)` over all dishes, 0 when empty.
pub fn estimated_end_time(dishes: &[ScheduledDish]) -> i64 {
    total_duration_minutes(dishes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn recipe(id: &str, cooking: i64, prep: i64) -> RecipeInput {
        RecipeInput::new(id, id)
            .with_cooking_time(cooking)
            .with_prep_time(prep)
    }

    fn find<'a>(dishes: &'a [ScheduledDish], id: &str) -> &'a ScheduledDish {
        dishes.iter().find(|d| d.recipe_id == id).unwrap()
    }

    #[test]
    fn test_empty_selection() {
        let dishes = schedule_dual_burner(&[]);
        assert!(dishes.is_empty());
        assert_eq!(estimated_end_time(&dishes), 0);
    }

    #[test]
    fn test_single_recipe_goes_left() {
        let dishes = schedule_dual_burner(&[recipe("r1", 45, 15)]);
        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].equipment, Burner::Left);
        assert_eq!(dishes[0].start_time, 0);
        assert_eq!(dishes[0].duration, 60);
        assert_eq!(estimated_end_time(&dishes), 60);
    }

    #[test]
    fn test_three_recipes_balance() {
        // Longest fills left; the two shorter ones queue on right.
        let recipes = vec![
            recipe("r1", 60, 0),
            recipe("r2", 30, 0),
            recipe("r3", 30, 0),
        ];
        let dishes = schedule_dual_burner(&recipes);

        let r1 = find(&dishes, "r1");
        assert_eq!((r1.equipment, r1.start_time, r1.end_time()), (Burner::Left, 0, 60));
        let r2 = find(&dishes, "r2");
        assert_eq!((r2.equipment, r2.start_time, r2.end_time()), (Burner::Right, 0, 30));
        let r3 = find(&dishes, "r3");
        assert_eq!((r3.equipment, r3.start_time, r3.end_time()), (Burner::Right, 30, 60));

        assert_eq!(estimated_end_time(&dishes), 60);
    }

    #[test]
    fn test_no_same_burner_overlap() {
        let recipes = vec![
            recipe("a", 50, 10),
            recipe("b", 20, 5),
            recipe("c", 35, 0),
            recipe("d", 15, 15),
            RecipeInput::new("e", "e").with_affinity(Equipment::Left),
        ];
        let dishes = schedule_dual_burner(&recipes);

        for x in &dishes {
            for y in &dishes {
                if x.recipe_id != y.recipe_id && x.equipment == y.equipment {
                    let disjoint = x.end_time() <= y.start_time || y.end_time() <= x.start_time;
                    assert!(disjoint, "{} and {} overlap", x.recipe_id, y.recipe_id);
                }
            }
        }
    }

    #[test]
    fn test_every_recipe_scheduled_exactly_once() {
        let recipes = vec![recipe("a", 10, 0), recipe("b", 20, 0), recipe("c", 30, 0)];
        let dishes = schedule_dual_burner(&recipes);

        let input_ids: HashSet<_> = recipes.iter().map(|r| r.id.as_str()).collect();
        let output_ids: HashSet<_> = dishes.iter().map(|d| d.recipe_id.as_str()).collect();
        assert_eq!(dishes.len(), recipes.len());
        assert_eq!(input_ids, output_ids);
    }

    #[test]
    fn test_deterministic() {
        let recipes = vec![
            recipe("a", 25, 5),
            recipe("b", 25, 5),
            recipe("c", 40, 0),
            RecipeInput::new("d", "d").with_affinity(Equipment::Right),
        ];
        let first = schedule_dual_burner(&recipes);
        let second = schedule_dual_burner(&recipes);

        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.recipe_id, y.recipe_id);
            assert_eq!(x.equipment, y.equipment);
            assert_eq!(x.start_time, y.start_time);
            assert_eq!(x.duration, y.duration);
        }
    }

    #[test]
    fn test_explicit_preference_beats_load_balance() {
        // Left is already loaded; r3 still insists on left.
        let recipes = vec![
            recipe("r1", 90, 0),
            recipe("r2", 10, 0),
            RecipeInput::new("r3", "r3")
                .with_cooking_time(10)
                .with_prep_time(0)
                .with_affinity(Equipment::Left),
        ];
        let dishes = schedule_dual_burner(&recipes);
        assert_eq!(find(&dishes, "r3").equipment, Burner::Left);
        assert_eq!(find(&dishes, "r3").start_time, 90);
    }

    #[test]
    fn test_right_preference_honored() {
        let dishes = schedule_dual_burner(&[
            RecipeInput::new("r1", "r1").with_affinity(Equipment::Right)
        ]);
        assert_eq!(dishes[0].equipment, Burner::Right);
        assert_eq!(dishes[0].start_time, 0);
    }

    #[test]
    fn test_same_preference_serializes() {
        let recipes = vec![
            recipe("a", 30, 0).with_affinity(Equipment::Left),
            recipe("b", 20, 0).with_affinity(Equipment::Left),
            recipe("c", 10, 0).with_affinity(Equipment::Left),
        ];
        let dishes = schedule_dual_burner(&recipes);
        assert!(dishes.iter().all(|d| d.equipment == Burner::Left));
        // Sorted order: a(30) @ 0, b(20) @ 30, c(10) @ 50.
        assert_eq!(find(&dishes, "a").start_time, 0);
        assert_eq!(find(&dishes, "b").start_time, 30);
        assert_eq!(find(&dishes, "c").start_time, 50);
        assert_eq!(estimated_end_time(&dishes), 60);
    }

    #[test]
    fn test_equal_durations_keep_input_order() {
        let recipes = vec![recipe("x", 30, 0), recipe("y", 30, 0), recipe("z", 30, 0)];
        let dishes = schedule_dual_burner(&recipes);
        // x first (ties favor left), y to the shorter right queue, z back
        // onto left once it ties again.
        assert_eq!(dishes[0].recipe_id, "x");
        assert_eq!(dishes[0].equipment, Burner::Left);
        assert_eq!(dishes[1].recipe_id, "y");
        assert_eq!(dishes[1].equipment, Burner::Right);
        assert_eq!(dishes[2].recipe_id, "z");
        assert_eq!(dishes[2].equipment, Burner::Left);
        assert_eq!(dishes[2].start_time, 30);
    }

    #[test]
    fn test_defaults_applied_to_sparse_input() {
        let dishes = schedule_dual_burner(&[RecipeInput::new("r1", "清蒸鲈鱼")]);
        assert_eq!(dishes[0].duration, 40); // 30 cook + 10 prep
    }

    #[test]
    fn test_tasks_carried_over() {
        use crate::models::CookingTask;
        let recipes = vec![RecipeInput::new("r1", "红烧肉")
            .with_cooking_time(60)
            .with_task(CookingTask::new("t1", "焯水", 5))
            .with_task(CookingTask::new("t2", "炖煮", 50))];
        let dishes = schedule_dual_burner(&recipes);
        assert_eq!(dishes[0].tasks.len(), 2);
        assert_eq!(dishes[0].tasks[0].name, "焯水");
    }
}
