//! Scheduled-dish model.
//!
//! A dish is the scheduled occupancy of one recipe on one burner for a
//! contiguous time window. Dishes are produced once per session by the
//! scheduler; their status is advanced by the session controller and they
//! are never recreated mid-session (rescheduling requires a new session).
//!
//! # Time Model
//! Start times and durations are in minutes relative to the session start
//! (t=0). Windows are half-open: `[start, start + duration)`.

use serde::{Deserialize, Serialize};

use super::{CookingTask, Equipment};

/// One of the two mutually exclusive cooking resources.
///
/// Unlike [`Equipment`], an assignment is always concrete — a dish is
/// never scheduled on `shared`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Burner {
    /// The left burner.
    Left,
    /// The right burner.
    Right,
}

impl From<Burner> for Equipment {
    fn from(burner: Burner) -> Self {
        match burner {
            Burner::Left => Equipment::Left,
            Burner::Right => Equipment::Right,
        }
    }
}

/// Lifecycle status of a scheduled dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishStatus {
    /// Waiting for its time window.
    #[default]
    Pending,
    /// Currently occupying its burner.
    Cooking,
    /// Finished.
    Completed,
}

/// The scheduler's output for one recipe.
///
/// # Invariant
/// Two dishes assigned to the same burner never have overlapping
/// `[start, start + duration)` windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledDish {
    /// Source recipe identifier.
    pub recipe_id: String,
    /// Display name.
    pub recipe_name: String,
    /// Assigned burner.
    pub equipment: Burner,
    /// Start time (minutes, relative to session start).
    pub start_time: i64,
    /// Occupancy duration (minutes).
    pub duration: i64,
    /// Ordered sub-steps carried over from the recipe.
    #[serde(default)]
    pub tasks: Vec<CookingTask>,
    /// Lifecycle status, advanced by the controller.
    #[serde(default)]
    pub status: DishStatus,
}

impl ScheduledDish {
    /// Creates a pending dish.
    pub fn new(
        recipe_id: impl Into<String>,
        recipe_name: impl Into<String>,
        equipment: Burner,
        start_time: i64,
        duration: i64,
    ) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            recipe_name: recipe_name.into(),
            equipment,
            start_time,
            duration,
            tasks: Vec::new(),
            status: DishStatus::Pending,
        }
    }

    /// Sets the dish's sub-steps.
    pub fn with_tasks(mut self, tasks: Vec<CookingTask>) -> Self {
        self.tasks = tasks;
        self
    }

    /// End of the occupancy window (minutes).
    #[inline]
    pub fn end_time(&self) -> i64 {
        self.start_time + self.duration
    }

    /// Whether this dish occupies its burner at the given elapsed time.
    #[inline]
    pub fn is_active_at(&self, elapsed_minutes: i64) -> bool {
        elapsed_minutes >= self.start_time && elapsed_minutes < self.end_time()
    }

    /// Minutes left in the occupancy window at the given elapsed time.
    #[inline]
    pub fn remaining_at(&self, elapsed_minutes: i64) -> i64 {
        (self.end_time() - elapsed_minutes).max(0)
    }
}

/// Total completion time of a schedule: `max(start + duration)` over all
/// dishes, 0 when empty.
pub fn total_duration_minutes(dishes: &[ScheduledDish]) -> i64 {
    dishes.iter().map(ScheduledDish::end_time).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_window() {
        let dish = ScheduledDish::new("r1", "宫保鸡丁", Burner::Left, 10, 25);
        assert_eq!(dish.end_time(), 35);
        // Half-open window: start inclusive, end exclusive.
        assert!(!dish.is_active_at(9));
        assert!(dish.is_active_at(10));
        assert!(dish.is_active_at(34));
        assert!(!dish.is_active_at(35));
    }

    #[test]
    fn test_dish_remaining() {
        let dish = ScheduledDish::new("r1", "宫保鸡丁", Burner::Right, 0, 30);
        assert_eq!(dish.remaining_at(0), 30);
        assert_eq!(dish.remaining_at(12), 18);
        assert_eq!(dish.remaining_at(40), 0);
    }

    #[test]
    fn test_total_duration() {
        let dishes = vec![
            ScheduledDish::new("r1", "a", Burner::Left, 0, 60),
            ScheduledDish::new("r2", "b", Burner::Right, 0, 30),
            ScheduledDish::new("r3", "c", Burner::Right, 30, 40),
        ];
        assert_eq!(total_duration_minutes(&dishes), 70);
        assert_eq!(total_duration_minutes(&[]), 0);
    }

    #[test]
    fn test_burner_to_equipment() {
        assert_eq!(Equipment::from(Burner::Left), Equipment::Left);
        assert_eq!(Equipment::from(Burner::Right), Equipment::Right);
    }
}
