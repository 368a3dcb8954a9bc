//! Live burner-state projection.
//!
//! Derives, from the schedule and the elapsed time, what each burner is
//! doing right now: the occupying dish (at most one per burner, by the
//! scheduler's non-overlap invariant), its first task, and the minutes
//! left in its window. The projection is ephemeral — recomputed on every
//! tick, never persisted.

use crate::models::{Burner, CookingTask, ScheduledDish};

/// What one burner is doing at a given instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BurnerSlot {
    /// Whether a dish currently occupies this burner.
    pub active: bool,
    /// Name of the occupying dish.
    pub recipe_name: Option<String>,
    /// The dish's first task, surfaced for display and voice prompts.
    pub current_task: Option<CookingTask>,
    /// Minutes left in the occupying dish's window (0 when idle).
    pub remaining_minutes: i64,
}

impl BurnerSlot {
    fn project(dishes: &[ScheduledDish], burner: Burner, elapsed_minutes: i64) -> Self {
        match dishes
            .iter()
            .find(|d| d.equipment == burner && d.is_active_at(elapsed_minutes))
        {
            Some(dish) => Self {
                active: true,
                recipe_name: Some(dish.recipe_name.clone()),
                current_task: dish.tasks.first().cloned(),
                remaining_minutes: dish.remaining_at(elapsed_minutes),
            },
            None => Self::default(),
        }
    }
}

/// Snapshot of both burners at a given elapsed time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DualBurnerState {
    /// The left burner.
    pub left: BurnerSlot,
    /// The right burner.
    pub right: BurnerSlot,
}

impl DualBurnerState {
    /// Projects the live state of both burners from the schedule.
    pub fn project(dishes: &[ScheduledDish], elapsed_minutes: i64) -> Self {
        Self {
            left: BurnerSlot::project(dishes, Burner::Left, elapsed_minutes),
            right: BurnerSlot::project(dishes, Burner::Right, elapsed_minutes),
        }
    }
}
