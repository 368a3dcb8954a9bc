//! Recipe input and cooking-task models.
//!
//! A recipe is the unit of selection: it contributes one dish to the
//! schedule, occupying a single burner for its prep + cook duration.
//! Tasks are the named sub-steps of a dish's preparation, navigated by
//! voice ("next step") rather than by the clock.
//!
//! # Duration Model
//! All durations are in minutes. Missing or negative cooking/prep times
//! are normalized to defaults; an explicit zero is kept as-is.

use serde::{Deserialize, Serialize};

/// Cooking time (minutes) assumed when a recipe declares none.
pub const DEFAULT_COOKING_MINUTES: i64 = 30;
/// Preparation time (minutes) assumed when a recipe declares none.
pub const DEFAULT_PREP_MINUTES: i64 = 10;

/// Equipment affinity of a recipe or task.
///
/// `Left` and `Right` pin the work to a specific burner; `Shared` means
/// no preference and lets the scheduler balance load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    /// The left burner.
    Left,
    /// The right burner.
    Right,
    /// No preference; either burner may be used.
    #[default]
    Shared,
}

/// Execution status of a cooking task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not yet started.
    #[default]
    Pending,
    /// Currently being performed.
    Active,
    /// Finished.
    Completed,
}

/// A named sub-step of a dish's preparation.
///
/// Tasks are owned by their dish and never shared across dishes.
/// Dependencies reference other task IDs within the same recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookingTask {
    /// Unique task identifier (within the owning recipe).
    pub id: String,
    /// Human-readable step name.
    pub name: String,
    /// Expected duration (minutes).
    pub duration: i64,
    /// Equipment affinity of this step.
    #[serde(default)]
    pub equipment: Equipment,
    /// IDs of tasks that must complete before this one starts.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Ordering priority (higher = earlier). `None` = unspecified.
    #[serde(default)]
    pub priority: Option<i32>,
    /// Target temperature (°C) if this step declares one.
    #[serde(default)]
    pub temperature: Option<i64>,
    /// Execution status, mutated as cooking progresses.
    #[serde(default)]
    pub status: TaskStatus,
}

impl CookingTask {
    /// Creates a pending task.
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration_minutes: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration: duration_minutes,
            equipment: Equipment::Shared,
            dependencies: Vec::new(),
            priority: None,
            temperature: None,
            status: TaskStatus::Pending,
        }
    }

    /// Sets the equipment affinity.
    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = equipment;
        self
    }

    /// Adds a dependency on another task ID.
    pub fn with_dependency(mut self, task_id: impl Into<String>) -> Self {
        self.dependencies.push(task_id.into());
        self
    }

    /// Sets the ordering priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the target temperature (°C).
    pub fn with_temperature(mut self, celsius: i64) -> Self {
        self.temperature = Some(celsius);
        self
    }
}

/// A recipe as accepted by the scheduler.
///
/// Optional fields use documented defaults: `cooking_time` falls back to
/// [`DEFAULT_COOKING_MINUTES`], `prep_time` to [`DEFAULT_PREP_MINUTES`].
/// The first entry of `equipment_needed`, if any, is the preferred burner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeInput {
    /// Unique recipe identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Active cooking time (minutes). `None` = use default.
    #[serde(default)]
    pub cooking_time: Option<i64>,
    /// Preparation time (minutes). `None` = use default.
    #[serde(default)]
    pub prep_time: Option<i64>,
    /// Equipment affinities in preference order. Empty = no preference.
    #[serde(default)]
    pub equipment_needed: Vec<Equipment>,
    /// Sub-steps surfaced to the cook during the session.
    #[serde(default)]
    pub parallel_tasks: Vec<CookingTask>,
}

impl RecipeInput {
    /// Creates a recipe with no declared times or affinities.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cooking_time: None,
            prep_time: None,
            equipment_needed: Vec::new(),
            parallel_tasks: Vec::new(),
        }
    }

    /// Sets the cooking time (minutes).
    pub fn with_cooking_time(mut self, minutes: i64) -> Self {
        self.cooking_time = Some(minutes);
        self
    }

    /// Sets the preparation time (minutes).
    pub fn with_prep_time(mut self, minutes: i64) -> Self {
        self.prep_time = Some(minutes);
        self
    }

    /// Appends an equipment affinity (first one added = preferred).
    pub fn with_affinity(mut self, equipment: Equipment) -> Self {
        self.equipment_needed.push(equipment);
        self
    }

    /// Adds a sub-step task.
    pub fn with_task(mut self, task: CookingTask) -> Self {
        self.parallel_tasks.push(task);
        self
    }

    /// Cooking time after normalization: missing or negative values fall
    /// back to the default; an explicit zero is preserved.
    pub fn effective_cooking_time(&self) -> i64 {
        match self.cooking_time {
            Some(v) if v >= 0 => v,
            _ => DEFAULT_COOKING_MINUTES,
        }
    }

    /// Prep time after normalization (same rules as cooking time).
    pub fn effective_prep_time(&self) -> i64 {
        match self.prep_time {
            Some(v) if v >= 0 => v,
            _ => DEFAULT_PREP_MINUTES,
        }
    }

    /// Total burner occupancy (cook + prep) in minutes.
    pub fn total_duration(&self) -> i64 {
        self.effective_cooking_time() + self.effective_prep_time()
    }

    /// The preferred burner: first declared affinity, `Shared` when none.
    pub fn preferred_equipment(&self) -> Equipment {
        self.equipment_needed
            .first()
            .copied()
            .unwrap_or(Equipment::Shared)
    }
}
