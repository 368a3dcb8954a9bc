//! Cooking domain models.
//!
//! The durable data types shared by the scheduler, the live session
//! machinery, and the session store: recipes and their sub-step tasks,
//! scheduled dishes, the session aggregate, and the append-only progress
//! log. All of them serialize to the document shapes the external store
//! expects (lowercase status and equipment names).

mod dish;
mod progress;
mod recipe;
mod session;

pub use dish::{total_duration_minutes, Burner, DishStatus, ScheduledDish};
pub use progress::{CookingProgress, ProgressStatus};
pub use recipe::{
    CookingTask, Equipment, RecipeInput, TaskStatus, DEFAULT_COOKING_MINUTES, DEFAULT_PREP_MINUTES,
};
pub use session::{CookingSession, SessionStatus};
