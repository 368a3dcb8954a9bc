//! Cooking-session aggregate.
//!
//! A session is one end-to-end cooking run: the schedule produced for a
//! recipe selection plus lifecycle state. Durable statuses are `pending`,
//! `cooking`, and `completed`; pausing stops the local clock without
//! changing the persisted status, so `paused` exists on the wire but is
//! never written by the controller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{total_duration_minutes, CookingTask, DishStatus, ScheduledDish};

/// Lifecycle status of a cooking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Created, not yet started.
    #[default]
    Pending,
    /// Actively cooking.
    Cooking,
    /// Paused. Carried for wire compatibility; the controller keeps the
    /// durable status at `cooking` while paused.
    Paused,
    /// Finished. Terminal.
    Completed,
}

/// One end-to-end cooking run, owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookingSession {
    /// Unique session identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Display name. `None` = use the generated default.
    #[serde(default)]
    pub name: Option<String>,
    /// IDs of the selected recipes.
    #[serde(default)]
    pub recipes: Vec<String>,
    /// The schedule, produced once at session creation.
    #[serde(default)]
    pub scheduled_dishes: Vec<ScheduledDish>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: SessionStatus,
    /// Progress cursor for "next step" navigation.
    #[serde(default)]
    pub current_step_index: usize,
    /// Set on the transition to `cooking`.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// `started_at + total_duration`, set alongside it.
    #[serde(default)]
    pub estimated_end_time: Option<DateTime<Utc>>,
    /// Set on the transition to `completed`.
    #[serde(default)]
    pub actual_end_time: Option<DateTime<Utc>>,
    /// Schedule makespan (minutes).
    pub total_duration: i64,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl CookingSession {
    /// Creates an empty pending session.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name: None,
            recipes: Vec::new(),
            scheduled_dishes: Vec::new(),
            status: SessionStatus::Pending,
            current_step_index: 0,
            started_at: None,
            estimated_end_time: None,
            actual_end_time: None,
            total_duration: 0,
            notes: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// Creates a pending session holding a freshly computed schedule.
    ///
    /// `total_duration` is derived from the schedule's makespan.
    pub fn from_schedule(
        id: impl Into<String>,
        user_id: impl Into<String>,
        recipes: Vec<String>,
        scheduled_dishes: Vec<ScheduledDish>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let total_duration = total_duration_minutes(&scheduled_dishes);
        Self {
            recipes,
            scheduled_dishes,
            total_duration,
            ..Self::new(id, user_id, created_at)
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The display name, or a generated default when none was given.
    pub fn name_or_default(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("烹饪会话 {}", self.created_at.format("%Y-%m-%d %H:%M")),
        }
    }

    /// Whether the session is actively cooking.
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Cooking
    }

    /// Elapsed cooking time (minutes), recomputed from `started_at`.
    ///
    /// A session reloaded while `cooking` resumes from this value as if it
    /// had never been paused — pauses are not durable.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        match self.started_at {
            Some(started) => (now - started).num_minutes().max(0),
            None => 0,
        }
    }

    /// Minutes left until the estimated end, clamped to zero.
    pub fn remaining_minutes(&self, elapsed_minutes: i64) -> i64 {
        (self.total_duration - elapsed_minutes).max(0)
    }

    /// Completion percentage, clamped to 100.
    pub fn progress_percent(&self, elapsed_minutes: i64) -> f64 {
        if self.total_duration <= 0 {
            return 0.0;
        }
        ((elapsed_minutes as f64 / self.total_duration as f64) * 100.0).min(100.0)
    }

    /// The dish whose task list drives step navigation: the first dish
    /// that is cooking or still pending.
    pub fn current_dish(&self) -> Option<&ScheduledDish> {
        self.scheduled_dishes
            .iter()
            .find(|d| d.status == DishStatus::Cooking || d.status == DishStatus::Pending)
    }

    /// The task at the current step cursor, if any.
    pub fn current_task(&self) -> Option<&CookingTask> {
        self.current_dish()
            .and_then(|dish| dish.tasks.get(self.current_step_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Burner;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 18, minute, 0).unwrap()
    }

    fn sample_dishes() -> Vec<ScheduledDish> {
        vec![
            ScheduledDish::new("r1", "红烧肉", Burner::Left, 0, 60).with_tasks(vec![
                CookingTask::new("t1", "焯水", 5),
                CookingTask::new("t2", "炖煮", 50),
            ]),
            ScheduledDish::new("r2", "番茄炒蛋", Burner::Right, 0, 25),
        ]
    }

    #[test]
    fn test_from_schedule_totals() {
        let session = CookingSession::from_schedule(
            "s1",
            "u1",
            vec!["r1".into(), "r2".into()],
            sample_dishes(),
            at(0),
        );
        assert_eq!(session.status, SessionStatus::Pending);
        assert_eq!(session.total_duration, 60);
        assert_eq!(session.recipes.len(), 2);
        assert!(session.started_at.is_none());
    }

    #[test]
    fn test_name_default() {
        let session = CookingSession::new("s1", "u1", at(30));
        assert_eq!(session.name_or_default(), "烹饪会话 2024-03-01 18:30");

        let named = CookingSession::new("s2", "u1", at(30)).with_name("晚餐");
        assert_eq!(named.name_or_default(), "晚餐");
    }

    #[test]
    fn test_elapsed_and_remaining() {
        let mut session =
            CookingSession::from_schedule("s1", "u1", vec![], sample_dishes(), at(0));
        assert_eq!(session.elapsed_minutes(at(10)), 0); // Not started

        session.started_at = Some(at(0));
        assert_eq!(session.elapsed_minutes(at(10)), 10);
        assert_eq!(session.remaining_minutes(10), 50);
        assert_eq!(session.remaining_minutes(90), 0);
    }

    #[test]
    fn test_progress_percent_clamped() {
        let session = CookingSession::from_schedule("s1", "u1", vec![], sample_dishes(), at(0));
        assert!((session.progress_percent(30) - 50.0).abs() < 1e-10);
        assert!((session.progress_percent(120) - 100.0).abs() < 1e-10);

        let empty = CookingSession::new("s2", "u1", at(0));
        assert!((empty.progress_percent(10) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_current_task_follows_cursor() {
        let mut session =
            CookingSession::from_schedule("s1", "u1", vec![], sample_dishes(), at(0));
        assert_eq!(session.current_task().unwrap().id, "t1");

        session.current_step_index = 1;
        assert_eq!(session.current_task().unwrap().id, "t2");

        session.current_step_index = 5;
        assert!(session.current_task().is_none());
    }

    #[test]
    fn test_current_dish_skips_completed() {
        let mut session =
            CookingSession::from_schedule("s1", "u1", vec![], sample_dishes(), at(0));
        session.scheduled_dishes[0].status = DishStatus::Completed;
        assert_eq!(session.current_dish().unwrap().recipe_id, "r2");
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Cooking).unwrap(),
            "\"cooking\""
        );
        let parsed: SessionStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(parsed, SessionStatus::Paused);
    }
}
