//! Cooking-progress log records.
//!
//! Append-only audit trail of a session's real execution: one record per
//! task start/completion, including observed duration and the voice
//! prompts issued while the step was active. Records are never mutated
//! after completion and are not used to re-derive the schedule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Equipment;

/// Execution status of a progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    /// Recorded but not yet started.
    #[default]
    Pending,
    /// The step is currently running.
    Active,
    /// The step finished.
    Completed,
    /// The step was skipped.
    Skipped,
}

/// One observed execution of a task within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookingProgress {
    /// Record identifier.
    pub id: String,
    /// Owning session.
    pub session_id: String,
    /// Step cursor position this record covers.
    pub step_index: usize,
    /// Equipment the step ran on.
    pub equipment: Equipment,
    /// Execution status.
    pub status: ProgressStatus,
    /// When the step started.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// When the step completed.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Observed duration in seconds, set on completion.
    #[serde(default)]
    pub duration_seconds: Option<i64>,
    /// Temperature observed/declared for the step (°C).
    #[serde(default)]
    pub temperature: Option<i64>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Voice prompts issued while this step was active.
    #[serde(default)]
    pub voice_prompts: Vec<String>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl CookingProgress {
    /// Creates an active record for a step that just started.
    pub fn started(
        session_id: impl Into<String>,
        step_index: usize,
        equipment: Equipment,
        now: DateTime<Utc>,
    ) -> Self {
        let session_id = session_id.into();
        Self {
            id: format!("{session_id}:{step_index}"),
            session_id,
            step_index,
            equipment,
            status: ProgressStatus::Active,
            started_at: Some(now),
            completed_at: None,
            duration_seconds: None,
            temperature: None,
            notes: None,
            voice_prompts: Vec::new(),
            created_at: now,
        }
    }

    /// Sets the step temperature (°C).
    pub fn with_temperature(mut self, celsius: i64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Marks the record completed, deriving the observed duration.
    ///
    /// The record is frozen afterwards.
    pub fn mark_completed(&mut self, now: DateTime<Utc>) {
        self.status = ProgressStatus::Completed;
        self.completed_at = Some(now);
        if let Some(started) = self.started_at {
            self.duration_seconds = Some((now - started).num_seconds().max(0));
        }
    }

    /// Records a voice prompt issued while this step was active.
    pub fn record_prompt(&mut self, prompt: impl Into<String>) {
        self.voice_prompts.push(prompt.into());
    }
}
