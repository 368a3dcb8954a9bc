//! Session persistence and recipe-source boundaries.
//!
//! The core computes in-process; durable storage belongs to an external
//! document store reached through [`SessionStore`]. Updates are partial
//! ([`SessionPatch`]) and last-write-wins — the core does not implement
//! optimistic concurrency, which is acceptable for a single-user-at-a-time
//! kitchen console.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{CookingSession, RecipeInput, SessionStatus};

mod memory;

pub use memory::{MemoryStore, StaticRecipeSource};

/// A recoverable store failure.
///
/// Callers may retry the same operation; the session controller leaves
/// its in-memory state unchanged when a write fails.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No session with the given ID exists.
    #[error("session '{0}' not found")]
    NotFound(String),
    /// The backend could not be reached or refused the operation.
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    /// Stored data could not be decoded into a session.
    #[error("stored session could not be decoded: {0}")]
    InvalidData(String),
}

/// Partial-update shape for [`SessionStore::update`].
///
/// Only the populated fields are written; everything else keeps its
/// stored value.
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    /// New lifecycle status.
    pub status: Option<SessionStatus>,
    /// New step cursor.
    pub current_step_index: Option<usize>,
    /// Start timestamp.
    pub started_at: Option<DateTime<Utc>>,
    /// Estimated completion timestamp.
    pub estimated_end_time: Option<DateTime<Utc>>,
    /// Actual completion timestamp.
    pub actual_end_time: Option<DateTime<Utc>>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Modification timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl SessionPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status.
    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the step cursor.
    pub fn with_current_step_index(mut self, index: usize) -> Self {
        self.current_step_index = Some(index);
        self
    }

    /// Sets the start timestamp.
    pub fn with_started_at(mut self, at: DateTime<Utc>) -> Self {
        self.started_at = Some(at);
        self
    }

    /// Sets the estimated completion timestamp.
    pub fn with_estimated_end_time(mut self, at: DateTime<Utc>) -> Self {
        self.estimated_end_time = Some(at);
        self
    }

    /// Sets the actual completion timestamp.
    pub fn with_actual_end_time(mut self, at: DateTime<Utc>) -> Self {
        self.actual_end_time = Some(at);
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the modification timestamp.
    pub fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Applies the populated fields to a session.
    pub fn apply(&self, session: &mut CookingSession) {
        if let Some(status) = self.status {
            session.status = status;
        }
        if let Some(index) = self.current_step_index {
            session.current_step_index = index;
        }
        if let Some(at) = self.started_at {
            session.started_at = Some(at);
        }
        if let Some(at) = self.estimated_end_time {
            session.estimated_end_time = Some(at);
        }
        if let Some(at) = self.actual_end_time {
            session.actual_end_time = Some(at);
        }
        if let Some(notes) = &self.notes {
            session.notes = Some(notes.clone());
        }
        if let Some(at) = self.updated_at {
            session.updated_at = at;
        }
    }
}

/// Durable storage for cooking sessions.
///
/// Backends must support arbitrary nested storage of the dish list and
/// task sub-lists (schemaless or document-like).
pub trait SessionStore {
    /// Persists a new session, returning its ID.
    fn create(&mut self, session: CookingSession) -> Result<String, StoreError>;

    /// Fetches a session, `None` when it does not exist.
    fn get(&self, id: &str) -> Result<Option<CookingSession>, StoreError>;

    /// Applies a partial update and returns the updated session.
    fn update(&mut self, id: &str, patch: SessionPatch) -> Result<CookingSession, StoreError>;

    /// Lists all sessions owned by a user.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<CookingSession>, StoreError>;

    /// The user's currently cooking session, if any.
    fn active_for_user(&self, user_id: &str) -> Result<Option<CookingSession>, StoreError> {
        Ok(self
            .list_for_user(user_id)?
            .into_iter()
            .find(|s| s.status == SessionStatus::Cooking))
    }

    /// The user's most recently created completed sessions, newest first.
    fn recent_completed_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<CookingSession>, StoreError> {
        let mut sessions: Vec<CookingSession> = self
            .list_for_user(user_id)?
            .into_iter()
            .filter(|s| s.status == SessionStatus::Completed)
            .collect();
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sessions.truncate(limit);
        Ok(sessions)
    }
}

/// Supplies the recipes available for selection.
///
/// Remote implementations should be wrapped with a caller-side timeout
/// and a fallback list (see [`StaticRecipeSource`]) so the selection
/// screen never blocks on a slow backend.
pub trait RecipeSource {
    /// Lists the recipes that can be scheduled.
    fn list_cookable(&self) -> Result<Vec<RecipeInput>, StoreError>;
}
