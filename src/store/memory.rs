//! In-memory store implementations.
//!
//! [`MemoryStore`] backs tests and doubles as the client-local staging
//! area for sessions not yet durably persisted (keyed by session ID, same
//! shape as the durable store). [`StaticRecipeSource`] carries the bundled
//! fallback recipes so selection always works when the backend is
//! unreachable.

use std::collections::HashMap;

use crate::models::{CookingSession, RecipeInput};

use super::{RecipeSource, SessionPatch, SessionStore, StoreError};

/// In-process session store keyed by session ID.
///
/// Writes are last-write-wins, matching the semantics assumed of the
/// external backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sessions: HashMap<String, CookingSession>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn create(&mut self, session: CookingSession) -> Result<String, StoreError> {
        let id = session.id.clone();
        self.sessions.insert(id.clone(), session);
        Ok(id)
    }

    fn get(&self, id: &str) -> Result<Option<CookingSession>, StoreError> {
        Ok(self.sessions.get(id).cloned())
    }

    fn update(&mut self, id: &str, patch: SessionPatch) -> Result<CookingSession, StoreError> {
        let session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        patch.apply(session);
        Ok(session.clone())
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<CookingSession>, StoreError> {
        Ok(self
            .sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// A fixed recipe list served without any backend.
#[derive(Debug, Clone)]
pub struct StaticRecipeSource {
    recipes: Vec<RecipeInput>,
}

impl StaticRecipeSource {
    /// Creates a source over the given recipes.
    pub fn new(recipes: Vec<RecipeInput>) -> Self {
        Self { recipes }
    }

    /// The bundled fallback recipes.
    pub fn builtin() -> Self {
        Self::new(vec![
            RecipeInput::new("fb1", "番茄炒蛋").with_cooking_time(15),
            RecipeInput::new("fb2", "宫保鸡丁").with_cooking_time(25),
            RecipeInput::new("fb3", "清蒸鲈鱼").with_cooking_time(20),
            RecipeInput::new("fb4", "西兰花炒虾仁").with_cooking_time(15),
            RecipeInput::new("fb5", "红烧肉").with_cooking_time(60),
        ])
    }
}

impl Default for StaticRecipeSource {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RecipeSource for StaticRecipeSource {
    fn list_cookable(&self) -> Result<Vec<RecipeInput>, StoreError> {
        Ok(self.recipes.clone())
    }
}
