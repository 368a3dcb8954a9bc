//! Session controller.
//!
//! Orchestrates one cooking session's lifecycle: starting, pausing,
//! advancing steps, answering queries, and completing. Voice intents and
//! UI button events funnel into the same methods, so both paths share one
//! state machine.
//!
//! The controller is constructed with an explicit [`CookingSession`] — it
//! holds no global state and serializes its own transitions (single
//! logical thread of control; wrap in a mutex or single-writer actor if
//! driven from multiple OS threads).
//!
//! # Persistence
//! Durable transitions write to the store first and mutate in-memory
//! state only on success, so a failed write leaves no torn state and the
//! same transition can be retried.
//!
//! # State violations
//! Double `start`, `complete` while pending, and similar out-of-order
//! calls are idempotent no-ops — a live kitchen session is never crashed
//! over a double-tap.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    CookingProgress, CookingSession, DishStatus, Equipment, ProgressStatus, SessionStatus,
    TaskStatus,
};
use crate::store::{SessionPatch, SessionStore, StoreError};
use crate::voice::{
    parse_command, prompts, QueryTarget, SpeechCapability, VoiceCommand, DEFAULT_SPEECH_RATE,
};

use super::{DualBurnerState, SessionClock};

/// Drives one cooking session through its lifecycle.
pub struct SessionController<S, V>
where
    S: SessionStore,
    V: SpeechCapability,
{
    session: CookingSession,
    clock: SessionClock,
    store: S,
    speech: V,
    voice_enabled: bool,
    progress: Vec<CookingProgress>,
}

impl<S, V> SessionController<S, V>
where
    S: SessionStore,
    V: SpeechCapability,
{
    /// Creates a controller over an explicit session.
    ///
    /// The clock starts stopped at zero; call [`sync_clock`] when
    /// attaching to a session that is already cooking.
    ///
    /// [`sync_clock`]: SessionController::sync_clock
    pub fn new(session: CookingSession, store: S, speech: V) -> Self {
        Self {
            session,
            clock: SessionClock::new(),
            store,
            speech,
            voice_enabled: true,
            progress: Vec::new(),
        }
    }

    /// Disables or re-enables spoken prompts.
    pub fn with_voice_enabled(mut self, enabled: bool) -> Self {
        self.voice_enabled = enabled;
        self
    }

    /// The session being driven.
    pub fn session(&self) -> &CookingSession {
        &self.session
    }

    /// The append-only execution log accumulated so far.
    pub fn progress_log(&self) -> &[CookingProgress] {
        &self.progress
    }

    /// Simulated elapsed cooking time (minutes).
    pub fn elapsed_minutes(&self) -> i64 {
        self.clock.elapsed_minutes()
    }

    /// Whether the session is cooking but its clock is stopped.
    pub fn is_paused(&self) -> bool {
        self.session.status == SessionStatus::Cooking && !self.clock.is_running()
    }

    /// Re-derives the clock from the session's start timestamp.
    ///
    /// Used when attaching to a reloaded `cooking` session. Elapsed time
    /// is recomputed as if the session was never paused — pauses are not
    /// durable.
    pub fn sync_clock(&mut self, now: DateTime<Utc>) {
        if self.session.status == SessionStatus::Cooking {
            self.clock = SessionClock::started_at(self.session.elapsed_minutes(now));
            self.refresh_dish_statuses();
        }
    }

    /// Starts cooking: persists the `pending → cooking` transition, sets
    /// the start and estimated-end timestamps, starts the clock, and
    /// speaks the start prompt.
    ///
    /// No-op unless the session is `pending`.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), StoreError> {
        if self.session.status != SessionStatus::Pending {
            return Ok(());
        }

        let patch = SessionPatch::new()
            .with_status(SessionStatus::Cooking)
            .with_started_at(now)
            .with_estimated_end_time(now + Duration::minutes(self.session.total_duration))
            .with_updated_at(now);
        self.store.update(&self.session.id, patch.clone())?;
        patch.apply(&mut self.session);

        self.clock.start();
        self.refresh_dish_statuses();
        self.open_progress_record(now);
        self.set_task_status_at(self.session.current_step_index, TaskStatus::Active);
        self.say(prompts::session_started());
        tracing::info!(session_id = %self.session.id, "cooking session started");
        Ok(())
    }

    /// Stops the clock without changing the persisted status.
    pub fn pause(&mut self) {
        if self.session.status != SessionStatus::Cooking || !self.clock.is_running() {
            return;
        }
        self.clock.pause();
        self.say(prompts::session_paused());
        tracing::debug!(session_id = %self.session.id, "session paused");
    }

    /// Restarts a paused clock.
    pub fn resume(&mut self) {
        if self.session.status != SessionStatus::Cooking || self.clock.is_running() {
            return;
        }
        self.clock.resume();
        self.say(prompts::session_resumed());
        tracing::debug!(session_id = %self.session.id, "session resumed");
    }

    /// Advances simulated time by one minute.
    ///
    /// Returns the refreshed burner projection, or `None` when the clock
    /// is stopped (pending, paused, or completed).
    pub fn tick(&mut self) -> Option<DualBurnerState> {
        let elapsed = self.clock.tick()?;
        self.refresh_dish_statuses();
        Some(DualBurnerState::project(
            &self.session.scheduled_dishes,
            elapsed,
        ))
    }

    /// The current burner projection without advancing time.
    pub fn burner_state(&self) -> DualBurnerState {
        DualBurnerState::project(&self.session.scheduled_dishes, self.clock.elapsed_minutes())
    }

    /// Advances the step cursor, closes the finished step's progress
    /// record, opens one for the new step, and speaks its name and
    /// duration. No-op unless cooking.
    pub fn next_step(&mut self, now: DateTime<Utc>) {
        if self.session.status != SessionStatus::Cooking {
            return;
        }
        self.set_task_status_at(self.session.current_step_index, TaskStatus::Completed);
        self.close_progress_record(now);

        self.session.current_step_index += 1;
        self.open_progress_record(now);
        self.set_task_status_at(self.session.current_step_index, TaskStatus::Active);

        if let Some(task) = self.session.current_task().cloned() {
            self.say(prompts::current_step(&task));
        }
    }

    /// Re-speaks the current step without advancing.
    pub fn repeat(&mut self) {
        if let Some(task) = self.session.current_task().cloned() {
            self.say(prompts::current_step(&task));
        }
    }

    /// Answers a query, speaking the result when possible.
    ///
    /// Returns the remaining minutes for a time query, or the current
    /// step's declared temperature (°C) for a temperature query.
    pub fn query(&mut self, target: QueryTarget) -> Option<i64> {
        match target {
            QueryTarget::Time => {
                let remaining = self
                    .session
                    .remaining_minutes(self.clock.elapsed_minutes());
                self.say(prompts::remaining_time(remaining));
                Some(remaining)
            }
            QueryTarget::Temperature => {
                let temperature = self.session.current_task().and_then(|t| t.temperature);
                if let Some(celsius) = temperature {
                    self.say(prompts::current_temperature(celsius));
                }
                temperature
            }
        }
    }

    /// Completes the session: persists the `cooking → completed`
    /// transition, stops the clock, and speaks the completion prompt.
    /// Irreversible; no-op unless cooking.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<(), StoreError> {
        if self.session.status != SessionStatus::Cooking {
            return Ok(());
        }

        let patch = SessionPatch::new()
            .with_status(SessionStatus::Completed)
            .with_actual_end_time(now)
            .with_updated_at(now);
        self.store.update(&self.session.id, patch.clone())?;
        patch.apply(&mut self.session);

        self.clock.cancel();
        for dish in &mut self.session.scheduled_dishes {
            dish.status = DishStatus::Completed;
        }
        self.close_progress_record(now);
        self.say(prompts::session_completed());
        tracing::info!(session_id = %self.session.id, "cooking session completed");
        Ok(())
    }

    /// Dispatches an interpreted voice intent.
    ///
    /// `Start` doubles as resume when the clock is paused — the phrase
    /// set maps 开始/继续 to a single intent.
    pub fn handle_command(
        &mut self,
        command: VoiceCommand,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        match command {
            VoiceCommand::Start => {
                if self.is_paused() {
                    self.resume();
                    Ok(())
                } else {
                    self.start(now)
                }
            }
            VoiceCommand::Pause => {
                self.pause();
                Ok(())
            }
            VoiceCommand::Next => {
                self.next_step(now);
                Ok(())
            }
            VoiceCommand::Repeat => {
                self.repeat();
                Ok(())
            }
            VoiceCommand::Query(target) => {
                self.query(target);
                Ok(())
            }
        }
    }

    /// Parses a raw transcript and dispatches it; unmatched transcripts
    /// are ignored.
    pub fn handle_transcript(
        &mut self,
        transcript: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        match parse_command(transcript) {
            Some(command) => self.handle_command(command, now),
            None => Ok(()),
        }
    }

    /// Advances dish statuses past the current elapsed time. Completed
    /// dishes never regress.
    fn refresh_dish_statuses(&mut self) {
        let elapsed = self.clock.elapsed_minutes();
        for dish in &mut self.session.scheduled_dishes {
            if elapsed >= dish.end_time() {
                dish.status = DishStatus::Completed;
            } else if dish.is_active_at(elapsed) {
                dish.status = DishStatus::Cooking;
            }
        }
    }

    /// Equipment of the dish driving step navigation.
    fn current_equipment(&self) -> Equipment {
        self.session
            .current_dish()
            .map(|d| Equipment::from(d.equipment))
            .unwrap_or(Equipment::Shared)
    }

    fn open_progress_record(&mut self, now: DateTime<Utc>) {
        let mut record = CookingProgress::started(
            self.session.id.clone(),
            self.session.current_step_index,
            self.current_equipment(),
            now,
        );
        if let Some(celsius) = self
            .session
            .current_task()
            .and_then(|task| task.temperature)
        {
            record = record.with_temperature(celsius);
        }
        self.progress.push(record);
    }

    fn close_progress_record(&mut self, now: DateTime<Utc>) {
        if let Some(record) = self.progress.last_mut() {
            if record.status == ProgressStatus::Active {
                record.mark_completed(now);
            }
        }
    }

    fn set_task_status_at(&mut self, index: usize, status: TaskStatus) {
        if let Some(dish) = self
            .session
            .scheduled_dishes
            .iter_mut()
            .find(|d| d.status == DishStatus::Cooking || d.status == DishStatus::Pending)
        {
            if let Some(task) = dish.tasks.get_mut(index) {
                task.status = status;
            }
        }
    }

    /// Speaks best-effort: skipped when voice output is disabled or the
    /// runtime has no speech capability. Prompts issued while a step is
    /// active are recorded on its progress record.
    fn say(&mut self, text: String) {
        if !self.voice_enabled {
            return;
        }
        if !self.speech.is_supported() {
            tracing::warn!(session_id = %self.session.id, "speech unavailable, prompt skipped");
            return;
        }
        self.speech.speak(&text, DEFAULT_SPEECH_RATE);
        if let Some(record) = self.progress.last_mut() {
            if record.status == ProgressStatus::Active {
                record.record_prompt(text);
            }
        }
    }
}
