//! Session orchestration: the stateful shell around the pure view flow.
//!
//! [`Session`] owns the preference store, the clock, and the current
//! [`ViewModel`].  The UI layer calls [`Session::dispatch`] with a
//! [`ViewEvent`]; the session runs the pure transition, executes whatever
//! [`Effect`]s come back against the store, and exposes the new model.
//! This is the only place where the view flow and persistence meet.

use tracing::info;

use crate::application::view_flow::{apply, Effect, ViewEvent, ViewModel};
use crate::infrastructure::clock::Clock;
use crate::infrastructure::storage::{Preferences, PrefsError, PrefsStore};

/// A running app session.
pub struct Session<S: PrefsStore, C: Clock> {
    store: S,
    clock: C,
    prefs: Preferences,
    model: ViewModel,
}

impl<S: PrefsStore, C: Clock> Session<S, C> {
    /// Loads preferences and builds the start-up view model.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] when the preference file exists but cannot be
    /// read or parsed.  An absent file is the normal first-run path and
    /// loads as defaults.
    pub fn start(store: S, clock: C) -> Result<Self, PrefsError> {
        let prefs = store.load()?;
        let model = ViewModel::initial(
            prefs.student_name.clone(),
            prefs.is_first_launch,
            clock.today(),
        );
        info!(state = ?model.state, "session started");
        Ok(Self { store, clock, prefs, model })
    }

    /// The current view model.
    pub fn model(&self) -> &ViewModel {
        &self.model
    }

    /// The current preferences (as last persisted).
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// Applies one event and persists its effects.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] when persisting an effect fails; the view
    /// model is still advanced so the screen does not freeze on a disk
    /// error.
    pub fn dispatch(&mut self, event: ViewEvent) -> Result<&ViewModel, PrefsError> {
        let (next, effects) = apply(&self.model, event, self.clock.today());
        self.model = next;

        if effects.is_empty() {
            return Ok(&self.model);
        }

        for effect in effects {
            match effect {
                Effect::SaveStudent(name) => {
                    info!(student = %name, "saving selected student");
                    self.prefs.student_name = Some(name);
                }
                Effect::MarkLaunched => {
                    self.prefs.is_first_launch = false;
                }
            }
        }
        self.store.save(&self.prefs)?;
        Ok(&self.model)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
