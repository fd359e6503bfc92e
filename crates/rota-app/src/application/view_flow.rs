//! The view-state machine.
//!
//! The screen the user sees is a single immutable [`ViewModel`] replaced
//! wholesale on every user action, instead of a pile of independently
//! mutable flags.  [`apply`] is the entire navigation logic of the app: a
//! pure function from (model, event, today) to the next model plus a list of
//! [`Effect`]s describing the persistence the caller must perform.
//!
//! # States
//!
//! ```text
//! FirstRun ──StudentChosen──► Welcoming{first_time: true}
//!                                      │
//! Selecting ──StudentChosen──┐   WelcomeFinished
//!                            ▼         ▼
//!                          ViewingDuty ◄──CloseCalendar── ViewingCalendar
//!                            │    │                            ▲
//!                     ChangeStudent └───────OpenCalendar───────┘
//!                            ▼
//!                         Selecting
//! ```
//!
//! Two deliberate asymmetries in the flow:
//!
//! - Choosing a student on **first run** shows the welcome screen; switching
//!   students later goes straight to the duty screen.
//! - A cold start with a saved student opens on the welcome screen
//!   (`first_time: false` changes the greeting, nothing else).

use chrono::NaiveDate;
use tracing::debug;

use rota_core::domain::calendar::add_months;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No student has ever been selected on this device.
    FirstRun,
    /// The student selection list, reached via "change student".
    Selecting,
    /// The welcome animation screen.
    Welcoming {
        /// `true` only for the selection made on first run.
        first_time: bool,
    },
    /// The duty screen: assignment card plus floor-plan diagram.
    ViewingDuty,
    /// The month calendar / date picker.
    ViewingCalendar,
}

/// The complete view state, replaced wholesale on every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub state: ViewState,
    /// The student whose duties are shown; `None` while selecting.
    pub selected_student: Option<String>,
    /// The date the duty screen renders (today unless picked in the calendar).
    pub viewing_date: NaiveDate,
    /// The month the calendar screen has navigated to.
    pub calendar_month: NaiveDate,
}

/// A user (or animation) action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    StudentChosen(String),
    WelcomeFinished,
    ChangeStudent,
    OpenCalendar,
    CloseCalendar,
    DateChosen(NaiveDate),
    PreviousMonth,
    NextMonth,
}

/// Persistence the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the selected student name.
    SaveStudent(String),
    /// Clear the first-launch flag.
    MarkLaunched,
}

impl ViewModel {
    /// The start-up state, from what the preference store knows.
    ///
    /// A returning user lands on the welcome screen; a brand-new install
    /// lands on the first-run selection; a device whose student was cleared
    /// lands on the plain selection list.
    pub fn initial(
        saved_student: Option<String>,
        is_first_launch: bool,
        today: NaiveDate,
    ) -> ViewModel {
        let state = match (&saved_student, is_first_launch) {
            (Some(_), _) => ViewState::Welcoming { first_time: false },
            (None, true) => ViewState::FirstRun,
            (None, false) => ViewState::Selecting,
        };
        ViewModel {
            state,
            selected_student: saved_student,
            viewing_date: today,
            calendar_month: today,
        }
    }
}

/// Applies one event to the model.
///
/// Events that make no sense in the current state are ignored (the model
/// comes back unchanged with no effects); a stale tap on a screen that is
/// already gone must never corrupt the flow.
pub fn apply(model: &ViewModel, event: ViewEvent, today: NaiveDate) -> (ViewModel, Vec<Effect>) {
    let mut next = model.clone();
    let mut effects = Vec::new();

    match (model.state, event) {
        (ViewState::FirstRun, ViewEvent::StudentChosen(name)) => {
            next.state = ViewState::Welcoming { first_time: true };
            next.selected_student = Some(name.clone());
            effects.push(Effect::SaveStudent(name));
            effects.push(Effect::MarkLaunched);
        }

        // Switching students later skips the welcome screen.
        (ViewState::Selecting, ViewEvent::StudentChosen(name)) => {
            next.state = ViewState::ViewingDuty;
            next.selected_student = Some(name.clone());
            effects.push(Effect::SaveStudent(name));
        }

        (ViewState::Welcoming { .. }, ViewEvent::WelcomeFinished) => {
            next.state = ViewState::ViewingDuty;
        }

        (ViewState::ViewingDuty, ViewEvent::ChangeStudent) => {
            next.state = ViewState::Selecting;
            next.selected_student = None;
        }

        // Opening the calendar always starts from today, not from whatever
        // date a previous visit left behind.
        (ViewState::ViewingDuty, ViewEvent::OpenCalendar) => {
            next.state = ViewState::ViewingCalendar;
            next.viewing_date = today;
            next.calendar_month = today;
        }

        (ViewState::ViewingCalendar, ViewEvent::DateChosen(date)) => {
            next.viewing_date = date;
        }

        (ViewState::ViewingCalendar, ViewEvent::CloseCalendar) => {
            next.state = ViewState::ViewingDuty;
        }

        (ViewState::ViewingCalendar, ViewEvent::PreviousMonth) => {
            next.calendar_month = add_months(model.calendar_month, -1);
        }

        (ViewState::ViewingCalendar, ViewEvent::NextMonth) => {
            next.calendar_month = add_months(model.calendar_month, 1);
        }

        (state, event) => {
            debug!(?state, ?event, "ignoring event in this state");
        }
    }

    (next, effects)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
