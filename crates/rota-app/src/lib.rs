//! # rota-app
//!
//! Application shell for the cleaning rota: the view-state machine, session
//! orchestration, preference persistence, and the collaborators (clock,
//! avatar lookup) the screens need.  All domain computation lives in
//! `rota-core`; this crate decides *when* to compute and *what to persist*.

pub mod application;
pub mod infrastructure;

pub use application::session::Session;
pub use application::show_duty::DutyView;
pub use application::view_flow::{apply, Effect, ViewEvent, ViewModel, ViewState};
pub use infrastructure::clock::{Clock, FixedClock, SystemClock};
pub use infrastructure::storage::{FilePrefsStore, Preferences, PrefsError, PrefsStore};
