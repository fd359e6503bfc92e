//! Application layer use cases.
//!
//! This layer orchestrates `rota-core` domain values to fulfil user goals
//! and depends on the infrastructure only through its traits (`PrefsStore`,
//! `Clock`), so tests can run it entirely in memory.
//!
//! - **`view_flow`** – The pure view-state machine: which screen shows and
//!   how user actions move between screens.
//! - **`show_duty`** – Composes one duty screen: assignment, wording,
//!   avatar, and the highlighted diagram.
//! - **`session`** – Stateful shell that applies view events and persists
//!   their effects.

pub mod session;
pub mod show_duty;
pub mod view_flow;
