//! Infrastructure: everything that touches the OS.
//!
//! - **`storage`** – TOML preference persistence in the platform config dir.
//! - **`clock`** – The date source, behind a trait so tests can pin "today".
//! - **`avatars`** – Student → avatar asset path lookup.

pub mod avatars;
pub mod clock;
pub mod storage;
