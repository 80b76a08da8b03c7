//! # Local State Storage
//!
//! Small persistent key→value store for everything the app remembers
//! between runs: the selected theme, the login session, the pending
//! mobile number, and the Estekhara history blob.
//!
//! ## Storage Location
//!
//! ```text
//! ~/.local/share/mahbub/state.json
//! ```
//!
//! A single JSON object of string keys to string values. Structured
//! values (the history) are JSON-encoded into their slot by the module
//! that owns them.

mod local;

pub use local::{keys, LocalStore};
