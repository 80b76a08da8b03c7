//! # Estekhara Flow
//!
//! The four-step guidance wizard: an intro, the question prompt, a
//! simulated "opening the Quran" wait, and the result. The pick itself
//! is a uniform draw from the bundled catalog, and every completed run
//! is prepended to a bounded persisted history.
//!
//! ```text
//! Intro ──start──▶ Question ──submit_question──▶ Selecting ──deliver──▶ Result
//!   ▲                                                                     │
//!   └───────────────────────────── reset ────────────────────────────────┘
//! ```

pub mod engine;
pub mod history;
pub mod wizard;

pub use engine::{EstekharaEngine, PickSource, SELECTION_DELAY};
pub use history::{EstekharaHistory, HistoryRecord, HISTORY_CAP};
pub use wizard::{EstekharaWizard, Step, WizardError};
