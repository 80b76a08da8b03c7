//! Mahbub TUI - a terminal reading room for Persian religious content
//!
//! This library provides the application's building blocks: the fixed
//! content catalog, the Estekhara flow, the login/verification flow,
//! local state persistence, and the terminal UI shell.

pub mod auth;
pub mod content;
pub mod estekhara;
pub mod storage;
pub mod ui;
