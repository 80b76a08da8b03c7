//! # Content Module
//!
//! Fixed content shipped with the application and the pure lookup logic
//! over it.
//!
//! | Piece | Source |
//! |-------|--------|
//! | Estekhara catalog | [`catalog`] |
//! | Assistant canned replies | [`assistant`] |
//! | Reader dictionary | [`dictionary`] |
//! | Book listing / featured banners | [`library`] |

pub mod assistant;
pub mod catalog;
pub mod dictionary;
pub mod library;

pub use assistant::{ChatLog, ChatMessage, Sender};
pub use catalog::{estekhara_catalog, AyahEntry, Polarity};
pub use library::{books, Book};
