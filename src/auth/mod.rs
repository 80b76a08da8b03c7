//! # Login & Verification
//!
//! Mobile-number login followed by a five-digit one-time code. Nothing
//! here talks to a network: the [`SmsGateway`] trait is the seam where a
//! real SMS service plugs in, and the shipped implementation simulates
//! one with a fixed demo code and a canned delay.

pub mod gateway;
pub mod login;
pub mod verify;

pub use gateway::{SimulatedSmsGateway, SmsGateway, VerifyError, GATEWAY_DELAY};
pub use login::{format_mobile_display, LoginForm};
pub use verify::{VerificationSession, CODE_LENGTH, COUNTDOWN_SECS};
