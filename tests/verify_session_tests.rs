//! Verification flow tests
//!
//! Covers the login → code-send → verify pipeline end to end through
//! the app's deferred-action queue, plus the countdown/resend timing
//! rules, all with explicit instants.

use mahbub::auth::{SimulatedSmsGateway, COUNTDOWN_SECS, GATEWAY_DELAY};
use mahbub::storage::LocalStore;
use mahbub::ui::app::Screen;
use mahbub::ui::App;
use std::time::{Duration, Instant};

fn app_at_login() -> (App, Instant) {
    let now = Instant::now();
    let mut app = App::new(LocalStore::in_memory(), now);
    app.go_to(Screen::Login, now);
    (app, now)
}

fn type_mobile(app: &mut App, digits: &str) {
    for c in digits.chars() {
        app.login.push_char(c);
    }
}

/// Drive login to the verify screen; returns the instant the code
/// landed.
fn reach_verify(app: &mut App, now: Instant) -> Instant {
    type_mobile(app, "9123456789");
    app.submit_login(now);
    assert!(app.sending_code);

    let sent = now + GATEWAY_DELAY;
    app.process_timers(sent);
    assert_eq!(app.screen, Screen::Verify);
    assert!(app.session.is_some());
    sent
}

fn enter_code(app: &mut App, code: &str) {
    for c in code.chars() {
        app.verify_push_digit(c);
    }
}

#[test]
fn test_invalid_mobile_does_not_send() {
    let (mut app, now) = app_at_login();

    type_mobile(&mut app, "812345");
    app.submit_login(now);
    assert!(!app.sending_code);

    app.process_timers(now + Duration::from_secs(10));
    assert_eq!(app.screen, Screen::Login);
    assert!(app.session.is_none());
}

#[test]
fn test_login_reaches_verify_and_stores_pending_mobile() {
    let (mut app, now) = app_at_login();
    reach_verify(&mut app, now);

    assert_eq!(app.pending_mobile_display(), "0912 345 6789");
}

#[test]
fn test_correct_code_logs_in_once() {
    let (mut app, now) = app_at_login();
    let sent = reach_verify(&mut app, now);

    enter_code(&mut app, SimulatedSmsGateway::DEMO_CODE);
    assert!(app
        .session
        .as_ref()
        .is_some_and(|s| s.is_complete()));

    app.submit_verify(sent);
    assert!(app.verifying);

    let verified = sent + GATEWAY_DELAY;
    app.process_timers(verified);

    // Session is torn down and the flag is set; the buffer was never
    // cleared on the success path.
    assert!(app.session.is_none());
    assert!(app.is_logged_in());

    // The redirect lands on the profile screen.
    app.process_timers(verified + Duration::from_secs(1));
    assert_eq!(app.screen, Screen::Profile);
}

#[test]
fn test_wrong_code_clears_buffer_and_recovers() {
    let (mut app, now) = app_at_login();
    let sent = reach_verify(&mut app, now);

    enter_code(&mut app, "99999");
    app.submit_verify(sent);
    app.process_timers(sent + GATEWAY_DELAY);

    assert!(!app.is_logged_in());
    let session = app.session.as_ref().expect("session survives a mismatch");
    assert_eq!(session.code(), "");

    // The session still accepts a corrected code.
    enter_code(&mut app, SimulatedSmsGateway::DEMO_CODE);
    let retry = sent + GATEWAY_DELAY + Duration::from_secs(1);
    app.submit_verify(retry);
    app.process_timers(retry + GATEWAY_DELAY);
    assert!(app.is_logged_in());
}

#[test]
fn test_incomplete_code_cannot_be_submitted() {
    let (mut app, now) = app_at_login();
    let sent = reach_verify(&mut app, now);

    enter_code(&mut app, "123");
    app.submit_verify(sent);
    assert!(!app.verifying);
}

#[test]
fn test_countdown_reaches_zero_and_enables_resend() {
    let (mut app, now) = app_at_login();
    let sent = reach_verify(&mut app, now);

    let expired = sent + Duration::from_secs(u64::from(COUNTDOWN_SECS));
    app.process_timers(expired);

    let session = app.session.as_ref().expect("session");
    assert_eq!(session.seconds_remaining(), 0);
    assert!(session.resend_allowed());
}

#[test]
fn test_resend_restarts_countdown_without_double_ticking() {
    let (mut app, now) = app_at_login();
    let sent = reach_verify(&mut app, now);

    let expired = sent + Duration::from_secs(u64::from(COUNTDOWN_SECS));
    app.process_timers(expired);
    app.resend_code(expired);
    assert!(app.resending);

    let restarted = expired + GATEWAY_DELAY;
    app.process_timers(restarted);
    let session = app.session.as_ref().expect("session");
    assert_eq!(session.seconds_remaining(), COUNTDOWN_SECS);
    assert!(!session.resend_allowed());

    // Exactly one tick per elapsed second after the restart; the old
    // deadline is gone.
    app.process_timers(restarted + Duration::from_secs(1));
    let session = app.session.as_ref().expect("session");
    assert_eq!(session.seconds_remaining(), COUNTDOWN_SECS - 1);

    app.process_timers(restarted + Duration::from_secs(10));
    let session = app.session.as_ref().expect("session");
    assert_eq!(session.seconds_remaining(), COUNTDOWN_SECS - 10);
}

#[test]
fn test_resend_is_gated_until_expiry() {
    let (mut app, now) = app_at_login();
    let sent = reach_verify(&mut app, now);

    app.resend_code(sent + Duration::from_secs(5));
    assert!(!app.resending);
}

#[test]
fn test_change_number_tears_down_the_session() {
    let (mut app, now) = app_at_login();
    let sent = reach_verify(&mut app, now);

    enter_code(&mut app, SimulatedSmsGateway::DEMO_CODE);
    app.submit_verify(sent);
    app.change_number(sent);

    assert_eq!(app.screen, Screen::Login);
    assert!(app.session.is_none());
    assert_eq!(app.login.mobile(), "");

    // The in-flight verify outcome was cancelled with the session.
    app.process_timers(sent + GATEWAY_DELAY);
    assert!(!app.is_logged_in());
}

#[test]
fn test_logout_clears_the_session_keys() {
    let (mut app, now) = app_at_login();
    let sent = reach_verify(&mut app, now);

    enter_code(&mut app, SimulatedSmsGateway::DEMO_CODE);
    app.submit_verify(sent);
    app.process_timers(sent + GATEWAY_DELAY + Duration::from_secs(1));
    assert_eq!(app.screen, Screen::Profile);
    assert!(app.is_logged_in());

    let later = sent + Duration::from_secs(10);
    app.request_logout();
    assert!(app.confirm_logout);
    app.logout(later);

    assert!(!app.is_logged_in());
    app.process_timers(later + Duration::from_secs(1));
    assert_eq!(app.screen, Screen::Login);
}
