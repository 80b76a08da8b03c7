//! Application state tests
//!
//! Shell behavior: navigation, overlays, the slideshow, theming,
//! notices, and the chat/reader screens, driven with explicit instants.

use mahbub::content::library;
use mahbub::storage::LocalStore;
use mahbub::ui::app::{Screen, SLIDE_DURATION, WELCOME_DELAY};
use mahbub::ui::App;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn test_app() -> (App, Instant) {
    let now = Instant::now();
    (App::new(LocalStore::in_memory(), now), now)
}

#[test]
fn test_starts_on_home_with_dark_theme() {
    let (app, _) = test_app();
    assert_eq!(app.screen, Screen::Home);
    assert_eq!(app.theme.name, "dark");
    assert!(!app.is_logged_in());
}

#[test]
fn test_drawer_selects_screens() {
    let (mut app, now) = test_app();

    app.open_drawer();
    assert!(app.drawer_open);

    app.drawer_next();
    app.drawer_next();
    app.drawer_activate(now);

    assert!(!app.drawer_open);
    assert_eq!(app.screen, Screen::Assistant);
}

#[test]
fn test_profile_without_login_falls_back_to_login() {
    let (mut app, now) = test_app();
    app.go_to(Screen::Profile, now);
    assert_eq!(app.screen, Screen::Login);
}

#[test]
fn test_slideshow_auto_advances_on_home() {
    let (mut app, now) = test_app();
    assert_eq!(app.slideshow.current(), 0);

    app.process_timers(now + SLIDE_DURATION);
    assert_eq!(app.slideshow.current(), 1);
}

#[test]
fn test_slideshow_pauses_off_home() {
    let (mut app, now) = test_app();
    app.go_to(Screen::Books, now);

    app.process_timers(now + SLIDE_DURATION * 3);
    assert_eq!(app.slideshow.current(), 0);
}

#[test]
fn test_theme_toggle_persists() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("state.json");
    let now = Instant::now();

    {
        let store = LocalStore::open_at(path.clone()).expect("open");
        let mut app = App::new(store, now);
        assert_eq!(app.theme.name, "dark");
        app.toggle_theme();
        assert_eq!(app.theme.name, "light");
    }

    let store = LocalStore::open_at(path).expect("reopen");
    let app = App::new(store, now);
    assert_eq!(app.theme.name, "light");
}

#[test]
fn test_welcome_appears_after_delay() {
    let (mut app, now) = test_app();
    assert!(!app.welcome_visible);

    app.process_timers(now + WELCOME_DELAY);
    assert!(app.welcome_visible);

    app.dismiss_welcome();
    assert!(!app.welcome_visible);
}

#[test]
fn test_welcome_suppression_is_persisted() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("state.json");
    let now = Instant::now();

    {
        let store = LocalStore::open_at(path.clone()).expect("open");
        let mut app = App::new(store, now);
        app.process_timers(now + WELCOME_DELAY);
        assert!(app.welcome_visible);

        app.toggle_welcome_dont_show();
        app.dismiss_welcome();
    }

    let store = LocalStore::open_at(path).expect("reopen");
    let mut app = App::new(store, now);
    app.process_timers(now + WELCOME_DELAY * 5);
    assert!(!app.welcome_visible);
}

#[test]
fn test_welcome_accept_opens_assistant() {
    let (mut app, now) = test_app();
    app.process_timers(now + WELCOME_DELAY);
    assert!(app.welcome_visible);

    app.accept_welcome(now + WELCOME_DELAY);
    assert!(!app.welcome_visible);
    assert_eq!(app.screen, Screen::Assistant);
}

#[test]
fn test_search_submits_and_notice_expires() {
    let (mut app, now) = test_app();

    app.open_search();
    for c in "المیزان".chars() {
        app.search_push_char(c);
    }
    app.submit_search(now);

    assert!(!app.search_open);
    assert!(app.notice.is_some());

    // The canned "no results" outcome lands within the simulated range
    // and its notice eventually expires.
    app.process_timers(now + Duration::from_secs(3));
    let notice = app.notice.clone().expect("result notice");
    assert!(notice.message.contains("المیزان"));

    app.process_timers(now + Duration::from_secs(30));
    assert!(app.notice.is_none());
}

#[test]
fn test_empty_search_is_ignored() {
    let (mut app, now) = test_app();
    app.open_search();
    app.search_push_char(' ');
    app.submit_search(now);
    assert!(app.search_open);
}

#[test]
fn test_chat_reply_arrives_after_typing_delay() {
    let (mut app, now) = test_app();
    app.go_to(Screen::Assistant, now);

    for c in "نماز شب چگونه است؟".chars() {
        app.chat_push_char(c);
    }
    app.send_chat(now);

    assert!(app.assistant_typing);
    assert_eq!(app.chat.messages().len(), 1);
    assert_eq!(app.chat_input, "");

    // Reply delay is 1.5–2.5s; by 2.5s it must have landed.
    app.process_timers(now + Duration::from_millis(2500));
    assert!(!app.assistant_typing);
    assert_eq!(app.chat.messages().len(), 2);
    assert!(app.chat.messages()[1].text.contains("نماز"));
}

#[test]
fn test_empty_chat_message_is_ignored() {
    let (mut app, now) = test_app();
    app.go_to(Screen::Assistant, now);

    app.chat_push_char(' ');
    app.send_chat(now);
    assert!(!app.assistant_typing);
    assert!(app.chat.is_empty());
}

#[test]
fn test_suggestions_fill_the_input() {
    let (mut app, _) = test_app();
    app.cycle_suggestion();
    let first = app.chat_input.clone();
    assert!(!first.is_empty());

    app.cycle_suggestion();
    assert_ne!(app.chat_input, first);
}

#[test]
fn test_voice_control_is_hidden_without_support() {
    let (app, _) = test_app();
    assert!(!app.voice_supported);
}

#[test]
fn test_category_tabs_filter_books() {
    let (mut app, _) = test_app();
    let all_count = app.visible_books().len();
    assert_eq!(all_count, library::books().len());

    app.next_category();
    let filtered = app.visible_books();
    assert!(filtered.len() < all_count);
    assert!(filtered
        .iter()
        .all(|b| b.category == app.categories[app.active_category]));

    // Book selection resets with the tab and wraps within it.
    assert_eq!(app.book_index, 0);
    app.book_prev();
    assert_eq!(app.book_index, filtered.len() - 1);
}

#[test]
fn test_open_book_enters_reader() {
    let (mut app, now) = test_app();
    app.go_to(Screen::Books, now);
    app.book_next();
    app.open_selected_book(now);

    assert_eq!(app.screen, Screen::Reader);
    let reader = app.reader.as_ref().expect("reader state");
    assert_eq!(reader.current_page(), 1);
    assert_eq!(reader.book.title, library::books()[1].title);
}

#[test]
fn test_dictionary_lookup_flow() {
    let (mut app, now) = test_app();
    app.go_to(Screen::Books, now);
    app.open_selected_book(now);

    let reader = app.reader.as_mut().expect("reader state");
    reader.enter_selection();
    let word = reader.selected_word().expect("selected word");

    app.reader_lookup_selected(now);
    assert!(app
        .notice
        .as_ref()
        .is_some_and(|n| n.message.contains(&word)));

    // The definition notice replaces the searching one after the delay.
    app.process_timers(now + Duration::from_secs(1));
    assert!(app
        .notice
        .as_ref()
        .is_some_and(|n| n.message.starts_with("📖")));
    assert!(!app.reader.as_ref().expect("reader").selecting());
}
