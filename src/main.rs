//! # Mahbub CLI Entry Point
//!
//! This is the main entry point for the Mahbub TUI application.
//!
//! ## Overview
//!
//! Mahbub is a terminal reading room for Persian religious content: a
//! book shelf with a paginated reader, a chat-style study assistant, an
//! online Estekhara flow, and a mobile-number login with one-time-code
//! verification. Everything runs locally; network operations are
//! simulated with short delays.
//!
//! ## Usage
//!
//! ```bash
//! # Open the home screen
//! mahbub
//!
//! # Jump straight to a screen
//! mahbub --page estekhara
//!
//! # Keep state in a specific file
//! mahbub --state-file /tmp/mahbub-state.json
//!
//! # Print the bundled content summary and exit
//! mahbub --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `m` - open the navigation drawer
//! - `/` - search overlay (home and books)
//! - `t` - toggle dark/light theme
//! - `i` - show/hide the key help modal
//! - `←` `→` - slides on home, pages in the reader
//! - `Tab` - cycle category tabs / suggestion chips
//! - `Esc` - close overlay or go back
//! - `q` - quit (outside text inputs)
//!
//! Set `MAHBUB_LOG=<filter>` to write tracing output to
//! `<data-dir>/mahbub.log`.

use mahbub::storage::LocalStore;
use mahbub::ui::app::{NoticeKind, Screen};
use mahbub::ui::{render, App};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StartPage {
    Home,
    Books,
    Assistant,
    Estekhara,
    Login,
    Profile,
}

impl StartPage {
    fn screen(self) -> Screen {
        match self {
            StartPage::Home => Screen::Home,
            StartPage::Books => Screen::Books,
            StartPage::Assistant => Screen::Assistant,
            StartPage::Estekhara => Screen::Estekhara,
            StartPage::Login => Screen::Login,
            StartPage::Profile => Screen::Profile,
        }
    }
}

/// Mahbub - a terminal reading room for Persian religious content
#[derive(Parser, Debug)]
#[command(name = "mahbub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Books, a study assistant, and online Estekhara in your terminal", long_about = None)]
struct Args {
    /// Screen to open at startup
    #[arg(short, long, value_enum, default_value_t = StartPage::Home)]
    page: StartPage,

    /// Path of the state file (defaults to the platform data directory)
    #[arg(long, value_name = "FILE")]
    state_file: Option<PathBuf>,

    /// Print debug information about the bundled content and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

/// Route tracing output to a log file when `MAHBUB_LOG` is set; stdout
/// belongs to the TUI.
fn init_logging() {
    let Ok(filter) = std::env::var("MAHBUB_LOG") else {
        return;
    };
    let Some(dirs) = directories::ProjectDirs::from("", "", "mahbub") else {
        return;
    };
    if fs::create_dir_all(dirs.data_dir()).is_err() {
        return;
    }

    let path = dirs.data_dir().join("mahbub.log");
    let Ok(file) = fs::OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
}

async fn run_application(args: Args) -> Result<()> {
    // Open the state store; degrade to in-memory if the disk location is
    // unusable so the app still runs.
    let store = match &args.state_file {
        Some(path) => LocalStore::open_at(path.clone())
            .with_context(|| format!("Failed to open state file: {}", path.display()))?,
        None => match LocalStore::open() {
            Ok(store) => store,
            Err(err) => {
                eprintln!("Warning: could not open state storage: {err:#}");
                LocalStore::in_memory()
            }
        },
    };

    if args.debug {
        println!("=== Bundled Content ===");
        println!(
            "  Estekhara catalog: {} entries",
            mahbub::content::estekhara_catalog().len()
        );
        for book in mahbub::content::books() {
            println!(
                "  Book: {} — {} ({}, {} pages)",
                book.title, book.author, book.category, book.total_pages
            );
        }
        match store.path() {
            Some(path) => println!("\nState file: {}", path.display()),
            None => println!("\nState: in-memory"),
        }
        return Ok(());
    }

    let now = Instant::now();
    let mut app = App::new(store, now);
    app.go_to(args.page.screen(), now);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        app.process_timers(Instant::now());

        terminal
            .draw(|f| render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = event_reader.read_event(Duration::from_millis(100))?;

        // If no event, continue the loop (timers and animations re-render)
        let event = match event {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            handle_key(app, key.code, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Dispatch one key press. Overlays take precedence over the active
/// screen, innermost first.
fn handle_key(app: &mut App, code: KeyCode, now: Instant) {
    // Note entry captures everything
    if app.note_input.is_some() {
        match code {
            KeyCode::Esc => app.note_input = None,
            KeyCode::Enter => app.reader_save_note(now),
            KeyCode::Backspace => {
                if let Some(note) = &mut app.note_input {
                    note.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(note) = &mut app.note_input {
                    note.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    if app.show_info {
        if matches!(code, KeyCode::Char('i') | KeyCode::Esc) {
            app.toggle_info();
        }
        return;
    }

    if app.confirm_logout {
        match code {
            KeyCode::Char('y') => app.logout(now),
            KeyCode::Char('n') | KeyCode::Esc => app.cancel_logout(),
            _ => {}
        }
        return;
    }

    if app.terms_visible {
        if matches!(code, KeyCode::Char('o') | KeyCode::Esc | KeyCode::Enter) {
            app.toggle_terms();
        }
        return;
    }

    if app.welcome_visible {
        match code {
            KeyCode::Enter => app.accept_welcome(now),
            KeyCode::Char('d') => app.toggle_welcome_dont_show(),
            KeyCode::Esc => app.dismiss_welcome(),
            _ => {}
        }
        return;
    }

    if app.search_open {
        match code {
            KeyCode::Esc => app.close_search(),
            KeyCode::Enter => app.submit_search(now),
            KeyCode::Backspace => app.search_pop_char(),
            KeyCode::Char(c) => app.search_push_char(c),
            _ => {}
        }
        return;
    }

    if app.drawer_open {
        match code {
            KeyCode::Esc | KeyCode::Char('m') => app.close_drawer(),
            KeyCode::Down | KeyCode::Char('j') => app.drawer_next(),
            KeyCode::Up | KeyCode::Char('k') => app.drawer_prev(),
            KeyCode::Enter => app.drawer_activate(now),
            _ => {}
        }
        return;
    }

    match app.screen {
        Screen::Home => handle_home_key(app, code, now),
        Screen::Books => handle_books_key(app, code, now),
        Screen::Reader => handle_reader_key(app, code, now),
        Screen::Assistant => handle_assistant_key(app, code, now),
        Screen::Estekhara => handle_estekhara_key(app, code, now),
        Screen::Login => handle_login_key(app, code, now),
        Screen::Verify => handle_verify_key(app, code, now),
        Screen::Profile => handle_profile_key(app, code, now),
    }
}

fn handle_home_key(app: &mut App, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('m') => app.open_drawer(),
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('i') => app.toggle_info(),
        KeyCode::Right => app.slideshow.next(now),
        KeyCode::Left => app.slideshow.prev(now),
        KeyCode::Tab => app.next_category(),
        KeyCode::BackTab => app.prev_category(),
        KeyCode::Down | KeyCode::Char('j') => app.book_next(),
        KeyCode::Up | KeyCode::Char('k') => app.book_prev(),
        KeyCode::Enter => app.open_selected_book(now),
        KeyCode::Char('a') => app.go_to(Screen::Assistant, now),
        KeyCode::Char('e') => app.go_to(Screen::Estekhara, now),
        KeyCode::Char('b') => app.go_to(Screen::Books, now),
        KeyCode::Char('p') => app.go_to(Screen::Profile, now),
        _ => {}
    }
}

fn handle_books_key(app: &mut App, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Esc => app.go_to(Screen::Home, now),
        KeyCode::Char('m') => app.open_drawer(),
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('i') => app.toggle_info(),
        KeyCode::Tab => app.next_category(),
        KeyCode::BackTab => app.prev_category(),
        KeyCode::Down | KeyCode::Char('j') => app.book_next(),
        KeyCode::Up | KeyCode::Char('k') => app.book_prev(),
        KeyCode::Enter => app.open_selected_book(now),
        _ => {}
    }
}

fn handle_reader_key(app: &mut App, code: KeyCode, now: Instant) {
    let selecting = app.reader.as_ref().is_some_and(|r| r.selecting());

    if selecting {
        match code {
            KeyCode::Esc => {
                if let Some(reader) = &mut app.reader {
                    reader.exit_selection();
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(reader) = &mut app.reader {
                    reader.select_next_word();
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(reader) = &mut app.reader {
                    reader.select_prev_word();
                }
            }
            KeyCode::Char('d') => app.reader_lookup_selected(now),
            KeyCode::Char('g') => app.reader_highlight_selected(now),
            KeyCode::Char('n') => app.reader_begin_note(),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Esc => app.go_to(Screen::Books, now),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('i') => app.toggle_info(),
        // Pages run right-to-left: left arrow moves forward.
        KeyCode::Left => {
            if let Some(reader) = &mut app.reader {
                reader.next_page();
            }
        }
        KeyCode::Right => {
            if let Some(reader) = &mut app.reader {
                reader.prev_page();
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            if let Some(reader) = &mut app.reader {
                reader.increase_font();
            }
        }
        KeyCode::Char('-') => {
            if let Some(reader) = &mut app.reader {
                reader.decrease_font();
            }
        }
        KeyCode::Char('L') => {
            if let Some(reader) = &mut app.reader {
                reader.cycle_line_height();
            }
        }
        KeyCode::Char('b') => {
            let bookmarked = app.reader.as_mut().map(|r| r.toggle_bookmark());
            if let Some(on) = bookmarked {
                let message = if on { "صفحه نشان شد" } else { "نشان حذف شد" };
                app.notify(message, NoticeKind::Info, now);
            }
        }
        KeyCode::Char('v') => {
            if let Some(reader) = &mut app.reader {
                reader.enter_selection();
            }
        }
        _ => {}
    }
}

fn handle_assistant_key(app: &mut App, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Esc => app.go_to(Screen::Home, now),
        KeyCode::Enter => app.send_chat(now),
        KeyCode::Tab => app.cycle_suggestion(),
        KeyCode::Backspace => app.chat_pop_char(),
        KeyCode::Char(c) => app.chat_push_char(c),
        _ => {}
    }
}

fn handle_estekhara_key(app: &mut App, code: KeyCode, now: Instant) {
    use mahbub::estekhara::Step;

    if app.show_history {
        if matches!(code, KeyCode::Esc | KeyCode::Char('h')) {
            app.toggle_history();
        }
        return;
    }

    match app.wizard.step() {
        Step::Intro => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
            KeyCode::Esc => app.go_to(Screen::Home, now),
            KeyCode::Char('m') => app.open_drawer(),
            KeyCode::Char('t') => app.toggle_theme(),
            KeyCode::Char('i') => app.toggle_info(),
            KeyCode::Char('h') => app.toggle_history(),
            KeyCode::Enter => app.estekhara_start(),
            _ => {}
        },
        Step::Question => match code {
            KeyCode::Esc => app.estekhara_reset(),
            KeyCode::Enter => app.estekhara_submit(now),
            KeyCode::Backspace => app.estekhara_pop_char(),
            KeyCode::Char(c) => app.estekhara_push_char(c),
            _ => {}
        },
        Step::Selecting => {}
        Step::Result => match code {
            KeyCode::Char('s') => app.share_estekhara(now),
            KeyCode::Char('n') => app.estekhara_reset(),
            KeyCode::Char('h') => app.toggle_history(),
            KeyCode::Char('t') => app.toggle_theme(),
            KeyCode::Esc => app.go_to(Screen::Home, now),
            _ => {}
        },
    }
}

fn handle_login_key(app: &mut App, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Esc => app.go_to(Screen::Home, now),
        KeyCode::Enter => app.submit_login(now),
        KeyCode::Backspace => app.login.backspace(),
        KeyCode::Char('o') => app.toggle_terms(),
        KeyCode::Char(c) => app.login.push_char(c),
        _ => {}
    }
}

fn handle_verify_key(app: &mut App, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Esc => app.go_to(Screen::Home, now),
        KeyCode::Enter => app.submit_verify(now),
        KeyCode::Backspace => app.verify_backspace(),
        KeyCode::Char('r') => app.resend_code(now),
        KeyCode::Char('c') => app.change_number(now),
        KeyCode::Char(c) => app.verify_push_digit(c),
        _ => {}
    }
}

fn handle_profile_key(app: &mut App, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Esc => app.go_to(Screen::Home, now),
        KeyCode::Char('m') => app.open_drawer(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('i') => app.toggle_info(),
        KeyCode::Char('x') => app.request_logout(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    /// Helper to create a key event
    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn test_app() -> App {
        App::new(LocalStore::in_memory(), Instant::now())
    }

    #[test]
    fn test_mock_event_reader() {
        let events = vec![key_event(KeyCode::Char('a')), key_event(KeyCode::Enter)];
        let mut reader = MockEventReader::new(events);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_quit_with_q_key() {
        let mut app = test_app();
        assert!(!app.should_quit);

        handle_key(&mut app, KeyCode::Char('q'), Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn test_drawer_navigation_keys() {
        let mut app = test_app();
        let now = Instant::now();

        handle_key(&mut app, KeyCode::Char('m'), now);
        assert!(app.drawer_open);

        handle_key(&mut app, KeyCode::Char('j'), now);
        handle_key(&mut app, KeyCode::Enter, now);
        assert!(!app.drawer_open);
        assert_eq!(app.screen, Screen::Books);
    }

    #[test]
    fn test_search_keys_type_and_close() {
        let mut app = test_app();
        let now = Instant::now();

        handle_key(&mut app, KeyCode::Char('/'), now);
        assert!(app.search_open);

        handle_key(&mut app, KeyCode::Char('ت'), now);
        handle_key(&mut app, KeyCode::Char('ف'), now);
        assert_eq!(app.search_query, "تف");

        handle_key(&mut app, KeyCode::Esc, now);
        assert!(!app.search_open);
        assert_eq!(app.search_query, "");
    }

    #[test]
    fn test_assistant_typing_goes_to_input() {
        let mut app = test_app();
        let now = Instant::now();
        app.go_to(Screen::Assistant, now);

        handle_key(&mut app, KeyCode::Char('q'), now);
        assert!(!app.should_quit);
        assert_eq!(app.chat_input, "q");
    }

    #[test]
    fn test_login_only_accepts_digits() {
        let mut app = test_app();
        let now = Instant::now();
        app.go_to(Screen::Login, now);

        for c in "9x1y2".chars() {
            handle_key(&mut app, KeyCode::Char(c), now);
        }
        assert_eq!(app.login.mobile(), "912");
    }

    #[test]
    fn test_args_defaults() {
        let args = Args {
            page: StartPage::Home,
            state_file: None,
            debug: false,
        };
        assert_eq!(args.page, StartPage::Home);
        assert!(args.state_file.is_none());
    }

    #[tokio::test]
    async fn test_run_application_debug_mode() {
        let args = Args {
            page: StartPage::Home,
            state_file: Some(std::env::temp_dir().join("mahbub-debug-test.json")),
            debug: true,
        };

        let result = run_application(args).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_info_modal_blocks_other_keys() {
        let mut app = test_app();
        let now = Instant::now();

        handle_key(&mut app, KeyCode::Char('i'), now);
        assert!(app.show_info);

        handle_key(&mut app, KeyCode::Char('q'), now);
        assert!(!app.should_quit);

        handle_key(&mut app, KeyCode::Esc, now);
        assert!(!app.show_info);
    }
}
