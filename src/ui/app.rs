use crate::auth::{
    format_mobile_display, LoginForm, SimulatedSmsGateway, SmsGateway, VerificationSession,
};
use crate::content::assistant::{self, SpeechRecognizer, UnsupportedRecognizer};
use crate::content::library::{self, Book};
use crate::content::{dictionary, ChatLog};
use crate::estekhara::{EstekharaEngine, EstekharaHistory, EstekharaWizard, PickSource, Step};
use crate::storage::{keys, LocalStore};
use crate::ui::theme::Theme;
use rand::Rng;
use std::time::{Duration, Instant};

/// Auto-advance period of the home slideshow.
pub const SLIDE_DURATION: Duration = Duration::from_secs(5);

/// How long a toast notice stays up by default.
pub const NOTICE_DURATION: Duration = Duration::from_millis(2500);

/// Delay before the assistant welcome prompt appears on Home.
pub const WELCOME_DELAY: Duration = Duration::from_secs(1);

/// Delay before post-login/logout redirects.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(1);

const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Top-level screens, one per page of the original layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Books,
    Reader,
    Assistant,
    Estekhara,
    Login,
    Verify,
    Profile,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "خانه",
            Screen::Books => "کتاب‌ها",
            Screen::Reader => "مطالعه",
            Screen::Assistant => "دستیار مطالعه",
            Screen::Estekhara => "استخاره آنلاین",
            Screen::Login => "ورود",
            Screen::Verify => "تایید کد",
            Screen::Profile => "پروفایل",
        }
    }
}

/// Entries reachable from the navigation drawer.
pub const DRAWER_ITEMS: &[Screen] = &[
    Screen::Home,
    Screen::Books,
    Screen::Assistant,
    Screen::Estekhara,
    Screen::Profile,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Transient toast; dropped once `expires_at` passes.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub expires_at: Instant,
}

/// One-shot actions delivered after a simulated delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    ShowWelcome,
    AssistantReply { prompt: String },
    DictionaryResult { word: String },
    SearchComplete { query: String },
    EstekharaReveal,
    CodeSent,
    VerifyOutcome,
    ResendComplete,
    ProfileRedirect,
    LogoutRedirect,
}

#[derive(Debug)]
struct Pending {
    fire_at: Instant,
    action: Deferred,
}

/// Featured-banner rotation on the home screen.
#[derive(Debug)]
pub struct Slideshow {
    current: usize,
    count: usize,
    next_auto: Instant,
}

impl Slideshow {
    pub fn new(count: usize, now: Instant) -> Self {
        Self {
            current: 0,
            count,
            next_auto: now + SLIDE_DURATION,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self, now: Instant) {
        if self.count > 0 {
            self.current = (self.current + 1) % self.count;
        }
        self.next_auto = now + SLIDE_DURATION;
    }

    pub fn prev(&mut self, now: Instant) {
        if self.count > 0 {
            self.current = (self.current + self.count - 1) % self.count;
        }
        self.next_auto = now + SLIDE_DURATION;
    }

    pub fn goto(&mut self, index: usize, now: Instant) {
        if index < self.count {
            self.current = index;
        }
        self.next_auto = now + SLIDE_DURATION;
    }

    /// Advance automatically once the period has elapsed. Returns whether
    /// a slide change happened.
    pub fn advance_if_due(&mut self, now: Instant) -> bool {
        if self.count > 1 && now >= self.next_auto {
            self.next(now);
            true
        } else {
            false
        }
    }
}

/// Font size bounds for the reader, in steps of two.
pub const FONT_MIN: u8 = 12;
pub const FONT_MAX: u8 = 24;
const FONT_STEP: u8 = 2;

/// Line-height presets offered by the reader settings.
pub const LINE_HEIGHTS: &[f32] = &[1.5, 1.8, 2.2];

/// Per-book reading state: position, typography, and the word-selection
/// tools.
#[derive(Debug)]
pub struct ReaderState {
    pub book: &'static Book,
    current_page: usize,
    pub font_size: u8,
    pub line_height_index: usize,
    pub bookmarked: bool,
    selection: Option<usize>,
    pub highlights: Vec<String>,
    pub notes: Vec<(String, String)>,
}

impl ReaderState {
    pub fn new(book: &'static Book) -> Self {
        Self {
            book,
            current_page: 1,
            font_size: 16,
            line_height_index: 1,
            bookmarked: false,
            selection: None,
            highlights: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.book.total_pages {
            self.current_page += 1;
            self.selection = None;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
            self.selection = None;
        }
    }

    pub fn goto_page(&mut self, page: usize) {
        if (1..=self.book.total_pages).contains(&page) {
            self.current_page = page;
            self.selection = None;
        }
    }

    pub fn increase_font(&mut self) {
        if self.font_size < FONT_MAX {
            self.font_size += FONT_STEP;
        }
    }

    pub fn decrease_font(&mut self) {
        if self.font_size > FONT_MIN {
            self.font_size -= FONT_STEP;
        }
    }

    pub fn line_height(&self) -> f32 {
        LINE_HEIGHTS[self.line_height_index]
    }

    pub fn cycle_line_height(&mut self) {
        self.line_height_index = (self.line_height_index + 1) % LINE_HEIGHTS.len();
    }

    pub fn toggle_bookmark(&mut self) -> bool {
        self.bookmarked = !self.bookmarked;
        self.bookmarked
    }

    pub fn page_text(&self) -> String {
        library::page_text(self.book, self.current_page)
    }

    fn page_words(&self) -> Vec<String> {
        self.page_text()
            .split_whitespace()
            .map(ToString::to_string)
            .collect()
    }

    /// Whether word-selection mode is active.
    pub fn selecting(&self) -> bool {
        self.selection.is_some()
    }

    pub fn selected_word(&self) -> Option<String> {
        self.selection
            .and_then(|i| self.page_words().get(i).cloned())
    }

    pub fn selection_index(&self) -> Option<usize> {
        self.selection
    }

    pub fn enter_selection(&mut self) {
        if !self.page_words().is_empty() {
            self.selection = Some(0);
        }
    }

    pub fn exit_selection(&mut self) {
        self.selection = None;
    }

    pub fn select_next_word(&mut self) {
        let count = self.page_words().len();
        if let Some(i) = self.selection {
            if i + 1 < count {
                self.selection = Some(i + 1);
            }
        }
    }

    pub fn select_prev_word(&mut self) {
        if let Some(i) = self.selection {
            self.selection = Some(i.saturating_sub(1));
        }
    }

    /// Record the selected word as highlighted and leave selection mode.
    pub fn highlight_selected(&mut self) -> Option<String> {
        let word = self.selected_word()?;
        self.highlights.push(word.clone());
        self.selection = None;
        Some(word)
    }

    pub fn add_note(&mut self, note: &str) -> bool {
        let Some(word) = self.selected_word() else {
            return false;
        };
        self.notes.push((word, note.to_string()));
        self.selection = None;
        true
    }
}

/// Owns every piece of per-screen state and the clocks that drive it.
/// Constructed once at startup; all time-dependent behavior is keyed off
/// caller-supplied `Instant`s so tests can drive it without sleeping.
pub struct App {
    pub screen: Screen,
    pub theme: &'static Theme,
    store: LocalStore,

    // overlays
    pub drawer_open: bool,
    pub drawer_index: usize,
    pub search_open: bool,
    pub search_query: String,
    pub show_info: bool,
    pub welcome_visible: bool,
    pub welcome_dont_show: bool,
    pub terms_visible: bool,
    pub confirm_logout: bool,

    // home
    pub slideshow: Slideshow,
    pub categories: Vec<&'static str>,
    pub active_category: usize,

    // books
    pub book_index: usize,

    // reader
    pub reader: Option<ReaderState>,
    pub note_input: Option<String>,

    // assistant
    pub chat: ChatLog,
    pub chat_input: String,
    pub assistant_typing: bool,
    pub voice_supported: bool,
    suggestion_index: usize,

    // estekhara
    pub wizard: EstekharaWizard,
    pub question_input: String,
    pub history: EstekharaHistory,
    pub show_history: bool,
    engine: EstekharaEngine,

    // auth
    pub login: LoginForm,
    pub sending_code: bool,
    pub session: Option<VerificationSession>,
    pub verifying: bool,
    pub resending: bool,
    gateway: SimulatedSmsGateway,
    last_countdown_tick: Instant,

    // shell
    rng: rand::rngs::ThreadRng,
    pending: Vec<Pending>,
    pub notice: Option<Notice>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: LocalStore, now: Instant) -> Self {
        let theme = store
            .get(keys::THEME)
            .and_then(Theme::by_name)
            .unwrap_or_else(Theme::default_theme);
        let history = EstekharaHistory::load(&store);
        let voice_supported = UnsupportedRecognizer.is_supported();

        let mut app = Self {
            screen: Screen::Home,
            theme,
            store,
            drawer_open: false,
            drawer_index: 0,
            search_open: false,
            search_query: String::new(),
            show_info: false,
            welcome_visible: false,
            welcome_dont_show: false,
            terms_visible: false,
            confirm_logout: false,
            slideshow: Slideshow::new(library::FEATURED.len(), now),
            categories: library::categories(),
            active_category: 0,
            book_index: 0,
            reader: None,
            note_input: None,
            chat: ChatLog::new(),
            chat_input: String::new(),
            assistant_typing: false,
            voice_supported,
            suggestion_index: 0,
            wizard: EstekharaWizard::new(),
            question_input: String::new(),
            history,
            show_history: false,
            engine: EstekharaEngine::new(),
            login: LoginForm::new(),
            sending_code: false,
            session: None,
            verifying: false,
            resending: false,
            gateway: SimulatedSmsGateway::new(),
            last_countdown_tick: now,
            rng: rand::rng(),
            pending: Vec::new(),
            notice: None,
            should_quit: false,
        };

        if !app.store.contains(keys::AI_WELCOME_DONT_SHOW) {
            app.schedule(Deferred::ShowWelcome, WELCOME_DELAY, now);
        }

        app
    }

    /// Replace the pick source (tests inject a seeded engine).
    pub fn set_engine(&mut self, engine: EstekharaEngine) {
        self.engine = engine;
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.contains(keys::IS_LOGGED_IN)
    }

    /// The number shown on the verify screen: the stored pending mobile,
    /// or a placeholder when nothing was stored.
    pub fn pending_mobile_display(&self) -> String {
        let mobile = self.store.get(keys::PENDING_MOBILE).unwrap_or("09123456789");
        format_mobile_display(mobile)
    }

    // ---------------------------------------------------------------
    // Notices and deferred actions
    // ---------------------------------------------------------------

    pub fn notify(&mut self, message: impl Into<String>, kind: NoticeKind, now: Instant) {
        self.notify_for(message, kind, NOTICE_DURATION, now);
    }

    pub fn notify_for(
        &mut self,
        message: impl Into<String>,
        kind: NoticeKind,
        duration: Duration,
        now: Instant,
    ) {
        self.notice = Some(Notice {
            message: message.into(),
            kind,
            expires_at: now + duration,
        });
    }

    fn schedule(&mut self, action: Deferred, delay: Duration, now: Instant) {
        self.pending.push(Pending {
            fire_at: now + delay,
            action,
        });
    }

    fn cancel(&mut self, action: &Deferred) {
        self.pending.retain(|p| &p.action != action);
    }

    /// Drive everything time-based: notice expiry, slideshow, the
    /// verification countdown, and due deferred actions. Called from the
    /// event loop on every poll timeout.
    pub fn process_timers(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.notice = None;
        }

        let home_idle = self.screen == Screen::Home
            && !self.drawer_open
            && !self.search_open
            && !self.welcome_visible;
        if home_idle {
            self.slideshow.advance_if_due(now);
        }

        if self.screen == Screen::Verify && self.session.is_some() {
            while now.duration_since(self.last_countdown_tick) >= COUNTDOWN_TICK {
                self.last_countdown_tick += COUNTDOWN_TICK;
                if let Some(session) = &mut self.session {
                    session.tick();
                }
            }
        } else {
            self.last_countdown_tick = now;
        }

        let mut due: Vec<Pending> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].fire_at <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|p| p.fire_at);
        for pending in due {
            self.handle_deferred(pending.action, now);
        }
    }

    fn handle_deferred(&mut self, action: Deferred, now: Instant) {
        match action {
            Deferred::ShowWelcome => {
                if self.screen == Screen::Home && !self.store.contains(keys::AI_WELCOME_DONT_SHOW) {
                    self.welcome_visible = true;
                }
            }
            Deferred::AssistantReply { prompt } => {
                self.assistant_typing = false;
                self.chat.push_assistant(assistant::canned_reply(&prompt));
            }
            Deferred::DictionaryResult { word } => {
                let message = format!("📖 {word}: {}", dictionary::definition(&word));
                self.notify_for(message, NoticeKind::Info, Duration::from_secs(4), now);
            }
            Deferred::SearchComplete { query } => {
                self.notify(
                    format!("جستجو برای «{query}» نتیجه‌ای نداشت"),
                    NoticeKind::Info,
                    now,
                );
            }
            Deferred::EstekharaReveal => {
                if self.wizard.step() == Step::Selecting {
                    let entry = self.engine.fetch_pick();
                    self.engine
                        .record_history(self.wizard.question(), &entry, &mut self.history);
                    if let Err(err) = self.history.save(&mut self.store) {
                        tracing::warn!("failed to persist history: {err:#}");
                    }
                    self.wizard.deliver(entry);
                }
            }
            Deferred::CodeSent => {
                self.sending_code = false;
                if let Err(err) = self
                    .store
                    .set(keys::PENDING_MOBILE, self.login.pending_value())
                {
                    tracing::warn!("failed to persist pending mobile: {err:#}");
                }
                self.session = Some(VerificationSession::new());
                self.last_countdown_tick = now;
                self.screen = Screen::Verify;
                self.notify("کد تایید ارسال شد", NoticeKind::Info, now);
            }
            Deferred::VerifyOutcome => {
                self.verifying = false;
                let outcome = match &mut self.session {
                    Some(session) => session.verify(&mut self.gateway),
                    None => return,
                };
                match outcome {
                    Ok(()) => {
                        self.session = None;
                        if let Err(err) = self.store.remove(keys::PENDING_MOBILE) {
                            tracing::warn!("failed to clear pending mobile: {err:#}");
                        }
                        if let Err(err) = self.store.set(keys::IS_LOGGED_IN, "true") {
                            tracing::warn!("failed to persist login: {err:#}");
                        }
                        self.notify("✓ ورود موفقیت‌آمیز بود", NoticeKind::Success, now);
                        self.schedule(Deferred::ProfileRedirect, REDIRECT_DELAY, now);
                    }
                    Err(err) => {
                        self.notify(err.to_string(), NoticeKind::Error, now);
                    }
                }
            }
            Deferred::ResendComplete => {
                self.resending = false;
                if let Some(session) = &mut self.session {
                    session.restart_countdown();
                    self.last_countdown_tick = now;
                    self.notify("کد تایید مجدداً ارسال شد", NoticeKind::Info, now);
                }
            }
            Deferred::ProfileRedirect => {
                if self.screen == Screen::Verify {
                    self.screen = Screen::Profile;
                }
            }
            Deferred::LogoutRedirect => {
                if self.screen == Screen::Profile {
                    self.screen = Screen::Login;
                }
            }
        }
    }

    // ---------------------------------------------------------------
    // Navigation, drawer, search, theme
    // ---------------------------------------------------------------

    pub fn go_to(&mut self, screen: Screen, now: Instant) {
        self.drawer_open = false;
        self.search_open = false;

        // Leaving the verify screen tears the session down.
        if self.screen == Screen::Verify && screen != Screen::Verify {
            self.session = None;
            self.verifying = false;
            self.resending = false;
            self.cancel(&Deferred::VerifyOutcome);
            self.cancel(&Deferred::ResendComplete);
        }

        // Profile requires a session; fall back to login.
        let target = if screen == Screen::Profile && !self.is_logged_in() {
            Screen::Login
        } else {
            screen
        };

        self.screen = target;
        self.last_countdown_tick = now;
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
        self.drawer_index = DRAWER_ITEMS
            .iter()
            .position(|s| *s == self.screen)
            .unwrap_or(0);
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn drawer_next(&mut self) {
        self.drawer_index = (self.drawer_index + 1) % DRAWER_ITEMS.len();
    }

    pub fn drawer_prev(&mut self) {
        self.drawer_index = (self.drawer_index + DRAWER_ITEMS.len() - 1) % DRAWER_ITEMS.len();
    }

    pub fn drawer_activate(&mut self, now: Instant) {
        let target = DRAWER_ITEMS[self.drawer_index];
        self.go_to(target, now);
    }

    pub fn open_search(&mut self) {
        self.search_open = true;
        self.search_query.clear();
    }

    pub fn close_search(&mut self) {
        self.search_open = false;
        self.search_query.clear();
    }

    pub fn search_push_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn search_pop_char(&mut self) {
        self.search_query.pop();
    }

    /// Run the (simulated) search and close the overlay.
    pub fn submit_search(&mut self, now: Instant) {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.close_search();
        self.notify(format!("جستجو برای «{query}»..."), NoticeKind::Info, now);
        let delay = Duration::from_millis(800 + self.rng.random_range(0..2200));
        self.schedule(Deferred::SearchComplete { query }, delay, now);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.set(keys::THEME, self.theme.name) {
            tracing::warn!("failed to persist theme: {err:#}");
        }
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    // ---------------------------------------------------------------
    // Welcome modal
    // ---------------------------------------------------------------

    pub fn toggle_welcome_dont_show(&mut self) {
        self.welcome_dont_show = !self.welcome_dont_show;
    }

    pub fn dismiss_welcome(&mut self) {
        if self.welcome_dont_show {
            if let Err(err) = self.store.set(keys::AI_WELCOME_DONT_SHOW, "true") {
                tracing::warn!("failed to persist welcome suppression: {err:#}");
            }
        }
        self.welcome_visible = false;
    }

    /// Accept the welcome prompt: dismiss and open the assistant.
    pub fn accept_welcome(&mut self, now: Instant) {
        self.dismiss_welcome();
        self.go_to(Screen::Assistant, now);
    }

    // ---------------------------------------------------------------
    // Home: slideshow + category tabs
    // ---------------------------------------------------------------

    pub fn next_category(&mut self) {
        self.active_category = (self.active_category + 1) % self.categories.len();
        self.book_index = 0;
    }

    pub fn prev_category(&mut self) {
        self.active_category =
            (self.active_category + self.categories.len() - 1) % self.categories.len();
        self.book_index = 0;
    }

    pub fn visible_books(&self) -> Vec<&'static Book> {
        library::books_in_category(self.categories[self.active_category])
    }

    // ---------------------------------------------------------------
    // Books + reader
    // ---------------------------------------------------------------

    pub fn book_next(&mut self) {
        let count = self.visible_books().len();
        if count > 0 {
            self.book_index = (self.book_index + 1) % count;
        }
    }

    pub fn book_prev(&mut self) {
        let count = self.visible_books().len();
        if count > 0 {
            self.book_index = (self.book_index + count - 1) % count;
        }
    }

    pub fn open_selected_book(&mut self, now: Instant) {
        if let Some(book) = self.visible_books().get(self.book_index).copied() {
            self.reader = Some(ReaderState::new(book));
            self.go_to(Screen::Reader, now);
        }
    }

    /// Look up the selected word in the dictionary after the simulated
    /// delay.
    pub fn reader_lookup_selected(&mut self, now: Instant) {
        let Some(word) = self.reader.as_ref().and_then(ReaderState::selected_word) else {
            return;
        };
        self.notify(
            format!("جستجوی «{word}» در دیکشنری محبوب..."),
            NoticeKind::Info,
            now,
        );
        self.schedule(
            Deferred::DictionaryResult { word },
            dictionary::SEARCH_DELAY,
            now,
        );
        if let Some(reader) = &mut self.reader {
            reader.exit_selection();
        }
    }

    pub fn reader_highlight_selected(&mut self, now: Instant) {
        if let Some(reader) = &mut self.reader {
            if reader.highlight_selected().is_some() {
                self.notify("متن هایلایت شد", NoticeKind::Info, now);
            }
        }
    }

    pub fn reader_begin_note(&mut self) {
        let has_selection = self
            .reader
            .as_ref()
            .is_some_and(|r| r.selected_word().is_some());
        if has_selection {
            self.note_input = Some(String::new());
        }
    }

    pub fn reader_save_note(&mut self, now: Instant) {
        let Some(note) = self.note_input.take() else {
            return;
        };
        if note.trim().is_empty() {
            return;
        }
        if let Some(reader) = &mut self.reader {
            if reader.add_note(note.trim()) {
                self.notify("یادداشت ذخیره شد", NoticeKind::Success, now);
            }
        }
    }

    // ---------------------------------------------------------------
    // Assistant
    // ---------------------------------------------------------------

    pub fn chat_push_char(&mut self, c: char) {
        self.chat_input.push(c);
    }

    pub fn chat_pop_char(&mut self) {
        self.chat_input.pop();
    }

    /// Fill the input with the next suggested question.
    pub fn cycle_suggestion(&mut self) {
        let suggestions = assistant::SUGGESTED_QUESTIONS;
        self.chat_input = suggestions[self.suggestion_index % suggestions.len()].to_string();
        self.suggestion_index += 1;
    }

    pub fn send_chat(&mut self, now: Instant) {
        let text = self.chat_input.trim().to_string();
        if text.is_empty() || self.assistant_typing {
            return;
        }

        self.chat.push_user(text.clone());
        self.chat_input.clear();
        self.assistant_typing = true;

        let delay = assistant::reply_delay(&mut self.rng);
        self.schedule(Deferred::AssistantReply { prompt: text }, delay, now);
    }

    // ---------------------------------------------------------------
    // Estekhara
    // ---------------------------------------------------------------

    pub fn estekhara_start(&mut self) {
        self.wizard.start();
    }

    pub fn estekhara_push_char(&mut self, c: char) {
        self.question_input.push(c);
    }

    pub fn estekhara_pop_char(&mut self) {
        self.question_input.pop();
    }

    /// Submit the question; on success the pick is revealed after the
    /// engine's fixed delay.
    pub fn estekhara_submit(&mut self, now: Instant) {
        let question = self.question_input.clone();
        match self.wizard.submit_question(&question) {
            Ok(()) if self.wizard.step() == Step::Selecting => {
                let latency = self.engine.latency();
                self.schedule(Deferred::EstekharaReveal, latency, now);
            }
            Ok(()) => {}
            Err(err) => {
                self.notify(err.to_string(), NoticeKind::Error, now);
            }
        }
    }

    pub fn estekhara_reset(&mut self) {
        self.wizard.reset();
        self.question_input.clear();
        self.show_history = false;
        self.cancel(&Deferred::EstekharaReveal);
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    /// Copy a share text for the current result to the clipboard.
    pub fn share_estekhara(&mut self, now: Instant) {
        let Some(entry) = self.wizard.selected() else {
            return;
        };

        let text = format!(
            "استخاره با قرآن کریم\n\nسوال: {}\n\n{} - آیه {}\n{}\n\nاز اپلیکیشن محبوب",
            self.wizard.question(),
            entry.surah,
            entry.ayah_number,
            entry.translation,
        );

        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
            Ok(()) => self.notify("متن کپی شد", NoticeKind::Success, now),
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                self.notify("اشتراک‌گذاری ممکن نیست", NoticeKind::Error, now);
            }
        }
    }

    // ---------------------------------------------------------------
    // Login / verify / profile
    // ---------------------------------------------------------------

    pub fn toggle_terms(&mut self) {
        self.terms_visible = !self.terms_visible;
    }

    pub fn submit_login(&mut self, now: Instant) {
        if self.sending_code {
            return;
        }
        if !self.login.is_valid() {
            self.notify("شماره موبایل معتبر نیست", NoticeKind::Error, now);
            return;
        }

        self.sending_code = true;
        let mobile = self.login.pending_value();
        self.gateway.send_code(&mobile);
        let latency = self.gateway.latency();
        self.schedule(Deferred::CodeSent, latency, now);
    }

    pub fn verify_push_digit(&mut self, c: char) {
        if self.verifying {
            return;
        }
        if let Some(session) = &mut self.session {
            session.push_digit(c);
        }
    }

    pub fn verify_backspace(&mut self) {
        if self.verifying {
            return;
        }
        if let Some(session) = &mut self.session {
            session.backspace();
        }
    }

    pub fn submit_verify(&mut self, now: Instant) {
        let complete = self.session.as_ref().is_some_and(VerificationSession::is_complete);
        if complete && !self.verifying {
            self.verifying = true;
            let latency = self.gateway.latency();
            self.schedule(Deferred::VerifyOutcome, latency, now);
        }
    }

    pub fn resend_code(&mut self, now: Instant) {
        let allowed = self.session.as_ref().is_some_and(VerificationSession::resend_allowed);
        if allowed && !self.resending {
            self.resending = true;
            let mobile = self.pending_mobile_display();
            self.gateway.send_code(&mobile);
            let latency = self.gateway.latency();
            self.schedule(Deferred::ResendComplete, latency, now);
        }
    }

    pub fn change_number(&mut self, now: Instant) {
        self.login.clear();
        self.go_to(Screen::Login, now);
    }

    pub fn request_logout(&mut self) {
        self.confirm_logout = true;
    }

    pub fn cancel_logout(&mut self) {
        self.confirm_logout = false;
    }

    pub fn logout(&mut self, now: Instant) {
        self.confirm_logout = false;
        if let Err(err) = self.store.remove(keys::IS_LOGGED_IN) {
            tracing::warn!("failed to clear login flag: {err:#}");
        }
        if let Err(err) = self.store.remove(keys::PENDING_MOBILE) {
            tracing::warn!("failed to clear pending mobile: {err:#}");
        }
        self.notify("خروج موفقیت‌آمیز بود", NoticeKind::Success, now);
        self.schedule(Deferred::LogoutRedirect, REDIRECT_DELAY, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slideshow_wraps_both_directions() {
        let now = Instant::now();
        let mut slides = Slideshow::new(3, now);
        assert_eq!(slides.current(), 0);

        slides.prev(now);
        assert_eq!(slides.current(), 2);

        slides.next(now);
        slides.next(now);
        slides.next(now);
        slides.next(now);
        assert_eq!(slides.current(), 1);
    }

    #[test]
    fn test_slideshow_auto_advances_once_per_period() {
        let start = Instant::now();
        let mut slides = Slideshow::new(3, start);

        assert!(!slides.advance_if_due(start + Duration::from_secs(4)));
        assert!(slides.advance_if_due(start + SLIDE_DURATION));
        assert_eq!(slides.current(), 1);

        // The deadline was pushed back by the advance.
        assert!(!slides.advance_if_due(start + SLIDE_DURATION + Duration::from_secs(1)));
    }

    #[test]
    fn test_slideshow_manual_nav_pushes_deadline() {
        let start = Instant::now();
        let mut slides = Slideshow::new(3, start);

        let near_due = start + Duration::from_millis(4900);
        slides.next(near_due);
        assert!(!slides.advance_if_due(start + SLIDE_DURATION));
    }

    #[test]
    fn test_single_slide_never_auto_advances() {
        let start = Instant::now();
        let mut slides = Slideshow::new(1, start);
        assert!(!slides.advance_if_due(start + Duration::from_secs(60)));
        assert_eq!(slides.current(), 0);
    }

    #[test]
    fn test_reader_page_clamping() {
        let book = library::books()[0];
        let mut reader = ReaderState::new(&library::books()[0]);

        reader.prev_page();
        assert_eq!(reader.current_page(), 1);

        reader.next_page();
        assert_eq!(reader.current_page(), 2);

        reader.goto_page(book.total_pages);
        reader.next_page();
        assert_eq!(reader.current_page(), book.total_pages);

        reader.goto_page(0);
        assert_eq!(reader.current_page(), book.total_pages);
        reader.goto_page(book.total_pages + 1);
        assert_eq!(reader.current_page(), book.total_pages);
    }

    #[test]
    fn test_reader_font_bounds() {
        let mut reader = ReaderState::new(&library::books()[0]);
        assert_eq!(reader.font_size, 16);

        for _ in 0..10 {
            reader.increase_font();
        }
        assert_eq!(reader.font_size, FONT_MAX);

        for _ in 0..10 {
            reader.decrease_font();
        }
        assert_eq!(reader.font_size, FONT_MIN);
    }

    #[test]
    fn test_reader_selection_and_tools() {
        let mut reader = ReaderState::new(&library::books()[0]);
        assert!(!reader.selecting());

        reader.enter_selection();
        assert!(reader.selecting());
        let first = reader.selected_word().unwrap();

        reader.select_next_word();
        assert_ne!(reader.selected_word().unwrap(), first);

        reader.select_prev_word();
        reader.select_prev_word();
        assert_eq!(reader.selected_word().unwrap(), first);

        let highlighted = reader.highlight_selected().unwrap();
        assert_eq!(highlighted, first);
        assert!(!reader.selecting());
        assert_eq!(reader.highlights, vec![first]);
    }

    #[test]
    fn test_reader_bookmark_toggle() {
        let mut reader = ReaderState::new(&library::books()[0]);
        assert!(reader.toggle_bookmark());
        assert!(!reader.toggle_bookmark());
    }
}
