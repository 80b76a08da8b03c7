use crate::content::assistant::{self, Sender};
use crate::content::library;
use crate::estekhara::{Step, HISTORY_CAP};
use crate::ui::app::{App, NoticeKind, Screen, DRAWER_ITEMS};
use crate::ui::to_persian_digits;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme;

    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        frame.area(),
    );

    render_header(frame, app, main_chunks[0]);

    match app.screen {
        Screen::Home => render_home(frame, app, main_chunks[1]),
        Screen::Books => render_books(frame, app, main_chunks[1]),
        Screen::Reader => render_reader(frame, app, main_chunks[1]),
        Screen::Assistant => render_assistant(frame, app, main_chunks[1]),
        Screen::Estekhara => render_estekhara(frame, app, main_chunks[1]),
        Screen::Login => render_login(frame, app, main_chunks[1]),
        Screen::Verify => render_verify(frame, app, main_chunks[1]),
        Screen::Profile => render_profile(frame, app, main_chunks[1]),
    }

    render_footer(frame, app, main_chunks[2]);

    // Overlays, innermost last
    if app.drawer_open {
        render_drawer(frame, app, main_chunks[1]);
    }
    if app.search_open {
        render_search_modal(frame, app);
    }
    if app.terms_visible {
        render_terms_modal(frame, app);
    }
    if app.welcome_visible {
        render_welcome_modal(frame, app);
    }
    if app.confirm_logout {
        render_logout_confirm(frame, app);
    }
    if app.show_info {
        render_info_modal(frame, app);
    }
    if let Some(notice) = &app.notice {
        render_notice(frame, app, notice.message.as_str(), notice.kind);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  محبوب ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("— کتابخانه محتوای مذهبی  ", Style::default().fg(theme.fg_dim)),
        Span::styled(
            format!("[{}]", app.screen.title()),
            Style::default().fg(theme.secondary),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.drawer_open {
        "[↑↓/jk] انتخاب  [Enter] رفتن  [Esc] بستن"
    } else if app.search_open {
        "[Enter] جستجو  [Esc] بستن"
    } else {
        match app.screen {
            Screen::Home => "[m] منو  [/] جستجو  [←→] اسلاید  [Tab] دسته‌بندی  [t] تم  [i] راهنما  [q] خروج",
            Screen::Books => "[↑↓/jk] کتاب  [Tab] دسته‌بندی  [Enter] مطالعه  [m] منو  [q] خروج",
            Screen::Reader => {
                if app.note_input.is_some() {
                    "[Enter] ذخیره یادداشت  [Esc] انصراف"
                } else if app.reader.as_ref().is_some_and(|r| r.selecting()) {
                    "[←→] کلمه  [d] دیکشنری  [g] هایلایت  [n] یادداشت  [Esc] خروج از انتخاب"
                } else {
                    "[←] بعدی  [→] قبلی  [+/-] قلم  [L] فاصله خط  [b] نشان  [v] انتخاب متن  [Esc] بازگشت"
                }
            }
            Screen::Assistant => "[Enter] ارسال  [Tab] پیشنهاد  [Esc] بازگشت",
            Screen::Estekhara => match app.wizard.step() {
                Step::Intro => "[Enter] شروع استخاره  [h] تاریخچه  [m] منو",
                Step::Question => "[Enter] گشودن قرآن  [Esc] بازگشت",
                Step::Selecting => "در حال گشودن قرآن کریم...",
                Step::Result => "[s] اشتراک‌گذاری  [n] استخاره جدید  [h] تاریخچه",
            },
            Screen::Login => "[Enter] ارسال کد  [o] قوانین  [Esc] بازگشت",
            Screen::Verify => "[Enter] تایید  [r] ارسال مجدد  [c] تغییر شماره",
            Screen::Profile => "[x] خروج از حساب  [t] تم  [m] منو",
        }
    };

    let footer = Paragraph::new(hints).style(Style::default().fg(app.theme.fg_dim));
    frame.render_widget(footer, area);
}

fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // slideshow
            Constraint::Length(3), // category tabs
            Constraint::Min(0),    // book rows
        ])
        .split(area);

    // Featured banner with position dots
    let slide = library::FEATURED[app.slideshow.current()];
    let dots: String = (0..library::FEATURED.len())
        .map(|i| if i == app.slideshow.current() { '●' } else { '○' })
        .collect();
    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            slide,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(dots, Style::default().fg(theme.fg_dim))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface)),
    );
    frame.render_widget(banner, chunks[0]);

    render_category_tabs(frame, app, chunks[1]);

    // Books of the active category
    let items: Vec<ListItem> = app
        .visible_books()
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let style = if i == app.book_index {
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(format!("  📖 {} — {}", book.title, book.author)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("کتاب‌های پیشنهادی")
            .border_style(Style::default().fg(theme.fg_dim)),
    );
    frame.render_widget(list, chunks[2]);
}

fn render_category_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let mut spans = vec![Span::raw(" ")];
    for (i, category) in app.categories.iter().enumerate() {
        let style = if i == app.active_category {
            Style::default()
                .fg(theme.bg)
                .bg(theme.secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_dim)
        };
        spans.push(Span::styled(format!(" {category} "), style));
        spans.push(Span::raw(" "));
    }

    let tabs = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.fg_dim)),
    );
    frame.render_widget(tabs, area);
}

fn render_books(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_category_tabs(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let items: Vec<ListItem> = app
        .visible_books()
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let style = if i == app.book_index {
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(format!("  {}", book.title)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("📚 کتاب‌ها")
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(list, body[0]);

    let detail = match app.visible_books().get(app.book_index) {
        Some(book) => vec![
            Line::from(Span::styled(
                book.title,
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("نویسنده: ", Style::default().fg(theme.fg_dim)),
                Span::raw(book.author),
            ]),
            Line::from(vec![
                Span::styled("دسته‌بندی: ", Style::default().fg(theme.fg_dim)),
                Span::raw(book.category),
            ]),
            Line::from(vec![
                Span::styled("صفحات: ", Style::default().fg(theme.fg_dim)),
                Span::raw(to_persian_digits(&book.total_pages.to_string())),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "برای مطالعه Enter را بزنید",
                Style::default().fg(theme.fg_dim),
            )),
        ],
        None => vec![Line::from("کتابی در این دسته نیست")],
    };

    let paragraph = Paragraph::new(detail)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("جزئیات")
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body[1]);
}

fn render_reader(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let Some(reader) = &app.reader else {
        let empty = Paragraph::new("کتابی انتخاب نشده است")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    // Page body; in selection mode the current word is inverted.
    let text = reader.page_text();
    let body = if let Some(selected) = reader.selection_index() {
        let mut spans = Vec::new();
        for (i, word) in text.split_whitespace().enumerate() {
            let style = if i == selected {
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            spans.push(Span::styled(word.to_string(), style));
            spans.push(Span::raw(" "));
        }
        vec![Line::from(spans)]
    } else {
        text.lines()
            .map(|l| Line::from(l.to_string()))
            .collect::<Vec<_>>()
    };

    let bookmark = if reader.bookmarked { "🔖" } else { "" };
    let page = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} {}", reader.book.title, bookmark))
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.surface)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(page, chunks[0]);

    let status = if let Some(note) = &app.note_input {
        format!("یادداشت: {note}_")
    } else {
        format!(
            "صفحه {} از {}  |  قلم {}  |  فاصله خط {:.1}",
            to_persian_digits(&reader.current_page().to_string()),
            to_persian_digits(&reader.book.total_pages.to_string()),
            to_persian_digits(&reader.font_size.to_string()),
            reader.line_height(),
        )
    };
    let bar = Paragraph::new(status)
        .style(Style::default().fg(theme.fg_dim))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.fg_dim)),
        );
    frame.render_widget(bar, chunks[1]);
}

fn render_assistant(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    if app.chat.is_empty() {
        lines.push(Line::from(Span::styled(
            "سلام! درباره تفسیر، احادیث و احکام از من بپرسید.",
            Style::default().fg(theme.fg_dim),
        )));
        lines.push(Line::from(""));
        for suggestion in assistant::SUGGESTED_QUESTIONS {
            lines.push(Line::from(Span::styled(
                format!("  ◦ {suggestion}"),
                Style::default().fg(theme.secondary),
            )));
        }
    } else {
        for message in app.chat.messages() {
            let (icon, style) = match message.sender {
                Sender::User => ("👤", Style::default().fg(theme.fg)),
                Sender::Assistant => ("🤖", Style::default().fg(theme.accent)),
            };
            lines.push(Line::from(Span::styled(
                format!("{icon} {}", message.text),
                style,
            )));
            lines.push(Line::from(""));
        }
    }
    if app.assistant_typing {
        lines.push(Line::from(Span::styled(
            "🤖 ● ● ●",
            Style::default().fg(theme.fg_dim),
        )));
    }

    let log = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("💬 گفتگو")
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(log, chunks[0]);

    let input = Paragraph::new(format!("{}_", app.chat_input)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("پیام شما")
            .border_style(Style::default().fg(theme.secondary)),
    );
    frame.render_widget(input, chunks[1]);
}

fn render_estekhara(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;

    if app.show_history {
        render_estekhara_history(frame, app, area);
        return;
    }

    let lines: Vec<Line> = match app.wizard.step() {
        Step::Intro => vec![
            Line::from(""),
            Line::from(Span::styled(
                "استخاره آنلاین با قرآن کریم",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("با نیت خالص و ذکر صلوات، موضوع خود را در قلب مرور کنید."),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "تاریخچه: {} استخاره ثبت شده",
                    to_persian_digits(&app.history.len().to_string())
                ),
                Style::default().fg(theme.fg_dim),
            )),
        ],
        Step::Question => vec![
            Line::from(""),
            Line::from("موضوع استخاره خود را بنویسید:"),
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}_", app.question_input),
                Style::default().fg(theme.secondary),
            )),
        ],
        Step::Selecting => vec![
            Line::from(""),
            Line::from(Span::styled(
                "در حال گشودن قرآن کریم...",
                Style::default().fg(theme.fg_dim),
            )),
        ],
        Step::Result => match app.wizard.selected() {
            Some(entry) => {
                use crate::content::Polarity;
                let (icon, title, color) = match entry.polarity {
                    Polarity::Positive => ("✓", "نتیجه استخاره مثبت است", theme.success),
                    Polarity::Negative => ("!", "نتیجه استخاره منفی است", theme.error),
                };
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("{icon} {title}"),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("سوره {} — آیه {}", entry.surah, entry.ayah_number),
                        Style::default().fg(theme.fg_dim),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        entry.text.clone(),
                        Style::default()
                            .fg(theme.secondary)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(entry.translation.clone()),
                    Line::from(""),
                    Line::from(Span::styled("تعبیر:", Style::default().fg(theme.fg_dim))),
                    Line::from(entry.interpretation.clone()),
                ]
            }
            None => vec![Line::from("نتیجه‌ای موجود نیست")],
        },
    };

    let step_title = format!(
        "🕌 استخاره — مرحله {} از ۴",
        to_persian_digits(&app.wizard.step().number().to_string())
    );
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(step_title)
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_estekhara_history(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let items: Vec<ListItem> = if app.history.is_empty() {
        vec![ListItem::new("هنوز استخاره‌ای ثبت نشده است")]
    } else {
        app.history
            .records()
            .iter()
            .map(|record| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!("• {}", record.question),
                        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!(
                            "  سوره {} آیه {} — {}",
                            record.ayah.surah,
                            record.ayah.ayah_number,
                            record.date.format("%Y-%m-%d %H:%M")
                        ),
                        Style::default().fg(theme.fg_dim),
                    )),
                ])
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("تاریخچه استخاره (حداکثر {HISTORY_CAP})"))
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(list, area);
}

fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let valid = app.login.is_valid();
    let status = if app.sending_code {
        Span::styled("در حال ارسال...", Style::default().fg(theme.fg_dim))
    } else if valid {
        Span::styled("برای ارسال کد Enter را بزنید", Style::default().fg(theme.success))
    } else {
        Span::styled(
            "شماره موبایل بدون صفر و با ۹ شروع می‌شود (۱۰ رقم)",
            Style::default().fg(theme.fg_dim),
        )
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ورود با شماره موبایل",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}_", to_persian_digits(app.login.mobile())),
            Style::default().fg(theme.secondary),
        )),
        Line::from(""),
        Line::from(status),
        Line::from(""),
        Line::from(Span::styled(
            "با ورود، قوانین استفاده را می‌پذیرید [o]",
            Style::default().fg(theme.fg_dim),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("🔑 ورود")
                .border_style(Style::default().fg(theme.accent)),
        );
    frame.render_widget(paragraph, area);
}

fn render_verify(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let Some(session) = &app.session else {
        let empty = Paragraph::new("جلسه تاییدی فعال نیست — ابتدا وارد شوید")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    // Five code boxes, filled from the buffer.
    let mut boxes = String::new();
    for i in 0..crate::auth::CODE_LENGTH {
        match session.code().chars().nth(i) {
            Some(c) => boxes.push_str(&format!(" [{}]", to_persian_digits(&c.to_string()))),
            None => boxes.push_str(" [ ]"),
        }
    }

    let countdown = if session.resend_allowed() {
        Span::styled(
            "زمان اعتبار کد به پایان رسید — [r] ارسال مجدد",
            Style::default().fg(theme.error),
        )
    } else {
        Span::styled(
            format!(
                "ارسال مجدد پس از {}",
                to_persian_digits(&session.countdown_display())
            ),
            Style::default().fg(theme.fg_dim),
        )
    };

    let status = if app.verifying {
        "در حال تایید..."
    } else if app.resending {
        "در حال ارسال..."
    } else if session.is_complete() {
        "برای تایید Enter را بزنید"
    } else {
        "کد ۵ رقمی پیامک‌شده را وارد کنید"
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("کد تایید به {} ارسال شد", to_persian_digits(&app.pending_mobile_display())),
            Style::default().fg(theme.fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            boxes,
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(status, Style::default().fg(theme.fg_dim))),
        Line::from(""),
        Line::from(countdown),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("📱 تایید کد")
                .border_style(Style::default().fg(theme.accent)),
        );
    frame.render_widget(paragraph, area);
}

fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "حساب کاربری",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("وضعیت: ", Style::default().fg(theme.fg_dim)),
            if app.is_logged_in() {
                Span::styled("وارد شده", Style::default().fg(theme.success))
            } else {
                Span::styled("وارد نشده", Style::default().fg(theme.error))
            },
        ]),
        Line::from(vec![
            Span::styled("تم: ", Style::default().fg(theme.fg_dim)),
            Span::raw(if app.theme.name == "dark" {
                "تیره"
            } else {
                "روشن"
            }),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[t] تغییر تم   [x] خروج از حساب",
            Style::default().fg(theme.fg_dim),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("👤 پروفایل")
                .border_style(Style::default().fg(theme.accent)),
        );
    frame.render_widget(paragraph, area);
}

fn render_drawer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let width = (area.width / 3).max(24).min(area.width);
    let drawer_area = Rect::new(area.x, area.y, width, area.height);
    frame.render_widget(Clear, drawer_area);

    let items: Vec<ListItem> = DRAWER_ITEMS
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            let style = if i == app.drawer_index {
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(format!("  {}", screen.title())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("☰ منو")
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface)),
    );
    frame.render_widget(list, drawer_area);
}

fn render_search_modal(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("  {}_", app.search_query)),
        Line::from(""),
        Line::from(Span::styled(
            "  عنوان کتاب، نویسنده یا موضوع را بنویسید",
            Style::default().fg(theme.fg_dim),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("🔍 جستجو")
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface)),
    );
    frame.render_widget(paragraph, area);
}

fn render_welcome_modal(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);

    let checkbox = if app.welcome_dont_show { "[x]" } else { "[ ]" };
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "🤖 دستیار مطالعه محبوب",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("درباره تفسیر، احادیث و احکام بپرسید و پاسخ فوری بگیرید."),
        Line::from(""),
        Line::from(Span::styled(
            format!("{checkbox} دیگر نشان نده  [d]"),
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] شروع گفتگو   [Esc] بعداً",
            Style::default().fg(theme.fg_dim),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface)),
    );
    frame.render_widget(paragraph, area);
}

fn render_terms_modal(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = centered_rect(70, 50, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from("استفاده از این برنامه به معنی پذیرش قوانین است:"),
        Line::from(""),
        Line::from("  ۱. شماره موبایل فقط برای ورود استفاده می‌شود."),
        Line::from("  ۲. محتوای کتاب‌ها متعلق به ناشران است."),
        Line::from("  ۳. نتیجه استخاره جایگزین مشورت نیست."),
        Line::from(""),
        Line::from(Span::styled(
            "[Esc] بستن",
            Style::default().fg(theme.fg_dim),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("قوانین استفاده")
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface)),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_logout_confirm(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from("آیا مطمئن هستید که می‌خواهید خارج شوید؟"),
        Line::from(""),
        Line::from(Span::styled(
            "[y] بله   [n] خیر",
            Style::default().fg(theme.fg_dim),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("خروج از حساب")
            .border_style(Style::default().fg(theme.error))
            .style(Style::default().bg(theme.surface)),
    );
    frame.render_widget(paragraph, area);
}

fn render_info_modal(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            "راهنمای کلیدها",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  m      باز کردن منوی کشویی"),
        Line::from("  /      جستجو"),
        Line::from("  t      تغییر تم تیره/روشن"),
        Line::from("  ←→     اسلاید / صفحه"),
        Line::from("  Tab    دسته‌بندی / پیشنهاد"),
        Line::from("  Esc    بستن / بازگشت"),
        Line::from("  q      خروج از برنامه"),
        Line::from(""),
        Line::from(Span::styled(
            "[i] یا [Esc] برای بستن",
            Style::default().fg(theme.fg_dim),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("ℹ راهنما")
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface)),
    );
    frame.render_widget(paragraph, area);
}

fn render_notice(frame: &mut Frame, app: &App, message: &str, kind: NoticeKind) {
    let theme = app.theme;
    let color = match kind {
        NoticeKind::Info => theme.accent,
        NoticeKind::Success => theme.success,
        NoticeKind::Error => theme.error,
    };

    let width = (message.chars().count() as u16 + 6).min(frame.area().width);
    let area = Rect::new(
        frame.area().width.saturating_sub(width) / 2,
        1,
        width,
        3,
    );
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme.surface)),
        );
    frame.render_widget(paragraph, area);
}

/// Centered sub-rectangle by percentage, for modals.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
