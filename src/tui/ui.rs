//! TUI layout and rendering with ratatui.
//!
//! # Overview
//!
//! The screen mirrors the module page:
//! - Header with the module badge and title
//! - Progress gauge ("Question i of n")
//! - The current question card, or the completion card
//! - Footer with available commands
//! - A modal dialog for blocking notices
//!
//! # Example
//!
//! ```no_run
//! use conscious_choice::tui::app::App;
//! use conscious_choice::tui::ui::render;
//! use ratatui::Frame;
//!
//! fn draw(frame: &mut Frame, app: &App) {
//!     render(frame, app);
//! }
//! ```

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use super::app::{App, AppMode};
use crate::page::skeleton::SITE_NAME;
use crate::quiz::view::{option_letter, CORRECT_LABEL, INCORRECT_LABEL};

/// Create a block with the standard border style.
fn create_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
}

/// Render the TUI based on current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
    match app.mode() {
        AppMode::Completed => render_completion(frame, app, chunks[2]),
        AppMode::Answering | AppMode::Notice | AppMode::Quitting => {
            render_question(frame, app, chunks[2]);
        }
    }
    render_footer(frame, app, chunks[3]);

    if app.mode() == AppMode::Notice {
        render_notice_dialog(frame, app, area);
    }
}

/// Render the header with module badge and title.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let module = app.quiz().module();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Module {}", module.id),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            module.title.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        create_block()
            .title(format!(" {SITE_NAME} "))
            .border_style(Style::default().fg(theme.primary)),
    );

    frame.render_widget(header, area);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let quiz = app.quiz();
    let title = if quiz.is_completed() {
        " Complete ".to_string()
    } else {
        format!(
            " Question {} of {} ",
            quiz.current_index() + 1,
            quiz.question_count()
        )
    };
    let percent = quiz.progress_percent();

    let gauge = Gauge::default()
        .block(create_block().title(title))
        .gauge_style(Style::default().fg(theme.primary))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{percent:.0}%"));

    frame.render_widget(gauge, area);
}

/// Lines for the current question card.
fn question_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme();
    let quiz = app.quiz();
    let Some(question) = quiz.current_question() else {
        return vec![Line::from(Span::styled(
            "This module has no questions.",
            Style::default().fg(theme.dim),
        ))];
    };
    let index = quiz.current_index();
    let selection = quiz.selection(index);
    let focused = app.focused_position();

    let mut lines = vec![
        Line::from(Span::styled(
            question.title.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.scenario.clone(),
            Style::default().fg(theme.normal),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.question.clone(),
            Style::default()
                .fg(theme.normal)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (position, option) in quiz.displayed_options(index).iter().enumerate() {
        let is_selected = selection == Some(position);
        let marker = if focused == Some(position) { "›" } else { " " };
        let verdict = if option.correct {
            theme.success
        } else {
            theme.danger
        };

        let style = if is_selected {
            Style::default().fg(verdict).add_modifier(Modifier::BOLD)
        } else if focused == Some(position) {
            Style::default().fg(theme.secondary)
        } else {
            Style::default().fg(theme.normal)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(theme.secondary)),
            Span::styled(format!("{}. ", option_letter(position)), style),
            Span::styled(option.text.clone(), style),
        ]));

        if is_selected {
            let label = if option.correct {
                CORRECT_LABEL
            } else {
                INCORRECT_LABEL
            };
            lines.push(Line::from(vec![
                Span::raw("     "),
                Span::styled(label, Style::default().fg(verdict).add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}", option.feedback), Style::default().fg(verdict)),
            ]));
        }
    }

    if !question.resources.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Learn More",
            Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
        )));
        for resource in &question.resources {
            lines.push(Line::from(Span::styled(
                format!("  • {} ({})", resource.title, resource.url),
                Style::default().fg(theme.dim),
            )));
        }
    }

    lines
}

fn render_question(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Question {} ", app.quiz().current_index() + 1);
    let card = Paragraph::new(question_lines(app))
        .wrap(Wrap { trim: false })
        .block(create_block().title(title));
    frame.render_widget(card, area);
}

fn render_completion(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let quiz = app.quiz();
    let card = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Module Complete",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(quiz.module().completion_message.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Enter] ",
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(quiz.follow_on().label(), Style::default().fg(theme.normal)),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(create_block().border_style(Style::default().fg(theme.success)));

    frame.render_widget(card, area);
}

/// Key hints for the footer in the current mode.
fn footer_commands(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.mode() {
        AppMode::Answering => {
            let forward = if app.quiz().is_last_question() {
                "Finish"
            } else {
                "Next"
            };
            let back = if app.quiz().current_index() == 0 {
                "Modules"
            } else {
                "Back"
            };
            vec![
                ("↑↓", "Choose"),
                ("Enter", "Select"),
                ("n", forward),
                ("p", back),
                ("q", "Quit"),
            ]
        }
        AppMode::Notice => vec![("Esc", "Dismiss")],
        AppMode::Completed => vec![("Enter", app.quiz().follow_on().label()), ("q", "Quit")],
        AppMode::Quitting => vec![],
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let spans: Vec<Span> = footer_commands(app)
        .into_iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(
                    format!("[{key}]"),
                    Style::default()
                        .fg(theme.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{desc} "), Style::default().fg(theme.normal)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(create_block().border_style(Style::default().fg(theme.dim)));

    frame.render_widget(footer, area);
}

fn render_notice_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let dialog_area = centered_rect(60, 25, area);
    frame.render_widget(Clear, dialog_area);

    let notice = Paragraph::new(vec![
        Line::from(Span::styled(
            "Notice",
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(app.notice().unwrap_or_default().to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to dismiss",
            Style::default().fg(theme.dim),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(create_block().border_style(Style::default().fg(theme.danger)));

    frame.render_widget(notice, dialog_area);
}

/// Rectangle of the given percentage size centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
