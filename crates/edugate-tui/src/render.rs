//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use edugate_core::session::StudentSession;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::overlays::OverlayExt;
use crate::overlays::render_utils::{InputHint, render_hints};
use crate::state::{AppState, Portal, TuiState};

/// Spinner frames for the pending-login indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    render_portal(state, frame, chunks[0]);
    render_status_line(state, frame, chunks[1]);

    app.overlay.render(frame, chunks[0], state);
}

fn render_portal(state: &TuiState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" EduGate ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = portal_lines(&state.portal);
    if let Some(notice) = &state.notice {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Green),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn portal_lines(portal: &Portal) -> Vec<Line<'static>> {
    let heading = |text: &str| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let muted = |text: String| Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)));

    match portal {
        Portal::None => vec![
            heading("Not signed in"),
            muted("Press l to sign in as a student or faculty member.".to_string()),
        ],
        Portal::Student(session) => {
            let mut lines = vec![heading("Student Portal"), Line::from("")];
            lines.extend(student_fields(session).into_iter().map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label:<12}"), Style::default().fg(Color::DarkGray)),
                    Span::styled(value, Style::default().fg(Color::White)),
                ])
            }));
            lines
        }
        Portal::Faculty { name } => vec![
            heading("Faculty Portal"),
            Line::from(""),
            muted(format!(
                "Signed in as {}",
                name.as_deref().unwrap_or("faculty member")
            )),
        ],
    }
}

fn student_fields(session: &StudentSession) -> Vec<(&'static str, String)> {
    let fields = [
        ("Name", &session.name),
        ("Email", &session.email),
        ("Roll number", &session.roll_number),
        ("Class", &session.class_name),
    ];
    let mut rows: Vec<(&'static str, String)> = fields
        .into_iter()
        .filter_map(|(label, value)| value.clone().map(|v| (label, v)))
        .collect();
    rows.push(("Semester", session.semester.clone()));
    rows.push(("Batch", session.batch.clone()));
    rows
}

fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    if state.pending_logins > 0 {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("Signing in via {}", state.api_base_url),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
        return;
    }

    let hints = [InputHint::new("l", "login"), InputHint::new("q", "quit")];
    render_hints(frame, area, &hints, Color::Cyan);
}
