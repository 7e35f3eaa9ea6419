use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use edugate_core::dialog::Category;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{InputHint, InputLine, OverlayConfig, render_input_line, render_overlay};
use crate::effects::UiEffect;
use crate::state::{Dialog, TuiState};

const CATEGORIES: [Category; 2] = [Category::Student, Category::Faculty];

const BORDER_COLOR: Color = Color::Cyan;
const POPUP_WIDTH: u16 = 60;
const PICKER_HEIGHT: u16 = 9;
const FORM_HEIGHT: u16 = 17;

/// Form field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Identifier,
    Password,
    Captcha,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Identifier => Field::Password,
            Field::Password => Field::Captcha,
            Field::Captcha => Field::Identifier,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Identifier => Field::Captcha,
            Field::Password => Field::Identifier,
            Field::Captcha => Field::Password,
        }
    }
}

/// View state of the login overlay. Form data lives in the dialog.
#[derive(Debug, Clone, Default)]
pub struct LoginOverlayState {
    /// Highlighted row in the category picker.
    pub selected: usize,
    pub focus: Field,
}

impl LoginOverlayState {
    /// Opens the dialog (full reset) and returns a fresh overlay.
    pub fn open(dialog: &mut Dialog) -> Self {
        dialog.open();
        Self::default()
    }

    pub fn handle_key(&mut self, dialog: &mut Dialog, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
            dialog.close();
            return OverlayUpdate::close();
        }

        if dialog.category() == Category::Unselected {
            self.handle_picker_key(dialog, key)
        } else {
            self.handle_form_key(dialog, key, ctrl)
        }
    }

    fn handle_picker_key(&mut self, dialog: &mut Dialog, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected < CATEGORIES.len() - 1 {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(&category) = CATEGORIES.get(self.selected)
                    && dialog.select_category(category)
                {
                    self.focus = Field::Identifier;
                }
            }
            _ => {}
        }
        OverlayUpdate::stay()
    }

    fn handle_form_key(&mut self, dialog: &mut Dialog, key: KeyEvent, ctrl: bool) -> OverlayUpdate {
        match key.code {
            KeyCode::Char('r') if ctrl => dialog.refresh_captcha(),
            KeyCode::Char('b') if ctrl => {
                dialog.back();
                self.focus = Field::Identifier;
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => {
                // Validation failures are shown through the dialog's inline error.
                if let Ok(request) = dialog.begin_submit() {
                    return OverlayUpdate::stay()
                        .with_ui_effects(vec![UiEffect::SubmitLogin { request }]);
                }
                if dialog.input().captcha.is_empty() && !dialog.input().id.is_empty() {
                    self.focus = Field::Captcha;
                }
            }
            KeyCode::Backspace => {
                self.field_mut(dialog).pop();
            }
            KeyCode::Char(c) if !ctrl => self.field_mut(dialog).push(c),
            _ => {}
        }
        OverlayUpdate::stay()
    }

    /// Inserts pasted text into the focused field. Ignored on the picker.
    pub fn handle_paste(&mut self, dialog: &mut Dialog, text: &str) {
        if dialog.category() == Category::Unselected {
            return;
        }
        let field = self.field_mut(dialog);
        field.extend(text.chars().filter(|c| !c.is_control()));
    }

    fn field_mut<'a>(&self, dialog: &'a mut Dialog) -> &'a mut String {
        let input = dialog.input_mut();
        match self.focus {
            Field::Identifier => &mut input.id,
            Field::Password => &mut input.password,
            Field::Captcha => &mut input.captcha,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let category = tui.dialog.category();
        if category == Category::Unselected {
            self.render_picker(frame, area);
        } else {
            self.render_form(frame, area, tui, category);
        }
    }

    fn render_picker(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("Enter", "select"),
            InputHint::new("Esc", "close"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: Category::Unselected.title(),
                border_color: BORDER_COLOR,
                width: POPUP_WIDTH,
                height: PICKER_HEIGHT,
                hints: &hints,
            },
        );

        let mut lines = vec![
            Line::from(Span::styled(
                "Who is signing in?",
                Style::default().fg(Color::White),
            )),
            Line::from(""),
        ];
        for (idx, category) in CATEGORIES.iter().enumerate() {
            let label = match category {
                Category::Student => "Student",
                Category::Faculty | Category::Unselected => "Faculty",
            };
            let (pointer, style) = if idx == self.selected {
                (
                    "▶ ",
                    Style::default()
                        .fg(BORDER_COLOR)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            lines.push(Line::from(Span::styled(format!("{pointer}{label}"), style)));
        }

        frame.render_widget(Paragraph::new(lines), layout.body);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, tui: &TuiState, category: Category) {
        let dialog = &tui.dialog;
        let input = dialog.input();

        let hints = [
            InputHint::new("Tab", "next"),
            InputHint::new("Enter", "sign in"),
            InputHint::new("^R", "new captcha"),
            InputHint::new("^B", "back"),
            InputHint::new("Esc", "close"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: category.title(),
                border_color: BORDER_COLOR,
                width: POPUP_WIDTH,
                height: FORM_HEIGHT,
                hints: &hints,
            },
        );
        let body = layout.body;
        let row = |offset: u16| -> Option<Rect> {
            (offset < body.height).then(|| Rect::new(body.x, body.y + offset, body.width, 1))
        };
        let label_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let masked = "•".repeat(input.password.chars().count());
        let fields = [
            (
                Field::Identifier,
                category.identifier_label(),
                input.id.as_str(),
                Some(category.identifier_placeholder()),
            ),
            (
                Field::Password,
                "Password",
                masked.as_str(),
                Some("Enter your password"),
            ),
        ];

        let mut offset = 0;
        for (field, label, value, placeholder) in fields {
            if let Some(r) = row(offset) {
                frame.render_widget(Paragraph::new(Span::styled(label, label_style)), r);
            }
            if let Some(r) = row(offset + 1) {
                render_input_line(frame, r, &self.input_line(field, value, placeholder));
            }
            offset += 3;
        }

        if let Some(r) = row(offset) {
            let challenge = Line::from(vec![
                Span::styled("captcha ", label_style),
                Span::styled(
                    format!(" {} ", dialog.captcha()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  ^R to refresh", Style::default().fg(Color::DarkGray)),
            ]);
            frame.render_widget(Paragraph::new(challenge), r);
        }
        if let Some(r) = row(offset + 1) {
            render_input_line(
                frame,
                r,
                &self.input_line(Field::Captcha, &input.captcha, Some("Enter CAPTCHA")),
            );
        }
        offset += 3;

        if let Some(r) = row(offset) {
            let status = if let Some(error) = dialog.error() {
                Span::styled(error.to_string(), Style::default().fg(Color::Red))
            } else if tui.pending_logins > 0 {
                Span::styled("Signing in...", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("")
            };
            frame.render_widget(Paragraph::new(status), r);
        }
    }

    fn input_line<'a>(
        &self,
        field: Field,
        value: &'a str,
        placeholder: Option<&'a str>,
    ) -> InputLine<'a> {
        InputLine {
            value,
            placeholder,
            focused: self.focus == field,
            prompt_color: BORDER_COLOR,
            text_color: Color::White,
            placeholder_color: Color::DarkGray,
            cursor_color: BORDER_COLOR,
        }
    }
}
