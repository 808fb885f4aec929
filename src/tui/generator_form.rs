//! Generator form component.
//!
//! Single form with the length field, four class toggles, Generate and Reset
//! buttons, and the result panel. All state lives in [`FormState`]; the
//! component only adds focus handling and rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::ThreadRng;
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::branding::APP_DISPLAY_NAME;
use crate::form::FormState;
use crate::models::{CharacterClass, MAX_LENGTH, MIN_LENGTH};
use crate::tui::theme::Theme;
use crate::tui::Component;

/// Events emitted by the generator form
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorFormEvent {
    /// A new password was generated
    Generated {
        /// Password length
        length: usize,
        /// Estimated entropy in bits
        entropy_bits: f64,
    },
    /// Submit was attempted while the form is invalid
    SubmitBlocked,
    /// The form was reset to its defaults
    Reset,
    /// User wants the current password on the clipboard
    CopyRequested(String),
    /// Copy was requested before anything was generated
    NothingToCopy,
    /// User toggled the help overlay
    ToggleHelp,
    /// User wants to leave the application
    Quit,
}

/// Form row selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// Length text field
    Length,
    /// A class toggle
    Class(CharacterClass),
    /// Generate button
    Generate,
    /// Reset button
    Reset,
}

impl FormRow {
    /// Rows top to bottom, as rendered.
    pub const ORDER: [Self; 7] = [
        Self::Length,
        Self::Class(CharacterClass::Lowercase),
        Self::Class(CharacterClass::Uppercase),
        Self::Class(CharacterClass::Digits),
        Self::Class(CharacterClass::Symbols),
        Self::Generate,
        Self::Reset,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|row| *row == self).unwrap_or(0)
    }

    /// Get next row (wraps around)
    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Get previous row (wraps around)
    fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Generator form component state
#[derive(Debug, Clone)]
pub struct GeneratorForm {
    state: FormState,
    selected_row: FormRow,
    rng: ThreadRng,
}

impl Default for GeneratorForm {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorForm {
    /// Creates a form in its initial state with the length field focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
            selected_row: FormRow::Length,
            rng: rand::thread_rng(),
        }
    }

    /// Current form snapshot.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Focused row.
    #[must_use]
    pub const fn selected_row(&self) -> FormRow {
        self.selected_row
    }

    fn transition(&mut self, f: impl FnOnce(FormState) -> FormState) {
        let current = std::mem::take(&mut self.state);
        self.state = f(current);
    }

    fn submit(&mut self) -> GeneratorFormEvent {
        let current = std::mem::take(&mut self.state);
        let allowed = current.options().is_some();
        self.state = current.submit(&mut self.rng);

        match self.state.password() {
            Some(password) if allowed && self.state.can_submit() => {
                GeneratorFormEvent::Generated {
                    length: password.len(),
                    entropy_bits: password.entropy_bits(),
                }
            }
            _ => GeneratorFormEvent::SubmitBlocked,
        }
    }

    fn reset(&mut self) -> GeneratorFormEvent {
        self.transition(FormState::reset);
        self.selected_row = FormRow::Length;
        GeneratorFormEvent::Reset
    }

    fn copy(&self) -> GeneratorFormEvent {
        self.state.password().map_or(GeneratorFormEvent::NothingToCopy, |password| {
            GeneratorFormEvent::CopyRequested(password.as_str().to_string())
        })
    }

    fn activate_selected(&mut self) -> Option<GeneratorFormEvent> {
        match self.selected_row {
            FormRow::Length => {
                self.selected_row = self.selected_row.next();
                None
            }
            FormRow::Class(class) => {
                self.transition(|state| state.toggle(class));
                None
            }
            FormRow::Generate => Some(self.submit()),
            FormRow::Reset => Some(self.reset()),
        }
    }
}

impl Component for GeneratorForm {
    type Event = GeneratorFormEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        // Ctrl shortcuts work from any row
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => Some(self.submit()),
                KeyCode::Char('r') => Some(self.reset()),
                KeyCode::Char('y') => Some(self.copy()),
                KeyCode::Char('c') => Some(GeneratorFormEvent::Quit),
                _ => None,
            };
        }

        // Length field takes digits and backspace
        if self.selected_row == FormRow::Length {
            match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.transition(|state| state.push_length_char(c));
                    return None;
                }
                KeyCode::Backspace => {
                    self.transition(FormState::pop_length_char);
                    return None;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.selected_row = self.selected_row.previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.selected_row = self.selected_row.next();
                None
            }
            KeyCode::Char(' ') => match self.selected_row {
                FormRow::Class(class) => {
                    self.transition(|state| state.toggle(class));
                    None
                }
                _ => self.activate_selected(),
            },
            KeyCode::Enter => self.activate_selected(),
            KeyCode::Char('g') => Some(self.submit()),
            KeyCode::Char('c') => Some(self.copy()),
            KeyCode::Char('?') => Some(GeneratorFormEvent::ToggleHelp),
            KeyCode::Esc | KeyCode::Char('q') => Some(GeneratorFormEvent::Quit),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(70, 90, area);

        frame.render_widget(Clear, dialog_area);
        let backdrop = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {APP_DISPLAY_NAME} "))
            .title_style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(theme.surface));
        let inner = backdrop.inner(dialog_area);
        frame.render_widget(backdrop, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Length field
                Constraint::Length(1), // Length error
                Constraint::Length(6), // Class toggles
                Constraint::Length(1), // Class error
                Constraint::Length(3), // Buttons
                Constraint::Min(4),    // Result
            ])
            .split(inner);

        let errors = self.state.visible_errors();
        let focused = |row: FormRow| self.selected_row == row;
        let row_style = |row: FormRow| {
            if focused(row) {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            }
        };

        // Length field
        let length_text = if focused(FormRow::Length) {
            format!("{}█", self.state.length_input())
        } else if self.state.length_input().is_empty() {
            format!("Enter length ({MIN_LENGTH}-{MAX_LENGTH})")
        } else {
            self.state.length_input().to_string()
        };
        let length_label = if focused(FormRow::Length) {
            " Password Length ▶ "
        } else {
            " Password Length "
        };
        let length_field = Paragraph::new(length_text)
            .style(row_style(FormRow::Length))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(length_label)
                    .border_style(if errors.length.is_some() {
                        Style::default().fg(theme.error)
                    } else {
                        Style::default().fg(theme.primary)
                    }),
            );
        frame.render_widget(length_field, chunks[0]);

        if let Some(error) = errors.length {
            let line = Paragraph::new(format!(" {error}")).style(Style::default().fg(theme.error));
            frame.render_widget(line, chunks[1]);
        }

        // Class toggles
        let toggle_lines: Vec<Line> = FormRow::ORDER
            .iter()
            .filter_map(|row| match row {
                FormRow::Class(class) => Some((*row, *class)),
                _ => None,
            })
            .map(|(row, class)| {
                let mark = if self.state.includes(class) { "[x]" } else { "[ ]" };
                let cursor = if focused(row) { "▶ " } else { "  " };
                Line::from(vec![
                    Span::styled(cursor, Style::default().fg(theme.accent)),
                    Span::styled(format!("{mark} {}", class.label()), row_style(row)),
                ])
            })
            .collect();
        let toggles = Paragraph::new(toggle_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Character Sets ")
                .border_style(if errors.classes.is_some() {
                    Style::default().fg(theme.error)
                } else {
                    Style::default().fg(theme.primary)
                }),
        );
        frame.render_widget(toggles, chunks[2]);

        if let Some(error) = errors.classes {
            let line = Paragraph::new(format!(" {error}")).style(Style::default().fg(theme.error));
            frame.render_widget(line, chunks[3]);
        }

        // Buttons
        let button_area = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[4]);

        let generate_style = if !self.state.can_submit() {
            Style::default().fg(theme.text_muted)
        } else {
            row_style(FormRow::Generate)
        };
        let generate = Paragraph::new(" Generate Password (Ctrl+S) ")
            .style(generate_style)
            .block(Block::default().borders(Borders::ALL).border_style(generate_style));
        frame.render_widget(generate, button_area[0]);

        let reset = Paragraph::new(" Reset (Ctrl+R) ")
            .style(row_style(FormRow::Reset))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(row_style(FormRow::Reset)),
            );
        frame.render_widget(reset, button_area[1]);

        // Result
        let result_lines = match self.state.password() {
            Some(password) => vec![
                Line::from(Span::styled(
                    password.as_str().to_string(),
                    Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "{} chars from a pool of {} · ~{:.0} bits · press c to copy",
                        password.len(),
                        password.pool_size(),
                        password.entropy_bits()
                    ),
                    Style::default().fg(theme.text_muted),
                )),
            ],
            None => vec![Line::from(Span::styled(
                "No password generated yet",
                Style::default().fg(theme.text_muted),
            ))],
        };
        let result = Paragraph::new(result_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Result ")
                .border_style(Style::default().fg(theme.primary)),
        );
        frame.render_widget(result, chunks[5]);
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
