//! Help overlay listing every keyboard shortcut.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::models::{MAX_LENGTH, MIN_LENGTH};

/// Shortcut table shown by the overlay, grouped by section.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("↑ / k / Shift+Tab", "Previous row"),
            ("↓ / j / Tab", "Next row"),
        ],
    ),
    (
        "Editing",
        &[
            ("0-9", "Type the length (on the length row)"),
            ("Backspace", "Delete the last digit"),
            ("Space / Enter", "Toggle the focused character set"),
        ],
    ),
    (
        "Actions",
        &[
            ("Ctrl+S / g", "Generate a password"),
            ("Ctrl+R", "Reset the form"),
            ("c / Ctrl+Y", "Copy the password to the clipboard"),
            ("?", "Toggle this help"),
            ("q / Esc / Ctrl+C", "Quit"),
        ],
    ),
];

/// Help overlay widget.
pub struct HelpOverlay;

impl HelpOverlay {
    /// Builds the overlay content.
    pub fn content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Length must be between {MIN_LENGTH} and {MAX_LENGTH}."),
                Style::default().fg(theme.text),
            )),
            Line::from(Span::styled(
                "At least one character set must be selected.",
                Style::default().fg(theme.text),
            )),
        ];

        for (title, entries) in SECTIONS {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, action) in *entries {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<20}"), Style::default().fg(theme.accent)),
                    Span::styled(*action, Style::default().fg(theme.text)),
                ]));
            }
        }
        lines
    }

    /// Renders the overlay centred over `area`.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(15),
                Constraint::Percentage(70),
                Constraint::Percentage(15),
            ])
            .split(area);
        let popup = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(vertical[1])[1];

        f.render_widget(Clear, popup);
        let help = Paragraph::new(Self::content(theme))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help (? or Esc to close) ")
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.surface)),
            );
        f.render_widget(help, popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lists_every_action() {
        let text: String = HelpOverlay::content(&Theme::dark())
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect();
        for action in ["Generate a password", "Reset the form", "Copy the password", "Quit"] {
            assert!(text.contains(action), "missing {action}");
        }
        assert!(text.contains("between 4 and 16"));
    }
}
