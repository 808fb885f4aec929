//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: last message on top, key hints below.
    pub fn render<B>(f: &mut Frame, area: Rect, state: &AppState<B>, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ]));
        } else if !state.status_message.is_empty() {
            lines.push(Line::from(state.status_message.as_str()));
        } else {
            lines.push(Line::from(""));
        }

        if state.config.ui.show_help {
            lines.push(Self::hints_line(theme));
        }

        let status = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(status, area);
    }

    fn hints_line(theme: &Theme) -> Line<'static> {
        let hints = [
            ("↑↓", "Move"),
            ("Space", "Toggle"),
            ("Ctrl+S", "Generate"),
            ("Ctrl+R", "Reset"),
            ("c", "Copy"),
            ("?", "Help"),
            ("q", "Quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
