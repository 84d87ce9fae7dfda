//! Round screen widget

use ng_core::GameSession;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Widget};

use crate::theme::Theme;

/// Widget for a running round: prompt, guess line, feedback and attempts
pub struct RoundWidget<'a> {
    session: &'a GameSession,
    input: &'a str,
    feedback: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> RoundWidget<'a> {
    pub fn new(session: &'a GameSession, input: &'a str, theme: &'a Theme) -> Self {
        Self {
            session,
            input,
            feedback: None,
            theme,
        }
    }

    pub fn feedback(mut self, feedback: Option<&'a str>) -> Self {
        self.feedback = feedback;
        self
    }
}

impl Widget for RoundWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let session = self.session;

        let block = Block::default()
            .title(" Number Guessing Game ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_accent))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Prompt
                Constraint::Length(1),
                Constraint::Length(3), // Guess line
                Constraint::Length(1), // Feedback
                Constraint::Length(1), // Attempts left
                Constraint::Length(1), // Gauge
                Constraint::Length(1),
                Constraint::Length(1), // History
                Constraint::Min(0),
                Constraint::Length(1), // Hints
            ])
            .split(inner);

        Paragraph::new(Span::styled(
            format!("Guess the number {}", session.range_text()),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        let input_area = centered_columns(24, rows[2]);
        Paragraph::new(Line::from(vec![
            Span::styled(self.input, Style::default().fg(theme.text)),
            Span::styled("_", Style::default().fg(theme.cursor_fg)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Your guess ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .render(input_area, buf);

        if let Some(feedback) = self.feedback {
            Paragraph::new(Span::styled(
                feedback,
                Style::default().fg(theme.feedback).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .render(rows[3], buf);
        }

        let remaining = session.attempts_remaining();
        Paragraph::new(Span::styled(
            format!("Attempts left: {}", remaining),
            Style::default().fg(theme.text),
        ))
        .alignment(Alignment::Center)
        .render(rows[4], buf);

        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme.gauge_color(remaining))
                    .bg(theme.gauge_track),
            )
            .ratio(session.attempts_fraction().clamp(0.0, 1.0))
            .label(format!("{}/{}", remaining, session.attempts_total()))
            .render(centered_columns(40, rows[5]), buf);

        if !session.guesses().is_empty() {
            let history: Vec<String> = session.guesses().iter().map(|g| g.to_string()).collect();
            Paragraph::new(Span::styled(
                format!("Guesses: {}", history.join(", ")),
                Style::default().fg(theme.text_muted),
            ))
            .alignment(Alignment::Center)
            .render(rows[7], buf);
        }

        Paragraph::new(Span::styled(
            "Enter submit  Backspace edit  Esc back to menu",
            Style::default().fg(theme.text_dim),
        ))
        .alignment(Alignment::Center)
        .render(rows[9], buf);
    }
}

/// A horizontally centered slice of `area`, at most `width` columns wide
fn centered_columns(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
