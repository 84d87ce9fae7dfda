//! End-of-round dialog

use ng_core::BestTimeUpdate;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// How a round ended, as shown to the player
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeDialog {
    Won {
        secret: i64,
        elapsed_secs: f64,
        record: BestTimeUpdate,
    },
    Lost {
        secret: i64,
    },
}

impl OutcomeDialog {
    pub fn title(&self) -> &'static str {
        match self {
            OutcomeDialog::Won { .. } => " Congratulations! ",
            OutcomeDialog::Lost { .. } => " Game Over ",
        }
    }

    /// Body lines, without styling
    pub fn lines(&self) -> Vec<String> {
        match self {
            OutcomeDialog::Won {
                secret,
                elapsed_secs,
                record,
            } => {
                let mut lines = vec![
                    format!("You guessed it! The number was {}.", secret),
                    format!("Time: {:.2} seconds", elapsed_secs),
                ];
                match record {
                    BestTimeUpdate::NewBest(_) => lines.push("New best time!".to_string()),
                    BestTimeUpdate::Failed(_) => {
                        lines.push("New best time! (could not be saved)".to_string())
                    }
                    BestTimeUpdate::Unchanged => {}
                }
                lines
            }
            OutcomeDialog::Lost { secret } => {
                vec![format!("You ran out of attempts! The number was {}.", secret)]
            }
        }
    }
}

/// Popup widget for an [`OutcomeDialog`]
pub struct OutcomeWidget<'a> {
    dialog: &'a OutcomeDialog,
    theme: &'a Theme,
}

impl<'a> OutcomeWidget<'a> {
    pub fn new(dialog: &'a OutcomeDialog, theme: &'a Theme) -> Self {
        Self { dialog, theme }
    }
}

impl Widget for OutcomeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let (border, headline) = match self.dialog {
            OutcomeDialog::Won { .. } => (theme.border_good, theme.good),
            OutcomeDialog::Lost { .. } => (theme.border_danger, theme.bad),
        };

        let mut lines: Vec<Line> = vec![Line::from("")];
        for (i, text) in self.dialog.lines().into_iter().enumerate() {
            let style = if i == 0 {
                Style::default().fg(headline).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to return to the menu",
            Style::default().fg(theme.text_dim),
        )));

        Clear.render(area, buf);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(self.dialog.title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .style(Style::default().bg(theme.background)),
            )
            .render(area, buf);
    }
}
