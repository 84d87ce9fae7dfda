//! Difficulty menu widget

use ng_core::{Difficulty, Tally};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use strum::IntoEnumIterator;

use crate::theme::Theme;

/// One selectable line of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Play(Difficulty),
    ToggleTheme,
    ToggleSound,
}

impl MenuEntry {
    /// Number of selectable entries
    pub fn count() -> usize {
        Self::all().len()
    }

    /// Entries in display order
    pub fn all() -> Vec<MenuEntry> {
        Difficulty::iter()
            .map(MenuEntry::Play)
            .chain([MenuEntry::ToggleTheme, MenuEntry::ToggleSound])
            .collect()
    }

    pub fn at(index: usize) -> Option<MenuEntry> {
        Self::all().get(index).copied()
    }

    fn label(self, sound_on: bool) -> String {
        match self {
            MenuEntry::Play(d) => d.label(),
            MenuEntry::ToggleTheme => "Toggle Theme".to_string(),
            MenuEntry::ToggleSound => {
                format!("Sound: {}", if sound_on { "ON" } else { "OFF" })
            }
        }
    }

    fn color(self, theme: &Theme) -> Color {
        match self {
            MenuEntry::Play(Difficulty::Easy) => theme.easy,
            MenuEntry::Play(Difficulty::Medium) => theme.medium,
            MenuEntry::Play(Difficulty::Hard) => theme.hard,
            MenuEntry::ToggleTheme => theme.theme_toggle,
            MenuEntry::ToggleSound => theme.sound_toggle,
        }
    }
}

/// Widget for the main menu
pub struct MenuWidget<'a> {
    cursor: usize,
    sound_on: bool,
    tally: Tally,
    best: Option<f64>,
    theme: &'a Theme,
}

impl<'a> MenuWidget<'a> {
    pub fn new(cursor: usize, theme: &'a Theme) -> Self {
        Self {
            cursor,
            sound_on: true,
            tally: Tally::default(),
            best: None,
            theme,
        }
    }

    pub fn sound_on(mut self, on: bool) -> Self {
        self.sound_on = on;
        self
    }

    pub fn tally(mut self, tally: Tally) -> Self {
        self.tally = tally;
        self
    }

    pub fn best(mut self, best: Option<f64>) -> Self {
        self.best = best;
        self
    }
}

impl Widget for MenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            "Choose Difficulty",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (i, entry) in MenuEntry::all().into_iter().enumerate() {
            if i == Difficulty::iter().count() {
                lines.push(Line::from(""));
            }

            let selected = i == self.cursor;
            let marker = if selected { "> " } else { "  " };
            let mut style = Style::default().fg(entry.color(theme));
            if selected {
                style = style.bg(theme.cursor_bg).add_modifier(Modifier::BOLD);
            }
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.cursor_fg)),
                Span::styled(entry.label(self.sound_on), style),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Wins: {}   Losses: {}", self.tally.wins, self.tally.losses),
            Style::default().fg(theme.text),
        )));
        if let Some(best) = self.best {
            lines.push(Line::from(Span::styled(
                format!("Best Time: {:.2} seconds", best),
                Style::default().fg(theme.accent),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Up/Down move  Enter select  1-3 quick start  t theme  s sound  q quit",
            Style::default().fg(theme.text_dim),
        )));

        let block = Block::default()
            .title(" Number Guessing Game ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_accent))
            .style(Style::default().bg(theme.background));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
