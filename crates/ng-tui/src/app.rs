//! Application state and main UI controller

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use tracing::{debug, warn};

use ng_core::{Difficulty, GameError, GameLoop, Outcome};

use crate::input::{
    MenuAction, RoundAction, dismisses_dialog, is_interrupt, key_to_menu_action,
    key_to_round_action,
};
use crate::theme::Theme;
use crate::widgets::{MenuEntry, MenuWidget, OutcomeDialog, OutcomeWidget, RoundWidget};

/// Longest guess line accepted from the keyboard
const MAX_INPUT_LEN: usize = 12;

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, PartialEq)]
pub enum UiMode {
    /// Difficulty menu
    Menu,
    /// A round in progress
    Round {
        input: String,
        feedback: Option<String>,
    },
    /// Round finished, dialog on top of the last round screen
    Outcome(OutcomeDialog),
}

/// Main application state
pub struct App {
    game: GameLoop,

    /// Whether the app should quit
    should_quit: bool,

    /// Current UI mode
    mode: UiMode,

    /// Highlighted menu entry
    menu_cursor: usize,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,
}

impl App {
    pub fn new(game: GameLoop, theme: Theme) -> Self {
        Self {
            game,
            should_quit: false,
            mode: UiMode::Menu,
            menu_cursor: 0,
            theme,
        }
    }

    pub fn game(&self) -> &GameLoop {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameLoop {
        &mut self.game
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle input event
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Windows reports releases too
        if key.kind != KeyEventKind::Press {
            return;
        }

        if is_interrupt(&key) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            UiMode::Menu => self.handle_menu_input(key),
            UiMode::Round { .. } => self.handle_round_input(key),
            UiMode::Outcome(_) => self.handle_outcome_input(key),
        }
    }

    fn handle_menu_input(&mut self, key: KeyEvent) {
        let Some(action) = key_to_menu_action(key) else {
            return;
        };
        let count = MenuEntry::count();

        match action {
            MenuAction::Up => self.menu_cursor = (self.menu_cursor + count - 1) % count,
            MenuAction::Down => self.menu_cursor = (self.menu_cursor + 1) % count,
            MenuAction::Select => match MenuEntry::at(self.menu_cursor) {
                Some(MenuEntry::Play(difficulty)) => self.start_round(difficulty),
                Some(MenuEntry::ToggleTheme) => self.toggle_theme(),
                Some(MenuEntry::ToggleSound) => self.toggle_sound(),
                None => {}
            },
            MenuAction::Pick(difficulty) => self.start_round(difficulty),
            MenuAction::ToggleTheme => self.toggle_theme(),
            MenuAction::ToggleSound => self.toggle_sound(),
            MenuAction::Quit => self.should_quit = true,
        }
    }

    fn handle_round_input(&mut self, key: KeyEvent) {
        let Some(action) = key_to_round_action(key) else {
            return;
        };

        match action {
            RoundAction::Submit => self.submit_guess(),
            RoundAction::Back => {
                self.game.abandon();
                self.mode = UiMode::Menu;
            }
            edit => {
                if let UiMode::Round { input, .. } = &mut self.mode {
                    match edit {
                        RoundAction::Type(c) if input.chars().count() < MAX_INPUT_LEN => {
                            input.push(c)
                        }
                        RoundAction::Backspace => {
                            input.pop();
                        }
                        RoundAction::Clear => input.clear(),
                        _ => {}
                    }
                }
            }
        }
    }

    fn handle_outcome_input(&mut self, key: KeyEvent) {
        if dismisses_dialog(key) {
            self.game.abandon();
            self.mode = UiMode::Menu;
        }
    }

    /// Highlight a difficulty in the menu
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.menu_cursor = difficulty.index();
    }

    /// Start a round and switch to the round screen
    pub fn start_round(&mut self, difficulty: Difficulty) {
        self.game.start(difficulty);
        self.menu_cursor = difficulty.index();
        self.enter_round();
    }

    /// Show the round screen for the game's current session
    pub fn enter_round(&mut self) {
        self.mode = UiMode::Round {
            input: String::new(),
            feedback: None,
        };
    }

    fn submit_guess(&mut self) {
        let UiMode::Round { input, .. } = &self.mode else {
            return;
        };
        let input = input.clone();

        let secret = self.game.session().map(|s| s.secret()).unwrap_or_default();
        self.mode = match self.game.submit(&input) {
            Ok(Outcome::Correct(elapsed_secs)) => UiMode::Outcome(OutcomeDialog::Won {
                secret,
                elapsed_secs,
                record: self.game.last_record().clone(),
            }),
            Ok(Outcome::Exhausted) => UiMode::Outcome(OutcomeDialog::Lost { secret }),
            Ok(outcome) => UiMode::Round {
                input: String::new(),
                feedback: Some(outcome.message().to_string()),
            },
            Err(e @ GameError::InvalidGuess(_)) => {
                debug!(input = %input, "rejected guess");
                UiMode::Round {
                    input,
                    feedback: Some(e.to_string()),
                }
            }
            Err(e) => {
                warn!(error = %e, "guess not accepted, returning to menu");
                self.game.abandon();
                UiMode::Menu
            }
        };
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    fn toggle_sound(&mut self) {
        let on = self.game.toggle_sound();
        debug!(on, "sound toggled");
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.background)),
            area,
        );

        let panel = centered_rect(70, 80, area);
        match &self.mode {
            UiMode::Menu => {
                let menu = MenuWidget::new(self.menu_cursor, &self.theme)
                    .sound_on(self.game.sound_on())
                    .tally(self.game.tally())
                    .best(self.game.best_time());
                frame.render_widget(menu, panel);
            }
            UiMode::Round { input, feedback } => {
                if let Some(session) = self.game.session() {
                    let round =
                        RoundWidget::new(session, input, &self.theme).feedback(feedback.as_deref());
                    frame.render_widget(round, panel);
                }
            }
            UiMode::Outcome(dialog) => {
                if let Some(session) = self.game.session() {
                    frame.render_widget(RoundWidget::new(session, "", &self.theme), panel);
                }
                let popup = centered_rect(60, 50, area);
                frame.render_widget(OutcomeWidget::new(dialog, &self.theme), popup);
            }
        }
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ng_core::sound::Silent;
    use ng_core::{GameRng, ScoreStore, Tally};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn score_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("numguess_app_{}_{}", std::process::id(), name))
            .join("highscore.json")
    }

    fn app(name: &str) -> App {
        let path = score_path(name);
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
        let game = GameLoop::new(GameRng::new(7), ScoreStore::load(path), Box::new(Silent));
        App::new(game, Theme::dark())
    }

    fn cleanup(name: &str) {
        std::fs::remove_dir_all(score_path(name).parent().unwrap()).ok();
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    fn shows(app: &App, text: &str) -> bool {
        screen(app).iter().any(|row| row.contains(text))
    }

    /// Start an Easy round through the menu, then pin the secret
    fn easy_round(app: &mut App, secret: i64) {
        press(app, KeyCode::Char('1'));
        app.game_mut()
            .start_with_secret(Difficulty::Easy.params(), secret)
            .unwrap();
    }

    #[test]
    fn test_menu_cursor_wraps() {
        let mut app = app("cursor");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.menu_cursor(), MenuEntry::count() - 1);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu_cursor(), 1);
        cleanup("cursor");
    }

    #[test]
    fn test_select_starts_round() {
        let mut app = app("select");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode(), UiMode::Round { .. }));
        assert_eq!(app.game().session().unwrap().attempts_total(), 7);
        cleanup("select");
    }

    #[test]
    fn test_guess_feedback_clears_input() {
        let mut app = app("feedback");
        easy_round(&mut app, 27);
        type_str(&mut app, "10");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.mode(),
            &UiMode::Round {
                input: String::new(),
                feedback: Some("Too low!".to_string()),
            }
        );
        assert_eq!(app.game().session().unwrap().attempts_remaining(), 9);
        cleanup("feedback");
    }

    #[test]
    fn test_invalid_guess_keeps_text() {
        let mut app = app("invalid");
        easy_round(&mut app, 27);
        type_str(&mut app, "ab");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.mode(),
            &UiMode::Round {
                input: "ab".to_string(),
                feedback: Some("Please enter a valid number.".to_string()),
            }
        );
        assert_eq!(app.game().session().unwrap().attempts_remaining(), 10);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "27");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.mode(),
            UiMode::Outcome(OutcomeDialog::Won { secret: 27, .. })
        ));
        cleanup("invalid");
    }

    #[test]
    fn test_win_dialog_then_menu() {
        let mut app = app("win");
        easy_round(&mut app, 5);
        type_str(&mut app, "5");
        press(&mut app, KeyCode::Enter);
        assert!(shows(&app, "You guessed it! The number was 5."));
        assert!(shows(&app, "New best time!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode(), &UiMode::Menu);
        assert!(app.game().session().is_none());
        assert_eq!(app.game().tally(), Tally { wins: 1, losses: 0 });
        assert!(shows(&app, "Wins: 1   Losses: 0"));
        assert!(shows(&app, "Best Time:"));
        cleanup("win");
    }

    #[test]
    fn test_loss_dialog() {
        let mut app = app("loss");
        press(&mut app, KeyCode::Char('3'));
        let params = ng_core::RoundParams::new(1, 200, 1).unwrap();
        app.game_mut().start_with_secret(params, 150).unwrap();
        type_str(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.mode(),
            &UiMode::Outcome(OutcomeDialog::Lost { secret: 150 })
        );
        assert!(shows(&app, "The number was 150."));
        cleanup("loss");
    }

    #[test]
    fn test_escape_abandons_round() {
        let mut app = app("escape");
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode(), &UiMode::Menu);
        assert!(app.game().session().is_none());
        assert_eq!(app.game().tally(), Tally::default());
        assert_eq!(app.menu_cursor(), Difficulty::Medium.index());
        cleanup("escape");
    }

    #[test]
    fn test_input_length_is_capped() {
        let mut app = app("cap");
        easy_round(&mut app, 1);
        type_str(&mut app, &"9".repeat(MAX_INPUT_LEN + 5));
        let UiMode::Round { input, .. } = app.mode() else {
            panic!("expected round mode");
        };
        assert_eq!(input.len(), MAX_INPUT_LEN);
        cleanup("cap");
    }

    #[test]
    fn test_toggles() {
        let mut app = app("toggles");
        assert!(!app.theme().light);
        press(&mut app, KeyCode::Char('t'));
        assert!(app.theme().light);

        assert!(app.game().sound_on());
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.game().sound_on());
        assert!(shows(&app, "Sound: OFF"));
        cleanup("toggles");
    }

    #[test]
    fn test_ctrl_c_quits_mid_round() {
        let mut app = app("ctrlc");
        press(&mut app, KeyCode::Char('1'));
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
        cleanup("ctrlc");
    }

    #[test]
    fn test_round_screen_render() {
        let mut app = app("render");
        easy_round(&mut app, 30);
        type_str(&mut app, "42");
        press(&mut app, KeyCode::Enter);
        assert!(shows(&app, "Guess the number between 1 and 50"));
        assert!(shows(&app, "Too high!"));
        assert!(shows(&app, "Attempts left: 9"));
        assert!(shows(&app, "Guesses: 42"));
        cleanup("render");
    }
}
