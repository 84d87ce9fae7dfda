use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ng_core::sound::Silent;
use ng_core::{GameLoop, GameRng, ScoreStore};
use ng_tui::widgets::OutcomeDialog;
use ng_tui::{App, Theme, UiMode};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn rows(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect()
}

#[test]
fn binary_search_wins_medium() {
    let dir = std::env::temp_dir().join(format!("numguess_flow_{}", std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    let game = GameLoop::new(
        GameRng::new(2024),
        ScoreStore::load(dir.join("highscore.json")),
        Box::new(Silent),
    );
    let mut app = App::new(game, Theme::dark());

    press(&mut app, KeyCode::Char('2'));
    let (mut lo, mut hi) = (1i64, 100i64);

    // log2(100) < 7, so bisection always finishes inside the attempt budget
    for _ in 0..7 {
        let guess = (lo + hi) / 2;
        for c in guess.to_string().chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        match app.mode() {
            UiMode::Round { feedback, .. } => match feedback.as_deref() {
                Some("Too low!") => lo = guess + 1,
                Some("Too high!") => hi = guess - 1,
                other => panic!("unexpected feedback {:?}", other),
            },
            UiMode::Outcome(OutcomeDialog::Won { secret, .. }) => {
                assert_eq!(*secret, guess);
                break;
            }
            mode => panic!("unexpected mode {:?}", mode),
        }
    }

    assert!(matches!(app.mode(), UiMode::Outcome(OutcomeDialog::Won { .. })));
    assert!(rows(&app).iter().any(|r| r.contains("Congratulations!")));

    press(&mut app, KeyCode::Enter);
    let screen = rows(&app);
    assert!(screen.iter().any(|r| r.contains("Wins: 1   Losses: 0")));
    assert!(screen.iter().any(|r| r.contains("Best Time:")));

    // Best time is on disk for the next run
    assert!(ScoreStore::load(dir.join("highscore.json")).best_time().is_some());
    std::fs::remove_dir_all(&dir).ok();
}
