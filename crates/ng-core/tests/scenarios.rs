use std::path::PathBuf;

use ng_core::sound::Silent;
use ng_core::{
    BestTimeUpdate, Difficulty, GameLoop, GameRng, GameSession, Outcome, RoundParams, ScoreStore,
    Tally,
};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("numguess_it_{}_{}", std::process::id(), name));
    std::fs::remove_dir_all(&dir).ok();
    dir.join("highscore.json")
}

#[test]
fn easy_round_low_high_correct() {
    let params = RoundParams::new(1, 50, 10).unwrap();
    let mut session = GameSession::start_with_secret(params, 27).unwrap();

    let outcomes: Vec<Outcome> = [10, 40]
        .into_iter()
        .map(|g| session.evaluate(g).unwrap())
        .collect();
    assert_eq!(outcomes, vec![Outcome::TooLow, Outcome::TooHigh]);
    assert_eq!(session.attempts_remaining(), 8);

    assert!(matches!(session.evaluate(27), Ok(Outcome::Correct(_))));
}

#[test]
fn single_attempt_round_exhausts() {
    let params = RoundParams::new(1, 100, 1).unwrap();
    let mut session = GameSession::start_with_secret(params, 5).unwrap();
    assert_eq!(session.evaluate(99), Ok(Outcome::Exhausted));
    assert_eq!(session.attempts_remaining(), 0);
}

#[test]
fn best_time_survives_restart() {
    let path = scratch("restart");

    let mut game = GameLoop::new(GameRng::new(9), ScoreStore::load(&path), Box::new(Silent));
    game.start_with_secret(Difficulty::Hard.params(), 150).unwrap();
    game.submit("100").unwrap();
    let Ok(Outcome::Correct(elapsed)) = game.submit("150") else {
        panic!("expected a win");
    };
    assert_eq!(game.last_record(), &BestTimeUpdate::NewBest(elapsed));

    // A fresh process sees the same record
    let game = GameLoop::new(GameRng::new(9), ScoreStore::load(&path), Box::new(Silent));
    assert_eq!(game.best_time(), Some(elapsed));
    assert_eq!(game.tally(), Tally::default());

    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn seeded_games_draw_the_same_secrets() {
    let path = scratch("seeded");
    let mut a = GameLoop::new(GameRng::new(1234), ScoreStore::load(&path), Box::new(Silent));
    let mut b = GameLoop::new(GameRng::new(1234), ScoreStore::load(&path), Box::new(Silent));

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let sa = a.start(difficulty).secret();
        let sb = b.start(difficulty).secret();
        assert_eq!(sa, sb);
    }
}

#[test]
fn bad_start_parameters_are_rejected() {
    assert!(RoundParams::new(5, 5, 3).is_err());
    assert!(RoundParams::new(1, 10, 0).is_err());

    let path = scratch("badsecret");
    let mut game = GameLoop::new(GameRng::new(1), ScoreStore::load(&path), Box::new(Silent));
    assert!(game.start_with_secret(Difficulty::Easy.params(), 0).is_err());
    assert!(game.session().is_none());
}
