//! Number guessing game
//!
//! Main entry point for the game.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{error, info};

use ng_core::options::default_config_path;
use ng_core::sound::cue_player;
use ng_core::{Difficulty, GameLoop, GameOptions, GameRng, ScoreStore};
use ng_tui::logging::{default_log_path, init_logging};
use ng_tui::{App, Theme};

/// Number guessing game in the terminal
#[derive(Parser, Debug)]
#[command(name = "numguess")]
#[command(author, version, about = "Guess the secret number before your attempts run out", long_about = None)]
struct Args {
    /// Options file (default: <config dir>/numguess/numguessrc)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Best-time record file
    #[arg(long = "score-file")]
    score_file: Option<PathBuf>,

    /// Start a round at once (easy, medium, hard)
    #[arg(short = 'd', long = "difficulty")]
    difficulty: Option<String>,

    /// Start a round at a random difficulty
    #[arg(short = '@', long = "random")]
    random: bool,

    /// Use the light color theme
    #[arg(long = "light")]
    light: bool,

    /// Disable sound cues
    #[arg(short = 'm', long = "mute")]
    mute: bool,

    /// Program used to play sound cue files (e.g. paplay, afplay)
    #[arg(long = "sound-command")]
    sound_command: Option<String>,

    /// Directory holding the sound cue files
    #[arg(long = "assets")]
    assets: Option<PathBuf>,

    /// Seed for the secret number generator
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Print the best time and exit
    #[arg(short = 's', long = "best")]
    best: bool,

    /// Delete the best-time record and exit
    #[arg(long = "reset-best")]
    reset_best: bool,

    /// Log file (default: <data dir>/numguess/numguess.log)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    let options = load_options(&args)?;
    let score_path = args.score_file.clone().unwrap_or_else(|| options.score_path());

    // Handle special modes that don't require the terminal UI

    // View best time
    if args.best {
        display_best_time(&score_path);
        return Ok(());
    }

    // Forget best time
    if args.reset_best {
        let mut scores = ScoreStore::load(&score_path);
        scores.clear().map_err(io::Error::other)?;
        println!("Best time cleared.");
        return Ok(());
    }

    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);
    let _log_guard = init_logging(&log_path, args.verbose);
    info!(version = env!("CARGO_PKG_VERSION"), "numguess starting");

    let start = match args.difficulty.as_deref() {
        Some(name) => Some(Difficulty::parse(name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unknown difficulty '{}' (expected easy, medium or hard)", name),
            )
        })?),
        None => None,
    };

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let sound_command = args.sound_command.clone().or(options.sound_command.clone());
    let assets = args.assets.clone().unwrap_or_else(|| options.assets.clone());
    let player = cue_player(sound_command.as_deref(), &assets);

    let game = GameLoop::new(rng, ScoreStore::load(&score_path), player)
        .with_sound(options.sound && !args.mute);
    let theme = if args.light {
        Theme::light()
    } else {
        Theme::for_mode(options.theme)
    };

    let mut app = App::new(game, theme);
    if let Some(difficulty) = options.difficulty {
        app.select_difficulty(difficulty);
    }
    if args.random {
        let difficulty = Difficulty::random(app.game_mut().rng_mut());
        app.start_round(difficulty);
    } else if let Some(difficulty) = start {
        app.start_round(difficulty);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!(error = %e, "terminal loop failed");
    }
    let tally = app.game().tally();
    info!(wins = tally.wins, losses = tally.losses, "numguess exiting");

    result
}

/// Main loop: draw, then handle one event
fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        // Draw
        terminal.draw(|frame| app.render(frame))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(event);

            if app.should_quit() {
                return Ok(());
            }
        }
    }
}

/// Read the rc file named on the command line, or the default one
fn load_options(args: &Args) -> io::Result<GameOptions> {
    let loaded = match args.config {
        Some(ref path) => GameOptions::load_from_file(path),
        None => GameOptions::load_default(),
    };

    loaded.map_err(|e| {
        let path = args.config.clone().or_else(default_config_path);
        let shown = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "options".to_string());
        io::Error::new(io::ErrorKind::InvalidData, format!("{}: {}", shown, e))
    })
}

/// Print the recorded best time
fn display_best_time(path: &std::path::Path) {
    let scores = ScoreStore::load(path);
    match scores.best_time() {
        Some(best) => println!("Best time: {:.2} seconds", best),
        None => println!("No best time recorded yet."),
    }
}
