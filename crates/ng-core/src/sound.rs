//! Sound cues
//!
//! Cues are fire-and-forget: playing one never blocks the caller and never
//! reports failure back into the game.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use strum::{Display, EnumIter};
use tracing::debug;

use crate::Outcome;

/// Named sound events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SoundCue {
    TooLow,
    TooHigh,
    Correct,
    GameOver,
}

impl SoundCue {
    /// Asset file played for this cue
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::TooLow => "wrong2.wav",
            SoundCue::TooHigh => "wrong.wav",
            SoundCue::Correct => "correct2.mp3",
            SoundCue::GameOver => "game_over.wav",
        }
    }

    pub fn for_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::TooLow => SoundCue::TooLow,
            Outcome::TooHigh => SoundCue::TooHigh,
            Outcome::Correct(_) => SoundCue::Correct,
            Outcome::Exhausted => SoundCue::GameOver,
        }
    }
}

/// Something that can play cues
pub trait CuePlayer: Send {
    fn play(&self, cue: SoundCue);
}

/// Plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&self, _cue: SoundCue) {}
}

/// Plays cue files by running an external player program
///
/// Each cue runs `program <assets_dir>/<file>` on its own detached thread.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    assets_dir: PathBuf,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            assets_dir: assets_dir.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn cue_path(&self, cue: SoundCue) -> PathBuf {
        self.assets_dir.join(cue.file_name())
    }
}

impl CuePlayer for CommandPlayer {
    fn play(&self, cue: SoundCue) {
        let path = self.cue_path(cue);
        if !path.exists() {
            debug!(%cue, path = %path.display(), "sound file missing, skipping");
            return;
        }

        let program = self.program.clone();
        let spawned = thread::Builder::new()
            .name("sound-cue".to_string())
            .spawn(move || {
                let status = Command::new(&program)
                    .arg(&path)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status();
                match status {
                    Ok(status) if !status.success() => {
                        debug!(%program, %status, "sound player exited with failure");
                    }
                    Err(e) => debug!(%program, error = %e, "could not run sound player"),
                    Ok(_) => {}
                }
            });

        if let Err(e) = spawned {
            debug!(error = %e, "could not spawn sound thread");
        }
    }
}

/// Build the cue player for a configured command, or [`Silent`] without one
pub fn cue_player(command: Option<&str>, assets_dir: &Path) -> Box<dyn CuePlayer> {
    match command.map(str::trim).filter(|c| !c.is_empty()) {
        Some(program) => Box::new(CommandPlayer::new(program, assets_dir)),
        None => Box::new(Silent),
    }
}
