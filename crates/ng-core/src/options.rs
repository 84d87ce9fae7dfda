//! Game options and configuration
//!
//! Options live in an rc file made of `OPTIONS=` lines:
//!
//! ```text
//! # numguess configuration
//! OPTIONS=sound,!light
//! OPTIONS=difficulty:medium
//! OPTIONS=score_file:/tmp/best.json
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Difficulty;
use crate::score::default_score_path;

/// Terminal color scheme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Guess from the terminal environment
    #[default]
    Auto,
    Dark,
    Light,
}

/// User-configurable game options
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Play sound cues
    pub sound: bool,
    pub theme: ThemeMode,
    /// Difficulty highlighted when the menu opens
    pub difficulty: Option<Difficulty>,
    /// Best-time record location; platform data dir when unset
    pub score_file: Option<PathBuf>,
    /// External program used to play cue files
    pub sound_command: Option<String>,
    /// Directory holding the cue files
    pub assets: PathBuf,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            sound: true,
            theme: ThemeMode::Auto,
            difficulty: None,
            score_file: None,
            sound_command: None,
            assets: PathBuf::from("assets"),
        }
    }
}

impl GameOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::IoError(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Load the default rc file, falling back to defaults when it is absent
    pub fn load_default() -> Result<Self, OptionsError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        options.parse_option(opt)?;
                    }
                }
            } else {
                return Err(OptionsError::ParseError(line.to_string()));
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        // Key/value options may contain paths, so split before negation
        if let Some((key, value)) = opt.split_once(':') {
            return self.set_option(key.trim(), value.trim());
        }
        if let Some((key, value)) = opt.split_once('=') {
            return self.set_option(key.trim(), value.trim());
        }

        // Handle negation
        let (negated, name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no") {
            (true, name)
        } else {
            (false, opt)
        };

        self.set_bool_option(name, !negated)
    }

    /// Set a boolean option
    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "sound" => self.sound = value,
            "light" => self.theme = if value { ThemeMode::Light } else { ThemeMode::Dark },
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Set an option with a value
    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        if value.is_empty() {
            return Err(OptionsError::MissingValue(name.to_string()));
        }

        match name {
            "difficulty" => {
                self.difficulty = Some(Difficulty::parse(value).ok_or_else(|| {
                    OptionsError::InvalidValue(name.to_string(), value.to_string())
                })?);
            }
            "theme" => {
                self.theme = match value.to_lowercase().as_str() {
                    "auto" => ThemeMode::Auto,
                    "dark" => ThemeMode::Dark,
                    "light" => ThemeMode::Light,
                    _ => {
                        return Err(OptionsError::InvalidValue(
                            name.to_string(),
                            value.to_string(),
                        ));
                    }
                };
            }
            "score_file" | "scorefile" => self.score_file = Some(PathBuf::from(value)),
            "sound_command" => self.sound_command = Some(value.to_string()),
            "assets" => self.assets = PathBuf::from(value),
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Best-time record path, configured or default
    pub fn score_path(&self) -> PathBuf {
        self.score_file.clone().unwrap_or_else(default_score_path)
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| OptionsError::IoError(e.to_string()))?;
        }
        std::fs::write(path, self.to_config_string())
            .map_err(|e| OptionsError::IoError(e.to_string()))
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let mut lines = vec!["# numguess configuration file".to_string(), String::new()];

        lines.push(format!(
            "OPTIONS={}",
            if self.sound { "sound" } else { "!sound" }
        ));
        let theme = match self.theme {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        };
        lines.push(format!("OPTIONS=theme:{}", theme));

        if let Some(difficulty) = self.difficulty {
            lines.push(format!("OPTIONS=difficulty:{}", difficulty.to_string().to_lowercase()));
        }
        if let Some(ref score_file) = self.score_file {
            lines.push(format!("OPTIONS=score_file:{}", score_file.display()));
        }
        if let Some(ref command) = self.sound_command {
            lines.push(format!("OPTIONS=sound_command:{}", command));
        }
        lines.push(format!("OPTIONS=assets:{}", self.assets.display()));

        lines.join("\n") + "\n"
    }
}

/// Default rc file: `<config dir>/numguess/numguessrc`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push("numguess");
        path.push("numguessrc");
        path
    })
}

/// Options parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: unrecognized line '{0}'")]
    ParseError(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
    #[error("Missing value for option: {0}")]
    MissingValue(String),
}
