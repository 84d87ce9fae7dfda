//! Terminal color theme system
//!
//! Provides dark and light palettes. Auto-detects via the COLORFGBG env var,
//! or manual override with --light, the `light` option or NG_LIGHT_BG=1.

use ng_core::ThemeMode;
use ratatui::style::Color;

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Whether this is the light palette
    pub light: bool,

    /// Screen background
    pub background: Color,

    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,
    /// Muted text (empty states, placeholder)
    pub text_muted: Color,

    // Borders
    pub border: Color,
    /// Informational border (menu, round)
    pub border_accent: Color,
    /// Win dialog border
    pub border_good: Color,
    /// Loss dialog border
    pub border_danger: Color,

    // Interactive elements
    pub cursor_fg: Color,
    pub cursor_bg: Color,

    // Semantic colors
    pub accent: Color,
    pub good: Color,
    pub bad: Color,
    /// Feedback line after a guess
    pub feedback: Color,

    // Menu entries
    pub easy: Color,
    pub medium: Color,
    pub hard: Color,
    pub theme_toggle: Color,
    pub sound_toggle: Color,

    // Attempts gauge
    pub gauge_high: Color,
    pub gauge_mid: Color,
    pub gauge_low: Color,
    pub gauge_track: Color,
}

const GREEN: Color = Color::Rgb(0x4c, 0xaf, 0x50);
const BLUE: Color = Color::Rgb(0x21, 0x96, 0xf3);
const RED: Color = Color::Rgb(0xf4, 0x43, 0x36);
const PURPLE: Color = Color::Rgb(0x9c, 0x27, 0xb0);
const ORANGE: Color = Color::Rgb(0xff, 0x98, 0x00);
const DEEP_ORANGE: Color = Color::Rgb(0xff, 0x57, 0x22);

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            light: false,
            background: Color::Rgb(0x1c, 0x1c, 0x1c),
            text: Color::White,
            text_dim: Color::DarkGray,
            text_muted: Color::Gray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_good: GREEN,
            border_danger: RED,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            accent: Color::Cyan,
            good: GREEN,
            bad: RED,
            feedback: DEEP_ORANGE,
            easy: GREEN,
            medium: BLUE,
            hard: RED,
            theme_toggle: PURPLE,
            sound_toggle: ORANGE,
            gauge_high: GREEN,
            gauge_mid: ORANGE,
            gauge_low: RED,
            gauge_track: Color::DarkGray,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            light: true,
            background: Color::Rgb(0xf2, 0xf2, 0xf2),
            text: Color::Black,
            text_dim: Color::DarkGray,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_good: GREEN,
            border_danger: RED,
            cursor_fg: Color::Black,
            cursor_bg: Color::Rgb(0xe0, 0xe0, 0xe0),
            accent: Color::Blue,
            good: GREEN,
            bad: RED,
            feedback: DEEP_ORANGE,
            easy: GREEN,
            medium: BLUE,
            hard: RED,
            theme_toggle: PURPLE,
            sound_toggle: ORANGE,
            gauge_high: GREEN,
            gauge_mid: ORANGE,
            gauge_low: RED,
            gauge_track: Color::Rgb(0xe0, 0xe0, 0xe0),
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and NG_LIGHT_BG override.
    pub fn detect() -> Self {
        let override_var = std::env::var("NG_LIGHT_BG").ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        if is_light_background(override_var.as_deref(), colorfgbg.as_deref()) {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Theme for a configured mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// The other palette
    pub fn toggled(&self) -> Self {
        if self.light { Self::dark() } else { Self::light() }
    }

    /// Gauge color for the remaining attempt count
    pub fn gauge_color(&self, attempts_left: u32) -> Color {
        match attempts_left {
            0 | 1 => self.gauge_low,
            2 | 3 => self.gauge_mid,
            _ => self.gauge_high,
        }
    }
}

/// Decide whether the terminal has a light background.
///
/// `override_var` is NG_LIGHT_BG, `colorfgbg` is COLORFGBG ("fg;bg" color
/// indices; light backgrounds have bg 7 or 9..=15).
fn is_light_background(override_var: Option<&str>, colorfgbg: Option<&str>) -> bool {
    if let Some(val) = override_var {
        return val == "1" || val.eq_ignore_ascii_case("true");
    }

    if let Some(colorfgbg) = colorfgbg
        && let Some(bg_str) = colorfgbg.rsplit(';').next()
        && let Ok(bg_idx) = bg_str.parse::<u8>()
    {
        return matches!(bg_idx, 7 | 9..=15);
    }

    false
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
