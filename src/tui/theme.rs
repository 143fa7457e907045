//! TUI color palettes.
//!
//! Light and dark palettes, plus automatic detection from the terminal
//! environment for [`ThemeArg::Auto`].

use ratatui::style::Color;

use crate::cli::ThemeArg;

/// Colors used by the quiz screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Borders, headings, progress gauge
    pub primary: Color,
    /// Focus marker and key hints
    pub secondary: Color,
    /// Incorrect answers and errors
    pub danger: Color,
    /// Best answers and completion
    pub success: Color,
    pub dim: Color,
    pub normal: Color,
}

impl Theme {
    /// High-contrast dark palette (default).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Yellow,
            danger: Color::Red,
            success: Color::Green,
            dim: Color::DarkGray,
            normal: Color::White,
        }
    }

    /// High-contrast light palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::Blue,
            secondary: Color::Magenta,
            danger: Color::Red,
            success: Color::Green,
            dim: Color::Gray,
            normal: Color::Black,
        }
    }

    /// Light palette on light terminals, dark otherwise.
    #[must_use]
    pub fn auto() -> Self {
        if is_light_background(std::env::var("COLORFGBG").ok().as_deref()) {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Palette for a CLI/config theme choice.
    #[must_use]
    pub fn from_arg(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => Self::auto(),
            ThemeArg::Light => Self::light(),
            ThemeArg::Dark => Self::dark(),
        }
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        self.normal == Color::Black
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Interpret a `COLORFGBG` value (`"fg;bg"`). Background indices 7 and
/// 9-15 are light; 8 is dark gray.
fn is_light_background(colorfgbg: Option<&str>) -> bool {
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.parse::<u32>().ok())
        .is_some_and(|bg| bg >= 7 && bg != 8)
}
