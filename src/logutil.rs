//! Console output helpers: severity colors for player-facing lines and
//! sanitizing of free-form labels so diagnostics stay single-line.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::economy::errors::{EconomyError, EconomyResult};

/// ANSI sequence that restores the default terminal style.
pub const RESET: &str = "\x1b[0m";

/// Console severity levels. `Offset` is the reset code and cannot be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Errors
    Red,
    /// Success
    Green,
    /// Warnings
    Yellow,
    Offset,
}

const PALETTE: [(Color, &str); 3] = [
    (Color::Red, "\x1b[1;31m"),
    (Color::Green, "\x1b[1;32m"),
    (Color::Yellow, "\x1b[1;33m"),
];

/// Escape sequence for a loggable level, `None` for anything else.
pub fn escape_for(color: Color) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(c, _)| *c == color)
        .map(|(_, escape)| *escape)
}

/// Wrap `text` in the level's color and a reset.
pub fn paint(color: Color, text: &str) -> EconomyResult<String> {
    let escape = escape_for(color).ok_or_else(color_not_found)?;
    Ok(format!("{}{}{}", escape, text, RESET))
}

fn color_not_found() -> EconomyError {
    EconomyError::InvalidArgument("color not found".to_string())
}

/// When console lines get ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Player-facing output sink.
///
/// The binary writes to stdout; tests hand in a `Vec<u8>` and inspect it
/// through [`Console::output`] or [`Console::into_inner`].
pub struct Console<W: Write = io::Stdout> {
    out: W,
    colored: bool,
}

impl Console<io::Stdout> {
    pub fn stdout(mode: ColorMode) -> Self {
        Self::new(io::stdout(), mode.enabled())
    }
}

impl Console<Vec<u8>> {
    /// In-memory console without colors.
    pub fn buffer() -> Self {
        Self::new(Vec::new(), false)
    }

    /// Everything written so far, lossily decoded.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Write a line at the given severity.
    ///
    /// Fails with `InvalidArgument` for [`Color::Offset`] before anything is
    /// written, whether or not colors are enabled.
    pub fn log(&mut self, color: Color, text: &str) -> EconomyResult<()> {
        let line = if self.colored {
            paint(color, text)?
        } else {
            escape_for(color).ok_or_else(color_not_found)?;
            text.to_string()
        };
        self.line(&line)
    }

    /// Write an uncolored line.
    pub fn line(&mut self, text: &str) -> EconomyResult<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Escape a string for single-line logging:
/// - `\n` => `\\n`
/// - `\r` => `\\r`
/// - `\t` => `\\t`
/// - backslash => `\\\\`
/// - ESC and other control chars => `\xNN`
///
/// Truncates labels longer than `MAX_PREVIEW` chars with an ellipsis.
pub fn escape_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 80;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
