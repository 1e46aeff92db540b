// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/style.rs - ANSI styling for board and header diagrams.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! A tiny style language for ANSI escape codes.
//!
//! A style is a list of words such as `"bold white on green"`: effects
//! (`reset`, `bold`, `normal`) and colours, where colours before `on` set
//! the foreground and colours after it set the background.

use std::fmt;

use crate::error::{Error, Result};

fn effect_code(word: &str) -> Option<u8> {
    match word {
        "reset" => Some(0),
        "bold" => Some(1),
        "normal" => Some(22),
        _ => None,
    }
}

fn color_code(word: &str) -> Option<u8> {
    match word {
        "black" => Some(0),
        "red" => Some(1),
        "green" => Some(2),
        "yellow" => Some(3),
        "blue" => Some(4),
        "magenta" => Some(5),
        "cyan" => Some(6),
        "white" => Some(7),
        "default" => Some(9),
        _ => None,
    }
}

/// Turns style words into escape codes, or into nothing at all in mono
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Whether escape codes are emitted.
    pub color: bool,
}

impl Style {
    /// Creates a style, detecting colour support when `color` is `None`.
    pub fn new(color: Option<bool>) -> Self {
        Self {
            color: color.unwrap_or_else(Self::term_supports_color),
        }
    }

    /// Whether stdout is an interactive terminal on a platform where ANSI
    /// escapes are expected to work.
    pub fn term_supports_color() -> bool {
        console::user_attended() && !cfg!(windows)
    }

    /// Splits a format specifier into its style and content words.
    ///
    /// At most one of `color` and `mono` may be given; without either the
    /// terminal decides. At most one other word may be given, and it
    /// defaults to `"full"`.
    pub fn from_style_content(spec: &str) -> Result<(Self, &str)> {
        let mut style = None;
        let mut content = None;

        for word in spec.split_whitespace() {
            match word {
                "color" | "mono" => {
                    if style.is_some_and(|s| s != word) {
                        return Err(Error::invalid_format(
                            "cannot specify both mono and color styles",
                        ));
                    }
                    style = Some(word);
                }
                _ => {
                    if content.is_some_and(|c| c != word) {
                        return Err(Error::invalid_format(
                            "cannot specify more than one content element",
                        ));
                    }
                    content = Some(word);
                }
            }
        }

        let style = match style {
            Some(word) => Self {
                color: word == "color",
            },
            None => Self::new(None),
        };
        Ok((style, content.unwrap_or("full")))
    }

    /// Returns the escape sequence for a list of style words. Unknown words
    /// are rejected even in mono mode.
    pub fn code(&self, spec: &str) -> Result<String> {
        let mut codes = Vec::new();
        let mut fore = true;

        for word in spec.split_whitespace() {
            if word == "on" {
                fore = false;
            } else if let Some(code) = effect_code(word) {
                codes.push(code);
            } else if let Some(color) = color_code(word) {
                codes.push(if fore { 30 + color } else { 40 + color });
            } else {
                return Err(Error::invalid_format(format!(
                    "invalid format specification \"{word}\""
                )));
            }
        }

        if !self.color {
            return Ok(String::new());
        }

        let codes: Vec<String> = codes.iter().map(u8::to_string).collect();
        Ok(format!("\x1b[{}m", codes.join(";")))
    }
}

impl fmt::Display for Style {
    /// Writes the style's name, which as a format specifier selects the
    /// same style again.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.color { "color" } else { "mono" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR: Style = Style { color: true };
    const MONO: Style = Style { color: false };

    #[test]
    fn foreground_and_background() {
        assert_eq!(COLOR.code("bold white on green").unwrap(), "\x1b[1;37;42m");
        assert_eq!(COLOR.code("on black").unwrap(), "\x1b[40m");
        assert_eq!(COLOR.code("reset").unwrap(), "\x1b[0m");
        assert_eq!(COLOR.code("normal default").unwrap(), "\x1b[22;39m");
    }

    #[test]
    fn mono_is_silent_but_strict() {
        assert_eq!(MONO.code("bold red").unwrap(), "");
        assert_eq!(
            MONO.code("bold purple"),
            Err(Error::invalid_format("invalid format specification \"purple\""))
        );
    }

    #[test]
    fn split_style_and_content() {
        assert_eq!(Style::from_style_content("mono row1").unwrap(), (MONO, "row1"));
        assert_eq!(Style::from_style_content("specs color").unwrap(), (COLOR, "specs"));
        assert_eq!(Style::from_style_content("mono").unwrap(), (MONO, "full"));
        assert_eq!(Style::from_style_content("mono mono").unwrap(), (MONO, "full"));
        assert!(Style::from_style_content("mono color").is_err());
        assert!(Style::from_style_content("mono row1 col1").is_err());
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(COLOR.to_string(), "color");
        assert_eq!(MONO.to_string(), "mono");
        assert_eq!(Style::new(Some(false)), MONO);
    }
}
