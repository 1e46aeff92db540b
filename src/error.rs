// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error types for Raspberry Pi board lookups.
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

//! Error types shared by every stage of the crate.

use thiserror::Error;

/// Result type returned by fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a revision, resolving a pin, or
/// rendering a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The revision is old-style but not present in the legacy table.
    #[error("unknown old-style revision \"{revision:x}\"")]
    UnknownRevision {
        /// The revision code that was looked up.
        revision: u32,
    },

    /// The revision source has no board to report.
    #[error("the revision source is not attached to a Pi")]
    NotAPi,

    /// The revision string could not be read as hexadecimal.
    #[error("invalid revision \"{input}\"")]
    InvalidRevision {
        /// The text that failed to parse.
        input: String,
    },

    /// The pin specification is malformed, out of range, or refers to a
    /// header or pin that doesn't exist.
    #[error("{reason}")]
    InvalidPin {
        /// Why the specification was rejected.
        reason: String,
    },

    /// No pin on the board carries the requested function.
    #[error("no pins can be used for {function}")]
    NoPins {
        /// The function that was searched for.
        function: String,
    },

    /// More than one pin carries the requested function.
    #[error("multiple pins can be used for {function}")]
    MultiplePins {
        /// The function that was searched for.
        function: String,
    },

    /// A format or style specifier could not be understood.
    #[error("{reason}")]
    InvalidFormat {
        /// Why the specifier was rejected.
        reason: String,
    },
}

impl Error {
    /// Create an invalid pin error.
    pub fn invalid_pin(reason: impl Into<String>) -> Self {
        Self::InvalidPin {
            reason: reason.into(),
        }
    }

    /// Create an invalid format error.
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error means the board itself couldn't be
    /// identified, as opposed to a bad argument.
    pub fn is_unknown_pi(&self) -> bool {
        matches!(self, Self::UnknownRevision { .. } | Self::NotAPi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_revision_message_is_hex() {
        let err = Error::UnknownRevision { revision: 0xff };
        assert_eq!(err.to_string(), "unknown old-style revision \"ff\"");
        assert!(err.is_unknown_pi());
    }

    #[test]
    fn pin_errors_are_not_unknown_pi() {
        assert!(!Error::invalid_pin("bad").is_unknown_pi());
        assert!(Error::NotAPi.is_unknown_pi());
    }
}
