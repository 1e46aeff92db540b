// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/provider.rs - Sources for the revision of the running board.
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

//! The "which board am I running on" query.
//!
//! This crate doesn't probe hardware. Whatever does (a pin driver, a
//! `/proc/cpuinfo` reader, a mock in a test) implements [RevisionSource]
//! and hands itself to [current_pi_info].

use tracing::debug;

use crate::decoder::BoardInfo;
use crate::error::{Error, Result};

/// Something that knows the board the program is running on.
pub trait RevisionSource {
    /// The current board, or `None` if this isn't a Pi.
    fn board_info(&self) -> Option<BoardInfo>;
}

/// A source that always reports the same revision. Useful for tests and for
/// pretending to run on a particular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRevision(pub u32);

impl RevisionSource for FixedRevision {
    fn board_info(&self) -> Option<BoardInfo> {
        match BoardInfo::from_revision(self.0) {
            Ok(info) => Some(info),
            Err(e) => {
                debug!(revision = format_args!("{:#x}", self.0), error = %e, "fixed revision does not decode");
                None
            }
        }
    }
}

/// Returns the board reported by `source`, failing with [`Error::NotAPi`]
/// if there isn't one.
pub fn current_pi_info(source: &impl RevisionSource) -> Result<BoardInfo> {
    source.board_info().ok_or(Error::NotAPi)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoBoard;

    impl RevisionSource for NoBoard {
        fn board_info(&self) -> Option<BoardInfo> {
            None
        }
    }

    #[test]
    fn fixed_revision() {
        let info = current_pi_info(&FixedRevision(0xc03111)).unwrap();
        assert_eq!(info.revision, "c03111");
    }

    #[test]
    fn not_a_pi() {
        let err = current_pi_info(&NoBoard).unwrap_err();
        assert_eq!(err, Error::NotAPi);
        assert!(err.is_unknown_pi());
        assert_eq!(current_pi_info(&FixedRevision(0xff)), Err(Error::NotAPi));
    }
}
