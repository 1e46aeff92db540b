// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Hardware database library for Raspberry Pi boards.
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

/*!
 * # `piboard` Crate
 *
 * A library for identifying Raspberry Pi boards from their revision codes.
 *
 * This crate provides a full pipeline from revision code to pin diagram:
 *
 * 1. [decoder]: Decodes a revision code into a [BoardInfo] record.
 * 2. [header]: Lays out each pin header of the board by row and column.
 * 3. [pinspec]: Resolves pin specifications such as `"BOARD11"` or
 *    `"J8:11"` into GPIO numbers, and pin functions into header positions.
 * 4. [format]: Renders boards and headers as text, optionally with ANSI
 *    colour.
 *
 * ## Usage Example
 *
 * ```
 * use piboard::pi_info;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     // Decode the revision reported in /proc/cpuinfo
 *     let info = pi_info("a02082")?;
 *
 *     println!("Raspberry Pi {} rev {}", info.model, info.pcb_revision);
 *     println!("{} with {:?}MB of RAM", info.soc, info.memory);
 *
 *     // Resolve a physical pin to its GPIO number
 *     let gpio = info.to_gpio("BOARD11")?;
 *     println!("Physical pin 11 is GPIO{}", gpio);
 *
 *     // Print the board diagram without colour
 *     info.pprint(Some(false))?;
 *
 *     Ok(())
 * }
 * ```
 */

pub mod decoder;
pub mod error;
pub mod format;
pub mod header;
pub mod model;
pub mod pinspec;
pub mod provider;
pub mod style;
pub mod tables;

pub use decoder::{BoardInfo, IntoRevision};
pub use error::{Error, Result};
pub use header::{HeaderInfo, PinInfo};
pub use model::Model;
pub use pinspec::PinSpec;
pub use provider::{FixedRevision, RevisionSource, current_pi_info};
pub use style::Style;

/// Decodes a revision code into information about the board.
///
/// # Arguments
///
/// * `revision` - The revision code, either as an integer or as the
///   hexadecimal text the firmware reports (e.g. `"a02082"` or
///   `b"0x000e"`).
///
/// # Returns
///
/// A `Result` containing the board information, [`Error::InvalidRevision`]
/// if the text isn't hexadecimal, or [`Error::UnknownRevision`] if the code
/// is an old-style one this crate doesn't know.
pub fn pi_info(revision: impl IntoRevision) -> Result<BoardInfo> {
    BoardInfo::from_revision(revision.into_revision()?)
}
