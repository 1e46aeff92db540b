// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/tables/mod.rs - Static hardware tables for Raspberry Pi boards.
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

//! Static hardware tables: pin maps, the header combinations fitted to each
//! family of boards, the legacy revision table, and board artwork.
//!
//! The data is sourced from a combination of the following locations:
//!
//! - <http://elinux.org/RPi_HardwareHistory>
//! - <http://elinux.org/RPi_Low-level_peripherals>
//! - <https://www.raspberrypi.org/documentation/hardware/raspberrypi/revision-codes/README.md>

pub mod art;
pub mod pins;
pub mod revisions;

use pins::PinDef;

/// The headers fitted to a board, as `(name, pin table)` pairs.
pub type HeaderSet = &'static [(&'static str, &'static [PinDef])];

/// Model B with a PCB revision of 1.0.
pub const REV1_HEADERS: HeaderSet = &[("P1", &pins::REV1_P1)];

/// Models A and B from PCB revision 2.0 onwards.
pub const REV2_HEADERS: HeaderSet = &[("P1", &pins::REV2_P1), ("P5", &pins::REV2_P5)];

/// Every board with the 40-pin J8 layout and nothing else.
pub const PLUS_HEADERS: HeaderSet = &[("J8", &pins::PLUS_J8)];

/// 40-pin boards that also carry the PoE header.
pub const PLUS_POE_HEADERS: HeaderSet = &[("J8", &pins::PLUS_J8), ("POE", &pins::PLUS_POE)];

pub const CM_HEADERS: HeaderSet = &[("SODIMM", &pins::CM_SODIMM)];

pub const CM3_HEADERS: HeaderSet = &[("SODIMM", &pins::CM3_SODIMM)];

/// The CM4 as mounted on its IO board.
pub const CM4_HEADERS: HeaderSet = &[
    ("J8", &pins::PLUS_J8),
    ("J2", &pins::CM4_J2),
    ("J6", &pins::CM4_J6),
    ("POE", &pins::PLUS_POE),
];
