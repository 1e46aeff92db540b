// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/tables/revisions.rs - Lookup table for old-style revision codes.
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

//! Boards released before the bit-packed revision scheme was introduced.
//!
//! Their revision codes are opaque keys, so every attribute has to be
//! listed explicitly.

use super::art;
use super::{CM_HEADERS, HeaderSet, PLUS_HEADERS, REV1_HEADERS, REV2_HEADERS};
use crate::model::Model;

/// A row of the legacy revision table.
#[derive(Debug, Clone, Copy)]
pub struct LegacyRevision {
    pub revision: u32,
    pub model: Model,
    pub pcb_revision: &'static str,
    pub released: &'static str,
    pub soc: &'static str,
    pub manufacturer: &'static str,
    /// Memory in MB.
    pub memory: u32,
    pub storage: &'static str,
    pub usb: u8,
    pub ethernet: u8,
    pub wifi: bool,
    pub bluetooth: bool,
    pub csi: u8,
    pub dsi: u8,
    pub headers: HeaderSet,
    pub board: &'static str,
}

#[allow(clippy::too_many_arguments)]
const fn rev(
    revision: u32,
    model: Model,
    pcb_revision: &'static str,
    released: &'static str,
    manufacturer: &'static str,
    memory: u32,
    storage: &'static str,
    usb: u8,
    ethernet: u8,
    csi: u8,
    dsi: u8,
    headers: HeaderSet,
    board: &'static str,
) -> LegacyRevision {
    // Every old-style board is a BCM2835 without radios.
    LegacyRevision {
        revision,
        model,
        pcb_revision,
        released,
        soc: "BCM2835",
        manufacturer,
        memory,
        storage,
        usb,
        ethernet,
        wifi: false,
        bluetooth: false,
        csi,
        dsi,
        headers,
        board,
    }
}

#[rustfmt::skip]
pub static LEGACY_REVISIONS: [LegacyRevision; 17] = [
    //  rev   model         pcb    released  manufacturer ram  storage    usb eth csi dsi headers       board
    rev(0x2,  Model::B,     "1.0", "2012Q1", "Egoman",    256, "SD",      2,  1,  1,  1,  REV1_HEADERS, art::REV1_BOARD),
    rev(0x3,  Model::B,     "1.0", "2012Q3", "Egoman",    256, "SD",      2,  1,  1,  1,  REV1_HEADERS, art::REV1_BOARD),
    rev(0x4,  Model::B,     "2.0", "2012Q3", "Sony",      256, "SD",      2,  1,  1,  1,  REV2_HEADERS, art::REV2_BOARD),
    rev(0x5,  Model::B,     "2.0", "2012Q4", "Qisda",     256, "SD",      2,  1,  1,  1,  REV2_HEADERS, art::REV2_BOARD),
    rev(0x6,  Model::B,     "2.0", "2012Q4", "Egoman",    256, "SD",      2,  1,  1,  1,  REV2_HEADERS, art::REV2_BOARD),
    rev(0x7,  Model::A,     "2.0", "2013Q1", "Egoman",    256, "SD",      1,  0,  1,  1,  REV2_HEADERS, art::A_BOARD),
    rev(0x8,  Model::A,     "2.0", "2013Q1", "Sony",      256, "SD",      1,  0,  1,  1,  REV2_HEADERS, art::A_BOARD),
    rev(0x9,  Model::A,     "2.0", "2013Q1", "Qisda",     256, "SD",      1,  0,  1,  1,  REV2_HEADERS, art::A_BOARD),
    rev(0xd,  Model::B,     "2.0", "2012Q4", "Egoman",    512, "SD",      2,  1,  1,  1,  REV2_HEADERS, art::REV2_BOARD),
    rev(0xe,  Model::B,     "2.0", "2012Q4", "Sony",      512, "SD",      2,  1,  1,  1,  REV2_HEADERS, art::REV2_BOARD),
    rev(0xf,  Model::B,     "2.0", "2012Q4", "Qisda",     512, "SD",      2,  1,  1,  1,  REV2_HEADERS, art::REV2_BOARD),
    rev(0x10, Model::BPlus, "1.2", "2014Q3", "Sony",      512, "MicroSD", 4,  1,  1,  1,  PLUS_HEADERS, art::BPLUS_BOARD),
    rev(0x11, Model::CM,    "1.1", "2014Q2", "Sony",      512, "eMMC",    1,  0,  2,  2,  CM_HEADERS,   art::CM_BOARD),
    rev(0x12, Model::APlus, "1.1", "2014Q4", "Sony",      256, "MicroSD", 1,  0,  1,  1,  PLUS_HEADERS, art::APLUS_BOARD),
    rev(0x13, Model::BPlus, "1.2", "2015Q1", "Egoman",    512, "MicroSD", 4,  1,  1,  1,  PLUS_HEADERS, art::BPLUS_BOARD),
    rev(0x14, Model::CM,    "1.1", "2014Q2", "Embest",    512, "eMMC",    1,  0,  2,  2,  CM_HEADERS,   art::CM_BOARD),
    rev(0x15, Model::APlus, "1.1", "2014Q4", "Embest",    256, "MicroSD", 1,  0,  1,  1,  PLUS_HEADERS, art::APLUS_BOARD),
];

/// Looks up an old-style revision code.
pub fn lookup(revision: u32) -> Option<&'static LegacyRevision> {
    LEGACY_REVISIONS.iter().find(|r| r.revision == revision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        for (i, a) in LEGACY_REVISIONS.iter().enumerate() {
            for b in &LEGACY_REVISIONS[i + 1..] {
                assert_ne!(a.revision, b.revision);
            }
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(lookup(0x10).map(|r| r.model), Some(Model::BPlus));
        assert!(lookup(0x1).is_none());
        assert!(lookup(0xff).is_none());
    }
}
