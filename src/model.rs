// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/model.rs - Raspberry Pi models and their per-model attributes.
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
 * # `model` Module
 *
 * The closed set of Raspberry Pi models and the attribute tables keyed by
 * them. New-style revision codes only carry the model, SoC, manufacturer,
 * memory size and PCB revision; everything else about a board (ports,
 * radios, headers, artwork) is derived here from the model, sometimes
 * refined by the PCB revision or memory size.
 *
 * Models that aren't special-cased by a table fall back to the values of
 * the common full-size board layout.
 */

use std::fmt;

use crate::tables::art;
use crate::tables::{self, HeaderSet};

/// Identifiable Raspberry Pi models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Model {
    A,
    B,
    APlus,
    BPlus,
    Pi2B,
    CM,
    Pi3B,
    Zero,
    CM3,
    ZeroW,
    Pi3BPlus,
    Pi3APlus,
    CM3Plus,
    Pi4B,
    Zero2W,
    Pi400,
    CM4,
    /// A type code that isn't in the model table.
    Unknown,
}

impl Model {
    /// Maps the 8-bit type field of a new-style revision code to a model.
    pub fn from_type_code(code: u32) -> Self {
        match code {
            0x00 => Model::A,
            0x01 => Model::B,
            0x02 => Model::APlus,
            0x03 => Model::BPlus,
            0x04 => Model::Pi2B,
            0x06 => Model::CM,
            0x08 => Model::Pi3B,
            0x09 => Model::Zero,
            0x0a => Model::CM3,
            0x0c => Model::ZeroW,
            0x0d => Model::Pi3BPlus,
            0x0e => Model::Pi3APlus,
            0x10 => Model::CM3Plus,
            0x11 => Model::Pi4B,
            0x12 => Model::Zero2W,
            0x13 => Model::Pi400,
            0x14 => Model::CM4,
            _ => Model::Unknown,
        }
    }

    /// The short model name, as printed on the board art (e.g. `"3B+"`).
    pub fn name(self) -> &'static str {
        match self {
            Model::A => "A",
            Model::B => "B",
            Model::APlus => "A+",
            Model::BPlus => "B+",
            Model::Pi2B => "2B",
            Model::CM => "CM",
            Model::Pi3B => "3B",
            Model::Zero => "Zero",
            Model::CM3 => "CM3",
            Model::ZeroW => "Zero W",
            Model::Pi3BPlus => "3B+",
            Model::Pi3APlus => "3A+",
            Model::CM3Plus => "CM3+",
            Model::Pi4B => "4B",
            Model::Zero2W => "Zero2W",
            Model::Pi400 => "400",
            Model::CM4 => "CM4",
            Model::Unknown => "???",
        }
    }

    /// The silk-screened PCB revision for the 4-bit revision field.
    ///
    /// The original A and B numbered their boards 1.0 and 2.0; everything
    /// since counts up from 1.0.
    pub fn pcb_revision(self, revision: u32) -> String {
        match self {
            Model::A | Model::B => match revision {
                0 | 1 => "1.0".to_string(),
                2 => "2.0".to_string(),
                _ => "Unknown".to_string(),
            },
            _ => format!("1.{}", revision),
        }
    }

    /// Approximate release date, formatted as `yyyyQq`.
    pub fn released(self, pcb_revision: &str, memory: Option<u32>, manufacturer: &str) -> &'static str {
        match self {
            Model::A => "2013Q1",
            Model::B if pcb_revision == "1.0" => "2012Q1",
            Model::B => "2012Q4",
            Model::APlus if memory == Some(512) => "2014Q4",
            Model::APlus => "2016Q3",
            Model::BPlus => "2014Q3",
            Model::Pi2B if matches!(pcb_revision, "1.0" | "1.1") => "2015Q1",
            Model::Pi2B => "2016Q3",
            Model::CM => "2014Q2",
            Model::Pi3B if matches!(manufacturer, "Sony" | "Embest") => "2016Q1",
            Model::Pi3B => "2016Q4",
            Model::Zero if pcb_revision == "1.2" => "2015Q4",
            Model::Zero => "2016Q2",
            Model::CM3 => "2017Q1",
            Model::ZeroW => "2017Q1",
            Model::Pi3BPlus => "2018Q1",
            Model::Pi3APlus => "2018Q4",
            Model::CM3Plus => "2019Q1",
            Model::Pi4B if memory == Some(8192) => "2020Q2",
            Model::Pi4B => "2019Q2",
            Model::CM4 => "2020Q4",
            Model::Pi400 => "2020Q4",
            Model::Zero2W => "2021Q4",
            Model::Unknown => "Unknown",
        }
    }

    /// The type of bootable storage the board uses.
    pub fn storage(self) -> &'static str {
        match self {
            Model::A | Model::B => "SD",
            Model::CM => "eMMC",
            Model::CM3 | Model::CM3Plus | Model::CM4 => "eMMC / off-board",
            _ => "MicroSD",
        }
    }

    /// Number of USB ports of any type, not counting the power connector.
    pub fn usb(self) -> u8 {
        match self {
            Model::A
            | Model::APlus
            | Model::Zero
            | Model::ZeroW
            | Model::Zero2W
            | Model::CM
            | Model::CM3
            | Model::Pi3APlus
            | Model::CM3Plus => 1,
            Model::B | Model::CM4 => 2,
            Model::Pi400 => 3,
            _ => 4,
        }
    }

    /// Number of the USB ports that are USB3.
    pub fn usb3(self) -> u8 {
        match self {
            Model::Pi4B | Model::Pi400 => 2,
            _ => 0,
        }
    }

    /// Number of Ethernet ports.
    pub fn ethernet(self) -> u8 {
        match self {
            Model::A
            | Model::APlus
            | Model::Zero
            | Model::ZeroW
            | Model::Zero2W
            | Model::CM
            | Model::CM3
            | Model::Pi3APlus
            | Model::CM3Plus => 0,
            _ => 1,
        }
    }

    /// Maximum Ethernet speed in Mbps, or 0 where there's no port.
    pub fn eth_speed(self) -> u16 {
        match self {
            Model::B | Model::BPlus | Model::Pi2B | Model::Pi3B => 100,
            Model::Pi3BPlus => 300,
            Model::Pi4B | Model::Pi400 | Model::CM4 => 1000,
            _ => 0,
        }
    }

    /// Whether the board has built-in wifi and bluetooth. The two always
    /// arrived together.
    pub fn wireless(self) -> bool {
        matches!(
            self,
            Model::Pi3B
                | Model::ZeroW
                | Model::Zero2W
                | Model::Pi3BPlus
                | Model::Pi3APlus
                | Model::Pi4B
                | Model::Pi400
                | Model::CM4
        )
    }

    /// Number of CSI camera ports.
    pub fn csi(self, pcb_revision: &str) -> u8 {
        match self {
            Model::Zero if pcb_revision == "1.2" => 0,
            Model::Zero => 1,
            Model::CM | Model::CM3 | Model::CM3Plus | Model::CM4 => 2,
            Model::Pi400 => 0,
            _ => 1,
        }
    }

    /// Number of DSI display ports. Unless the model has none, this matches
    /// the CSI count.
    pub fn dsi(self, pcb_revision: &str) -> u8 {
        match self {
            Model::Zero | Model::ZeroW | Model::Zero2W => 0,
            _ => self.csi(pcb_revision),
        }
    }

    /// The headers fitted to this model.
    pub fn headers(self, pcb_revision: &str) -> HeaderSet {
        match self {
            Model::A => tables::REV2_HEADERS,
            Model::B if pcb_revision == "1.0" => tables::REV1_HEADERS,
            Model::B => tables::REV2_HEADERS,
            Model::CM => tables::CM_HEADERS,
            Model::CM3 | Model::CM3Plus => tables::CM3_HEADERS,
            Model::Pi3BPlus | Model::Pi4B => tables::PLUS_POE_HEADERS,
            Model::CM4 => tables::CM4_HEADERS,
            _ => tables::PLUS_HEADERS,
        }
    }

    /// The ASCII-art template for this model.
    pub fn board_art(self, pcb_revision: &str) -> &'static str {
        match self {
            Model::A => art::A_BOARD,
            Model::B if pcb_revision == "1.0" => art::REV1_BOARD,
            Model::B => art::REV2_BOARD,
            Model::APlus => art::APLUS_BOARD,
            Model::CM | Model::CM3 => art::CM_BOARD,
            Model::CM3Plus => art::CM3PLUS_BOARD,
            Model::Zero if pcb_revision == "1.2" => art::ZERO12_BOARD,
            Model::Zero | Model::ZeroW => art::ZERO13_BOARD,
            Model::Zero2W => art::ZERO2_BOARD,
            Model::Pi3APlus => art::A3PLUS_BOARD,
            Model::Pi3BPlus => art::B3PLUS_BOARD,
            Model::Pi4B => art::B4_BOARD,
            Model::CM4 => art::CM4_BOARD,
            Model::Pi400 => art::P400_BOARD,
            _ => art::BPLUS_BOARD,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_code() {
        assert_eq!(Model::from_type_code(0x05), Model::Unknown);
        assert_eq!(Model::from_type_code(0xff), Model::Unknown);
        assert_eq!(Model::Unknown.to_string(), "???");
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("{:4}|", Model::Pi3B), "3B  |");
        assert_eq!(format!("{:6}|", Model::ZeroW), "Zero W|");
    }

    #[test]
    fn pcb_revision_numbering() {
        assert_eq!(Model::B.pcb_revision(1), "1.0");
        assert_eq!(Model::B.pcb_revision(2), "2.0");
        assert_eq!(Model::A.pcb_revision(7), "Unknown");
        assert_eq!(Model::Pi4B.pcb_revision(4), "1.4");
    }

    #[test]
    fn dsi_follows_csi() {
        assert_eq!(Model::CM4.dsi("1.0"), 2);
        assert_eq!(Model::Pi400.dsi("1.0"), 0);
        assert_eq!(Model::ZeroW.csi("1.1"), 1);
        assert_eq!(Model::ZeroW.dsi("1.1"), 0);
    }

    #[test]
    fn unknown_model_uses_full_size_defaults() {
        let m = Model::Unknown;
        assert_eq!(m.released("1.0", Some(1024), "Sony"), "Unknown");
        assert_eq!(m.storage(), "MicroSD");
        assert_eq!(m.usb(), 4);
        assert_eq!(m.ethernet(), 1);
        assert_eq!(m.eth_speed(), 0);
        assert!(!m.wireless());
        assert_eq!(m.board_art("1.0"), art::BPLUS_BOARD);
        assert_eq!(m.headers("1.0"), tables::PLUS_HEADERS);
    }
}
