// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/decoder.rs - Decoder for Raspberry Pi revision codes.
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
 * # `decoder` Module
 *
 * This module decodes a board revision code into a [BoardInfo] record.
 *
 * Two encodings exist. New-style codes (bit 23 set) pack the memory size,
 * manufacturer, SoC, model and PCB revision into bit fields; everything
 * else is derived from the model. Old-style codes are opaque and are looked
 * up in the legacy revision table.
 *
 * ## Usage Example
 *
 * ```
 * use piboard::decoder::BoardInfo;
 * use piboard::model::Model;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let info = BoardInfo::from_revision(0xa02082)?;
 *
 *     assert_eq!(info.model, Model::Pi3B);
 *     assert_eq!(info.soc, "BCM2837");
 *     assert_eq!(info.memory, Some(1024));
 *
 *     Ok(())
 * }
 * ```
 */

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Error, Result};
use crate::header::HeaderInfo;
use crate::model::Model;
use crate::tables::HeaderSet;
use crate::tables::revisions;

// MSB -----------------------> LSB
// NOQuuuWuFMMMCCCCPPPPTTTTTTTTRRRR
//
// N        - Overvoltage (0=allowed, 1=disallowed)
// O        - OTP programming (0=allowed, 1=disallowed)
// Q        - OTP read (0=allowed, 1=disallowed)
// u        - Unused
// W        - Warranty bit (0=intact, 1=voided by overclocking)
// F        - New flag (1=valid new-style revision, 0=old-style)
// MMM      - Memory size
// CCCC     - Manufacturer
// PPPP     - Processor
// TTTTTTTT - Type
// RRRR     - Revision (0, 1, 2, etc.)
const NEW_STYLE_FLAG: u32 = 0x80_0000;
const MEMORY_MASK: u32 = 0x70_0000;
const MEMORY_SHIFT: u32 = 20;
const MANUFACTURER_MASK: u32 = 0x0f_0000;
const MANUFACTURER_SHIFT: u32 = 16;
const PROCESSOR_MASK: u32 = 0xf000;
const PROCESSOR_SHIFT: u32 = 12;
const TYPE_MASK: u32 = 0xff0;
const TYPE_SHIFT: u32 = 4;
const REVISION_MASK: u32 = 0xf;

fn soc_name(code: u32) -> &'static str {
    match code {
        0 => "BCM2835",
        1 => "BCM2836",
        2 => "BCM2837",
        3 => "BCM2711",
        _ => "Unknown",
    }
}

fn manufacturer_name(code: u32) -> &'static str {
    match code {
        0 => "Sony",
        1 => "Egoman",
        2 | 4 => "Embest",
        3 => "Sony Japan",
        5 => "Stadium",
        _ => "Unknown",
    }
}

fn memory_size(code: u32) -> Option<u32> {
    match code {
        0..=5 => Some(256 << code),
        _ => None,
    }
}

/// Information about a particular revision of Raspberry Pi.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardInfo {
    /// The revision code as lowercase hex (at least four digits). This is
    /// the key all other fields are derived from.
    pub revision: String,
    /// The model of the board.
    pub model: Model,
    /// The PCB revision silk-screened onto the board. Mostly useful to tell
    /// apart the model B revisions 1.0 and 2.0, whose 26-pin headers differ.
    pub pcb_revision: String,
    /// Approximate release date, formatted as `yyyyQq`.
    pub released: &'static str,
    /// The SoC the board is based on.
    pub soc: &'static str,
    /// The name of the manufacturer.
    pub manufacturer: &'static str,
    /// Memory connected to the SoC, in MB. `None` if the revision code
    /// carries a memory size this crate doesn't know.
    pub memory: Option<u32>,
    /// The type of bootable storage, e.g. `"SD"`, `"MicroSD"` or `"eMMC"`.
    pub storage: &'static str,
    /// Number of USB ports of any type, not counting the power connector.
    pub usb: u8,
    /// Number of the USB ports that are USB3.
    pub usb3: u8,
    /// Number of Ethernet ports.
    pub ethernet: u8,
    /// Maximum Ethernet speed in Mbps, 0 if there are no Ethernet ports.
    pub eth_speed: u16,
    /// Whether wifi is built in.
    pub wifi: bool,
    /// Whether bluetooth is built in.
    pub bluetooth: bool,
    /// Number of CSI camera ports.
    pub csi: u8,
    /// Number of DSI display ports.
    pub dsi: u8,
    /// A map of header names to their pin information.
    pub headers: BTreeMap<&'static str, HeaderInfo>,
    /// The ASCII-art template for this board. Render it with
    /// [`BoardInfo::render`] rather than printing it directly.
    pub board: &'static str,
}

impl BoardInfo {
    /// Decodes a revision code.
    ///
    /// # Arguments
    ///
    /// * `revision` - The revision code, as reported by the firmware.
    ///
    /// # Returns
    ///
    /// A `Result` containing the board information, or
    /// [`Error::UnknownRevision`] for an old-style code that isn't in the
    /// legacy table.
    pub fn from_revision(revision: u32) -> Result<Self> {
        if revision & NEW_STYLE_FLAG != 0 {
            Ok(Self::from_new_style(revision))
        } else {
            Self::from_old_style(revision)
        }
    }

    fn from_new_style(revision: u32) -> Self {
        let memory = memory_size((revision & MEMORY_MASK) >> MEMORY_SHIFT);
        let manufacturer = manufacturer_name((revision & MANUFACTURER_MASK) >> MANUFACTURER_SHIFT);
        let soc = soc_name((revision & PROCESSOR_MASK) >> PROCESSOR_SHIFT);
        let model = Model::from_type_code((revision & TYPE_MASK) >> TYPE_SHIFT);
        let pcb_revision = model.pcb_revision(revision & REVISION_MASK);

        debug!(
            revision = format_args!("{revision:#x}"),
            model = %model,
            pcb_revision = %pcb_revision,
            soc,
            "decoded new-style revision"
        );

        let csi = model.csi(&pcb_revision);
        let wireless = model.wireless();

        Self {
            revision: format!("{:04x}", revision),
            model,
            released: model.released(&pcb_revision, memory, manufacturer),
            soc,
            manufacturer,
            memory,
            storage: model.storage(),
            usb: model.usb(),
            usb3: model.usb3(),
            ethernet: model.ethernet(),
            eth_speed: model.eth_speed(),
            wifi: wireless,
            bluetooth: wireless,
            csi,
            dsi: model.dsi(&pcb_revision),
            headers: build_headers(model.headers(&pcb_revision)),
            board: model.board_art(&pcb_revision),
            pcb_revision,
        }
    }

    fn from_old_style(revision: u32) -> Result<Self> {
        let Some(entry) = revisions::lookup(revision) else {
            debug!(revision = format_args!("{revision:#x}"), "old-style revision not in table");
            return Err(Error::UnknownRevision { revision });
        };

        debug!(
            revision = format_args!("{revision:#x}"),
            model = %entry.model,
            "decoded old-style revision"
        );

        Ok(Self {
            revision: format!("{:04x}", revision),
            model: entry.model,
            pcb_revision: entry.pcb_revision.to_string(),
            released: entry.released,
            soc: entry.soc,
            manufacturer: entry.manufacturer,
            memory: Some(entry.memory),
            storage: entry.storage,
            usb: entry.usb,
            usb3: 0,
            ethernet: entry.ethernet,
            eth_speed: u16::from(entry.ethernet) * 100,
            wifi: entry.wifi,
            bluetooth: entry.bluetooth,
            csi: entry.csi,
            dsi: entry.dsi,
            headers: build_headers(entry.headers),
            board: entry.board,
        })
    }

    /// The first day of the quarter this board was released in, or `None`
    /// if the release date is unknown.
    pub fn released_on(&self) -> Option<NaiveDate> {
        let (year, quarter) = self.released.split_once('Q')?;
        let year: i32 = year.parse().ok()?;
        let quarter: u32 = quarter.parse().ok()?;
        if !(1..=4).contains(&quarter) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1)
    }
}

fn build_headers(set: HeaderSet) -> BTreeMap<&'static str, HeaderInfo> {
    set.iter()
        .map(|&(name, table)| (name, HeaderInfo::from_table(name, table)))
        .collect()
}

impl fmt::Debug for BoardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardInfo")
            .field("revision", &self.revision)
            .field("model", &self.model)
            .field("pcb_revision", &self.pcb_revision)
            .field("released", &self.released)
            .field("soc", &self.soc)
            .field("manufacturer", &self.manufacturer)
            .field("memory", &self.memory)
            .field("storage", &self.storage)
            .field("usb", &self.usb)
            .field("usb3", &self.usb3)
            .field("ethernet", &self.ethernet)
            .field("eth_speed", &self.eth_speed)
            .field("wifi", &self.wifi)
            .field("bluetooth", &self.bluetooth)
            .field("csi", &self.csi)
            .field("dsi", &self.dsi)
            .finish_non_exhaustive()
    }
}

/// Types that can identify a board revision.
///
/// Integers are taken as-is. Strings and byte strings are read as
/// hexadecimal, with or without a `0x` prefix, the way the firmware reports
/// them in `/proc/cpuinfo`.
pub trait IntoRevision {
    /// Converts `self` into a revision code.
    fn into_revision(self) -> Result<u32>;
}

impl IntoRevision for u32 {
    fn into_revision(self) -> Result<u32> {
        Ok(self)
    }
}

impl IntoRevision for i32 {
    fn into_revision(self) -> Result<u32> {
        u32::try_from(self).map_err(|_| Error::InvalidRevision {
            input: self.to_string(),
        })
    }
}

impl IntoRevision for &str {
    fn into_revision(self) -> Result<u32> {
        parse_revision(self)
    }
}

impl IntoRevision for &String {
    fn into_revision(self) -> Result<u32> {
        parse_revision(self)
    }
}

impl IntoRevision for String {
    fn into_revision(self) -> Result<u32> {
        parse_revision(&self)
    }
}

impl IntoRevision for &[u8] {
    fn into_revision(self) -> Result<u32> {
        match std::str::from_utf8(self) {
            Ok(s) => parse_revision(s),
            Err(_) => Err(Error::InvalidRevision {
                input: String::from_utf8_lossy(self).to_string(),
            }),
        }
    }
}

impl<const N: usize> IntoRevision for &[u8; N] {
    fn into_revision(self) -> Result<u32> {
        self.as_slice().into_revision()
    }
}

fn parse_revision(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    // from_str_radix would also accept a leading sign.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidRevision {
            input: input.to_string(),
        });
    }

    u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidRevision {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_3b() {
        let info = BoardInfo::from_revision(0xa02082).unwrap();
        assert_eq!(info.revision, "a02082");
        assert_eq!(info.model, Model::Pi3B);
        assert_eq!(info.pcb_revision, "1.2");
        assert_eq!(info.released, "2016Q1");
        assert_eq!(info.soc, "BCM2837");
        assert_eq!(info.manufacturer, "Sony");
        assert_eq!(info.memory, Some(1024));
        assert_eq!(info.storage, "MicroSD");
        assert_eq!((info.usb, info.usb3), (4, 0));
        assert_eq!((info.ethernet, info.eth_speed), (1, 100));
        assert!(info.wifi && info.bluetooth);
        assert_eq!((info.csi, info.dsi), (1, 1));
        assert_eq!(info.headers.keys().copied().collect::<Vec<_>>(), ["J8"]);
    }

    #[test]
    fn pi_3b_from_embest_and_sony_japan() {
        assert_eq!(BoardInfo::from_revision(0xa22082).unwrap().released, "2016Q1");
        let info = BoardInfo::from_revision(0xa32082).unwrap();
        assert_eq!(info.manufacturer, "Sony Japan");
        assert_eq!(info.released, "2016Q4");
    }

    #[test]
    fn pi_4b_8gb() {
        let info = BoardInfo::from_revision(0xd03114).unwrap();
        assert_eq!(info.model, Model::Pi4B);
        assert_eq!(info.soc, "BCM2711");
        assert_eq!(info.memory, Some(8192));
        assert_eq!(info.released, "2020Q2");
        assert_eq!((info.usb, info.usb3), (4, 2));
        assert_eq!(info.eth_speed, 1000);
        assert_eq!(
            info.headers.keys().copied().collect::<Vec<_>>(),
            ["J8", "POE"]
        );
    }

    #[test]
    fn unknown_fields_use_sentinels() {
        // Memory class 7, manufacturer 0xf, processor 0xf, type 0xff.
        let info = BoardInfo::from_revision(0xffffff).unwrap();
        assert_eq!(info.memory, None);
        assert_eq!(info.manufacturer, "Unknown");
        assert_eq!(info.soc, "Unknown");
        assert_eq!(info.model, Model::Unknown);
        assert_eq!(info.released, "Unknown");
        assert_eq!(info.released_on(), None);
    }

    #[test]
    fn old_style_b_rev1() {
        let info = BoardInfo::from_revision(0x2).unwrap();
        assert_eq!(info.revision, "0002");
        assert_eq!(info.model, Model::B);
        assert_eq!(info.pcb_revision, "1.0");
        assert_eq!(info.memory, Some(256));
        assert_eq!(info.eth_speed, 100);
        assert_eq!(info.headers["P1"].pins[&3].function, "GPIO0");
    }

    #[test]
    fn old_style_unknown() {
        assert_eq!(
            BoardInfo::from_revision(0xff),
            Err(Error::UnknownRevision { revision: 0xff })
        );
    }

    #[test]
    fn released_on_quarter_start() {
        let info = BoardInfo::from_revision(0x10).unwrap();
        assert_eq!(info.released_on(), NaiveDate::from_ymd_opt(2014, 7, 1));
    }

    #[test]
    fn debug_elides_headers_and_board() {
        let info = BoardInfo::from_revision(0x10).unwrap();
        let text = format!("{:?}", info);
        assert!(text.starts_with("BoardInfo { revision: \"0010\""));
        assert!(text.ends_with(", .. }"));
        assert!(!text.contains("headers"));
    }

    #[test]
    fn revision_strings() {
        assert_eq!("a02082".into_revision(), Ok(0xa02082));
        assert_eq!(" 0xA02082\n".into_revision(), Ok(0xa02082));
        assert_eq!(b"000e".into_revision(), Ok(0xe));
        assert_eq!(String::from("10").into_revision(), Ok(0x10));
        assert_eq!(0x10i32.into_revision(), Ok(0x10));
        assert!(matches!(
            (-1i32).into_revision(),
            Err(Error::InvalidRevision { .. })
        ));
        assert!(matches!(
            "bogus".into_revision(),
            Err(Error::InvalidRevision { .. })
        ));
        assert!(matches!("".into_revision(), Err(Error::InvalidRevision { .. })));
        assert!(matches!("-1".into_revision(), Err(Error::InvalidRevision { .. })));
        assert!(matches!(
            "123456789".into_revision(),
            Err(Error::InvalidRevision { .. })
        ));
    }
}
