// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/header.rs - Pin header descriptions for Raspberry Pi boards.
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
 * # `header` Module
 *
 * This module turns the static pin tables into structured header data,
 * placing every pin at its physical row and column.
 *
 * ## Usage Example
 *
 * ```
 * use piboard::pi_info;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let info = pi_info("a02082")?;
 *
 *     let j8 = &info.headers["J8"];
 *     for pin in j8.pins.values() {
 *         println!("{:>2}: {} (row {}, col {})", pin.number, pin.function, pin.row, pin.col);
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use std::collections::BTreeMap;

use crate::tables::pins::PinDef;

/// Every known header is two pins wide.
pub const HEADER_COLUMNS: u32 = 2;

/// Represents a pin on a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinInfo {
    /// The physical pin number on the header, starting from 1.
    pub number: u32,
    /// The function of the pin, e.g. `"GND"`, `"3V3"`, or `"GPIO9"` for
    /// GPIO9 in the Broadcom numbering scheme.
    pub function: &'static str,
    /// Whether a physical pull-up resistor is permanently attached to the
    /// pin. This is usually `false`, but GPIO2 and GPIO3 are usually `true`.
    pub pull_up: bool,
    /// The row the pin is physically located in (1-based).
    pub row: u32,
    /// The column the pin is physically located in (1-based).
    pub col: u32,
}

impl PinInfo {
    /// The Broadcom GPIO number, if this pin is a GPIO line.
    pub fn gpio(&self) -> Option<u32> {
        gpio_number(self.function)
    }
}

/// Represents a pin header on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// The name of the header, as silk-screened on the board (e.g. `"J8"`).
    pub name: &'static str,
    /// The number of rows on the header.
    pub rows: u32,
    /// The number of columns on the header.
    pub columns: u32,
    /// A map of physical pin numbers to their pin information.
    pub pins: BTreeMap<u32, PinInfo>,
}

impl HeaderInfo {
    /// Builds a header from a static pin table.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the header.
    /// * `table` - The pin table, indexed by `pin number - 1`.
    pub fn from_table(name: &'static str, table: &'static [PinDef]) -> Self {
        let mut pins = BTreeMap::new();

        for (number, def) in (1u32..).zip(table) {
            let (row, col) = ((number - 1) / HEADER_COLUMNS, (number - 1) % HEADER_COLUMNS);
            pins.insert(
                number,
                PinInfo {
                    number,
                    function: def.function,
                    pull_up: def.pull_up,
                    row: row + 1,
                    col: col + 1,
                },
            );
        }

        let highest = pins.keys().next_back().copied().unwrap_or(0);

        Self {
            name,
            rows: highest / HEADER_COLUMNS,
            columns: HEADER_COLUMNS,
            pins,
        }
    }
}

/// Parses a `GPIO<n>` function label into its GPIO number. Labels such as
/// `"GPIO0-27 VREF"` or `"GPIO46 1V8"` are not GPIO lines.
pub fn gpio_number(function: &str) -> Option<u32> {
    let digits = function.strip_prefix("GPIO")?;
    if is_digits(digits) {
        digits.parse().ok()
    } else {
        None
    }
}

/// Whether `s` is a non-empty run of ASCII digits.
pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::pins;

    #[test]
    fn rows_and_columns() {
        let header = HeaderInfo::from_table("J8", &pins::PLUS_J8);
        assert_eq!(header.rows, 20);
        assert_eq!(header.columns, 2);
        assert_eq!(header.pins.len(), 40);

        let pin = header.pins[&1];
        assert_eq!((pin.row, pin.col), (1, 1));
        let pin = header.pins[&2];
        assert_eq!((pin.row, pin.col), (1, 2));
        let pin = header.pins[&40];
        assert_eq!((pin.row, pin.col), (20, 2));
        assert_eq!(pin.function, "GPIO21");
    }

    #[test]
    fn pull_ups_carried_over() {
        let header = HeaderInfo::from_table("P1", &pins::REV1_P1);
        assert!(header.pins[&3].pull_up);
        assert!(header.pins[&5].pull_up);
        assert!(!header.pins[&7].pull_up);
    }

    #[test]
    fn gpio_labels() {
        assert_eq!(gpio_number("GPIO4"), Some(4));
        assert_eq!(gpio_number("GPIO45"), Some(45));
        assert_eq!(gpio_number("GPIO"), None);
        assert_eq!(gpio_number("GPIO0-27 VREF"), None);
        assert_eq!(gpio_number("GPIO46 1V8"), None);
        assert_eq!(gpio_number("GND"), None);
    }
}
