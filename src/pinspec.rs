// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/pinspec.rs - Resolver for human-readable pin specifications.
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
 * # `pinspec` Module
 *
 * This module translates pin specifications into Broadcom GPIO numbers,
 * and logical pin functions into physical header positions.
 *
 * The following specification forms are understood, case-insensitively:
 *
 * | Form          | Example   | Meaning                                   |
 * |---------------|-----------|-------------------------------------------|
 * | integer       | `17`      | Broadcom GPIO number                      |
 * | `GPIO<n>`     | `GPIO17`  | Broadcom GPIO number                      |
 * | `BCM<n>`      | `BCM17`   | Broadcom GPIO number                      |
 * | `WPI<n>`      | `WPI0`    | wiringPi pin number                       |
 * | `BOARD<n>`    | `BOARD11` | physical pin on the main header           |
 * | `<hdr>:<n>`   | `J8:11`   | physical pin on the named header          |
 *
 * ## Usage Example
 *
 * ```
 * use piboard::pi_info;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let info = pi_info(0xa02082)?;
 *
 *     assert_eq!(info.to_gpio("BOARD11")?, 17);
 *     assert_eq!(info.to_gpio("wpi0")?, 17);
 *     assert_eq!(info.physical_pin("GPIO17")?, ("J8", 11));
 *
 *     Ok(())
 * }
 * ```
 */

use std::borrow::Cow;
use std::collections::BTreeSet;

use tracing::trace;

use crate::decoder::BoardInfo;
use crate::error::{Error, Result};
use crate::header::{gpio_number, is_digits};

/// Number of GPIO lines on the Broadcom SoCs.
pub const GPIO_COUNT: i64 = 54;

/// Headers that can be the "main" header, in order of preference.
const MAIN_HEADERS: [&str; 3] = ["P1", "J8", "SODIMM"];

/// A pin specification, as accepted by [`BoardInfo::to_gpio`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinSpec<'a> {
    /// A Broadcom GPIO number.
    Number(i64),
    /// Any of the textual forms.
    Text(Cow<'a, str>),
}

impl From<i64> for PinSpec<'_> {
    fn from(n: i64) -> Self {
        PinSpec::Number(n)
    }
}

impl From<i32> for PinSpec<'_> {
    fn from(n: i32) -> Self {
        PinSpec::Number(n.into())
    }
}

impl From<u32> for PinSpec<'_> {
    fn from(n: u32) -> Self {
        PinSpec::Number(n.into())
    }
}

impl From<u8> for PinSpec<'_> {
    fn from(n: u8) -> Self {
        PinSpec::Number(n.into())
    }
}

impl From<usize> for PinSpec<'_> {
    fn from(n: usize) -> Self {
        // Anything this large is out of range either way.
        PinSpec::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl<'a> From<&'a str> for PinSpec<'a> {
    fn from(s: &'a str) -> Self {
        PinSpec::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for PinSpec<'a> {
    fn from(s: &'a String) -> Self {
        PinSpec::Text(Cow::Borrowed(s))
    }
}

impl From<String> for PinSpec<'_> {
    fn from(s: String) -> Self {
        PinSpec::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a [u8]> for PinSpec<'a> {
    fn from(b: &'a [u8]) -> Self {
        PinSpec::Text(String::from_utf8_lossy(b))
    }
}

/// Maps a wiringPi pin number to a `(header, pin)` pair. `None` stands for
/// the board's main header.
fn wiring_pi(number: u32) -> Option<(Option<&'static str>, u32)> {
    let pin = match number {
        0 => 11,
        1 => 12,
        2 => 13,
        3 => 15,
        4 => 16,
        5 => 18,
        6 => 22,
        7 => 7,
        8 => 3,
        9 => 5,
        10 => 24,
        11 => 26,
        12 => 19,
        13 => 21,
        14 => 23,
        15 => 8,
        16 => 10,
        17 => return Some((Some("P5"), 3)),
        18 => return Some((Some("P5"), 4)),
        19 => return Some((Some("P5"), 5)),
        20 => return Some((Some("P5"), 6)),
        21 => 29,
        22 => 31,
        23 => 33,
        24 => 35,
        25 => 37,
        26 => 32,
        27 => 36,
        28 => 38,
        29 => 40,
        30 => 27,
        31 => 28,
        _ => return None,
    };
    Some((None, pin))
}

impl BoardInfo {
    /// Resolves a pin specification into a Broadcom GPIO number.
    ///
    /// # Arguments
    ///
    /// * `spec` - An integer, or a string in any of the forms listed in the
    ///   [module documentation](self).
    ///
    /// # Returns
    ///
    /// A `Result` containing the GPIO number, or [`Error::InvalidPin`] if
    /// the specification is malformed, out of range, names a header or pin
    /// this board doesn't have, or lands on a pin that isn't a GPIO line.
    pub fn to_gpio<'a>(&self, spec: impl Into<PinSpec<'a>>) -> Result<u8> {
        match spec.into() {
            PinSpec::Number(n) => check_gpio(n),
            PinSpec::Text(text) => self.resolve(&text.to_uppercase()),
        }
    }

    fn resolve(&self, spec: &str) -> Result<u8> {
        trace!(spec, "resolving pin spec");

        if is_digits(spec) {
            return parse_gpio(spec);
        }
        if let Some(digits) = spec.strip_prefix("GPIO").filter(|d| is_digits(d)) {
            return parse_gpio(digits);
        }
        if let Some(digits) = spec.strip_prefix("BCM").filter(|d| is_digits(d)) {
            return parse_gpio(digits);
        }
        if let Some(digits) = spec.strip_prefix("WPI").filter(|d| is_digits(d)) {
            let main = if self.headers.contains_key("P1") {
                "P1"
            } else {
                "J8"
            };
            let target = digits
                .parse()
                .ok()
                .and_then(wiring_pi)
                .ok_or_else(|| Error::invalid_pin(format!("{spec} is not a valid wiringPi pin")))?;
            let (header, pin) = target;
            return self.resolve(&format!("{}:{}", header.unwrap_or(main), pin));
        }
        if let Some((header, pin)) = spec.split_once(':') {
            if is_digits(pin) {
                return self.resolve_header_pin(spec, header, pin);
            }
        } else if let Some(digits) = spec.strip_prefix("BOARD").filter(|d| is_digits(d)) {
            let main = MAIN_HEADERS
                .into_iter()
                .find(|name| self.headers.contains_key(*name))
                .ok_or_else(|| Error::invalid_pin("there is no main header on this Pi"))?;
            return self.resolve(&format!("{main}:{digits}"));
        }

        Err(Error::invalid_pin(format!("{spec} is not a valid pin spec")))
    }

    fn resolve_header_pin(&self, spec: &str, header: &str, pin: &str) -> Result<u8> {
        let info = self
            .headers
            .get(header)
            .ok_or_else(|| Error::invalid_pin(format!("there is no {header} header on this Pi")))?;
        let function = pin
            .parse::<u32>()
            .ok()
            .and_then(|number| info.pins.get(&number))
            .map(|p| p.function)
            .ok_or_else(|| Error::invalid_pin(format!("no such pin {pin} on header {}", info.name)))?;

        trace!(spec, function, "resolved header pin");

        match gpio_number(function) {
            Some(gpio) => check_gpio(gpio.into()),
            None => Err(Error::invalid_pin(format!("{spec} is not a GPIO pin"))),
        }
    }

    /// Returns every `(header, pin number)` pair whose function is exactly
    /// `function`, in order.
    pub fn physical_pins(&self, function: &str) -> BTreeSet<(&'static str, u32)> {
        self.headers
            .iter()
            .flat_map(|(&name, header)| {
                header
                    .pins
                    .values()
                    .filter(move |pin| pin.function == function)
                    .map(move |pin| (name, pin.number))
            })
            .collect()
    }

    /// Returns the single `(header, pin number)` pair carrying `function`.
    ///
    /// Fails with [`Error::NoPins`] if no pin carries it, or with
    /// [`Error::MultiplePins`] if several do (use
    /// [`physical_pins`](Self::physical_pins) for those, e.g. `"GND"`).
    pub fn physical_pin(&self, function: &str) -> Result<(&'static str, u32)> {
        let mut pins = self.physical_pins(function).into_iter();
        match (pins.next(), pins.next()) {
            (Some(pin), None) => Ok(pin),
            (None, _) => Err(Error::NoPins {
                function: function.to_string(),
            }),
            (Some(_), Some(_)) => Err(Error::MultiplePins {
                function: function.to_string(),
            }),
        }
    }

    /// Whether the pin carrying `function` has a permanent pull-up.
    /// Returns `false` if no pin carries it.
    pub fn pulled_up(&self, function: &str) -> Result<bool> {
        let (header, number) = match self.physical_pin(function) {
            Ok(pin) => pin,
            Err(Error::NoPins { .. }) => return Ok(false),
            Err(e) => return Err(e),
        };
        Ok(self
            .headers
            .get(header)
            .and_then(|h| h.pins.get(&number))
            .is_some_and(|pin| pin.pull_up))
    }
}

fn check_gpio(n: i64) -> Result<u8> {
    if (0..GPIO_COUNT).contains(&n) {
        // Fits, the range check just passed.
        Ok(n as u8)
    } else {
        Err(Error::invalid_pin(format!(
            "invalid GPIO port {n} specified (range 0..{})",
            GPIO_COUNT - 1
        )))
    }
}

fn parse_gpio(digits: &str) -> Result<u8> {
    match digits.parse::<i64>() {
        Ok(n) => check_gpio(n),
        Err(_) => Err(Error::invalid_pin(format!(
            "invalid GPIO port {digits} specified (range 0..{})",
            GPIO_COUNT - 1
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi3b() -> BoardInfo {
        BoardInfo::from_revision(0xa02082).unwrap()
    }

    fn reason(err: Error) -> String {
        match err {
            Error::InvalidPin { reason } => reason,
            other => panic!("expected an invalid pin error, got {other:?}"),
        }
    }

    #[test]
    fn numeric_forms() {
        let info = pi3b();
        assert_eq!(info.to_gpio(4), Ok(4));
        assert_eq!(info.to_gpio(0u8), Ok(0));
        assert_eq!(info.to_gpio(53usize), Ok(53));
        assert_eq!(info.to_gpio("17"), Ok(17));
        assert_eq!(info.to_gpio("GPIO4"), Ok(4));
        assert_eq!(info.to_gpio("gpio04"), Ok(4));
        assert_eq!(info.to_gpio("bcm22"), Ok(22));
        assert_eq!(info.to_gpio(b"GPIO9".as_slice()), Ok(9));
        assert_eq!(info.to_gpio(String::from("BCM9")), Ok(9));
    }

    #[test]
    fn out_of_range() {
        let info = pi3b();
        assert_eq!(
            reason(info.to_gpio(9999).unwrap_err()),
            "invalid GPIO port 9999 specified (range 0..53)"
        );
        assert_eq!(
            reason(info.to_gpio(-1).unwrap_err()),
            "invalid GPIO port -1 specified (range 0..53)"
        );
        assert_eq!(
            reason(info.to_gpio("GPIO54").unwrap_err()),
            "invalid GPIO port 54 specified (range 0..53)"
        );
        assert!(info.to_gpio("99999999999999999999").is_err());
    }

    #[test]
    fn header_forms() {
        let info = pi3b();
        assert_eq!(info.to_gpio("J8:7"), Ok(4));
        assert_eq!(info.to_gpio("j8:40"), Ok(21));
        assert_eq!(info.to_gpio("BOARD11"), Ok(17));
        assert_eq!(info.to_gpio("board3"), Ok(2));
        assert_eq!(
            reason(info.to_gpio("BOARD1").unwrap_err()),
            "J8:1 is not a GPIO pin"
        );
        assert_eq!(
            reason(info.to_gpio("P1:3").unwrap_err()),
            "there is no P1 header on this Pi"
        );
        assert_eq!(
            reason(info.to_gpio("J8:41").unwrap_err()),
            "no such pin 41 on header J8"
        );
        assert_eq!(
            reason(info.to_gpio("J8:X").unwrap_err()),
            "J8:X is not a valid pin spec"
        );
    }

    #[test]
    fn wiring_pi_forms() {
        let info = pi3b();
        assert_eq!(info.to_gpio("WPI0"), Ok(17));
        assert_eq!(info.to_gpio("wpi8"), Ok(2));
        assert_eq!(info.to_gpio("WPI31"), Ok(1));
        assert_eq!(
            reason(info.to_gpio("WPI17").unwrap_err()),
            "there is no P5 header on this Pi"
        );
        assert_eq!(
            reason(info.to_gpio("WPI32").unwrap_err()),
            "WPI32 is not a valid wiringPi pin"
        );

        // The model B revision 2.0 has the P5 header.
        let info = BoardInfo::from_revision(0xe).unwrap();
        assert_eq!(info.to_gpio("WPI17"), Ok(28));
        assert_eq!(info.to_gpio("WPI8"), Ok(2));
        assert_eq!(info.to_gpio("BOARD13"), Ok(27));
    }

    #[test]
    fn compute_module_main_header() {
        let info = BoardInfo::from_revision(0x11).unwrap();
        assert_eq!(info.to_gpio("BOARD3"), Ok(0));
        assert_eq!(info.to_gpio("SODIMM:3"), Ok(0));
    }

    #[test]
    fn garbage() {
        let info = pi3b();
        assert_eq!(
            reason(info.to_gpio("bogus").unwrap_err()),
            "BOGUS is not a valid pin spec"
        );
        assert_eq!(reason(info.to_gpio("").unwrap_err()), " is not a valid pin spec");
        assert_eq!(
            reason(info.to_gpio("GPIO").unwrap_err()),
            "GPIO is not a valid pin spec"
        );
    }

    #[test]
    fn function_lookups() {
        let info = pi3b();
        assert_eq!(info.physical_pin("GPIO4"), Ok(("J8", 7)));
        assert_eq!(
            info.physical_pin("GND"),
            Err(Error::MultiplePins {
                function: "GND".to_string()
            })
        );
        assert_eq!(
            info.physical_pin("GPIO40"),
            Err(Error::NoPins {
                function: "GPIO40".to_string()
            })
        );

        let grounds: Vec<u32> = info.physical_pins("GND").into_iter().map(|(_, n)| n).collect();
        assert_eq!(grounds, [6, 9, 14, 20, 25, 30, 34, 39]);
        assert!(info.physical_pins("nothing").is_empty());
    }

    #[test]
    fn pull_ups() {
        let info = pi3b();
        assert_eq!(info.pulled_up("GPIO2"), Ok(true));
        assert_eq!(info.pulled_up("GPIO4"), Ok(false));
        assert_eq!(info.pulled_up("GPIO40"), Ok(false));
        assert!(matches!(
            info.pulled_up("GND"),
            Err(Error::MultiplePins { .. })
        ));
    }
}
