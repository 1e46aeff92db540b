// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/format.rs - Text renderings of boards and headers.
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
 * # `format` Module
 *
 * This module renders [BoardInfo] and [HeaderInfo] as text.
 *
 * What gets rendered is chosen with a format specifier: a whitespace
 * separated list holding at most one of `color` or `mono`, and at most one
 * content word.
 *
 * For boards the content words are `full` (the default), `board`, `specs`
 * and `headers`. For headers they are `full` (the default), `row<n>` and
 * `col<n>`.
 *
 * ## Usage Example
 *
 * ```
 * use piboard::pi_info;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let info = pi_info("a02082")?;
 *
 *     println!("{}", info.render("mono specs")?);
 *     println!("{}", info.headers["J8"].render("mono full")?);
 *
 *     Ok(())
 * }
 * ```
 */

use std::fmt;

use crate::decoder::BoardInfo;
use crate::error::{Error, Result};
use crate::header::{HeaderInfo, PinInfo, gpio_number, is_digits};
use crate::style::Style;
use crate::tables::pins::{GND, NC, V1_8, V3_3, V5};

type FieldFn<'a> = dyn FnMut(&str, &str) -> Result<String> + 'a;

/// Expands a board template.
///
/// Placeholders are `{name}` or `{name:spec}`, where the spec may itself
/// contain `{name}` placeholders. `{{` and `}}` stand for literal braces.
fn render_template(template: &str, field: &mut FieldFn<'_>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => {
                return Err(Error::invalid_format(
                    "single '}' encountered in format string",
                ));
            }
            '{' => {
                let mut name = String::new();
                let mut spec = String::new();
                let mut in_spec = false;
                let mut depth = 0usize;
                let mut closed = false;

                for c in chars.by_ref() {
                    match c {
                        '}' if depth == 0 => {
                            closed = true;
                            break;
                        }
                        ':' if !in_spec => in_spec = true,
                        '{' if in_spec => {
                            depth += 1;
                            spec.push(c);
                        }
                        '}' => {
                            depth -= 1;
                            spec.push(c);
                        }
                        _ if in_spec => spec.push(c),
                        _ => name.push(c),
                    }
                }

                if !closed {
                    return Err(Error::invalid_format(
                        "expected '}' before end of string",
                    ));
                }

                let spec = if spec.contains('{') {
                    render_template(&spec, field)?
                } else {
                    spec
                };
                out.push_str(&field(&name, &spec)?);
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Pads a value according to a string format spec such as `4s` or `>6`.
fn pad(value: &str, spec: &str) -> Result<String> {
    let body = spec.strip_suffix('s').unwrap_or(spec);
    let (align, width) = match body.chars().next() {
        Some(c @ ('<' | '>' | '^')) => (c, &body[1..]),
        _ => ('<', body),
    };
    let width: usize = if width.is_empty() {
        0
    } else if is_digits(width) {
        width
            .parse()
            .map_err(|_| Error::invalid_format(format!("invalid format specifier \"{spec}\"")))?
    } else {
        return Err(Error::invalid_format(format!(
            "invalid format specifier \"{spec}\""
        )));
    };

    Ok(match align {
        '>' => format!("{value:>width$}"),
        '^' => format!("{value:^width$}"),
        _ => format!("{value:<width$}"),
    })
}

fn function_style(function: &str, style: &Style) -> Result<String> {
    let words = match function {
        V5 => "bold red",
        V3_3 | V1_8 => "bold cyan",
        GND | NC => "bold black",
        f if gpio_number(f).is_some() => "bold green",
        _ => "yellow",
    };
    style.code(words)
}

fn style_for(color: Option<bool>) -> &'static str {
    match color {
        Some(true) => "color full",
        Some(false) => "mono full",
        None => "full",
    }
}

struct Cell {
    content: String,
    right: bool,
    style: String,
}

impl HeaderInfo {
    /// Renders the header according to a format specifier.
    ///
    /// `full` draws every pin with its number and function, aligned as on
    /// the board. `row<n>` and `col<n>` draw one glyph per pin of that row
    /// or column, `1` for pin 1 and `o` for the rest, as used in the board
    /// diagrams.
    pub fn render(&self, spec: &str) -> Result<String> {
        let (style, content) = Style::from_style_content(spec)?;
        self.render_content(&style, content)
    }

    fn render_content(&self, style: &Style, content: &str) -> Result<String> {
        if content == "full" {
            return self.render_full(style);
        }
        if let Some(digits) = content.strip_prefix("row").filter(|d| is_digits(d)) {
            return self.render_row(digits, style);
        }
        if let Some(digits) = content.strip_prefix("col").filter(|d| is_digits(d)) {
            return self.render_col(digits, style);
        }
        Err(Error::invalid_format(format!(
            "invalid format specifier \"{content}\""
        )))
    }

    fn render_full(&self, style: &Style) -> Result<String> {
        let mut lines = Vec::new();

        for row in 0..self.rows {
            let mut line = Vec::new();
            for col in 0..self.columns {
                let number = row * self.columns + col + 1;
                let right = col % 2 == 0;
                let Some(pin) = self.pins.get(&number) else {
                    for _ in 0..2 {
                        line.push(Cell {
                            content: String::new(),
                            right: false,
                            style: String::new(),
                        });
                    }
                    continue;
                };

                let function = Cell {
                    content: pin.function.to_string(),
                    right,
                    style: function_style(pin.function, style)?,
                };
                let label = Cell {
                    content: format!("({})", pin.number),
                    right,
                    style: String::new(),
                };
                if right {
                    line.extend([function, label]);
                } else {
                    line.extend([label, function]);
                }
            }
            lines.push(line);
        }

        let width_count = lines.first().map_or(0, Vec::len);
        let widths: Vec<usize> = (0..width_count)
            .map(|i| {
                lines
                    .iter()
                    .map(|line| line[i].content.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let reset = style.code("reset")?;
        let rendered: Vec<String> = lines
            .iter()
            .map(|line| {
                line.iter()
                    .zip(&widths)
                    .map(|(cell, &width)| {
                        if cell.right {
                            format!("{}{:>width$}{}", cell.style, cell.content, reset)
                        } else {
                            format!("{}{:<width$}{}", cell.style, cell.content, reset)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        Ok(rendered.join("\n"))
    }

    fn render_pin(&self, pin: Option<&PinInfo>, style: &Style) -> Result<String> {
        let mut out = style.code("on black")?;
        match pin {
            Some(pin) => {
                out.push_str(&function_style(pin.function, style)?);
                out.push(if pin.number == 1 { '1' } else { 'o' });
            }
            None => out.push(' '),
        }
        out.push_str(&style.code("reset")?);
        Ok(out)
    }

    fn render_row(&self, digits: &str, style: &Style) -> Result<String> {
        let row = digits
            .parse::<u32>()
            .ok()
            .filter(|row| (1..=self.rows).contains(row))
            .ok_or_else(|| {
                Error::invalid_format(format!("invalid row {digits} for header {}", self.name))
            })?;

        let start = (row - 1) * self.columns + 1;
        (start..start + self.columns)
            .map(|n| self.render_pin(self.pins.get(&n), style))
            .collect()
    }

    fn render_col(&self, digits: &str, style: &Style) -> Result<String> {
        let col = digits
            .parse::<u32>()
            .ok()
            .filter(|col| (1..=self.columns).contains(col))
            .ok_or_else(|| {
                Error::invalid_format(format!("invalid col {digits} for header {}", self.name))
            })?;

        (col..=self.rows * self.columns)
            .step_by(self.columns as usize)
            .map(|n| self.render_pin(self.pins.get(&n), style))
            .collect()
    }

    /// Prints the full header diagram to stdout. With `color` unset, colour
    /// is used when stdout is a terminal.
    pub fn pprint(&self, color: Option<bool>) -> Result<()> {
        println!("{}", self.render(style_for(color))?);
        Ok(())
    }
}

impl fmt::Display for HeaderInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render("full").map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

impl BoardInfo {
    /// Renders the board according to a format specifier.
    ///
    /// `board` draws the board diagram, `specs` lists the board's
    /// attributes, `headers` draws every header in full, and `full` joins
    /// all three with blank lines.
    pub fn render(&self, spec: &str) -> Result<String> {
        let (style, content) = Style::from_style_content(spec)?;
        match content {
            "full" => Ok(format!(
                "{}\n\n{}\n\n{}",
                self.render_board(&style)?,
                self.render_specs(&style)?,
                self.render_headers(&style)?
            )),
            "board" => self.render_board(&style),
            "specs" => self.render_specs(&style),
            "headers" => self.render_headers(&style),
            _ => Err(Error::invalid_format(format!(
                "invalid format specifier \"{content}\""
            ))),
        }
    }

    fn render_board(&self, style: &Style) -> Result<String> {
        let model = self.model.to_string();
        render_template(self.board, &mut |name: &str, spec: &str| match name {
            "style" if spec.is_empty() => Ok(style.to_string()),
            "style" => style.code(spec),
            "model" => pad(&model, spec),
            "pcb_revision" => pad(&self.pcb_revision, spec),
            "revision" => pad(&self.revision, spec),
            "released" => pad(self.released, spec),
            "soc" => pad(self.soc, spec),
            "manufacturer" => pad(self.manufacturer, spec),
            "storage" => pad(self.storage, spec),
            _ => match self.headers.get(name) {
                Some(header) => header.render(spec),
                None => Err(Error::invalid_format(format!(
                    "unknown field \"{name}\" in board template"
                ))),
            },
        })
    }

    fn render_specs(&self, style: &Style) -> Result<String> {
        let bold = style.code("bold")?;
        let reset = style.code("reset")?;

        let memory = match self.memory {
            Some(mb) if mb >= 1024 => format!("{}GB", mb / 1024),
            Some(mb) => format!("{mb}MB"),
            None => "Unknown".to_string(),
        };

        let rows = [
            ("Revision           ", self.revision.clone()),
            ("SoC                ", self.soc.to_string()),
            ("RAM                ", memory),
            ("Storage            ", self.storage.to_string()),
            (
                "USB ports          ",
                format!("{} (of which {} USB3)", self.usb, self.usb3),
            ),
            (
                "Ethernet ports     ",
                format!("{} ({}Mbps max. speed)", self.ethernet, self.eth_speed),
            ),
            ("Wi-fi              ", yes_no(self.wifi).to_string()),
            ("Bluetooth          ", yes_no(self.bluetooth).to_string()),
            ("Camera ports (CSI) ", self.csi.to_string()),
            ("Display ports (DSI)", self.dsi.to_string()),
        ];

        Ok(rows
            .iter()
            .map(|(label, value)| format!("{bold}{label}{reset}: {value}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn render_headers(&self, style: &Style) -> Result<String> {
        let bold = style.code("bold")?;
        let reset = style.code("reset")?;

        // The map is keyed by name, so this is already sorted.
        let headers = self
            .headers
            .values()
            .map(|header| {
                Ok(format!(
                    "{bold}{}{reset}:\n{}",
                    header.name,
                    header.render_content(style, "full")?
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(headers.join("\n\n"))
    }

    /// Prints the board diagram, specs and headers to stdout. With `color`
    /// unset, colour is used when stdout is a terminal.
    pub fn pprint(&self, color: Option<bool>) -> Result<()> {
        println!("{}", self.render(style_for(color))?);
        Ok(())
    }
}

impl fmt::Display for BoardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render("full").map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p5() -> HeaderInfo {
        BoardInfo::from_revision(0xe).unwrap().headers["P5"].clone()
    }

    #[test]
    fn header_full_mono() {
        let text = p5().render("mono").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "    5V (1) (2) 3V3   ",
                "GPIO28 (3) (4) GPIO29",
                "GPIO30 (5) (6) GPIO31",
                "   GND (7) (8) GND   ",
            ]
        );
    }

    #[test]
    fn header_full_color() {
        let text = p5().render("color full").unwrap();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("\x1b[1;31m    5V\x1b[0m (1)\x1b[0m"));
        assert!(first.ends_with("\x1b[1;36m3V3   \x1b[0m"));
    }

    #[test]
    fn header_rows_and_columns() {
        let header = p5();
        assert_eq!(header.render("mono row1").unwrap(), "1o");
        assert_eq!(header.render("mono row4").unwrap(), "oo");
        assert_eq!(header.render("mono col1").unwrap(), "1ooo");
        assert_eq!(header.render("mono col2").unwrap(), "oooo");
        assert_eq!(
            header.render("color row1").unwrap(),
            "\x1b[40m\x1b[1;31m1\x1b[0m\x1b[40m\x1b[1;36mo\x1b[0m"
        );
    }

    #[test]
    fn header_bad_specs() {
        let header = p5();
        assert_eq!(
            header.render("mono row5"),
            Err(Error::invalid_format("invalid row 5 for header P5"))
        );
        assert_eq!(
            header.render("mono col3"),
            Err(Error::invalid_format("invalid col 3 for header P5"))
        );
        assert!(header.render("mono row0").is_err());
        assert!(header.render("mono board").is_err());
    }

    #[test]
    fn template_escapes_and_nesting() {
        let mut field = |name: &str, spec: &str| -> Result<String> {
            Ok(format!("<{name}|{spec}>"))
        };
        assert_eq!(
            render_template("a{{b}}c {x:{y} z}", &mut field).unwrap(),
            "a{b}c <x|<y|> z>"
        );
        assert!(render_template("oops }", &mut field).is_err());
        assert!(render_template("{never", &mut field).is_err());
    }

    #[test]
    fn padding() {
        assert_eq!(pad("3B", "4s").unwrap(), "3B  ");
        assert_eq!(pad("3B", ">4").unwrap(), "  3B");
        assert_eq!(pad("Zero W", "4s").unwrap(), "Zero W");
        assert_eq!(pad("1.2", "").unwrap(), "1.2");
        assert!(pad("1.2", "x").is_err());
    }

    #[test]
    fn board_mono() {
        let info = BoardInfo::from_revision(0xa02082).unwrap();
        let text = info.render("mono board").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ",--------------------------------.");
        assert_eq!(lines[1], "| oooooooooooooooooooo J8     +====");
        assert_eq!(lines[2], "| 1ooooooooooooooooooo        | USB");
        assert_eq!(lines[4], "|      Pi Model 3B  V1.2         |");
    }

    #[test]
    fn board_escaped_braces() {
        let info = BoardInfo::from_revision(0xa03140).unwrap();
        let text = info.render("mono board").unwrap();
        assert!(text.contains("}-{"));
        assert!(!text.contains("{style"));
    }

    #[test]
    fn every_board_renders() {
        for revision in [
            0x2, 0xe, 0x7, 0x10, 0x11, 0x12, 0x900021, 0xa01041, 0x900092, 0x900093,
            0x9000c1, 0xa020a0, 0xa020d3, 0x9020e0, 0xa02100, 0xc03111, 0x902120,
            0xc03130, 0xa03140,
        ] {
            let info = BoardInfo::from_revision(revision).unwrap();
            let text = info.render("mono full").unwrap();
            assert!(!text.contains("{style"), "{revision:x}");
            assert!(!text.contains('\x1b'), "{revision:x}");
        }
    }

    #[test]
    fn specs_mono() {
        let info = BoardInfo::from_revision(0xa02082).unwrap();
        let text = info.render("mono specs").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Revision           : a02082");
        assert_eq!(lines[2], "RAM                : 1GB");
        assert_eq!(lines[4], "USB ports          : 4 (of which 0 USB3)");
        assert_eq!(lines[5], "Ethernet ports     : 1 (100Mbps max. speed)");
        assert_eq!(lines[6], "Wi-fi              : yes");
        assert_eq!(lines[9], "Display ports (DSI): 1");

        let info = BoardInfo::from_revision(0x2).unwrap();
        let text = info.render("mono specs").unwrap();
        assert!(text.contains("RAM                : 256MB"));
        assert!(text.contains("Bluetooth          : no"));
    }

    #[test]
    fn headers_sorted_by_name() {
        let info = BoardInfo::from_revision(0xa03140).unwrap();
        let text = info.render("mono headers").unwrap();
        let names: Vec<&str> = text
            .split("\n\n")
            .map(|block| block.lines().next().unwrap())
            .collect();
        assert_eq!(names, ["J2:", "J6:", "J8:", "POE:"]);
    }

    #[test]
    fn full_joins_sections() {
        let info = BoardInfo::from_revision(0xe).unwrap();
        let full = info.render("mono").unwrap();
        let expected = format!(
            "{}\n\n{}\n\n{}",
            info.render("mono board").unwrap(),
            info.render("mono specs").unwrap(),
            info.render("mono headers").unwrap()
        );
        assert_eq!(full, expected);
        assert!(info.render("mono nonsense").is_err());
    }
}
