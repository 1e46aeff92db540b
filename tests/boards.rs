// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  tests/boards.rs - End-to-end tests for board lookups.
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

use piboard::tables::revisions::LEGACY_REVISIONS;
use piboard::{BoardInfo, Error, FixedRevision, Model, current_pi_info, pi_info};

/// One new-style revision per model that has a type code.
const NEW_STYLE: [u32; 17] = [
    0x900000, // A
    0x900011, // B
    0x900021, // A+
    0x900032, // B+
    0xa01041, // 2B
    0x900061, // CM
    0xa02082, // 3B
    0x900092, // Zero
    0xa020a0, // CM3
    0x9000c1, // Zero W
    0xa020d3, // 3B+
    0x9020e0, // 3A+
    0xa02100, // CM3+
    0xc03111, // 4B
    0x902120, // Zero2W
    0xc03130, // 400
    0xa03140, // CM4
];

#[test]
fn legacy_table_decodes_verbatim() {
    for entry in &LEGACY_REVISIONS {
        let info = BoardInfo::from_revision(entry.revision).unwrap();
        assert_eq!(info.revision, format!("{:04x}", entry.revision));
        assert_eq!(info.model, entry.model);
        assert_eq!(info.pcb_revision, entry.pcb_revision);
        assert_eq!(info.released, entry.released);
        assert_eq!(info.soc, entry.soc);
        assert_eq!(info.manufacturer, entry.manufacturer);
        assert_eq!(info.memory, Some(entry.memory));
        assert_eq!(info.storage, entry.storage);
        assert_eq!(info.usb, entry.usb);
        assert_eq!(info.ethernet, entry.ethernet);
        assert_eq!(info.wifi, entry.wifi);
        assert_eq!(info.bluetooth, entry.bluetooth);
        assert_eq!(info.csi, entry.csi);
        assert_eq!(info.dsi, entry.dsi);
        assert_eq!(info.board, entry.board);
        assert_eq!(info.usb3, 0);
        assert_eq!(info.eth_speed, u16::from(entry.ethernet) * 100);

        let names: Vec<&str> = entry.headers.iter().map(|&(name, _)| name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(info.headers.keys().copied().collect::<Vec<_>>(), sorted);
    }
}

#[test]
fn new_style_models() {
    let models: Vec<Model> = NEW_STYLE
        .iter()
        .map(|&rev| BoardInfo::from_revision(rev).unwrap().model)
        .collect();
    assert_eq!(
        models,
        [
            Model::A,
            Model::B,
            Model::APlus,
            Model::BPlus,
            Model::Pi2B,
            Model::CM,
            Model::Pi3B,
            Model::Zero,
            Model::CM3,
            Model::ZeroW,
            Model::Pi3BPlus,
            Model::Pi3APlus,
            Model::CM3Plus,
            Model::Pi4B,
            Model::Zero2W,
            Model::Pi400,
            Model::CM4,
        ]
    );
}

#[test]
fn headers_are_contiguous() {
    let all = NEW_STYLE
        .iter()
        .chain(LEGACY_REVISIONS.iter().map(|entry| &entry.revision));

    for &revision in all {
        let info = BoardInfo::from_revision(revision).unwrap();
        assert!(!info.headers.is_empty(), "{revision:x}");
        for (name, header) in &info.headers {
            assert_eq!(*name, header.name);
            let expected: Vec<u32> = (1..=header.rows * header.columns).collect();
            let actual: Vec<u32> = header.pins.keys().copied().collect();
            assert_eq!(actual, expected, "{revision:x} {name}");
            for pin in header.pins.values() {
                assert_eq!(pin.row, (pin.number - 1) / header.columns + 1);
                assert_eq!(pin.col, (pin.number - 1) % header.columns + 1);
            }
        }
    }
}

#[test]
fn gpio_round_trip() {
    for &revision in &NEW_STYLE {
        let info = BoardInfo::from_revision(revision).unwrap();
        if info.physical_pins("GPIO4").is_empty() {
            continue;
        }
        assert_eq!(info.to_gpio("GPIO4"), info.to_gpio(4), "{revision:x}");
    }
}

#[test]
fn ground_pins() {
    for &revision in &NEW_STYLE {
        let info = BoardInfo::from_revision(revision).unwrap();
        let grounds = info.physical_pins("GND");
        if grounds.len() > 1 {
            assert_eq!(
                info.physical_pin("GND"),
                Err(Error::MultiplePins {
                    function: "GND".to_string()
                })
            );
        }
    }

    let info = pi_info(0xc03111).unwrap();
    assert_eq!(info.physical_pins("GND").len(), 8);
}

#[test]
fn board_one_is_power() {
    for &revision in &NEW_STYLE {
        let info = BoardInfo::from_revision(revision).unwrap();
        let main = ["P1", "J8", "SODIMM"]
            .into_iter()
            .find(|name| info.headers.contains_key(*name))
            .unwrap();
        let function = info.headers[main].pins[&1].function;
        match piboard::header::gpio_number(function) {
            Some(gpio) => assert_eq!(info.to_gpio("BOARD1"), Ok(gpio as u8)),
            None => assert!(matches!(
                info.to_gpio("BOARD1"),
                Err(Error::InvalidPin { .. })
            )),
        }
    }
}

#[test]
fn invalid_specs() {
    let info = pi_info("a02082").unwrap();
    assert!(matches!(info.to_gpio(9999), Err(Error::InvalidPin { .. })));
    assert!(matches!(info.to_gpio("BOGUS"), Err(Error::InvalidPin { .. })));
}

#[test]
fn unknown_revisions() {
    let err = pi_info(0xff).unwrap_err();
    assert_eq!(err, Error::UnknownRevision { revision: 0xff });
    assert!(err.is_unknown_pi());

    let err = pi_info("not hex").unwrap_err();
    assert!(matches!(err, Error::InvalidRevision { .. }));
    assert!(!err.is_unknown_pi());
}

#[test]
fn revision_inputs_agree() {
    let from_int = pi_info(0xa02082).unwrap();
    assert_eq!(pi_info("a02082").unwrap(), from_int);
    assert_eq!(pi_info("0xA02082\n").unwrap(), from_int);
    assert_eq!(pi_info(b"a02082").unwrap(), from_int);
    assert_eq!(pi_info(String::from("a02082")).unwrap(), from_int);
}

#[test]
fn provider_supplies_current_board() {
    let info = current_pi_info(&FixedRevision(0xa020d3)).unwrap();
    assert_eq!(info.model, Model::Pi3BPlus);
    assert!(info.headers.contains_key("POE"));
    assert_eq!(current_pi_info(&FixedRevision(0x1)), Err(Error::NotAPi));
}

#[test]
fn mono_rendering_has_no_escapes() {
    let info = pi_info(0x10).unwrap();
    let text = info.render("mono full").unwrap();
    assert!(!text.contains('\x1b'));
    assert!(text.contains("Revision           : 0010"));
    assert!(text.contains("J8:\n"));

    let colored = info.render("color specs").unwrap();
    assert!(colored.starts_with("\x1b[1mRevision           \x1b[0m: 0010"));
}
