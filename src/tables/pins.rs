// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/tables/pins.rs - Pin function maps for every known header.
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

//! Pin function maps for every known header.
//!
//! Each table is indexed by `pin number - 1`, so pin numbers are contiguous
//! by construction. Odd pins sit in the first column and even pins in the
//! second, which is why every table is laid out two entries per line.

/// 1.8V supply.
pub const V1_8: &str = "1V8";
/// 3.3V supply.
pub const V3_3: &str = "3V3";
/// 5V supply.
pub const V5: &str = "5V";
/// Electrical ground.
pub const GND: &str = "GND";
/// Not connected.
pub const NC: &str = "NC";

/// The function of a single pin in a static header table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinDef {
    /// The label of the pin, e.g. `"GPIO4"` or `"GND"`.
    pub function: &'static str,
    /// Whether a pull-up resistor is permanently fitted to this pin.
    pub pull_up: bool,
}

const fn pin(function: &'static str) -> PinDef {
    PinDef {
        function,
        pull_up: false,
    }
}

const fn pulled(function: &'static str) -> PinDef {
    PinDef {
        function,
        pull_up: true,
    }
}

/// The 26-pin P1 header of the original model B (PCB revision 1.0).
pub const REV1_P1: [PinDef; 26] = [
    pin(V3_3),                        pin(V5),                          // 1, 2
    pulled("GPIO0"),                  pin(V5),                          // 3, 4
    pulled("GPIO1"),                  pin(GND),                         // 5, 6
    pin("GPIO4"),                     pin("GPIO14"),                    // 7, 8
    pin(GND),                         pin("GPIO15"),                    // 9, 10
    pin("GPIO17"),                    pin("GPIO18"),                    // 11, 12
    pin("GPIO21"),                    pin(GND),                         // 13, 14
    pin("GPIO22"),                    pin("GPIO23"),                    // 15, 16
    pin(V3_3),                        pin("GPIO24"),                    // 17, 18
    pin("GPIO10"),                    pin(GND),                         // 19, 20
    pin("GPIO9"),                     pin("GPIO25"),                    // 21, 22
    pin("GPIO11"),                    pin("GPIO8"),                     // 23, 24
    pin(GND),                         pin("GPIO7"),                     // 25, 26
];

/// The 26-pin P1 header from PCB revision 2.0 onwards.
pub const REV2_P1: [PinDef; 26] = [
    pin(V3_3),                        pin(V5),                          // 1, 2
    pulled("GPIO2"),                  pin(V5),                          // 3, 4
    pulled("GPIO3"),                  pin(GND),                         // 5, 6
    pin("GPIO4"),                     pin("GPIO14"),                    // 7, 8
    pin(GND),                         pin("GPIO15"),                    // 9, 10
    pin("GPIO17"),                    pin("GPIO18"),                    // 11, 12
    pin("GPIO27"),                    pin(GND),                         // 13, 14
    pin("GPIO22"),                    pin("GPIO23"),                    // 15, 16
    pin(V3_3),                        pin("GPIO24"),                    // 17, 18
    pin("GPIO10"),                    pin(GND),                         // 19, 20
    pin("GPIO9"),                     pin("GPIO25"),                    // 21, 22
    pin("GPIO11"),                    pin("GPIO8"),                     // 23, 24
    pin(GND),                         pin("GPIO7"),                     // 25, 26
];

/// The 8-pin P5 header, unpopulated by default, on PCB revision 2.0.
pub const REV2_P5: [PinDef; 8] = [
    pin(V5),                          pin(V3_3),                        // 1, 2
    pin("GPIO28"),                    pin("GPIO29"),                    // 3, 4
    pin("GPIO30"),                    pin("GPIO31"),                    // 5, 6
    pin(GND),                         pin(GND),                         // 7, 8
];

/// The 40-pin J8 header used from the B+ onwards.
pub const PLUS_J8: [PinDef; 40] = [
    pin(V3_3),                        pin(V5),                          // 1, 2
    pulled("GPIO2"),                  pin(V5),                          // 3, 4
    pulled("GPIO3"),                  pin(GND),                         // 5, 6
    pin("GPIO4"),                     pin("GPIO14"),                    // 7, 8
    pin(GND),                         pin("GPIO15"),                    // 9, 10
    pin("GPIO17"),                    pin("GPIO18"),                    // 11, 12
    pin("GPIO27"),                    pin(GND),                         // 13, 14
    pin("GPIO22"),                    pin("GPIO23"),                    // 15, 16
    pin(V3_3),                        pin("GPIO24"),                    // 17, 18
    pin("GPIO10"),                    pin(GND),                         // 19, 20
    pin("GPIO9"),                     pin("GPIO25"),                    // 21, 22
    pin("GPIO11"),                    pin("GPIO8"),                     // 23, 24
    pin(GND),                         pin("GPIO7"),                     // 25, 26
    pin("GPIO0"),                     pin("GPIO1"),                     // 27, 28
    pin("GPIO5"),                     pin(GND),                         // 29, 30
    pin("GPIO6"),                     pin("GPIO12"),                    // 31, 32
    pin("GPIO13"),                    pin(GND),                         // 33, 34
    pin("GPIO19"),                    pin("GPIO16"),                    // 35, 36
    pin("GPIO26"),                    pin("GPIO20"),                    // 37, 38
    pin(GND),                         pin("GPIO21"),                    // 39, 40
];

/// The 4-pin Power-over-Ethernet header.
pub const PLUS_POE: [PinDef; 4] = [
    pin("TR01"),                      pin("TR00"),                      // 1, 2
    pin("TR03"),                      pin("TR02"),                      // 3, 4
];

/// The 200-pin SODIMM edge connector of the original compute module.
pub const CM_SODIMM: [PinDef; 200] = [
    pin(GND),                         pin("EMMC DISABLE N"),            // 1, 2
    pin("GPIO0"),                     pin(NC),                          // 3, 4
    pin("GPIO1"),                     pin(NC),                          // 5, 6
    pin(GND),                         pin(NC),                          // 7, 8
    pin("GPIO2"),                     pin(NC),                          // 9, 10
    pin("GPIO3"),                     pin(NC),                          // 11, 12
    pin(GND),                         pin(NC),                          // 13, 14
    pin("GPIO4"),                     pin(NC),                          // 15, 16
    pin("GPIO5"),                     pin(NC),                          // 17, 18
    pin(GND),                         pin(NC),                          // 19, 20
    pin("GPIO6"),                     pin(NC),                          // 21, 22
    pin("GPIO7"),                     pin(NC),                          // 23, 24
    pin(GND),                         pin(GND),                         // 25, 26
    pin("GPIO8"),                     pin("GPIO28"),                    // 27, 28
    pin("GPIO9"),                     pin("GPIO29"),                    // 29, 30
    pin(GND),                         pin(GND),                         // 31, 32
    pin("GPIO10"),                    pin("GPIO30"),                    // 33, 34
    pin("GPIO11"),                    pin("GPIO31"),                    // 35, 36
    pin(GND),                         pin(GND),                         // 37, 38
    pin("GPIO0-27 VREF"),             pin("GPIO0-27 VREF"),             // 39, 40
    pin("GPIO28-45 VREF"),            pin("GPIO28-45 VREF"),            // 41, 42
    pin(GND),                         pin(GND),                         // 43, 44
    pin("GPIO12"),                    pin("GPIO32"),                    // 45, 46
    pin("GPIO13"),                    pin("GPIO33"),                    // 47, 48
    pin(GND),                         pin(GND),                         // 49, 50
    pin("GPIO14"),                    pin("GPIO34"),                    // 51, 52
    pin("GPIO15"),                    pin("GPIO35"),                    // 53, 54
    pin(GND),                         pin(GND),                         // 55, 56
    pin("GPIO16"),                    pin("GPIO36"),                    // 57, 58
    pin("GPIO17"),                    pin("GPIO37"),                    // 59, 60
    pin(GND),                         pin(GND),                         // 61, 62
    pin("GPIO18"),                    pin("GPIO38"),                    // 63, 64
    pin("GPIO19"),                    pin("GPIO39"),                    // 65, 66
    pin(GND),                         pin(GND),                         // 67, 68
    pin("GPIO20"),                    pin("GPIO40"),                    // 69, 70
    pin("GPIO21"),                    pin("GPIO41"),                    // 71, 72
    pin(GND),                         pin(GND),                         // 73, 74
    pin("GPIO22"),                    pin("GPIO42"),                    // 75, 76
    pin("GPIO23"),                    pin("GPIO43"),                    // 77, 78
    pin(GND),                         pin(GND),                         // 79, 80
    pin("GPIO24"),                    pin("GPIO44"),                    // 81, 82
    pin("GPIO25"),                    pin("GPIO45"),                    // 83, 84
    pin(GND),                         pin(GND),                         // 85, 86
    pin("GPIO26"),                    pin("GPIO46 1V8"),                // 87, 88
    pin("GPIO27"),                    pin("GPIO47 1V8"),                // 89, 90
    pin(GND),                         pin(GND),                         // 91, 92
    pin("DSI0 DN1"),                  pin("DSI1 DP0"),                  // 93, 94
    pin("DSI0 DP1"),                  pin("DSI1 DN0"),                  // 95, 96
    pin(GND),                         pin(GND),                         // 97, 98
    pin("DSI0 DN0"),                  pin("DSI1 CP"),                   // 99, 100
    pin("DSI0 DP0"),                  pin("DSI1 CN"),                   // 101, 102
    pin(GND),                         pin(GND),                         // 103, 104
    pin("DSI0 CN"),                   pin("DSI1 DP3"),                  // 105, 106
    pin("DSI0 CP"),                   pin("DSI1 DN3"),                  // 107, 108
    pin(GND),                         pin(GND),                         // 109, 110
    pin("HDMI CK N"),                 pin("DSI1 DP2"),                  // 111, 112
    pin("HDMI CK P"),                 pin("DSI1 DN2"),                  // 113, 114
    pin(GND),                         pin(GND),                         // 115, 116
    pin("HDMI D0 N"),                 pin("DSI1 DP1"),                  // 117, 118
    pin("HDMI D0 P"),                 pin("DSI1 DN1"),                  // 119, 120
    pin(GND),                         pin(GND),                         // 121, 122
    pin("HDMI D1 N"),                 pin(NC),                          // 123, 124
    pin("HDMI D1 P"),                 pin(NC),                          // 125, 126
    pin(GND),                         pin(NC),                          // 127, 128
    pin("HDMI D2 N"),                 pin(NC),                          // 129, 130
    pin("HDMI D2 P"),                 pin(NC),                          // 131, 132
    pin(GND),                         pin(GND),                         // 133, 134
    pin("CAM1 DP3"),                  pin("CAM0 DP0"),                  // 135, 136
    pin("CAM1 DN3"),                  pin("CAM0 DN0"),                  // 137, 138
    pin(GND),                         pin(GND),                         // 139, 140
    pin("CAM1 DP2"),                  pin("CAM0 CP"),                   // 141, 142
    pin("CAM1 DN2"),                  pin("CAM0 CN"),                   // 143, 144
    pin(GND),                         pin(GND),                         // 145, 146
    pin("CAM1 CP"),                   pin("CAM0 DP1"),                  // 147, 148
    pin("CAM1 CN"),                   pin("CAM0 DN1"),                  // 149, 150
    pin(GND),                         pin(GND),                         // 151, 152
    pin("CAM1 DP1"),                  pin(NC),                          // 153, 154
    pin("CAM1 DN1"),                  pin(NC),                          // 155, 156
    pin(GND),                         pin(NC),                          // 157, 158
    pin("CAM1 DP0"),                  pin(NC),                          // 159, 160
    pin("CAM1 DN0"),                  pin(NC),                          // 161, 162
    pin(GND),                         pin(GND),                         // 163, 164
    pin("USB DP"),                    pin("TVDAC"),                     // 165, 166
    pin("USB DM"),                    pin("USB OTGID"),                 // 167, 168
    pin(GND),                         pin(GND),                         // 169, 170
    pin("HDMI CEC"),                  pin("VC TRST N"),                 // 171, 172
    pin("HDMI SDA"),                  pin("VC TDI"),                    // 173, 174
    pin("HDMI SCL"),                  pin("VC TMS"),                    // 175, 176
    pin("RUN"),                       pin("VC TDO"),                    // 177, 178
    pin("VDD CORE"),                  pin("VC TCK"),                    // 179, 180
    pin(GND),                         pin(GND),                         // 181, 182
    pin(V1_8),                        pin(V1_8),                        // 183, 184
    pin(V1_8),                        pin(V1_8),                        // 185, 186
    pin(GND),                         pin(GND),                         // 187, 188
    pin("VDAC"),                      pin("VDAC"),                      // 189, 190
    pin(V3_3),                        pin(V3_3),                        // 191, 192
    pin(V3_3),                        pin(V3_3),                        // 193, 194
    pin(GND),                         pin(GND),                         // 195, 196
    pin("VBAT"),                      pin("VBAT"),                      // 197, 198
    pin("VBAT"),                      pin("VBAT"),                      // 199, 200
];

/// The SODIMM edge connector of the CM3 and CM3+, which reassigns a handful
/// of the CM1's unconnected pins.
pub const CM3_SODIMM: [PinDef; 200] = {
    let mut pins = CM_SODIMM;
    // Indexed by pin number - 1.
    pins[3] = pin("NC / SDX VREF");
    pins[5] = pin("NC / SDX VREF");
    pins[7] = pin(GND);
    pins[9] = pin("NC / SDX CLK");
    pins[11] = pin("NC / SDX CMD");
    pins[13] = pin(GND);
    pins[15] = pin("NC / SDX D0");
    pins[17] = pin("NC / SDX D1");
    pins[19] = pin(GND);
    pins[21] = pin("NC / SDX D2");
    pins[23] = pin("NC / SDX D3");
    pins[87] = pin("HDMI HPD N 1V8");
    pins[89] = pin("EMMC EN N 1V8");
    pins
};

/// The J6 display/camera jumper block on the CM4 IO board.
pub const CM4_J6: [PinDef; 4] = [
    pin("1-2 CAM0+DISP0"),            pin("1-2 CAM0+DISP0"),            // 1, 2
    pin("3-4 CAM0+DISP0"),            pin("3-4 CAM0+DISP0"),            // 3, 4
];

/// The J2 jumper block on the CM4 IO board.
pub const CM4_J2: [PinDef; 14] = [
    pin("1-2 DISABLE eMMC BOOT"),     pin("1-2 DISABLE eMMC BOOT"),     // 1, 2
    pin("3-4 WRITE-PROT EEPROM"),     pin("3-4 WRITE-PROT EEPROM"),     // 3, 4
    pin("UNKNOWN"),                   pin("UNKNOWN"),                   // 5, 6
    pin("UNKNOWN"),                   pin("UNKNOWN"),                   // 7, 8
    pin("UNKNOWN"),                   pin("UNKNOWN"),                   // 9, 10
    pin("UNKNOWN"),                   pin("UNKNOWN"),                   // 11, 12
    pin("UNKNOWN"),                   pin("UNKNOWN"),                   // 13, 14
];
