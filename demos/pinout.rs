// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  pinout.rs - Board diagram and pin lookup demo for Raspberry Pi boards.
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

use clap::Parser;
use tracing_subscriber::EnvFilter;

use piboard::pi_info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The revision code, in hex (as shown in /proc/cpuinfo).
    revision: String,

    /// What to print: full, board, specs or headers.
    #[arg(short, long, default_value = "full")]
    format: String,

    /// Force colour output.
    #[arg(long, conflicts_with = "mono")]
    color: bool,

    /// Disable colour output.
    #[arg(long)]
    mono: bool,

    /// Pin specifications to resolve to GPIO numbers (e.g. BOARD11, J8:7, WPI0).
    #[arg(short, long = "pin")]
    pins: Vec<String>,

    /// Pin functions to locate on the headers (e.g. GPIO4, GND).
    #[arg(short = 'F', long = "function")]
    functions: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let info = match pi_info(args.revision.as_str()) {
        Ok(info) => info,
        Err(error) if error.is_unknown_pi() => {
            eprintln!("Unknown board {:?}: {}", &args.revision, error);
            return;
        }
        Err(error) => {
            eprintln!("Error decoding revision {:?}: {}", &args.revision, error);
            return;
        }
    };

    let style = match (args.color, args.mono) {
        (true, _) => "color",
        (_, true) => "mono",
        _ => "",
    };

    match info.render(&format!("{} {}", style, args.format)) {
        Ok(text) => println!("{}", text),
        Err(error) => {
            eprintln!("Error rendering {:?}: {}", &args.format, error);
            return;
        }
    }

    if let Some(date) = info.released_on() {
        println!();
        println!("Released around {}", date.format("%B %Y"));
    }

    for spec in &args.pins {
        match info.to_gpio(spec) {
            Ok(gpio) => println!("{} => GPIO{}", spec, gpio),
            Err(error) => eprintln!("{}: {}", spec, error),
        }
    }

    for function in &args.functions {
        let pins = info.physical_pins(function);
        if pins.is_empty() {
            eprintln!("{}: not found on any header", function);
            continue;
        }
        let pulled_up = info.pulled_up(function).unwrap_or(false);
        for (header, number) in pins {
            println!(
                "{} => {}:{}{}",
                function,
                header,
                number,
                if pulled_up { " (pulled up)" } else { "" }
            );
        }
    }
}
