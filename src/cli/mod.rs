//! Command-line interface, built with Clap.

use crate::console::Console;
use crate::fmt::{self, Color, style};
use crate::profile::Profile;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// logex - rich-text log helpers from the command line.
#[derive(Parser)]
#[command(
    name = "logex",
    version,
    about = "Rich-text log helpers from the command line"
)]
pub struct Cli {
    /// Profile to load instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a saved log (or stdin) with markup removed.
    Strip {
        /// File to read (reads stdin if omitted or "-")
        file: Option<PathBuf>,
        /// Also remove size tags
        #[arg(long)]
        all: bool,
    },
    /// Log the report for a color.
    Color {
        /// Color as RRGGBB or RRGGBBAA, with or without '#'
        hex: String,
    },
    /// Wrap text in markup.
    Paint {
        /// Text to wrap
        text: Vec<String>,
        /// Color as RRGGBB or RRGGBBAA
        #[arg(long, value_name = "HEX")]
        color: Option<String>,
        #[arg(long)]
        bold: bool,
        #[arg(long)]
        italic: bool,
        #[arg(long, value_name = "N")]
        size: Option<u32>,
        /// Print the markup instead of rendering it
        #[arg(long)]
        raw: bool,
    },
}

/// Loads the profile named on the command line, or the default one.
///
/// # Errors
/// Propagates profile loading errors.
pub fn load_profile(path: Option<&PathBuf>) -> Result<Profile, crate::Error> {
    path.map_or_else(Profile::load, |p| Profile::load_from(p))
}

/// # Errors
/// I/O errors reading the input or writing stdout.
pub fn cmd_strip(file: Option<&PathBuf>, all: bool) -> Result<(), crate::Error> {
    let content = match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let plain = if all {
        fmt::strip_all_markup(&content)
    } else {
        fmt::strip_markup(&content)
    };
    print!("{plain}");
    Ok(())
}

pub fn cmd_color(console: &Console, hex: &str) {
    console.info(Color::from_hex(hex));
}

#[must_use]
pub fn paint(
    text: &str,
    color: Option<&str>,
    bold: bool,
    italic: bool,
    size: Option<u32>,
) -> String {
    let mut out = text.to_string();
    if let Some(hex) = color {
        out = fmt::color(&out, Color::from_hex(hex));
    }
    if bold {
        out = fmt::bold(&out);
    }
    if italic {
        out = fmt::italic(&out);
    }
    if let Some(n) = size {
        out = fmt::sized(&out, n);
    }
    out
}

pub fn cmd_paint(
    text: &str,
    color: Option<&str>,
    bold: bool,
    italic: bool,
    size: Option<u32>,
    raw: bool,
) {
    let marked = paint(text, color, bold, italic, size);
    if raw {
        println!("{marked}");
    } else {
        println!("{}", style::render(&style::parse(&marked)));
    }
}
