//! `logex` command-line tool.
//!
//! Usage:
//!   logex strip [FILE] [--all]          Print a log with markup removed
//!   logex color <HEX>                   Log the report for a color
//!   logex paint <TEXT>... [options]     Wrap text in markup

use clap::Parser;
use logex::Console;
use logex::cli::{Cli, Command, cmd_color, cmd_paint, cmd_strip, load_profile};
use logex::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let profile = match load_profile(cli.profile.as_ref()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error loading profile: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_profile(&profile);
    let console = Console::from_profile(&profile);

    let result = match cli.command {
        Command::Strip { file, all } => cmd_strip(file.as_ref(), all),
        Command::Color { hex } => {
            cmd_color(&console, &hex);
            Ok(())
        }
        Command::Paint {
            text,
            color,
            bold,
            italic,
            size,
            raw,
        } => {
            cmd_paint(&text.join(" "), color.as_deref(), bold, italic, size, raw);
            Ok(())
        }
    };

    let _ = console.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
