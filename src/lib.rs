//! `logex` - structured collection formatting and rich-text markup for application logs.
//!
//! - Sequences, sets and mappings rendered as typed, index-annotated reports
//! - Inline rich-text markup (`<b>`, `<i>`, `<size=n>`, `<color=#RRGGBBAA>`)
//!   and a sanitizer that strips it again
//! - A console façade that renders any payload shape and fans it out to sinks
//! - Log recording to a plain-text file with markup removed
//!
//! # Example
//!
//! ```
//! use logex::{Console, Level, Payload, Profile};
//! use std::collections::BTreeMap;
//!
//! let console = Console::builder()
//!     .level(Level::Info)
//!     .profile(Profile::default())
//!     .terminal()
//!         .colors(false)
//!         .done()
//!     .build();
//!
//! console.info("Application started");
//! console.info(Payload::sequence(&[1, 2, 3]));
//!
//! let scores = BTreeMap::from([("alice", 3), ("bob", 5)]);
//! console.info(Payload::mapping(&scores));
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `logex` command-line tool

pub mod console;
mod error;
pub mod fmt;
pub mod inspect;
pub mod internal;
pub mod level;
pub mod profile;
pub mod record;
pub mod sink;

#[cfg(feature = "cli")]
pub mod cli;

pub use console::{Console, ConsoleBuilder, Context, LogOptions, Payload};
pub use error::Error;
pub use fmt::{Color, RichText, strip_markup};
pub use inspect::{Inspect, MarkerColors, TypeKind};
pub use level::Level;
pub use profile::Profile;
pub use record::Recorder;
pub use sink::{LogEvent, Sink, TerminalSink};
