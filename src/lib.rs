#![no_std]

//! Animation scripts for the bl1nky LED badge.
//!
//! A script is a list of line commands:
//!
//! ```text
//! # comments and blank lines are skipped
//! set 0b101
//! repeat 3
//!     wait 100ms
//!     set 0b010
//! end
//! ```
//!
//! Scripts are parsed into a [`Program`] up front and then run once by an
//! [`Executor`] against a [`Blinker`].

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod blinker;
pub mod block;
pub mod command;
pub mod delay;
pub mod duration;
pub mod error;
pub mod executor;
pub mod hid;
pub mod led_set;
pub mod parser;
pub mod patterns;
pub mod program;
pub mod tracer;

pub use blinker::{Blinker, HardwareError, HardwareErrorKind, NopBlinker};
pub use command::{Command, CommandKind, ParsedLine};
#[cfg(feature = "std")]
pub use delay::StdDelay;
pub use error::{Error, ErrorKind, ParseError};
#[cfg(feature = "std")]
pub use executor::run_reader;
pub use executor::{Executor, RunStats, run_source};
pub use hid::{HidBlinker, ReportTransport};
pub use led_set::{ChannelCount, LedSet};
pub use parser::parse_command;
pub use patterns::BuiltinPattern;
pub use program::Program;
pub use tracer::{NoopTracer, Tracer};

pub use embassy_time::Duration;
