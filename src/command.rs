use core::fmt;

use embassy_time::Duration;

use crate::duration::DisplayDuration;
use crate::led_set::LedSet;

/// A single pattern instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch the LEDs to the given state
    Set { state: LedSet },
    /// Block for the given duration
    Wait { duration: Duration },
    /// Run the block up to the matching `end` `count` times
    Repeat { count: u32 },
    /// Close the innermost open `repeat` block
    End,
}

/// Command kind without its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Set,
    Wait,
    Repeat,
    End,
}

impl Command {
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Set { .. } => CommandKind::Set,
            Self::Wait { .. } => CommandKind::Wait,
            Self::Repeat { .. } => CommandKind::Repeat,
            Self::End => CommandKind::End,
        }
    }
}

impl CommandKind {
    /// Canonical keyword of the command
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Wait => "wait",
            Self::Repeat => "repeat",
            Self::End => "end",
        }
    }
}

/// Renders the command in script syntax
///
/// The output parses back into an equal command under the same channel count.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { state } => write!(f, "set {state}"),
            Self::Wait { duration } => write!(f, "wait {}", DisplayDuration(*duration)),
            Self::Repeat { count } => write!(f, "repeat {count}"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Command together with the script line it came from
///
/// Line numbers are 1-based and count blank and comment lines too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine {
    pub command: Command,
    pub line: usize,
}
