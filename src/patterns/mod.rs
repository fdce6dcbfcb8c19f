//! Built-in patterns
//!
//! Scripts shipped with the crate and selectable by name. They are written
//! for the three-LED badge; on a four-channel device they parse as well
//! but leave the last LED dark.

use crate::error::Error;
use crate::led_set::ChannelCount;
use crate::program::Program;

const PATTERN_NAME_BLINK: &str = "blink";
const PATTERN_NAME_LOOP: &str = "loop";
const PATTERN_NAME_WAVE: &str = "wave";
const PATTERN_NAME_BOUNCE: &str = "bounce";
const PATTERN_NAME_CHASE: &str = "chase";
const PATTERN_NAME_PULSE: &str = "pulse";
const PATTERN_NAME_BINARY: &str = "binary";

/// Known built-in patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinPattern {
    Blink,
    Loop,
    Wave,
    Bounce,
    Chase,
    Pulse,
    Binary,
}

impl BuiltinPattern {
    /// Every built-in pattern, in listing order
    pub const ALL: [Self; 7] = [
        Self::Blink,
        Self::Loop,
        Self::Wave,
        Self::Bounce,
        Self::Chase,
        Self::Pulse,
        Self::Binary,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blink => PATTERN_NAME_BLINK,
            Self::Loop => PATTERN_NAME_LOOP,
            Self::Wave => PATTERN_NAME_WAVE,
            Self::Bounce => PATTERN_NAME_BOUNCE,
            Self::Chase => PATTERN_NAME_CHASE,
            Self::Pulse => PATTERN_NAME_PULSE,
            Self::Binary => PATTERN_NAME_BINARY,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_BLINK => Some(Self::Blink),
            PATTERN_NAME_LOOP => Some(Self::Loop),
            PATTERN_NAME_WAVE => Some(Self::Wave),
            PATTERN_NAME_BOUNCE => Some(Self::Bounce),
            PATTERN_NAME_CHASE => Some(Self::Chase),
            PATTERN_NAME_PULSE => Some(Self::Pulse),
            PATTERN_NAME_BINARY => Some(Self::Binary),
            _ => None,
        }
    }

    /// Script text of the pattern
    pub const fn source(self) -> &'static str {
        match self {
            Self::Blink => include_str!("blink.txt"),
            Self::Loop => include_str!("loop.txt"),
            Self::Wave => include_str!("wave.txt"),
            Self::Bounce => include_str!("bounce.txt"),
            Self::Chase => include_str!("chase.txt"),
            Self::Pulse => include_str!("pulse.txt"),
            Self::Binary => include_str!("binary.txt"),
        }
    }

    /// Parse the pattern for a device with `channels` LEDs
    pub fn program(self, channels: ChannelCount) -> Result<Program, Error> {
        Program::parse(self.source(), channels)
    }
}
