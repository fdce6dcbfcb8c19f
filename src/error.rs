//! Error types
//!
//! [`ParseError`] explains why a single line was rejected. [`Error`] is what
//! building or running a program returns: it carries the line the failure
//! belongs to and groups into the [`ErrorKind`] classes callers act on.

use alloc::string::String;
use core::fmt;

use crate::blinker::HardwareError;
use crate::led_set::ChannelCount;

/// Reason a single script line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line contained no tokens
    Empty,
    /// Leading keyword is not a known command
    UnknownCommand(String),
    /// Command got a different number of arguments than it takes
    ArgumentCount {
        command: &'static str,
        usage: &'static str,
        got: usize,
    },
    /// `set` argument is not a binary literal
    InvalidLedState(String),
    /// `set` argument has more bits than the device has channels
    LedStateOverflow {
        literal: String,
        channels: ChannelCount,
    },
    /// `wait` argument is not a duration
    InvalidDuration(String),
    /// `repeat` argument is not an integer
    InvalidCount(String),
    /// `repeat` count below one
    CountOutOfRange(i64),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty command"),
            Self::UnknownCommand(keyword) => write!(f, "unknown command: {keyword}"),
            Self::ArgumentCount {
                command,
                usage,
                got,
            } => write!(
                f,
                "invalid {command} command format, expected '{usage}', got {got} arguments"
            ),
            Self::InvalidLedState(literal) => write!(
                f,
                "parse LED state {literal:?} (expected binary form like 0b101)"
            ),
            Self::LedStateOverflow { literal, channels } => write!(
                f,
                "LED state {literal:?} does not fit {} channels",
                channels.get()
            ),
            Self::InvalidDuration(literal) => {
                write!(f, "parse duration {literal:?} (expected e.g. 100ms or 1s)")
            }
            Self::InvalidCount(literal) => write!(f, "parse repeat count {literal:?}"),
            Self::CountOutOfRange(count) => {
                write!(f, "repeat count must be at least 1, got {count}")
            }
        }
    }
}

impl core::error::Error for ParseError {}

/// Error class of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed line, raised before any hardware interaction
    Syntax,
    /// Input stream could not be read
    Read,
    /// Unmatched `repeat` or `end`, raised when reached during execution
    Structure,
    /// Failure reported by the hardware capability
    Hardware,
}

/// Error returned when building or executing a program
#[derive(Debug)]
pub enum Error {
    /// Line could not be parsed
    Syntax { line: usize, reason: ParseError },
    /// Input stream failed while reading lines
    #[cfg(feature = "std")]
    Read(std::io::Error),
    /// `repeat` without a matching `end`
    UnmatchedRepeat { line: usize },
    /// `end` without an enclosing `repeat`
    UnmatchedEnd { line: usize },
    /// Hardware capability failed
    ///
    /// `line` is the command that triggered the call, if any.
    Hardware {
        line: Option<usize>,
        source: HardwareError,
    },
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } => ErrorKind::Syntax,
            #[cfg(feature = "std")]
            Self::Read(_) => ErrorKind::Read,
            Self::UnmatchedRepeat { .. } | Self::UnmatchedEnd { .. } => ErrorKind::Structure,
            Self::Hardware { .. } => ErrorKind::Hardware,
        }
    }

    /// Script line the error refers to
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. }
            | Self::UnmatchedRepeat { line }
            | Self::UnmatchedEnd { line } => Some(*line),
            #[cfg(feature = "std")]
            Self::Read(_) => None,
            Self::Hardware { line, .. } => *line,
        }
    }

    /// Advisory flag: retrying the whole run cannot succeed
    ///
    /// Only hardware errors can be transient; script errors never go away
    /// on their own.
    pub const fn is_permanent(&self) -> bool {
        match self {
            Self::Hardware { source, .. } => source.is_permanent(),
            _ => true,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { line, reason } => write!(f, "line {line}: {reason}"),
            #[cfg(feature = "std")]
            Self::Read(err) => write!(f, "read input: {err}"),
            Self::UnmatchedRepeat { line } => {
                write!(f, "line {line}: repeat without matching 'end'")
            }
            Self::UnmatchedEnd { line } => {
                write!(f, "line {line}: 'end' without matching 'repeat'")
            }
            Self::Hardware {
                line: Some(line),
                source,
            } => write!(f, "line {line}: set LEDs: {source}"),
            Self::Hardware { line: None, source } => fmt::Display::fmt(source, f),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Syntax { reason, .. } => Some(reason),
            #[cfg(feature = "std")]
            Self::Read(err) => Some(err),
            Self::Hardware { source, .. } => Some(source),
            Self::UnmatchedRepeat { .. } | Self::UnmatchedEnd { .. } => None,
        }
    }
}

impl From<HardwareError> for Error {
    fn from(source: HardwareError) -> Self {
        Self::Hardware { line: None, source }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Read(err)
    }
}
