//! Line parser
//!
//! Turns one trimmed, non-comment script line into a [`Command`].
//! Parsing is pure: it never touches the device and the same line always
//! gives the same result.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::command::Command;
use crate::duration::parse_duration;
use crate::error::ParseError;
use crate::led_set::{ChannelCount, LedSet};

const SET_USAGE: &str = "set <state>";
const WAIT_USAGE: &str = "wait <duration>";
const REPEAT_USAGE: &str = "repeat <count>";
const END_USAGE: &str = "end";

/// Parse a single script line
///
/// `channels` is the LED count of the target device and bounds `set`
/// literals.
pub fn parse_command(line: &str, channels: ChannelCount) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Err(ParseError::Empty);
    };
    let args: Vec<&str> = tokens.collect();

    match keyword.to_ascii_lowercase().as_str() {
        "set" => parse_set(single_arg("set", SET_USAGE, &args)?, channels),
        "wait" | "delay" => parse_wait(single_arg("wait", WAIT_USAGE, &args)?),
        "repeat" => parse_repeat(single_arg("repeat", REPEAT_USAGE, &args)?),
        "end" => {
            if args.is_empty() {
                Ok(Command::End)
            } else {
                Err(ParseError::ArgumentCount {
                    command: "end",
                    usage: END_USAGE,
                    got: args.len(),
                })
            }
        }
        _ => Err(ParseError::UnknownCommand(keyword.to_string())),
    }
}

/// Return the only argument of a command or an argument count error
fn single_arg<'a>(
    command: &'static str,
    usage: &'static str,
    args: &[&'a str],
) -> Result<&'a str, ParseError> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(ParseError::ArgumentCount {
            command,
            usage,
            got: args.len(),
        }),
    }
}

fn parse_set(literal: &str, channels: ChannelCount) -> Result<Command, ParseError> {
    let lowered = literal.to_ascii_lowercase();
    let digits = lowered.strip_prefix("0b").unwrap_or(&lowered);
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(ParseError::InvalidLedState(literal.to_string()));
    }

    let overflow = || ParseError::LedStateOverflow {
        literal: String::from(literal),
        channels,
    };
    let bits = u8::from_str_radix(digits, 2).map_err(|_| overflow())?;
    let state = LedSet::new(bits, channels).ok_or_else(overflow)?;
    Ok(Command::Set { state })
}

fn parse_wait(literal: &str) -> Result<Command, ParseError> {
    let duration =
        parse_duration(literal).ok_or_else(|| ParseError::InvalidDuration(literal.to_string()))?;
    Ok(Command::Wait { duration })
}

fn parse_repeat(literal: &str) -> Result<Command, ParseError> {
    let count: i64 = literal
        .parse()
        .map_err(|_| ParseError::InvalidCount(literal.to_string()))?;
    if count < 1 {
        return Err(ParseError::CountOutOfRange(count));
    }
    let count = u32::try_from(count).map_err(|_| ParseError::InvalidCount(literal.to_string()))?;
    Ok(Command::Repeat { count })
}
