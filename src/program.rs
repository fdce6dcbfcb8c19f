//! Program builder
//!
//! A [`Program`] is the whole script parsed up front. Building either
//! succeeds for every line or fails on the first bad one, so a script with
//! a typo near the end never lights a single LED.

use alloc::vec::Vec;

use crate::command::ParsedLine;
use crate::error::Error;
use crate::led_set::ChannelCount;
use crate::parser::parse_command;

/// Marker starting a comment line
const COMMENT_PREFIX: char = '#';

/// Ordered, line-numbered sequence of parsed commands
///
/// Read-only once built. Block structure is not validated here; an
/// unmatched `repeat` or `end` is reported when execution reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    lines: Vec<ParsedLine>,
}

impl Program {
    /// Build a program from script text
    pub fn parse(source: &str, channels: ChannelCount) -> Result<Self, Error> {
        let mut builder = ProgramBuilder::new(channels);
        for line in source.lines() {
            builder.push_line(line)?;
        }
        Ok(builder.finish())
    }

    /// Build a program from a line-oriented reader
    ///
    /// Read failures surface as [`Error::Read`], separate from syntax errors.
    #[cfg(feature = "std")]
    pub fn from_reader<R: std::io::BufRead>(
        reader: R,
        channels: ChannelCount,
    ) -> Result<Self, Error> {
        let mut builder = ProgramBuilder::new(channels);
        for line in reader.lines() {
            builder.push_line(&line?)?;
        }
        Ok(builder.finish())
    }

    pub fn lines(&self) -> &[ParsedLine] {
        &self.lines
    }

    /// Number of commands, not counting blank or comment lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ParsedLine> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a ParsedLine;
    type IntoIter = core::slice::Iter<'a, ParsedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Incremental builder shared by the text and reader front ends
struct ProgramBuilder {
    channels: ChannelCount,
    line_number: usize,
    lines: Vec<ParsedLine>,
}

impl ProgramBuilder {
    const fn new(channels: ChannelCount) -> Self {
        Self {
            channels,
            line_number: 0,
            lines: Vec::new(),
        }
    }

    fn push_line(&mut self, raw: &str) -> Result<(), Error> {
        self.line_number += 1;
        let line = raw.trim();

        // Skipped lines still advance the line counter
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return Ok(());
        }

        let command = parse_command(line, self.channels).map_err(|reason| Error::Syntax {
            line: self.line_number,
            reason,
        })?;
        self.lines.push(ParsedLine {
            command,
            line: self.line_number,
        });
        Ok(())
    }

    fn finish(self) -> Program {
        #[cfg(feature = "log")]
        log::debug!(
            "pattern: parsed {} commands from {} lines",
            self.lines.len(),
            self.line_number
        );
        Program { lines: self.lines }
    }
}
