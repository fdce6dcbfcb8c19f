//! Repeat/end block matching

use crate::command::{Command, ParsedLine};

/// Find the `end` closing the `repeat` at `repeat_index`
///
/// Scans forward tracking nesting depth. Returns the index of the matching
/// `end`, or `None` if the slice ends while the block is still open.
/// Nothing is cached: callers re-scan every time they reach the `repeat`.
pub fn find_matching_end(lines: &[ParsedLine], repeat_index: usize) -> Option<usize> {
    let mut depth: usize = 1;
    for (index, parsed) in lines.iter().enumerate().skip(repeat_index + 1) {
        match parsed.command {
            Command::Repeat { .. } => depth += 1,
            Command::End => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            Command::Set { .. } | Command::Wait { .. } => {}
        }
    }
    None
}
