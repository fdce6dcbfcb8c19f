//! Pattern executor
//!
//! Walks a [`Program`] with a single cursor, applying `set` through the
//! [`Blinker`] and `wait` through the injected delay. Each `repeat` pushes
//! a scope covering the lines between it and its matching `end` onto a heap
//! stack, which is replayed until its count is used up. The first error of any kind stops the run; effects already
//! applied to the device stay applied.
//!
//! An executor runs exactly one program: [`Executor::run`] consumes it, so
//! a finished run (successful or failed) cannot be resumed.

use alloc::vec;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::blinker::Blinker;
use crate::block::find_matching_end;
use crate::command::{Command, ParsedLine};
use crate::delay::block_for;
use crate::error::Error;
use crate::led_set::ChannelCount;
use crate::program::Program;
use crate::tracer::{NoopTracer, Tracer};

/// Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Commands dispatched, counting every iteration of a repeat block
    pub commands: usize,
    /// Successful `set_leds` calls
    pub sets: usize,
    /// Total time spent in `wait` commands, saturating at `Duration::MAX`
    pub waited: Duration,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            commands: 0,
            sets: 0,
            waited: Duration::MIN,
        }
    }
}

/// Runs a program against an already opened blinker
///
/// The blinker is borrowed exclusively for the run and is neither opened
/// nor closed by the executor.
pub struct Executor<'a, B: Blinker + ?Sized, D: DelayNs, T: Tracer = NoopTracer> {
    blinker: &'a mut B,
    delay: D,
    tracer: T,
    stats: RunStats,
}

impl<'a, B: Blinker + ?Sized, D: DelayNs> Executor<'a, B, D> {
    /// Create an executor without tracing
    pub fn new(blinker: &'a mut B, delay: D) -> Self {
        Self {
            blinker,
            delay,
            tracer: NoopTracer,
            stats: RunStats::default(),
        }
    }
}

impl<'a, B: Blinker + ?Sized, D: DelayNs, T: Tracer> Executor<'a, B, D, T> {
    /// Replace the tracer notified before each executed command
    pub fn with_tracer<U: Tracer>(self, tracer: U) -> Executor<'a, B, D, U> {
        Executor {
            blinker: self.blinker,
            delay: self.delay,
            tracer,
            stats: self.stats,
        }
    }

    /// Execute the whole program
    ///
    /// Returns run statistics on completion or the first error hit.
    pub fn run(mut self, program: &Program) -> Result<RunStats, Error> {
        #[cfg(feature = "log")]
        log::debug!("pattern: running {} commands", program.len());

        let result = self.execute(program.lines());

        #[cfg(feature = "log")]
        match &result {
            Ok(()) => log::debug!(
                "pattern: completed after {} commands, {} sets",
                self.stats.commands,
                self.stats.sets
            ),
            Err(err) => log::debug!("pattern: failed: {err}"),
        }

        result.map(|()| self.stats)
    }

    /// Execute the program with an explicit stack of open repeat scopes
    ///
    /// Nesting depth is bounded only by memory, not by the native stack.
    fn execute(&mut self, lines: &[ParsedLine]) -> Result<(), Error> {
        let mut scopes = vec![Scope {
            start: 0,
            end: lines.len(),
            cursor: 0,
            remaining: 1,
        }];

        while let Some(scope) = scopes.last_mut() {
            if scope.cursor == scope.end {
                scope.remaining -= 1;
                if scope.remaining > 0 {
                    scope.cursor = scope.start;
                    continue;
                }
                let finished = scope.end;
                scopes.pop();
                // Continue after the matching end; the pair itself is not re-run
                if let Some(parent) = scopes.last_mut() {
                    parent.cursor = finished + 1;
                }
                continue;
            }

            let index = scope.cursor;
            let scope_end = scope.end;
            let parsed = &lines[index];
            self.tracer.on_command(parsed.line, &parsed.command);
            self.stats.commands += 1;

            #[cfg(feature = "log")]
            log::trace!("pattern: line {}: {}", parsed.line, parsed.command);

            match parsed.command {
                Command::Set { state } => {
                    self.blinker
                        .set_leds(state)
                        .map_err(|source| Error::Hardware {
                            line: Some(parsed.line),
                            source,
                        })?;
                    self.stats.sets += 1;
                    scope.cursor += 1;
                }
                Command::Wait { duration } => {
                    block_for(&mut self.delay, duration);
                    self.stats.waited = self
                        .stats
                        .waited
                        .checked_add(duration)
                        .unwrap_or(Duration::MAX);
                    scope.cursor += 1;
                }
                Command::Repeat { count } => {
                    let end = find_matching_end(&lines[..scope_end], index)
                        .ok_or(Error::UnmatchedRepeat { line: parsed.line })?;
                    if count == 0 || end == index + 1 {
                        scope.cursor = end + 1;
                    } else {
                        scopes.push(Scope {
                            start: index + 1,
                            end,
                            cursor: index + 1,
                            remaining: count,
                        });
                    }
                }
                Command::End => return Err(Error::UnmatchedEnd { line: parsed.line }),
            }
        }
        Ok(())
    }
}

/// One open scope: the whole program or the body of a repeat block
struct Scope {
    /// First line of the body
    start: usize,
    /// Index of the closing `end`, or the program length at the top level
    end: usize,
    cursor: usize,
    /// Passes left, including the current one
    remaining: u32,
}

/// Parse `source` and run it in one go
///
/// Syntax errors are reported before the blinker is touched.
pub fn run_source<B, D>(
    source: &str,
    channels: ChannelCount,
    blinker: &mut B,
    delay: D,
) -> Result<RunStats, Error>
where
    B: Blinker + ?Sized,
    D: DelayNs,
{
    let program = Program::parse(source, channels)?;
    Executor::new(blinker, delay).run(&program)
}

/// Read a script from `reader` and run it in one go
#[cfg(feature = "std")]
pub fn run_reader<R, B, D>(
    reader: R,
    channels: ChannelCount,
    blinker: &mut B,
    delay: D,
) -> Result<RunStats, Error>
where
    R: std::io::BufRead,
    B: Blinker + ?Sized,
    D: DelayNs,
{
    let program = Program::from_reader(reader, channels)?;
    Executor::new(blinker, delay).run(&program)
}
