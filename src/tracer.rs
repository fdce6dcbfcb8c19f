//! Execution tracing hook

use crate::command::Command;

/// Observer notified once per executed command
///
/// Called synchronously, in execution order, before the command takes
/// effect. Blank and comment lines never reach the tracer. Any
/// `FnMut(usize, &Command)` closure is a tracer.
pub trait Tracer {
    fn on_command(&mut self, line: usize, command: &Command);
}

/// Tracer that ignores every command
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn on_command(&mut self, _line: usize, _command: &Command) {}
}

impl<F> Tracer for F
where
    F: FnMut(usize, &Command),
{
    fn on_command(&mut self, line: usize, command: &Command) {
        self(line, command);
    }
}
