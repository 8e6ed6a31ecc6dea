//! Shell-export emission.
//!
//! Resolved values are written as `export NAME="value"` lines on a success
//! channel that a calling shell evaluates. Diagnostics go to a separate error
//! channel so they never end up in the evaluated output.

use std::io::Write;

use tracing::warn;

/// Sink for resolved values and diagnostics.
pub trait Emitter {
    /// Emit one resolved value.
    fn emit(&mut self, name: &str, value: &str);

    /// Emit a diagnostic message.
    fn emit_error(&mut self, message: &str);
}

/// Format one export statement (without trailing newline).
pub fn export_line(name: &str, value: &str) -> String {
    format!("export {}=\"{}\"", name, value)
}

/// Emitter writing exports to one writer and diagnostics to another.
///
/// Each call writes a full line and flushes, so a consuming shell sees every
/// value as soon as it is resolved.
pub struct ShellEmitter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ShellEmitter<std::io::Stdout, std::io::Stderr> {
    /// Emitter bound to the process's stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> ShellEmitter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Consume the emitter, returning both channels.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Emitter for ShellEmitter<O, E> {
    fn emit(&mut self, name: &str, value: &str) {
        let result = writeln!(self.out, "{}", export_line(name, value)).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(name, error = %e, "failed to write export");
        }
    }

    fn emit_error(&mut self, message: &str) {
        let result = writeln!(self.err, "{}", message).and_then(|_| self.err.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to write diagnostic");
        }
    }
}
