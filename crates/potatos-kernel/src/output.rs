//! Output sinks.
//!
//! The kernel never renders anything itself. Commands write lines through an
//! [`OutputSink`] supplied by whoever called [`Kernel::invoke`].
//!
//! [`Kernel::invoke`]: crate::Kernel::invoke

use std::sync::Mutex;

/// Destination for command output.
pub trait OutputSink: Send + Sync {
    /// Write one line of regular output.
    fn println(&self, line: &str);

    /// Write one line of error output.
    fn printerr(&self, line: &str);
}

/// One captured line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Out(String),
    Err(String),
}

impl OutputLine {
    pub fn text(&self) -> &str {
        match self {
            Self::Out(s) | Self::Err(s) => s,
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }
}

/// Sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct BufferedOutput {
    lines: Mutex<Vec<OutputLine>>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, line: OutputLine) {
        // A poisoned buffer still holds valid lines.
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.push(line);
    }

    /// Every line written so far, in order.
    pub fn lines(&self) -> Vec<OutputLine> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Remove and return everything written so far.
    pub fn take(&self) -> Vec<OutputLine> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(|e| e.into_inner()))
    }

    /// Regular output joined with newlines.
    pub fn stdout(&self) -> String {
        self.collect(|line| !line.is_err())
    }

    /// Error output joined with newlines.
    pub fn stderr(&self) -> String {
        self.collect(OutputLine::is_err)
    }

    fn collect(&self, keep: impl Fn(&OutputLine) -> bool) -> String {
        self.lines()
            .iter()
            .filter(|line| keep(line))
            .map(OutputLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputSink for BufferedOutput {
    fn println(&self, line: &str) {
        self.push(OutputLine::Out(line.to_string()));
    }

    fn printerr(&self, line: &str) {
        self.push(OutputLine::Err(line.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_streams_apart() {
        let out = BufferedOutput::new();
        out.println("one");
        out.printerr("bad");
        out.println("two");

        assert_eq!(out.stdout(), "one\ntwo");
        assert_eq!(out.stderr(), "bad");
        assert_eq!(
            out.lines(),
            vec![
                OutputLine::Out("one".into()),
                OutputLine::Err("bad".into()),
                OutputLine::Out("two".into()),
            ]
        );
    }

    #[test]
    fn take_drains() {
        let out = BufferedOutput::new();
        out.println("x");
        assert_eq!(out.take().len(), 1);
        assert!(out.lines().is_empty());
    }
}
