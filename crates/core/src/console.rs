//! Text output channel.
//!
//! Units that "print" write through a [`Console`] rather than straight to
//! stdout, so the verification suites can read back exactly what was written.

/// A line-oriented text sink.
pub trait Console {
    /// Write one line. The line must not carry its own trailing newline.
    fn log(&mut self, line: &str);
}

/// Writes each line to the process stdout.
#[derive(Debug, Default, Copy, Clone)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn log(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Captures lines in write order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingConsole {
    lines: Vec<String>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether `line` was written at least once.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Console for RecordingConsole {
    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
