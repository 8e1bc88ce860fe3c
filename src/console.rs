//! Console output for the driver scripts.
//!
//! Every example writes through a [`Transcript`] instead of calling
//! `println!` directly. The transcript always records the lines, so tests
//! can assert on exactly what a driver script printed, and optionally
//! echoes them to stdout for the binaries.

use colored::Colorize;

#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
    echo: bool,
}

impl Transcript {
    /// A silent transcript: lines are recorded, nothing is printed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript that also prints every line to stdout.
    pub fn echoing() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    pub fn line(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.echo {
            println!("{}", text);
        }
        self.lines.push(text);
    }

    /// Section title. Recorded verbatim, echoed in bold.
    pub fn heading(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.echo {
            println!("{}", format!("=== {} ===", title).bold().cyan());
        }
        self.lines.push(format!("=== {} ===", title));
    }

    pub fn blank(&mut self) {
        self.line("");
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
