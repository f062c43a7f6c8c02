//! Demonstration transcripts
//!
//! The components themselves print nothing; the client collects their
//! result strings here and decides how to surface them.

use serde::{Deserialize, Serialize};

/// Transcript of one component demonstration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demonstration {
    title: String,
    lines: Vec<String>,
}

impl Demonstration {
    /// Start an empty demonstration under the given title
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append one result line
    #[inline]
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append several result lines
    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Demonstration title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Collected result lines, in emission order
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render as a printable block
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("--- {} ---\n", self.title);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Aggregate of all demonstrations from one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoReport {
    demonstrations: Vec<Demonstration>,
}

impl DemoReport {
    /// Create new empty report
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished demonstration
    #[inline]
    pub fn push(&mut self, demonstration: Demonstration) {
        self.demonstrations.push(demonstration);
    }

    /// The collected demonstrations, in run order
    #[inline]
    #[must_use]
    pub fn demonstrations(&self) -> &[Demonstration] {
        &self.demonstrations
    }

    /// Render the whole report as printable text
    #[must_use]
    pub fn render(&self) -> String {
        self.demonstrations
            .iter()
            .map(Demonstration::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialize the report for external tooling
    ///
    /// # Errors
    /// Returns the underlying serializer error; with string-only content
    /// this does not happen in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
