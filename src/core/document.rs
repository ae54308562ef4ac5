// src/core/document.rs

use crate::models::PhaseSpan;

/// A roadmap held in memory as its lines, each with its original terminator.
///
/// Joining the lines back together always reproduces the source text
/// byte-for-byte; nothing is normalized on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Splits `text` after every `\n`. A preceding `\r` stays on its line, so
    /// CRLF files keep their terminators. The last line may be unterminated.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    /// All lines, terminators included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Total number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True for an empty file.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines covered by `span`, clamped to the document.
    pub fn span_lines(&self, span: PhaseSpan) -> &[String] {
        let end = span.end.min(self.lines.len());
        let start = span.start.min(end);
        self.lines.get(start..end).unwrap_or_default()
    }

    /// The exact file contents this document stands for.
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// The terminator new lines should use: CRLF if the first terminated line
    /// uses it, LF otherwise.
    pub fn line_terminator(&self) -> &'static str {
        match self.lines.iter().find(|line| line.ends_with('\n')) {
            Some(line) if line.ends_with("\r\n") => "\r\n",
            _ => "\n",
        }
    }

    /// Returns a copy with `content` spliced in as a new line at `index`.
    ///
    /// `content` must not carry its own terminator; the document's terminator
    /// is appended. If the line before `index` is the unterminated last line
    /// of the file it gains a terminator, otherwise every existing line is
    /// left untouched.
    pub fn with_line_inserted(&self, index: usize, content: &str) -> Self {
        let terminator = self.line_terminator();
        let index = index.min(self.lines.len());
        let mut lines = self.lines.clone();

        if let Some(previous) = index.checked_sub(1).and_then(|i| lines.get_mut(i)) {
            if !previous.ends_with('\n') {
                previous.push_str(terminator);
            }
        }

        lines.insert(index, format!("{content}{terminator}"));
        Self { lines }
    }
}

/// The line without its `\n` or `\r\n` terminator.
pub fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
