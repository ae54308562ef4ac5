// src/core/indexer.rs

use crate::core::{boundary, document::Document, document::strip_terminator};
use crate::models::{Phase, PhaseSpan};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    /// `### Phase <digits>:<title>`. The number stays a string.
    static ref PHASE_HEADING: Regex =
        Regex::new(r"^###\s+Phase\s+(\d+):(.*)$").expect("phase heading pattern is valid");
}

/// Parses a single line (terminator allowed) as a phase heading.
pub fn parse_phase_heading(line: &str, start: usize) -> Option<Phase> {
    let captures = PHASE_HEADING.captures(strip_terminator(line))?;
    let number = captures.get(1)?.as_str().to_string();
    let title = captures
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    Some(Phase {
        number,
        title,
        start,
    })
}

/// Scans the document once and returns its phases in document order.
pub fn index_phases(document: &Document) -> Vec<Phase> {
    document
        .lines()
        .iter()
        .enumerate()
        .filter_map(|(i, line)| parse_phase_heading(line, i))
        .collect()
}

/// The phases of one document together with their derived spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseIndex {
    phases: Vec<Phase>,
    spans: Vec<PhaseSpan>,
}

impl PhaseIndex {
    /// Indexes `document` and resolves the span of every phase.
    pub fn build(document: &Document) -> Self {
        let phases = index_phases(document);
        let spans = boundary::resolve_spans(&phases, document.len());
        debug!(
            "Indexed {} phase(s) over {} line(s)",
            phases.len(),
            document.len()
        );
        Self { phases, spans }
    }

    /// Phases in document order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Spans, parallel to `phases()`.
    pub fn spans(&self) -> &[PhaseSpan] {
        &self.spans
    }

    /// Finds the first phase whose number equals `number` textually.
    pub fn find(&self, number: &str) -> Option<(&Phase, PhaseSpan)> {
        self.phases
            .iter()
            .zip(self.spans.iter().copied())
            .find(|(phase, _)| phase.number == number)
    }
}
