// src/core/insertion.rs

use crate::constants::UNCHECKED_MARKER;
use crate::core::document::{Document, strip_terminator};
use crate::models::PhaseSpan;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    /// `- [x] text`: a dash, one status character in brackets, then text.
    static ref CHECKLIST_ENTRY: Regex =
        Regex::new(r"^-\s+\[.\]\s+\S").expect("checklist entry pattern is valid");
    /// Any Markdown heading. Entries below a subsection belong to it, not to the phase.
    static ref SECTION_HEADING: Regex =
        Regex::new(r"^#+(\s|$)").expect("section heading pattern is valid");
}

/// True if `line` is a checklist entry.
pub fn is_checklist_entry(line: &str) -> bool {
    CHECKLIST_ENTRY.is_match(strip_terminator(line))
}

/// True if `line` is a heading that closes the checklist area of a phase.
pub fn is_section_heading(line: &str) -> bool {
    SECTION_HEADING.is_match(strip_terminator(line))
}

/// Picks the line index at which a new item for the phase in `span` goes.
///
/// The scan starts right after the heading and stops at the span end or at the
/// first heading of any level. The item lands after the last checklist entry seen
/// by the scan; a phase without entries gets it at the end of its span.
pub fn insertion_point(document: &Document, span: PhaseSpan) -> usize {
    let mut last_entry_end: Option<usize> = None;

    let body_start = span.start.saturating_add(1);
    for (offset, line) in document
        .span_lines(PhaseSpan {
            start: body_start,
            end: span.end,
        })
        .iter()
        .enumerate()
    {
        if is_section_heading(line) {
            break;
        }
        if is_checklist_entry(line) {
            last_entry_end = Some(body_start + offset + 1);
        }
    }

    let point = last_entry_end.unwrap_or(span.end);
    debug!(
        "Insertion point for span {}..{}: line {} ({})",
        span.start,
        span.end,
        point,
        if last_entry_end.is_some() {
            "after last entry"
        } else {
            "end of phase"
        }
    );
    point
}

/// True if `text` yields exactly one line the checklist grammar recognizes.
pub fn is_valid_item_text(text: &str) -> bool {
    !text.trim().is_empty() && !text.contains(['\n', '\r'])
}

/// Formats the text of a new, unchecked item (without terminator).
pub fn format_item(text: &str) -> String {
    format!("- {UNCHECKED_MARKER} {text}")
}
