// src/core/boundary.rs

use crate::models::{Phase, PhaseSpan};
use std::iter;

/// Derives the line span of every phase from the index.
///
/// A phase ends where the next one starts; the last phase runs to
/// `total_lines`. Spans come back in the same order as `phases`.
pub fn resolve_spans(phases: &[Phase], total_lines: usize) -> Vec<PhaseSpan> {
    let next_starts = phases
        .iter()
        .skip(1)
        .map(|phase| phase.start)
        .chain(iter::once(total_lines));

    phases
        .iter()
        .zip(next_starts)
        .map(|(phase, end)| PhaseSpan {
            start: phase.start,
            end,
        })
        .collect()
}
