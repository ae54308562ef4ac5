// src/core/commands.rs

//! Pure command execution: `(Document, Command) -> Outcome`.
//!
//! Nothing in here touches the filesystem. The handlers load the document,
//! call [`execute`], persist [`Outcome::document`] when present and print
//! [`Outcome::output`].

use crate::core::{
    document::Document,
    error::{RoadmapError, RoadmapResult},
    indexer::PhaseIndex,
    insertion,
};
use crate::models::{Command, Phase, PhaseSpan};
use log::debug;

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout, without a trailing newline.
    pub output: String,
    /// The replacement document, for commands that mutate.
    pub document: Option<Document>,
}

impl Outcome {
    fn read_only(output: String) -> Self {
        Self {
            output,
            document: None,
        }
    }
}

/// Runs `command` against `document`.
///
/// # Errors
/// Returns [`RoadmapError::PhaseNotFound`] when `view` or `add-item` names a
/// phase number that no heading carries.
pub fn execute(document: &Document, command: &Command) -> RoadmapResult<Outcome> {
    debug!("Executing {:?}", command);
    let index = PhaseIndex::build(document);

    match command {
        Command::List => Ok(Outcome::read_only(list_phases(&index))),
        Command::View { number } => view_phase(document, &index, number).map(Outcome::read_only),
        Command::AddItem { number, text } => {
            let updated = add_item(document, &index, number, text)?;
            Ok(Outcome {
                output: format!(t!("add.info.added"), number = number, text = text),
                document: Some(updated),
            })
        }
        Command::Show => Ok(Outcome::read_only(show_roadmap(document))),
    }
}

/// The phase directory: a header line, then one line per phase.
pub fn list_phases(index: &PhaseIndex) -> String {
    let mut output = String::from(t!("list.header"));
    for phase in index.phases() {
        output.push('\n');
        output.push_str(&format!(
            t!("list.entry"),
            number = phase.number,
            title = phase.title
        ));
    }
    output
}

/// The verbatim block of the first phase numbered `number`, trailing
/// whitespace removed.
pub fn view_phase(document: &Document, index: &PhaseIndex, number: &str) -> RoadmapResult<String> {
    let (_, span) = find_phase(index, number)?;
    let block = document.span_lines(span).concat();
    Ok(block.trim_end().to_string())
}

/// Returns `document` with an unchecked `text` item added to phase `number`.
///
/// Blank text, or text holding a line break, is refused with
/// [`RoadmapError::InvalidItem`].
pub fn add_item(
    document: &Document,
    index: &PhaseIndex,
    number: &str,
    text: &str,
) -> RoadmapResult<Document> {
    if !insertion::is_valid_item_text(text) {
        return Err(RoadmapError::InvalidItem {
            text: text.to_string(),
        });
    }
    let (phase, span) = find_phase(index, number)?;
    let at = insertion::insertion_point(document, span);
    debug!(
        "Adding item to phase {} ('{}') at line {}",
        phase.number, phase.title, at
    );
    Ok(document.with_line_inserted(at, &insertion::format_item(text)))
}

/// The whole roadmap, trailing whitespace removed.
pub fn show_roadmap(document: &Document) -> String {
    document.to_text().trim_end().to_string()
}

fn find_phase<'a>(
    index: &'a PhaseIndex,
    number: &str,
) -> RoadmapResult<(&'a Phase, PhaseSpan)> {
    index
        .find(number)
        .ok_or_else(|| RoadmapError::PhaseNotFound {
            number: number.to_string(),
        })
}
