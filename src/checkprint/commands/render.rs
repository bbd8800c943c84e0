use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::layout::{render, Clock, RenderRequest};
use crate::model::Checklist;

/// Lays out `checklist` using its name as the title.
pub fn run<C: Clock + ?Sized>(
    checklist: &Checklist,
    width: usize,
    clock: &C,
) -> Result<CmdResult> {
    let request = RenderRequest::new(&checklist.name, &checklist.items).with_width(width);
    let document = render(&request, clock)?;

    let mut result = CmdResult::default().with_document(document);
    if checklist.items.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Checklist '{}' has no items",
            checklist.name
        )));
    }
    Ok(result)
}
