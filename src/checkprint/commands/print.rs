use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::layout::Clock;
use crate::model::Checklist;
use crate::printer::Printer;

/// Renders `checklist` and hands the document to `printer`.
pub fn run<P: Printer, C: Clock + ?Sized>(
    printer: &mut P,
    checklist: &Checklist,
    width: usize,
    clock: &C,
) -> Result<CmdResult> {
    let mut result = super::render::run(checklist, width, clock)?;

    if let Some(document) = &result.document {
        printer.send_text(document.as_str())?;
        let message = format!(
            "Sent '{}' to {} printer ({} items, {} chars)",
            checklist.name,
            printer.mode(),
            checklist.items.len(),
            document.char_count()
        );
        result.add_message(CmdMessage::success(message));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::layout::FixedClock;
    use crate::model::ChecklistItem;
    use crate::printer::memory::MemoryPrinter;

    #[test]
    fn sends_rendered_document() {
        let mut printer = MemoryPrinter::new();
        let list = Checklist::new(
            "Demo",
            vec![ChecklistItem::open("Item A"), ChecklistItem::done("Item B")],
        );
        let clock = FixedClock::parse("2025-02-14 18:00").unwrap();

        let result = run(&mut printer, &list, 40, &clock).unwrap();

        let doc = result.document.unwrap();
        assert_eq!(printer.last(), Some(doc.as_str()));
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Success && m.content.contains("mock printer")));
    }

    #[test]
    fn invalid_width_sends_nothing() {
        let mut printer = MemoryPrinter::new();
        let list = Checklist::new("Demo", vec![ChecklistItem::open("Item A")]);
        let clock = FixedClock::parse("2025-02-14 18:00").unwrap();

        assert!(run(&mut printer, &list, 2, &clock).is_err());
        assert!(printer.sent().is_empty());
    }
}
