//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every client
//! (the CLI today) goes through [`CheckprintApi`].
//!
//! The facade:
//! - **Dispatches** to the command functions
//! - **Resolves defaults** (the configured width when none is given)
//! - **Returns structured types** (`Result<CmdResult>`), never printed text
//!
//! ## Generic Over Printer
//!
//! `CheckprintApi<P: Printer>` is generic over the output collaborator:
//! - Production: `CheckprintApi<AnyPrinter>`, chosen from config
//! - Testing: `CheckprintApi<MemoryPrinter>`
//!
//! The printer is owned by the API value, so there is no process-wide
//! printer state.

use crate::commands;
use crate::config::PrintConfig;
use crate::error::Result;
use crate::layout::Clock;
use crate::model::Checklist;
use crate::printer::Printer;
use std::path::{Path, PathBuf};

pub struct CheckprintApi<P: Printer> {
    printer: P,
    config: PrintConfig,
    config_dir: PathBuf,
}

impl<P: Printer> CheckprintApi<P> {
    pub fn new(printer: P, config: PrintConfig, config_dir: PathBuf) -> Self {
        Self {
            printer,
            config,
            config_dir,
        }
    }

    pub fn render_checklist<C: Clock + ?Sized>(
        &self,
        checklist: &Checklist,
        width: Option<usize>,
        clock: &C,
    ) -> Result<commands::CmdResult> {
        commands::render::run(checklist, self.width(width), clock)
    }

    pub fn print_checklist<C: Clock + ?Sized>(
        &mut self,
        checklist: &Checklist,
        width: Option<usize>,
        clock: &C,
    ) -> Result<commands::CmdResult> {
        let width = self.width(width);
        commands::print::run(&mut self.printer, checklist, width, clock)
    }

    pub fn demo<C: Clock + ?Sized>(
        &self,
        width: Option<usize>,
        clock: &C,
    ) -> Result<commands::CmdResult> {
        commands::render::run(&commands::demo::checklist(), self.width(width), clock)
    }

    pub fn load_checklist(&self, path: &Path) -> Result<Checklist> {
        commands::helpers::load_checklist(path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn width(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.config.width)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FixedClock;
    use crate::model::ChecklistItem;
    use crate::printer::memory::MemoryPrinter;

    fn api_with_width(width: usize) -> CheckprintApi<MemoryPrinter> {
        let config = PrintConfig {
            width,
            ..PrintConfig::default()
        };
        CheckprintApi::new(MemoryPrinter::new(), config, PathBuf::from("/nonexistent"))
    }

    fn clock() -> FixedClock {
        FixedClock::parse("2025-06-30 08:15").unwrap()
    }

    #[test]
    fn render_uses_configured_width() {
        let api = api_with_width(24);
        let result = api.demo(None, &clock()).unwrap();
        let doc = result.document.unwrap();
        assert_eq!(doc.lines().next(), Some("=".repeat(24).as_str()));
    }

    #[test]
    fn explicit_width_overrides_config() {
        let api = api_with_width(24);
        let result = api.demo(Some(30), &clock()).unwrap();
        let doc = result.document.unwrap();
        assert_eq!(doc.lines().next(), Some("=".repeat(30).as_str()));
    }

    #[test]
    fn print_goes_to_owned_printer() {
        let mut api = api_with_width(40);
        let list = Checklist::new("Groceries", vec![ChecklistItem::open("eggs")]);

        let result = api.print_checklist(&list, None, &clock()).unwrap();

        assert_eq!(api.printer().sent().len(), 1);
        assert_eq!(
            api.printer().last(),
            result.document.as_ref().map(|d| d.as_str())
        );
    }

    #[test]
    fn render_does_not_print() {
        let api = api_with_width(40);
        let list = Checklist::new("Groceries", vec![ChecklistItem::open("eggs")]);
        api.render_checklist(&list, None, &clock()).unwrap();
        assert!(api.printer().sent().is_empty());
    }
}
