//! # Printer Output
//!
//! A rendered document is handed to a [`Printer`]. The trait keeps the layout
//! and command code independent of where the text actually ends up.
//!
//! ## Implementations
//!
//! - [`memory::MemoryPrinter`]: mock mode. Keeps every document in memory and
//!   logs the send. Used by default and in tests.
//! - [`file::FilePrinter`]: writes the document to a text file, overwriting the
//!   previous one, for pickup by whatever drives the physical printer.
//!
//! [`AnyPrinter`] picks one of the two from a [`PrintConfig`].

use crate::config::{PrintConfig, PrinterMode};
use crate::error::Result;
use std::path::Path;

pub mod file;
pub mod memory;

/// Destination for finished documents.
pub trait Printer {
    /// Send one document. The text is newline-terminated plain ASCII.
    fn send_text(&mut self, text: &str) -> Result<()>;

    fn mode(&self) -> PrinterMode;
}

/// The printer selected by configuration.
#[derive(Debug)]
pub enum AnyPrinter {
    Memory(memory::MemoryPrinter),
    File(file::FilePrinter),
}

impl AnyPrinter {
    pub fn from_config<P: AsRef<Path>>(config: &PrintConfig, config_dir: P) -> Self {
        match config.printer {
            PrinterMode::Mock => AnyPrinter::Memory(memory::MemoryPrinter::new()),
            PrinterMode::File => {
                AnyPrinter::File(file::FilePrinter::new(config.output_path(config_dir)))
            }
        }
    }
}

impl Printer for AnyPrinter {
    fn send_text(&mut self, text: &str) -> Result<()> {
        match self {
            AnyPrinter::Memory(p) => p.send_text(text),
            AnyPrinter::File(p) => p.send_text(text),
        }
    }

    fn mode(&self) -> PrinterMode {
        match self {
            AnyPrinter::Memory(p) => p.mode(),
            AnyPrinter::File(p) => p.mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_mock_by_default() {
        let printer = AnyPrinter::from_config(&PrintConfig::default(), "/tmp");
        assert_eq!(printer.mode(), PrinterMode::Mock);
    }

    #[test]
    fn file_mode_targets_resolved_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PrintConfig::default();
        config.set("printer", "file").unwrap();

        let mut printer = AnyPrinter::from_config(&config, dir.path());
        assert_eq!(printer.mode(), PrinterMode::File);

        printer.send_text("hello\n").unwrap();
        let written = std::fs::read_to_string(dir.path().join("last_print.txt")).unwrap();
        assert_eq!(written, "hello\n");
    }
}
