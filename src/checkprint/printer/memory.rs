use super::Printer;
use crate::config::PrinterMode;
use crate::error::Result;
use log::info;

/// Mock printer. Accepts everything and remembers what it was sent.
#[derive(Debug, Default)]
pub struct MemoryPrinter {
    sent: Vec<String>,
}

impl MemoryPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents in the order they were sent.
    pub fn sent(&self) -> &[String] {
        &self.sent
    }

    pub fn last(&self) -> Option<&str> {
        self.sent.last().map(String::as_str)
    }
}

impl Printer for MemoryPrinter {
    fn send_text(&mut self, text: &str) -> Result<()> {
        info!(
            "event=printer_send mode=mock chars={}",
            text.chars().count()
        );
        self.sent.push(text.to_string());
        Ok(())
    }

    fn mode(&self) -> PrinterMode {
        PrinterMode::Mock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_documents_in_order() {
        let mut printer = MemoryPrinter::new();
        printer.send_text("first\n").unwrap();
        printer.send_text("second\n").unwrap();

        assert_eq!(printer.sent(), &["first\n", "second\n"]);
        assert_eq!(printer.last(), Some("second\n"));
    }

    #[test]
    fn starts_empty() {
        let printer = MemoryPrinter::new();
        assert!(printer.sent().is_empty());
        assert_eq!(printer.last(), None);
    }
}
