use super::Printer;
use crate::config::PrinterMode;
use crate::error::{CheckprintError, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes each document to a single file, replacing the previous one.
#[derive(Debug, Clone)]
pub struct FilePrinter {
    path: PathBuf,
}

impl FilePrinter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, text: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, text)
    }
}

impl Printer for FilePrinter {
    fn send_text(&mut self, text: &str) -> Result<()> {
        self.write(text).map_err(|e| {
            CheckprintError::Printer(format!("{}: {}", self.path.display(), e))
        })?;
        info!(
            "event=printer_send mode=file path={}",
            self.path.display()
        );
        Ok(())
    }

    fn mode(&self) -> PrinterMode {
        PrinterMode::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.txt");
        let mut printer = FilePrinter::new(&path);

        printer.send_text("one\n").unwrap();
        printer.send_text("two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "two\n");
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spool").join("out").join("receipt.txt");
        let mut printer = FilePrinter::new(&path);

        printer.send_text("x\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_failures_are_printer_errors() {
        let dir = tempfile::tempdir().unwrap();
        // the target is a directory, so the write must fail
        let mut printer = FilePrinter::new(dir.path());

        let err = printer.send_text("x\n").unwrap_err();
        assert_eq!(err.code(), "E_PRN_001");
    }
}
