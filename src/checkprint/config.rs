use crate::error::{CheckprintError, Result};
use crate::layout::{DEFAULT_WIDTH, MIN_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_OUTPUT_FILE: &str = "last_print.txt";

/// Keys accepted by [`PrintConfig::get`] and [`PrintConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["width", "printer", "output-file"];

/// Where printed documents go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterMode {
    /// Accept documents and only log them
    #[default]
    Mock,
    /// Write each document to `output_file` for pickup by the print spooler
    File,
}

impl fmt::Display for PrinterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrinterMode::Mock => f.write_str("mock"),
            PrinterMode::File => f.write_str("file"),
        }
    }
}

impl FromStr for PrinterMode {
    type Err = CheckprintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(PrinterMode::Mock),
            "file" => Ok(PrinterMode::File),
            other => Err(CheckprintError::InvalidArgument(format!(
                "Unknown printer mode: {} (expected mock or file)",
                other
            ))),
        }
    }
}

/// Configuration for checkprint, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrintConfig {
    /// Printable columns of the target roll
    #[serde(default = "default_width")]
    pub width: usize,

    #[serde(default)]
    pub printer: PrinterMode,

    /// Target of the file printer. Relative paths resolve against the config dir.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            printer: PrinterMode::default(),
            output_file: default_output_file(),
        }
    }
}

impl PrintConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PrintConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The file printer target, anchored at `config_dir` when relative.
    pub fn output_path<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        if self.output_file.is_absolute() {
            self.output_file.clone()
        } else {
            config_dir.as_ref().join(&self.output_file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "width" => Some(self.width.to_string()),
            "printer" => Some(self.printer.to_string()),
            "output-file" => Some(self.output_file.display().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "width" => {
                let width: usize = value.trim().parse().map_err(|_| {
                    CheckprintError::InvalidArgument(format!("Width must be a number: {}", value))
                })?;
                if width < MIN_WIDTH {
                    return Err(CheckprintError::InvalidArgument(format!(
                        "Width must be at least {} columns, got {}",
                        MIN_WIDTH, width
                    )));
                }
                self.width = width;
            }
            "printer" => self.printer = value.parse()?,
            "output-file" => {
                if value.trim().is_empty() {
                    return Err(CheckprintError::InvalidArgument(
                        "output-file cannot be empty".to_string(),
                    ));
                }
                self.output_file = PathBuf::from(value.trim());
            }
            other => {
                return Err(CheckprintError::InvalidArgument(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrintConfig::default();
        assert_eq!(config.width, 40);
        assert_eq!(config.printer, PrinterMode::Mock);
        assert_eq!(config.output_file, PathBuf::from("last_print.txt"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = PrintConfig::load(dir.path()).unwrap();
        assert_eq!(config, PrintConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = PrintConfig::default();
        config.set("width", "32").unwrap();
        config.set("printer", "FILE").unwrap();
        config.save(&nested).unwrap();

        let loaded = PrintConfig::load(&nested).unwrap();
        assert_eq!(loaded.width, 32);
        assert_eq!(loaded.printer, PrinterMode::File);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"printer": "file"}"#).unwrap();

        let loaded = PrintConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.width, 40);
        assert_eq!(loaded.printer, PrinterMode::File);
    }

    #[test]
    fn test_set_rejects_narrow_width() {
        let mut config = PrintConfig::default();
        assert!(config.set("width", "4").is_err());
        assert!(config.set("width", "wide").is_err());
        assert_eq!(config.width, 40);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = PrintConfig::default();
        assert!(config.get("colour").is_none());
        assert!(matches!(
            config.set("colour", "red"),
            Err(CheckprintError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_output_path_resolution() {
        let mut config = PrintConfig::default();
        assert_eq!(
            config.output_path("/etc/checkprint"),
            PathBuf::from("/etc/checkprint/last_print.txt")
        );

        config.set("output-file", "/var/spool/receipt.txt").unwrap();
        assert_eq!(
            config.output_path("/etc/checkprint"),
            PathBuf::from("/var/spool/receipt.txt")
        );
    }
}
