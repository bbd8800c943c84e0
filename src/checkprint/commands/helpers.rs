use crate::error::{CheckprintError, Result};
use crate::model::Checklist;
use std::io::Read;
use std::path::Path;

/// Path that reads the checklist from stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Reads a checklist JSON document from `path`, or from stdin for `-`.
pub fn load_checklist(path: &Path) -> Result<Checklist> {
    let content = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !path.exists() {
            return Err(CheckprintError::Api(format!(
                "Checklist file not found: {}",
                path.display()
            )));
        }
        std::fs::read_to_string(path)?
    };
    parse_checklist(&content)
}

pub fn parse_checklist(content: &str) -> Result<Checklist> {
    Ok(serde_json::from_str(content)?)
}
