//! Input sources for the text to encode

use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly
    Literal(String),
    /// A file whose lines are joined with single spaces
    File(PathBuf),
}

impl InputSource {
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Literal(text) => Ok(text.clone()),
            InputSource::File(path) => {
                let content = std::fs::read_to_string(path)?;
                debug!(path = %path.display(), bytes = content.len(), "read input file");
                Ok(content.lines().collect::<Vec<_>>().join(" "))
            }
        }
    }
}
