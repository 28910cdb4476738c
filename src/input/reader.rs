use crate::error::LensError;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where the text to match against comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Given directly on the command line
    Inline(String),
    /// Loaded from a file
    File(PathBuf),
    /// Read from stdin
    Stdin,
}

/// Read text from the command line, a file or stdin
pub struct TextReader;

impl TextReader {
    /// Read the full text for `source`
    ///
    /// # Returns
    /// * `Ok(String)` - The text, unmodified
    /// * `Err(LensError)` - If the file cannot be read or is not UTF-8
    pub fn read(source: &TextSource) -> Result<String, LensError> {
        match source {
            TextSource::Inline(text) => Ok(text.clone()),
            TextSource::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| LensError::FileRead {
                    path: path.clone(),
                    source,
                })?;
                log::debug!("Loaded {} chars from {}", text.chars().count(), path.display());
                Ok(text)
            }
            TextSource::Stdin => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
