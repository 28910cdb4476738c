//! Command-line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{Config, OutputFormat};
use crate::input::TextSource;
use crate::service::{DebugRequest, Flag};

/// Send a pattern and text to a matching service and visualize the matches
#[derive(Parser, Debug)]
#[command(name = "regex-lens", version, about)]
pub struct Args {
    /// Regular expression to send to the matching service
    #[arg(short, long)]
    pub pattern: String,

    /// Text to match against
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file (stdin when neither --text nor --file is given)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Matching flag: ignorecase, multiline, dotall or verbose (repeatable)
    #[arg(short = 'F', long = "flag", value_name = "FLAG")]
    pub flags: Vec<Flag>,

    /// Matching endpoint URL (overrides the config file)
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// With --output html, print only the results and highlighted text
    #[arg(long)]
    pub fragment: bool,

    /// Use this config file instead of ~/.config/regex-lens/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments merged with the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub url: String,
    pub timeout: Duration,
    pub output: OutputFormat,
    pub fragment: bool,
    pub flags: Vec<Flag>,
    pub source: TextSource,
}

impl Args {
    /// Merge with `config`; command-line values win
    pub fn resolve(&self, config: &Config) -> Settings {
        let source = match (&self.text, &self.file) {
            (Some(text), _) => TextSource::Inline(text.clone()),
            (None, Some(path)) => TextSource::File(path.clone()),
            (None, None) => TextSource::Stdin,
        };

        let mut flags = config.display.default_flags.clone();
        flags.extend(self.flags.iter().copied());

        Settings {
            url: self.url.clone().unwrap_or_else(|| config.service.url.clone()),
            timeout: Duration::from_secs(self.timeout.unwrap_or(config.service.timeout_secs)),
            output: self.output.unwrap_or(config.display.output),
            fragment: self.fragment,
            flags,
            source,
        }
    }
}

impl Settings {
    pub fn request(&self, pattern: &str, text: &str) -> DebugRequest {
        DebugRequest::new(pattern, text, self.flags.clone())
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
