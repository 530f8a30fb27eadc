//! Command-line argument parsing for the autocorrect driver
//!
//! Supports:
//! - Opening a file (or starting from an empty buffer)
//! - Overriding the language id used to pick rule scopes
//! - Typing text from `--text` or stdin through the engine
//! - Writing the default configuration file

use clap::Parser;
use std::path::PathBuf;

/// Live typo correction and snippet expansion, driven from the command line
#[derive(Parser, Debug)]
#[command(
    name = "autocorrect",
    version,
    about = "Type text into a document with live typo correction"
)]
pub struct CliArgs {
    /// File to open; its contents are the initial buffer
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language id for rule lookup (defaults to detection from FILE)
    #[arg(short = 'l', long, value_name = "ID")]
    pub language: Option<String>,

    /// Configuration file (defaults to ~/.config/autocorrect/config.yaml)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Text to type; read from stdin when omitted
    #[arg(short = 't', long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Start with autocorrect turned off
    #[arg(long)]
    pub disabled: bool,

    /// Type at line N instead of appending to the end of the document
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Go to column N (used with --line)
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,

    /// Write the default configuration file and exit
    #[arg(long, conflicts_with_all = ["file", "text"])]
    pub init_config: bool,
}

/// Where the typed characters come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    Stdin,
}

/// What the driver should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Write the default configuration to the given path (or the default location)
    InitConfig(Option<PathBuf>),
    /// Type input into a document
    Type {
        file: Option<PathBuf>,
        input: InputSource,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    /// Explicit configuration file, if any
    pub config_path: Option<PathBuf>,
    /// Language id override
    pub language: Option<String>,
    /// Start with the session disabled
    pub disabled: bool,
    /// Initial cursor position (line, column) - 1-indexed from user, converted to 0-indexed
    pub initial_position: Option<(usize, usize)>,
    /// Type every character at the end of the document (no `--line` given)
    pub append: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.column.is_some() && self.line.is_none() {
            return Err("--column requires --line".to_string());
        }
        if let Some(language) = &self.language {
            if language.trim().is_empty() {
                return Err("--language must not be empty".to_string());
            }
        }

        let mode = if self.init_config {
            StartupMode::InitConfig(self.config.clone())
        } else {
            StartupMode::Type {
                file: self.file,
                input: match self.text {
                    Some(text) => InputSource::Text(text),
                    None => InputSource::Stdin,
                },
            }
        };

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let initial_position = self.line.map(|line| {
            let line_0 = line.saturating_sub(1);
            let col_0 = self.column.unwrap_or(1).saturating_sub(1);
            (line_0, col_0)
        });

        Ok(StartupConfig {
            mode,
            config_path: self.config,
            language: self.language,
            disabled: self.disabled,
            append: initial_position.is_none(),
            initial_position,
        })
    }
}
