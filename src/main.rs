//! autocorrect - type text into a document with live typo correction
//!
//! Reads characters from `--text` or stdin and feeds them one at a time
//! through the same update loop an interactive editor would use, then prints
//! the resulting buffer to stdout and the last status message and the
//! rendered status bar to stderr.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use autocorrect::cli::{CliArgs, InputSource, StartupConfig, StartupMode};
use autocorrect::config::AutocorrectConfig;
use autocorrect::driver::{status_line, type_input, STATUS_LINE_WIDTH};
use autocorrect::engine::DocumentId;
use autocorrect::messages::{EditorMsg, Msg};
use autocorrect::model::{AppModel, Document};
use autocorrect::update::update;

fn main() -> Result<()> {
    autocorrect::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    match startup.mode.clone() {
        StartupMode::InitConfig(path) => init_config(path),
        StartupMode::Type { file, input } => run(&startup, file, input),
    }
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = path
        .or_else(autocorrect::config_paths::config_file)
        .context("Could not determine the configuration directory")?;
    AutocorrectConfig::write_default(&path)
        .with_context(|| format!("Failed to initialise {}", path.display()))?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn run(startup: &StartupConfig, file: Option<PathBuf>, input: InputSource) -> Result<()> {
    let config_path = startup
        .config_path
        .clone()
        .or_else(autocorrect::config_paths::config_file);
    let mut config = match &config_path {
        Some(path) => AutocorrectConfig::load_from(path),
        None => AutocorrectConfig::default(),
    };
    if startup.disabled {
        config.enabled = false;
    }

    let id = DocumentId(1);
    let mut document = match file {
        Some(path) => Document::from_file(id, path.clone())
            .with_context(|| format!("Failed to open {}", path.display()))?,
        None => Document::new(id),
    };
    if let Some(language) = &startup.language {
        document = document.with_language(language.trim());
    }
    tracing::info!(language = %document.language, "starting session");

    let mut model = AppModel::new(document, config);
    if let Some(path) = config_path {
        model = model.with_config_path(path);
    }

    let start = match startup.initial_position {
        Some((line, column)) => EditorMsg::SetCursorPosition { line, column },
        None => EditorMsg::MoveCursorDocumentEnd,
    };
    update(&mut model, Msg::Editor(start));

    let text = match input {
        InputSource::Text(text) => text,
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let last_status = type_input(&mut model, &text, startup.append);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(model.text().as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to flush output")?;

    if let Some(status) = last_status {
        eprintln!("{}", status);
    }
    eprintln!("{}", status_line(&model, STATUS_LINE_WIDTH));
    Ok(())
}
