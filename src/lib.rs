//! AutoCorrect - live typo correction and snippet expansion
//!
//! This crate provides the substitution engine and a headless editor model
//! that hosts it, following the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod driver;
pub mod engine;
pub mod messages;
pub mod model;
pub mod position;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AutocorrectConfig;
pub use engine::{ChangeListener, EditorHost, Engine};
pub use messages::Msg;
pub use model::AppModel;
