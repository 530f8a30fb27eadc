//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

// ============================================================================
// Command Registry
// ============================================================================

/// Identifies a user-invokable command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // Autocorrect
    ToggleAutocorrect,

    // Edit operations
    Undo,
    Redo,

    // Settings
    ReloadConfiguration,
}

/// A command definition
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    /// Stable identifier used to bind or invoke the command by name
    pub name: &'static str,
    pub label: &'static str,
    pub keybinding: Option<&'static str>,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::ToggleAutocorrect,
        name: "autocorrect.toggle",
        label: "Toggle AutoCorrect",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::Undo,
        name: "editor.undo",
        label: "Undo",
        keybinding: Some("⌘Z"),
    },
    CommandDef {
        id: CommandId::Redo,
        name: "editor.redo",
        label: "Redo",
        keybinding: Some("⇧⌘Z"),
    },
    CommandDef {
        id: CommandId::ReloadConfiguration,
        name: "autocorrect.reloadConfiguration",
        label: "Reload Configuration",
        keybinding: None,
    },
];

impl CommandId {
    /// Registry entry for this command
    pub fn def(self) -> Option<&'static CommandDef> {
        COMMANDS.iter().find(|cmd| cmd.id == self)
    }

    /// Look a command up by its stable name (e.g. `autocorrect.toggle`)
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS.iter().find(|cmd| cmd.name == name).map(|cmd| cmd.id)
    }
}

// ============================================================================
// Side effects
// ============================================================================

/// High-level UI regions that can be independently redrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageArea {
    /// Text area, cursor and annotations
    EditorArea,
    /// Bottom status bar only
    StatusBar,
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Request a partial redraw of specific areas
    RedrawAreas(Vec<DamageArea>),
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::RedrawAreas(areas) => !areas.is_empty(),
        }
    }

    /// Create a command to redraw just the status bar
    pub fn redraw_status_bar() -> Self {
        Cmd::RedrawAreas(vec![DamageArea::StatusBar])
    }
}
