//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use autocorrect::config::AutocorrectConfig;
use autocorrect::engine::DocumentId;
use autocorrect::messages::{EditorMsg, Msg};
use autocorrect::model::{AppModel, Document};
use autocorrect::update::update;

pub const DOC: DocumentId = DocumentId(1);

/// Configuration with the given rules, keyed by scope
pub fn config_with(scopes: &[(&str, &[(&str, &str)])]) -> AutocorrectConfig {
    let mut config = AutocorrectConfig::default();
    for (scope, rules) in scopes {
        let entry = config
            .language_specific
            .entry(scope.to_string())
            .or_default();
        for (pattern, replacement) in *rules {
            entry.insert(pattern.to_string(), replacement.to_string());
        }
    }
    config
}

/// Create a model over `text` in `language`, cursor at the end of the text
pub fn test_model(text: &str, language: &str, config: AutocorrectConfig) -> AppModel {
    let document = Document::with_text(DOC, text).with_language(language);
    let mut model = AppModel::new(document, config);
    update(&mut model, Msg::Editor(EditorMsg::MoveCursorDocumentEnd));
    model
}

/// Plain-text model with wildcard rules only
pub fn model_with_rules(text: &str, rules: &[(&str, &str)]) -> AppModel {
    test_model(text, "plaintext", config_with(&[("*", rules)]))
}

/// Type `text` one character at a time through the update loop
pub fn type_text(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::typed(ch));
    }
}

/// Type `text` with the cursor moved to the end of the document before each
/// character, like a user who presses Ctrl+End after every correction
pub fn append_text(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::Editor(EditorMsg::MoveCursorDocumentEnd));
        update(model, Msg::typed(ch));
    }
}

/// Buffer contents as a string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.text()
}
