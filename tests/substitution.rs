//! End-to-end substitution tests
//!
//! Characters are typed through the update loop, so every edit (including
//! the engine's own) is delivered back to the engine as a change event.

mod common;

use std::rc::Rc;

use autocorrect::engine::{
    ApplyError, ChangeEvent, ChangeListener, EditError, EditorHost, Outcome, SkipReason,
    TextChange,
};
use autocorrect::messages::{DocumentMsg, EditorMsg, Msg};
use autocorrect::model::SegmentId;
use autocorrect::position::Position;
use autocorrect::update::update;
use common::{
    append_text, buffer_to_string, config_with, model_with_rules, test_model, type_text, DOC,
};

// =============================================================================
// Typo correction
// =============================================================================

#[test]
fn test_typo_replaced_on_trigger() {
    let mut model = model_with_rules("", &[("teh", "the"), ("recieve", "receive")]);
    append_text(&mut model, "teh cat will recieve;");
    assert_eq!(buffer_to_string(&model), "the cat will receive;");
}

#[test]
fn test_every_default_trigger_fires() {
    for trigger in [' ', ';', '(', ')', '{', '}', '\n', '\t'] {
        let mut model = model_with_rules("", &[("teh", "the")]);
        type_text(&mut model, &format!("teh{}", trigger));
        assert_eq!(
            buffer_to_string(&model),
            format!("the{}", trigger),
            "trigger {:?}",
            trigger
        );
    }
}

#[test]
fn test_non_trigger_char_does_nothing() {
    let mut model = model_with_rules("", &[("teh", "the")]);
    type_text(&mut model, "teh.");
    assert_eq!(buffer_to_string(&model), "teh.");
}

#[test]
fn test_custom_trigger_chars_replace_defaults() {
    let mut config = config_with(&[("*", &[("teh", "the")])]);
    config.trigger_chars = vec![".".into()];
    let mut model = test_model("", "plaintext", config);

    type_text(&mut model, "teh teh.");
    assert_eq!(buffer_to_string(&model), "teh the.");
}

#[test]
fn test_cursor_lands_at_end_of_correction() {
    let mut model = model_with_rules("", &[("teh", "the")]);
    type_text(&mut model, "say teh ");
    assert_eq!(model.view.cursor, Position::new(0, 7));
}

#[test]
fn test_correction_mid_document() {
    let mut model = model_with_rules("first line\n\nlast line", &[("teh", "the")]);
    update(
        &mut model,
        Msg::Editor(EditorMsg::SetCursorPosition { line: 1, column: 0 }),
    );
    type_text(&mut model, "teh ");
    assert_eq!(buffer_to_string(&model), "first line\nthe \nlast line");
}

// =============================================================================
// Matching rules
// =============================================================================

#[test]
fn test_longest_match_wins() {
    let mut model = model_with_rules("", &[("in", "input"), ("cin", "std::cin")]);
    type_text(&mut model, "cin;");
    assert_eq!(buffer_to_string(&model), "std::cin;");
}

#[test]
fn test_word_boundary_suppression() {
    let mut model = model_with_rules("", &[("in", "input")]);
    type_text(&mut model, "cin ");
    assert_eq!(buffer_to_string(&model), "cin ");

    type_text(&mut model, "in ");
    assert_eq!(buffer_to_string(&model), "cin input ");
}

#[test]
fn test_underscore_counts_as_word_char() {
    let mut model = model_with_rules("", &[("teh", "the")]);
    type_text(&mut model, "my_teh ");
    assert_eq!(buffer_to_string(&model), "my_teh ");
}

#[test]
fn test_match_at_column_zero_accepted() {
    let mut model = model_with_rules("", &[("teh", "the")]);
    type_text(&mut model, "teh ");
    assert_eq!(buffer_to_string(&model), "the ");
}

#[test]
fn test_rejected_longer_match_falls_through_to_shorter() {
    // ".teh" is preceded by "a" and rejected; "teh" is preceded by "."
    let mut model = model_with_rules("", &[(".teh", "NO"), ("teh", "the")]);
    type_text(&mut model, "a.teh ");
    assert_eq!(buffer_to_string(&model), "a.the ");
}

#[test]
fn test_language_scope_overrides_wildcard() {
    let config = config_with(&[
        ("*", &[("cout", "print"), ("teh", "the")]),
        ("cpp", &[("cout", "std::cout")]),
    ]);
    let mut model = test_model("", "cpp", config.clone());
    append_text(&mut model, "cout(teh ");
    assert_eq!(buffer_to_string(&model), "std::cout(the ");

    let mut model = test_model("", "python", config);
    type_text(&mut model, "cout(");
    assert_eq!(buffer_to_string(&model), "print(");
}

#[test]
fn test_pattern_is_literal_not_regex() {
    let mut model = model_with_rules("", &[("a.c", "abc")]);
    type_text(&mut model, "axc ");
    assert_eq!(buffer_to_string(&model), "axc ");
    type_text(&mut model, "a.c ");
    assert_eq!(buffer_to_string(&model), "axc abc ");
}

// =============================================================================
// Expansion
// =============================================================================

#[test]
fn test_indentation_applied_to_following_lines() {
    let mut model = model_with_rules("", &[("foo ", "bar\nbaz")]);
    type_text(&mut model, "    foo  ");
    assert_eq!(buffer_to_string(&model), "    bar\n    baz ");
    assert_eq!(model.view.cursor, Position::new(1, 7));
}

#[test]
fn test_indentation_kept_when_pattern_starts_with_whitespace() {
    let mut model = model_with_rules("", &[("  foo ", "bar\nbaz")]);
    type_text(&mut model, "    foo  ");
    assert_eq!(buffer_to_string(&model), "  bar\n    baz ");
}

#[test]
fn test_placeholder_positions_cursor() {
    let mut model = model_with_rules("", &[("todo ", "// TODO: $1\n")]);
    type_text(&mut model, "  todo  ");
    assert_eq!(buffer_to_string(&model), "  // TODO: \n   ");
    assert_eq!(model.view.cursor, Position::new(0, 11));
}

#[test]
fn test_placeholder_on_inner_line() {
    let mut model = model_with_rules("", &[("fnmain", "fn main() {\n    $1\n}")]);
    type_text(&mut model, "  fnmain ");
    assert_eq!(buffer_to_string(&model), "  fn main() {\n      \n  } ");
    assert_eq!(model.view.cursor, Position::new(1, 6));

    // typing continues at the placeholder
    type_text(&mut model, "run");
    assert_eq!(buffer_to_string(&model), "  fn main() {\n      run\n  } ");
}

#[test]
fn test_redundant_space_dropped() {
    let mut model = model_with_rules("", &[("asdf ", "qwer ")]);
    type_text(&mut model, "asdf  ");
    assert_eq!(buffer_to_string(&model), "qwer ");
}

#[test]
fn test_trailing_space_kept_for_other_triggers() {
    let mut model = model_with_rules("", &[("asdf", "qwer ")]);
    type_text(&mut model, "asdf;");
    assert_eq!(buffer_to_string(&model), "qwer ;");
}

#[test]
fn test_multiline_expansion_shows_annotation_and_message() {
    let mut model = model_with_rules("", &[("blk", "{\n$1\n}")]);
    type_text(&mut model, "blk ");

    assert_eq!(model.view.annotations.len(), 1);
    assert_eq!(model.view.annotations[0].label, "Code block expanded");
    assert_eq!(model.view.annotations[0].position, model.view.cursor);
    assert_eq!(model.status_text(), Some("Expanded code block."));
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::StatusMessage),
        "Expanded code block."
    );
}

#[test]
fn test_second_expansion_replaces_annotation() {
    let mut model = model_with_rules("", &[("blk", "{\n$1\n}")]);
    type_text(&mut model, "blk ");
    type_text(&mut model, "blk ");
    assert_eq!(model.view.annotations.len(), 1);
}

// =============================================================================
// Re-entrancy
// =============================================================================

#[test]
fn test_engine_edit_never_retriggers() {
    // The engine inserts ";", itself a trigger char preceded by "=", which
    // would match the second rule if the edit were treated as a keystroke
    let mut model = model_with_rules("", &[("go", ";"), ("=", "EQ")]);
    type_text(&mut model, "=go ");
    assert_eq!(buffer_to_string(&model), "=; ");
    assert!(!model.engine.session().is_busy());
}

#[test]
fn test_engine_sees_its_own_edit_as_busy() {
    use std::cell::RefCell;

    /// Runs the engine on every event it receives and records the outcome
    struct Probe {
        engine: Rc<autocorrect::Engine>,
        outcomes: RefCell<Vec<Outcome>>,
    }

    impl ChangeListener for Probe {
        fn on_document_change(&self, event: &ChangeEvent, host: &mut dyn EditorHost) {
            if self.engine.session().is_busy() {
                let outcome = self.engine.handle_change(event, host);
                self.outcomes.borrow_mut().push(outcome);
            }
        }
    }

    let mut model = model_with_rules("", &[("teh", "the")]);
    let probe = Rc::new(Probe {
        engine: Rc::clone(&model.engine),
        outcomes: RefCell::new(Vec::new()),
    });
    model.add_listener(probe.clone());

    type_text(&mut model, "teh ");

    assert_eq!(
        *probe.outcomes.borrow(),
        vec![Outcome::Skipped(SkipReason::Busy)]
    );
    assert_eq!(buffer_to_string(&model), "the ");
}

// =============================================================================
// Session and failure handling
// =============================================================================

#[test]
fn test_disabled_session_never_substitutes() {
    let mut config = config_with(&[("*", &[("teh", "the"), ("blk", "{\n$1\n}")])]);
    config.enabled = false;
    let mut model = test_model("", "plaintext", config);

    type_text(&mut model, "teh blk;\nteh\t");
    assert_eq!(buffer_to_string(&model), "teh blk;\nteh\t");
    assert_eq!(model.status_text(), None);
}

#[test]
fn test_rejected_edit_fails_quietly() {
    let mut model = model_with_rules("teh ", &[("teh", "the")]);
    model.document.read_only = true;
    let cursor = model.view.cursor;
    let engine = Rc::clone(&model.engine);

    // The space was typed before the document became read-only
    let event = ChangeEvent::single(DOC, TextChange::insert(Position::new(0, 3), " "));
    let outcome = engine.handle_change(&event, &mut model);

    assert_eq!(
        outcome,
        Outcome::Failed(ApplyError::Edit(EditError::ReadOnly(DOC)))
    );
    assert_eq!(buffer_to_string(&model), "teh ");
    assert_eq!(model.view.cursor, cursor);
    assert!(model.view.annotations.is_empty());
    assert_eq!(model.status_text(), None);
    assert!(!engine.session().is_busy());

    // The session keeps working once edits are accepted again
    model.document.read_only = false;
    assert!(matches!(
        engine.handle_change(&event, &mut model),
        Outcome::Applied { .. }
    ));
    assert_eq!(buffer_to_string(&model), "the ");
}

#[test]
fn test_undo_restores_typo_then_keystroke() {
    let mut model = model_with_rules("", &[("teh", "the")]);
    type_text(&mut model, "teh ");
    assert_eq!(buffer_to_string(&model), "the ");

    update(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(buffer_to_string(&model), "teh ");

    update(&mut model, Msg::Document(DocumentMsg::Redo));
    assert_eq!(buffer_to_string(&model), "the ");
}

#[test]
fn test_backspace_is_not_a_trigger() {
    let mut model = model_with_rules("teh  ", &[("teh", "the")]);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));
    assert_eq!(buffer_to_string(&model), "teh ");
}

#[test]
fn test_configuration_is_read_per_event() {
    let mut model = model_with_rules("", &[]);
    type_text(&mut model, "teh ");
    assert_eq!(buffer_to_string(&model), "teh ");

    model.config = config_with(&[("*", &[("teh", "the")])]);
    type_text(&mut model, "teh ");
    assert_eq!(buffer_to_string(&model), "teh the ");
}
