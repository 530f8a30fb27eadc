//! Substitution planner: turns a replacement template into the literal text
//! to insert and the place the cursor should land.

use crate::position::Position;
use crate::util::char_len;

/// Cursor placeholder token inside a replacement template
pub const CURSOR_PLACEHOLDER: &str = "$1";

/// Cursor target relative to the start of the insertion
///
/// On the first inserted line `column` counts from the insertion start; on
/// any later line it counts from column 0 of that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorOffset {
    pub line: usize,
    pub column: usize,
}

impl CursorOffset {
    /// Absolute position for an insertion that starts at `start`
    pub fn resolve(self, start: Position) -> Position {
        if self.line == 0 {
            Position::new(start.line, start.column + self.column)
        } else {
            Position::new(start.line + self.line, self.column)
        }
    }
}

/// Final text to insert and where the cursor goes afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionPlan {
    pub text: String,
    pub cursor: CursorOffset,
    /// Whether the template carried a `$1` marker
    pub has_placeholder: bool,
}

impl SubstitutionPlan {
    pub fn is_multiline(&self) -> bool {
        self.text.contains('\n')
    }
}

/// Plan the insertion for `template`
///
/// `trigger` is the character that fired the substitution and `indentation`
/// is the leading whitespace of the trigger line before the edit.
pub fn plan(template: &str, trigger: char, indentation: &str) -> SubstitutionPlan {
    // The trigger space is already in the document
    let template = if trigger == ' ' {
        template.strip_suffix(' ').unwrap_or(template)
    } else {
        template
    };

    let (literal, before) = match template.split_once(CURSOR_PLACEHOLDER) {
        Some((before, after)) => (format!("{before}{after}"), Some(before)),
        None => (template.to_string(), None),
    };

    let text = reflow(&literal, indentation);
    let cursor = match before {
        Some(before) => offset_after(&reflow(before, indentation)),
        None => offset_after(&text),
    };

    SubstitutionPlan {
        text,
        cursor,
        has_placeholder: before.is_some(),
    }
}

/// Prefix every line after the first with `indentation`
pub fn reflow(text: &str, indentation: &str) -> String {
    if indentation.is_empty() || !text.contains('\n') {
        return text.to_string();
    }
    text.split('\n')
        .collect::<Vec<_>>()
        .join(&format!("\n{indentation}"))
}

/// Offset of the end of `text` relative to where it was inserted
fn offset_after(text: &str) -> CursorOffset {
    match text.rsplit_once('\n') {
        Some((head, last)) => CursorOffset {
            line: head.matches('\n').count() + 1,
            column: char_len(last),
        },
        None => CursorOffset {
            line: 0,
            column: char_len(text),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_typo_fix() {
        let plan = plan("the", ' ', "    ");
        assert_eq!(plan.text, "the");
        assert_eq!(plan.cursor, CursorOffset { line: 0, column: 3 });
        assert!(!plan.has_placeholder);
        assert!(!plan.is_multiline());
    }

    #[test]
    fn test_redundant_space_dropped_for_space_trigger() {
        assert_eq!(plan("qwer ", ' ', "").text, "qwer");
        // Only one trailing space is removed
        assert_eq!(plan("qwer  ", ' ', "").text, "qwer ");
    }

    #[test]
    fn test_trailing_space_kept_for_other_triggers() {
        assert_eq!(plan("qwer ", ';', "").text, "qwer ");
        assert_eq!(plan("qwer ", '\n', "").text, "qwer ");
    }

    #[test]
    fn test_multiline_reflow() {
        let plan = plan("bar\nbaz", ' ', "    ");
        assert_eq!(plan.text, "bar\n    baz");
        assert!(plan.is_multiline());
        // End of the insertion: second line, after indentation + "baz"
        assert_eq!(plan.cursor, CursorOffset { line: 1, column: 7 });
    }

    #[test]
    fn test_placeholder_on_first_line() {
        let plan = plan("// TODO: $1\n", ' ', "  ");
        assert_eq!(plan.text, "// TODO: \n  ");
        assert!(plan.has_placeholder);
        assert_eq!(plan.cursor, CursorOffset { line: 0, column: 9 });
    }

    #[test]
    fn test_placeholder_on_later_line() {
        let plan = plan("fn main() {\n    $1\n}", ' ', "  ");
        assert_eq!(plan.text, "fn main() {\n      \n  }");
        assert_eq!(plan.cursor, CursorOffset { line: 1, column: 6 });
    }

    #[test]
    fn test_placeholder_single_line() {
        let plan = plan("println!(\"$1\");", '(', "");
        assert_eq!(plan.text, "println!(\"\");");
        assert_eq!(plan.cursor, CursorOffset { line: 0, column: 10 });
    }

    #[test]
    fn test_only_first_placeholder_is_a_marker() {
        let plan = plan("a$1b$1c", ';', "");
        assert_eq!(plan.text, "ab$1c");
        assert_eq!(plan.cursor.column, 1);
    }

    #[test]
    fn test_line_break_right_before_placeholder() {
        let plan = plan("{\n$1", ';', "\t");
        assert_eq!(plan.text, "{\n\t");
        assert_eq!(plan.cursor, CursorOffset { line: 1, column: 1 });
    }

    #[test]
    fn test_cursor_offset_resolve() {
        let start = Position::new(4, 6);
        assert_eq!(
            CursorOffset { line: 0, column: 3 }.resolve(start),
            Position::new(4, 9)
        );
        assert_eq!(
            CursorOffset { line: 2, column: 3 }.resolve(start),
            Position::new(6, 3)
        );
    }

    #[test]
    fn test_reflow_without_indentation_is_identity() {
        assert_eq!(reflow("a\nb", ""), "a\nb");
        assert_eq!(reflow("ab", "  "), "ab");
        assert_eq!(reflow("a\n\nb", "  "), "a\n  \n  b");
    }
}
