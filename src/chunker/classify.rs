//! Line classification.

use super::options::DEFAULT_MAX_HEADING_CHARS;

/// Decide whether a trimmed, non-empty line reads as a heading.
///
/// A heading is shorter than 80 characters, title-cased (see
/// [`is_title_case`]), and does not end with a period. Changing this rule
/// changes every downstream chunk boundary.
pub fn is_heading(line: &str) -> bool {
    is_heading_within(line, DEFAULT_MAX_HEADING_CHARS)
}

/// [`is_heading`] with a custom exclusive length bound.
pub fn is_heading_within(line: &str, max_chars: usize) -> bool {
    line.chars().count() < max_chars && is_title_case(line) && !line.ends_with('.')
}

/// Title-case test over cased runs.
///
/// Uppercase and titlecase letters may only follow an uncased character,
/// lowercase letters may only follow a cased one, and at least one cased
/// character must be present. Digits and punctuation split words: `"3D Printing"` is
/// title case, `"Patient's Rights"` is not.
pub fn is_title_case(line: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;

    for c in line.chars() {
        if c.is_uppercase() || is_titlecase_letter(c) {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }

    cased
}

/// Digraph letters such as `ǅ` (Unicode category Lt) are neither upper
/// nor lower case but still lowercase to a different character.
fn is_titlecase_letter(c: char) -> bool {
    !c.is_lowercase() && !c.is_uppercase() && c.to_lowercase().ne(std::iter::once(c))
}
