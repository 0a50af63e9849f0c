//! Punctuation and whitespace normalization.
//!
//! Names are typed with initials glued together (`І.О.Петренко`), separated
//! by commas, or padded with non-breaking spaces copied from documents. Before
//! tokenization every `.`, `,` and NBSP becomes an ordinary space and runs of
//! Unicode whitespace collapse to a single space.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{collapse_whitespace, normalize_punctuation};
//!
//! assert_eq!(collapse_whitespace("  hello \t  world  "), "hello world");
//! assert_eq!(normalize_punctuation("І.О.Петренко"), "І О Петренко");
//! ```

/// Characters replaced by a plain space before tokenization.
const SPACE_LIKE: &[char] = &['.', ',', '\u{00A0}'];

/// Collapses repeated whitespace, trims edges, and normalizes newlines to
/// single spaces.
///
/// Returns an empty string for empty or whitespace-only input.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Replace `.`, `,` and non-breaking spaces with spaces, then collapse
/// whitespace.
pub fn normalize_punctuation(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|ch| if SPACE_LIKE.contains(&ch) { ' ' } else { ch })
        .collect();
    collapse_whitespace(&spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_mixed_whitespace() {
        assert_eq!(collapse_whitespace("hello\r\n\tworld"), "hello world");
        assert_eq!(collapse_whitespace("   \n\t   "), "");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn initials_without_spaces() {
        assert_eq!(normalize_punctuation("Петренко І.О."), "Петренко І О");
        assert_eq!(normalize_punctuation("Петренко,Іван"), "Петренко Іван");
    }

    #[test]
    fn non_breaking_space() {
        assert_eq!(normalize_punctuation("Іван\u{00A0}\u{00A0}Петренко"), "Іван Петренко");
    }
}
