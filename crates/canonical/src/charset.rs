//! Character sets and charset normalization for personal names.
//!
//! Names arrive in Ukrainian, Russian and Latin script, frequently mixed
//! within a single token. This module defines the fixed character classes the
//! rest of the pipeline relies on and the per-token charset normalization
//! (apostrophe unification, `ё` folding, NFC composition).
//!
//! # Character classes
//!
//! - Cyrillic letters: `а`-`я` plus the Ukrainian `і ї є ґ` (case-insensitive)
//! - Latin letters: `a`-`z`, also after stripping diacritics via [`deaccent`]
//! - Apostrophes: every variant in [`APOSTROPHES`], folded to [`APOSTROPHE`]
//! - Dashes: every variant in [`DASHES`]
//!
//! # Examples
//!
//! ```rust
//! use canonical::{is_cyrillic, is_latin, normalize_charset};
//!
//! assert!(is_cyrillic("Квітка-Основ'яненко"));
//! assert!(!is_cyrillic("Poмaн"));
//! assert!(is_latin("O'briens"));
//! assert_eq!(normalize_charset("Сергієнко’ Пётр"), "Сергієнко' Петр");
//! ```

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

/// Canonical apostrophe every variant is folded to.
pub const APOSTROPHE: char = '\'';

/// Apostrophe variants seen in the wild, including the odd `*` and backtick.
pub const APOSTROPHES: &[char] = &[
    '\'', '\u{2019}', '\u{2018}', '\u{02BC}', '`', '\u{00B4}', '*',
];

/// Dash characters. Tokenization splits on these.
pub const DASHES: &[char] = &['-', '\u{2013}', '\u{2014}', '\u{2012}', '\u{2015}'];

/// Bracket characters. Tokenization splits on these as well.
pub const BRACKETS: &[char] = &['(', ')', '[', ']', '{', '}'];

const UKRAINIAN_SPECIFIC: &[char] = &['і', 'ї', 'є', 'ґ'];

/// Returns `true` for apostrophe variants.
pub fn is_apostrophe(ch: char) -> bool {
    APOSTROPHES.contains(&ch)
}

/// Returns `true` for dash variants.
pub fn is_dash(ch: char) -> bool {
    DASHES.contains(&ch)
}

/// Returns `true` if `ch` belongs to the fixed Cyrillic letter set.
pub fn is_cyrillic_letter(ch: char) -> bool {
    let lower = lower_char(ch);
    ('а'..='я').contains(&lower) || UKRAINIAN_SPECIFIC.contains(&lower)
}

/// Returns `true` if `ch` is a basic Latin letter.
pub fn is_latin_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn lower_char(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Remove combining marks, turning `Řehůřek` into `Rehurek`.
///
/// The text is decomposed (NFD), nonspacing marks are dropped and the result
/// is recomposed (NFC).
pub fn deaccent(text: &str) -> String {
    text.nfd()
        .filter(|ch| !ch.is_mark_nonspacing())
        .nfc()
        .collect()
}

/// Per-token charset normalization.
///
/// Composes the text (NFC), folds apostrophe variants to [`APOSTROPHE`] and
/// maps `ё`/`Ё` to `е`/`Е`. Applying it twice yields the same result as
/// applying it once.
pub fn normalize_charset(text: &str) -> String {
    text.nfc()
        .map(|ch| match ch {
            'ё' => 'е',
            'Ё' => 'Е',
            ch if is_apostrophe(ch) => APOSTROPHE,
            ch => ch,
        })
        .collect()
}

/// `true` if the text contains at least one Cyrillic letter.
pub fn has_cyrillic(text: &str) -> bool {
    text.chars().any(is_cyrillic_letter)
}

/// `true` if the text contains a letter specific to the Ukrainian alphabet.
pub fn has_ukrainian(text: &str) -> bool {
    text.chars()
        .map(lower_char)
        .any(|ch| UKRAINIAN_SPECIFIC.contains(&ch))
}

/// `true` if the text contains at least one Latin letter (diacritics allowed).
pub fn has_latin(text: &str) -> bool {
    deaccent(text).chars().any(is_latin_letter)
}

/// `true` if the token consists solely of Cyrillic letters, apostrophes and
/// dashes, and contains at least one letter.
pub fn is_cyrillic(token: &str) -> bool {
    only_letters_of(token.chars(), is_cyrillic_letter)
}

/// `true` if the token consists solely of Latin letters (diacritics allowed),
/// apostrophes and dashes, and contains at least one letter.
pub fn is_latin(token: &str) -> bool {
    only_letters_of(deaccent(token).chars(), is_latin_letter)
}

fn only_letters_of(chars: impl Iterator<Item = char>, is_letter: fn(char) -> bool) -> bool {
    let mut seen_letter = false;

    for ch in chars {
        if is_letter(ch) {
            seen_letter = true;
        } else if !is_apostrophe(ch) && !is_dash(ch) {
            return false;
        }
    }

    seen_letter
}
