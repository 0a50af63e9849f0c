//! namefp canonical name layer.
//!
//! This crate turns a raw personal name, typed in any mix of Ukrainian,
//! Russian and Latin script, into an ordered list of canonical tokens.
//! Downstream stages (lexicon lookup, matching) rely on it for stable keys.
//!
//! ## What we do
//!
//! - Punctuation normalization (`.`, `,`, NBSP become spaces; whitespace collapses)
//! - Tokenization on whitespace, dashes and brackets
//! - Charset normalization (NFC, one apostrophe, `ё` → `е`)
//! - Script repair for look-alike digits and mixed alphabets, with a
//!   transliteration fallback
//! - Title-casing that keeps dash-joined compounds intact
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence, no error channel. Every
//! input produces an answer; the worst case is a transliterated token.
//!
//! Bottom line: same input + same config = same tokens forever.

mod case;
mod charset;
mod config;
mod pipeline;
mod script;
mod token;
mod whitespace;

pub use crate::case::title_case;
pub use crate::charset::{
    deaccent, has_cyrillic, has_latin, has_ukrainian, is_apostrophe, is_cyrillic,
    is_cyrillic_letter, is_dash, is_latin, is_latin_letter, normalize_charset, APOSTROPHE,
    APOSTROPHES, BRACKETS, DASHES,
};
pub use crate::config::NormalizeConfig;
pub use crate::pipeline::{normalize_name, normalize_token, tokenize};
pub use crate::script::{repair_script, repair_script_with_step, transliterate, Repair};
pub use crate::token::{split_fragments, Token};
pub use crate::whitespace::{collapse_whitespace, normalize_punctuation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_surname_scenario() {
        assert_eq!(
            tokenize("іванна орестівна климпуш-цинцадзе"),
            vec!["Іванна", "Орестівна", "Климпуш", "Цинцадзе"]
        );
    }

    #[test]
    fn tokens_keep_raw_fragment() {
        let tokens = normalize_name("0LEG  Пётр", &NormalizeConfig::default());

        let expected = vec![
            Token {
                raw: "0LEG".to_string(),
                text: "Oleg".to_string(),
            },
            Token {
                raw: "Пётр".to_string(),
                text: "Петр".to_string(),
            },
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn mixed_script_name() {
        assert_eq!(tokenize("Poмaн 3оя"), vec!["Роман", "Зоя"]);
    }

    #[test]
    fn initials_and_commas() {
        assert_eq!(
            tokenize("Петренко,І.О."),
            vec!["Петренко", "І", "О"]
        );
    }

    #[test]
    fn canonical_tokens_are_fixed_points() {
        let cfg = NormalizeConfig::default();
        let inputs = [
            "Іванна Климпуш-Цинцадзе",
            "0leg Pau1",
            "Poмaн",
            "Щурф O'brien",
            "Щур7ф",
        ];
        for raw in inputs {
            for token in tokenize(raw) {
                assert_eq!(normalize_token(&token, &cfg), token, "token {token:?}");
            }
        }
    }

    #[test]
    fn charset_only_config_skips_repair() {
        let tokens = normalize_name("0leg Пётр", &NormalizeConfig::charset_only());
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["0leg", "Петр"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" . , \u{00A0} ").is_empty());
    }

    #[test]
    fn single_script_tokens_only_change_case() {
        assert_eq!(tokenize("ПЕТРО john"), vec!["Петро", "John"]);
    }
}
