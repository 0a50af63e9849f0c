use crate::case::title_case;
use crate::charset::normalize_charset;
use crate::config::NormalizeConfig;
use crate::script::repair_script;
use crate::token::{split_fragments, Token};
use crate::whitespace::normalize_punctuation;

/// Main entry point. Takes a raw name and returns its normalized tokens.
///
/// The stages run in a fixed order: punctuation normalization, tokenization,
/// charset normalization, script repair and title-casing. The function is
/// total: every input, including the empty string, produces a (possibly
/// empty) list of tokens.
pub fn normalize_name(raw: &str, cfg: &NormalizeConfig) -> Vec<Token> {
    let spaced = normalize_punctuation(raw);

    split_fragments(&spaced)
        .into_iter()
        .map(|fragment| Token {
            raw: fragment.to_string(),
            text: normalize_token(fragment, cfg),
        })
        .collect()
}

/// Normalize a single already-split fragment.
pub fn normalize_token(fragment: &str, cfg: &NormalizeConfig) -> String {
    let mut text = normalize_charset(fragment);

    if cfg.repair_scripts {
        text = repair_script(&text);
    }

    if cfg.title_case {
        text = title_case(&text);
    }

    text
}

/// Tokenize a raw name with the default configuration.
///
/// ```rust
/// use canonical::tokenize;
///
/// assert_eq!(
///     tokenize("іванна орестівна климпуш-цинцадзе"),
///     vec!["Іванна", "Орестівна", "Климпуш", "Цинцадзе"]
/// );
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    normalize_name(raw, &NormalizeConfig::default())
        .into_iter()
        .map(|token| token.text)
        .collect()
}
