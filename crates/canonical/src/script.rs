//! Script repair for tokens written in a mix of alphabets.
//!
//! Typists routinely swap visually identical letters between the Cyrillic and
//! Latin keyboards (`Poмaн`), or type digits in place of letters (`0leg`,
//! `3оя`). [`repair_script`] tries a fixed sequence of substitutions and
//! accepts the first one that yields a token in a single script:
//!
//! 1. look-alike digits/punctuation → Cyrillic, accept if all Cyrillic
//! 2. look-alike digits/punctuation → Latin, accept if all Latin
//! 3. mixed tokens only: Cyrillic look-alikes → Latin, accept if all Latin
//! 4. otherwise Latin look-alikes → Cyrillic, accept if all Cyrillic
//! 5. transliterate the token to Latin (always succeeds)
//!
//! Substitution tables are case-aware. Digits map to lowercase letters; the
//! title-casing stage fixes capitalization afterwards.

use crate::charset::{has_cyrillic, has_latin, is_cyrillic, is_latin};

/// Digits and punctuation that stand in for Cyrillic letters.
const DIGITS_TO_CYRILLIC: &[(char, char)] = &[
    ('0', 'о'),
    ('1', 'і'),
    ('|', 'і'),
    ('!', 'і'),
    ('3', 'з'),
    ('4', 'ч'),
    ('6', 'б'),
    ('@', 'а'),
];

/// Digits and punctuation that stand in for Latin letters.
const DIGITS_TO_LATIN: &[(char, char)] = &[
    ('0', 'o'),
    ('1', 'l'),
    ('|', 'l'),
    ('!', 'i'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('7', 't'),
    ('8', 'b'),
    ('@', 'a'),
    ('$', 's'),
];

/// Pairs of visually identical Cyrillic and Latin letters.
///
/// Read left-to-right for Cyrillic → Latin and right-to-left for
/// Latin → Cyrillic.
const LOOKALIKES: &[(char, char)] = &[
    ('а', 'a'),
    ('е', 'e'),
    ('і', 'i'),
    ('к', 'k'),
    ('о', 'o'),
    ('р', 'p'),
    ('с', 'c'),
    ('у', 'y'),
    ('х', 'x'),
    ('А', 'A'),
    ('В', 'B'),
    ('Е', 'E'),
    ('І', 'I'),
    ('К', 'K'),
    ('М', 'M'),
    ('Н', 'H'),
    ('О', 'O'),
    ('Р', 'P'),
    ('С', 'C'),
    ('Т', 'T'),
    ('У', 'Y'),
    ('Х', 'X'),
];

/// Ukrainian national transliteration, lowercase. Letters missing from the
/// Ukrainian alphabet (`ы`, `э`, `ъ`) use their usual Russian renderings.
const TRANSLITERATION: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "h"),
    ('ґ', "g"),
    ('д', "d"),
    ('е', "e"),
    ('є', "ie"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "y"),
    ('і', "i"),
    ('ї', "i"),
    ('й', "i"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "kh"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "shch"),
    ('ь', ""),
    ('ъ', ""),
    ('ы', "y"),
    ('э', "e"),
    ('ю', "iu"),
    ('я', "ia"),
];

/// Which repair step produced a token. Exposed for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repair {
    /// Digits replaced with Cyrillic letters (or already Cyrillic).
    DigitsToCyrillic,
    /// Digits replaced with Latin letters (or already Latin).
    DigitsToLatin,
    /// Cyrillic look-alikes replaced in a mixed token.
    CyrillicToLatin,
    /// Latin look-alikes replaced.
    LatinToCyrillic,
    /// Fallback transliteration.
    Transliterated,
}

/// Repair a single charset-normalized token into a single script.
///
/// See the [module docs](self) for the order of attempts.
///
/// ```rust
/// use canonical::repair_script;
///
/// assert_eq!(repair_script("0leg"), "oleg");
/// assert_eq!(repair_script("3оя"), "зоя");
/// assert_eq!(repair_script("Poмaн"), "Роман");
/// ```
pub fn repair_script(token: &str) -> String {
    repair_script_with_step(token).0
}

/// Like [`repair_script`], but also reports which step succeeded.
pub fn repair_script_with_step(token: &str) -> (String, Repair) {
    let candidate = substitute(token, DIGITS_TO_CYRILLIC);
    if is_cyrillic(&candidate) {
        return (candidate, Repair::DigitsToCyrillic);
    }

    let candidate = substitute(token, DIGITS_TO_LATIN);
    if is_latin(&candidate) {
        return (candidate, Repair::DigitsToLatin);
    }

    if has_latin(token) && has_cyrillic(token) {
        let candidate = substitute(token, LOOKALIKES);
        if is_latin(&candidate) {
            return (candidate, Repair::CyrillicToLatin);
        }
    }

    let candidate = substitute_reverse(token, LOOKALIKES);
    if is_cyrillic(&candidate) {
        return (candidate, Repair::LatinToCyrillic);
    }

    // The output must repair to itself; leftover look-alike digits count too.
    let latin = transliterate(token);
    let candidate = substitute(&latin, DIGITS_TO_LATIN);
    if is_latin(&candidate) {
        return (candidate, Repair::Transliterated);
    }
    (latin, Repair::Transliterated)
}

/// Transliterate Cyrillic letters to Latin, leaving other characters as-is.
///
/// Uppercase letters produce a capitalized rendering (`Щ` → `Shch`).
pub fn transliterate(token: &str) -> String {
    let mut out = String::with_capacity(token.len());

    for ch in token.chars() {
        let lower = ch.to_lowercase().next().unwrap_or(ch);

        let Some(latin) = lookup(TRANSLITERATION, lower) else {
            out.push(ch);
            continue;
        };

        if lower != ch {
            let mut chars = latin.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push_str(latin);
        }
    }

    out
}

fn lookup<K: PartialEq + Copy, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

fn substitute(token: &str, table: &[(char, char)]) -> String {
    token
        .chars()
        .map(|ch| lookup(table, ch).unwrap_or(ch))
        .collect()
}

fn substitute_reverse(token: &str, table: &[(char, char)]) -> String {
    token
        .chars()
        .map(|ch| {
            table
                .iter()
                .find(|(_, to)| *to == ch)
                .map_or(ch, |&(from, _)| from)
        })
        .collect()
}
