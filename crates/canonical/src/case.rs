/// Return properly capitalized names.
///
/// Every whitespace-separated word is split on `-`, each piece gets an
/// uppercase first character and lowercase remainder, and the pieces are
/// re-joined. Dash-joined compound surnames keep both halves capitalized.
///
/// ```rust
/// use canonical::title_case;
///
/// assert_eq!(title_case("ALEXEY PETRENKO"), "Alexey Petrenko");
/// assert_eq!(
///     title_case("іванна орестівна климпуш-цинцадзе"),
///     "Іванна Орестівна Климпуш-Цинцадзе"
/// );
/// ```
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (n, word) in text.split_whitespace().enumerate() {
        if n > 0 {
            out.push(' ');
        }

        for (m, piece) in word.split('-').enumerate() {
            if m > 0 {
                out.push('-');
            }

            capitalize_into(piece, &mut out);
        }
    }

    out
}

fn capitalize_into(piece: &str, out: &mut String) {
    let mut chars = piece.chars();

    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.extend(chars.flat_map(char::to_lowercase));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apostrophe_does_not_start_a_word() {
        assert_eq!(title_case("о'БРАЙЕН"), "О'брайен");
        assert_eq!(title_case("соф'я"), "Соф'я");
    }

    #[test]
    fn empty_pieces_survive() {
        assert_eq!(title_case("--"), "--");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn already_titled_is_stable() {
        let titled = "Климпуш-Цинцадзе";
        assert_eq!(title_case(titled), titled);
    }
}
