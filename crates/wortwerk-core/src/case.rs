// Case conversion for dictionary surfaces

/// Uppercase the first character of `text` that has a case distinction.
///
/// Leading punctuation and break markers are skipped, so `"(haus"` becomes
/// `"(Haus"`. `ß` counts as cased even though it has no single-character
/// uppercase form in every locale.
pub fn upper_case_first_letter(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut done = false;
    for c in text.chars() {
        if !done && is_cased(c) {
            out.extend(c.to_uppercase());
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}

/// Uppercase the very first character of `text`, cased or not.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_cased(c: char) -> bool {
    c == 'ß' || c.to_lowercase().ne(c.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_case_first_letter_skips_uncased_prefix() {
        assert_eq!(upper_case_first_letter("haus"), "Haus");
        assert_eq!(upper_case_first_letter("(haus"), "(Haus");
        assert_eq!(upper_case_first_letter("lö|sungs"), "Lö|sungs");
        assert_eq!(upper_case_first_letter("..."), "...");
        assert_eq!(upper_case_first_letter(""), "");
    }

    #[test]
    fn upper_case_first_letter_is_noop_on_capitalized() {
        assert_eq!(upper_case_first_letter("EU-Kommission"), "EU-Kommission");
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("ver"), "Ver");
        assert_eq!(capitalize("zu|sam|men"), "Zu|sam|men");
        assert_eq!(capitalize("-x"), "-x");
        assert_eq!(capitalize(""), "");
    }
}
