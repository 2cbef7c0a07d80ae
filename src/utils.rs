use std::borrow::Cow;

/// The form in which a word is looked up in the lexical tables: trailing
/// periods stripped, lowercased.
pub fn lexical_key(word: &str) -> Cow<'_, str> {
    let word = word.trim_end_matches('.');
    if word.is_ascii() {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Owned(word.to_ascii_lowercase());
        }
        return Cow::Borrowed(word);
    }

    // Titlecase letters such as "ǅ" aren't uppercase but still lowercase
    let lower = word.to_lowercase();
    if lower == word {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(lower)
    }
}

/// Joins the two words as a single key, for multi-word lexical entries
/// such as "van der".
pub fn lexical_key_pair(first: &str, second: &str) -> String {
    let first = lexical_key(first);
    let second = lexical_key(second);
    let mut key = String::with_capacity(first.len() + second.len() + 1);
    key.push_str(&first);
    key.push(' ');
    key.push_str(&second);
    key
}

/// The lowercased primary language subtag, so "pt-BR" and "nb_NO" look up
/// as "pt" and "nb".
pub fn primary_subtag(code: &str) -> Cow<'_, str> {
    let code = code.trim();
    let primary = match code.find(|c: char| c == '-' || c == '_') {
        Some(i) => &code[..i],
        None => code,
    };

    if primary.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(primary.to_ascii_lowercase())
    } else {
        Cow::Borrowed(primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_strips_periods_and_case() {
        assert_eq!("jr", lexical_key("Jr."));
        assert_eq!("ph.d", lexical_key("Ph.D."));
        assert_eq!("iii", lexical_key("III"));
        assert_eq!("van", lexical_key("van"));
        assert_eq!("", lexical_key("..."));
    }

    #[test]
    fn key_borrows_when_unchanged() {
        assert!(matches!(lexical_key("van"), Cow::Borrowed(_)));
        assert!(matches!(lexical_key("jr."), Cow::Borrowed(_)));
        assert!(matches!(lexical_key("Van"), Cow::Owned(_)));
    }

    #[test]
    fn key_lowercases_non_ascii() {
        assert_eq!("élan", lexical_key("ÉLAN"));
        assert!(matches!(lexical_key("élan"), Cow::Borrowed(_)));
    }

    #[test]
    fn key_lowercases_titlecase() {
        assert_eq!("ǆuro", lexical_key("ǅuro"));
        assert!(matches!(lexical_key("ǅuro"), Cow::Owned(_)));
    }

    #[test]
    fn pair() {
        assert_eq!("van der", lexical_key_pair("Van", "der"));
        assert_eq!("in 't", lexical_key_pair("in", "'t"));
    }

    #[test]
    fn subtags() {
        assert_eq!("pt", primary_subtag("pt-BR"));
        assert_eq!("nb", primary_subtag("nb_NO"));
        assert_eq!("en", primary_subtag(" EN "));
        assert_eq!("", primary_subtag(""));
        assert_eq!("", primary_subtag("-x"));
    }
}
