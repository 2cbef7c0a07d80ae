use smallvec::SmallVec;
use std::borrow::Cow;

pub type WordVec<'a> = SmallVec<[&'a str; 8]>;

/// Removes every comma, so that "Smith, John" and "John Smith, Jr." split
/// into plain words.
pub fn strip_commas(text: &str) -> Cow<'_, str> {
    if text.contains(',') {
        Cow::Owned(text.replace(',', ""))
    } else {
        Cow::Borrowed(text)
    }
}

pub fn split_words(text: &str) -> WordVec<'_> {
    text.split_whitespace().collect()
}

pub fn join<'a>(words: &[&'a str]) -> Cow<'a, str> {
    match words {
        [] => Cow::Borrowed(""),
        [word] => Cow::Borrowed(*word),
        _ => Cow::Owned(words.join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas() {
        assert_eq!("Smith John", strip_commas("Smith, John"));
        assert_eq!("John Smith", strip_commas("John Smith"));
        assert!(matches!(strip_commas("John Smith"), Cow::Borrowed(_)));
        assert_eq!("Smith", strip_commas(",Smith,,"));
    }

    #[test]
    fn words() {
        assert_eq!(&["John", "Smith"], &*split_words("John Smith"));
        assert_eq!(&["John", "Smith"], &*split_words("  John \t Smith "));
        assert!(split_words("").is_empty());
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn joining() {
        assert_eq!("", join(&[]));
        assert!(matches!(join(&["Gogh"]), Cow::Borrowed("Gogh")));
        assert_eq!("van Gogh", join(&["van", "Gogh"]));
    }
}
