use super::language::Language;

/// If the name starts with one of the language's articles, as in "The
/// Beatles", returns the article and the remaining words.
pub fn split_article<'a, 'w>(
    words: &'w [&'a str],
    language: &Language,
) -> Option<(&'a str, &'w [&'a str])> {
    match words {
        [first, rest @ ..] if !rest.is_empty() && language.is_article(first) => {
            Some((*first, rest))
        }
        _ => None,
    }
}
