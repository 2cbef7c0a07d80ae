use super::article::split_article;
use super::language::{Language, Rule};
use super::suffix::suffix_start;
use super::surname::{self, Split};
use super::word::{join, split_words, strip_commas};
use std::fmt;
use tracing::trace;

/// Which step of the derivation produced a sort name.
///
/// The steps are tried in declaration order, and the first that applies
/// decides the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Nothing but whitespace and commas.
    Empty,
    /// A single word, used as written.
    SingleWord,
    /// A leading article was moved to the end.
    Article,
    /// The language's own rule placed the surname.
    LanguageRule(Rule),
    /// The last word was taken as the surname.
    Fallback,
}

impl Branch {
    pub fn as_str(self) -> &'static str {
        match self {
            Branch::Empty => "empty",
            Branch::SingleWord => "single_word",
            Branch::Article => "article",
            Branch::LanguageRule(rule) => rule.as_str(),
            Branch::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn derive(name: &str, language: &Language) -> (String, Branch) {
    let (sort_name, branch) = arrange(name, language);
    trace!(language = language.code(), %branch, "derived sort name");
    (sort_name, branch)
}

fn arrange(name: &str, language: &Language) -> (String, Branch) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return (String::new(), Branch::Empty);
    }

    let text = strip_commas(trimmed);
    let words = split_words(&text);
    match words.len() {
        0 => return (String::new(), Branch::Empty),
        1 => return (trimmed.to_string(), Branch::SingleWord),
        _ => {}
    }

    // Articles are checked against the full name, before suffixes are
    // stripped
    if let Some((article, rest)) = split_article(&words, language) {
        let mut sort_name = join(rest).into_owned();
        sort_name.push_str(", ");
        sort_name.push_str(article);
        return (sort_name, Branch::Article);
    }

    let (words, suffixes) = words.split_at(suffix_start(&words));

    match (language.rule(), surname::find_split(words, language)) {
        (Some(rule), Some(Split::Verbatim)) => {
            (trimmed.to_string(), Branch::LanguageRule(rule))
        }
        (Some(rule), Some(Split::SurnameAt(i))) => (
            assemble(&words[..i], &words[i..], suffixes),
            Branch::LanguageRule(rule),
        ),
        _ => {
            let i = surname::last_word(words);
            (
                assemble(&words[..i], &words[i..], suffixes),
                Branch::Fallback,
            )
        }
    }
}

// "<surname> <suffixes>, <given names>", leaving out the comma when
// there are no given names
fn assemble(given: &[&str], surname: &[&str], suffixes: &[&str]) -> String {
    debug_assert!(!surname.is_empty(), "Surname must not be empty!");

    let mut result = join(surname).into_owned();
    for suffix in suffixes {
        result.push(' ');
        result.push_str(suffix);
    }

    if !given.is_empty() {
        result.push_str(", ");
        result.push_str(&join(given));
    }

    result
}
