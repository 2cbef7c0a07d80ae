use super::utils::{lexical_key, primary_subtag};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// The strategy used to find where the surname starts in a person's name.
///
/// Each [`Language`] names at most one rule; languages without one (such
/// as English) always use the default "last word is the surname" ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A particle such as "van der" (one or two words) near the end of the
    /// name starts the surname.
    Particle,
    /// Names of exactly three words have a two-word surname.
    ThreePart,
    /// A conjunction such as "y" joins two family names; the surname starts
    /// one word before it. Otherwise the last two words are the surname.
    Conjunction,
    /// A particle directly before the last word is kept with it.
    ParticleBeforeSurname,
    /// The last word is the surname.
    LastWord,
    /// The family name is already written first; the name is left as is.
    FamilyNameFirst,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Particle => "particle",
            Rule::ThreePart => "three_part",
            Rule::Conjunction => "conjunction",
            Rule::ParticleBeforeSurname => "particle_before_surname",
            Rule::LastWord => "last_word",
            Rule::FamilyNameFirst => "family_name_first",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical data and name-ordering rule for one supported language.
///
/// All instances are static, compiled in from `build/lexicon.json`.
#[derive(Debug, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
    name: &'static str,
    rule: Option<Rule>,
    articles: &'static [&'static str],
    particles: &'static [&'static str],
    conjunctions: &'static [&'static str],
}

static LANGUAGES: &[Language] = &include!(concat!(env!("OUT_DIR"), "/languages.rs"));

static LANGUAGE_BY_CODE: phf::Map<&'static str, usize> =
    include!(concat!(env!("OUT_DIR"), "/language_by_code.rs"));

const DEFAULT_LANGUAGE: usize = include!(concat!(env!("OUT_DIR"), "/default_language.rs"));

/// Returned when a language code has no entry in the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized language code {0:?}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Looks up a language by ISO 639-1 or ISO 639-2/3 code.
    ///
    /// Case is ignored, as is any region or script subtag, so "pt-BR",
    /// "PT" and "por" all find Portuguese.
    ///
    /// # Examples
    /// ```
    /// use sort_name::Language;
    ///
    /// assert_eq!("nl", Language::from_code("nld").unwrap().code());
    /// assert_eq!("pt", Language::from_code("pt-BR").unwrap().code());
    /// assert!(Language::from_code("tlh").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<&'static Language, UnknownLanguage> {
        LANGUAGE_BY_CODE
            .get(&*primary_subtag(code))
            .map(|&i| &LANGUAGES[i])
            .ok_or_else(|| UnknownLanguage(code.to_string()))
    }

    /// Like [`Language::from_code`], but any missing or unrecognized code
    /// resolves to the default language (English).
    pub fn resolve(code: Option<&str>) -> &'static Language {
        match code {
            Some(code) => Language::from_code(code).unwrap_or_else(|err| {
                debug!(%err, "using default language");
                Language::default_language()
            }),
            None => Language::default_language(),
        }
    }

    pub fn default_language() -> &'static Language {
        &LANGUAGES[DEFAULT_LANGUAGE]
    }

    /// Every supported language, in lexicon order.
    pub fn all() -> &'static [Language] {
        LANGUAGES
    }

    /// The primary (two-letter) code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The English name of the language.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule(&self) -> Option<Rule> {
        self.rule
    }

    pub fn articles(&self) -> &'static [&'static str] {
        self.articles
    }

    pub fn particles(&self) -> &'static [&'static str] {
        self.particles
    }

    pub fn conjunctions(&self) -> &'static [&'static str] {
        self.conjunctions
    }

    /// Is this word (ignoring case and trailing periods) a leading article?
    pub fn is_article(&self, word: &str) -> bool {
        contains(self.articles, &lexical_key(word))
    }

    /// Is this key a surname particle? Multi-word particles are matched
    /// against space-joined keys.
    pub(crate) fn is_particle_key(&self, key: &str) -> bool {
        contains(self.particles, key)
    }

    /// Is this word (ignoring case and trailing periods) a surname particle?
    pub fn is_particle(&self, word: &str) -> bool {
        self.is_particle_key(&lexical_key(word))
    }

    pub fn is_conjunction(&self, word: &str) -> bool {
        contains(self.conjunctions, &lexical_key(word))
    }
}

fn contains(entries: &[&str], key: &str) -> bool {
    entries.iter().any(|&entry| entry == key)
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
