//! A library for deriving sort names, like "Gogh, Vincent van" or
//! "Beatles, The", from display names of people and groups.
//!
//! The rules are heuristics tuned per language: leading articles are moved
//! to the end, generational and professional suffixes stay with the
//! surname, and particles or conjunctions are kept with the family name
//! where a language's naming conventions call for it.
//!
//! # Examples
//! ```
//! use sort_name::derive_sort_name;
//!
//! assert_eq!("Beatles, The", derive_sort_name("The Beatles", None));
//! assert_eq!("van Gogh, Vincent", derive_sort_name("Vincent van Gogh", Some("nl")));
//! assert_eq!("Smith Jr, John", derive_sort_name("John Smith Jr", Some("en")));
//! assert_eq!("Madonna", derive_sort_name("Madonna", Some("en")));
//! ```

#![doc(html_root_url = "https://docs.rs/sort_name/0.1.0")]

extern crate phf;
extern crate smallvec;

mod article;
mod language;
mod sort;
mod suffix;
mod surname;
mod utils;
mod word;

#[cfg(feature = "ffi")]
pub mod external;

#[cfg(feature = "serialization")]
mod serialization;

pub use language::{Language, Rule, UnknownLanguage};
pub use sort::Branch;
pub use suffix::is_suffix;

use std::fmt;

/// A derived sort name, with the language it was derived for and the step
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortName {
    value: String,
    language: &'static Language,
    branch: Branch,
}

impl SortName {
    /// Derives the sort name of a display name.
    ///
    /// A missing or unrecognized language code means English. Never fails:
    /// any input, however malformed, has some sort name (possibly empty).
    ///
    /// # Examples
    /// ```
    /// use sort_name::{Branch, Rule, SortName};
    ///
    /// let name = SortName::derive("Gabriel García Márquez", Some("es"));
    /// assert_eq!("García Márquez, Gabriel", name.as_str());
    /// assert_eq!(Branch::LanguageRule(Rule::Conjunction), name.branch());
    ///
    /// let name = SortName::derive("The Collection of Stories", Some("xx"));
    /// assert_eq!("Collection of Stories, The", name.as_str());
    /// assert_eq!("en", name.language().code());
    /// ```
    pub fn derive(name: &str, language: Option<&str>) -> SortName {
        SortName::with_language(name, Language::resolve(language))
    }

    pub fn with_language(name: &str, language: &'static Language) -> SortName {
        let (value, branch) = sort::derive(name, language);
        SortName {
            value,
            language,
            branch,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl AsRef<str> for SortName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<SortName> for String {
    fn from(name: SortName) -> String {
        name.value
    }
}

/// Derives the sort name of a display name, as with [`SortName::derive`].
pub fn derive_sort_name(name: &str, language: Option<&str>) -> String {
    SortName::derive(name, language).into_string()
}
