use super::utils::lexical_key;
use smallvec::SmallVec;

static SUFFIXES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));

/// Is this word a generational or professional suffix, like "Jr." or
/// "III" or "PhD"?
pub fn is_suffix(word: &str) -> bool {
    SUFFIXES.contains(&*lexical_key(word))
}

/// Finds where the trailing block of suffixes starts.
///
/// Only suffixes after the last non-suffix word count, so "John Jr Smith"
/// has none. At least one word is always left before the split, even if
/// every word looks like a suffix.
pub fn suffix_start(words: &[&str]) -> usize {
    let flags: SmallVec<[bool; 8]> = words.iter().map(|w| is_suffix(w)).collect();

    match flags.iter().rposition(|&suffix| !suffix) {
        Some(i) => i + 1,
        None => words.len().min(1),
    }
}
