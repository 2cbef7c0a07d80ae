use super::language::{Language, Rule};
use super::utils::{lexical_key, lexical_key_pair};

/// Where a language rule says the surname is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// Words from this index on are the surname, words before it the
    /// given names.
    SurnameAt(usize),
    /// The input is already in sort order and is used unchanged.
    Verbatim,
}

/// Applies the language's rule, if it has one, to a name with any
/// trailing suffixes already removed.
///
/// Returns `None` when the rule doesn't apply, in which case the caller
/// falls back to [`last_word`].
pub fn find_split(words: &[&str], language: &Language) -> Option<Split> {
    match language.rule()? {
        Rule::Particle => leading_particle(words, language),
        Rule::ThreePart => three_part(words),
        Rule::Conjunction => conjunction(words, language),
        Rule::ParticleBeforeSurname => particle_before_surname(words, language),
        Rule::LastWord => final_word(words),
        Rule::FamilyNameFirst => Some(Split::Verbatim),
    }
}

/// Default case: just assume the last word is the surname.
pub fn last_word(words: &[&str]) -> usize {
    words.len().saturating_sub(1)
}

// "Vincent van Gogh", "Ludwig Mies van der Rohe". The particle may be one
// word or two, and be followed by one surname word or two. A particle in
// first position makes the whole name the surname.
fn leading_particle(words: &[&str], language: &Language) -> Option<Split> {
    let len = words.len();
    if len < 2 {
        return None;
    }

    let two_word_starts = [len.checked_sub(3), len.checked_sub(4)];
    for start in two_word_starts.iter().flatten().copied() {
        let key = lexical_key_pair(words[start], words[start + 1]);
        if language.is_particle_key(&key) {
            return Some(Split::SurnameAt(start));
        }
    }

    let one_word_starts = [len.checked_sub(2), len.checked_sub(3)];
    for start in one_word_starts.iter().flatten().copied() {
        if language.is_particle_key(&lexical_key(words[start])) {
            return Some(Split::SurnameAt(start));
        }
    }

    None
}

fn three_part(words: &[&str]) -> Option<Split> {
    if words.len() == 3 {
        Some(Split::SurnameAt(1))
    } else {
        None
    }
}

// "Gabriel García Márquez", "José Ortega y Gasset". The first conjunction
// between the first and last words wins, even in second position.
fn conjunction(words: &[&str], language: &Language) -> Option<Split> {
    let len = words.len();
    if len < 2 {
        return None;
    }

    let inner = &words[1..len - 1];
    if let Some(i) = inner.iter().position(|w| language.is_conjunction(w)) {
        // Position of the conjunction in `words` is i + 1, and the surname
        // starts at the word before it
        return Some(Split::SurnameAt(i));
    }

    if len >= 3 {
        Some(Split::SurnameAt(len - 2))
    } else {
        None
    }
}

// "Charles de Gaulle", "Otto von Bismarck"
fn particle_before_surname(words: &[&str], language: &Language) -> Option<Split> {
    let len = words.len();
    if len >= 3 && language.is_particle(words[len - 2]) {
        Some(Split::SurnameAt(len - 2))
    } else {
        None
    }
}

fn final_word(words: &[&str]) -> Option<Split> {
    if words.len() >= 3 {
        Some(Split::SurnameAt(words.len() - 1))
    } else {
        None
    }
}
