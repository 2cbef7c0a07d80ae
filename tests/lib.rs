extern crate sort_name;

use sort_name::{derive_sort_name, SortName};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

fn none_if_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[test]
fn sort_names() {
    let f = File::open("tests/sort-names.txt").ok().unwrap();
    let reader = BufReader::new(f);

    for line in reader.lines() {
        let line = line.ok().unwrap();

        if line.starts_with('#') || !line.contains('|') {
            continue;
        }

        let parts: Vec<&str> = line.splitn(3, '|').collect();
        let input = parts[0];
        let language = none_if_empty(parts[1]);
        let expected = parts[2];

        let sort_name = derive_sort_name(input, language);
        assert!(
            sort_name == expected,
            "[{}|{:?}] Expected {:?}, got {:?}",
            input,
            language,
            expected,
            sort_name
        );
    }
}

#[test]
fn surname_is_never_empty() {
    for input in &["Jr Sr", "III IV", "PhD MD Esq", "Jr. Sr.", "I II III"] {
        let sort_name = derive_sort_name(input, Some("en"));
        assert!(!sort_name.is_empty(), "[{}] Empty sort name", input);
        assert!(
            !sort_name.starts_with(',') && !sort_name.ends_with(", "),
            "[{}] Empty surname or given name segment in {:?}",
            input,
            sort_name
        );
    }
}

#[test]
fn rederiving_is_not_a_no_op() {
    let cases = [
        ("John Smith", Some("en")),
        ("The Beatles", Some("en")),
        ("Vincent van Gogh", Some("nl")),
    ];

    for &(input, language) in cases.iter() {
        let once = derive_sort_name(input, language);
        let twice = derive_sort_name(&once, language);
        assert!(
            once != twice,
            "[{}] Expected re-deriving {:?} to change it",
            input,
            once
        );
    }
}

#[test]
fn passthrough_is_stable() {
    // Family-name-first languages return the input as is, so these do
    // come back unchanged
    let once = SortName::derive("Murakami Haruki", Some("ja"));
    let twice = SortName::derive(once.as_str(), Some("ja"));
    assert_eq!(once, twice);
}
