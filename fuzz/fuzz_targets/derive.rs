#![no_main]
use libfuzzer_sys::fuzz_target;
use sort_name::derive_sort_name;

fuzz_target!(|data: (&str, &str)| {
    let (name, language) = data;
    derive_sort_name(name, Some(language));
});
