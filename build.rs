use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct Lexicon {
    default_language: String,
    suffixes: Vec<String>,
    languages: Vec<LanguageData>,
}

#[derive(Deserialize)]
struct LanguageData {
    code: String,
    #[serde(default)]
    aliases: Vec<String>,
    name: String,
    rule: Option<String>,
    #[serde(default)]
    articles: Vec<String>,
    #[serde(default)]
    particles: Vec<String>,
    #[serde(default)]
    conjunctions: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/lexicon.json")?;
    let lexicon: Lexicon = serde_json::from_str(&json)?;

    check_lowercase("suffix", &lexicon.suffixes)?;
    write_set(&output.join("suffixes.rs"), &lexicon.suffixes)?;

    let mut index_by_code = HashMap::new();
    let mut records = String::from("[\n");
    for (i, language) in lexicon.languages.iter().enumerate() {
        for code in std::iter::once(&language.code).chain(language.aliases.iter()) {
            if code.is_empty() || code.to_lowercase() != *code {
                return Err(format!("language code {:?} must be lowercase", code).into());
            }
            if index_by_code.insert(code.clone(), i).is_some() {
                return Err(format!("language code {:?} is listed twice", code).into());
            }
        }
        check_lowercase("article", &language.articles)?;
        check_lowercase("particle", &language.particles)?;
        check_lowercase("conjunction", &language.conjunctions)?;

        writeln!(
            records,
            "    Language {{ code: {:?}, name: {:?}, rule: {}, articles: &[{}], particles: &[{}], conjunctions: &[{}] }},",
            language.code,
            language.name,
            rule_expr(language.rule.as_deref())?,
            quoted_comma_separated(&language.articles),
            quoted_comma_separated(&language.particles),
            quoted_comma_separated(&language.conjunctions),
        )?;
    }
    records.push(']');
    fs::write(output.join("languages.rs"), records)?;

    let default_index = index_by_code
        .get(&lexicon.default_language)
        .ok_or_else(|| format!("unknown default language {:?}", lexicon.default_language))?;
    fs::write(output.join("default_language.rs"), default_index.to_string())?;

    write_map(&output.join("language_by_code.rs"), &index_by_code, |i| {
        i.to_string()
    })?;

    Ok(())
}

fn rule_expr(rule: Option<&str>) -> Result<&'static str> {
    let expr = match rule {
        None => "None",
        Some("particle") => "Some(Rule::Particle)",
        Some("three_part") => "Some(Rule::ThreePart)",
        Some("conjunction") => "Some(Rule::Conjunction)",
        Some("particle_before_surname") => "Some(Rule::ParticleBeforeSurname)",
        Some("last_word") => "Some(Rule::LastWord)",
        Some("family_name_first") => "Some(Rule::FamilyNameFirst)",
        Some(other) => return Err(format!("unknown rule {:?}", other).into()),
    };
    Ok(expr)
}

fn check_lowercase(kind: &str, entries: &[String]) -> Result<()> {
    match entries.iter().find(|e| e.is_empty() || e.to_lowercase() != **e) {
        Some(bad) => Err(format!("{} {:?} must be non-empty and lowercase", kind, bad).into()),
        None => Ok(()),
    }
}

fn write_map<'a, K, V, F>(output: &Path, map: &'a HashMap<K, V>, transform: F) -> Result<()>
where
    K: std::ops::Deref<Target = str>,
    F: Fn(&'a V) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.to_string(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v);
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}

fn quoted_comma_separated(vs: &[String]) -> String {
    vs.iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(", ")
}
