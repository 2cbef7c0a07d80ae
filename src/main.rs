use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sort_name::{Language, SortName};
use std::io::{self, BufRead, BufWriter, Write};
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Derive "Last, First" sort names from display names.
#[derive(Debug, Parser)]
#[command(name = "sort_name", version)]
struct Cli {
    /// Increase log verbosity (RUST_LOG takes precedence)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Derive the sort name of a name, or of each line of stdin if the name is "-"
    Derive(DeriveArgs),
    /// List the supported languages and their naming rules
    Languages(LanguagesArgs),
}

#[derive(Debug, Args)]
struct DeriveArgs {
    /// Language code (ISO 639-1 or 639-2/3, e.g. "nl" or "nld"); defaults to English
    #[arg(short, long, env = "SORT_NAME_LANGUAGE")]
    language: Option<String>,

    /// Print each result as a JSON object
    #[arg(long)]
    json: bool,

    /// The name to derive a sort name for, or "-" to read names from stdin
    #[arg(required = true, num_args = 1..)]
    name: Vec<String>,
}

#[derive(Debug, Args)]
struct LanguagesArgs {
    /// Print the list as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Derived<'a> {
    name: &'a str,
    #[serde(flatten)]
    sort_name: &'a SortName,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            process::exit(64);
        }
        Err(err) => err.exit(),
    };

    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Derive(args) => derive_mode(&args),
        Command::Languages(args) => languages_mode(&args),
    };

    if let Err(err) = result {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_language(code: Option<&str>) -> &'static Language {
    match code.map(Language::from_code) {
        Some(Ok(language)) => language,
        Some(Err(err)) => {
            warn!("{}; using {}", err, Language::default_language());
            Language::default_language()
        }
        None => Language::default_language(),
    }
}

fn derive_mode(args: &DeriveArgs) -> Result<()> {
    let language = resolve_language(args.language.as_deref());
    debug!(%language, "deriving sort names");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.name.len() == 1 && args.name[0] == "-" {
        let stdin = io::stdin();
        derive_lines(stdin.lock(), &mut out, language, args.json)?;
    } else {
        let name = args.name.join(" ");
        write_derived(&mut out, &name, language, args.json)?;
    }

    match out.flush() {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("failed to write stdout"),
    }
}

/// Derives a sort name for each input line, stopping quietly if the
/// reader of the output goes away.
fn derive_lines<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    language: &'static Language,
    json: bool,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        match write_derived(out, &line, language, json) {
            Ok(()) => {}
            Err(err) if is_broken_pipe(&err) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .map_or(false, |err| err.kind() == io::ErrorKind::BrokenPipe)
}

fn write_derived<W: Write>(
    out: &mut W,
    name: &str,
    language: &'static Language,
    json: bool,
) -> Result<()> {
    let sort_name = SortName::with_language(name, language);
    if json {
        let derived = Derived {
            name: name.trim(),
            sort_name: &sort_name,
        };
        // Write failures come back as the underlying io::Error
        serde_json::to_writer(&mut *out, &derived).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", sort_name)?;
    }
    Ok(())
}

fn languages_mode(args: &LanguagesArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.json {
        serde_json::to_writer_pretty(&mut out, Language::all())?;
        writeln!(out)?;
    } else {
        for language in Language::all() {
            writeln!(
                out,
                "{}\t{}\t{}\t{} articles, {} particles, {} conjunctions",
                language.code(),
                language.name(),
                language.rule().map_or("fallback", |r| r.as_str()),
                language.articles().len(),
                language.particles().len(),
                language.conjunctions().len(),
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
