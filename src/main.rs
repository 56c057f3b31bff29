//! hilite - highlight source text with ordered regex rules

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use hilite::config::Config;
use hilite::error::{HighlightError, Result};
use hilite::render::OutputFormat;
use hilite::syntax::{LanguageDefinition, SyntaxManager};

/// Default language when nothing else selects one
const DEFAULT_LANGUAGE: &str = "Austral";

/// Input name that reads from stdin
const STDIN_PATH: &str = "-";

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    language: Option<String>,
    rule_files: Vec<PathBuf>,
    format: Option<OutputFormat>,
    list: bool,
    help: bool,
    version: bool,
    file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        print_usage();
        return Ok(());
    }
    if options.version {
        println!("hilite {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::load();
    let mut manager = SyntaxManager::new();
    for path in config.rule_files.iter().chain(&options.rule_files) {
        manager.load_file(path)?;
    }

    if options.list {
        for name in manager.list_languages() {
            println!("{}", name);
        }
        return Ok(());
    }

    let text = match options.file.as_deref() {
        Some(path) if path != Path::new(STDIN_PATH) => fs::read_to_string(path)?,
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let lang = select_language(&manager, &options, &config)?;
    let format = options.format.unwrap_or(config.format);
    let output = lang.highlight_with(&text, format.renderer());

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Pick the language: `--lang`, then file extension, then config, then default
fn select_language<'a>(
    manager: &'a SyntaxManager,
    options: &Options,
    config: &Config,
) -> Result<&'a LanguageDefinition> {
    if let Some(name) = &options.language {
        return manager.require_language(name);
    }
    if let Some(lang) = options.file.as_deref().and_then(|f| manager.detect_language(f)) {
        return Ok(lang);
    }
    let name = config.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    manager.require_language(name)
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-V" | "--version" => options.version = true,
            "-L" | "--list" => options.list = true,
            "-l" | "--lang" => options.language = Some(value_for(arg, iter.next())?.to_string()),
            "-r" | "--rules" => options.rule_files.push(PathBuf::from(value_for(arg, iter.next())?)),
            "-f" | "--format" => {
                options.format = Some(OutputFormat::from_name(value_for(arg, iter.next())?)?)
            }
            s if s.starts_with('-') && s != STDIN_PATH => {
                return Err(HighlightError::Message(format!("unknown option: {}", s)));
            }
            path => {
                if options.file.is_some() {
                    return Err(HighlightError::Message("only one input file may be given".to_string()));
                }
                options.file = Some(Path::new(path).to_path_buf());
            }
        }
    }

    Ok(options)
}

fn value_for<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| HighlightError::Message(format!("{} requires a value", flag)))
}

fn print_usage() {
    println!("hilite {} - ordered regex-rule syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: hilite [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin when omitted or '-') and writes highlighted text to stdout.");
    println!();
    println!("Options:");
    println!("  -l, --lang NAME      Language to use (default: by extension, then config, then Austral)");
    println!("  -r, --rules FILE     Load a TOML language definition (repeatable)");
    println!("  -f, --format FMT     Output format: html, ansi, plain (default: html)");
    println!("  -L, --list           List available languages");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Settings are read from ~/.hilite.conf (format, language, rules).");
}
