//! glint CLI entry point

mod cli;
mod output;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use glint_core::config::CONFIG_FILE_NAME;
use glint_core::language::{extensions_for, lookup_extension};
use glint_core::{
    GlintConfig, LanguageId, SourceInput, ValidatorRegistry, analyze_batch, generate_schema,
    resolve, score_content, winner,
};
use tracing::debug;

use cli::{CheckArgs, Cli, Commands, DetectArgs, OutputFormat};

/// Exit code when any error-severity finding is reported.
const EXIT_FINDINGS: u8 = 1;
/// Exit code for usage and I/O failures.
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("GLINT_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("glint=debug,glint_core=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Detect(args) => run_detect(args),
        Commands::Languages => {
            print!("{}", format_languages());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Schema => {
            let schema = serde_json::to_string_pretty(&generate_schema())?;
            println!("{}", schema);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_check(args: CheckArgs) -> Result<ExitCode> {
    let (mut config, warning) = load_config(args.config.as_deref());
    if let Some(warning) = warning {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
    if args.always_detect {
        config.set_always_detect(true);
    }

    let language = args
        .lang
        .as_deref()
        .map(str::parse::<LanguageId>)
        .transpose()?;

    let sources: Vec<Option<&Path>> = if args.paths.is_empty() {
        vec![None]
    } else {
        args.paths.iter().map(|p| Some(p.as_path())).collect()
    };

    let mut inputs = Vec::with_capacity(sources.len());
    for source in sources {
        let (label, text) = read_source(source)?;
        let mut input = SourceInput::new(text).with_label(label);
        if let Some(ext) = extension_hint(args.ext.as_deref(), source) {
            input = input.with_extension(ext);
        }
        if let Some(language) = language {
            input = input.with_language(language);
        }
        inputs.push(input);
    }

    let results = analyze_batch(&inputs, &config);
    debug!(inputs = inputs.len(), "analysis complete");

    match args.format {
        OutputFormat::Text => print!("{}", output::format_text(&results)),
        OutputFormat::Json => println!("{}", output::format_json(&results)?),
    }

    if results.iter().any(|a| a.has_errors()) {
        Ok(ExitCode::from(EXIT_FINDINGS))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_detect(args: DetectArgs) -> Result<ExitCode> {
    let source = args.path.as_deref();
    let (_, text) = read_source(source)?;
    let hint = extension_hint(args.ext.as_deref(), source);
    let language = resolve(hint.as_deref(), Some(&text));

    println!("{}", language);

    if args.explain {
        match hint.as_deref().zip(hint.as_deref().and_then(lookup_extension)) {
            Some((ext, id)) => println!("  source: extension '{}' -> {}", ext, id),
            None => println!("  source: content"),
        }
        let scores = score_content(&text);
        match winner(&scores) {
            Some(best) => println!("  best: {} ({})", best.language, best.score),
            None => println!("  best: none"),
        }
        for score in &scores {
            println!("  {:<12} {}", score.language.as_str(), score.score);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn format_languages() -> String {
    let registry = ValidatorRegistry::with_defaults();
    let mut out = String::new();
    for &id in LanguageId::ALL {
        let validated = if registry.has_validator(id) { "yes" } else { "-" };
        out.push_str(&format!(
            "{:<12} {:<12} {:<9} {}\n",
            id.as_str(),
            id.display_name(),
            validated,
            extensions_for(id).join(", ")
        ));
    }
    out
}

/// Read a file, or stdin for `None` and `-`. Returns the display label too.
fn read_source(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(p) if p != Path::new("-") => {
            let text = fs::read_to_string(p)
                .with_context(|| format!("failed to read {}", p.display()))?;
            Ok((p.display().to_string(), text))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok((output::STDIN_LABEL.to_string(), text))
        }
    }
}

/// `--ext` wins over the path's own extension.
fn extension_hint(explicit: Option<&str>, path: Option<&Path>) -> Option<String> {
    explicit.map(str::to_string).or_else(|| {
        path.and_then(Path::extension)
            .and_then(|e| e.to_str())
            .map(str::to_string)
    })
}

/// Load config or use default, returning any load warning.
///
/// An explicit path that cannot be read or parsed falls back to defaults with
/// a warning. Without an explicit path, `./.glint.toml` is used when present.
fn load_config(path: Option<&Path>) -> (GlintConfig, Option<String>) {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(CONFIG_FILE_NAME);
            if !default.is_file() {
                return (GlintConfig::default(), None);
            }
            default
        }
    };

    let loaded = fs::read_to_string(&path)
        .map_err(anyhow::Error::from)
        .and_then(|content| GlintConfig::from_toml_str(&content).map_err(anyhow::Error::from));

    match loaded {
        Ok(config) => {
            debug!(path = %path.display(), "loaded config");
            (config, None)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "falling back to default config");
            (
                GlintConfig::default(),
                Some(format!(
                    "failed to load config {}: {}; using defaults",
                    path.display(),
                    e
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_extension_wins() {
        assert_eq!(
            extension_hint(Some("css"), Some(Path::new("a.json"))).as_deref(),
            Some("css")
        );
        assert_eq!(
            extension_hint(None, Some(Path::new("dir/a.json"))).as_deref(),
            Some("json")
        );
        assert_eq!(extension_hint(None, Some(Path::new("Makefile"))), None);
        assert_eq!(extension_hint(None, None), None);
    }

    #[test]
    fn load_config_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"always_detect = true\n").unwrap();
        let (config, warning) = load_config(Some(file.path()));
        assert!(warning.is_none());
        assert!(config.always_detect());
    }

    #[test]
    fn load_config_invalid_file_warns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"severity = [").unwrap();
        let (config, warning) = load_config(Some(file.path()));
        assert_eq!(config, GlintConfig::default());
        assert!(warning.unwrap().contains("using defaults"));
    }

    #[test]
    fn load_config_missing_file_warns() {
        let (_, warning) = load_config(Some(Path::new("/nonexistent/.glint.toml")));
        assert!(warning.is_some());
    }

    #[test]
    fn languages_table_marks_validated() {
        let table = format_languages();
        let python = table.lines().find(|l| l.starts_with("python ")).unwrap();
        assert!(python.contains("yes"));
        assert!(python.contains("py, pyw, pyi"));
        let rust = table.lines().find(|l| l.starts_with("rust ")).unwrap();
        assert!(rust.contains(" - "));
        assert_eq!(table.lines().count(), LanguageId::ALL.len());
    }
}
