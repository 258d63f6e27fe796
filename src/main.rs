use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// CLI choice of top-level rule, mirrors `descent::Rule`.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum RuleArg {
    /// Brace-delimited map of quoted key/value pairs.
    Map,
    /// A single quoted string.
    String,
    /// Bracketed, possibly nested, list of integers.
    List,
    /// Lines of comma-separated integers.
    Csv,
}

impl From<RuleArg> for descent::Rule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Map => Self::Map,
            RuleArg::String => Self::String,
            RuleArg::List => Self::List,
            RuleArg::Csv => Self::Csv,
        }
    }
}

/// Parse maps, strings, lists and CSV with a small combinator engine.
#[derive(Parser)]
#[command(name = "descent", version, about)]
struct Cli {
    /// File to parse; standard input when absent or `-`.
    filename: Option<PathBuf>,

    /// Top-level rule to apply.
    #[arg(long, value_enum, default_value_t = RuleArg::Map)]
    rule: RuleArg,

    /// Resolve backslash escapes before printing.
    #[arg(long)]
    decode: bool,

    /// Fail if the rule leaves input unconsumed.
    #[arg(long)]
    strict: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rule: descent::Rule = cli.rule.into();
    let parsed = match cli.filename.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("failed to open '{}'", path.display()))?;
            descent::read_document(file, rule)?
        }
        _ => descent::read_document(std::io::stdin().lock(), rule)?,
    };

    if !parsed.remaining.is_empty() {
        tracing::warn!(remaining = parsed.remaining.len(), "input not fully consumed");
        if cli.strict {
            anyhow::bail!("unconsumed input after {rule}: {:?}", parsed.remaining);
        }
    }

    if cli.decode {
        match parsed.document.decoded() {
            descent::Document::Map(pairs) => {
                for (key, value) in pairs {
                    println!("{key}: {value}");
                }
            }
            descent::Document::String(text) => println!("{text}"),
            document => print_document(&document),
        }
    } else {
        print_document(&parsed.document);
    }
    Ok(())
}

fn print_document(document: &descent::Document) {
    match document {
        // rows already end in a newline
        descent::Document::Csv(_) => print!("{document}"),
        _ => println!("{document}"),
    }
}
