use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vocab_scan::{DeclarationShape, Extractor, UnreadablePolicy, scan_files};

use vocab_audit::{OutputFormat, audit, render};

const DEFAULT_DATA_DIR: &str = "lib/data";
const DEFAULT_FILES: [&str; 4] = [
    "topics_1_5.dart",
    "topics_6_10.dart",
    "topics_11_15.dart",
    "topics_16_20.dart",
];

/// Report duplicate words and per-topic counts across vocabulary data files.
#[derive(Parser, Debug)]
#[command(name = "vocab-audit", version, about)]
struct Cli {
    /// Directory holding the data files
    #[arg(long, env = "VOCAB_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    dir: PathBuf,

    /// Files to scan, in order, relative to --dir
    /// (default: topics_1_5.dart topics_6_10.dart topics_11_15.dart topics_16_20.dart)
    files: Vec<PathBuf>,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Warn about unreadable files and keep going instead of aborting
    #[arg(long)]
    skip_unreadable: bool,

    /// Type name of word entry declarations
    #[arg(long, default_value = "VocabWord")]
    entry_type: String,

    /// Field holding the word inside an entry declaration
    #[arg(long, default_value = "word")]
    entry_field: String,

    /// Type name of topic group declarations
    #[arg(long, default_value = "VocabTopic")]
    group_type: String,

    /// Field holding the topic name inside a group declaration
    #[arg(long, default_value = "name")]
    group_field: String,
}

impl Cli {
    fn files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            DEFAULT_FILES.iter().map(PathBuf::from).collect()
        } else {
            self.files.clone()
        }
    }

    fn shape(&self) -> DeclarationShape {
        DeclarationShape {
            entry_type: self.entry_type.clone(),
            entry_field: self.entry_field.clone(),
            group_type: self.group_type.clone(),
            group_field: self.group_field.clone(),
        }
    }

    fn policy(&self) -> UnreadablePolicy {
        if self.skip_unreadable {
            UnreadablePolicy::Skip
        } else {
            UnreadablePolicy::Abort
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let files = cli.files();
    info!("auditing {} files under {}", files.len(), cli.dir.display());

    let start = Instant::now();
    let extractor = Extractor::new(&cli.shape())?;
    let entries = scan_files(&extractor, &cli.dir, &files, cli.policy())?;
    let report = audit(entries);
    info!(
        "audit finished in {} ms ({} duplicates)",
        start.elapsed().as_millis(),
        report.duplicates.len()
    );

    print!("{}", render(&report, cli.format)?);
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
