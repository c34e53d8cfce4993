use clap::{Parser, Subcommand};
use senate_bill_status::input;
use senate_bill_status::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Classify senate bill history lines into typed status records
#[derive(Parser, Debug)]
#[command(name = "senate-bill-status")]
#[command(about = "Classify senate bill history lines into typed status records")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify status lines and write one JSON record per line to stdout
    Classify {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Treat each input line as bare status text instead of a JSON object
        #[arg(long)]
        plain: bool,

        /// TOML config file for committee splitting
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the rules in dispatch order
    Rules {
        /// TOML config file for committee splitting
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_chain(config: Option<PathBuf>) -> anyhow::Result<RuleChain> {
    let config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    Ok(RuleChain::from_config(&config)?)
}

fn run_classify(
    source: Option<PathBuf>,
    plain: bool,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let chain = load_chain(config)?;

    let reader: Box<dyn BufRead> = match &source {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let lines = if plain {
        input::read_plain_lines(reader)?
    } else {
        input::read_json_lines(reader)?
    };

    let classification = chain.classify_history(&lines);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in &classification.records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }

    tracing::info!(
        lines = lines.len(),
        records = classification.records.len(),
        unrecognized = classification.unrecognized.len(),
        "classification complete"
    );
    if !classification.unrecognized.is_empty() {
        tracing::warn!(
            "{} of {} lines matched no rule",
            classification.unrecognized.len(),
            lines.len()
        );
    }

    Ok(())
}

fn run_rules(config: Option<PathBuf>) -> anyhow::Result<()> {
    let chain = load_chain(config)?;
    for (position, name) in chain.rule_names().enumerate() {
        println!("{:>2}. {}", position + 1, name);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    match args.command {
        Command::Classify {
            input,
            plain,
            config,
        } => run_classify(input, plain, config),
        Command::Rules { config } => run_rules(config),
    }
}
