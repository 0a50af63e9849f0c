use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use namefp::{DictionaryBuilder, IdentityId, NamePipeline, NamefpConfig};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "namefp", version, about = "Personal name normalization and matching")]
struct Args {
    /// YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile JSON-lines build input into a dictionary directory.
    Build {
        /// JSON-lines file with `term`, `lemma` and `lemma_labels` fields.
        #[arg(long)]
        input: PathBuf,
        /// Output directory for the dictionary artifact.
        #[arg(long)]
        output: PathBuf,
    },
    /// Print the normalized tokens of each name.
    Tokenize {
        names: Vec<String>,
    },
    /// Print the candidate sets of each name.
    Resolve {
        /// Dictionary directory. Overrides `dictionary.path` from the config.
        #[arg(long)]
        dictionary: Option<PathBuf>,
        names: Vec<String>,
    },
    /// Seed identities from a file, then match each name against them.
    Match {
        /// Dictionary directory. Overrides `dictionary.path` from the config.
        #[arg(long)]
        dictionary: Option<PathBuf>,
        /// JSON-lines file of `{"id": <u64>, "name": <string>}` records.
        #[arg(long)]
        seeds: PathBuf,
        names: Vec<String>,
    },
}

#[derive(Deserialize)]
struct SeedRecord {
    id: IdentityId,
    name: String,
}

#[derive(Serialize)]
struct MatchOutput<'a> {
    name: &'a str,
    ids: Option<Vec<IdentityId>>,
}

fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().finish().try_init()?;
    } else {
        builder.finish().try_init()?;
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<NamefpConfig> {
    match path {
        Some(path) => NamefpConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(NamefpConfig::default()),
    }
}

fn open_pipeline(mut config: NamefpConfig, dictionary: Option<PathBuf>) -> Result<NamePipeline> {
    if dictionary.is_some() {
        config.dictionary.path = dictionary;
    }
    Ok(NamePipeline::from_config(&config)?)
}

fn read_seeds(path: &Path) -> Result<Vec<(IdentityId, String)>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut seeds = Vec::new();

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: SeedRecord = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid seed record", path.display(), idx + 1))?;
        seeds.push((record.id, record.name));
    }
    Ok(seeds)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json)?;
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Build { input, output } => {
            let mut builder = DictionaryBuilder::new();
            builder.read_jsonl_file(&input)?;
            let dictionary = builder.build()?;
            dictionary.save(&output)?;
            info!(
                input = %input.display(),
                output = %output.display(),
                keys = dictionary.len(),
                "dictionary written"
            );
        }
        Command::Tokenize { names } => {
            let normalize = config.canonical.to_normalize_config();
            for name in &names {
                let tokens: Vec<String> = namefp::normalize_name(name, &normalize)
                    .into_iter()
                    .map(|token| token.text)
                    .collect();
                println!("{}", serde_json::to_string(&tokens)?);
            }
        }
        Command::Resolve { dictionary, names } => {
            let pipeline = open_pipeline(config, dictionary)?;
            for resolved in pipeline.resolve_names(&names) {
                println!("{}", serde_json::to_string(&resolved)?);
            }
        }
        Command::Match {
            dictionary,
            seeds,
            names,
        } => {
            let pipeline = open_pipeline(config, dictionary)?;
            let seeds = read_seeds(&seeds)?;
            let generated = pipeline.seed_names(&seeds);
            info!(identities = seeds.len(), generated, "seed index populated");

            for name in &names {
                let output = MatchOutput {
                    name,
                    ids: pipeline.match_name(name),
                };
                println!("{}", serde_json::to_string(&output)?);
            }
        }
    }

    Ok(())
}
