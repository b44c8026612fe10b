use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use spikes_data::{ConfigStore, FeatureNames, ReadCsv, TimeFeatureLength};

#[derive(Parser, Debug)]
#[command(
    name = "spikes-data",
    version,
    about = "Inspect and split directories of sam_*.csv sample files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print sample count, dimensions, feature names and class labels
    Inspect {
        /// Directory containing sam_*.csv files
        dir: PathBuf,
    },

    /// Shuffle the samples into train/test sets and print their shapes
    Split {
        dir: PathBuf,

        /// Share of samples placed in the test set
        #[arg(long, default_value_t = 0.5)]
        fraction: f64,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Read or update a config file in the home directory
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the config, creating it with defaults if missing
    Get { file: String },

    /// Set one key in an existing config file
    Set {
        file: String,
        section: String,
        key: String,
        value: String,
    },
}

#[derive(Serialize)]
struct Inspection {
    data_folder: PathBuf,
    sample_size: usize,
    samples: Vec<String>,
    dimensions: TimeFeatureLength,
    features: FeatureNames,
    class_labels: Vec<i64>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Inspect { dir } => inspect(dir),
            Command::Split {
                dir,
                fraction,
                seed,
            } => split(dir, fraction, seed),
            Command::Config(cmd) => config(cmd),
        }
    }
}

fn open(dir: PathBuf) -> Result<ReadCsv> {
    ReadCsv::new(&dir).with_context(|| format!("opening sample directory {}", dir.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn inspect(dir: PathBuf) -> Result<()> {
    let files = open(dir)?;

    let inspection = Inspection {
        data_folder: files.data_folder().to_path_buf(),
        sample_size: files.sample_size(),
        samples: files.sample_names().to_vec(),
        dimensions: files.time_feature_length().context("reading first sample")?,
        features: files.get_feature_names().context("reading feature names")?,
        class_labels: files.class_labels().context("reading class labels")?,
    };

    if inspection.class_labels.len() != inspection.sample_size {
        log::warn!(
            "{} class labels for {} samples",
            inspection.class_labels.len(),
            inspection.sample_size
        );
    }

    print_json(&inspection)
}

fn split(dir: PathBuf, fraction: f64, seed: Option<u64>) -> Result<()> {
    let files = open(dir)?;

    let split = match seed {
        Some(seed) => files.get_split_data_with_rng(fraction, &mut StdRng::seed_from_u64(seed)),
        None => files.get_split_data(fraction),
    }
    .context("splitting samples")?;

    log::info!(
        "Split {} samples: {} train, {} test",
        files.sample_size(),
        split.train_len(),
        split.test_len()
    );
    print_json(&split.summary())
}

fn config(cmd: ConfigCommand) -> Result<()> {
    let store = ConfigStore::home()?;

    match cmd {
        ConfigCommand::Get { file } => {
            let config = store
                .get_config(&file)
                .with_context(|| format!("reading {}", store.path(&file).display()))?;
            print_json(&config)
        }
        ConfigCommand::Set {
            file,
            section,
            key,
            value,
        } => {
            if !store.path(&file).is_file() {
                bail!(
                    "no config at {}; run `config get {file}` first",
                    store.path(&file).display()
                );
            }
            let mut config = store.get_config(&file)?;
            config.set(&section, &key, value);
            store.write_config(&config, &file)?;
            print_json(&config)
        }
    }
}
