//! Temporal data parser.
//!
//! Loads a directory of numbered `sam_*.csv` files into a
//! `(samples, time, features)` array, splits it into train/test sets, and
//! keeps a small INI configuration file in the user's home directory.
//!
//! ```no_run
//! use spikes_data::ReadCsv;
//!
//! let files = ReadCsv::new("data")?;
//! let samples = files.read_samples()?;
//! let split = files.get_split_data(0.5)?;
//! assert_eq!(split.full_data.dim(), samples.dim());
//! # Ok::<(), spikes_data::Error>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod platform;

pub use config::{get_config, write_config, Config, ConfigStore};
pub use data::model::{FeatureNames, SplitData, TimeFeatureLength};
pub use data::reader::ReadCsv;
pub use error::{Error, Result};
