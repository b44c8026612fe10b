use std::fs;
use std::path::{Path, PathBuf};

use ndarray::Array3;
use rand::Rng;

use super::loader;
use super::model::{FeatureNames, SplitData, TimeFeatureLength};
use super::natural::natural_sort;
use super::split::train_test_split;
use crate::error::{Error, Result};

/// File names starting with this prefix are samples.
pub const SAMPLE_PREFIX: &str = "sam";
/// Optional sidecar with one feature name per line.
pub const FEATURE_NAMES_FILE: &str = "feature_names_eeg.txt";
/// Optional sidecar with one class label per row.
pub const CLASS_LABELS_FILE: &str = "tar_class_labels.csv";

/// Reads a directory of `sam_*.csv` files, where `*` is the sample number.
///
/// The file list is read and naturally sorted once, when the reader is
/// built; everything else is recomputed on each call.
#[derive(Debug, Clone)]
pub struct ReadCsv {
    data_folder: PathBuf,
    prefixed: Vec<String>,
}

impl ReadCsv {
    /// Scan `data` for sample files.
    ///
    /// Fails with [`Error::DataNotFound`] if `data` is not a directory and
    /// with [`Error::NotEnoughData`] if fewer than two samples are present.
    pub fn new(data: impl AsRef<Path>) -> Result<Self> {
        let data_folder = data.as_ref().to_path_buf();
        if !data_folder.is_dir() {
            return Err(Error::DataNotFound(data_folder));
        }

        let mut prefixed = Vec::new();
        for entry in fs::read_dir(&data_folder)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !name.starts_with(SAMPLE_PREFIX) {
                continue;
            }
            if !entry.path().is_file() {
                log::warn!("Skipping '{}': not a regular file", entry.path().display());
                continue;
            }
            prefixed.push(name);
        }

        if prefixed.len() < 2 {
            return Err(Error::NotEnoughData {
                found: prefixed.len(),
            });
        }

        natural_sort(&mut prefixed);
        log::info!(
            "Found {} samples in {}",
            prefixed.len(),
            data_folder.display()
        );

        Ok(ReadCsv {
            data_folder,
            prefixed,
        })
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    /// Sample file names in natural order.
    pub fn sample_names(&self) -> &[String] {
        &self.prefixed
    }

    /// Full paths of the sample files in natural order.
    pub fn sample_paths(&self) -> Vec<PathBuf> {
        self.prefixed
            .iter()
            .map(|name| self.data_folder.join(name))
            .collect()
    }

    fn first_sample(&self) -> PathBuf {
        // At least two samples are guaranteed by `new`.
        self.data_folder.join(&self.prefixed[0])
    }

    /// Load every sample into a `(samples, time, features)` array.
    pub fn read_samples(&self) -> Result<Array3<f64>> {
        loader::stack_samples(&self.sample_paths())
    }

    /// Randomly split the samples, putting `split_to` of them in the test set.
    pub fn get_split_data(&self, split_to: f64) -> Result<SplitData> {
        self.get_split_data_with_rng(split_to, &mut rand::thread_rng())
    }

    /// Like [`ReadCsv::get_split_data`], shuffling with the given RNG.
    pub fn get_split_data_with_rng<R: Rng + ?Sized>(
        &self,
        split_to: f64,
        rng: &mut R,
    ) -> Result<SplitData> {
        if !(split_to > 0.0 && split_to <= 1.0) {
            return Err(Error::SplitData(split_to));
        }

        let data = self.read_samples()?;
        let (train, test) = train_test_split(&data, split_to, rng);

        Ok(SplitData {
            test_data: test,
            train_data: train,
            full_data: data,
            training_split: split_to,
        })
    }

    /// Number of sample files.
    pub fn sample_size(&self) -> usize {
        self.prefixed.len()
    }

    /// Rows and first-row columns of the first sample. Other files are not
    /// inspected.
    pub fn time_feature_length(&self) -> Result<TimeFeatureLength> {
        let (time_length, feature_length) = loader::row_and_width(&self.first_sample())?;
        Ok(TimeFeatureLength {
            time_length,
            feature_length,
        })
    }

    /// Names from `feature_names_eeg.txt` if present, otherwise
    /// `"feature 1"..` sized to the first sample's first row.
    pub fn get_feature_names(&self) -> Result<FeatureNames> {
        let sidecar = self.data_folder.join(FEATURE_NAMES_FILE);
        if sidecar.is_file() {
            let name_features = loader::load_feature_names(&sidecar)?;
            return Ok(FeatureNames {
                number_of_features: name_features.len(),
                name_features,
            });
        }

        let width = loader::first_row_width(&self.first_sample())?;
        Ok(FeatureNames::synthesized(width))
    }

    /// Labels from `tar_class_labels.csv` if present, otherwise one `1` per
    /// sample.
    pub fn class_labels(&self) -> Result<Vec<i64>> {
        let sidecar = self.data_folder.join(CLASS_LABELS_FILE);
        if sidecar.is_file() {
            return loader::load_class_labels(&sidecar);
        }
        Ok(vec![1; self.sample_size()])
    }
}
