use ndarray::{Array3, Axis};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Derived queries over a sample directory
// ---------------------------------------------------------------------------

/// Per-sample dimensions, taken from the first sample file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeFeatureLength {
    /// Number of rows (time steps).
    pub time_length: usize,
    /// Number of comma-separated columns in the first row.
    pub feature_length: usize,
}

/// Feature names, either read from the sidecar file or synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureNames {
    pub number_of_features: usize,
    pub name_features: Vec<String>,
}

impl FeatureNames {
    /// `"feature 1"` .. `"feature n"`.
    pub fn synthesized(n: usize) -> Self {
        FeatureNames {
            number_of_features: n,
            name_features: (1..=n).map(|i| format!("feature {i}")).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// SplitData – result of a train/test partition
// ---------------------------------------------------------------------------

/// Train/test partition of a sample set along the sample axis.
#[derive(Debug, Clone)]
pub struct SplitData {
    pub test_data: Array3<f64>,
    pub train_data: Array3<f64>,
    pub full_data: Array3<f64>,
    /// The test fraction that produced this split.
    pub training_split: f64,
}

impl SplitData {
    /// Array shapes only, for printing.
    pub fn summary(&self) -> SplitSummary {
        SplitSummary {
            test_shape: shape_of(&self.test_data),
            train_shape: shape_of(&self.train_data),
            full_shape: shape_of(&self.full_data),
            training_split: self.training_split,
        }
    }

    pub fn test_len(&self) -> usize {
        self.test_data.len_of(Axis(0))
    }

    pub fn train_len(&self) -> usize {
        self.train_data.len_of(Axis(0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitSummary {
    pub test_shape: [usize; 3],
    pub train_shape: [usize; 3],
    pub full_shape: [usize; 3],
    pub training_split: f64,
}

fn shape_of(array: &Array3<f64>) -> [usize; 3] {
    let (n, t, f) = array.dim();
    [n, t, f]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_names() {
        let names = FeatureNames::synthesized(3);
        assert_eq!(names.number_of_features, 3);
        assert_eq!(names.name_features, ["feature 1", "feature 2", "feature 3"]);
    }

    #[test]
    fn test_summary_shapes() {
        let split = SplitData {
            test_data: Array3::zeros((1, 4, 2)),
            train_data: Array3::zeros((3, 4, 2)),
            full_data: Array3::zeros((4, 4, 2)),
            training_split: 0.25,
        };
        let summary = split.summary();
        assert_eq!(summary.test_shape, [1, 4, 2]);
        assert_eq!(summary.train_shape, [3, 4, 2]);
        assert_eq!(summary.full_shape, [4, 4, 2]);
        assert_eq!(split.test_len() + split.train_len(), 4);
    }
}
