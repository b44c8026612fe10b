use std::path::PathBuf;

/// Errors produced while loading sample directories or touching the
/// configuration file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The constructor path does not exist or is not a directory.
    #[error("data files not found: '{}' is not a directory", .0.display())]
    DataNotFound(PathBuf),

    #[error("there should be more than one sample to continue (found {found})")]
    NotEnoughData { found: usize },

    #[error("split fraction should be in (0, 1], got {0}")]
    SplitData(f64),

    #[error("make sure the config file is available at '{}'", .0.display())]
    ConfigFileNotFound(PathBuf),

    #[error("could not resolve the home directory")]
    HomeDirNotFound,

    #[error("sample file '{}' is empty", .0.display())]
    EmptySample(PathBuf),

    #[error(
        "sample '{}' has shape {found:?}, expected {expected:?}",
        path.display()
    )]
    ShapeMismatch {
        path: PathBuf,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("{}: row {row}, column {col}: '{value}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        row: usize,
        col: usize,
        value: String,
    },

    #[error("{}: row {row} has {found} fields, expected {expected}", path.display())]
    RaggedRow {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}: row {row}: '{value}' is not an integer class label", path.display())]
    InvalidLabel {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Ini(#[from] ini::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
