use std::path::{Path, PathBuf};

use ndarray::{Array2, Array3};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Sample files
// ---------------------------------------------------------------------------

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Non-blank rows of a headerless, comma-delimited file, fields trimmed.
///
/// Lines holding only whitespace count as blank. Row widths are not
/// checked here.
fn data_rows(path: &Path) -> Result<impl Iterator<Item = csv::Result<csv::StringRecord>>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    Ok(reader
        .into_records()
        .filter(|result| !matches!(result, Ok(record) if is_blank(record))))
}

/// Parse one sample file into a `(time, feature)` matrix.
///
/// Every row must have the same number of fields and every field must be
/// a number. Blank lines are skipped.
pub fn load_sample(path: &Path) -> Result<Array2<f64>> {
    let mut values = Vec::new();
    let mut rows = 0;
    let mut cols = 0;

    for (row, result) in data_rows(path)?.enumerate() {
        let record = result?;
        if row == 0 {
            cols = record.len();
        } else if record.len() != cols {
            return Err(Error::RaggedRow {
                path: path.to_path_buf(),
                row,
                expected: cols,
                found: record.len(),
            });
        }

        for (col, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| Error::Parse {
                path: path.to_path_buf(),
                row,
                col,
                value: field.to_string(),
            })?;
            values.push(value);
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(Error::EmptySample(path.to_path_buf()));
    }

    Ok(Array2::from_shape_vec((rows, cols), values)?)
}

/// Load every file in order and stack them along a new leading axis.
pub fn stack_samples(paths: &[PathBuf]) -> Result<Array3<f64>> {
    let mut expected: Option<(usize, usize)> = None;
    let mut flat = Vec::new();

    for path in paths {
        let sample = load_sample(path)?;
        let dim = sample.dim();

        match expected {
            None => expected = Some(dim),
            Some(expected) if expected != dim => {
                return Err(Error::ShapeMismatch {
                    path: path.clone(),
                    expected,
                    found: dim,
                });
            }
            Some(_) => {}
        }

        log::debug!("Loaded {} ({} x {})", path.display(), dim.0, dim.1);
        flat.extend(sample.iter().copied());
    }

    let (time_length, feature_length) = expected.unwrap_or((0, 0));
    Ok(Array3::from_shape_vec(
        (paths.len(), time_length, feature_length),
        flat,
    )?)
}

/// Row count of a sample file and the field count of its first row.
///
/// Rows are not checked against each other.
pub fn row_and_width(path: &Path) -> Result<(usize, usize)> {
    let mut rows = 0;
    let mut width = 0;
    for result in data_rows(path)? {
        let record = result?;
        if rows == 0 {
            width = record.len();
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(Error::EmptySample(path.to_path_buf()));
    }
    Ok((rows, width))
}

/// Field count of the first non-blank row only.
pub fn first_row_width(path: &Path) -> Result<usize> {
    match data_rows(path)?.next() {
        Some(record) => Ok(record?.len()),
        None => Err(Error::EmptySample(path.to_path_buf())),
    }
}

// ---------------------------------------------------------------------------
// Sidecar files
// ---------------------------------------------------------------------------

/// One feature name per line.
pub fn load_feature_names(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Space-delimited rows; the first field of each row is an integer label.
pub fn load_class_labels(path: &Path) -> Result<Vec<i64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .from_path(path)?;

    let mut labels = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let field = record.get(0).unwrap_or("").trim();
        let label = field.parse::<i64>().map_err(|_| Error::InvalidLabel {
            path: path.to_path_buf(),
            row,
            value: field.to_string(),
        })?;
        labels.push(label);
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_sample_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "sam_1.csv", "1.5,2,3\n4, 5 ,6e1\n");
        let sample = load_sample(&path).unwrap();
        assert_eq!(sample.dim(), (2, 3));
        assert_eq!(sample[[0, 0]], 1.5);
        assert_eq!(sample[[1, 1]], 5.0);
        assert_eq!(sample[[1, 2]], 60.0);
    }

    #[test]
    fn test_load_sample_rejects_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "sam_1.csv", "1,2\n3,abc\n");
        match load_sample(&path) {
            Err(Error::Parse { row, col, value, .. }) => {
                assert_eq!((row, col), (1, 1));
                assert_eq!(value, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_sample_rejects_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "sam_1.csv", "1,2,3\n4,5\n");
        assert!(matches!(
            load_sample(&path),
            Err(Error::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "sam_2.csv", "1,2,3\n   \n\t\n4,5,6\n");
        let sample = load_sample(&path).unwrap();
        assert_eq!(sample.dim(), (2, 3));
        assert_eq!(sample[[1, 0]], 4.0);
        assert_eq!(row_and_width(&path).unwrap(), (2, 3));

        let leading = write(dir.path(), "sam_3.csv", "  \n7,8\n9,10\n");
        assert_eq!(first_row_width(&leading).unwrap(), 2);
        assert_eq!(row_and_width(&leading).unwrap(), (2, 2));
    }

    #[test]
    fn test_empty_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "sam_1.csv", "");
        assert!(matches!(load_sample(&path), Err(Error::EmptySample(_))));
        assert!(matches!(row_and_width(&path), Err(Error::EmptySample(_))));
    }

    #[test]
    fn test_stack_shape_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "sam_1.csv", "1,2\n3,4\n");
        let b = write(dir.path(), "sam_2.csv", "1,2,3\n4,5,6\n");
        match stack_samples(&[a, b]) {
            Err(Error::ShapeMismatch { expected, found, .. }) => {
                assert_eq!(expected, (2, 2));
                assert_eq!(found, (2, 3));
            }
            other => panic!("expected shape mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_stack_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "sam_1.csv", "1,2\n3,4\n");
        let b = write(dir.path(), "sam_2.csv", "5,6\n7,8\n");
        let stacked = stack_samples(&[b, a]).unwrap();
        assert_eq!(stacked.dim(), (2, 2, 2));
        assert_eq!(stacked[[0, 0, 0]], 5.0);
        assert_eq!(stacked[[1, 1, 1]], 4.0);
    }

    #[test]
    fn test_row_and_width_uses_first_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "sam_1.csv", "1,2,3\n4,5\n6,7,8\n");
        assert_eq!(row_and_width(&path).unwrap(), (3, 3));
        assert_eq!(first_row_width(&path).unwrap(), 3);
    }

    #[test]
    fn test_class_labels_first_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "tar_class_labels.csv", "1 0.5\n2 0.7\n3\n");
        assert_eq!(load_class_labels(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_class_labels_rejects_non_integer() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "tar_class_labels.csv", "1\nx\n");
        assert!(matches!(
            load_class_labels(&path),
            Err(Error::InvalidLabel { row: 1, .. })
        ));
    }

    #[test]
    fn test_feature_names_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "feature_names_eeg.txt", "Fp1\nFp2\r\nCz\n");
        assert_eq!(load_feature_names(&path).unwrap(), ["Fp1", "Fp2", "Cz"]);
    }
}
