use std::path::PathBuf;

use ndarray::{array, Array3, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spikes_data::{Error, ReadCsv};

fn data_location() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn init_data() -> Array3<f64> {
    ndarray::stack(
        Axis(0),
        &[
            array![
                [60.9714878, 60.70771189, 63.67634345, 68.34706252, 36.65221366],
                [22.0331885, 59.90428826, 22.24081467, 26.49077798, 67.15344005],
                [43.42420744, 21.39717261, 21.5964398, 50.58231716, 53.88228669],
                [56.3882456, 64.49245047, 33.62847541, 69.62686169, 27.66015559],
                [42.67148085, 42.57732552, 56.69777865, 45.80885181, 39.36014037],
            ]
            .view(),
            array![
                [42.46760853, 43.38494825, 43.16139244, 61.09694826, 43.71462622],
                [35.83176163, 40.15718186, 61.42337428, 67.20076627, 66.00662776],
                [34.11933193, 65.91810143, 21.55806121, 25.35323117, 67.44497639],
                [57.08793485, 51.40662274, 51.02275454, 35.67353513, 26.28231511],
                [26.86046066, 57.80954537, 38.45369823, 29.03152157, 48.5931396],
            ]
            .view(),
        ],
    )
    .unwrap()
}

#[test]
fn test_read_samples() {
    let files = ReadCsv::new(data_location()).unwrap();
    let samples = files.read_samples().unwrap();
    assert_eq!(samples.dim(), (2, 5, 5));
    assert_eq!(samples, init_data());
}

#[test]
fn test_sample_size() {
    let files = ReadCsv::new(data_location()).unwrap();
    assert_eq!(files.sample_size(), init_data().len_of(Axis(0)));
}

#[test]
fn test_time_feature_length() {
    let files = ReadCsv::new(data_location()).unwrap();
    let dims = files.time_feature_length().unwrap();
    assert_eq!(dims.time_length, 5);
    assert_eq!(dims.feature_length, 5);
}

#[test]
fn test_synthesized_feature_names() {
    let files = ReadCsv::new(data_location()).unwrap();
    let names = files.get_feature_names().unwrap();
    assert_eq!(names.number_of_features, 5);
    assert_eq!(
        names.name_features,
        ["feature 1", "feature 2", "feature 3", "feature 4", "feature 5"]
    );
}

#[test]
fn test_default_class_labels() {
    let files = ReadCsv::new(data_location()).unwrap();
    assert_eq!(files.class_labels().unwrap(), vec![1, 1]);
}

#[test]
fn test_split_half() {
    let files = ReadCsv::new(data_location()).unwrap();
    let split = files
        .get_split_data_with_rng(0.5, &mut StdRng::seed_from_u64(1))
        .unwrap();

    assert_eq!(split.train_len() + split.test_len(), 2);
    assert_eq!(split.test_len(), 1);
    assert_eq!(split.full_data, init_data());
    assert_eq!(split.training_split, 0.5);

    // The unseeded path gives the same sizes.
    let split = files.get_split_data(0.5).unwrap();
    assert_eq!(split.train_len() + split.test_len(), 2);
}

#[test]
fn test_split_rejects_fraction_above_one() {
    let files = ReadCsv::new(data_location()).unwrap();
    assert!(matches!(files.get_split_data(1.5), Err(Error::SplitData(f)) if f == 1.5));
}

#[test]
fn test_missing_directory() {
    let missing = data_location().join("does_not_exist");
    assert!(matches!(ReadCsv::new(missing), Err(Error::DataNotFound(_))));
}
