use ndarray::{Array3, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle the samples of `data` and split them into `(train, test)`.
///
/// `test_fraction` is the share of samples placed in the test set,
/// rounded up: `ceil(test_fraction * n)`, clamped to `n`. The caller is
/// expected to have validated the fraction.
pub fn train_test_split<R: Rng + ?Sized>(
    data: &Array3<f64>,
    test_fraction: f64,
    rng: &mut R,
) -> (Array3<f64>, Array3<f64>) {
    let total = data.len_of(Axis(0));
    let mut indices: Vec<usize> = (0..total).collect();
    indices.shuffle(rng);

    let n_test = ((total as f64) * test_fraction).ceil() as usize;
    let n_test = n_test.min(total);

    // After this: indices = train, test_indices = test
    let test_indices = indices.split_off(total - n_test);

    log::debug!(
        "Dataset split: {} training, {} test",
        indices.len(),
        test_indices.len()
    );

    (
        data.select(Axis(0), &indices),
        data.select(Axis(0), &test_indices),
    )
}
