use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::table::Dataset;
use crate::math::matrix::Matrix;

/// Two-class, two-feature "blobs" that are linearly separable by the sign of
/// feature 0.
///
/// Class 0 is centered at (-2, 0) and class 1 at (2, 0); each coordinate gets
/// uniform jitter in [-1, 1), so feature 0 never crosses zero. Samples
/// alternate between classes, `2 * per_class` rows in total.
pub fn separable_blobs(per_class: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let centers = [(-2.0f64, 0.0f64), (2.0f64, 0.0f64)];
    let mut data = Vec::with_capacity(per_class * 4);
    let mut labels = Vec::with_capacity(per_class * 2);
    for i in 0..per_class * 2 {
        let class = i % 2;
        let (cx, cy) = centers[class];
        data.push(cx + rng.gen_range(-1.0..1.0));
        data.push(cy + rng.gen_range(-1.0..1.0));
        labels.push(class);
    }
    Dataset::new(Matrix::from_vec(labels.len(), 2, data), labels)
}
