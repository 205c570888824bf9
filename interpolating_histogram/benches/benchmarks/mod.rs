pub mod insertion;
pub mod percentile;

use interpolating_histogram::Histogram;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A histogram of `count` uniformly random values in [0, max)
pub fn random_histogram(count: usize, max: i64) -> Histogram {
    let mut rng = StdRng::seed_from_u64(count as u64);
    (0..count).map(|_| rng.gen_range(0..max)).collect()
}
