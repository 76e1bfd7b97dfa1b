use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::Interval;
use crate::error::{Error, Result};

/// Draws `count` independent uniform samples from `interval`.
pub fn sample_interval<R: Rng>(rng: &mut R, interval: Interval, count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(Error::InvalidArgument(
            "sample count must be at least 1".into(),
        ));
    }
    let range = Uniform::new(interval.lower(), interval.upper());
    Ok((0..count).map(|_| range.sample(rng)).collect())
}

/// Draws `count` independent uniform points from the box `x × y`.
pub fn sample_plane<R: Rng>(
    rng: &mut R,
    x: Interval,
    y: Interval,
    count: usize,
) -> Result<Vec<(f64, f64)>> {
    if count == 0 {
        return Err(Error::InvalidArgument(
            "sample count must be at least 1".into(),
        ));
    }
    let rx = Uniform::new(x.lower(), x.upper());
    let ry = Uniform::new(y.lower(), y.upper());
    Ok((0..count)
        .map(|_| (rx.sample(rng), ry.sample(rng)))
        .collect())
}

/// A reproducible generator: the same seed replays the same samples.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A generator on a distinct substream of `seed`.
///
/// Streams with different `stream` values never overlap, so batches
/// drawn on different streams stay independent even when they share a
/// seed. This is what the parallel estimators hand to each worker.
pub fn substream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}
