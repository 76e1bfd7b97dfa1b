use std::f64::consts::PI;

use montequad::convergence::{track_batch, track_incremental};
use montequad::estimate::rejection::RejectionEstimator;
use montequad::estimate::{monte_carlo, trapezoid};
use montequad::integrands::{gaussian_2d, quarter_circle, GAUSSIAN_2D_INTEGRAL_UNIT_SQUARE};
use montequad::sampling::{sample_plane, seeded_rng};
use montequad::Interval;

const MAXN: usize = 10_000;

fn main() -> montequad::Result<()> {
    // Rejection sampling: one point per step, running estimate.
    let mut rng = seeded_rng(0);
    let mut est = RejectionEstimator::new(0.5)?;
    let side = est.side();
    let series = track_incremental(
        MAXN,
        || {
            let (x, y) = sample_plane(&mut rng, side, side, 1)?[0];
            est.observe(x, y);
            est.estimate()
        },
        PI,
    )?;
    if let Some(point) = series.last() {
        println!(
            "Iterations: {}, Points in Circle: {}, Estimated π: {}",
            est.count(),
            est.inside(),
            point.estimate
        );
        println!("Absolute error: {}", point.absolute_error);
    }

    // Trapezoidal rule: recompute the quarter-circle integral per grid.
    let counts: Vec<usize> = (2..=MAXN).collect();
    let series = track_batch(
        &counts,
        |n| Ok(4.0 * trapezoid(quarter_circle, 0.0, 1.0, n)?),
        PI,
    )?;
    if let Some(point) = series.last() {
        println!("Iterations: {}, Estimated π: {}", point.n, point.estimate);
        println!("Absolute error: {}", point.absolute_error);
    }

    // Monte Carlo on the 2-D Gaussian: an independent batch per count.
    let unit = Interval::new(0.0, 1.0)?;
    let mut rng = seeded_rng(1);
    let series = track_batch(
        &[1_000, 10_000, 100_000, 1_000_000],
        |n| monte_carlo::integrate_2d(gaussian_2d, unit, unit, n, &mut rng),
        GAUSSIAN_2D_INTEGRAL_UNIT_SQUARE,
    )?;
    for point in series.points() {
        println!("Estimated integral with N = {}: {}", point.n, point.estimate);
    }

    Ok(())
}
