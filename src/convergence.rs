use crate::error::{Error, Result};

/// One recorded step of a convergence sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergencePoint {
    /// Sample or grid-point count the estimate was taken at.
    pub n: usize,
    /// The estimate after observing exactly `n` samples/steps.
    pub estimate: f64,
    /// `|estimate - reference|`, fixed when the point is recorded.
    pub absolute_error: f64,
}

/// An append-only sequence of convergence points with strictly
/// increasing `n`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceSeries {
    points: Vec<ConvergencePoint>,
}

impl ConvergenceSeries {
    fn record(&mut self, n: usize, estimate: f64, reference: f64) -> Result<()> {
        if n == 0 {
            return Err(Error::InvalidArgument("step count must be positive".into()));
        }
        if let Some(last) = self.points.last() {
            if n <= last.n {
                return Err(Error::InvalidArgument(format!(
                    "step counts must be strictly increasing, got {n} after {}",
                    last.n
                )));
            }
        }
        self.points.push(ConvergencePoint {
            n,
            estimate,
            absolute_error: (estimate - reference).abs(),
        });
        Ok(())
    }

    /// The recorded points, in recording order.
    pub fn points(&self) -> &[ConvergencePoint] {
        &self.points
    }

    /// The most recent point, if any step has been recorded.
    pub fn last(&self) -> Option<&ConvergencePoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Batch drive mode: re-runs `step` at each count in `step_counts` and
/// records the estimate and its error against `reference`.
///
/// `step(n)` must return an independent estimate after observing exactly
/// `n` samples/steps. The counts must be strictly increasing.
pub fn track_batch<F>(
    step_counts: &[usize],
    mut step: F,
    reference: f64,
) -> Result<ConvergenceSeries>
where
    F: FnMut(usize) -> Result<f64>,
{
    if step_counts.is_empty() {
        return Err(Error::InvalidArgument("step counts are empty".into()));
    }
    let mut series = ConvergenceSeries::default();
    for &n in step_counts {
        let estimate = step(n)?;
        series.record(n, estimate, reference)?;
    }
    log::debug!("batch sweep recorded {} points", series.len());
    Ok(series)
}

/// Incremental drive mode: advances one accumulator step at a time from
/// `n = 1` to `max_n`, recording the running estimate at every step.
///
/// `advance()` must observe exactly one more sample and return the
/// estimate over everything observed so far.
pub fn track_incremental<F>(
    max_n: usize,
    mut advance: F,
    reference: f64,
) -> Result<ConvergenceSeries>
where
    F: FnMut() -> Result<f64>,
{
    if max_n == 0 {
        return Err(Error::InvalidArgument(
            "maximum step count must be positive".into(),
        ));
    }
    let mut series = ConvergenceSeries::default();
    for n in 1..=max_n {
        let estimate = advance()?;
        series.record(n, estimate, reference)?;
    }
    log::debug!("incremental sweep recorded {} points", series.len());
    Ok(series)
}
