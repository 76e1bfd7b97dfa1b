use crate::error::{Error, Result};

/// A closed interval `[a, b]` with `a < b`.
///
/// Construction is the single validation point: once an `Interval`
/// exists, its bounds are finite and properly ordered, and the samplers
/// and estimators rely on that instead of re-checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    /// Creates the interval `[a, b]`, rejecting empty or reversed bounds.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "interval bounds must be finite, got [{a}, {b}]"
            )));
        }
        if a >= b {
            return Err(Error::InvalidArgument(format!(
                "interval requires a < b, got [{a}, {b}]"
            )));
        }
        Ok(Interval { a, b })
    }

    pub fn lower(&self) -> f64 {
        self.a
    }

    pub fn upper(&self) -> f64 {
        self.b
    }

    /// Length `b - a`.
    pub fn length(&self) -> f64 {
        self.b - self.a
    }
}

/// The region an integral is taken over: an interval, or the product of
/// two intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    Line(Interval),
    Plane(Interval, Interval),
}

impl Domain {
    /// Measure of the region: length in one dimension, area in two.
    pub fn measure(&self) -> f64 {
        match self {
            Domain::Line(i) => i.length(),
            Domain::Plane(x, y) => x.length() * y.length(),
        }
    }

    pub fn dim(&self) -> usize {
        match self {
            Domain::Line(_) => 1,
            Domain::Plane(_, _) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_rejects_bad_bounds() {
        assert!(matches!(
            Interval::new(1.0, 1.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Interval::new(2.0, -1.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Interval::new(0.0, f64::INFINITY),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_measure() {
        let unit = Interval::new(0.0, 1.0).unwrap();
        let wide = Interval::new(-1.0, 1.0).unwrap();
        assert_eq!(Domain::Line(wide).measure(), 2.0);
        assert_eq!(Domain::Plane(wide, wide).measure(), 4.0);
        assert_eq!(Domain::Line(unit).dim(), 1);
        assert_eq!(Domain::Plane(unit, unit).dim(), 2);
    }
}
