use num_traits::Float;

use crate::error::{Error, Result};

/// Integrates `f` over `[a, b]` with the composite trapezoidal rule on
/// `n` evenly spaced grid points.
///
/// The endpoints carry half weight, interior points full weight, and the
/// spacing is `(b - a) / (n - 1)`. The result is fully determined by
/// `(f, a, b, n)`; no randomness is involved. A single grid point has no
/// interval to integrate over, so `n < 2` is rejected.
pub fn trapezoid<T, F>(f: F, a: T, b: T, n: usize) -> Result<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    if n < 2 {
        return Err(Error::InvalidArgument(
            "trapezoid rule needs at least 2 grid points".into(),
        ));
    }
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(Error::InvalidArgument(
            "trapezoid rule requires finite bounds with a < b".into(),
        ));
    }

    let h = (b - a) / T::from(n - 1).unwrap();
    let half = T::from(0.5).unwrap();
    let mut sum = T::zero();
    for i in 0..n {
        // Pin the last node to b so rounding in a + i*h cannot push the
        // grid past the bound.
        let x = if i == n - 1 {
            b
        } else {
            a + h * T::from(i).unwrap()
        };
        let y = f(x);
        if !y.is_finite() {
            let at = x.to_f64().unwrap_or(f64::NAN);
            return Err(Error::NonFiniteEvaluation(vec![at]));
        }
        let w = if i == 0 || i == n - 1 { half } else { T::one() };
        sum = sum + w * y;
    }
    Ok(h * sum)
}
