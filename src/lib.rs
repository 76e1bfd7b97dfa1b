pub mod convergence;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod integrands;
pub mod sampling;

pub use convergence::{track_batch, track_incremental, ConvergencePoint, ConvergenceSeries};
pub use domain::{Domain, Interval};
pub use error::{Error, Result};
pub use estimate::{estimate_pi, estimate_pi_parallel, trapezoid, RejectionEstimator, RunningEstimate};
