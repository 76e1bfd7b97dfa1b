pub mod accumulate;
pub mod monte_carlo;
pub mod quadrature;
pub mod rejection;

pub use accumulate::RunningEstimate;
pub use quadrature::trapezoid;
pub use rejection::{estimate_pi, estimate_pi_parallel, RejectionEstimator};
