use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("inversion failed for target {target} after {expansions} window expansions")]
    InversionFailed {
        target: f64,
        expansions: usize
    },
    #[error("search window [{lower}, {upper}] must contain zero strictly inside it")]
    InvalidWindow {
        lower: f64,
        upper: f64
    },
    #[error("window growth factor {0} must be a finite number above 1")]
    InvalidGrowth(f64),
    #[error("root solver backend failed: {0}")]
    Backend(String)
}
