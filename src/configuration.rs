use std::io::{
    BufReader,
    Read
};

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;
use tracing::{
    debug,
    info
};

pub const DEFAULT_EPSILON: f64 = 1e-5;
pub const DEFAULT_DELTA: f64 = 1e-3;
pub const DEFAULT_SEGMENTS: usize = 100;
pub const DEFAULT_INTEGRAL_DELTA: f64 = 0.01;
pub const DEFAULT_SOLVE_RANGE: (f64, f64) = (-10000.0, 10000.0);
pub const DEFAULT_INVERSE_WINDOW: (f64, f64) = (-2.0, 2.0);
pub const DEFAULT_WINDOW_GROWTH: f64 = 2.0;
pub const DEFAULT_MAX_EXPANSIONS: usize = 64;
pub const DEFAULT_MAX_ITERATIONS: usize = 2000;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String
    }
}

impl ConfigurationError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigurationError {
        ConfigurationError::InvalidValue { field: field, reason: reason.into() }
    }
}

/// Numeric defaults shared by the solvers, calculus operators and plotter.
///
/// Every field is optional in JSON; missing fields take the value of the
/// matching `DEFAULT_*` constant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericConfiguration {
    /// Root-convergence tolerance on `|f(x)|`.
    pub epsilon: f64,
    /// Forward-difference step.
    pub delta: f64,
    /// Sampling density for definite integrals and plotting.
    pub segments: usize,
    /// Width per segment used by the antiderivative.
    pub integral_delta: f64,
    pub solve_range: (f64, f64),
    pub inverse_window: (f64, f64),
    pub window_growth: f64,
    pub max_expansions: usize,
    pub max_iterations: usize
}

impl Default for NumericConfiguration {
    fn default() -> NumericConfiguration {
        NumericConfiguration {
            epsilon: DEFAULT_EPSILON,
            delta: DEFAULT_DELTA,
            segments: DEFAULT_SEGMENTS,
            integral_delta: DEFAULT_INTEGRAL_DELTA,
            solve_range: DEFAULT_SOLVE_RANGE,
            inverse_window: DEFAULT_INVERSE_WINDOW,
            window_growth: DEFAULT_WINDOW_GROWTH,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            max_iterations: DEFAULT_MAX_ITERATIONS
        }
    }
}

impl NumericConfiguration {
    pub fn from_json(json: &str) -> Result<NumericConfiguration, ConfigurationError> {
        let configuration: NumericConfiguration = serde_json::from_str(json)?;
        configuration.validate()?;
        debug!(?configuration, "numeric configuration parsed");
        Ok(configuration)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<NumericConfiguration, ConfigurationError> {
        let configuration: NumericConfiguration = serde_json::from_reader(BufReader::new(reader))?;
        configuration.validate()?;
        info!(
            epsilon = configuration.epsilon,
            delta = configuration.delta,
            segments = configuration.segments,
            "numeric configuration loaded"
        );
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigurationError::invalid("epsilon", "must be a positive finite number"));
        }
        if !self.delta.is_finite() || self.delta == 0.0 {
            return Err(ConfigurationError::invalid("delta", "must be a non-zero finite number"));
        }
        if self.segments == 0 {
            return Err(ConfigurationError::invalid("segments", "must be at least 1"));
        }
        if !(self.integral_delta.is_finite() && self.integral_delta > 0.0) {
            return Err(ConfigurationError::invalid("integral_delta", "must be a positive finite number"));
        }
        let (x0, x1) = self.solve_range;
        if !(x0 < x1) {
            return Err(ConfigurationError::invalid(
                "solve_range",
                format!("lower bound {} is not below upper bound {}", x0, x1)
            ));
        }
        let (lower, upper) = self.inverse_window;
        if !(lower < 0.0 && 0.0 < upper) {
            return Err(ConfigurationError::invalid(
                "inverse_window",
                format!("[{}, {}] must contain zero strictly inside it", lower, upper)
            ));
        }
        if !(self.window_growth.is_finite() && self.window_growth > 1.0) {
            return Err(ConfigurationError::invalid("window_growth", "must be greater than 1"));
        }
        if self.max_expansions == 0 {
            return Err(ConfigurationError::invalid("max_expansions", "must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(ConfigurationError::invalid("max_iterations", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(NumericConfiguration::default().validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let configuration = NumericConfiguration::from_json(r#"{ "epsilon": 1e-8, "inverse_window": [-1.0, 3.0] }"#)
            .unwrap();
        assert_eq!(configuration.epsilon, 1e-8);
        assert_eq!(configuration.inverse_window, (-1.0, 3.0));
        assert_eq!(configuration.delta, DEFAULT_DELTA);
        assert_eq!(configuration.segments, DEFAULT_SEGMENTS);
        assert_eq!(configuration.max_expansions, DEFAULT_MAX_EXPANSIONS);
    }

    #[test]
    fn reader_and_string_agree() {
        let json = r#"{ "segments": 40, "solve_range": [-5.0, 5.0] }"#;
        let from_str = NumericConfiguration::from_json(json).unwrap();
        let from_reader = NumericConfiguration::from_reader(json.as_bytes()).unwrap();
        assert_eq!(from_str, from_reader);
    }

    #[test]
    fn rejects_invalid_values() {
        let error = NumericConfiguration::from_json(r#"{ "epsilon": -1.0 }"#).unwrap_err();
        assert!(matches!(error, ConfigurationError::InvalidValue { field: "epsilon", .. }));

        let error = NumericConfiguration::from_json(r#"{ "inverse_window": [1.0, 2.0] }"#).unwrap_err();
        assert!(matches!(error, ConfigurationError::InvalidValue { field: "inverse_window", .. }));

        let error = NumericConfiguration::from_json(r#"{ "segments": 0 }"#).unwrap_err();
        assert!(matches!(error, ConfigurationError::InvalidValue { field: "segments", .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let error = NumericConfiguration::from_json("{ epsilon: ").unwrap_err();
        assert!(matches!(error, ConfigurationError::JsonParse(_)));
    }

    #[test]
    fn serializes_round_trip() {
        let configuration = NumericConfiguration {
            window_growth: 3.0,
            ..NumericConfiguration::default()
        };
        let json = serde_json::to_string(&configuration).unwrap();
        assert_eq!(NumericConfiguration::from_json(&json).unwrap(), configuration);
    }
}
