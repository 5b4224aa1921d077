use crate::configuration::{
    NumericConfiguration,
    DEFAULT_INTEGRAL_DELTA,
    DEFAULT_SEGMENTS
};
use crate::math::function::unaryfunction::{
    RealFunction,
    UnaryFunction
};

/// Midpoint rule over `segments` equal subintervals of `[x0, x1]`.
///
/// For `x0 > x1` the step is negative and the result is `-∫[x1,x0] f`.
/// Zero segments integrate to `0.0`.
pub fn definite_integral<F>(f: &F, x0: f64, x1: f64, segments: usize) -> f64 where
    F: UnaryFunction + ?Sized {
    if segments == 0 {
        return 0.0;
    }
    let step = (x1 - x0) / segments as f64;
    let mut integral = 0.0;
    let mut lhs_x = x0;
    for i in 1..=segments {
        let rhs_x = x0 + i as f64 * step;
        integral += f.value((lhs_x + rhs_x) / 2.0) * (rhs_x - lhs_x);
        lhs_x = rhs_x;
    }
    integral
}

pub fn definite_integral_default<F>(f: &F, x0: f64, x1: f64) -> f64 where
    F: UnaryFunction + ?Sized {
    definite_integral(f, x0, x1, DEFAULT_SEGMENTS)
}

pub fn definite_integral_from_configuration<F>(f: &F,
                                               x0: f64,
                                               x1: f64,
                                               configuration: &NumericConfiguration) -> f64 where
    F: UnaryFunction + ?Sized {
    definite_integral(f, x0, x1, configuration.segments)
}

/// `x ↦ ∫[0,x] f` with `ceil(|x| / delta)` midpoint segments.
///
/// The segment count scales with `|x|`, so evaluating far from the origin costs
/// proportionally more. Points whose segment count does not fit in `usize`
/// (including non-finite `x`) evaluate to `NaN`.
pub struct Antiderivative {
    function: RealFunction,
    delta: f64
}

impl Antiderivative {
    pub fn new(function: RealFunction, delta: f64) -> Antiderivative {
        Antiderivative {
            function: function,
            delta: delta
        }
    }

    pub fn from_configuration(function: RealFunction, configuration: &NumericConfiguration) -> Antiderivative {
        Antiderivative::new(function, configuration.integral_delta)
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Never 0 for non-zero `x`, even when `|x| / delta` underflows.
    /// `None` when the count is not finite or would saturate `usize`.
    pub fn segments_for(&self, x: f64) -> Option<usize> {
        let segments = (x.abs() / self.delta).ceil();
        if !segments.is_finite() || segments >= usize::MAX as f64 {
            return None;
        }
        Some((segments as usize).max(1))
    }
}

impl UnaryFunction for Antiderivative {
    fn value(&self, x: f64) -> f64 {
        if x == 0.0 {
            return 0.0;
        }
        let Some(segments) = self.segments_for(x) else {
            return f64::NAN;
        };
        if x > 0.0 {
            definite_integral(&self.function, 0.0, x, segments)
        } else {
            -definite_integral(&self.function, x, 0.0, segments)
        }
    }
}

pub fn indefinite_integral(f: &RealFunction, delta: f64) -> RealFunction {
    RealFunction::new(Antiderivative::new(f.clone(), delta))
}

pub fn indefinite_integral_default(f: &RealFunction) -> RealFunction {
    indefinite_integral(f, DEFAULT_INTEGRAL_DELTA)
}

pub fn indefinite_integral_from_configuration(f: &RealFunction, configuration: &NumericConfiguration) -> RealFunction {
    RealFunction::new(Antiderivative::from_configuration(f.clone(), configuration))
}

impl RealFunction {
    pub fn integral(&self, x0: f64, x1: f64, segments: usize) -> f64 {
        definite_integral(self, x0, x1, segments)
    }

    pub fn antiderivative(&self, delta: f64) -> RealFunction {
        indefinite_integral(self, delta)
    }
}
