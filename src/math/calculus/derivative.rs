use crate::configuration::{
    NumericConfiguration,
    DEFAULT_DELTA
};
use crate::math::function::unaryfunction::{
    RealFunction,
    UnaryFunction
};

/// Forward finite difference: `x ↦ (g(x + delta) - g(x)) / delta`.
///
/// `delta == 0` divides by zero at evaluation time.
pub struct ForwardDifference {
    function: RealFunction,
    delta: f64
}

impl ForwardDifference {
    pub fn new(function: RealFunction, delta: f64) -> ForwardDifference {
        ForwardDifference {
            function: function,
            delta: delta
        }
    }

    pub fn from_configuration(function: RealFunction, configuration: &NumericConfiguration) -> ForwardDifference {
        ForwardDifference::new(function, configuration.delta)
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl UnaryFunction for ForwardDifference {
    fn value(&self, x: f64) -> f64 {
        (self.function.value(x + self.delta) - self.function.value(x)) / self.delta
    }
}

pub fn derivative(g: &RealFunction, delta: f64) -> RealFunction {
    RealFunction::new(ForwardDifference::new(g.clone(), delta))
}

pub fn derivative_default(g: &RealFunction) -> RealFunction {
    derivative(g, DEFAULT_DELTA)
}

pub fn derivative_from_configuration(g: &RealFunction, configuration: &NumericConfiguration) -> RealFunction {
    RealFunction::new(ForwardDifference::from_configuration(g.clone(), configuration))
}

impl RealFunction {
    pub fn derivative(&self, delta: f64) -> RealFunction {
        derivative(self, delta)
    }
}
