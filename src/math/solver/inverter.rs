use tracing::{
    trace,
    warn
};

use crate::configuration::{
    NumericConfiguration,
    DEFAULT_EPSILON,
    DEFAULT_INVERSE_WINDOW,
    DEFAULT_MAX_EXPANSIONS,
    DEFAULT_WINDOW_GROWTH
};
use crate::math::function::algebra::{
    constant,
    difference
};
use crate::math::function::unaryfunction::{
    RealFunction,
    UnaryFunction
};
use crate::math::solver::rootfinder::{
    RootFinder,
    RootSolver
};
use crate::math::solver::solvererror::SolverError;

/// Inverts continuous monotonic functions by root finding on `g(x) - c`.
///
/// The search starts on `window` and, while no root is found, grows the bound
/// on the far side of the sign crossing by `growth`. Orientation (increasing or
/// decreasing) is read once from the initial window and kept for every
/// expansion, so a function that only shows its global direction outside the
/// initial window can be expanded the wrong way and run out of expansions.
#[derive(Clone, Copy, Debug)]
pub struct Inverter<S = RootFinder> {
    solver: S,
    window: (f64, f64),
    growth: f64,
    max_expansions: usize
}

impl Default for Inverter<RootFinder> {
    fn default() -> Inverter<RootFinder> {
        Inverter {
            solver: RootFinder::default(),
            window: DEFAULT_INVERSE_WINDOW,
            growth: DEFAULT_WINDOW_GROWTH,
            max_expansions: DEFAULT_MAX_EXPANSIONS
        }
    }
}

impl Inverter<RootFinder> {
    pub fn new(epsilon: f64) -> Inverter<RootFinder> {
        Inverter {
            solver: RootFinder::default().with_epsilon(epsilon),
            ..Inverter::default()
        }
    }

    pub fn from_configuration(configuration: &NumericConfiguration) -> Result<Inverter<RootFinder>, SolverError> {
        Inverter::with_solver(
            RootFinder::from_configuration(configuration),
            configuration.inverse_window,
            configuration.window_growth,
            configuration.max_expansions
        )
    }
}

impl<S> Inverter<S> where
    S: RootSolver {
    pub fn with_solver(solver: S,
                       window: (f64, f64),
                       growth: f64,
                       max_expansions: usize) -> Result<Inverter<S>, SolverError> {
        let (lower, upper) = window;
        if !(lower < 0.0 && 0.0 < upper) {
            return Err(SolverError::InvalidWindow { lower: lower, upper: upper });
        }
        if !(growth.is_finite() && growth > 1.0) {
            return Err(SolverError::InvalidGrowth(growth));
        }
        Ok(Inverter {
            solver: solver,
            window: window,
            growth: growth,
            max_expansions: max_expansions
        })
    }

    pub fn window(&self) -> (f64, f64) {
        self.window
    }

    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    /// `x` such that `g(x) ≈ target`.
    pub fn solve_for(&self, g: &RealFunction, target: f64) -> Result<f64, SolverError> {
        let helper = difference(g, &constant(target));
        let (mut x0, mut x1) = self.window;
        let up = helper.value(x0) < helper.value(x1);
        let mut expansions = 0;

        loop {
            if let Some(root) = self.solver.find_root(&helper, x0, x1) {
                trace!(target, root, expansions, "inverse found");
                return Ok(root);
            }
            if expansions == self.max_expansions {
                return Err(SolverError::InversionFailed {
                    target: target,
                    expansions: expansions
                });
            }

            if helper.value(x0) > 0.0 {
                if up {
                    x0 *= self.growth;
                } else {
                    x1 *= self.growth;
                }
            } else {
                if up {
                    x1 *= self.growth;
                } else {
                    x0 *= self.growth;
                }
            }
            expansions += 1;
            trace!(target, x0, x1, expansions, "search window expanded");
        }
    }

    pub fn invert(&self, g: &RealFunction) -> RealFunction where
        S: Clone + Send + Sync + 'static {
        RealFunction::new(self.inverse_of(g))
    }

    pub fn inverse_of(&self, g: &RealFunction) -> InverseFunction<S> where
        S: Clone {
        InverseFunction {
            function: g.clone(),
            inverter: self.clone()
        }
    }
}

/// `c ↦ g⁻¹(c)`.
///
/// Through `UnaryFunction::value` a failed inversion evaluates to `NaN`; use
/// `try_value` to get the error instead.
pub struct InverseFunction<S = RootFinder> {
    function: RealFunction,
    inverter: Inverter<S>
}

impl<S> InverseFunction<S> where
    S: RootSolver {
    pub fn try_value(&self, c: f64) -> Result<f64, SolverError> {
        self.inverter.solve_for(&self.function, c)
    }
}

impl<S> UnaryFunction for InverseFunction<S> where
    S: RootSolver + Send + Sync {
    fn value(&self, c: f64) -> f64 {
        match self.try_value(c) {
            Ok(x) => x,
            Err(error) => {
                warn!(%error, "inverse evaluated to NaN");
                f64::NAN
            }
        }
    }
}

/// Inverse of a continuous monotonic `g`, searching from `[-2, 2]`.
pub fn invert(g: &RealFunction, epsilon: f64) -> RealFunction {
    Inverter::new(epsilon).invert(g)
}

pub fn invert_default(g: &RealFunction) -> RealFunction {
    invert(g, DEFAULT_EPSILON)
}

impl RealFunction {
    pub fn inverse(&self, epsilon: f64) -> RealFunction {
        invert(self, epsilon)
    }
}
