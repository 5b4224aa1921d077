use argmin::core::{
    CostFunction,
    Error,
    Executor,
    State,
    TerminationReason
};
use argmin::solver::brent::BrentRoot;
use tracing::{
    debug,
    trace
};

use crate::configuration::{
    NumericConfiguration,
    DEFAULT_EPSILON,
    DEFAULT_MAX_ITERATIONS
};
use crate::math::function::unaryfunction::RealFunction;
use crate::math::solver::rootfinder::RootSolver;
use crate::math::solver::solvererror::SolverError;

struct RootProblem {
    function: RealFunction
}

impl CostFunction for RootProblem {
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.function.value(*x))
    }
}

/// Brent's method (inverse quadratic interpolation with bisection fallback),
/// run through `argmin`.
///
/// `tolerance` bounds the bracket width, unlike `RootFinder` which stops on
/// `|f(x)|`.
#[derive(Clone, Copy, Debug)]
pub struct BrentSolver {
    tolerance: f64,
    max_iterations: usize
}

impl Default for BrentSolver {
    fn default() -> BrentSolver {
        BrentSolver::new(DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS)
    }
}

impl BrentSolver {
    pub fn new(tolerance: f64, max_iterations: usize) -> BrentSolver {
        BrentSolver {
            tolerance: tolerance,
            max_iterations: max_iterations
        }
    }

    pub fn from_configuration(configuration: &NumericConfiguration) -> BrentSolver {
        BrentSolver::new(configuration.epsilon, configuration.max_iterations)
    }

    /// `Ok(None)` when the bounds do not bracket a sign change.
    pub fn try_find_root(&self, f: &RealFunction, x0: f64, x1: f64) -> Result<Option<f64>, SolverError> {
        let y0 = f.value(x0);
        let y1 = f.value(x1);
        if y0 * y1 > 0.0 {
            trace!(x0, x1, y0, y1, "no sign change between bounds");
            return Ok(None);
        }
        if y0 == 0.0 {
            return Ok(Some(x0));
        }
        if y1 == 0.0 {
            return Ok(Some(x1));
        }

        let problem = RootProblem { function: f.clone() };
        let solver = BrentRoot::new(x0, x1, self.tolerance);
        let result = Executor::new(problem, solver)
            .configure(|state| state.param(x0).max_iters(self.max_iterations as u64))
            .run()
            .map_err(|error| SolverError::Backend(error.to_string()))?;

        let state = result.state();
        if let Some(TerminationReason::MaxItersReached) = state.get_termination_reason() {
            debug!(x0, x1, max_iterations = self.max_iterations, "brent search hit the iteration cap");
            return Ok(None);
        }
        Ok(state.get_best_param().copied())
    }
}

impl RootSolver for BrentSolver {
    fn find_root(&self, f: &RealFunction, x0: f64, x1: f64) -> Option<f64> {
        match self.try_find_root(f, x0, x1) {
            Ok(root) => root,
            Err(error) => {
                debug!(%error, "brent search failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::function::algebra::{
        constant,
        difference,
        identity,
        product,
        sine
    };
    use crate::math::solver::rootfinder::RootFinder;

    #[test]
    fn finds_pi() {
        let root = BrentSolver::new(1e-10, 100).find_root(&sine(), 3.0, 4.0).unwrap();
        assert_abs_diff_eq!(root, PI, epsilon = 1e-8);
    }

    #[test]
    fn agrees_with_bisection() {
        let f = difference(&product(&identity(), &identity()), &constant(5.0));
        let brent = BrentSolver::default().find_root(&f, 0.0, 10.0).unwrap();
        let bisection = RootFinder::default().find_root(&f, 0.0, 10.0).unwrap();
        assert_abs_diff_eq!(brent, bisection, epsilon = 1e-4);
        assert_abs_diff_eq!(brent, 5f64.sqrt(), epsilon = 1e-4);
    }

    #[test]
    fn root_on_bound() {
        let root = BrentSolver::default().find_root(&identity(), 0.0, 1.0);
        assert_eq!(root, Some(0.0));
    }

    #[test]
    fn no_sign_change_is_none() {
        let solver = BrentSolver::default();
        assert_eq!(solver.try_find_root(&constant(2.0), -1.0, 1.0).unwrap(), None);
        assert_eq!(solver.find_root(&constant(2.0), -1.0, 1.0), None);
    }
}
