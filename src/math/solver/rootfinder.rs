use tracing::{
    debug,
    trace
};

use crate::configuration::{
    NumericConfiguration,
    DEFAULT_EPSILON,
    DEFAULT_MAX_ITERATIONS,
    DEFAULT_SOLVE_RANGE
};
use crate::math::function::unaryfunction::{
    RealFunction,
    UnaryFunction
};

/// Bracketing root search over `[x0, x1]`.
///
/// `None` means no root was found in the bracket. It is not a proof that none
/// exists: a missing sign change between the bounds is treated as "no root".
pub trait RootSolver {
    fn find_root(&self, f: &RealFunction, x0: f64, x1: f64) -> Option<f64>;
}

/// Sign-change search that halves `[left, right]` until `|f(middle)| < epsilon`.
///
/// Convergence is judged on the function value, not on the bracket width.
/// The search also gives up when the bracket can no longer shrink in `f64`
/// (`middle` equals one of the bounds) or after `max_iterations` halvings.
#[derive(Clone, Copy, Debug)]
pub struct RootFinder {
    epsilon: f64,
    range: (f64, f64),
    max_iterations: usize
}

impl Default for RootFinder {
    fn default() -> RootFinder {
        RootFinder::new(DEFAULT_EPSILON, DEFAULT_SOLVE_RANGE, DEFAULT_MAX_ITERATIONS)
    }
}

impl RootFinder {
    pub fn new(epsilon: f64, range: (f64, f64), max_iterations: usize) -> RootFinder {
        RootFinder {
            epsilon: epsilon,
            range: range,
            max_iterations: max_iterations
        }
    }

    pub fn from_configuration(configuration: &NumericConfiguration) -> RootFinder {
        RootFinder::new(
            configuration.epsilon,
            configuration.solve_range,
            configuration.max_iterations
        )
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn with_epsilon(self, epsilon: f64) -> RootFinder {
        RootFinder { epsilon: epsilon, ..self }
    }

    pub fn solve<F>(&self, f: &F, x0: f64, x1: f64) -> Option<f64> where
        F: UnaryFunction + ?Sized {
        self.search(f, x0, x1, self.epsilon)
    }

    pub fn solve_in_range<F>(&self, f: &F) -> Option<f64> where
        F: UnaryFunction + ?Sized {
        self.search(f, self.range.0, self.range.1, self.epsilon)
    }

    fn search<F>(&self, f: &F, x0: f64, x1: f64, epsilon: f64) -> Option<f64> where
        F: UnaryFunction + ?Sized {
        let y0 = f.value(x0);
        let y1 = f.value(x1);
        if y0 * y1 > 0.0 {
            trace!(x0, x1, y0, y1, "no sign change between bounds");
            return None;
        }

        let up = y0 < y1;
        let mut left = x0;
        let mut right = x1;
        let mut iterations = 0;

        while left <= right {
            if iterations == self.max_iterations {
                debug!(left, right, iterations, "root search hit the iteration cap");
                return None;
            }
            iterations += 1;

            let middle = (left + right) / 2.0;
            let y = f.value(middle);
            if y.abs() < epsilon {
                trace!(root = middle, iterations, "root found");
                return Some(middle);
            }
            if middle == left || middle == right {
                debug!(left, right, y, "bracket collapsed without reaching tolerance");
                return None;
            }

            if y > epsilon {
                if up {
                    right = middle;
                } else {
                    left = middle;
                }
            } else {
                if up {
                    left = middle;
                } else {
                    right = middle;
                }
            }
        }
        None
    }
}

impl RootSolver for RootFinder {
    fn find_root(&self, f: &RealFunction, x0: f64, x1: f64) -> Option<f64> {
        self.solve(f, x0, x1)
    }
}

/// Root of `f` in `[x0, x1]` with tolerance `epsilon` on `|f(root)|`.
pub fn solve<F>(f: &F, x0: f64, x1: f64, epsilon: f64) -> Option<f64> where
    F: UnaryFunction + ?Sized {
    RootFinder::default().search(f, x0, x1, epsilon)
}

/// Root of `f` in `[-10000, 10000]` with tolerance `1e-5`.
pub fn solve_in_default_range<F>(f: &F) -> Option<f64> where
    F: UnaryFunction + ?Sized {
    RootFinder::default().solve_in_range(f)
}
