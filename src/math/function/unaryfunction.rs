use std::fmt;
use std::ops::{
    Add,
    Div,
    Mul,
    Neg,
    Sub
};
use std::sync::Arc;

use crate::math::function::algebra::{
    BinaryCombination,
    BinaryOperator,
    Composition,
    Constant
};

/// A pure mapping from one real number to another.
///
/// `Send + Sync` is a supertrait so that `Arc<dyn UnaryFunction>` can be shared
/// between threads. Implementations hold no mutable state: evaluating the same
/// point twice gives the same result.
pub trait UnaryFunction: Send + Sync {
    fn value(&self, x: f64) -> f64;
}

impl<F> UnaryFunction for F where
    F: Fn(f64) -> f64 + Send + Sync {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Shared handle to a function node.
///
/// Cloning only bumps a reference count, so combinators take operands by
/// reference and keep their own clone of the handle.
#[derive(Clone)]
pub struct RealFunction {
    node: Arc<dyn UnaryFunction>
}

impl RealFunction {
    pub fn new<F>(node: F) -> RealFunction where
        F: UnaryFunction + 'static {
        RealFunction { node: Arc::new(node) }
    }

    pub fn from_fn<F>(f: F) -> RealFunction where
        F: Fn(f64) -> f64 + Send + Sync + 'static {
        RealFunction::new(f)
    }

    pub fn value(&self, x: f64) -> f64 {
        self.node.value(x)
    }

    /// `x ↦ self(inner(x))`
    pub fn compose(&self, inner: &RealFunction) -> RealFunction {
        RealFunction::new(Composition::new(self.clone(), inner.clone()))
    }
}

impl UnaryFunction for RealFunction {
    fn value(&self, x: f64) -> f64 {
        self.node.value(x)
    }
}

impl fmt::Debug for RealFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealFunction")
            .field("node", &Arc::as_ptr(&self.node))
            .finish()
    }
}

// ─────────────────────────────────────────────
// Operator overloads
// ─────────────────────────────────────────────

fn combine(lhs: &RealFunction, rhs: &RealFunction, op: BinaryOperator) -> RealFunction {
    RealFunction::new(BinaryCombination::new(op, lhs.clone(), rhs.clone()))
}

macro_rules! impl_binary_operator {
    ($trait_name:ident, $method:ident, $op:expr) => {
        impl $trait_name<RealFunction> for RealFunction {
            type Output = RealFunction;

            fn $method(self, rhs: RealFunction) -> Self::Output {
                combine(&self, &rhs, $op)
            }
        }

        impl<'a> $trait_name<&'a RealFunction> for &'a RealFunction {
            type Output = RealFunction;

            fn $method(self, rhs: &'a RealFunction) -> Self::Output {
                combine(self, rhs, $op)
            }
        }
    };
}

impl_binary_operator!(Add, add, BinaryOperator::Sum);
impl_binary_operator!(Sub, sub, BinaryOperator::Difference);
impl_binary_operator!(Mul, mul, BinaryOperator::Product);
impl_binary_operator!(Div, div, BinaryOperator::Quotient);

impl Neg for RealFunction {
    type Output = RealFunction;

    fn neg(self) -> Self::Output {
        let minus_one = RealFunction::new(Constant::new(-1.0));
        combine(&minus_one, &self, BinaryOperator::Product)
    }
}

impl Neg for &RealFunction {
    type Output = RealFunction;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
