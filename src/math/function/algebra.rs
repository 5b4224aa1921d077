use crate::math::function::unaryfunction::{
    RealFunction,
    UnaryFunction
};

// ─────────────────────────────────────────────
// Leaf nodes
// ─────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub struct Constant {
    c: f64
}

impl Constant {
    pub fn new(c: f64) -> Constant {
        Constant { c: c }
    }

    pub fn c(&self) -> f64 {
        self.c
    }
}

impl UnaryFunction for Constant {
    fn value(&self, _x: f64) -> f64 {
        self.c
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Identity;

impl UnaryFunction for Identity {
    fn value(&self, x: f64) -> f64 {
        x
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Sine;

impl UnaryFunction for Sine {
    fn value(&self, x: f64) -> f64 {
        x.sin()
    }
}

// ─────────────────────────────────────────────
// Combinators
// ─────────────────────────────────────────────

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum BinaryOperator {
    Sum,
    Difference,
    Product,
    Quotient
}

impl BinaryOperator {
    /// Division by zero is left to IEEE-754 (±inf or NaN).
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOperator::Sum => lhs + rhs,
            BinaryOperator::Difference => lhs - rhs,
            BinaryOperator::Product => lhs * rhs,
            BinaryOperator::Quotient => lhs / rhs
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            BinaryOperator::Sum => '+',
            BinaryOperator::Difference => '-',
            BinaryOperator::Product => '*',
            BinaryOperator::Quotient => '/'
        }
    }
}

/// `x ↦ lhs(x) OP rhs(x)`
pub struct BinaryCombination {
    op: BinaryOperator,
    lhs: RealFunction,
    rhs: RealFunction
}

impl BinaryCombination {
    pub fn new(op: BinaryOperator, lhs: RealFunction, rhs: RealFunction) -> BinaryCombination {
        BinaryCombination {
            op: op,
            lhs: lhs,
            rhs: rhs
        }
    }

    pub fn op(&self) -> BinaryOperator {
        self.op
    }
}

impl UnaryFunction for BinaryCombination {
    fn value(&self, x: f64) -> f64 {
        self.op.apply(self.lhs.value(x), self.rhs.value(x))
    }
}

/// `x ↦ outer(inner(x))`
pub struct Composition {
    outer: RealFunction,
    inner: RealFunction
}

impl Composition {
    pub fn new(outer: RealFunction, inner: RealFunction) -> Composition {
        Composition {
            outer: outer,
            inner: inner
        }
    }
}

impl UnaryFunction for Composition {
    fn value(&self, x: f64) -> f64 {
        self.outer.value(self.inner.value(x))
    }
}

// ─────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────

pub fn constant(c: f64) -> RealFunction {
    RealFunction::new(Constant::new(c))
}

pub fn identity() -> RealFunction {
    RealFunction::new(Identity)
}

pub fn sine() -> RealFunction {
    RealFunction::new(Sine)
}

pub fn sum(g: &RealFunction, h: &RealFunction) -> RealFunction {
    g + h
}

pub fn difference(g: &RealFunction, h: &RealFunction) -> RealFunction {
    g - h
}

pub fn product(g: &RealFunction, h: &RealFunction) -> RealFunction {
    g * h
}

pub fn quotient(g: &RealFunction, h: &RealFunction) -> RealFunction {
    g / h
}

pub fn compose(g: &RealFunction, h: &RealFunction) -> RealFunction {
    g.compose(h)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    const SAMPLES: [f64; 7] = [-10.0, -2.5, -1.0, 0.0, 0.3, 4.0, 9.75];

    #[test]
    fn constant_ignores_argument() {
        for c in [-3.0, 0.0, 2.0, 1e9] {
            let f = constant(c);
            for x in SAMPLES {
                assert_eq!(f.value(x), c);
            }
        }
    }

    #[test]
    fn identity_returns_argument() {
        let f = identity();
        for x in SAMPLES {
            assert_eq!(f.value(x), x);
        }
    }

    #[test]
    fn sine_at_half_pi() {
        assert_abs_diff_eq!(sine().value(PI / 2.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sine().value(0.0), 0.0);
    }

    #[test]
    fn combinators_are_pointwise() {
        let g = sine();
        let h = sum(&identity(), &constant(4.0));
        for x in SAMPLES {
            assert_eq!(sum(&g, &h).value(x), g.value(x) + h.value(x));
            assert_eq!(difference(&g, &h).value(x), g.value(x) - h.value(x));
            assert_eq!(product(&g, &h).value(x), g.value(x) * h.value(x));
            assert_eq!(quotient(&g, &h).value(x), g.value(x) / h.value(x));
            assert_eq!(compose(&g, &h).value(x), g.value(h.value(x)));
        }
    }

    #[test]
    fn quotient_by_zero_follows_ieee() {
        let f = quotient(&constant(1.0), &identity());
        assert_eq!(f.value(0.0), f64::INFINITY);
        let g = quotient(&constant(0.0), &identity());
        assert!(g.value(0.0).is_nan());
    }

    #[test]
    fn compose_order() {
        let square = product(&identity(), &identity());
        let shift = sum(&identity(), &constant(1.0));
        // square(shift(2)) = 9, shift(square(2)) = 5
        assert_eq!(compose(&square, &shift).value(2.0), 9.0);
        assert_eq!(compose(&shift, &square).value(2.0), 5.0);
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(BinaryOperator::Quotient.to_char(), '/');
        assert_eq!(BinaryOperator::Sum.apply(1.5, 2.0), 3.5);
    }
}
