//! Showcase functions assembled purely from the combinators.

use crate::math::calculus::derivative::derivative_default;
use crate::math::calculus::integral::indefinite_integral_default;
use crate::math::function::algebra::{
    compose,
    constant,
    difference,
    identity,
    product,
    quotient,
    sine,
    sum
};
use crate::math::function::unaryfunction::RealFunction;
use crate::math::solver::inverter::invert_default;
use crate::plot::canvas::Color;

pub struct ShowcaseFunction {
    name: &'static str,
    function: RealFunction
}

impl ShowcaseFunction {
    fn new(name: &'static str, function: RealFunction) -> ShowcaseFunction {
        ShowcaseFunction {
            name: name,
            function: function
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn function(&self) -> &RealFunction {
        &self.function
    }
}

pub const PALETTE: [&str; 8] = [
    "black",
    "blue",
    "red",
    "green",
    "brown",
    "purple",
    "dodger blue",
    "orange"
];

pub fn palette_color(index: usize) -> Color {
    Color::new(PALETTE[index % PALETTE.len()])
}

fn square() -> RealFunction {
    product(&identity(), &identity())
}

/// In order:
/// 1. `4`
/// 2. `sin(x) + 4`
/// 3. `sin(x + 4)`
/// 4. `sin(x) * x² / 100`
/// 5. `sin(x) / (sin'(x) + 2)`
/// 6. `∫[0,x] (x² + x - 3)`
/// 7. `5 * (sin(sin'(x)) - sin'(x))`
/// 8. `∛x`, as the inverse of `x³`
pub fn showcase_functions() -> Vec<ShowcaseFunction> {
    let four = constant(4.0);
    let sin_derivative = derivative_default(&sine());

    let scaled_sine = product(&sine(), &quotient(&square(), &constant(100.0)));
    let damped_sine = quotient(&sine(), &sum(&sin_derivative, &constant(2.0)));
    let polynomial = sum(&square(), &difference(&identity(), &constant(3.0)));
    let sine_gap = product(
        &constant(5.0),
        &difference(&compose(&sine(), &sin_derivative), &sin_derivative)
    );
    let cube = product(&square(), &identity());

    vec![
        ShowcaseFunction::new("constant", four.clone()),
        ShowcaseFunction::new("shifted sine", sum(&sine(), &four)),
        ShowcaseFunction::new("phase-shifted sine", compose(&sine(), &sum(&identity(), &four))),
        ShowcaseFunction::new("scaled sine", scaled_sine),
        ShowcaseFunction::new("damped sine", damped_sine),
        ShowcaseFunction::new("polynomial antiderivative", indefinite_integral_default(&polynomial)),
        ShowcaseFunction::new("sine gap", sine_gap),
        ShowcaseFunction::new("cube root", invert_default(&cube))
    ]
}
