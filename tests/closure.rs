use approx::assert_abs_diff_eq;

use funcalc::RealFunction;
use funcalc::configuration::NumericConfiguration;
use funcalc::math::calculus::derivative::{
    derivative,
    derivative_from_configuration
};
use funcalc::math::calculus::integral::{
    definite_integral,
    definite_integral_from_configuration,
    indefinite_integral,
    indefinite_integral_from_configuration
};
use funcalc::math::function::algebra::{
    compose,
    constant,
    identity,
    product,
    sine,
    sum
};
use funcalc::math::solver::inverter::{
    invert,
    Inverter
};
use funcalc::math::solver::rootfinder::{
    solve,
    RootFinder
};
use funcalc::plot::canvas::{
    Color,
    RecordingCanvas
};
use funcalc::plot::plotter::plot_function;

#[test]
fn derivative_of_antiderivative_recovers_function() {
    let f = sum(&sine(), &constant(1.0));
    let recovered = derivative(&indefinite_integral(&f, 0.001), 0.01);
    for x in [-2.0, 0.5, 1.5] {
        assert_abs_diff_eq!(recovered.value(x), f.value(x), epsilon = 1e-2);
    }
}

#[test]
fn integral_of_derivative_is_difference() {
    let cube = product(&identity(), &product(&identity(), &identity()));
    let d = derivative(&cube, 1e-6);
    assert_abs_diff_eq!(definite_integral(&d, 1.0, 2.0, 1000), 7.0, epsilon = 1e-3);
}

#[test]
fn root_of_derivative_is_extremum() {
    // sin has a maximum at pi/2
    let d = derivative(&sine(), 1e-6);
    let root = solve(&d, 0.5, 2.5, 1e-7).unwrap();
    assert_abs_diff_eq!(root, std::f64::consts::FRAC_PI_2, epsilon = 1e-5);
}

#[test]
fn inverse_composes_to_identity() {
    let g = sum(&product(&constant(3.0), &identity()), &constant(1.0));
    let round_trip = compose(&invert(&g, 1e-9), &g);
    for x in [-1.5, -0.2, 0.0, 0.4, 3.0, 25.0] {
        assert_abs_diff_eq!(round_trip.value(x), x, epsilon = 1e-8);
    }
}

#[test]
fn inverse_of_antiderivative() {
    // F(x) = ∫[0,x] 2 = 2x, so F⁻¹(y) = y / 2
    let antiderivative = indefinite_integral(&constant(2.0), 0.01);
    let inverse = antiderivative.inverse(1e-6);
    assert_abs_diff_eq!(inverse.value(3.0), 1.5, epsilon = 1e-5);
    assert_abs_diff_eq!(inverse.value(-9.0), -4.5, epsilon = 1e-5);
}

#[test]
fn configuration_drives_every_operation() {
    let configuration = NumericConfiguration::from_json(
        r#"{ "epsilon": 1e-9, "segments": 8, "delta": 0.5, "integral_delta": 2.0, "inverse_window": [-1.0, 1.0] }"#
    ).unwrap();
    let defaults = NumericConfiguration::default();
    let square = product(&identity(), &identity());

    // forward difference of x^2 at 1 is 2 + delta
    assert_abs_diff_eq!(derivative_from_configuration(&square, &configuration).value(1.0), 2.5, epsilon = 1e-12);
    assert_abs_diff_eq!(derivative_from_configuration(&square, &defaults).value(1.0), 2.001, epsilon = 1e-9);

    // midpoint error on [0, 1] for x^2 is 1 / (12 n^2)
    assert_abs_diff_eq!(
        definite_integral_from_configuration(&square, 0.0, 1.0, &configuration),
        1.0 / 3.0 - 1.0 / 768.0,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        definite_integral_from_configuration(&square, 0.0, 1.0, &defaults),
        1.0 / 3.0 - 1.0 / 120000.0,
        epsilon = 1e-12
    );

    // integral_delta = 2 integrates [0, 2] in one segment: 2 * 1^2
    assert_abs_diff_eq!(indefinite_integral_from_configuration(&square, &configuration).value(2.0), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        indefinite_integral_from_configuration(&square, &defaults).value(2.0),
        8.0 / 3.0,
        epsilon = 1e-4
    );

    let finder = RootFinder::from_configuration(&configuration);
    let root = finder.solve(&sum(&identity(), &constant(0.25)), -1.0, 1.0).unwrap();
    assert_abs_diff_eq!(root, -0.25, epsilon = 1e-9);

    let inverter = Inverter::from_configuration(&configuration).unwrap();
    assert_abs_diff_eq!(inverter.solve_for(&identity(), 6.0).unwrap(), 6.0, epsilon = 1e-9);

    let mut canvas = RecordingCanvas::new();
    plot_function(&mut canvas, &sine(), 0.0, 1.0, configuration.segments, &Color::black());
    assert_eq!(canvas.segments().len(), 8);
}

#[test]
fn closures_mix_with_combinators() {
    let exp = RealFunction::from_fn(f64::exp);
    let f = &exp - &constant(2.0);
    let root = solve(&f, 0.0, 2.0, 1e-10).unwrap();
    assert_abs_diff_eq!(root, 2f64.ln(), epsilon = 1e-9);
}
