use tracing::info;

use funcalc::configuration::NumericConfiguration;
use funcalc::gallery::{
    palette_color,
    showcase_functions
};
use funcalc::plot::canvas::RecordingCanvas;
use funcalc::plot::plotter::Plotter;

const PLOT_RANGE: (f64, f64) = (-10.0, 10.0);

fn main() {
    tracing_subscriber::fmt::init();

    let configuration = NumericConfiguration::default();
    let plotter = Plotter::from_configuration(&configuration);
    let mut canvas = RecordingCanvas::new();

    for (index, showcase) in showcase_functions().iter().enumerate() {
        canvas.clear();
        let plotter = plotter.clone().with_color(palette_color(index));
        plotter.plot(&mut canvas, showcase.function(), PLOT_RANGE.0, PLOT_RANGE.1);

        let ys: Vec<f64> = canvas
            .segments()
            .iter()
            .map(|segment| segment.end().y())
            .filter(|y| y.is_finite())
            .collect();
        let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        info!(
            name = showcase.name(),
            color = %plotter.color(),
            segments = canvas.segments().len(),
            min_y,
            max_y,
            "plotted"
        );
    }
}
