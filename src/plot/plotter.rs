use tracing::debug;

use crate::configuration::{
    NumericConfiguration,
    DEFAULT_SEGMENTS
};
use crate::math::function::unaryfunction::UnaryFunction;
use crate::plot::canvas::{
    Canvas,
    Color
};
use crate::plot::point::Point2D;

/// `segments + 1` evenly spaced samples of `f` on `[x0, x1]`.
pub fn sample_polyline<F>(f: &F, x0: f64, x1: f64, segments: usize) -> Vec<Point2D> where
    F: UnaryFunction + ?Sized {
    if segments == 0 {
        return vec![Point2D::new(x0, f.value(x0))];
    }
    let step = (x1 - x0) / segments as f64;
    (0..=segments)
        .map(|i| {
            let x = x0 + i as f64 * step;
            Point2D::new(x, f.value(x))
        })
        .collect()
}

/// Draws `segments` consecutive line segments approximating `f` on `[x0, x1]`.
///
/// Points where `f` is undefined (NaN or infinite) are still passed on; the
/// canvas decides what to do with them.
pub fn plot_function<C, F>(canvas: &mut C,
                           f: &F,
                           x0: f64,
                           x1: f64,
                           segments: usize,
                           color: &Color) where
    C: Canvas + ?Sized,
    F: UnaryFunction + ?Sized {
    let points = sample_polyline(f, x0, x1, segments);
    let undefined = points.iter().filter(|pt| !pt.is_finite()).count();
    if undefined > 0 {
        debug!(undefined, x0, x1, "plotting function with undefined samples");
    }
    for pair in points.windows(2) {
        canvas.plot_line(pair[0], pair[1], color);
    }
}

#[derive(Clone, Debug)]
pub struct Plotter {
    segments: usize,
    color: Color
}

impl Default for Plotter {
    fn default() -> Plotter {
        Plotter {
            segments: DEFAULT_SEGMENTS,
            color: Color::black()
        }
    }
}

impl Plotter {
    pub fn new(segments: usize, color: Color) -> Plotter {
        Plotter {
            segments: segments,
            color: color
        }
    }

    pub fn from_configuration(configuration: &NumericConfiguration) -> Plotter {
        Plotter::new(configuration.segments, Color::black())
    }

    pub fn with_color(self, color: Color) -> Plotter {
        Plotter { color: color, ..self }
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn plot<C, F>(&self, canvas: &mut C, f: &F, x0: f64, x1: f64) where
        C: Canvas + ?Sized,
        F: UnaryFunction + ?Sized {
        plot_function(canvas, f, x0, x1, self.segments, &self.color);
    }
}
