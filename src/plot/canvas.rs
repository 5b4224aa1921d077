use std::fmt;

use crate::plot::point::Point2D;

/// Colour name understood by the rendering surface (`"black"`, `"dodger blue"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(name: impl Into<String>) -> Color {
        Color(name.into())
    }

    pub fn black() -> Color {
        Color::new("black")
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Color {
        Color::new(name)
    }
}

/// The one capability required from a display surface.
pub trait Canvas {
    fn plot_line(&mut self, from: Point2D, to: Point2D, color: &Color);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    start: Point2D,
    end: Point2D,
    color: Color
}

impl Segment {
    pub fn start(&self) -> Point2D {
        self.start
    }

    pub fn end(&self) -> Point2D {
        self.end
    }

    pub fn color(&self) -> &Color {
        &self.color
    }
}

/// Keeps every segment in memory instead of drawing it.
#[derive(Default, Debug)]
pub struct RecordingCanvas {
    segments: Vec<Segment>
}

impl RecordingCanvas {
    pub fn new() -> RecordingCanvas {
        RecordingCanvas::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn plot_line(&mut self, from: Point2D, to: Point2D, color: &Color) {
        self.segments.push(Segment {
            start: from,
            end: to,
            color: color.clone()
        });
    }
}
