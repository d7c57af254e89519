use egui::{Color32, Painter};

use super::Shape;
use crate::counters::{ShapeClass, ShapeCounters};
use crate::geometry::{self, Point};
use crate::shape::ShapeId;
use crate::shape::core::ShapeCore;

/// Maximum pointer distance at which a line still counts as hit.
const HIT_SLOP: f64 = 2.0;

/// A line segment from its anchor to anchor + (width, height).
///
/// A line has no fill; its color is its border color, and visibility is
/// governed by the border width rather than the extent.
#[derive(Clone, Debug)]
pub struct Line {
    core: ShapeCore,
    width: i32,
    height: i32,
}

impl Line {
    /// A zero-length line with a thickness of 1 px.
    pub fn new(x: i32, y: i32, color: Option<Color32>, counters: &mut ShapeCounters) -> Self {
        let (id, number) = counters.issue(ShapeClass::Line);
        let mut core = ShapeCore::new(id, number, x, y, None);
        if let Some(color) = color {
            core.border_color = color;
        }
        core.border_width = 1;
        Self {
            core,
            width: 0,
            height: 0,
        }
    }

    pub(crate) fn duplicate(&self, counters: &mut ShapeCounters) -> Line {
        let mut copy = Line::new(self.core.x, self.core.y, Some(self.core.border_color), counters);
        copy.core.border_width = self.core.border_width;
        copy.width = self.width;
        copy.height = self.height;
        copy
    }

    fn end(&self) -> Point {
        Point::new(self.core.x + self.width, self.core.y + self.height)
    }
}

impl Shape for Line {
    fn id(&self) -> ShapeId {
        self.core.id
    }

    fn number(&self) -> u32 {
        self.core.number
    }

    fn shape_type(&self) -> &'static str {
        "Line"
    }

    fn x(&self) -> i32 {
        self.core.x
    }

    fn y(&self) -> i32 {
        self.core.y
    }

    fn set_x(&mut self, x: i32) {
        let (w, h) = (self.width(), self.height());
        self.core.x = x;
        self.set_size(w, h);
    }

    fn set_y(&mut self, y: i32) {
        let (w, h) = (self.width(), self.height());
        self.core.y = y;
        self.set_size(w, h);
    }

    fn set_position(&mut self, p: Point) {
        let (w, h) = (self.width(), self.height());
        self.core.x = p.x;
        self.core.y = p.y;
        self.set_size(w, h);
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Collapses the line to a point at its own anchor.
    fn set_to_defaults(&mut self) {
        self.set_size(0, 0);
    }

    fn fill(&self) -> Option<Color32> {
        None
    }

    /// Coloring a line colors its stroke.
    fn set_fill(&mut self, color: Color32) {
        self.core.border_color = color;
    }

    fn border_color(&self) -> Color32 {
        self.core.border_color
    }

    fn set_border_color(&mut self, color: Color32) {
        self.core.border_color = color;
    }

    fn border_width(&self) -> i32 {
        self.core.border_width
    }

    fn set_border_width(&mut self, width: i32) {
        self.core.border_width = width;
    }

    fn contains(&self, p: Point) -> bool {
        geometry::segment_distance(p, Point::new(self.core.x, self.core.y), self.end()) <= HIT_SLOP
    }

    fn is_invisible(&self) -> bool {
        self.core.border_width <= 0
    }

    fn paint(&self, painter: &Painter) {
        if self.core.border_width <= 0 {
            return;
        }
        painter.line_segment(
            [
                Point::new(self.core.x, self.core.y).to_pos2(),
                self.end().to_pos2(),
            ],
            self.core.border_stroke(),
        );
    }
}
