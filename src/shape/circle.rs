use egui::{Color32, Painter, Shape as PaintShape, Vec2, pos2};

use super::Shape;
use crate::counters::{ShapeClass, ShapeCounters};
use crate::geometry::{self, Point};
use crate::shape::ShapeId;
use crate::shape::core::ShapeCore;

/// A circle inscribed in the square spanned from its anchor; width and
/// height are always the committed diameter.
#[derive(Clone, Debug)]
pub struct Circle {
    core: ShapeCore,
    diameter: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, fill: Option<Color32>, counters: &mut ShapeCounters) -> Self {
        let (id, number) = counters.issue(ShapeClass::Circle);
        Self {
            core: ShapeCore::new(id, number, x, y, fill),
            diameter: 0,
        }
    }

    pub(crate) fn duplicate(&self, counters: &mut ShapeCounters) -> Circle {
        let mut copy = Circle::new(self.core.x, self.core.y, self.core.fill, counters);
        copy.core.border_color = self.core.border_color;
        copy.core.border_width = self.core.border_width;
        copy.diameter = self.diameter;
        copy
    }
}

impl Shape for Circle {
    fn id(&self) -> ShapeId {
        self.core.id
    }

    fn number(&self) -> u32 {
        self.core.number
    }

    fn shape_type(&self) -> &'static str {
        "Circle"
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
        self.diameter
    }

    fn height(&self) -> i32 {
        self.diameter
    }

    /// Commits the smaller of the two arguments, sign included, as the
    /// diameter; moving a degenerate circle keeps it degenerate.
    fn set_size(&mut self, width: i32, height: i32) {
        self.diameter = width.min(height);
    }

    fn set_to_defaults(&mut self) {
        self.set_size(30, 30);
    }

    fn fill(&self) -> Option<Color32> {
        self.core.fill
    }

    fn set_fill(&mut self, color: Color32) {
        self.core.fill = Some(color);
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
        geometry::ellipse_contains(self.core.x, self.core.y, self.diameter, self.diameter, p)
    }

    fn is_invisible(&self) -> bool {
        self.diameter <= 0
    }

    fn paint(&self, painter: &Painter) {
        if self.diameter <= 0 {
            return;
        }
        let radius = self.diameter as f32 / 2.0;
        let center = pos2(self.core.x as f32 + radius, self.core.y as f32 + radius);
        if let Some(fill) = self.core.fill {
            painter.add(PaintShape::ellipse_filled(center, Vec2::splat(radius), fill));
        }
        if self.core.border_width > 0 {
            painter.add(PaintShape::ellipse_stroke(
                center,
                Vec2::splat(radius),
                self.core.border_stroke(),
            ));
        }
    }
}
