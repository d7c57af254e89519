use egui::{Color32, Painter, Rect, pos2, vec2};

use super::Shape;
use crate::counters::{ShapeClass, ShapeCounters};
use crate::geometry::{self, Point};
use crate::shape::ShapeId;
use crate::shape::core::ShapeCore;

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Debug)]
pub struct Rectangle {
    core: ShapeCore,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// A zero-size rectangle at (x, y).
    pub fn new(x: i32, y: i32, fill: Option<Color32>, counters: &mut ShapeCounters) -> Self {
        let (id, number) = counters.issue(ShapeClass::Rectangle);
        Self {
            core: ShapeCore::new(id, number, x, y, fill),
            width: 0,
            height: 0,
        }
    }

    pub(crate) fn duplicate(&self, counters: &mut ShapeCounters) -> Rectangle {
        let mut copy = Rectangle::new(self.core.x, self.core.y, self.core.fill, counters);
        copy.core.border_color = self.core.border_color;
        copy.core.border_width = self.core.border_width;
        copy.width = self.width;
        copy.height = self.height;
        copy
    }
}

impl Shape for Rectangle {
    fn id(&self) -> ShapeId {
        self.core.id
    }

    fn number(&self) -> u32 {
        self.core.number
    }

    fn shape_type(&self) -> &'static str {
        "Rectangle"
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

    fn set_to_defaults(&mut self) {
        self.set_size(40, 20);
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
        geometry::rect_contains(self.core.x, self.core.y, self.width, self.height, p)
    }

    fn is_invisible(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    fn paint(&self, painter: &Painter) {
        if self.width <= 0 || self.height <= 0 {
            return;
        }
        let rect = Rect::from_min_size(
            pos2(self.core.x as f32, self.core.y as f32),
            vec2(self.width as f32, self.height as f32),
        );
        if let Some(fill) = self.core.fill {
            painter.rect_filled(rect, 0.0, fill);
        }
        if self.core.border_width > 0 {
            painter.rect_stroke(rect, 0.0, self.core.border_stroke());
        }
    }
}
