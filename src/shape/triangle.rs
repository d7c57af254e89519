use egui::{Color32, Painter, Pos2, Shape as PaintShape, Stroke, pos2};

use super::Shape;
use crate::counters::{ShapeClass, ShapeCounters};
use crate::geometry::{self, Point};
use crate::shape::ShapeId;
use crate::shape::core::ShapeCore;

/// An isosceles triangle fit into the bounding box spanned from its anchor.
///
/// Orientation (mirrored/flipped) is encoded purely in the vertex ordering;
/// the sign of the reported width and height is derived from the vertices,
/// never stored separately.
#[derive(Clone, Debug)]
pub struct Triangle {
    core: ShapeCore,
    xs: [i32; 3],
    ys: [i32; 3],
}

impl Triangle {
    pub fn new(x: i32, y: i32, fill: Option<Color32>, counters: &mut ShapeCounters) -> Self {
        let (id, number) = counters.issue(ShapeClass::Triangle);
        let mut triangle = Self {
            core: ShapeCore::new(id, number, x, y, fill),
            xs: [0; 3],
            ys: [0; 3],
        };
        triangle.set_size(0, 0);
        triangle
    }

    pub(crate) fn duplicate(&self, counters: &mut ShapeCounters) -> Triangle {
        let mut copy = Triangle::new(self.core.x, self.core.y, self.core.fill, counters);
        copy.core.border_color = self.core.border_color;
        copy.core.border_width = self.core.border_width;
        copy.xs = self.xs;
        copy.ys = self.ys;
        copy
    }

    fn vertices(&self) -> Vec<Pos2> {
        let mut points: Vec<Pos2> = (0..3)
            .map(|i| pos2(self.xs[i] as f32, self.ys[i] as f32))
            .collect();
        // The tessellator wants counter-clockwise winding; a mirrored or
        // flipped triangle comes out clockwise.
        let cross = (points[1].x - points[0].x) * (points[2].y - points[0].y)
            - (points[1].y - points[0].y) * (points[2].x - points[0].x);
        if cross > 0.0 {
            points.reverse();
        }
        points
    }
}

impl Shape for Triangle {
    fn id(&self) -> ShapeId {
        self.core.id
    }

    fn number(&self) -> u32 {
        self.core.number
    }

    fn shape_type(&self) -> &'static str {
        "Triangle"
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
        let bounds = self.xs.iter().max().unwrap() - self.xs.iter().min().unwrap();
        if self.xs[1] < self.xs[0] { -bounds } else { bounds }
    }

    fn height(&self) -> i32 {
        let bounds = self.ys.iter().max().unwrap() - self.ys.iter().min().unwrap();
        if self.ys[1] < self.ys[2] { -bounds } else { bounds }
    }

    /// Base corners at (x, y+h) and (x+w, y+h), apex centered at (x+w/2, y).
    fn set_size(&mut self, width: i32, height: i32) {
        let (x, y) = (self.core.x, self.core.y);
        self.xs = [x, x + width, x + width / 2];
        self.ys = [y + height, y + height, y];
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
        geometry::polygon_contains(&self.xs, &self.ys, p)
    }

    fn is_invisible(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    fn paint(&self, painter: &Painter) {
        if self.is_invisible() {
            return;
        }
        let points = self.vertices();
        if let Some(fill) = self.core.fill {
            painter.add(PaintShape::convex_polygon(
                points.clone(),
                fill,
                Stroke::NONE,
            ));
        }
        if self.core.border_width > 0 {
            painter.add(PaintShape::closed_line(points, self.core.border_stroke()));
        }
    }
}
