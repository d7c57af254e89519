use std::fmt;

use egui::{Color32, Painter};

mod circle;
mod core;
mod image;
mod line;
mod oval;
mod rectangle;
mod square;
mod triangle;

pub use circle::Circle;
pub use image::ImageShape;
pub use line::Line;
pub use oval::Oval;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;

use crate::animate::ShapeVisitor;
use crate::counters::ShapeCounters;
use crate::error::EditorError;
use crate::geometry::Point;

/// Stable identity of a shape for the lifetime of the editor session.
/// Issued by [`ShapeCounters`]; never reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ShapeId(pub(crate) u64);

/// Contract every drawable entity implements.
///
/// Mutating the anchor re-commits the current size so variant-specific
/// clamping (Circle, Square) re-applies; `set_size` is the single place
/// geometry is rebuilt.
pub trait Shape {
    fn id(&self) -> ShapeId;

    /// Sequence number within the variant family, assigned at construction.
    fn number(&self) -> u32;

    fn shape_type(&self) -> &'static str;

    fn x(&self) -> i32;
    fn y(&self) -> i32;
    fn set_x(&mut self, x: i32);
    fn set_y(&mut self, y: i32);
    fn set_position(&mut self, p: Point);

    /// Committed width. May be negative for variants that encode
    /// orientation in their geometry.
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn set_size(&mut self, width: i32, height: i32);

    /// Resets the shape to its fixed per-variant default size.
    fn set_to_defaults(&mut self);

    fn fill(&self) -> Option<Color32>;
    fn set_fill(&mut self, color: Color32);
    fn border_color(&self) -> Color32;
    fn set_border_color(&mut self, color: Color32);
    fn border_width(&self) -> i32;
    fn set_border_width(&mut self, width: i32);

    /// Exact geometric hit-test.
    fn contains(&self, p: Point) -> bool;

    /// True when painting the shape would leave no mark.
    fn is_invisible(&self) -> bool;

    /// Rasterizes the shape at its absolute canvas coordinates.
    fn paint(&self, painter: &Painter);
}

/// The closed set of shape variants.
#[derive(Debug)]
pub enum ShapeKind {
    Rectangle(Rectangle),
    Square(Square),
    Circle(Circle),
    Oval(Oval),
    Triangle(Triangle),
    Line(Line),
    Image(ImageShape),
}

impl ShapeKind {
    /// Independent copy with fresh identity: geometry is deep-copied and a
    /// new id plus sequence number is issued. The only variant that can
    /// refuse is an image shape with no image bound.
    pub fn duplicate(&self, counters: &mut ShapeCounters) -> Result<ShapeKind, EditorError> {
        match self {
            ShapeKind::Rectangle(r) => Ok(ShapeKind::Rectangle(r.duplicate(counters))),
            ShapeKind::Square(s) => Ok(ShapeKind::Square(s.duplicate(counters))),
            ShapeKind::Circle(c) => Ok(ShapeKind::Circle(c.duplicate(counters))),
            ShapeKind::Oval(o) => Ok(ShapeKind::Oval(o.duplicate(counters))),
            ShapeKind::Triangle(t) => Ok(ShapeKind::Triangle(t.duplicate(counters))),
            ShapeKind::Line(l) => Ok(ShapeKind::Line(l.duplicate(counters))),
            ShapeKind::Image(i) => i.duplicate(counters).map(ShapeKind::Image),
        }
    }

    /// Double dispatch for bulk traversals. Line, Oval and Square are
    /// deliberate no-ops: the animation only touches the other four.
    pub fn accept(&mut self, visitor: &mut dyn ShapeVisitor) {
        match self {
            ShapeKind::Circle(c) => visitor.visit_circle(c),
            ShapeKind::Rectangle(r) => visitor.visit_rectangle(r),
            ShapeKind::Triangle(t) => visitor.visit_triangle(t),
            ShapeKind::Image(i) => visitor.visit_image(i),
            ShapeKind::Line(_) | ShapeKind::Oval(_) | ShapeKind::Square(_) => {}
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Image(i) => write!(f, "Image+{}", i.frame()),
            other => write!(f, "{} {}", other.shape_type(), other.number()),
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $shape:ident => $body:expr) => {
        match $self {
            ShapeKind::Rectangle($shape) => $body,
            ShapeKind::Square($shape) => $body,
            ShapeKind::Circle($shape) => $body,
            ShapeKind::Oval($shape) => $body,
            ShapeKind::Triangle($shape) => $body,
            ShapeKind::Line($shape) => $body,
            ShapeKind::Image($shape) => $body,
        }
    };
}

impl Shape for ShapeKind {
    fn id(&self) -> ShapeId {
        dispatch!(self, s => s.id())
    }

    fn number(&self) -> u32 {
        dispatch!(self, s => s.number())
    }

    fn shape_type(&self) -> &'static str {
        dispatch!(self, s => s.shape_type())
    }

    fn x(&self) -> i32 {
        dispatch!(self, s => s.x())
    }

    fn y(&self) -> i32 {
        dispatch!(self, s => s.y())
    }

    fn set_x(&mut self, x: i32) {
        dispatch!(self, s => s.set_x(x))
    }

    fn set_y(&mut self, y: i32) {
        dispatch!(self, s => s.set_y(y))
    }

    fn set_position(&mut self, p: Point) {
        dispatch!(self, s => s.set_position(p))
    }

    fn width(&self) -> i32 {
        dispatch!(self, s => s.width())
    }

    fn height(&self) -> i32 {
        dispatch!(self, s => s.height())
    }

    fn set_size(&mut self, width: i32, height: i32) {
        dispatch!(self, s => s.set_size(width, height))
    }

    fn set_to_defaults(&mut self) {
        dispatch!(self, s => s.set_to_defaults())
    }

    fn fill(&self) -> Option<Color32> {
        dispatch!(self, s => s.fill())
    }

    fn set_fill(&mut self, color: Color32) {
        dispatch!(self, s => s.set_fill(color))
    }

    fn border_color(&self) -> Color32 {
        dispatch!(self, s => s.border_color())
    }

    fn set_border_color(&mut self, color: Color32) {
        dispatch!(self, s => s.set_border_color(color))
    }

    fn border_width(&self) -> i32 {
        dispatch!(self, s => s.border_width())
    }

    fn set_border_width(&mut self, width: i32) {
        dispatch!(self, s => s.set_border_width(width))
    }

    fn contains(&self, p: Point) -> bool {
        dispatch!(self, s => s.contains(p))
    }

    fn is_invisible(&self) -> bool {
        dispatch!(self, s => s.is_invisible())
    }

    fn paint(&self, painter: &Painter) {
        dispatch!(self, s => s.paint(painter))
    }
}
