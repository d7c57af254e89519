use egui::{Align2, Color32, FontId, Painter, Rect, Shape as PaintShape, Stroke, pos2, vec2};

use crate::geometry::Point;
use crate::shape::{Shape, ShapeId, ShapeKind};

/// The two overlay kinds a slot can carry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Overlay {
    /// Dashed outline marking the selected shape.
    Selection,
    /// The shape's sequence number, centered in its bounding box.
    Number,
}

/// One entry of the collection: a shape plus the overlays currently
/// attached to it.
///
/// The slot is the decoration: overlays are structural state next to the
/// content rather than wrappers around it, so attaching and detaching are
/// trivially reversible and the content's identity never changes. The slot
/// forwards the whole [`Shape`] contract to its content, making decoration
/// observationally transparent.
#[derive(Debug)]
pub struct Slot {
    content: ShapeKind,
    selected: bool,
    numbered: bool,
}

impl Slot {
    pub fn new(content: ShapeKind) -> Self {
        Self {
            content,
            selected: false,
            numbered: false,
        }
    }

    pub fn content(&self) -> &ShapeKind {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ShapeKind {
        &mut self.content
    }

    pub fn into_content(self) -> ShapeKind {
        self.content
    }

    pub fn has(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Selection => self.selected,
            Overlay::Number => self.numbered,
        }
    }

    pub(crate) fn attach(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::Selection => self.selected = true,
            Overlay::Number => self.numbered = true,
        }
    }

    pub(crate) fn detach(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::Selection => self.selected = false,
            Overlay::Number => self.numbered = false,
        }
    }
}

impl Shape for Slot {
    fn id(&self) -> ShapeId {
        self.content.id()
    }

    fn number(&self) -> u32 {
        self.content.number()
    }

    fn shape_type(&self) -> &'static str {
        self.content.shape_type()
    }

    fn x(&self) -> i32 {
        self.content.x()
    }

    fn y(&self) -> i32 {
        self.content.y()
    }

    fn set_x(&mut self, x: i32) {
        self.content.set_x(x);
    }

    fn set_y(&mut self, y: i32) {
        self.content.set_y(y);
    }

    fn set_position(&mut self, p: Point) {
        self.content.set_position(p);
    }

    fn width(&self) -> i32 {
        self.content.width()
    }

    fn height(&self) -> i32 {
        self.content.height()
    }

    fn set_size(&mut self, width: i32, height: i32) {
        self.content.set_size(width, height);
    }

    fn set_to_defaults(&mut self) {
        self.content.set_to_defaults();
    }

    fn fill(&self) -> Option<Color32> {
        self.content.fill()
    }

    fn set_fill(&mut self, color: Color32) {
        self.content.set_fill(color);
    }

    fn border_color(&self) -> Color32 {
        self.content.border_color()
    }

    fn set_border_color(&mut self, color: Color32) {
        self.content.set_border_color(color);
    }

    fn border_width(&self) -> i32 {
        self.content.border_width()
    }

    fn set_border_width(&mut self, width: i32) {
        self.content.set_border_width(width);
    }

    fn contains(&self, p: Point) -> bool {
        self.content.contains(p)
    }

    fn is_invisible(&self) -> bool {
        self.content.is_invisible()
    }

    fn paint(&self, painter: &Painter) {
        self.content.paint(painter);
        if self.numbered {
            paint_number(&self.content, painter);
        }
        if self.selected {
            paint_selection(&self.content, painter);
        }
    }
}

/// Draws the sequence number in white, horizontally shifted left a little
/// more per extra digit so it stays visually centered.
fn paint_number(shape: &ShapeKind, painter: &Painter) {
    let number = shape.number();
    let x = shape.x() + shape.width() / 2 - 4 * (1 + number as i32 / 10);
    let y = shape.y() + shape.height() / 2 + 5;
    painter.text(
        pos2(x as f32, y as f32),
        Align2::LEFT_BOTTOM,
        number.to_string(),
        FontId::proportional(13.0),
        Color32::WHITE,
    );
}

/// Dashed black outline one pixel outside the shape's bounding box,
/// normalized so negative extents still draw from the true top-left corner.
fn paint_selection(shape: &ShapeKind, painter: &Painter) {
    let (w, h) = (shape.width(), shape.height());
    let x = if w < 0 { shape.x() + w } else { shape.x() } - 1;
    let y = if h < 0 { shape.y() + h } else { shape.y() } - 1;
    let rect = Rect::from_min_size(
        pos2(x as f32, y as f32),
        vec2((w.abs() + 1) as f32, (h.abs() + 1) as f32),
    );

    let stroke = Stroke::new(1.0, Color32::BLACK);
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    for edge in corners.windows(2) {
        painter.extend(PaintShape::dashed_line(edge, stroke, 5.0, 5.0));
    }
}
