use egui::Color32;

use crate::shape::{Circle, ImageShape, Rectangle, Shape, Triangle};

/// Traversal direction for a bulk animation pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Forward,
    Backward,
}

/// Per-variant dispatch target for bulk traversals over the collection.
///
/// Only Circle, Rectangle, Triangle and Image take part; the collection
/// skips the remaining variants before dispatching.
pub trait ShapeVisitor {
    fn visit_circle(&mut self, circle: &mut Circle);
    fn visit_rectangle(&mut self, rectangle: &mut Rectangle);
    fn visit_triangle(&mut self, triangle: &mut Triangle);
    fn visit_image(&mut self, image: &mut ImageShape);
}

/// One forward animation step.
///
/// Historical quirk, kept on purpose: the forward step makes circles
/// *darker*, not brighter.
pub struct ForwardAnimator {
    step: i32,
}

impl ForwardAnimator {
    pub fn new(step: i32) -> Self {
        Self { step }
    }
}

impl ShapeVisitor for ForwardAnimator {
    fn visit_circle(&mut self, circle: &mut Circle) {
        if let Some(fill) = circle.fill() {
            circle.set_fill(darken(fill));
        }
    }

    fn visit_rectangle(&mut self, rectangle: &mut Rectangle) {
        rectangle.set_size(rectangle.width() + self.step, rectangle.height() + self.step);
    }

    fn visit_triangle(&mut self, triangle: &mut Triangle) {
        triangle.set_y(triangle.y() - self.step);
    }

    fn visit_image(&mut self, image: &mut ImageShape) {
        image.set_x(image.x() + self.step);
    }
}

/// One backward animation step: the inverse of [`ForwardAnimator`] per
/// variant.
pub struct BackwardAnimator {
    step: i32,
}

impl BackwardAnimator {
    pub fn new(step: i32) -> Self {
        Self { step }
    }
}

impl ShapeVisitor for BackwardAnimator {
    fn visit_circle(&mut self, circle: &mut Circle) {
        if let Some(fill) = circle.fill() {
            circle.set_fill(brighten(fill));
        }
    }

    fn visit_rectangle(&mut self, rectangle: &mut Rectangle) {
        rectangle.set_size(rectangle.width() - self.step, rectangle.height() - self.step);
    }

    fn visit_triangle(&mut self, triangle: &mut Triangle) {
        triangle.set_y(triangle.y() + self.step);
    }

    fn visit_image(&mut self, image: &mut ImageShape) {
        image.set_x(image.x() - self.step);
    }
}

const SHADE_FACTOR: f64 = 0.7;

/// One shade darker, java.awt.Color style.
pub fn darken(color: Color32) -> Color32 {
    Color32::from_rgb(
        (color.r() as f64 * SHADE_FACTOR) as u8,
        (color.g() as f64 * SHADE_FACTOR) as u8,
        (color.b() as f64 * SHADE_FACTOR) as u8,
    )
}

/// One shade brighter, java.awt.Color style: pure black steps to a dark
/// gray so repeated brightening can escape zero.
pub fn brighten(color: Color32) -> Color32 {
    let floor = (1.0 / (1.0 - SHADE_FACTOR)) as i32;
    let (mut r, mut g, mut b) = (color.r() as i32, color.g() as i32, color.b() as i32);

    if r == 0 && g == 0 && b == 0 {
        return Color32::from_rgb(floor as u8, floor as u8, floor as u8);
    }
    if r > 0 && r < floor {
        r = floor;
    }
    if g > 0 && g < floor {
        g = floor;
    }
    if b > 0 && b < floor {
        b = floor;
    }

    Color32::from_rgb(
        255.min((r as f64 / SHADE_FACTOR) as i32) as u8,
        255.min((g as f64 / SHADE_FACTOR) as i32) as u8,
        255.min((b as f64 / SHADE_FACTOR) as i32) as u8,
    )
}
