use std::fmt;
use std::rc::Rc;

use egui::{Color32, ColorImage, Context, Painter, Rect, TextureHandle, TextureOptions, pos2, vec2};

use super::{Shape, ShapeKind};
use crate::counters::{ShapeClass, ShapeCounters};
use crate::error::EditorError;
use crate::geometry::Point;
use crate::shape::ShapeId;

/// A bitmap drawn over a delegate frame shape that supplies all geometry
/// and hit-testing. Everything except the pixels is forwarded to the frame.
pub struct ImageShape {
    id: ShapeId,
    frame: Box<ShapeKind>,
    pixels: Option<Rc<ColorImage>>,
    texture: Option<TextureHandle>,
}

// TextureHandle does not implement Debug.
impl fmt::Debug for ImageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageShape")
            .field("id", &self.id)
            .field("frame", &self.frame)
            .field("has_pixels", &self.pixels.is_some())
            .field("has_texture", &self.texture.is_some())
            .finish()
    }
}

impl ImageShape {
    pub fn new(frame: ShapeKind, pixels: Option<Rc<ColorImage>>, counters: &mut ShapeCounters) -> Self {
        let (id, _) = counters.issue(ShapeClass::Image);
        Self {
            id,
            frame: Box::new(frame),
            pixels,
            texture: None,
        }
    }

    pub fn frame(&self) -> &ShapeKind {
        &self.frame
    }

    pub fn has_image(&self) -> bool {
        self.pixels.is_some()
    }

    /// Duplication needs pixels to bind to the copy; without them the
    /// prototype cannot produce a usable shape and the failure must be loud.
    pub(crate) fn duplicate(&self, counters: &mut ShapeCounters) -> Result<ImageShape, EditorError> {
        let pixels = self
            .pixels
            .clone()
            .ok_or(EditorError::CopyUnsupported { variant: "Image" })?;
        let frame = self.frame.duplicate(counters)?;
        Ok(ImageShape {
            id: counters.issue(ShapeClass::Image).0,
            frame: Box::new(frame),
            pixels: Some(pixels),
            texture: None,
        })
    }

    /// Uploads the pixels as a texture once a GPU context is available.
    /// Painting before this has run falls back to a placeholder.
    pub fn ensure_texture(&mut self, ctx: &Context) {
        if self.texture.is_none() {
            if let Some(pixels) = &self.pixels {
                self.texture =
                    Some(ctx.load_texture("image-shape", (**pixels).clone(), TextureOptions::LINEAR));
            }
        }
    }
}

impl Shape for ImageShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn number(&self) -> u32 {
        self.frame.number()
    }

    fn shape_type(&self) -> &'static str {
        "Image"
    }

    fn x(&self) -> i32 {
        self.frame.x()
    }

    fn y(&self) -> i32 {
        self.frame.y()
    }

    fn set_x(&mut self, x: i32) {
        self.frame.set_x(x);
    }

    fn set_y(&mut self, y: i32) {
        self.frame.set_y(y);
    }

    fn set_position(&mut self, p: Point) {
        self.frame.set_position(p);
    }

    fn width(&self) -> i32 {
        self.frame.width()
    }

    fn height(&self) -> i32 {
        self.frame.height()
    }

    fn set_size(&mut self, width: i32, height: i32) {
        self.frame.set_size(width, height);
    }

    fn set_to_defaults(&mut self) {
        self.frame.set_to_defaults();
    }

    fn fill(&self) -> Option<Color32> {
        self.frame.fill()
    }

    fn set_fill(&mut self, color: Color32) {
        self.frame.set_fill(color);
    }

    fn border_color(&self) -> Color32 {
        self.frame.border_color()
    }

    fn set_border_color(&mut self, color: Color32) {
        self.frame.set_border_color(color);
    }

    fn border_width(&self) -> i32 {
        self.frame.border_width()
    }

    fn set_border_width(&mut self, width: i32) {
        self.frame.set_border_width(width);
    }

    fn contains(&self, p: Point) -> bool {
        self.frame.contains(p)
    }

    fn is_invisible(&self) -> bool {
        self.frame.is_invisible() || self.pixels.is_none()
    }

    fn paint(&self, painter: &Painter) {
        self.frame.paint(painter);
        let (w, h) = (self.width(), self.height());
        if w <= 0 || h <= 0 {
            return;
        }
        let rect = Rect::from_min_size(
            pos2(self.x() as f32, self.y() as f32),
            vec2(w as f32, h as f32),
        );
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        } else {
            // Placeholder until the texture is uploaded.
            painter.rect_filled(rect, 0.0, Color32::from_gray(200));
        }
    }
}
