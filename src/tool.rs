use std::path::Path;
use std::rc::Rc;

use egui::{Color32, ColorImage};
use log::info;

use crate::counters::ShapeCounters;
use crate::error::EditorError;
use crate::geometry::Point;
use crate::shape::{Circle, ImageShape, Line, Oval, Rectangle, Shape, ShapeKind, Square, Triangle};

/// A creation tool: holds a prototype shape and stamps out copies of it.
pub struct ShapeTool {
    name: &'static str,
    prototype: ShapeKind,
}

impl ShapeTool {
    pub fn new(name: &'static str, prototype: ShapeKind) -> Self {
        Self { name, prototype }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Duplicates the prototype, places it at `p` and gives it the fill
    /// color. Duplication failure must reach the caller; swallowing it
    /// would leave the tool and the collection out of sync.
    pub fn create(
        &self,
        p: Point,
        color: Color32,
        counters: &mut ShapeCounters,
    ) -> Result<ShapeKind, EditorError> {
        let mut shape = self.prototype.duplicate(counters)?;
        shape.set_position(p);
        shape.set_fill(color);
        Ok(shape)
    }
}

/// The six stock geometric tools. Prototypes sit off-canvas at (-1, -1)
/// with no fill; the clone gets its real position and color on creation.
pub fn standard_tools(counters: &mut ShapeCounters) -> Vec<ShapeTool> {
    vec![
        ShapeTool::new(
            "Rectangle",
            ShapeKind::Rectangle(Rectangle::new(-1, -1, None, counters)),
        ),
        ShapeTool::new(
            "Square",
            ShapeKind::Square(Square::new(-1, -1, None, counters)),
        ),
        ShapeTool::new(
            "Circle",
            ShapeKind::Circle(Circle::new(-1, -1, None, counters)),
        ),
        ShapeTool::new("Oval", ShapeKind::Oval(Oval::new(-1, -1, None, counters))),
        ShapeTool::new(
            "Triangle",
            ShapeKind::Triangle(Triangle::new(-1, -1, None, counters)),
        ),
        ShapeTool::new("Line", ShapeKind::Line(Line::new(-1, -1, None, counters))),
    ]
}

/// The image tool: a square frame carrying a bitmap loaded from disk.
/// A load failure is fatal only to this tool, never to the editor.
pub fn image_tool(path: &Path, counters: &mut ShapeCounters) -> Result<ShapeTool, EditorError> {
    let decoded = image::open(path).map_err(|source| EditorError::ResourceLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice());
    info!("loaded image asset {} ({}x{})", path.display(), size[0], size[1]);

    let frame = ShapeKind::Square(Square::new(-1, -1, None, counters));
    let prototype = ImageShape::new(frame, Some(Rc::new(pixels)), counters);
    Ok(ShapeTool::new("Image", ShapeKind::Image(prototype)))
}
