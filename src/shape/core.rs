use egui::{Color32, Stroke};

use crate::shape::ShapeId;

/// Fields shared by every shape variant: identity, anchor, fill and border.
/// Geometry lives in the variant structs.
#[derive(Clone, Debug)]
pub(crate) struct ShapeCore {
    pub(crate) id: ShapeId,
    pub(crate) number: u32,
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) fill: Option<Color32>,
    pub(crate) border_color: Color32,
    pub(crate) border_width: i32,
}

impl ShapeCore {
    /// Border starts black with width 0, like every freshly constructed shape.
    pub(crate) fn new(id: ShapeId, number: u32, x: i32, y: i32, fill: Option<Color32>) -> Self {
        Self {
            id,
            number,
            x,
            y,
            fill,
            border_color: Color32::BLACK,
            border_width: 0,
        }
    }

    pub(crate) fn border_stroke(&self) -> Stroke {
        Stroke::new(self.border_width as f32, self.border_color)
    }
}
