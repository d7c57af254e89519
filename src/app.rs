use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use egui::{Color32, Key};
use log::error;

use crate::animate::Direction;
use crate::collection::ShapeCollection;
use crate::counters::ShapeCounters;
use crate::event::{ShapeEvent, ShapeObserver};
use crate::geometry::Point;
use crate::tool::{self, ShapeTool};

/// Fill colors cycled through for newly created shapes.
const PALETTE: [Color32; 6] = [
    Color32::from_rgb(0xe5, 0x39, 0x35),
    Color32::from_rgb(0xfb, 0x8c, 0x00),
    Color32::from_rgb(0xfd, 0xd8, 0x35),
    Color32::from_rgb(0x43, 0xa0, 0x47),
    Color32::from_rgb(0x1e, 0x88, 0xe5),
    Color32::from_rgb(0x8e, 0x24, 0xaa),
];

/// Requests a repaint whenever anything in the collection changes; the
/// panels re-read the collection on the next frame.
struct RepaintRequester {
    ctx: egui::Context,
}

impl ShapeObserver for RepaintRequester {
    fn shape_added(&mut self, _event: &ShapeEvent) {
        self.ctx.request_repaint();
    }

    fn shape_deleted(&mut self, _event: &ShapeEvent) {
        self.ctx.request_repaint();
    }

    fn shape_changed(&mut self, _event: &ShapeEvent) {
        self.ctx.request_repaint();
    }

    fn shape_selected(&mut self, _event: &ShapeEvent) {
        self.ctx.request_repaint();
    }
}

/// Pointer position and shape anchor captured when a move gesture starts.
pub(crate) struct DragAnchor {
    pub(crate) pointer: Point,
    pub(crate) shape: Point,
}

/// The editor application: wires the tool strip, the canvas and the shape
/// list around one [`ShapeCollection`].
pub struct EditorApp {
    pub(crate) collection: ShapeCollection,
    pub(crate) counters: ShapeCounters,
    pub(crate) tools: Vec<ShapeTool>,
    /// Index into `tools`; `None` means the select tool.
    pub(crate) active_tool: Option<usize>,
    pub(crate) numbering: bool,
    pub(crate) drag_anchor: Option<DragAnchor>,
    pub(crate) moved: bool,
    created: usize,
}

impl EditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut counters = ShapeCounters::new();
        let mut tools = tool::standard_tools(&mut counters);
        match tool::image_tool(Path::new("assets/smiley.png"), &mut counters) {
            Ok(t) => tools.push(t),
            Err(err) => error!("image tool unavailable: {err}"),
        }

        let mut collection = ShapeCollection::new();
        collection.observers_mut().subscribe(Rc::new(RefCell::new(RepaintRequester {
            ctx: cc.egui_ctx.clone(),
        })));

        Self {
            collection,
            counters,
            tools,
            active_tool: None,
            numbering: false,
            drag_anchor: None,
            moved: false,
            created: 0,
        }
    }

    pub(crate) fn next_color(&mut self) -> Color32 {
        let color = PALETTE[self.created % PALETTE.len()];
        self.created += 1;
        color
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.collection.set_selected(None);
        }
        if ctx.input(|i| i.key_pressed(Key::Delete) || i.key_pressed(Key::Backspace)) {
            self.collection.delete_selected();
        }
        if ctx.input(|i| i.key_pressed(Key::ArrowRight)) {
            self.collection.animate(Direction::Forward, 2);
        }
        if ctx.input(|i| i.key_pressed(Key::ArrowLeft)) {
            self.collection.animate(Direction::Backward, 2);
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        crate::panels::tool_strip_panel(self, ctx);
        crate::panels::shape_list_panel(self, ctx);
        crate::panels::canvas_panel(self, ctx);
    }
}
