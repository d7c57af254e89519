use egui::{Color32, Sense};

use crate::app::{DragAnchor, EditorApp};
use crate::geometry::Point;
use crate::shape::Shape;

/// The drawing surface: paints every slot in storage order and routes
/// pointer gestures into the collection.
///
/// With a creation tool active, press adds a shape, drag resizes it and
/// release finishes it (falling back to the default size when the pointer
/// never moved). With the select tool, press hit-tests the topmost shape
/// and drag moves the selected one by the pointer delta.
pub fn canvas_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        painter.rect_filled(response.rect, 0.0, Color32::WHITE);

        app.collection.ensure_textures(ctx);
        for slot in app.collection.slots() {
            slot.paint(&painter);
        }

        let Some(pointer) = response.interact_pointer_pos() else {
            return;
        };
        let point = Point::from_pos2(pointer);

        if response.drag_started() {
            app.moved = false;
            if app.active_tool.is_some() {
                on_create_press(app, point);
            } else {
                app.collection.select_at(point);
                app.drag_anchor = app.collection.selected().and_then(|id| {
                    app.collection.get(id).map(|slot| DragAnchor {
                        pointer: point,
                        shape: Point::new(slot.x(), slot.y()),
                    })
                });
            }
        } else if response.dragged() && response.drag_delta() != egui::Vec2::ZERO {
            app.moved = true;
            if app.active_tool.is_some() {
                app.collection.resize(point);
            } else if let Some(anchor) = &app.drag_anchor {
                app.collection.move_selected(Point::new(
                    anchor.shape.x + point.x - anchor.pointer.x,
                    anchor.shape.y + point.y - anchor.pointer.y,
                ));
            }
        }

        if response.drag_stopped() {
            if app.active_tool.is_some() {
                // A press without movement stamps a default-sized shape.
                app.collection.finish(!app.moved);
            }
            app.drag_anchor = None;
        }
    });
}

fn on_create_press(app: &mut EditorApp, point: Point) {
    let color = app.next_color();
    let Some(index) = app.active_tool else {
        return;
    };
    match app.tools[index].create(point, color, &mut app.counters) {
        Ok(shape) => app.collection.add(shape),
        Err(err) => log::error!("{err}"),
    }
}
