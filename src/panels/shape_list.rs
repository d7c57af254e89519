use crate::app::EditorApp;
use crate::shape::Shape;

/// Sidebar listing every shape in creation order. The highlighted entry
/// tracks the collection's selection; clicking an entry selects it and
/// drops back to the select tool.
pub fn shape_list_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::SidePanel::right("shape_list")
        .resizable(true)
        .default_width(140.0)
        .show(ctx, |ui| {
            ui.heading("Shapes");
            ui.separator();

            let selected = app.collection.selected();
            let mut clicked = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                for slot in app.collection.slots() {
                    let id = slot.id();
                    let label = slot.content().to_string();
                    if ui.selectable_label(selected == Some(id), label).clicked() {
                        clicked = Some(id);
                    }
                }
            });

            if let Some(id) = clicked {
                app.active_tool = None;
                app.collection.set_selected(Some(id));
            }
        });
}
