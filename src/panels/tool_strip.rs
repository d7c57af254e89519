use crate::animate::Direction;
use crate::app::EditorApp;

/// Vertical tool strip: the select tool, one button per creation tool,
/// the numbering toggle and the animation steppers.
pub fn tool_strip_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::SidePanel::left("tool_strip")
        .resizable(false)
        .default_width(110.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            if ui
                .selectable_label(app.active_tool.is_none(), "Select")
                .clicked()
            {
                app.active_tool = None;
            }

            let mut picked = None;
            for (index, tool) in app.tools.iter().enumerate() {
                let active = app.active_tool == Some(index);
                if ui.selectable_label(active, tool.name()).clicked() {
                    picked = Some(index);
                }
            }
            if let Some(index) = picked {
                // Picking a creation tool drops the selection.
                app.collection.set_selected(None);
                app.active_tool = Some(index);
            }

            ui.separator();

            if ui.checkbox(&mut app.numbering, "Numbering").changed() {
                if app.numbering {
                    app.collection.add_number_overlays();
                } else {
                    app.collection.remove_number_overlays();
                }
            }

            ui.separator();

            ui.label("Animate");
            ui.horizontal(|ui| {
                if ui.button("◀").clicked() {
                    app.collection.animate(Direction::Backward, 2);
                }
                if ui.button("▶").clicked() {
                    app.collection.animate(Direction::Forward, 2);
                }
            });
        });
}
