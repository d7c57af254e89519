#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> eframe::Result {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([300.0, 225.0]),
        ..Default::default()
    };
    eframe::run_native(
        "GfxEditor",
        native_options,
        Box::new(|cc| Ok(Box::new(gfx_editor::EditorApp::new(cc)))),
    )
}
