use crate::app::PickerApp;

pub fn show(ctx: &egui::Context, app: &mut PickerApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let [w, h] = app.viewport.image_size;
            ui.label(format!("{w}x{h}"));
            ui.separator();
            match app.viewport.hover_pixel {
                Some(p) => ui.label(format!("x={:.1}, y={:.1}", p.x, p.y)),
                None => ui.label("x=-, y=-"),
            };
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));
        });
    });
}
