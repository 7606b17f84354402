use texuv_core::session::PickerSession;

use crate::app::PickerApp;
use crate::panels::{overlay, transform};

pub fn show(ctx: &egui::Context, app: &mut PickerApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            paint_background(ui, rect);

            let image_size = app.viewport.image_vec();
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            let home_requested = response.double_clicked_by(egui::PointerButton::Middle);
            if app.viewport.needs_reset || home_requested {
                app.viewport.reset(rect.size(), app.config.viewport.min_zoom);
            }

            handle_zoom(ui, &response, app, rect);
            handle_pan(&response, app);

            let img_rect = transform::image_rect(
                rect,
                image_size,
                app.viewport.zoom,
                app.viewport.pan_offset,
            );

            app.viewport.hover_pixel = response
                .hover_pos()
                .and_then(|p| transform::pick_position(p, img_rect, image_size));

            handle_press(ui, rect, &mut app.session, img_rect, image_size);

            draw_image(ui, app.viewport.texture.id(), img_rect);
            overlay::draw_label(
                ui,
                app.session.overlay(),
                &app.config.overlay,
                img_rect,
                image_size,
            );
        });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut PickerApp, rect: egui::Rect) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    let limits = &app.config.viewport;
    let zoom_factor = (scroll_delta * 0.005).exp();
    let new_zoom = (app.viewport.zoom * zoom_factor).clamp(limits.min_zoom, limits.max_zoom);

    // Zoom toward mouse cursor
    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        let center = rect.center().to_vec2() + app.viewport.pan_offset;
        let mouse_rel = mouse_pos.to_vec2() - center;
        let scale_change = new_zoom / app.viewport.zoom;
        app.viewport.pan_offset += mouse_rel * (1.0 - scale_change);
    }

    app.viewport.zoom = new_zoom;
}

fn handle_pan(response: &egui::Response, app: &mut PickerApp) {
    if response.dragged_by(egui::PointerButton::Middle) {
        app.viewport.pan_offset += response.drag_delta();
    }
}

/// Pick on primary button press, like a plot's button-press event.
///
/// Presses that start outside `panel_rect` belong to another panel and are
/// skipped; presses inside the panel but off the image reach the session as
/// `None`.
fn handle_press(
    ui: &egui::Ui,
    panel_rect: egui::Rect,
    session: &mut PickerSession,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) {
    let origin = ui.input(|i| {
        if i.pointer.button_pressed(egui::PointerButton::Primary) {
            i.pointer.press_origin()
        } else {
            None
        }
    });
    let Some(origin) = origin.filter(|p| panel_rect.contains(*p)) else {
        return;
    };

    let pos = transform::pick_position(origin, img_rect, image_size);
    if session.on_click(pos).is_some() {
        ui.ctx().request_repaint();
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}
