use texuv_core::config::PickerConfig;
use texuv_core::session::PickerSession;

use crate::convert::texture_to_color_image;
use crate::panels;
use crate::states::ViewportState;

pub struct PickerApp {
    pub session: PickerSession,
    pub viewport: ViewportState,
    pub config: PickerConfig,
}

impl PickerApp {
    pub fn new(ctx: &egui::Context, session: PickerSession, config: PickerConfig) -> Self {
        let image = texture_to_color_image(session.texture());
        let size = image.size;
        let texture = ctx.load_texture("picker-image", image, egui::TextureOptions::NEAREST);

        Self {
            session,
            viewport: ViewportState::new(texture, size),
            config,
        }
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
    }
}
