use texuv_core::uv::PixelPos;

use crate::panels::transform::home_view;

/// Viewport display state.
pub struct ViewportState {
    pub texture: egui::TextureHandle,
    /// Image size in pixels.
    pub image_size: [usize; 2],
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    /// Pixel under the cursor, for the status readout.
    pub hover_pixel: Option<PixelPos>,
    /// Apply the home view on the first frame, once the panel size is known.
    pub needs_reset: bool,
}

impl ViewportState {
    pub fn new(texture: egui::TextureHandle, image_size: [usize; 2]) -> Self {
        Self {
            texture,
            image_size,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            hover_pixel: None,
            needs_reset: true,
        }
    }

    /// Return to the home view for a panel of size `available`.
    pub fn reset(&mut self, available: egui::Vec2, min_zoom: f32) {
        let (zoom, pan) = home_view(self.image_vec(), available, min_zoom);
        self.zoom = zoom;
        self.pan_offset = pan;
        self.needs_reset = false;
    }

    pub fn image_vec(&self) -> egui::Vec2 {
        egui::vec2(self.image_size[0] as f32, self.image_size[1] as f32)
    }
}
