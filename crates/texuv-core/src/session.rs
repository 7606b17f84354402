use tracing::{info, trace};

use crate::overlay::OverlayLabel;
use crate::texture::Texture;
use crate::uv::{PixelPos, Uv};

/// State for one picking session: the loaded image and its overlay label.
pub struct PickerSession {
    texture: Texture,
    overlay: OverlayLabel,
}

impl PickerSession {
    pub fn new(texture: Texture) -> Self {
        Self {
            texture,
            overlay: OverlayLabel::default(),
        }
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn overlay(&self) -> &OverlayLabel {
        &self.overlay
    }

    /// Handle a primary click.
    ///
    /// `None` or a position outside the image leaves the overlay untouched
    /// and returns `None`. Otherwise the overlay moves to the click, shows
    /// the formatted UV and the UV is returned so the caller can redraw.
    pub fn on_click(&mut self, pos: Option<PixelPos>) -> Option<Uv> {
        let (w, h) = self.texture.dimensions();
        let pos = match pos {
            Some(p) if p.in_bounds(w, h) => p,
            other => {
                trace!(?other, "click outside image ignored");
                return None;
            }
        };

        let uv = Uv::from_pixel(pos, w, h);
        self.overlay.show(pos, uv.to_string());
        info!(x = pos.x, y = pos.y, u = uv.u, v = uv.v, "picked");
        Some(uv)
    }
}
