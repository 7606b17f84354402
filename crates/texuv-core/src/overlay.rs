use crate::uv::PixelPos;

/// The single text annotation drawn over the image.
///
/// Starts hidden; every call to [`OverlayLabel::show`] replaces both the
/// anchor and the text. There is no way back to hidden.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum OverlayLabel {
    #[default]
    Hidden,
    Shown { anchor: PixelPos, text: String },
}

impl OverlayLabel {
    pub fn show(&mut self, anchor: PixelPos, text: String) {
        *self = Self::Shown { anchor, text };
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Shown { .. })
    }

    pub fn anchor(&self) -> Option<PixelPos> {
        match self {
            Self::Hidden => None,
            Self::Shown { anchor, .. } => Some(*anchor),
        }
    }

    /// Current label text; empty while hidden.
    pub fn text(&self) -> &str {
        match self {
            Self::Hidden => "",
            Self::Shown { text, .. } => text,
        }
    }
}
