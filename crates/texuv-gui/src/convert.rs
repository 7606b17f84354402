use texuv_core::texture::Texture;

/// Convert an RGBA8 texture to an egui ColorImage.
pub fn texture_to_color_image(texture: &Texture) -> egui::ColorImage {
    let (w, h) = texture.dimensions();
    egui::ColorImage::from_rgba_unmultiplied([w, h], texture.rgba())
}
