use texuv_core::config::OverlayStyle;
use texuv_core::overlay::OverlayLabel;

use super::transform::image_to_screen;

fn rgb([r, g, b]: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

/// Paint the UV label with its bottom-left corner at the picked pixel.
pub fn draw_label(
    ui: &egui::Ui,
    label: &OverlayLabel,
    style: &OverlayStyle,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) {
    let OverlayLabel::Shown { anchor, text } = label else {
        return;
    };

    let painter = ui.painter();
    let galley = painter.layout_no_wrap(
        text.clone(),
        egui::FontId::proportional(style.font_size),
        rgb(style.text_color),
    );

    let pad = style.font_size * style.padding;
    let anchor = image_to_screen(*anchor, img_rect, image_size);
    let text_pos = anchor + egui::vec2(pad, -pad - galley.size().y);
    let box_rect = egui::Rect::from_min_size(text_pos, galley.size()).expand(pad);

    painter.rect(
        box_rect,
        style.rounding,
        rgb(style.background),
        egui::Stroke::new(1.0, rgb(style.border)),
        egui::StrokeKind::Inside,
    );
    painter.galley(text_pos, galley, rgb(style.text_color));
}
