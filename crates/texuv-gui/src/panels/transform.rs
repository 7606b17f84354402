use texuv_core::uv::PixelPos;

/// On-screen rect of the image for the given zoom and pan.
pub fn image_rect(
    panel_rect: egui::Rect,
    image_size: egui::Vec2,
    zoom: f32,
    pan_offset: egui::Vec2,
) -> egui::Rect {
    let scaled = image_size * zoom;
    let center = panel_rect.center() + pan_offset;
    egui::Rect::from_center_size(center, scaled)
}

/// Convert screen coordinates to image pixel coordinates.
///
/// Pixel centres land on integers: the left edge of the image rect is -0.5.
pub fn screen_to_image(pos: egui::Pos2, img_rect: egui::Rect, image_size: egui::Vec2) -> PixelPos {
    PixelPos::new(
        (pos.x - img_rect.left()) / img_rect.width() * image_size.x - 0.5,
        (pos.y - img_rect.top()) / img_rect.height() * image_size.y - 0.5,
    )
}

/// Convert image pixel coordinates to screen coordinates.
pub fn image_to_screen(pos: PixelPos, img_rect: egui::Rect, image_size: egui::Vec2) -> egui::Pos2 {
    egui::pos2(
        (pos.x + 0.5) / image_size.x * img_rect.width() + img_rect.left(),
        (pos.y + 0.5) / image_size.y * img_rect.height() + img_rect.top(),
    )
}

/// Pixel position under `pos`, or `None` when it falls outside the image.
pub fn pick_position(
    pos: egui::Pos2,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) -> Option<PixelPos> {
    let p = screen_to_image(pos, img_rect, image_size);
    p.in_bounds(image_size.x as usize, image_size.y as usize)
        .then_some(p)
}

/// Zoom and pan of the initial view: 1:1, or shrunk to fit `available`.
pub fn home_view(image_size: egui::Vec2, available: egui::Vec2, min_zoom: f32) -> (f32, egui::Vec2) {
    let fit = (available.x / image_size.x).min(available.y / image_size.y);
    (fit.min(1.0).max(min_zoom), egui::Vec2::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use texuv_core::uv::Uv;

    fn panel() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0))
    }

    #[test]
    fn identity_at_unit_zoom() {
        let size = egui::vec2(100.0, 50.0);
        let rect = image_rect(panel(), size, 1.0, egui::Vec2::ZERO);
        assert_eq!(rect.min, egui::pos2(50.0, 25.0));

        let p = screen_to_image(egui::pos2(75.5, 35.5), rect, size);
        assert!((p.x - 25.0).abs() < 1e-4);
        assert!((p.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn pixel_centres_give_corner_uvs() {
        let size = egui::vec2(100.0, 50.0);
        let rect = image_rect(panel(), size, 1.0, egui::Vec2::ZERO);

        let top_left = rect.min + egui::vec2(0.5, 0.5);
        let p = pick_position(top_left, rect, size).unwrap();
        assert_eq!(Uv::from_pixel(p, 100, 50).to_string(), "UV: (0.0000, 1.0000)");

        let bottom_right = rect.max - egui::vec2(0.5, 0.5);
        let p = pick_position(bottom_right, rect, size).unwrap();
        assert_eq!(Uv::from_pixel(p, 100, 50).to_string(), "UV: (0.9900, 0.0200)");
    }

    #[test]
    fn zoom_and_pan_are_inverted() {
        let size = egui::vec2(100.0, 50.0);
        let rect = image_rect(panel(), size, 2.0, egui::vec2(10.0, -5.0));

        let screen = image_to_screen(PixelPos::new(25.0, 10.0), rect, size);
        let back = screen_to_image(screen, rect, size);
        assert!((back.x - 25.0).abs() < 1e-4);
        assert!((back.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn outside_image_rect_has_no_pixel() {
        let size = egui::vec2(100.0, 50.0);
        let rect = image_rect(panel(), size, 1.0, egui::Vec2::ZERO);
        assert!(pick_position(egui::pos2(10.0, 10.0), rect, size).is_none());
        assert!(pick_position(egui::pos2(100.0, 50.0), rect, size).is_some());
        assert!(pick_position(rect.min, rect, size).is_some());
    }

    #[test]
    fn max_edge_is_excluded() {
        let size = egui::vec2(100.0, 50.0);
        let rect = image_rect(panel(), size, 1.0, egui::Vec2::ZERO);
        assert!(pick_position(egui::pos2(rect.max.x, 50.0), rect, size).is_none());
        assert!(pick_position(egui::pos2(100.0, rect.max.y), rect, size).is_none());
    }

    #[test]
    fn home_view_is_one_to_one_when_image_fits() {
        let (zoom, pan) = home_view(egui::vec2(100.0, 50.0), egui::vec2(200.0, 100.0), 0.1);
        assert_eq!(zoom, 1.0);
        assert_eq!(pan, egui::Vec2::ZERO);
    }

    #[test]
    fn home_view_shrinks_along_tighter_axis() {
        let (zoom, _) = home_view(egui::vec2(400.0, 100.0), egui::vec2(200.0, 100.0), 0.1);
        assert_eq!(zoom, 0.5);

        let (zoom, _) = home_view(egui::vec2(10_000.0, 100.0), egui::vec2(200.0, 100.0), 0.1);
        assert_eq!(zoom, 0.1);
    }
}
