use std::fmt;

/// Continuous position in image pixel space.
///
/// Rows grow downward and pixel centres sit on integer coordinates, so pixel
/// `(0, 0)` is centred on the origin and the image covers
/// `[-0.5, W - 0.5) x [-0.5, H - 0.5)`. Sub-pixel precision is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when the position is finite and lies on the image.
    pub fn in_bounds(&self, width: usize, height: usize) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.x >= -0.5
            && self.y >= -0.5
            && self.x < width as f32 - 0.5
            && self.y < height as f32 - 0.5
    }
}

/// Normalized texture coordinate, V measured upward from the bottom row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uv {
    pub u: f64,
    pub v: f64,
}

impl Uv {
    /// Map a pixel-space position onto `u = x / W`, `v = 1 - y / H`.
    pub fn from_pixel(pos: PixelPos, width: usize, height: usize) -> Self {
        let u = f64::from(pos.x) / width as f64;
        let v = 1.0 - f64::from(pos.y) / height as f64;
        Self { u, v }
    }
}

impl fmt::Display for Uv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UV: ({:.4}, {:.4})", self.u, self.v)
    }
}
