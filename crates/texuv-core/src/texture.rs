use std::path::{Path, PathBuf};

use ndarray::Array3;
use tracing::debug;

use crate::error::{Result, TexUvError};

/// Number of channels every loaded texture is expanded to.
pub const CHANNELS: usize = 4;

/// A decoded image, held as RGBA8 regardless of the source colour type.
#[derive(Clone, Debug)]
pub struct Texture {
    /// Pixel data, row-major, shape = (height, width, 4)
    pub data: Array3<u8>,
    /// File the texture was decoded from, if any.
    pub source: Option<PathBuf>,
}

impl Texture {
    /// Build a texture from a packed RGBA8 buffer.
    ///
    /// Returns `InvalidDimensions` if either extent is zero or the buffer
    /// length does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TexUvError::InvalidDimensions { width, height });
        }
        let shape = (height as usize, width as usize, CHANNELS);
        let data = Array3::from_shape_vec(shape, rgba)
            .map_err(|_| TexUvError::InvalidDimensions { width, height })?;
        Ok(Self { data, source: None })
    }

    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Packed RGBA8 bytes in row-major order.
    pub fn rgba(&self) -> &[u8] {
        // from_shape_vec always yields a standard-layout array
        self.data.as_slice().unwrap_or_default()
    }

    /// Display name of the source file, for window titles.
    pub fn file_name(&self) -> Option<String> {
        self.source
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
    }
}

/// Load any image format supported by the `image` crate.
///
/// Grayscale, alpha and high bit-depth sources are all converted to RGBA8;
/// the width and height are taken from the decoded image and do not depend
/// on the channel layout.
pub fn load(path: &Path) -> Result<Texture> {
    let img = image::open(path).map_err(|source| TexUvError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        color = ?img.color(),
        "decoded image"
    );

    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    let mut texture = Texture::from_rgba(w, h, rgba.into_raw())?;
    texture.source = Some(path.to_path_buf());
    Ok(texture)
}
