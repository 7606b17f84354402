#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma, Rgb, RgbImage};
use texuv_core::texture::Texture;

/// Solid-colour in-memory texture of the given size.
pub fn solid_texture(width: u32, height: u32) -> Texture {
    let rgba = [200u8, 100, 50, 255].repeat((width * height) as usize);
    Texture::from_rgba(width, height, rgba).expect("valid dimensions")
}

/// Write an RGB PNG with a horizontal gradient and return its path.
pub fn write_rgb_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, _| Rgb([(x % 256) as u8, 0, 255]));
    let path = dir.join(name);
    img.save(&path).expect("write RGB PNG");
    path
}

/// Write an 8-bit grayscale PNG and return its path.
pub fn write_gray_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = GrayImage::from_pixel(width, height, Luma([128]));
    let path = dir.join(name);
    img.save(&path).expect("write grayscale PNG");
    path
}
