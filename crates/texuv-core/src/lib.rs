pub mod config;
pub mod error;
pub mod overlay;
pub mod session;
pub mod texture;
pub mod uv;
