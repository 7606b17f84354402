pub mod overlay;
pub mod status;
pub mod transform;
pub mod viewport;
