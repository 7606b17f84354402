mod viewport;

pub use viewport::ViewportState;
