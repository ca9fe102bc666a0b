//! INFO: Provides wrappers for output to fs
mod common;
mod png;

pub use common::surface_to_rgb_image;
pub use png::save_to_png;
