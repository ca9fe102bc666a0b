use image::{ImageFormat, RgbImage};
use log::debug;
use std::path::Path;

/// 写入 PNG，已存在的文件会被覆盖
pub fn save_to_png(image: &RgbImage, output_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    image.save_with_format(output_path, ImageFormat::Png)?;
    debug!(
        "wrote {}x{} png to {}",
        image.width(),
        image.height(),
        output_path.display()
    );
    Ok(())
}
