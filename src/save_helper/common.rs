use cairo::ImageSurface;
use image::{ImageBuffer, Rgb, RgbImage};
use std::error::Error;

/// 将 Cairo Rgb24 surface 转换为 RGB ImageBuffer
/// 调用时 surface 上不能有存活的 Context
pub fn surface_to_rgb_image(surface: &mut ImageSurface) -> Result<RgbImage, Box<dyn Error>> {
    surface.flush();

    let width = surface.width() as u32;
    let height = surface.height() as u32;
    let stride = surface.stride() as usize;
    let data = surface.data()?;

    let mut rgb_buffer: RgbImage = ImageBuffer::new(width, height);

    // Rgb24 每像素一个本机字节序的 u32: 0x00RRGGBB
    for y in 0..height {
        for x in 0..width {
            let offset = (y as usize * stride) + (x as usize * 4);
            let word = u32::from_ne_bytes([
                data[offset],
                data[offset + 1],
                data[offset + 2],
                data[offset + 3],
            ]);
            let r = (word >> 16) as u8;
            let g = (word >> 8) as u8;
            let b = word as u8;
            rgb_buffer.put_pixel(x, y, Rgb([r, g, b]));
        }
    }

    Ok(rgb_buffer)
}
