use image::RgbImage;
use log::debug;
use std::error::Error;
use std::path::PathBuf;

use crate::config::BackgroundConfig;
use crate::font;
use crate::render::Canvas;
use crate::save_helper;

/// 按固定顺序绘制，调整顺序会改变结果
pub fn generate(config: &BackgroundConfig) -> Result<RgbImage, Box<dyn Error>> {
    let mut canvas = Canvas::new(config.width, config.height, config.base_color)?;
    debug!("canvas {}x{}", canvas.width(), canvas.height());

    canvas.paint_gradient(&config.gradient)?;
    canvas.draw_grid(&config.grid)?;

    let font = font::resolve_font(&config.font);
    debug!("caption font: {}", font.describe());

    let layout = canvas.layout_caption(&config.caption, &font)?;
    debug!("caption layout: {:?}", layout);
    canvas.draw_caption(&config.caption, &font, &layout)?;

    for arrow in &config.arrows {
        canvas.fill_arrow(arrow, config.arrow_color)?;
    }

    save_helper::surface_to_rgb_image(canvas.surface_mut())
}

/// 生成并写入文件，返回输出路径
pub fn run(config: &BackgroundConfig) -> Result<PathBuf, Box<dyn Error>> {
    let image = generate(config)?;
    save_helper::save_to_png(&image, &config.output_path)?;
    Ok(config.output_path.clone())
}
