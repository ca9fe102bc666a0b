//! INFO: Simple wrapping of the cairo drawing steps
use cairo::{Antialias, Context, ImageSurface};
use image::{Rgb, Rgba};
use std::error::Error;

use crate::config::{Arrow, Caption, Gradient, Grid};
use crate::font::FontChoice;

/// 说明文字的测量结果和绘制位置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionLayout {
    pub text_width: i32,
    pub x: i32,
    pub y: i32,
}

impl CaptionLayout {
    /// 水平居中，向下取整（文字比画布宽时也一样）
    pub fn centered(canvas_width: u32, text_width: i32, y: i32) -> Self {
        Self {
            text_width,
            x: (canvas_width as i32 - text_width).div_euclid(2),
            y,
        }
    }
}

pub struct Canvas {
    surface: ImageSurface,
    width: u32,
    height: u32,
}

fn set_rgb(cr: &Context, color: Rgb<u8>) {
    let [r, g, b] = color.0;
    cr.set_source_rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
}

fn set_rgba(cr: &Context, color: Rgba<u8>) {
    let [r, g, b, a] = color.0;
    cr.set_source_rgba(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        a as f64 / 255.0,
    );
}

impl Canvas {
    /// 创建 24 位 RGB 画布并填充底色
    pub fn new(width: u32, height: u32, base: Rgb<u8>) -> Result<Self, Box<dyn Error>> {
        let surface = ImageSurface::create(cairo::Format::Rgb24, width as i32, height as i32)?;
        let canvas = Self {
            surface,
            width,
            height,
        };

        let cr = canvas.context()?;
        set_rgb(&cr, base);
        cr.paint()?;

        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// NOTE: 导出前必须释放所有 Context，否则 surface 数据无法独占借用
    fn context(&self) -> Result<Context, cairo::Error> {
        Context::new(&self.surface)
    }

    /// 逐行覆盖整个画布
    pub fn paint_gradient(&self, gradient: &Gradient) -> Result<(), Box<dyn Error>> {
        let cr = self.context()?;
        for y in 0..self.height {
            set_rgb(&cr, gradient.row_color(y, self.height));
            cr.rectangle(0.0, y as f64, self.width as f64, 1.0);
            cr.fill()?;
        }
        Ok(())
    }

    /// 1 像素宽的网格线，整数坐标的矩形正好落在像素上
    pub fn draw_grid(&self, grid: &Grid) -> Result<(), Box<dyn Error>> {
        let cr = self.context()?;
        set_rgb(&cr, grid.color);

        for x in (0..self.width).step_by(grid.spacing as usize) {
            cr.rectangle(x as f64, 0.0, 1.0, self.height as f64);
        }
        for y in (0..self.height).step_by(grid.spacing as usize) {
            cr.rectangle(0.0, y as f64, self.width as f64, 1.0);
        }
        cr.fill()?;

        Ok(())
    }

    /// 测量文字墨迹宽度并计算位置
    pub fn layout_caption(
        &self,
        caption: &Caption,
        font: &FontChoice,
    ) -> Result<CaptionLayout, Box<dyn Error>> {
        let cr = self.context()?;
        font.apply(&cr);
        let extents = cr.text_extents(&caption.text)?;
        let text_width = extents.width().ceil() as i32;

        Ok(CaptionLayout::centered(
            self.width,
            text_width,
            self.height as i32 - caption.bottom_margin,
        ))
    }

    /// 先画阴影，再画正文
    pub fn draw_caption(
        &self,
        caption: &Caption,
        font: &FontChoice,
        layout: &CaptionLayout,
    ) -> Result<(), Box<dyn Error>> {
        let cr = self.context()?;
        font.apply(&cr);
        // y 是文字顶部，cairo 以基线定位
        let ascent = cr.font_extents()?.ascent();

        let offset = caption.shadow_offset;
        let passes = [
            (layout.x + offset, layout.y + offset, caption.shadow_color),
            (layout.x, layout.y, caption.color),
        ];
        for (x, y, color) in passes {
            set_rgb(&cr, color);
            cr.move_to(x as f64, y as f64 + ascent);
            cr.show_text(&caption.text)?;
        }

        Ok(())
    }

    /// 带 alpha 的颜色直接与下方像素混合
    pub fn fill_arrow(&self, arrow: &Arrow, color: Rgba<u8>) -> Result<(), Box<dyn Error>> {
        let cr = self.context()?;
        cr.set_antialias(Antialias::None);
        set_rgba(&cr, color);

        let [first, rest @ ..] = arrow.points;
        cr.move_to(first.0, first.1);
        for (x, y) in rest {
            cr.line_to(x, y);
        }
        cr.close_path();
        cr.fill()?;

        Ok(())
    }

    pub fn surface_mut(&mut self) -> &mut ImageSurface {
        &mut self.surface
    }
}
