use image::{Rgb, Rgba};
use std::path::PathBuf;

/// 行渐变: 每行亮度从 top 线性下降 delta
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    pub top: f64,
    pub delta: f64,
    /// 蓝色通道额外增加的亮度
    pub blue_lift: u8,
}

impl Gradient {
    /// 第 y 行的亮度，对整个表达式截断取整
    pub fn brightness(&self, y: u32, height: u32) -> u8 {
        (self.top - y as f64 / height as f64 * self.delta) as u8
    }

    pub fn row_color(&self, y: u32, height: u32) -> Rgb<u8> {
        let b = self.brightness(y, height);
        Rgb([b, b, b.saturating_add(self.blue_lift)])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Grid {
    pub spacing: u32,
    pub color: Rgb<u8>,
}

#[derive(Debug, Clone)]
pub struct Caption {
    pub text: String,
    pub color: Rgb<u8>,
    pub shadow_color: Rgb<u8>,
    pub shadow_offset: i32,
    /// 文字顶部到画布底部的距离
    pub bottom_margin: i32,
}

#[derive(Debug, Clone)]
pub struct FontSpec {
    pub path: PathBuf,
    pub size: f64,
}

/// 三角形箭头，坐标为像素
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub points: [(f64, f64); 3],
}

#[derive(Debug, Clone)]
pub struct BackgroundConfig {
    pub width: u32,
    pub height: u32,
    /// 初始填充色，随后会被渐变覆盖
    pub base_color: Rgb<u8>,
    pub gradient: Gradient,
    pub grid: Grid,
    pub caption: Caption,
    pub font: FontSpec,
    pub arrows: [Arrow; 2],
    pub arrow_color: Rgba<u8>,
    pub output_path: PathBuf,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundConfig {
    pub fn new() -> Self {
        let width = 600;
        let height = 400;

        BackgroundConfig {
            width,
            height,
            base_color: Rgb([0xf5, 0xf5, 0xf7]),
            gradient: Gradient {
                top: 245.0,
                delta: 10.0,
                blue_lift: 2,
            },
            grid: Grid {
                spacing: 40,
                color: Rgb([235, 235, 237]),
            },
            caption: Caption {
                text: "Drag Folder Categoriser to Applications to install".to_string(),
                color: Rgb([100, 100, 120]),
                shadow_color: Rgb([200, 200, 210]),
                shadow_offset: 1,
                bottom_margin: 50,
            },
            font: FontSpec {
                path: PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
                size: 16.0,
            },
            arrows: Self::default_arrows(height),
            arrow_color: Rgba([100, 149, 237, 180]),
            output_path: PathBuf::from("dmg-background.png"),
        }
    }

    /// 左箭头指向应用图标，右箭头指向 Applications
    fn default_arrows(height: u32) -> [Arrow; 2] {
        let y = (height / 2) as f64 - 20.0;
        [
            Arrow {
                points: [(200.0, y), (220.0, y - 10.0), (220.0, y + 10.0)],
            },
            Arrow {
                points: [(400.0, y), (380.0, y - 10.0), (380.0, y + 10.0)],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = BackgroundConfig::default();
        assert_eq!((config.width, config.height), (600, 400));
        assert_eq!(config.output_path, PathBuf::from("dmg-background.png"));
        assert_eq!(config.caption.bottom_margin, 50);
    }

    #[test]
    fn test_gradient_brightness() {
        let g = BackgroundConfig::default().gradient;
        assert_eq!(g.brightness(0, 400), 245);
        // 245 - 4.5 = 240.5 -> 240
        assert_eq!(g.brightness(180, 400), 240);
        assert_eq!(g.brightness(200, 400), 240);
        assert_eq!(g.brightness(399, 400), 235);
        assert_eq!(g.row_color(1, 400), Rgb([244, 244, 246]));
    }

    #[test]
    fn test_gradient_is_monotonic() {
        let g = BackgroundConfig::default().gradient;
        for y in 1..400 {
            assert!(g.brightness(y, 400) <= g.brightness(y - 1, 400));
        }
    }

    #[test]
    fn test_arrows_are_mirrored() {
        let config = BackgroundConfig::default();
        let [left, right] = config.arrows;
        assert_eq!(left.points[0], (200.0, 180.0));
        for (l, r) in left.points.iter().zip(right.points.iter()) {
            assert_eq!(l.0 + r.0, 600.0);
            assert_eq!(l.1, r.1);
        }
    }
}
