//! INFO: Best-effort font loading for the caption
use cairo::freetype::Library;
use cairo::{Context, FontFace};
use log::debug;
use std::error::Error;
use std::path::Path;

use crate::config::FontSpec;

pub enum FontChoice {
    /// 从字体文件加载的 FreeType 字体
    Preferred {
        face: FontFace,
        size: f64,
        // face 依赖 library，需要一起存活
        _library: Library,
    },
    /// 保持 cairo 上下文自带的默认字体和字号
    Fallback,
}

impl FontChoice {
    #[allow(unused)]
    pub fn is_fallback(&self) -> bool {
        matches!(self, FontChoice::Fallback)
    }

    /// 将字体设置到上下文，Fallback 不做任何修改
    pub fn apply(&self, cr: &Context) {
        if let FontChoice::Preferred { face, size, .. } = self {
            cr.set_font_face(face);
            cr.set_font_size(*size);
        }
    }

    pub fn describe(&self) -> String {
        match self {
            FontChoice::Preferred { size, .. } => format!("preferred font, size {}", size),
            FontChoice::Fallback => "built-in default font".to_string(),
        }
    }
}

/// 加载首选字体，任何失败都回退到默认字体
pub fn resolve_font(spec: &FontSpec) -> FontChoice {
    match load_truetype(&spec.path) {
        Ok((face, library)) => FontChoice::Preferred {
            face,
            size: spec.size,
            _library: library,
        },
        Err(e) => {
            debug!(
                "font {} unavailable, using default: {}",
                spec.path.display(),
                e
            );
            FontChoice::Fallback
        }
    }
}

fn load_truetype(path: &Path) -> Result<(FontFace, Library), Box<dyn Error>> {
    let library = Library::init()?;
    // .ttc 取第一个 face
    let ft_face = library.new_face(path, 0)?;
    let face = FontFace::create_from_ft(&ft_face)?;
    Ok((face, library))
}

/// 测试机上常见的 TrueType 字体
#[cfg(test)]
pub(crate) fn find_system_font() -> Option<std::path::PathBuf> {
    [
        "/System/Library/Fonts/Helvetica.ttc",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(std::path::PathBuf::from)
    .find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn spec(path: impl Into<PathBuf>) -> FontSpec {
        FontSpec {
            path: path.into(),
            size: 16.0,
        }
    }

    #[test]
    fn test_missing_font_falls_back() {
        let choice = resolve_font(&spec("/nonexistent/fonts/Nope.ttc"));
        assert!(choice.is_fallback());
    }

    #[test]
    fn test_directory_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let choice = resolve_font(&spec(dir.path()));
        assert!(choice.is_fallback());
    }

    #[test]
    fn test_garbage_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();
        file.flush().unwrap();

        let choice = resolve_font(&spec(file.path()));
        assert!(choice.is_fallback());
    }

    #[test]
    fn test_system_font_is_preferred() {
        let Some(path) = find_system_font() else {
            eprintln!("no TrueType font found, skipping");
            return;
        };
        let choice = resolve_font(&spec(path));
        assert!(!choice.is_fallback());
        assert_eq!(choice.describe(), "preferred font, size 16");
    }

    #[test]
    fn test_fallback_leaves_context_untouched() {
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, 10, 10).unwrap();
        let cr = Context::new(&surface).unwrap();
        let before = cr.font_matrix();

        FontChoice::Fallback.apply(&cr);

        assert_eq!(cr.font_matrix().xx(), before.xx());
        assert_eq!(cr.font_matrix().yy(), before.yy());
    }
}
