use bevy::log::warn;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::render::texture::Image;

use image::io::Reader as ImageReader;
use std::path::Path;

use crate::error::DockError;

static FALLBACK_GLYPH: &[u8] = include_bytes!("../../assets/icons/dock.svg");

pub fn builtin_glyph(name: &str) -> Option<&'static [u8]> {
    let bytes: &'static [u8] = match name {
        "home" => include_bytes!("../../assets/icons/home.svg"),
        "user" => include_bytes!("../../assets/icons/user.svg"),
        "briefcase" => include_bytes!("../../assets/icons/briefcase.svg"),
        "folder" => include_bytes!("../../assets/icons/folder.svg"),
        "wrench" => include_bytes!("../../assets/icons/wrench.svg"),
        "mail" => include_bytes!("../../assets/icons/mail.svg"),
        "linkedin" => include_bytes!("../../assets/icons/linkedin.svg"),
        "github" => include_bytes!("../../assets/icons/github.svg"),
        "twitter" => include_bytes!("../../assets/icons/twitter.svg"),
        "code" => include_bytes!("../../assets/icons/code.svg"),
        "dock" => FALLBACK_GLYPH,
        _ => return None,
    };
    Some(bytes)
}

fn rgba_image(width: u32, height: u32, data: Vec<u8>) -> Image {
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
    )
}

pub fn render_svg(name: &str, svg_bytes: &[u8], size: u32) -> Result<Image, DockError> {
    let glyph_error = |reason: String| DockError::Glyph {
        name: name.to_string(),
        reason,
    };

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg_bytes, &opts).map_err(|e| glyph_error(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| glyph_error(format!("cannot allocate {size}x{size} pixmap")))?;
    resvg::render(
        &tree,
        usvg::FitTo::Size(size, size),
        tiny_skia::Transform::default(),
        pixmap.as_mut(),
    )
    .ok_or_else(|| glyph_error("render failed".to_string()))?;

    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(rgba_image(size, size, data))
}

fn load_file(path: &Path, size: u32) -> Result<Image, DockError> {
    let name = path.to_string_lossy().to_string();
    if path.extension().is_some_and(|ext| ext == "svg") {
        let bytes = std::fs::read(path).map_err(|e| DockError::Glyph {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        return render_svg(&name, &bytes, size);
    }

    let img = ImageReader::open(path)
        .map_err(|e| e.to_string())
        .and_then(|reader| reader.decode().map_err(|e| e.to_string()))
        .map_err(|reason| DockError::Glyph {
            name: name.clone(),
            reason,
        })?;

    let rgba = img
        .resize(size, size, image::imageops::FilterType::Lanczos3)
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(rgba_image(width, height, rgba.into_raw()))
}

/// Rasterises an item icon: a built-in glyph name, or a path to an svg or
/// raster file. Anything that fails falls back to the dock glyph.
pub fn load_glyph(icon: &str, size: u32) -> Image {
    let loaded = match builtin_glyph(icon) {
        Some(bytes) => render_svg(icon, bytes, size),
        None => load_file(Path::new(icon), size),
    };

    match loaded {
        Ok(image) => image,
        Err(err) => {
            warn!("{err}, using fallback glyph");
            render_svg("dock", FALLBACK_GLYPH, size).unwrap_or_else(|_| {
                rgba_image(1, 1, vec![255, 255, 255, 255])
            })
        }
    }
}
