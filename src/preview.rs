//! Preview rasterizer: flattens paint overlays onto the base artwork.
//!
//! Used by hosts to save a still image of the current paint job. Pixels are
//! sampled at their centers, so a pixel belongs to a part when its center
//! lies inside the part's display-space shape.

use image::{Rgba, RgbaImage};

use crate::color_utils::{blend_channel, parse_hex_rgb};
use crate::configurator::Configurator;
use crate::error::LiveryError;
use crate::mapper::ViewportGeometry;
use crate::model::{Point, Size};
use crate::overlay::OverlayItem;

/// Background used when a view has no base artwork on disk.
pub const BLANK_CANVAS: [u8; 4] = [245, 245, 245, 255];

/// Errors that can occur while producing a preview.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// Base artwork could not be decoded or the preview could not be encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Overlays could not be built for the view
    #[error(transparent)]
    Livery(#[from] LiveryError),
}

/// Blend overlays onto a copy of `base`.
///
/// Overlays are applied in order, so later ones end up on top. An overlay
/// whose color is not a hex token is skipped.
pub fn render_preview(base: &RgbaImage, overlays: &[OverlayItem]) -> RgbaImage {
    let mut out = base.clone();
    let (width, height) = out.dimensions();

    for item in overlays {
        let Some(rgb) = parse_hex_rgb(&item.color) else {
            log::warn!(
                "Skipping overlay for '{}': '{}' is not a hex color",
                item.part_id,
                item.color
            );
            continue;
        };

        let bounds = item.bounds;
        let x_start = bounds.x1.floor().max(0.0) as u32;
        let y_start = bounds.y1.floor().max(0.0) as u32;
        let x_end = (bounds.x2.ceil().max(0.0) as u32).min(width);
        let y_end = (bounds.y2.ceil().max(0.0) as u32).min(height);

        for y in y_start..y_end {
            for x in x_start..x_end {
                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if !item.shape.contains(&center) {
                    continue;
                }
                let pixel = out.get_pixel_mut(x, y);
                for (dst, src) in pixel.0.iter_mut().zip(rgb) {
                    *dst = blend_channel(*dst, src, item.opacity);
                }
            }
        }
    }

    out
}

/// Render the current paint job for one view at the size of `base`.
pub fn render_view_preview(
    configurator: &Configurator,
    view_id: &str,
    base: &RgbaImage,
) -> Result<RgbaImage, PreviewError> {
    let geometry = ViewportGeometry::new(base.width() as f32, base.height() as f32);
    let overlays = configurator.overlays_for(view_id, geometry)?;
    log::debug!(
        "🖼️ Preview '{}' at {}x{} with {} overlays",
        view_id,
        base.width(),
        base.height(),
        overlays.len()
    );
    Ok(render_preview(base, &overlays))
}

/// Plain canvas of a view's reference size.
pub fn blank_canvas(size: Size) -> RgbaImage {
    let width = size.width.round().max(1.0) as u32;
    let height = size.height.round().max(1.0) as u32;
    RgbaImage::from_pixel(width, height, Rgba(BLANK_CANVAS))
}

/// Decode base artwork from a file.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_base(path: &std::path::Path) -> Result<RgbaImage, PreviewError> {
    Ok(image::open(path)?.to_rgba8())
}

/// Decode base artwork from raw bytes (works on both WASM and native).
pub fn load_base_from_bytes(data: &[u8]) -> Result<RgbaImage, PreviewError> {
    Ok(image::load_from_memory(data)?.to_rgba8())
}

/// Encode a preview as PNG bytes.
pub fn encode_png(preview: &RgbaImage) -> Result<Vec<u8>, PreviewError> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    preview.write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
