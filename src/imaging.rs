//! Background removal and inline image codec.
//!
//! The removal routine is a spatial/color heuristic, not foreground
//! segmentation: it reliably clears only a uniform, border-adjacent
//! background and will misfire on busy or centered-background images. That
//! limitation is intentional; the algorithm is a placeholder pending a real
//! segmentation model.
//!
//! Images travel through the engine as inline data URLs
//! (`data:image/png;base64,...`), so this module also hosts the
//! decode/encode helpers.

use crate::constants::{BORDER_MARGIN, CORNER_TOLERANCE, EDGE_THRESHOLD};
use crate::error::{BoardError, BoardResult};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use tracing::debug;

// ============================================================================
// Data URL codec
// ============================================================================

/// Build a data URL for raw encoded image bytes.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

/// Decode a `data:<mime>;base64,<payload>` URL into a raster image.
pub fn decode_data_url(data_url: &str) -> BoardResult<DynamicImage> {
    let payload = data_url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or_else(|| BoardError::Processing("not a base64 image data URL".to_string()))?;

    let bytes = BASE64
        .decode(payload)
        .map_err(|e| BoardError::Processing(format!("invalid base64 payload: {e}")))?;

    Ok(image::load_from_memory(&bytes)?)
}

/// Encode a raster image as a PNG data URL.
pub fn encode_png_data_url(img: &RgbaImage) -> BoardResult<String> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img.clone()).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(to_data_url("image/png", &bytes))
}

// ============================================================================
// Background removal heuristic
// ============================================================================

/// Apply the best-effort transparency mask to an image.
///
/// For every pixel not on the 1-pixel border: skip it if any RGB channel
/// differs from a 4-connected neighbor by more than the edge threshold;
/// otherwise clear its alpha when it sits within the border margin of the
/// image boundary or its color is within tolerance of any corner pixel.
/// Border pixels are untouched, so images of 2 pixels or fewer in either
/// dimension pass through unchanged.
pub fn remove_background(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let mut out = img.clone();
    if width < 3 || height < 3 {
        return out;
    }

    let corners = [
        img.get_pixel(0, 0).0,
        img.get_pixel(width - 1, 0).0,
        img.get_pixel(0, height - 1).0,
        img.get_pixel(width - 1, height - 1).0,
    ];

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if is_edge_pixel(img, x, y) {
                continue;
            }
            let distance_to_edge = x.min(y).min(width - x).min(height - y);
            if distance_to_edge < BORDER_MARGIN || similar_to_corner(img, x, y, &corners) {
                out.get_pixel_mut(x, y).0[3] = 0;
            }
        }
    }

    out
}

/// Decode a data URL, apply the mask, and re-encode as PNG.
///
/// This is the unit of work a background job runs; it never touches board
/// state itself.
pub fn remove_background_from_data_url(data_url: &str) -> BoardResult<String> {
    let decoded = decode_data_url(data_url)?;
    let rgba = decoded.to_rgba8();
    debug!(
        width = rgba.width(),
        height = rgba.height(),
        "running background removal"
    );
    let masked = remove_background(&rgba);
    encode_png_data_url(&masked)
}

/// A pixel is an edge when any RGB channel differs from any 4-connected
/// neighbor by more than the threshold.
fn is_edge_pixel(img: &RgbaImage, x: u32, y: u32) -> bool {
    let center = img.get_pixel(x, y).0;
    let neighbors = [
        img.get_pixel(x - 1, y).0,
        img.get_pixel(x + 1, y).0,
        img.get_pixel(x, y - 1).0,
        img.get_pixel(x, y + 1).0,
    ];
    neighbors.iter().any(|neighbor| {
        (0..3).any(|channel| {
            (i16::from(center[channel]) - i16::from(neighbor[channel])).abs() > EDGE_THRESHOLD
        })
    })
}

/// Whether the pixel color sits within tolerance of any corner pixel (likely
/// background).
fn similar_to_corner(img: &RgbaImage, x: u32, y: u32, corners: &[[u8; 4]; 4]) -> bool {
    let pixel = img.get_pixel(x, y).0;
    corners.iter().any(|corner| {
        (0..3).all(|channel| {
            (i16::from(pixel[channel]) - i16::from(corner[channel])).abs() < CORNER_TOLERANCE
        })
    })
}
