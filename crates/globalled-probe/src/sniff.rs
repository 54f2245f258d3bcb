//! Image format detection from leading bytes.
//!
//! Used when a probed response carries no usable content type. Only raster
//! formats the storefront can render are recognized.

/// True when `bytes` begin with a known raster-image magic number.
///
/// Recognizes JPEG, PNG, GIF, WebP, and BMP.
#[must_use]
pub fn is_image_bytes(bytes: &[u8]) -> bool {
    is_jpeg(bytes) || is_png(bytes) || is_gif(bytes) || is_webp(bytes) || is_bmp(bytes)
}

fn is_jpeg(bytes: &[u8]) -> bool {
    bytes.starts_with(&[0xFF, 0xD8, 0xFF])
}

fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])
}

fn is_gif(bytes: &[u8]) -> bool {
    bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a")
}

/// RIFF container with a `WEBP` fourcc at offset 8.
fn is_webp(bytes: &[u8]) -> bool {
    bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP"
}

fn is_bmp(bytes: &[u8]) -> bool {
    bytes.starts_with(b"BM")
}
