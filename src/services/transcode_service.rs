use crate::error::{AppError, AppResult};
use crate::models::{ConversionRequest, ConvertedImage};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView, ImageOutputFormat};
use std::io::Cursor;
use tracing::{debug, error};

pub struct TranscodeService;

impl TranscodeService {
    /// Run the decode → strip → resize → encode pipeline on raw source
    /// bytes, producing JPEG output plus descriptive metadata.
    ///
    /// Decoding reads only pixel data, so EXIF, ICC profiles, and
    /// comments never survive the round trip; the re-encoded output is
    /// metadata-free regardless of what the source carried.
    pub fn convert(source_bytes: &[u8], request: &ConversionRequest) -> AppResult<ConvertedImage> {
        let img = image::load_from_memory(source_bytes).map_err(|e| {
            error!("Failed to decode source image: {}", e);
            AppError::DecodeFailed(e.to_string())
        })?;

        let (source_width, source_height) = img.dimensions();
        debug!(
            "Decoded source image: {}x{}, color {:?}",
            source_width,
            source_height,
            img.color()
        );

        let (target_width, target_height) = fit_dimensions(
            source_width,
            source_height,
            request.target_width,
            request.target_height,
        );

        let resized = if (target_width, target_height) == (source_width, source_height) {
            img
        } else {
            img.resize_exact(target_width, target_height, FilterType::Lanczos3)
        };

        let bytes = Self::encode_jpeg(&resized, request.quality)?;
        let size_bytes = bytes.len();

        Ok(ConvertedImage {
            bytes,
            width: resized.width(),
            height: resized.height(),
            color_space: color_space_name(resized.color()).to_string(),
            format: "JPEG".to_string(),
            size_bytes,
        })
    }

    fn encode_jpeg(img: &DynamicImage, quality: u32) -> AppResult<Vec<u8>> {
        let quality = quality.clamp(1, 100) as u8;

        // JPEG has no alpha channel; flatten before encoding
        let img = match img.color() {
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::La8 | ColorType::La16 => {
                DynamicImage::ImageRgb8(img.to_rgb8())
            }
            _ => img.clone(),
        };

        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageOutputFormat::Jpeg(quality))
            .map_err(|e| {
                error!("Failed to encode JPEG: {}", e);
                AppError::EncodeFailed(e.to_string())
            })?;

        Ok(buffer.into_inner())
    }
}

/// Compute output dimensions that fit within the requested box while
/// preserving the source aspect ratio.
///
/// A target of 0 leaves that axis unconstrained; both 0 retains the
/// source dimensions. When both targets are non-zero the smaller scale
/// factor wins, so at most one axis matches its target exactly and
/// proportions are never distorted.
fn fit_dimensions(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32) {
    if target_width == 0 && target_height == 0 {
        return (source_width, source_height);
    }

    let width_scale = if target_width == 0 {
        f64::INFINITY
    } else {
        target_width as f64 / source_width as f64
    };
    let height_scale = if target_height == 0 {
        f64::INFINITY
    } else {
        target_height as f64 / source_height as f64
    };

    let scale = width_scale.min(height_scale);
    let width = ((source_width as f64 * scale).round() as u32).max(1);
    let height = ((source_height as f64 * scale).round() as u32).max(1);
    (width, height)
}

fn color_space_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 | ColorType::L16 => "Gray",
        ColorType::La8 | ColorType::La16 => "GrayAlpha",
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => "sRGB",
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => "sRGBAlpha",
        _ => "Unknown",
    }
}
