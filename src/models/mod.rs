use crate::error::{AppError, AppResult};
use serde::Deserialize;

/// Raw query parameters of the convert endpoint, all optional strings.
/// Numeric fields arrive as text so that malformed values can fall back
/// to 0 instead of failing actix's typed extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertQuery {
    pub url: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub quality: Option<String>,
}

/// A validated conversion request. Immutable once constructed; lives
/// for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Path of the source image relative to the blob store base URL
    pub source_path: String,
    /// Target width in pixels; 0 = unconstrained
    pub target_width: u32,
    /// Target height in pixels; 0 = unconstrained
    pub target_height: u32,
    /// JPEG quality in [1, 100]
    pub quality: u32,
}

impl ConversionRequest {
    /// Validate raw query parameters into a `ConversionRequest`.
    ///
    /// `url` must be present and non-empty. Numeric parameters use a
    /// parse-or-default policy: any value that does not parse as an
    /// integer becomes 0. A quality of 0 (absent or unparsable) is
    /// replaced by `default_quality`.
    pub fn from_query(query: &ConvertQuery, default_quality: u32) -> AppResult<Self> {
        let source_path = match query.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => return Err(AppError::InvalidRequest("url is not valid".to_string())),
        };

        let target_width = parse_or_zero(query.width.as_deref());
        let target_height = parse_or_zero(query.height.as_deref());

        let mut quality = parse_or_zero(query.quality.as_deref());
        if quality == 0 {
            quality = default_quality;
        }

        Ok(Self {
            source_path,
            target_width,
            target_height,
            quality,
        })
    }
}

fn parse_or_zero(value: Option<&str>) -> u32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// The converted image plus descriptive metadata for observability
#[derive(Debug, Clone)]
pub struct ConvertedImage {
    /// JPEG-encoded output
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub color_space: String,
    pub format: String,
    pub size_bytes: usize,
}
