use convert_host::models::ConversionRequest;
use convert_host::services::TranscodeService;
use image::{GenericImageView, ImageFormat, ImageOutputFormat};
use std::io::Cursor;

/// Build a PNG in memory with a simple gradient so JPEG quality levels
/// produce measurably different file sizes
fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageOutputFormat::Png).unwrap();
    buffer.into_inner()
}

fn request(width: u32, height: u32, quality: u32) -> ConversionRequest {
    ConversionRequest {
        source_path: "foo.png".to_string(),
        target_width: width,
        target_height: height,
        quality,
    }
}

#[test]
fn zero_targets_keep_source_dimensions() {
    let source = png_fixture(400, 300);
    let converted = TranscodeService::convert(&source, &request(0, 0, 90)).unwrap();

    assert_eq!(converted.width, 400);
    assert_eq!(converted.height, 300);

    let decoded = image::load_from_memory(&converted.bytes).unwrap();
    assert_eq!(decoded.dimensions(), (400, 300));
}

#[test]
fn width_only_scales_height_proportionally() {
    let source = png_fixture(400, 300);
    let converted = TranscodeService::convert(&source, &request(200, 0, 80)).unwrap();

    assert!(converted.width <= 200);
    assert_eq!(converted.width, 200);
    assert_eq!(converted.height, 150);
}

#[test]
fn output_is_jpeg() {
    let source = png_fixture(400, 300);
    let converted = TranscodeService::convert(&source, &request(200, 0, 80)).unwrap();

    assert_eq!(converted.format, "JPEG");
    assert_eq!(image::guess_format(&converted.bytes).unwrap(), ImageFormat::Jpeg);

    // Round-trip: the produced bytes must decode
    let decoded = image::load_from_memory(&converted.bytes).unwrap();
    assert_eq!(decoded.dimensions(), (200, 150));
}

#[test]
fn metadata_describes_the_output() {
    let source = png_fixture(400, 300);
    let converted = TranscodeService::convert(&source, &request(0, 0, 90)).unwrap();

    assert_eq!(converted.size_bytes, converted.bytes.len());
    assert_eq!(converted.color_space, "sRGB");
}

#[test]
fn resize_is_idempotent_at_source_dimensions() {
    let source = png_fixture(400, 300);
    let converted = TranscodeService::convert(&source, &request(400, 300, 90)).unwrap();

    assert_eq!(converted.width, 400);
    assert_eq!(converted.height, 300);
}

#[test]
fn box_constraint_preserves_aspect_ratio() {
    let source = png_fixture(400, 300);
    // Box disagrees with the source aspect ratio; only one axis matches
    let converted = TranscodeService::convert(&source, &request(200, 100, 90)).unwrap();

    assert!(converted.width <= 200);
    assert!(converted.height <= 100);
    let ratio = converted.width as f64 / converted.height as f64;
    assert!((ratio - 400.0 / 300.0).abs() < 0.05);
}

#[test]
fn lower_quality_yields_smaller_output() {
    let source = png_fixture(400, 300);
    let low = TranscodeService::convert(&source, &request(0, 0, 10)).unwrap();
    let high = TranscodeService::convert(&source, &request(0, 0, 95)).unwrap();

    assert!(low.size_bytes < high.size_bytes);
}

#[test]
fn alpha_sources_are_flattened() {
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_fn(64, 64, |x, _| {
        image::Rgba([200, 100, 50, (x % 256) as u8])
    }));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageOutputFormat::Png).unwrap();

    let converted = TranscodeService::convert(&buffer.into_inner(), &request(32, 0, 90)).unwrap();
    assert_eq!(converted.width, 32);
    assert!(image::load_from_memory(&converted.bytes).is_ok());
}

#[test]
fn corrupt_bytes_fail_to_decode() {
    let garbage = vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01, 0x02, 0x03];
    let err = TranscodeService::convert(&garbage, &request(200, 0, 90)).unwrap_err();

    assert!(err.user_message().contains("decode"));
}

#[test]
fn truncated_png_fails_to_decode() {
    let mut source = png_fixture(400, 300);
    source.truncate(source.len() / 2);

    let err = TranscodeService::convert(&source, &request(0, 0, 90)).unwrap_err();
    assert!(err.user_message().contains("decode"));
}
