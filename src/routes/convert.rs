use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::models::{ConversionRequest, ConvertQuery};
use crate::services::{BlobFetcher, TranscodeService};
use actix_web::{get, web, HttpResponse};
use tracing::info;

/// Shared application state; read-only after startup, so requests run
/// concurrently with no locking
pub struct AppState {
    pub config: AppConfig,
    pub fetcher: BlobFetcher,
}

#[get("/api/convert")]
async fn convert_image(
    state: web::Data<AppState>,
    query: web::Query<ConvertQuery>,
) -> AppResult<HttpResponse> {
    let request =
        ConversionRequest::from_query(&query, state.config.image.default_quality)?;

    let source_bytes = state.fetcher.fetch(&request.source_path).await?;

    // Decode/resize/encode are CPU-bound; run them off the event loop
    let converted = web::block(move || TranscodeService::convert(&source_bytes, &request))
        .await
        .map_err(|e| AppError::EncodeFailed(format!("conversion task failed: {}", e)))??;

    info!(
        width = converted.width,
        height = converted.height,
        color_space = %converted.color_space,
        format = %converted.format,
        size_bytes = converted.size_bytes,
        "Converted image"
    );

    Ok(HttpResponse::Ok()
        .content_type("image/jpeg")
        .body(converted.bytes))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(convert_image);
}
