use actix_web::{get, web, HttpResponse};
use chrono::Utc;

/// GET /health - The service holds no stateful dependencies, so healthy
/// means the process is serving requests
#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// GET /health/live - Liveness probe (app is running)
#[get("/health/live")]
async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"status": "alive"}))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(liveness);
}
