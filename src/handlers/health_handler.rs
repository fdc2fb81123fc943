use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/live")]
async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Always ready: the fallback tier answers even with no generation
/// providers configured. The body reports which tiers are active so
/// operators can tell a fully degraded deployment apart from a healthy one.
#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let remote = state.config.generation_api_key.is_some();
    let local = state.config.local_model_url.is_some();

    HttpResponse::Ok().json(serde_json::json!({
        "status": "ready",
        "version": env!("CARGO_PKG_VERSION"),
        "generation": {
            "remote": if remote { "configured" } else { "disabled" },
            "local": if local { "configured" } else { "disabled" }
        }
    }))
}
