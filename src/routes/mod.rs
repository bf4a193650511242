pub mod health;
pub mod itinerary;

use actix_web::{error, web, HttpResponse};
use serde_json::json;

/// Register every route; shared by the server binary and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api").service(
                web::scope("/itineraries")
                    .route("/generate", web::post().to(itinerary::generate))
                    .route("/export", web::post().to(itinerary::export))
                    .route("/share", web::post().to(itinerary::share)),
            ),
        );
}

/// Malformed bodies get the same JSON error shape as domain errors
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        let message = err.to_string();
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": message })),
        )
        .into()
    })
}
