use crate::{
    error::ItineraryError,
    models::{itinerary::Itinerary, search::ItineraryRequest},
    services::{
        itinerary_export_service::{render_text_report, report_file_name, share_text},
        itinerary_generation_service::ItineraryGenerator,
    },
};
use actix_web::{http::header, web, HttpResponse};
use serde_json::json;

/*
    /api/itineraries/generate
*/
pub async fn generate(
    generator: web::Data<ItineraryGenerator>,
    input: web::Json<ItineraryRequest>,
) -> Result<HttpResponse, ItineraryError> {
    let request = input.into_inner();
    log::info!(
        "Generating itinerary: {} days, {} destinations, {} budget",
        request.duration,
        request.selected_places.len(),
        request.budget
    );

    match generator.generate_itinerary(&request) {
        Ok(itinerary) => Ok(HttpResponse::Ok().json(itinerary)),
        Err(err) => {
            log::warn!("Itinerary generation refused: {}", err);
            Err(err)
        }
    }
}

/*
    /api/itineraries/export
*/
pub async fn export(input: web::Json<Itinerary>) -> HttpResponse {
    let itinerary = input.into_inner();
    let file_name = report_file_name(&itinerary);

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ))
        .body(render_text_report(&itinerary))
}

/*
    /api/itineraries/share
*/
pub async fn share(input: web::Json<Itinerary>) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "text": share_text(&input) }))
}
