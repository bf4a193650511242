use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItineraryError {
    #[error("Select at least one destination to generate an itinerary")]
    NoDestinations,

    #[error("Trip duration must be at least 1 day, got {0}")]
    InvalidDuration(u32),

    #[error("Trip duration of {duration} days exceeds the maximum of {max} days")]
    DurationTooLong { duration: u32, max: u32 },

    #[error("{destinations} destinations cannot fit into {duration} days; add days or remove destinations")]
    DegenerateAllocation { duration: u32, destinations: usize },
}

impl ResponseError for ItineraryError {
    fn status_code(&self) -> StatusCode {
        match self {
            ItineraryError::DegenerateAllocation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
