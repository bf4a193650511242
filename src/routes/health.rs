use crate::config::AppConfig;
use crate::models::{budget::BudgetTier, place::Destination, search::ItineraryRequest};
use crate::services::itinerary_generation_service::ItineraryGenerator;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(
    config: web::Data<AppConfig>,
    generator: web::Data<ItineraryGenerator>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let generator_result = check_generator(&generator, &config);
    health
        .services
        .insert("itinerary_generator".to_string(), generator_result.clone());

    if generator_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

/// Run a one-day generation to make sure the pipeline is wired up
fn check_generator(generator: &ItineraryGenerator, config: &AppConfig) -> ServiceStatus {
    let sample_request = ItineraryRequest::new(1, vec![Destination::named("Kathmandu")], BudgetTier::Mid);

    match generator.generate_itinerary(&sample_request) {
        Ok(itinerary) if itinerary.daily_plan.len() == 1 => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "Max duration {} days, overshoot policy {:?}",
                config.generation.max_duration_days, config.generation.overshoot_policy
            )),
        },
        Ok(itinerary) => ServiceStatus {
            status: "error".to_string(),
            details: Some(format!(
                "Sample generation produced {} days instead of 1",
                itinerary.daily_plan.len()
            )),
        },
        Err(e) => {
            log::error!("Itinerary generator health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Sample generation failed: {}", e)),
            }
        }
    }
}
