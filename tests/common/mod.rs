use actix_web::{web, App};
use serde_json::{json, Value};

use nepal_itinerary_api::{
    config::{AppConfig, ItineraryGenerationConfig, OvershootPolicy},
    routes,
    services::itinerary_generation_service::ItineraryGenerator,
};

pub struct TestApp {
    pub config: AppConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_policy(OvershootPolicy::Truncate)
    }

    pub fn with_policy(overshoot_policy: OvershootPolicy) -> Self {
        Self {
            config: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: "test".to_string(),
                cors_allowed_origin: None,
                generation: ItineraryGenerationConfig {
                    max_duration_days: 30,
                    overshoot_policy,
                },
            },
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(ItineraryGenerator::with_config(
                self.config.generation.clone(),
            )))
            .configure(routes::configure)
    }
}

pub fn place(name: &str, place_type: &str) -> Value {
    json!({ "name": name, "type": place_type })
}

pub fn kathmandu() -> Value {
    json!({
        "id": 1,
        "name": "Kathmandu",
        "location": "Kathmandu Valley",
        "type": "Cultural",
        "activities": "Heritage site exploration, Temple ceremonies, Local food tours",
        "tags": "Durbar Square, Swayambhunath, Boudhanath, Thamel",
        "description": "Capital city with UNESCO heritage sites",
        "best_season": "Autumn",
        "difficulty_level": "Easy",
        "transportation": "Walking, taxi, rickshaw"
    })
}
