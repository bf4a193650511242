use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use nepal_itinerary_api::{
    config::AppConfig, routes, services::itinerary_generation_service::ItineraryGenerator,
};

fn cors(config: &AppConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600);

    match &config.cors_allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    log::info!(
        "Environment: {}, max trip length {} days, overshoot policy {:?}",
        config.environment,
        config.generation.max_duration_days,
        config.generation.overshoot_policy
    );

    let generator = web::Data::new(ItineraryGenerator::with_config(config.generation.clone()));
    let bind_address = (config.host.clone(), config.port);
    let app_config = web::Data::new(config);

    log::info!("Binding to {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(&app_config))
            .app_data(app_config.clone())
            .app_data(generator.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
