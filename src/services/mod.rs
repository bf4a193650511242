pub mod day_allocation_service;
pub mod day_plan_service;
pub mod destination_category;
pub mod itinerary_export_service;
pub mod itinerary_generation_service;
pub mod pricing_service;
