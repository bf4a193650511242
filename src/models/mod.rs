pub mod budget;
pub mod itinerary;
pub mod place;
pub mod search;
