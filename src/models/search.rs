use serde::{Deserialize, Serialize};

use super::{budget::BudgetTier, place::Destination};

/// Parameters for a single itinerary generation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    pub duration: u32,
    #[serde(default)]
    pub selected_places: Vec<Destination>,
    #[serde(default)]
    pub budget: BudgetTier,
}

impl ItineraryRequest {
    pub fn new(duration: u32, selected_places: Vec<Destination>, budget: BudgetTier) -> Self {
        Self {
            duration,
            selected_places,
            budget,
        }
    }
}
