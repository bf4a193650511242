use crate::config::{ItineraryGenerationConfig, OvershootPolicy};
use crate::error::ItineraryError;
use crate::models::{
    budget::BudgetTier,
    itinerary::Itinerary,
    place::Destination,
    search::ItineraryRequest,
};
use crate::services::day_allocation_service::allocate_days;
use crate::services::day_plan_service::DayPlanSynthesizer;
use crate::services::destination_category::DestinationCategory;
use crate::services::pricing_service::PricingService;
use chrono::Utc;

#[derive(Clone, Default)]
pub struct ItineraryGenerator {
    config: ItineraryGenerationConfig,
}

impl ItineraryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ItineraryGenerationConfig) -> Self {
        Self { config }
    }

    /// Generate a day-by-day itinerary with costs for the requested trip
    pub fn generate_itinerary(&self, request: &ItineraryRequest) -> Result<Itinerary, ItineraryError> {
        let duration = request.duration;
        let budget = request.budget;

        if request.selected_places.is_empty() {
            return Err(ItineraryError::NoDestinations);
        }
        if duration == 0 {
            return Err(ItineraryError::InvalidDuration(duration));
        }
        if duration > self.config.max_duration_days {
            return Err(ItineraryError::DurationTooLong {
                duration,
                max: self.config.max_duration_days,
            });
        }

        let (places, skipped) = self.fit_destinations(&request.selected_places, duration)?;

        let weights: Vec<u32> = places
            .iter()
            .map(|place| DestinationCategory::classify(place).ideal_days())
            .collect();
        let destination_days = allocate_days(duration, &weights);
        log::debug!("Allocated days {:?} for weights {:?}", destination_days, weights);

        let daily_plan = DayPlanSynthesizer::new(budget).synthesize(places, &destination_days, duration);
        let cost_breakdown = PricingService::calculate_breakdown(&daily_plan, duration, budget);

        let names: Vec<String> = places.iter().map(|place| place.name.clone()).collect();

        log::info!(
            "Generated {}-day {} itinerary across {} destinations, total cost {}",
            duration,
            budget,
            names.len(),
            cost_breakdown.total
        );

        Ok(Itinerary {
            title: Self::generate_trip_name(&names, duration),
            duration,
            summary: Self::generate_summary(&names, duration, budget),
            destinations: names,
            skipped_destinations: skipped,
            budget_level: budget,
            daily_plan,
            total_cost: cost_breakdown.total,
            cost_breakdown,
            created_at: Utc::now(),
        })
    }

    /// Apply the overshoot policy when there are more destinations than days
    fn fit_destinations<'a>(
        &self,
        places: &'a [Destination],
        duration: u32,
    ) -> Result<(&'a [Destination], Vec<String>), ItineraryError> {
        let limit = duration as usize;
        if places.len() <= limit {
            return Ok((places, Vec::new()));
        }

        match self.config.overshoot_policy {
            OvershootPolicy::Reject => Err(ItineraryError::DegenerateAllocation {
                duration,
                destinations: places.len(),
            }),
            OvershootPolicy::Truncate => {
                let (kept, dropped) = places.split_at(limit);
                let skipped: Vec<String> = dropped.iter().map(|place| place.name.clone()).collect();
                log::warn!(
                    "{} destinations do not fit into {} days, skipping {:?}",
                    places.len(),
                    duration,
                    skipped
                );
                Ok((kept, skipped))
            }
        }
    }

    fn generate_trip_name(names: &[String], duration: u32) -> String {
        format!("{}-Day {} Adventure", duration, names.join(" & "))
    }

    fn generate_summary(names: &[String], duration: u32, budget: BudgetTier) -> String {
        format!(
            "A {}-day {} adventure through {}, featuring cultural immersion, natural beauty, and authentic Nepalese experiences.",
            duration,
            budget.description(),
            names.join(", ")
        )
    }
}
