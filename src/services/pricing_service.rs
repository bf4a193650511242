use crate::models::{
    budget::BudgetTier,
    itinerary::{CostBreakdown, DayPlan},
};

pub struct PricingService;

impl PricingService {
    /// Sum of nightly accommodation over every planned day
    pub fn calculate_accommodation_cost(daily_plan: &[DayPlan]) -> u32 {
        daily_plan.iter().map(|day| day.daily_cost).sum()
    }

    /// Sum of included meals over every planned day
    pub fn calculate_meal_cost(daily_plan: &[DayPlan]) -> u32 {
        daily_plan.iter().map(DayPlan::included_meal_cost).sum()
    }

    /// Trip-wide transportation, scaled by duration
    pub fn calculate_transport_cost(duration: u32, budget: BudgetTier) -> u32 {
        scale_by_duration(duration, budget.transportation_rate())
    }

    /// Trip-wide activity fees, scaled by duration
    pub fn calculate_activity_cost(duration: u32, budget: BudgetTier) -> u32 {
        scale_by_duration(duration, budget.activities_rate())
    }

    pub fn calculate_breakdown(
        daily_plan: &[DayPlan],
        duration: u32,
        budget: BudgetTier,
    ) -> CostBreakdown {
        let accommodation = Self::calculate_accommodation_cost(daily_plan);
        let meals = Self::calculate_meal_cost(daily_plan);
        let transportation = Self::calculate_transport_cost(duration, budget);
        let activities = Self::calculate_activity_cost(duration, budget);

        CostBreakdown {
            accommodation,
            meals,
            transportation,
            activities,
            total: accommodation + meals + transportation + activities,
        }
    }
}

fn scale_by_duration(duration: u32, rate: f64) -> u32 {
    (duration as f64 * rate).round() as u32
}
