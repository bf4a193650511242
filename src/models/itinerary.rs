use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::budget::BudgetTier;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Logistics,
    Sightseeing,
    Activity,
    Dining,
}

/// Which day template produced a day plan
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DayTemplate {
    Arrival,
    FullDay,
    Departure,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScheduledActivity {
    pub time: String,
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MealPlan {
    pub meal: String,
    pub cost: u32,
    pub included: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub destination: String,
    pub title: String,
    pub template: DayTemplate,
    pub activities: Vec<ScheduledActivity>,
    pub accommodation: String,
    pub meals: Vec<MealPlan>,
    pub daily_cost: u32,
    pub transportation: String,
    pub highlights: String,
    pub tips: String,
}

impl DayPlan {
    pub fn included_meal_cost(&self) -> u32 {
        self.meals
            .iter()
            .filter(|meal| meal.included)
            .map(|meal| meal.cost)
            .sum()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostBreakdown {
    pub accommodation: u32,
    pub meals: u32,
    pub transportation: u32,
    pub activities: u32,
    pub total: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub title: String,
    pub duration: u32,
    pub destinations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_destinations: Vec<String>,
    pub budget_level: BudgetTier,
    pub daily_plan: Vec<DayPlan>,
    pub cost_breakdown: CostBreakdown,
    pub total_cost: u32,
    pub created_at: DateTime<Utc>,
    pub summary: String,
}
