use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending tier chosen by the traveler. Every per-day and per-trip rate hangs
/// off this value.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    #[default]
    Mid,
    Luxury,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::Mid => "mid",
            BudgetTier::Luxury => "luxury",
        }
    }

    /// Nightly accommodation cost, independent of destination
    pub fn nightly_rate(&self) -> u32 {
        match self {
            BudgetTier::Budget => 35,
            BudgetTier::Mid => 65,
            BudgetTier::Luxury => 120,
        }
    }

    /// Breakfast, lunch and dinner costs
    pub fn meal_costs(&self) -> [u32; 3] {
        match self {
            BudgetTier::Budget => [6, 10, 12],
            BudgetTier::Mid => [8, 15, 20],
            BudgetTier::Luxury => [15, 25, 35],
        }
    }

    /// Per-day transportation rate applied over the whole trip
    pub fn transportation_rate(&self) -> f64 {
        match self {
            BudgetTier::Budget => 15.0,
            BudgetTier::Mid => 25.0,
            BudgetTier::Luxury => 40.0,
        }
    }

    /// Per-day activities rate applied over the whole trip
    pub fn activities_rate(&self) -> f64 {
        match self {
            BudgetTier::Budget => 20.0,
            BudgetTier::Mid => 35.0,
            BudgetTier::Luxury => 60.0,
        }
    }

    /// Wording used in itinerary summaries
    pub fn description(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget-friendly",
            BudgetTier::Mid => "mid-range",
            BudgetTier::Luxury => "luxury",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(BudgetTier::Budget),
            "mid" | "mid-range" | "midrange" => Ok(BudgetTier::Mid),
            "luxury" => Ok(BudgetTier::Luxury),
            other => Err(format!("Unknown budget tier: {}", other)),
        }
    }
}
