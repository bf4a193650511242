//! Day Plan Service
//!
//! Turns a per-destination day allocation into a day-by-day plan. Each
//! destination's block opens with an arrival day, closes with a departure day
//! when it spans more than one day, and fills the rest with full days. Activity
//! and tag lists from the catalog are walked cyclically so consecutive days do
//! not repeat the same content.

use crate::models::{
    budget::BudgetTier,
    itinerary::{ActivityKind, DayPlan, DayTemplate, MealPlan, ScheduledActivity},
    place::Destination,
};
use crate::services::destination_category::DestinationCategory;

const DEFAULT_TRANSPORTATION: &str = "Local transport";
const MEAL_NAMES: [&str; 3] = ["Breakfast", "Lunch", "Dinner"];

/// Read-only cursor over a list that wraps around at the end.
#[derive(Debug, Clone, Copy)]
pub struct CyclicCursor<'a> {
    items: &'a [String],
    position: usize,
}

impl<'a> CyclicCursor<'a> {
    pub fn new(items: &'a [String], position: usize) -> Self {
        Self { items, position }
    }

    pub fn current(&self) -> Option<&'a str> {
        self.peek(0)
    }

    /// Item `offset` steps past the current one, `None` for an empty list
    pub fn peek(&self, offset: usize) -> Option<&'a str> {
        if self.items.is_empty() {
            return None;
        }
        let index = (self.position + offset) % self.items.len();
        Some(self.items[index].as_str())
    }
}

/// One slot in the flattened destination x day walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledDay {
    pub destination_index: usize,
    pub day_in_destination: u32,
    pub days_in_destination: u32,
    pub day_number: u32,
}

impl ScheduledDay {
    pub fn template(&self) -> DayTemplate {
        if self.day_in_destination == 0 {
            DayTemplate::Arrival
        } else if self.days_in_destination > 1
            && self.day_in_destination == self.days_in_destination - 1
        {
            DayTemplate::Departure
        } else {
            DayTemplate::FullDay
        }
    }
}

/// Yields every scheduled day in order, never past `duration`.
#[derive(Debug, Clone)]
pub struct DaySchedule<'a> {
    allocation: &'a [u32],
    duration: u32,
    destination_index: usize,
    day_in_destination: u32,
    next_day: u32,
}

impl<'a> DaySchedule<'a> {
    pub fn new(allocation: &'a [u32], duration: u32) -> Self {
        Self {
            allocation,
            duration,
            destination_index: 0,
            day_in_destination: 0,
            next_day: 1,
        }
    }
}

impl Iterator for DaySchedule<'_> {
    type Item = ScheduledDay;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_day <= self.duration {
            let days_in_destination = *self.allocation.get(self.destination_index)?;
            if self.day_in_destination >= days_in_destination {
                self.destination_index += 1;
                self.day_in_destination = 0;
                continue;
            }

            let day = ScheduledDay {
                destination_index: self.destination_index,
                day_in_destination: self.day_in_destination,
                days_in_destination,
                day_number: self.next_day,
            };
            self.day_in_destination += 1;
            self.next_day += 1;
            return Some(day);
        }
        None
    }
}

/// Per-destination data derived once and shared by all of its days
struct DestinationContext<'a> {
    place: &'a Destination,
    activities: Vec<String>,
    tags: Vec<String>,
    accommodation: &'static str,
    transportation: String,
    highlights: String,
}

impl<'a> DestinationContext<'a> {
    fn new(place: &'a Destination, budget: BudgetTier) -> Self {
        let category = DestinationCategory::classify(place);
        let tags = place.tag_list();
        let highlights = highlights_for(place, &tags);

        Self {
            place,
            activities: place.activity_list(),
            tags,
            accommodation: accommodation_label(category, budget),
            transportation: place
                .transportation
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TRANSPORTATION)
                .to_string(),
            highlights,
        }
    }

    fn name(&self) -> &str {
        &self.place.name
    }
}

fn highlights_for(place: &Destination, tags: &[String]) -> String {
    if !tags.is_empty() {
        return tags.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
    }
    place
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Highlights of {}", place.name))
}

pub fn accommodation_label(category: DestinationCategory, budget: BudgetTier) -> &'static str {
    match (category.is_trekking(), budget) {
        (true, BudgetTier::Budget) => "Tea House Lodge",
        (true, BudgetTier::Mid) => "Mountain Lodge",
        (true, BudgetTier::Luxury) => "Premium Mountain Lodge",
        (false, BudgetTier::Budget) => "Guesthouse",
        (false, BudgetTier::Mid) => "Mid-range Hotel",
        (false, BudgetTier::Luxury) => "Luxury Resort",
    }
}

/// The tip shown for a given day within a destination's block.
pub fn day_tip(place: &Destination, day_in_destination: u32, budget: BudgetTier) -> String {
    let pool = [
        format!(
            "Best time to visit {} attractions is early morning to avoid crowds.",
            place.name
        ),
        "Don't forget to try the local specialties and traditional cuisine.".to_string(),
        "Carry cash as many local vendors don't accept cards.".to_string(),
        "Respect local customs and dress modestly when visiting religious sites.".to_string(),
        "Stay hydrated and use sunscreen, especially at higher altitudes.".to_string(),
    ];

    let mut tip = pool[day_in_destination as usize % pool.len()].clone();

    if let Some(level) = place.difficulty() {
        tip.push_str(&format!(
            " The difficulty level here is {}, so plan accordingly.",
            level
        ));
    }

    match budget {
        BudgetTier::Budget => tip.push_str(
            " Look for local eateries and guesthouses for authentic experiences at lower costs.",
        ),
        BudgetTier::Luxury => {
            tip.push_str(" Consider hiring a private guide for personalized experiences.")
        }
        BudgetTier::Mid => {}
    }

    tip
}

fn scheduled(time: &str, activity: String, kind: ActivityKind, description: &str) -> ScheduledActivity {
    ScheduledActivity {
        time: time.to_string(),
        activity,
        kind,
        description: description.to_string(),
    }
}

pub struct DayPlanSynthesizer {
    budget: BudgetTier,
}

impl DayPlanSynthesizer {
    pub fn new(budget: BudgetTier) -> Self {
        Self { budget }
    }

    /// Build day plans for `destinations` using `allocation` days each, stopping
    /// at `duration` days total.
    pub fn synthesize(
        &self,
        destinations: &[Destination],
        allocation: &[u32],
        duration: u32,
    ) -> Vec<DayPlan> {
        let contexts: Vec<DestinationContext> = destinations
            .iter()
            .map(|place| DestinationContext::new(place, self.budget))
            .collect();

        DaySchedule::new(allocation, duration)
            .filter_map(|slot| {
                contexts
                    .get(slot.destination_index)
                    .map(|context| self.build_day(context, slot))
            })
            .collect()
    }

    fn build_day(&self, context: &DestinationContext, slot: ScheduledDay) -> DayPlan {
        let template = slot.template();
        let position = slot.day_in_destination as usize;

        let activities = match template {
            DayTemplate::Arrival => self.arrival_activities(context),
            DayTemplate::Departure => self.departure_activities(context, position),
            DayTemplate::FullDay => self.full_day_activities(context, position),
        };

        let title_suffix = match template {
            DayTemplate::Arrival => " (Arrival)",
            DayTemplate::Departure => " (Departure)",
            DayTemplate::FullDay => "",
        };

        DayPlan {
            day: slot.day_number,
            destination: context.name().to_string(),
            title: format!("Day {}: {}{}", slot.day_number, context.name(), title_suffix),
            template,
            activities,
            accommodation: context.accommodation.to_string(),
            meals: self.meals(template),
            daily_cost: self.budget.nightly_rate(),
            transportation: context.transportation.clone(),
            highlights: context.highlights.clone(),
            tips: day_tip(context.place, slot.day_in_destination, self.budget),
        }
    }

    fn arrival_activities(&self, context: &DestinationContext) -> Vec<ScheduledActivity> {
        let orientation = CyclicCursor::new(&context.tags, 0)
            .current()
            .map(|tag| format!("Explore {}", tag))
            .unwrap_or_else(|| format!("{} orientation walk", context.name()));

        vec![
            scheduled(
                "10:00 - 12:00",
                format!("Arrive in {} and check-in", context.name()),
                ActivityKind::Logistics,
                &format!("Settle into your {} and get oriented", context.accommodation),
            ),
            scheduled(
                "14:00 - 17:00",
                orientation,
                ActivityKind::Sightseeing,
                "Get your first taste of the local culture and atmosphere",
            ),
            scheduled(
                "18:00 - 20:00",
                "Welcome dinner and local cuisine".to_string(),
                ActivityKind::Dining,
                "Try authentic local dishes and plan upcoming days",
            ),
        ]
    }

    fn departure_activities(
        &self,
        context: &DestinationContext,
        position: usize,
    ) -> Vec<ScheduledActivity> {
        let final_activity = CyclicCursor::new(&context.activities, position)
            .current()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} final exploration", context.name()));

        vec![
            scheduled(
                "08:00 - 11:00",
                final_activity,
                ActivityKind::Activity,
                "Last chance to experience the highlights",
            ),
            scheduled(
                "11:30 - 13:00",
                "Check-out and departure preparations".to_string(),
                ActivityKind::Logistics,
                "Pack up and prepare for next destination or departure",
            ),
        ]
    }

    fn full_day_activities(
        &self,
        context: &DestinationContext,
        position: usize,
    ) -> Vec<ScheduledActivity> {
        let tags = CyclicCursor::new(&context.tags, position);
        let activities = CyclicCursor::new(&context.activities, position);

        let morning = tags
            .current()
            .map(|tag| format!("Explore {}", tag))
            .unwrap_or_else(|| format!("{} morning exploration", context.name()));
        let afternoon = activities
            .current()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} local experiences", context.name()));
        let evening = tags
            .peek(1)
            .map(|tag| format!("Evening visit to {}", tag))
            .unwrap_or_else(|| format!("{} evening exploration", context.name()));

        vec![
            scheduled(
                "08:00 - 11:30",
                morning,
                ActivityKind::Sightseeing,
                "Start the day with the most popular attractions",
            ),
            scheduled(
                "13:00 - 17:00",
                afternoon,
                ActivityKind::Activity,
                "Immerse yourself in local experiences and adventures",
            ),
            scheduled(
                "17:30 - 19:00",
                evening,
                ActivityKind::Sightseeing,
                "Discover more of the area in the golden hour",
            ),
            scheduled(
                "19:30 - 21:00",
                "Dinner and cultural experience".to_string(),
                ActivityKind::Dining,
                "Enjoy local cuisine and evening entertainment",
            ),
        ]
    }

    fn meals(&self, template: DayTemplate) -> Vec<MealPlan> {
        let costs = self.budget.meal_costs();
        MEAL_NAMES
            .iter()
            .zip(costs)
            .enumerate()
            .map(|(index, (name, cost))| MealPlan {
                meal: name.to_string(),
                cost,
                // Breakfast is not booked before the traveler arrives
                included: index != 0 || template != DayTemplate::Arrival,
            })
            .collect()
    }
}
