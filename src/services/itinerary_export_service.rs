use std::fmt::{self, Write};

use crate::models::itinerary::Itinerary;

const RULE_WIDTH: usize = 60;

/// Plain-text report used for the itinerary download
pub fn render_text_report(itinerary: &Itinerary) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, itinerary);
    out
}

fn write_report(out: &mut String, itinerary: &Itinerary) -> fmt::Result {
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let light_rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "{}", heavy_rule)?;
    writeln!(out, "{}", itinerary.title.to_uppercase())?;
    writeln!(out, "{}", heavy_rule)?;
    writeln!(out, "{}", itinerary.summary)?;
    writeln!(out)?;
    writeln!(out, "{:<14}{} days", "Duration:", itinerary.duration)?;
    writeln!(out, "{:<14}{}", "Budget:", itinerary.budget_level)?;
    writeln!(out, "{:<14}{}", "Destinations:", itinerary.destinations.join(", "))?;
    if !itinerary.skipped_destinations.is_empty() {
        writeln!(
            out,
            "{:<14}{}",
            "Not included:",
            itinerary.skipped_destinations.join(", ")
        )?;
    }
    writeln!(
        out,
        "{:<14}{}",
        "Created:",
        itinerary.created_at.format("%Y-%m-%d")
    )?;

    for day in &itinerary.daily_plan {
        writeln!(out)?;
        writeln!(out, "{}", light_rule)?;
        writeln!(out, "{}", day.title)?;
        writeln!(out, "{}", light_rule)?;
        writeln!(out, "  Stay:      {}", day.accommodation)?;
        writeln!(out, "  Getting around: {}", day.transportation)?;
        writeln!(out, "  Highlights: {}", day.highlights)?;
        writeln!(out)?;
        for activity in &day.activities {
            writeln!(out, "  {:<15} {}", activity.time, activity.activity)?;
            writeln!(out, "  {:<15} {}", "", activity.description)?;
        }
        writeln!(out)?;
        for meal in &day.meals {
            let status = if meal.included { "included" } else { "not included" };
            writeln!(out, "  {:<10} ${:>4}  ({})", meal.meal, meal.cost, status)?;
        }
        writeln!(out, "  {:<10} ${:>4}", "Lodging", day.daily_cost)?;
        writeln!(out, "  Tip: {}", day.tips)?;
    }

    let costs = &itinerary.cost_breakdown;
    writeln!(out)?;
    writeln!(out, "{}", heavy_rule)?;
    writeln!(out, "COST BREAKDOWN")?;
    writeln!(out, "{}", heavy_rule)?;
    for (label, amount) in [
        ("Accommodation", costs.accommodation),
        ("Meals", costs.meals),
        ("Transportation", costs.transportation),
        ("Activities", costs.activities),
    ] {
        writeln!(out, "  {:<16} ${:>6}", label, amount)?;
    }
    writeln!(out, "  {:<16} ${:>6}", "Total", itinerary.total_cost)
}

/// Short text for sharing an itinerary
pub fn share_text(itinerary: &Itinerary) -> String {
    format!(
        "{}\nDestinations: {}\nBudget: {}\nTotal cost: ${}\n{}",
        itinerary.title,
        itinerary.destinations.join(", "),
        itinerary.budget_level,
        itinerary.total_cost,
        itinerary.summary
    )
}

/// File name offered for the downloaded report
pub fn report_file_name(itinerary: &Itinerary) -> String {
    let slug = itinerary
        .title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "itinerary.txt".to_string()
    } else {
        format!("{}.txt", slug)
    }
}
