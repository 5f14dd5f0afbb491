use comfy_table::{Table, presets::UTF8_FULL};

use crate::models::PlanEntry;

const BAR_WIDTH: usize = 24;

/// Render a fixed-width progress bar:
/// `Calories             [######------------------] 450/1800 kcal`.
/// The ratio is clamped to [0, 1] (a zero goal yields an empty bar,
/// never a division fault); the numeric suffix shows the true values
/// rounded to whole numbers for display only.
pub fn progress_bar(label: &str, current: f64, goal: f64, unit: &str) -> String {
    let current = current.max(0.0);
    let goal = goal.max(0.0);
    let ratio = if goal == 0.0 {
        0.0
    } else {
        (current / goal).min(1.0)
    };
    let filled = (ratio * BAR_WIDTH as f64) as usize;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));
    format!("{:<20} [{}] {:.0}/{:.0} {}", label, bar, current, goal, unit)
}

/// Short name for an ISO day of week (Monday = 1 .. Sunday = 7).
pub fn dow_name(dow: u32) -> &'static str {
    match dow {
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        6 => "Sat",
        7 => "Sun",
        _ => "?",
    }
}

/// Render the seeded plan as a table ordered by week then day.
pub fn plan_table(entries: &[PlanEntry]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Week", "Day", "Workout", "Details"]);
    for e in entries {
        table.add_row([
            e.week.to_string(),
            dow_name(e.dow).to_string(),
            e.name.clone(),
            e.details.clone(),
        ]);
    }
    table.to_string()
}
