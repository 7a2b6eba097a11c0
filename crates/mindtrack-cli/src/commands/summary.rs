use clap::Args;
use mindtrack_core::{DayMood, MoodBand};

use super::Context;

const BAR_WIDTH: usize = 20;

#[derive(Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(ctx: &Context, args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let views = ctx.journal.views();

    if args.json {
        let out = serde_json::json!({
            "weekly_average": views.weekly_average,
            "daily_series": views.daily_series,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Weekly Average Mood: {:.1}", views.weekly_average);
    println!();
    println!("Daily Mood (Last 7 Days)");
    for day in &views.daily_series {
        println!("{}", render_bar(day));
    }
    Ok(())
}

/// One chart row: label, bar scaled to 0..=5, value and band.
fn render_bar(day: &DayMood) -> String {
    let mood = day.avg_mood.clamp(0.0, 5.0);
    let filled = ((mood / 5.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{:<3} |{}{}| {:.1} {}",
        day.day_label,
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        mood,
        MoodBand::from_average(mood),
    )
}
