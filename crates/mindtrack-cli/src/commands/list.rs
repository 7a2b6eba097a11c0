use clap::Args;
use mindtrack_core::MoodBand;

use super::{format_timestamp, Context};

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
    /// Show at most N entries
    #[arg(long)]
    pub limit: Option<usize>,
}

pub async fn run(ctx: &Context, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut entries = ctx.journal.mood_list().await?;
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No moods recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        let band = MoodBand::from_average(f64::from(entry.mood.value()));
        println!("Mood: {} ({band})", entry.mood);
        if !entry.note.trim().is_empty() {
            println!("  {}", entry.note);
        }
        println!("  {}", format_timestamp(entry));
    }
    Ok(())
}
