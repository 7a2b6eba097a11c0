use clap::Args;

use super::Context;

#[derive(Args)]
pub struct AddArgs {
    /// Mood level, 1 (low) to 5 (high)
    #[arg(allow_negative_numbers = true)]
    pub mood: i64,
    /// Optional note
    #[arg(long, short, default_value = "")]
    pub note: String,
    /// Print the stored entry as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(ctx: &Context, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let entry = ctx.journal.add_mood(args.mood, &args.note).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!("Saved mood {} (#{})", entry.mood, entry.id);
    }
    Ok(())
}
