use clap::Args;
use mindtrack_core::ResetSummary;

use super::Context;

#[derive(Args)]
pub struct ResetArgs {
    /// Confirm deleting every entry
    #[arg(long)]
    pub yes: bool,
}

pub async fn run(ctx: &Context, args: ResetArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes {
        return Err("reset deletes every entry and cannot be undone; pass --yes to confirm".into());
    }

    let ResetSummary { week, deleted } = ctx.journal.reset_week_manual().await?;
    println!("Deleted {deleted} entries; week {week} marked as reset");
    Ok(())
}
