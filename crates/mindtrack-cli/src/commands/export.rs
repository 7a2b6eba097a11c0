use clap::Args;
use std::path::PathBuf;

use super::Context;

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (default: <data dir>/<export.file_name>)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub async fn run(ctx: &Context, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let entries = ctx.journal.mood_list().await?;
    let path = args
        .output
        .unwrap_or_else(|| ctx.config.export_path(&ctx.data_dir));
    mindtrack_core::export::export_to_file(&entries, &path)?;
    println!("{}", path.display());
    Ok(())
}
