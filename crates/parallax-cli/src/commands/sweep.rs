use anyhow::{ensure, Result};
use clap::Args;

use super::layout::LayoutArgs;

#[derive(Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Scroll positions sampled per page
    #[arg(long, default_value = "4")]
    pub steps: usize,
}

pub fn run(args: &SweepArgs) -> Result<()> {
    ensure!(args.steps > 0, "--steps must be at least 1");
    let (config, mut engine) = args.layout.engine()?;

    println!(
        "{:>6} {:>7}  {:<28} {:<28}",
        "page", "offset", "source", "destination"
    );
    // The last page has nothing to its right, so it is only sampled at 0.
    for page in 0..config.page_count {
        let steps = if page + 1 == config.page_count { 1 } else { args.steps };
        for step in 0..steps {
            let offset = step as f32 / args.steps as f32;
            engine.on_scroll(page, offset);
            println!(
                "{:>6} {:>7.3}  {:<28} {:<28}",
                page,
                offset,
                engine.source().to_string(),
                engine.destination().to_string()
            );
        }
    }

    Ok(())
}
