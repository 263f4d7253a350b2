use anyhow::{ensure, Result};
use clap::Args;

use super::layout::LayoutArgs;
use crate::summary::print_scroll_summary;

#[derive(Args)]
pub struct ScrollArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Page index the scroll position starts from
    #[arg(long, default_value = "0")]
    pub page: usize,

    /// Fraction of the next page shown (0.0-1.0)
    #[arg(long, default_value = "0.0")]
    pub offset: f32,
}

pub fn run(args: &ScrollArgs) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&args.offset),
        "--offset must be between 0.0 and 1.0, got {}",
        args.offset
    );
    let (config, mut engine) = args.layout.engine()?;
    if args.page >= config.page_count {
        tracing::warn!(
            page = args.page,
            page_count = config.page_count,
            "Scroll position lies past the last page"
        );
    }

    engine.on_scroll(args.page, args.offset);
    print_scroll_summary(args.page, args.offset, &engine);
    Ok(())
}
