use anyhow::Result;
use clap::Args;

use super::layout::LayoutArgs;
use crate::summary::print_params_summary;

#[derive(Args)]
pub struct ParamsArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,
}

pub fn run(args: &ParamsArgs) -> Result<()> {
    let (config, engine) = args.layout.engine()?;
    print_params_summary(&config, &engine);
    Ok(())
}
