use std::path::PathBuf;

use clap::Args;

use crate::pipeline::stage1_load::run_stage1;
use crate::report::text::render_overview;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input TSV or CSV with a header line
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    input: PathBuf,
}

pub fn handle(args: InspectArgs) -> anyhow::Result<()> {
    let loaded = run_stage1(&args.input)?;
    print!("{}", render_overview(&loaded));
    Ok(())
}
