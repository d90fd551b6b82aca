use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::load_config;
use crate::xfm::plan::XfmRequest;
use crate::xfm::{Backend, XfmOptions, run_apply_xfm};

#[derive(Args, Debug)]
pub struct ApplyXfmArgs {
    /// Input 4D image
    #[arg(long = "in", value_name = "FILE")]
    input: PathBuf,

    /// Reference (target) image defining the output grid
    #[arg(long = "ref", value_name = "FILE")]
    reference: PathBuf,

    /// Transform: MIRTK dof, FSL warp field, or FSL affine (.mat)
    #[arg(long, value_name = "FILE")]
    xfm: PathBuf,

    /// Output 4D image
    #[arg(long, value_name = "FILE")]
    out: PathBuf,

    /// Registration toolkit used to apply the transform
    #[arg(long, value_enum, default_value = "mirtk")]
    pub(crate) backend: BackendArg,

    /// Interpolation mode passed to the backend
    #[arg(long)]
    interp: Option<String>,

    /// Repetition time (seconds) recorded in the merged image
    #[arg(long, value_name = "SECS")]
    tr: Option<f64>,

    /// Number of volumes; skips querying fslnvols
    #[arg(long, value_name = "N")]
    nvols: Option<usize>,

    /// Keep intermediate volumes in this directory
    #[arg(long, value_name = "DIR")]
    work_dir: Option<PathBuf>,

    /// Write each step's stdout/stderr to files in this directory
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Log the commands without running them
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Optional TOML config with [tools] paths
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendArg {
    Mirtk,
    Fsl,
}

impl From<BackendArg> for Backend {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::Mirtk => Backend::Mirtk,
            BackendArg::Fsl => Backend::Fsl,
        }
    }
}

pub fn handle(args: ApplyXfmArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    if let Some(tr) = args.tr
        && (tr.is_nan() || tr <= 0.0)
    {
        anyhow::bail!("--tr must be positive, got {tr}");
    }

    let request = XfmRequest {
        input: args.input,
        reference: args.reference,
        transform: args.xfm,
        output: args.out,
        backend: args.backend.into(),
        interp: args.interp,
        tr: args.tr,
    };
    let opts = XfmOptions {
        dry_run: args.dry_run,
        nvols: args.nvols,
        work_dir: args.work_dir,
        log_dir: args.log_dir,
    };

    let outcome = run_apply_xfm(&request, &config.tools, &opts)?;
    info!(
        output = %request.output.display(),
        commands = outcome.executed,
        dry_run = opts.dry_run,
        "transform applied"
    );
    Ok(())
}
