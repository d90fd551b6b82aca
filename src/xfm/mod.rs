//! Applies a spatial transform to every volume of a 4D image by driving
//! external FSL / MIRTK executables: split, transform each volume, merge.

pub mod plan;
pub mod tool;

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::info;

use crate::config::ToolPaths;
use crate::xfm::plan::{Plan, XfmRequest, build_plan, parse_volume_count, volume_count_command};
use crate::xfm::tool::{ExecError, RunOptions};

#[derive(Debug, Error)]
pub enum XfmError {
    #[error("missing input file: {0}")]
    MissingFile(PathBuf),
    #[error("could not determine volume count from {0:?}")]
    VolumeCount(String),
    #[error("exec error: {0}")]
    Exec(#[from] ExecError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Mirtk,
    Fsl,
}

impl Backend {
    pub fn default_interp(self) -> &'static str {
        match self {
            Backend::Mirtk => "Linear",
            Backend::Fsl => "trilinear",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct XfmOptions {
    pub dry_run: bool,
    /// Known volume count; skips the `fslnvols` query.
    pub nvols: Option<usize>,
    pub work_dir: Option<PathBuf>,
    /// Write each step's stdout (and stderr as `.err`) into this directory.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct XfmOutcome {
    pub plan: Plan,
    pub executed: usize,
}

pub fn run_apply_xfm(
    req: &XfmRequest,
    tools: &ToolPaths,
    opts: &XfmOptions,
) -> Result<XfmOutcome, XfmError> {
    for path in [&req.input, &req.reference, &req.transform] {
        if !opts.dry_run && !path.exists() {
            return Err(XfmError::MissingFile(path.clone()));
        }
    }

    let nvols = match opts.nvols {
        Some(n) => n,
        None => parse_volume_count(&volume_count_command(tools, &req.input).query()?)?,
    };
    info!(volumes = nvols, input = %req.input.display(), "volume count");

    // The temporary directory lives until this function returns.
    let (work_dir, _guard) = match &opts.work_dir {
        Some(dir) => {
            if !opts.dry_run {
                std::fs::create_dir_all(dir)?;
            }
            (dir.clone(), None)
        }
        None if opts.dry_run => (output_parent(&req.output).join("xfm.dry-run"), None),
        None => {
            let parent = output_parent(&req.output);
            std::fs::create_dir_all(&parent)?;
            let tmp = tempfile::Builder::new().prefix("xfm.").tempdir_in(&parent)?;
            (tmp.path().to_path_buf(), Some(tmp))
        }
    };

    let plan = build_plan(req, tools, &work_dir, nvols)?;
    if let Some(dir) = &opts.log_dir
        && !opts.dry_run
    {
        std::fs::create_dir_all(dir)?;
    }
    let executed = execute_plan(&plan, opts.dry_run, opts.log_dir.as_deref())?;
    Ok(XfmOutcome { plan, executed })
}

pub fn execute_plan(
    plan: &Plan,
    dry_run: bool,
    log_dir: Option<&Path>,
) -> Result<usize, XfmError> {
    let total = plan.commands().count();
    let mut executed = 0usize;
    for (step, command) in plan.commands().enumerate() {
        let start = Instant::now();
        let run_opts = RunOptions {
            dry_run,
            stdout_file: log_dir.map(|d| d.join(step_log_name(step + 1, &command.program))),
        };
        command.run(&run_opts)?;
        executed += 1;
        info!(
            step = step + 1,
            total,
            program = %command.program,
            elapsed_ms = start.elapsed().as_millis(),
            "finished step"
        );
    }
    Ok(executed)
}

fn step_log_name(step: usize, program: &str) -> String {
    let name = Path::new(program)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.to_string());
    format!("{step:02}_{name}.log")
}

fn output_parent(output: &Path) -> PathBuf {
    match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/xfm/mod.rs"]
mod tests;
