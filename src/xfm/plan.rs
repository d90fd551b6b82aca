use std::path::{Path, PathBuf};

use crate::config::ToolPaths;
use crate::xfm::tool::ToolCommand;
use crate::xfm::{Backend, XfmError};

/// Volume paths below assume this output type.
pub const FSL_OUTPUT_TYPE: (&str, &str) = ("FSLOUTPUTTYPE", "NIFTI_GZ");
const VOLUME_EXT: &str = ".nii.gz";
const SPLIT_BASENAME: &str = "vol";
const APPLIED_BASENAME: &str = "xfm_vol";

#[derive(Debug, Clone, PartialEq)]
pub struct XfmRequest {
    pub input: PathBuf,
    pub reference: PathBuf,
    pub transform: PathBuf,
    pub output: PathBuf,
    pub backend: Backend,
    pub interp: Option<String>,
    pub tr: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub split: ToolCommand,
    pub apply: Vec<ToolCommand>,
    pub merge: ToolCommand,
}

impl Plan {
    pub fn commands(&self) -> impl Iterator<Item = &ToolCommand> {
        std::iter::once(&self.split)
            .chain(self.apply.iter())
            .chain(std::iter::once(&self.merge))
    }
}

pub fn volume_count_command(tools: &ToolPaths, input: &Path) -> ToolCommand {
    ToolCommand::new(&tools.fslnvols)
        .arg(input)
        .env(FSL_OUTPUT_TYPE.0, FSL_OUTPUT_TYPE.1)
}

pub fn parse_volume_count(stdout: &str) -> Result<usize, XfmError> {
    match stdout.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(XfmError::VolumeCount(stdout.trim().to_string())),
    }
}

/// Path of volume `idx` as written by `fslsplit <in> <work>/vol -t`.
pub fn split_volume(work_dir: &Path, idx: usize) -> PathBuf {
    work_dir.join(format!("{SPLIT_BASENAME}{idx:04}{VOLUME_EXT}"))
}

pub fn applied_volume(work_dir: &Path, idx: usize) -> PathBuf {
    work_dir.join(format!("{APPLIED_BASENAME}{idx:04}{VOLUME_EXT}"))
}

pub fn build_plan(
    req: &XfmRequest,
    tools: &ToolPaths,
    work_dir: &Path,
    nvols: usize,
) -> Result<Plan, XfmError> {
    if nvols == 0 {
        return Err(XfmError::VolumeCount("0".to_string()));
    }

    let split = ToolCommand::new(&tools.fslsplit)
        .arg(&req.input)
        .arg(work_dir.join(SPLIT_BASENAME))
        .arg("-t")
        .env(FSL_OUTPUT_TYPE.0, FSL_OUTPUT_TYPE.1);

    let apply = (0..nvols)
        .map(|idx| {
            apply_command(
                req,
                tools,
                &split_volume(work_dir, idx),
                &applied_volume(work_dir, idx),
            )
        })
        .collect();

    let volumes: Vec<PathBuf> = (0..nvols).map(|idx| applied_volume(work_dir, idx)).collect();
    let merge = match req.tr {
        Some(tr) => ToolCommand::new(&tools.fslmerge)
            .arg("-tr")
            .arg(&req.output)
            .args(&volumes)
            .arg(tr.to_string()),
        None => ToolCommand::new(&tools.fslmerge)
            .arg("-t")
            .arg(&req.output)
            .args(&volumes),
    }
    .env(FSL_OUTPUT_TYPE.0, FSL_OUTPUT_TYPE.1);

    Ok(Plan {
        split,
        apply,
        merge,
    })
}

fn apply_command(req: &XfmRequest, tools: &ToolPaths, input: &Path, output: &Path) -> ToolCommand {
    let interp = req
        .interp
        .clone()
        .unwrap_or_else(|| req.backend.default_interp().to_string());
    match req.backend {
        Backend::Mirtk => ToolCommand::new(&tools.mirtk)
            .arg("transform-image")
            .arg(input)
            .arg(output)
            .arg("-dofin")
            .arg(&req.transform)
            .arg("-target")
            .arg(&req.reference)
            .arg("-interp")
            .arg(interp),
        Backend::Fsl => {
            let xfm_flag = if is_affine_matrix(&req.transform) {
                "--premat"
            } else {
                "--warp"
            };
            ToolCommand::new(&tools.applywarp)
                .arg(flag_value("--in", input))
                .arg(flag_value("--ref", &req.reference))
                .arg(flag_value("--out", output))
                .arg(flag_value(xfm_flag, &req.transform))
                .arg(format!("--interp={interp}"))
                .env(FSL_OUTPUT_TYPE.0, FSL_OUTPUT_TYPE.1)
        }
    }
}

fn is_affine_matrix(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("mat")
}

fn flag_value(flag: &str, path: &Path) -> String {
    format!("{flag}={}", path.display())
}

#[cfg(test)]
#[path = "../../tests/src_inline/xfm/plan.rs"]
mod tests;
