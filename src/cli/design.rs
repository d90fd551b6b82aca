use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::load_config;
use crate::input::lists::{parse_index_list, parse_list};
use crate::pipeline::{DesignRequest, run_design};
use crate::table::format::{OutputFormat, Separator};

#[derive(Args, Debug)]
pub struct DesignArgs {
    /// Input TSV or CSV with a header line; the first column holds subject IDs
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    pub(crate) input: PathBuf,

    /// Output prefix
    #[arg(short = 'o', long = "out", value_name = "PREFIX")]
    pub(crate) prefix: PathBuf,

    /// File or comma separated subject IDs to remove (e.g. "sub-001,sub-002")
    #[arg(long = "rm-list", value_name = "STR", default_value = "")]
    pub(crate) rm_list: String,

    /// File or comma separated subject IDs to retain
    #[arg(long = "ret-list", value_name = "STR", default_value = "")]
    pub(crate) ret_list: String,

    /// File or comma separated column indices to retain (index 0 is the subject ID)
    #[arg(long = "ret-cols", value_name = "STR", default_value = "")]
    pub(crate) ret_cols: String,

    /// File or comma separated column indices to demean; columns must be numeric
    #[arg(long, value_name = "STR", default_value = "")]
    pub(crate) demean: String,

    /// Keep subjects with missing values in the retained columns
    #[arg(long = "keep-nan")]
    pub(crate) keep_nan: bool,

    /// Output separator: a single character, or tab/comma/space [default: space]
    #[arg(long, value_name = "SEP")]
    pub(crate) sep: Option<Separator>,

    /// Decimal places for floating point values [default: 3]
    #[arg(long, value_name = "N")]
    pub(crate) precision: Option<usize>,

    /// Also write <PREFIX>.summary.json
    #[arg(long)]
    pub(crate) summary: bool,

    /// Optional TOML config with [design] defaults
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,
}

pub fn handle(args: DesignArgs) -> anyhow::Result<()> {
    let request = build_request(args)?;
    let outcome = run_design(&request)?;

    info!(
        matrix = %outcome.paths.matrix.display(),
        include = %outcome.paths.include.display(),
        exclude = %outcome.paths.exclude.display(),
        included = outcome.lists.include.len(),
        excluded = outcome.lists.exclude.len(),
        "design written"
    );
    if let Some(path) = &outcome.summary_path {
        info!(summary = %path.display(), "summary written");
    }
    Ok(())
}

pub(crate) fn build_request(args: DesignArgs) -> anyhow::Result<DesignRequest> {
    let config = load_config(args.config.as_deref())?;
    let defaults = config.design;

    let sep = match (args.sep, defaults.sep.as_deref()) {
        (Some(sep), _) => sep,
        (None, Some(s)) => s
            .parse::<Separator>()
            .map_err(|e| anyhow::anyhow!("config [design].sep: {e}"))?,
        (None, None) => Separator::default(),
    };
    let format = OutputFormat {
        sep,
        precision: args.precision.unwrap_or(defaults.precision),
        na_rep: defaults.na_rep,
    };
    if format.na_rep.contains(char::from(format.sep.byte())) {
        anyhow::bail!("na_rep {:?} contains the output separator", format.na_rep);
    }

    Ok(DesignRequest {
        input: args.input,
        prefix: args.prefix,
        retain: parse_list(&args.ret_list)?,
        remove: parse_list(&args.rm_list)?,
        columns: parse_index_list(&args.ret_cols)?,
        demean: parse_index_list(&args.demean)?,
        drop_missing: !(args.keep_nan || defaults.keep_nan),
        format,
        write_summary: args.summary || defaults.summary,
    })
}
