use serde::{Deserialize, Serialize};

use crate::table::format::{DEFAULT_NA_REP, DEFAULT_PRECISION};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub design: DesignDefaults,
    #[serde(default)]
    pub tools: ToolPaths,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignDefaults {
    pub sep: Option<String>,
    pub precision: usize,
    pub na_rep: String,
    pub keep_nan: bool,
    pub summary: bool,
}

impl Default for DesignDefaults {
    fn default() -> Self {
        Self {
            sep: None,
            precision: DEFAULT_PRECISION,
            na_rep: DEFAULT_NA_REP.to_string(),
            keep_nan: false,
            summary: false,
        }
    }
}

/// Executables invoked by `apply-xfm`. Bare names are resolved on `PATH`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolPaths {
    pub fslnvols: String,
    pub fslsplit: String,
    pub fslmerge: String,
    pub mirtk: String,
    pub applywarp: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            fslnvols: "fslnvols".to_string(),
            fslsplit: "fslsplit".to_string(),
            fslmerge: "fslmerge".to_string(),
            mirtk: "mirtk".to_string(),
            applywarp: "applywarp".to_string(),
        }
    }
}
