pub mod cli;
pub mod config;
pub mod input;
pub mod pipeline;
pub mod report;
pub mod table;
pub mod xfm;

pub mod prelude {
    pub use crate::pipeline::stage1_load::LoadedTable;
    pub use crate::pipeline::{DesignRequest, run_design};
    pub use crate::table::Table;
}
