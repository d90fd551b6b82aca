use clap::{Parser, Subcommand};

mod apply_xfm;
mod design;
mod inspect;

#[derive(Parser, Debug)]
#[command(
    name = "fsl-design",
    version,
    about = "FSL-compatible design matrices and 4D transform application"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a design matrix plus subject inclusion/exclusion lists
    Design(design::DesignArgs),
    /// Show the detected delimiter and column indices of a table
    Inspect(inspect::InspectArgs),
    /// Apply a transform to every volume of a 4D image
    ApplyXfm(apply_xfm::ApplyXfmArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Design(args) => design::handle(args),
            Command::Inspect(args) => inspect::handle(args),
            Command::ApplyXfm(args) => apply_xfm::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
