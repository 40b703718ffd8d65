//! CLI command definitions

use clap::Args;

/// Run the built-in demonstration pipelines
#[derive(Debug, Args, Clone)]
pub struct SelfTestCommand {
    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,
}
