//! Share link CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::BudgetSplitResult;
use crate::share::{encode_plan, share_url};
use crate::storage::read_plan_file;

use super::source::plan_from_share;

/// Share subcommands
#[derive(Subcommand, Debug)]
pub enum ShareCommands {
    /// Print a share link for a plan file
    Encode {
        /// Plan file (JSON or YAML)
        file: PathBuf,
        /// Origin to build the link under (defaults to the configured one)
        #[arg(short, long)]
        base: Option<String>,
        /// Print only the encoded payload, not a full link
        #[arg(long)]
        raw: bool,
    },

    /// Decode a share link (or bare payload) and print the plan as JSON
    Decode {
        /// Share link or payload
        link: String,
    },
}

/// Handle a share command
pub fn handle_share_command(settings: &Settings, cmd: ShareCommands) -> BudgetSplitResult<()> {
    match cmd {
        ShareCommands::Encode { file, base, raw } => {
            let plan = read_plan_file(&file)?;
            if raw {
                println!("{}", encode_plan(&plan)?);
            } else {
                let base = base.unwrap_or_else(|| settings.share_base_url.clone());
                println!("{}", share_url(&base, &plan)?);
            }
        }
        ShareCommands::Decode { link } => {
            let plan = plan_from_share(&link)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}
