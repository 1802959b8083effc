//! The `template` command

use clap::Args;

use crate::config::settings::Settings;
use crate::error::BudgetSplitResult;
use crate::storage::file_io::{render_document, PlanFileFormat};
use crate::templates::{template, TemplateKey};

use super::source::default_template;

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Template to print (defaults to the configured one)
    #[arg(value_enum)]
    pub key: Option<TemplateKey>,

    /// Print YAML instead of JSON
    #[arg(long)]
    pub yaml: bool,

    /// List available templates
    #[arg(short, long, conflicts_with_all = ["key", "yaml"])]
    pub list: bool,
}

/// Handle the template command
pub fn handle_template_command(settings: &Settings, args: TemplateArgs) -> BudgetSplitResult<()> {
    if args.list {
        for key in TemplateKey::ALL {
            let marker = if key == settings.default_template { " (default)" } else { "" };
            println!("{}{}", key, marker);
        }
        return Ok(());
    }

    let format = if args.yaml {
        PlanFileFormat::Yaml
    } else {
        PlanFileFormat::Json
    };
    let plan = template(default_template(settings, args.key));
    println!("{}", render_document(&plan, format)?.trim_end());
    Ok(())
}
