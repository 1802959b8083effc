use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_split::cli::{
    handle_calc_command, handle_item_command, handle_plan_command, handle_set_command,
    handle_share_command, handle_template_command, CalcArgs, ItemCommands, ItemKind,
    PlanCommands, SetArgs, ShareCommands, TemplateArgs,
};
use budget_split::config::{paths::BudgetSplitPaths, settings::Settings};
use budget_split::share::MISSING_SHARE_DATA;
use budget_split::storage::Storage;
use budget_split::BudgetError;

#[derive(Parser)]
#[command(
    name = "budget-split",
    version,
    about = "Household budget breakdown with fair bill splitting",
    long_about = "budget-split turns a monthly plan (incomes, bills, savings and \
                  spending categories) into a breakdown with a weekly safe-to-spend \
                  figure, splits shared bills fairly for couples, and saves or \
                  shares plans as links."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate and show a budget breakdown
    Calc(CalcArgs),

    /// Print a starter plan
    Template(TemplateArgs),

    /// Encode and decode share links
    #[command(subcommand)]
    Share(ShareCommands),

    /// Manage saved plans
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Edit bills in a plan file
    #[command(subcommand)]
    Bill(ItemCommands),

    /// Edit categories in a plan file
    #[command(subcommand, alias = "cat")]
    Category(ItemCommands),

    /// Change household, incomes or savings in a plan file
    Set(SetArgs),

    /// Create the data directory and write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<BudgetError>() {
                Some(BudgetError::InvalidShareData(detail)) if detail == MISSING_SHARE_DATA => {
                    eprintln!(
                        "This link is missing data. Ask the sender to copy the share link again."
                    );
                }
                Some(BudgetError::InvalidShareData(_)) => {
                    eprintln!(
                        "This share link looks invalid or corrupted. Ask the sender to generate a new link."
                    );
                }
                _ => eprintln!("Error: {}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetSplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    log::debug!("Using data directory {}", paths.base_dir().display());

    match cli.command {
        Some(Commands::Calc(args)) => {
            let storage = Storage::new(paths)?;
            handle_calc_command(&storage, &settings, args)?;
        }
        Some(Commands::Template(args)) => handle_template_command(&settings, args)?,
        Some(Commands::Share(cmd)) => handle_share_command(&settings, cmd)?,
        Some(Commands::Plan(cmd)) => {
            let storage = Storage::new(paths)?;
            handle_plan_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Bill(cmd)) => handle_item_command(ItemKind::Bill, cmd)?,
        Some(Commands::Category(cmd)) => handle_item_command(ItemKind::Category, cmd)?,
        Some(Commands::Set(args)) => handle_set_command(args)?,
        Some(Commands::Init) => {
            println!("Initializing budget-split at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'budget-split template --list' to see starter plans.");
        }
        Some(Commands::Config) => {
            println!("budget-split Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Share base URL:   {}", settings.share_base_url);
            println!("  Default template: {}", settings.default_template);
        }
        None => {
            println!("budget-split - household budget breakdowns");
            println!();
            println!("Run 'budget-split --help' for usage information.");
            println!("Run 'budget-split calc --template couple' to try it out.");
        }
    }

    Ok(())
}
