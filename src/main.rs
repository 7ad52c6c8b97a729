use anyhow::Result;
use clap::{Parser, Subcommand};

use spend_cli::cli::{
    handle_add, handle_delete, handle_edit, handle_list, handle_summary, run_interactive,
};
use spend_cli::config::{Settings, SpendPaths};
use spend_cli::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "spend",
    author = "Kaylee Beyene",
    version,
    about = "Command-line personal expense tracker",
    long_about = "spend-cli records dated expenses in a plain text ledger and \
                  reports category totals against a monthly budget, including \
                  the daily allowance for the rest of the calendar month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount, e.g. "12.50"
        amount: String,
        /// Category label
        #[arg(short, long, default_value = "Food")]
        category: String,
        /// Timestamp (YYYY-MM-DD HH:MM:SS); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all expenses with their positions
    #[command(alias = "ls")]
    List,

    /// Replace the expense at a position
    Edit {
        /// 1-based position as shown by 'spend list'
        position: usize,
        /// New name
        name: String,
        /// New amount
        amount: String,
        /// New category; previous one kept if omitted
        #[arg(short, long)]
        category: Option<String>,
        /// New timestamp (YYYY-MM-DD HH:MM:SS); previous one kept if omitted
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete the expense at a position
    #[command(alias = "rm")]
    Delete {
        /// 1-based position as shown by 'spend list'
        position: usize,
    },

    /// Summarize spending against the monthly budget
    Summary {
        /// Monthly budget; overrides the stored default
        #[arg(short, long)]
        budget: Option<String>,
        /// Report date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Run the interactive menu loop
    #[command(alias = "menu")]
    Interactive,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let store = LedgerStore::new(paths.ledger_file());

    // Single-slot backup, taken once per session before any mutation
    store.snapshot()?;

    match cli.command {
        Some(Commands::Add {
            name,
            amount,
            category,
            date,
        }) => {
            handle_add(&store, &name, &amount, &category, date.as_deref())?;
        }
        Some(Commands::List) => {
            handle_list(&store)?;
        }
        Some(Commands::Edit {
            position,
            name,
            amount,
            category,
            date,
        }) => {
            handle_edit(
                &store,
                position,
                &name,
                &amount,
                category.as_deref(),
                date.as_deref(),
            )?;
        }
        Some(Commands::Delete { position }) => {
            handle_delete(&store, position)?;
        }
        Some(Commands::Summary { budget, as_of }) => {
            handle_summary(&store, &settings, budget.as_deref(), as_of.as_deref())?;
        }
        Some(Commands::Interactive) => {
            run_interactive(&store, &mut settings, &paths)?;
        }
        Some(Commands::Config) => {
            println!("spend-cli Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", store.path().display());
            println!("Backup file:    {}", store.backup_path().display());
            println!();
            println!("Settings:");
            match settings.monthly_budget {
                Some(budget) => println!("  Monthly budget: {}", budget.display_rm()),
                None => println!("  Monthly budget: (not set)"),
            }
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("spend-cli - Command-line personal expense tracker");
            println!();
            println!("Run 'spend --help' for usage information.");
            println!("Run 'spend interactive' for the menu-driven interface.");
        }
    }

    Ok(())
}
