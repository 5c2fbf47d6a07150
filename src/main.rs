use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use ppoo_bank::bank::Bank;
use ppoo_bank::cli::{
    handle_account_command, handle_admin_command, handle_client_command, handle_rates_command,
    AccountCommands, AdminArgs, ClientCommands, RatesCommands,
};
use ppoo_bank::config::{load_dotenv, BankPaths, Settings};
use ppoo_bank::logging::{init_logging, LoggingConfig};
use ppoo_bank::services::CurrencyService;
use ppoo_bank::storage::initialize_storage;

#[derive(Parser)]
#[command(
    name = "bank",
    version,
    about = "Retail bank: clients, accounts and cross-currency transfers",
    long_about = "A small retail bank run from the command line. Clients register, \
                  open accounts in several currencies, deposit, withdraw and transfer \
                  money. Personal identifiers and passwords are stored encrypted."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Client registration and profile commands
    #[command(subcommand)]
    Client(ClientCommands),

    /// Account and money movement commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Administrator commands
    Admin(AdminArgs),

    /// Exchange-rate commands
    #[command(subcommand)]
    Rates(RatesCommands),

    /// Create the data directory and a default exchange-rate table
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dotenv = load_dotenv();

    init_logging(LoggingConfig::from_env().verbose(cli.verbose))
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }

    let paths = BankPaths::new()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing bank at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Exchange rates: {}",
                paths.exchange_rates_file().display()
            );
            println!("Run 'bank client register --help' to register a first client.");
        }
        Some(Commands::Config) => {
            println!("Bank Configuration");
            println!("==================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Clients file:    {}", paths.clients_file().display());
            println!("Exchange rates:  {}", paths.exchange_rates_file().display());
            println!("Initialized:     {}", yes_no(paths.is_initialized()));
            println!();
            match Settings::from_env() {
                Ok(_) => println!("Secrets:         configured"),
                Err(e) => println!("Secrets:         {}", e),
            }
        }
        Some(Commands::Rates(cmd)) => {
            let currency = CurrencyService::load(&paths.exchange_rates_file())?;
            handle_rates_command(&currency, cmd)?;
        }
        Some(command) => {
            let settings = Settings::from_env()?;
            let bank = Bank::open(paths, settings)?;

            let result = match command {
                Commands::Client(cmd) => handle_client_command(&bank, cmd),
                Commands::Account(cmd) => handle_account_command(&bank, cmd),
                Commands::Admin(args) => handle_admin_command(&bank, args),
                Commands::Rates(_) | Commands::Init | Commands::Config => Ok(()),
            };

            bank.shutdown()?;
            result?;
        }
        None => {
            println!("bank - retail banking from the command line");
            println!();
            println!("Run 'bank --help' for usage information.");
            println!("Run 'bank init' to set up the data directory.");
        }
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
