//! Account CLI commands
//!
//! Implements CLI commands for a logged-in client's accounts.

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::bank::Bank;
use crate::display::{format_account_details, format_account_list, format_history};
use crate::error::{BankError, BankResult};
use crate::export::export_history_csv;
use crate::models::Money;

use super::{ensure_owner, parse_account_type, parse_amount, parse_currency, Credentials};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open a new account
    Open {
        #[command(flatten)]
        credentials: Credentials,
        /// Currency (RON, EUR, USD, GBP, CHF)
        #[arg(short, long, default_value = "RON")]
        currency: String,
        /// Account type (current, savings, deposit, business)
        #[arg(short = 't', long, default_value = "current")]
        account_type: String,
    },
    /// List the client's accounts
    List {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Show account details
    Show {
        /// Account IBAN
        iban: String,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Deposit cash
    Deposit {
        /// Account IBAN
        iban: String,
        /// Amount (e.g., "100.50")
        amount: String,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Withdraw cash
    Withdraw {
        /// Account IBAN
        iban: String,
        /// Amount (e.g., "100.50")
        amount: String,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Transfer money to any account
    Transfer {
        /// Source IBAN (must be the client's)
        from: String,
        /// Destination IBAN
        to: String,
        /// Amount in the source currency
        amount: String,
        /// Description shown on both legs
        #[arg(short, long, default_value = "")]
        details: String,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Show an account's transactions, newest first
    History {
        /// Account IBAN
        iban: String,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Also write the full history to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        #[command(flatten)]
        credentials: Credentials,
    },
}

/// Handle an account command
pub fn handle_account_command(bank: &Bank, cmd: AccountCommands) -> BankResult<()> {
    let service = bank.accounts();

    match cmd {
        AccountCommands::Open {
            credentials,
            currency,
            account_type,
        } => {
            let client = credentials.authenticate(bank)?;
            let currency = parse_currency(&currency)?;
            let account_type = parse_account_type(&account_type)?;

            let account = service.create_account(&client, currency, account_type)?;
            println!("Opened account: {}", account.iban);
            println!("  Type:     {}", account.account_type);
            println!("  Currency: {}", account.currency);
        }

        AccountCommands::List { credentials } => {
            let client = credentials.authenticate(bank)?;
            print!("{}", format_account_list(&client.accounts));
        }

        AccountCommands::Show { iban, credentials } => {
            let client = credentials.authenticate(bank)?;
            ensure_owner(&client, &iban)?;

            let (holder, account) = service
                .find_account(&iban)?
                .ok_or_else(|| BankError::account_not_found(&iban))?;
            print!("{}", format_account_details(&holder, &account));
        }

        AccountCommands::Deposit {
            iban,
            amount,
            credentials,
        } => {
            let client = credentials.authenticate(bank)?;
            ensure_owner(&client, &iban)?;
            let amount = parse_amount(&amount)?;

            let transaction = service.deposit(&iban, amount)?;
            print_balance(bank, "Deposited", &iban, transaction.amount)?;
        }

        AccountCommands::Withdraw {
            iban,
            amount,
            credentials,
        } => {
            let client = credentials.authenticate(bank)?;
            ensure_owner(&client, &iban)?;
            let amount = parse_amount(&amount)?;

            let transaction = service.withdraw(&iban, amount)?;
            print_balance(bank, "Withdrew", &iban, transaction.amount)?;
        }

        AccountCommands::Transfer {
            from,
            to,
            amount,
            details,
            credentials,
        } => {
            let client = credentials.authenticate(bank)?;
            ensure_owner(&client, &from)?;
            let amount = parse_amount(&amount)?;

            let result = service.transfer(&from, &to, amount, &details)?;
            println!("Transferred {} from {} to {}", result.sent.amount, from, to);
            if result.is_cross_currency() {
                println!("  Credited: {}", result.received.amount);
            }
            println!("  Receiver: {}", result.received.receiver_name);
        }

        AccountCommands::History {
            iban,
            limit,
            csv,
            credentials,
        } => {
            let client = credentials.authenticate(bank)?;
            ensure_owner(&client, &iban)?;

            let (_, account) = service
                .find_account(&iban)?
                .ok_or_else(|| BankError::account_not_found(&iban))?;
            let mut history = service.history(&iban)?;

            if let Some(path) = csv {
                let file = File::create(&path).map_err(|e| {
                    BankError::Io(format!("Failed to create {}: {}", path.display(), e))
                })?;
                export_history_csv(&account, &account.transactions, file)?;
                println!(
                    "Exported {} transactions to {}",
                    account.transactions.len(),
                    path.display()
                );
            }

            if let Some(limit) = limit {
                history.truncate(limit);
            }
            print!("{}", format_history(&account, &history));
        }
    }

    Ok(())
}

fn print_balance(bank: &Bank, action: &str, iban: &str, amount: Money) -> BankResult<()> {
    let (_, account) = bank
        .accounts()
        .find_account(iban)?
        .ok_or_else(|| BankError::account_not_found(iban))?;

    println!(
        "{} {} ({})",
        action,
        amount.format_with_currency(account.currency),
        account.iban
    );
    println!(
        "  Balance: {}",
        account.balance.format_with_currency(account.currency)
    );
    Ok(())
}
