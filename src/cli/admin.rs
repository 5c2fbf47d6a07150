//! Administrator CLI commands
//!
//! Every admin command checks the configured administrator password first.

use clap::{Args, Subcommand};

use crate::bank::Bank;
use crate::display::{
    format_account_list, format_client_details, format_client_list, format_summary, ClientRow,
};
use crate::error::{BankError, BankResult};
use crate::models::Client;

use super::prompt_password;

/// Administrator arguments
#[derive(Args)]
pub struct AdminArgs {
    /// Administrator password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: AdminCommands,
}

/// Administrator subcommands
#[derive(Subcommand)]
pub enum AdminCommands {
    /// List all clients
    List,
    /// Show one client with their accounts
    Show {
        /// Client CNP
        cnp: String,
    },
    /// Delete a client and all of their accounts
    Delete {
        /// Client CNP
        cnp: String,
    },
    /// Block an account (withdrawals are refused)
    Block {
        /// Account IBAN
        iban: String,
    },
    /// Unblock an account
    Unblock {
        /// Account IBAN
        iban: String,
    },
    /// Close an account with a zero balance
    Close {
        /// Account IBAN
        iban: String,
    },
    /// Show bank-wide statistics
    Report,
}

/// Handle an admin command
pub fn handle_admin_command(bank: &Bank, args: AdminArgs) -> BankResult<()> {
    let password = match args.password {
        Some(password) => zeroize::Zeroizing::new(password),
        None => prompt_password("Admin password: ")?,
    };
    if !bank.settings().verify_admin_password(&password) {
        tracing::warn!("admin login failed");
        return Err(BankError::Validation("Invalid administrator password".into()));
    }

    let clients = bank.clients();
    let accounts = bank.accounts();

    match args.command {
        AdminCommands::List => {
            let rows = clients
                .list()?
                .iter()
                .map(|client| {
                    let masked = clients.display_personal_id(client)?;
                    Ok(ClientRow::new(client, masked))
                })
                .collect::<BankResult<Vec<_>>>()?;
            print!("{}", format_client_list(&rows));
        }

        AdminCommands::Show { cnp } => {
            let client = find_client(bank, &cnp)?;
            let masked = clients.display_personal_id(&client)?;
            print!("{}", format_client_details(&client, &masked));
            println!();
            print!("{}", format_account_list(&client.accounts));
        }

        AdminCommands::Delete { cnp } => {
            let client = find_client(bank, &cnp)?;
            clients.delete(&client)?;
            println!(
                "Deleted client {} and {} account(s)",
                client.full_name(),
                client.accounts.len()
            );
        }

        AdminCommands::Block { iban } => {
            accounts.set_blocked(&iban, true)?;
            println!("Account {} is now BLOCKED", iban);
        }

        AdminCommands::Unblock { iban } => {
            accounts.set_blocked(&iban, false)?;
            println!("Account {} is now ACTIVE", iban);
        }

        AdminCommands::Close { iban } => {
            let account = accounts.close_account(&iban)?;
            println!("Closed account {}", account);
        }

        AdminCommands::Report => {
            let summary = bank.reports().summary()?;
            print!("{}", format_summary(&summary));
        }
    }

    Ok(())
}

fn find_client(bank: &Bank, cnp: &str) -> BankResult<Client> {
    bank.clients()
        .find_by_cnp(cnp)?
        .ok_or_else(|| BankError::client_not_found(cnp))
}
