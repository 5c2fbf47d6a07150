//! Client CLI commands
//!
//! Registration and self-service profile management.

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::bank::Bank;
use crate::display::{format_account_list, format_client_details};
use crate::error::{BankError, BankResult};
use crate::models::ClientRegistration;

use super::{prompt_new_password, Credentials};

/// Client subcommands
#[derive(Subcommand)]
pub enum ClientCommands {
    /// Register a new client
    Register {
        /// First name
        #[arg(long)]
        first: String,
        /// Last name
        #[arg(long)]
        last: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Phone number (10 digits)
        #[arg(long)]
        phone: String,
        /// Personal identifier (13-digit CNP)
        #[arg(long)]
        cnp: String,
        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Accept the GDPR data processing terms
        #[arg(long)]
        accept_gdpr: bool,
    },
    /// Log in and show the client's profile and accounts
    Login {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Edit profile fields
    Update {
        #[command(flatten)]
        credentials: Credentials,
        /// New first name
        #[arg(long)]
        first: Option<String>,
        /// New last name
        #[arg(long)]
        last: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Change the password
    ResetPassword {
        #[command(flatten)]
        credentials: Credentials,
        /// New password (prompted for when omitted)
        #[arg(long)]
        new_password: Option<String>,
    },
}

/// Handle a client command
pub fn handle_client_command(bank: &Bank, cmd: ClientCommands) -> BankResult<()> {
    let service = bank.clients();

    match cmd {
        ClientCommands::Register {
            first,
            last,
            email,
            phone,
            cnp,
            password,
            accept_gdpr,
        } => {
            let password = match password {
                Some(password) => Zeroizing::new(password),
                None => prompt_new_password()?,
            };

            let registration = ClientRegistration {
                firstname: first,
                lastname: last,
                email,
                phone,
                cnp,
                password: password.as_str().to_owned(),
                gdpr_accepted: accept_gdpr,
            };

            let client = service.register(&registration)?;
            println!("Registered client: {}", client.full_name());
            println!("  Email: {}", client.email);
            println!("Run 'bank account open' to open a first account.");
        }

        ClientCommands::Login { credentials } => {
            let client = credentials.authenticate(bank)?;
            let masked = service.display_personal_id(&client)?;

            print!("{}", format_client_details(&client, &masked));
            println!();
            print!("{}", format_account_list(&client.accounts));
        }

        ClientCommands::Update {
            credentials,
            first,
            last,
            email,
            phone,
        } => {
            let mut client = credentials.authenticate(bank)?;

            if first.is_none() && last.is_none() && email.is_none() && phone.is_none() {
                println!("No changes specified. Use --first, --last, --email or --phone.");
                return Ok(());
            }

            if let Some(first) = first {
                client.firstname = first;
            }
            if let Some(last) = last {
                client.lastname = last;
            }
            if let Some(email) = email {
                client.email = email;
            }
            if let Some(phone) = phone {
                client.phone = phone;
            }

            if !service.update(&client)? {
                return Err(BankError::client_not_found(client.full_name()));
            }
            println!("Updated client: {}", client.full_name());
        }

        ClientCommands::ResetPassword {
            credentials,
            new_password,
        } => {
            let client = credentials.authenticate(bank)?;
            let new_password = match new_password {
                Some(password) => Zeroizing::new(password),
                None => prompt_new_password()?,
            };

            service.reset_password(&client, &new_password)?;
            println!("Password changed.");
        }
    }

    Ok(())
}
