//! Exchange-rate CLI commands

use clap::Subcommand;

use crate::display::format_rates;
use crate::error::BankResult;
use crate::services::CurrencyService;

use super::{parse_amount, parse_currency};

/// Exchange-rate subcommands
#[derive(Subcommand)]
pub enum RatesCommands {
    /// List the loaded exchange rates
    List,
    /// Convert an amount between currencies
    Convert {
        /// Amount (e.g., "100.50")
        amount: String,
        /// Source currency
        from: String,
        /// Target currency
        to: String,
    },
}

/// Handle a rates command
pub fn handle_rates_command(currency: &CurrencyService, cmd: RatesCommands) -> BankResult<()> {
    match cmd {
        RatesCommands::List => {
            print!("{}", format_rates(&currency.pairs()));
        }

        RatesCommands::Convert { amount, from, to } => {
            let amount = parse_amount(&amount)?;
            let from = parse_currency(&from)?;
            let to = parse_currency(&to)?;

            let converted = currency.convert(amount, from, to)?;
            let rate = currency.get_rate(from, to)?;
            println!(
                "{} = {}",
                amount.format_with_currency(from),
                converted.format_with_currency(to)
            );
            println!("  Rate: {}", rate.round_dp(6).normalize());
        }
    }

    Ok(())
}
