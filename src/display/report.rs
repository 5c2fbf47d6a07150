//! Report formatting for terminal output

use rust_decimal::Decimal;

use crate::models::Currency;
use crate::services::BankSummary;

/// Format the bank-wide summary
pub fn format_summary(summary: &BankSummary) -> String {
    let mut output = String::new();

    output.push_str("Bank Summary\n");
    output.push_str(&"=".repeat(30));
    output.push('\n');
    output.push_str(&format!("Clients:          {:>8}\n", summary.clients));
    output.push_str(&format!("Accounts:         {:>8}\n", summary.accounts));
    output.push_str(&format!(
        "Blocked accounts: {:>8}\n",
        summary.blocked_accounts
    ));
    output.push_str(&format!("Transactions:     {:>8}\n", summary.transactions));

    if !summary.accounts_by_type.is_empty() {
        output.push_str("\nAccounts by type\n");
        for (account_type, count) in &summary.accounts_by_type {
            output.push_str(&format!("  {:<10} {:>6}\n", account_type, count));
        }
    }

    if !summary.accounts_by_currency.is_empty() {
        output.push_str("\nHoldings by currency\n");
        for (currency, count) in &summary.accounts_by_currency {
            let total = summary
                .balance_by_currency
                .get(currency)
                .copied()
                .unwrap_or_default();
            output.push_str(&format!(
                "  {:<4} {:>4} accounts {:>16}\n",
                currency,
                count,
                total.to_string()
            ));
        }
    }

    output
}

/// Format the exchange-rate table
pub fn format_rates(pairs: &[(Currency, Currency, Decimal)]) -> String {
    if pairs.is_empty() {
        return "No exchange rates loaded.\n".to_string();
    }

    let mut output = String::new();
    for (from, to, rate) in pairs {
        output.push_str(&format!("{} -> {}  {}\n", from, to, rate));
    }
    output
}
