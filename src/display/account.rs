//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{BankAccount, Client};

/// Format a client's accounts as a table
pub fn format_account_list(accounts: &[BankAccount]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let iban_width = accounts
        .iter()
        .map(|a| a.iban.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<iban_width$}  {:<8}  {:>14}  {:<3}  {}\n",
        "IBAN",
        "Type",
        "Balance",
        "Cur",
        "Status",
        iban_width = iban_width,
    ));

    output.push_str(&format!(
        "{:-<iban_width$}  {:-<8}  {:->14}  {:-<3}  {:-<7}\n",
        "",
        "",
        "",
        "",
        "",
        iban_width = iban_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<iban_width$}  {:<8}  {:>14}  {:<3}  {}\n",
            account.iban,
            account.account_type,
            account.balance.to_string(),
            account.currency,
            account_status(account),
            iban_width = iban_width,
        ));
    }

    output
}

/// Format a single account with its holder
pub fn format_account_details(holder: &Client, account: &BankAccount) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.iban));
    output.push_str(&format!("  Holder:       {}\n", holder.full_name()));
    output.push_str(&format!("  Type:         {}\n", account.account_type));
    output.push_str(&format!(
        "  Balance:      {}\n",
        account.balance.format_with_currency(account.currency)
    ));
    output.push_str(&format!("  Status:       {}\n", account_status(account)));
    output.push_str(&format!(
        "  Opened:       {}\n",
        account.created_at.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!(
        "  Transactions: {}\n",
        account.transactions.len()
    ));

    output
}

fn account_status(account: &BankAccount) -> &'static str {
    if account.blocked {
        "BLOCKED"
    } else {
        "Active"
    }
}
