//! Client display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Client;

/// One row of the administrator's client table
#[derive(Debug, Clone, Tabled)]
pub struct ClientRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "CNP")]
    pub cnp: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Phone")]
    pub phone: String,
    #[tabled(rename = "Accounts")]
    pub accounts: usize,
}

impl ClientRow {
    /// Build a row; `masked_cnp` is shown in place of the stored ciphertext
    pub fn new(client: &Client, masked_cnp: String) -> Self {
        Self {
            name: client.full_name(),
            cnp: masked_cnp,
            email: client.email.clone(),
            phone: client.phone.clone(),
            accounts: client.accounts.len(),
        }
    }
}

/// Format the client table
pub fn format_client_list(rows: &[ClientRow]) -> String {
    if rows.is_empty() {
        return "No clients registered.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format a client's profile
pub fn format_client_details(client: &Client, masked_cnp: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Client: {}\n", client.full_name()));
    output.push_str(&format!("  CNP:      {}\n", masked_cnp));
    output.push_str(&format!("  Email:    {}\n", client.email));
    output.push_str(&format!("  Phone:    {}\n", client.phone));
    output.push_str(&format!("  Accounts: {}\n", client.accounts.len()));

    output
}
