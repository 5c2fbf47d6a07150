//! Supported currencies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO 4217 currencies the bank can open accounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ron,
    Eur,
    Usd,
    Gbp,
    Chf,
}

impl Currency {
    /// Every supported currency, in display order
    pub const ALL: [Currency; 5] = [
        Currency::Ron,
        Currency::Eur,
        Currency::Usd,
        Currency::Gbp,
        Currency::Chf,
    ];

    /// Three-letter ISO code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ron => "RON",
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
        }
    }

    /// Parse a currency from its ISO code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Ron
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid currency: '{}'. Valid currencies: RON, EUR, USD, GBP, CHF",
                s
            )
        })
    }
}
