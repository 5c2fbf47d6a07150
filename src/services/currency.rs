//! Currency conversion service
//!
//! Loads a table of pairwise exchange rates from a text file with one
//! `FROM:TO:RATE` entry per line. A rate for `A -> B` also answers `B -> A`
//! through its reciprocal.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{BankError, BankResult};
use crate::models::{Currency, Money};

/// Pairwise exchange-rate lookup
#[derive(Debug, Clone, Default)]
pub struct CurrencyService {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl CurrencyService {
    /// Create a service with an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from explicit `(from, to, rate)` entries
    ///
    /// Non-positive rates are ignored; a later entry for the same pair wins.
    pub fn from_rates<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = (Currency, Currency, Decimal)>,
    {
        let rates = rates
            .into_iter()
            .filter(|(_, _, rate)| rate.is_sign_positive() && !rate.is_zero())
            .map(|(from, to, rate)| ((from, to), rate))
            .collect();
        Self { rates }
    }

    /// Load the rate table from a file
    ///
    /// A missing file yields an empty table. Malformed lines are skipped.
    pub fn load(path: &Path) -> BankResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "exchange rate file not found, no rates loaded");
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(BankError::Persistence(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let service = Self::parse(&contents);
        tracing::info!(rates = service.len(), "loaded exchange rates");
        Ok(service)
    }

    /// Parse `FROM:TO:RATE` lines, skipping anything malformed
    pub fn parse(contents: &str) -> Self {
        let entries = contents.lines().enumerate().filter_map(|(index, line)| {
            let entry = parse_line(line);
            if entry.is_none() && !line.trim().is_empty() {
                tracing::debug!(line = index + 1, "skipping malformed exchange rate line");
            }
            entry
        });
        Self::from_rates(entries)
    }

    /// Rate to multiply an amount in `from` by to obtain `to`
    ///
    /// # Errors
    ///
    /// [`BankError::NoExchangeRate`] when neither the pair nor its reverse is known.
    pub fn get_rate(&self, from: Currency, to: Currency) -> BankResult<Decimal> {
        if from == to {
            return Ok(Decimal::ONE);
        }

        if let Some(rate) = self.rates.get(&(from, to)) {
            return Ok(*rate);
        }

        if let Some(reverse) = self.rates.get(&(to, from)) {
            if let Some(rate) = Decimal::ONE.checked_div(*reverse) {
                return Ok(rate);
            }
        }

        Err(BankError::NoExchangeRate { from, to })
    }

    /// Convert an amount between currencies, rounding to the nearest cent
    pub fn convert(&self, amount: Money, from: Currency, to: Currency) -> BankResult<Money> {
        let rate = self.get_rate(from, to)?;
        amount.convert(rate).ok_or_else(|| {
            BankError::BusinessRule(format!(
                "Amount {} is too large to convert from {} to {}",
                amount, from, to
            ))
        })
    }

    /// All known direct pairs, sorted
    pub fn pairs(&self) -> Vec<(Currency, Currency, Decimal)> {
        let mut pairs: Vec<_> = self
            .rates
            .iter()
            .map(|(&(from, to), &rate)| (from, to, rate))
            .collect();
        pairs.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        pairs
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

fn parse_line(line: &str) -> Option<(Currency, Currency, Decimal)> {
    let parts: Vec<&str> = line.split(':').collect();
    if parts.len() != 3 {
        return None;
    }
    let from = Currency::parse(parts[0])?;
    let to = Currency::parse(parts[1])?;
    let rate = Decimal::from_str(parts[2].trim()).ok()?;
    if rate <= Decimal::ZERO {
        return None;
    }
    Some((from, to, rate))
}
