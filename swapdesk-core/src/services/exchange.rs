//! Exchange service - fixed-rate quotes with a validity countdown
//!
//! Rates are a hardcoded demo matrix, not a market feed. Amounts are
//! `rust_decimal::Decimal` end to end; receive amounts round to six
//! decimal places.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::result::{Error, Result};

/// Currencies offered in the exchange form, in display order.
pub const CURRENCIES: [&str; 4] = ["BTC", "ETH", "USD", "EUR"];

/// Demo rate matrix, (from, to, rate).
fn rate_table() -> Vec<(&'static str, &'static str, Decimal)> {
    vec![
        ("BTC", "ETH", Decimal::new(152, 1)),    // 15.2
        ("BTC", "USD", Decimal::new(45_000, 0)),
        ("BTC", "EUR", Decimal::new(41_000, 0)),
        ("ETH", "BTC", Decimal::new(65, 3)),     // 0.065
        ("ETH", "USD", Decimal::new(3_000, 0)),
        ("ETH", "EUR", Decimal::new(2_700, 0)),
        ("USD", "BTC", Decimal::new(22, 6)),     // 0.000022
        ("USD", "ETH", Decimal::new(33, 5)),     // 0.00033
        ("USD", "EUR", Decimal::new(85, 2)),     // 0.85
        ("EUR", "BTC", Decimal::new(24, 6)),
        ("EUR", "ETH", Decimal::new(37, 5)),
        ("EUR", "USD", Decimal::new(118, 2)),    // 1.18
    ]
}

/// A priced exchange offer, valid until the countdown runs out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub from: String,
    pub to: String,
    pub send_amount: Decimal,
    pub rate: Decimal,
    pub receive_amount: Decimal,
    pub countdown_secs: u64,
}

pub struct ExchangeService {
    countdown_secs: u64,
}

impl ExchangeService {
    pub fn new(countdown_secs: u64) -> Self {
        Self { countdown_secs }
    }

    /// Look up the demo rate for a pair. Case-insensitive on both sides.
    pub fn rate(&self, from: &str, to: &str) -> Option<Decimal> {
        let from = from.to_ascii_uppercase();
        let to = to.to_ascii_uppercase();
        rate_table()
            .into_iter()
            .find(|(f, t, _)| *f == from && *t == to)
            .map(|(_, _, rate)| rate)
    }

    /// Price an exchange of `amount` from one currency into another.
    pub fn quote(&self, from: &str, to: &str, amount: Decimal) -> Result<Quote> {
        if amount <= Decimal::ZERO {
            return Err(Error::validation("Amount must be greater than zero"));
        }
        let from = from.to_ascii_uppercase();
        let to = to.to_ascii_uppercase();
        let rate = self
            .rate(&from, &to)
            .ok_or_else(|| Error::validation(format!("No rate available for {from} to {to}")))?;

        Ok(Quote {
            receive_amount: (amount * rate).round_dp(6),
            send_amount: amount,
            rate,
            from,
            to,
            countdown_secs: self.countdown_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ExchangeService {
        ExchangeService::new(300)
    }

    #[test]
    fn test_quote_applies_rate() {
        let quote = service().quote("BTC", "USD", Decimal::new(2, 0)).unwrap();
        assert_eq!(quote.receive_amount, Decimal::new(90_000, 0));
        assert_eq!(quote.rate, Decimal::new(45_000, 0));
        assert_eq!(quote.countdown_secs, 300);
    }

    #[test]
    fn test_quote_rounds_to_six_places() {
        // 0.1234567 USD at 0.000022 is 0.0000027160474 BTC
        let quote = service()
            .quote("USD", "BTC", Decimal::new(1_234_567, 7))
            .unwrap();
        assert_eq!(quote.receive_amount, Decimal::new(3, 6));
    }

    #[test]
    fn test_pair_lookup_is_case_insensitive() {
        let quote = service().quote("btc", "eth", Decimal::new(1, 0)).unwrap();
        assert_eq!(quote.receive_amount, Decimal::new(152, 1));
        assert_eq!(quote.from, "BTC");
    }

    #[test]
    fn test_unknown_pair_rejected() {
        assert!(service().quote("BTC", "BTC", Decimal::new(1, 0)).is_err());
        assert!(service().quote("DOGE", "USD", Decimal::new(1, 0)).is_err());
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        assert!(service().quote("BTC", "USD", Decimal::ZERO).is_err());
        assert!(service().quote("BTC", "USD", Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn test_every_listed_pair_has_a_rate() {
        let svc = service();
        for from in CURRENCIES {
            for to in CURRENCIES {
                if from != to {
                    assert!(svc.rate(from, to).is_some(), "{from} -> {to}");
                }
            }
        }
    }
}
