//! # FX Module
//!
//! Cross rates and minor-unit conversion over a rate table somebody else
//! fetched. Keeping the fetch outside preserves the crate's no-I/O rule;
//! callers hand in whatever rates their provider published (typically
//! EUR-based) and this module does the arithmetic.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyTable;
use crate::error::FxError;

/// A published set of exchange rates against one base currency.
///
/// Rates are units of each currency per one unit of `base`. The table is
/// normalized on construction so `rates[base] == 1.0` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, f64>,
    /// When the provider published these rates.
    as_of: DateTime<Utc>,
}

impl RateTable {
    /// Builds a table from provider data.
    ///
    /// The base code is trimmed and uppercased; an empty base defaults to
    /// "EUR", the convention of the public rate feeds.
    pub fn new(base: &str, rates: HashMap<String, f64>, as_of: DateTime<Utc>) -> Self {
        let base = {
            let b = base.trim().to_uppercase();
            if b.is_empty() {
                "EUR".to_string()
            } else {
                b
            }
        };
        let mut rates: HashMap<String, f64> = rates
            .into_iter()
            .map(|(code, rate)| (code.trim().to_uppercase(), rate))
            .collect();
        rates.insert(base.clone(), 1.0);
        RateTable { base, rates, as_of }
    }

    /// The currency every published rate is quoted against.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// When the provider published these rates.
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    /// Rate from `base` to `target` through the table's common base.
    ///
    /// Identical codes convert at exactly 1.0 without touching the table.
    /// Missing or zero entries are errors: pricing a bill on a made-up
    /// rate is worse than refusing.
    ///
    /// ## Example
    /// ```rust
    /// use std::collections::HashMap;
    /// use chrono::Utc;
    /// use split_core::fx::RateTable;
    ///
    /// let rates = HashMap::from([
    ///     ("USD".to_string(), 1.10),
    ///     ("GBP".to_string(), 0.88),
    /// ]);
    /// let table = RateTable::new("EUR", rates, Utc::now());
    ///
    /// assert_eq!(table.cross_rate("USD", "USD").unwrap(), 1.0);
    /// let usd_to_gbp = table.cross_rate("USD", "GBP").unwrap();
    /// assert!((usd_to_gbp - 0.8).abs() < 1e-9);
    /// ```
    pub fn cross_rate(&self, base: &str, target: &str) -> Result<f64, FxError> {
        let base_code = base.trim().to_uppercase();
        let target_code = target.trim().to_uppercase();
        if base_code == target_code {
            return Ok(1.0);
        }

        let base_rate = self
            .usable_rate(&base_code)
            .ok_or(FxError::UnsupportedBase { code: base_code })?;
        let target_rate = self
            .usable_rate(&target_code)
            .ok_or(FxError::UnsupportedTarget { code: target_code })?;

        Ok(target_rate / base_rate)
    }

    /// Converts a minor-unit amount between currencies, exponent-aware.
    ///
    /// The amount is scaled out of the source exponent, converted at the
    /// cross rate, and re-scaled into the target exponent with
    /// round-half-away-from-zero, floored at zero. Converting 1000 USD
    /// cents to JPY does not yield "1000-ish yen cents"; it yields whole
    /// yen.
    pub fn convert_minor_units(
        &self,
        amount: i64,
        from: &str,
        to: &str,
        currencies: &CurrencyTable,
    ) -> Result<i64, FxError> {
        let rate = self.cross_rate(from, to)?;
        let from_factor = 10f64.powi(currencies.exponent_for(from) as i32);
        let to_factor = 10f64.powi(currencies.exponent_for(to) as i32);
        let major = amount as f64 / from_factor;
        Ok(((major * rate * to_factor).round() as i64).max(0))
    }

    fn usable_rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied().filter(|r| *r != 0.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RateTable {
        // EUR-based, the shape public feeds publish
        let rates = HashMap::from([
            ("USD".to_string(), 1.10),
            ("GBP".to_string(), 0.88),
            ("JPY".to_string(), 165.0),
            ("BAD".to_string(), 0.0),
        ]);
        RateTable::new("EUR", rates, Utc::now())
    }

    #[test]
    fn test_base_rate_pinned_to_one() {
        let t = table();
        assert_eq!(t.base(), "EUR");
        assert_eq!(t.cross_rate("EUR", "EUR").unwrap(), 1.0);
        assert!((t.cross_rate("EUR", "USD").unwrap() - 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_same_currency_is_identity_even_if_unknown() {
        let t = table();
        assert_eq!(t.cross_rate("ZZZ", "zzz").unwrap(), 1.0);
    }

    #[test]
    fn test_cross_rate_through_base() {
        let t = table();
        let usd_to_gbp = t.cross_rate("USD", "GBP").unwrap();
        assert!((usd_to_gbp - 0.88 / 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_and_zero_rates_are_errors() {
        let t = table();
        assert_eq!(
            t.cross_rate("ZZZ", "USD"),
            Err(FxError::UnsupportedBase {
                code: "ZZZ".to_string()
            })
        );
        assert_eq!(
            t.cross_rate("USD", "ZZZ"),
            Err(FxError::UnsupportedTarget {
                code: "ZZZ".to_string()
            })
        );
        assert_eq!(
            t.cross_rate("BAD", "USD"),
            Err(FxError::UnsupportedBase {
                code: "BAD".to_string()
            })
        );
    }

    #[test]
    fn test_convert_minor_units_respects_exponents() {
        let t = table();
        let currencies = CurrencyTable::common();

        // $10.00 at 150 JPY per USD: 10 × 165/1.10 = 1500 whole yen
        let yen = t
            .convert_minor_units(1000, "USD", "JPY", &currencies)
            .unwrap();
        assert_eq!(yen, 1500);

        // and back: 1500 yen => 1000 cents
        let cents = t
            .convert_minor_units(1500, "JPY", "USD", &currencies)
            .unwrap();
        assert_eq!(cents, 1000);
    }

    #[test]
    fn test_convert_same_currency_is_exact() {
        let t = table();
        let currencies = CurrencyTable::common();
        assert_eq!(
            t.convert_minor_units(1315, "USD", "USD", &currencies).unwrap(),
            1315
        );
    }
}
