//! # Currency Module
//!
//! Static currency metadata and currency-aware display formatting.
//!
//! ## Minor Units and Exponents
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every amount in the system is an INTEGER count of minor units.         │
//! │                                                                         │
//! │  The exponent is the number of decimal digits between a currency's     │
//! │  major and minor unit:                                                  │
//! │                                                                         │
//! │    USD  exponent 2   1315 minor units  = $13.15                        │
//! │    JPY  exponent 0   1315 minor units  = ¥1315                         │
//! │                                                                         │
//! │  Unknown codes fall back to exponent 2. That fallback is intentional:  │
//! │  a bill keeps computing while a room's currency is mid-edit.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use split_core::currency::CurrencyTable;
//!
//! let currencies = CurrencyTable::common();
//! assert_eq!(currencies.exponent_for("USD"), 2);
//! assert_eq!(currencies.exponent_for("JPY"), 0);
//! assert_eq!(currencies.format(1315, "USD"), "$13.15");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Currency code assumed when a room has not chosen one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Fractional digits assumed for codes missing from the table.
pub const DEFAULT_EXPONENT: u32 = 2;

/// Display symbol assumed for codes missing from the table.
pub const DEFAULT_SYMBOL: &str = "$";

// =============================================================================
// Currency Info
// =============================================================================

/// Display and arithmetic metadata for one currency.
///
/// Immutable and statically enumerated; rows are rendered verbatim in the
/// front-end's currency picker (flag, code, symbol).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurrencyInfo {
    /// 3-letter ISO-ish code, always uppercase ("USD").
    pub code: String,
    /// Display symbol ("$", "€", "kr").
    pub symbol: String,
    /// Number of fractional digits between major and minor unit.
    pub exponent: u32,
    /// Flag emoji shown next to the code.
    pub flag: String,
}

/// The known currency set: (code, symbol, exponent, flag).
///
/// JPY and KRW have no minor unit; everything else uses two digits.
const COMMON_CURRENCIES: &[(&str, &str, u32, &str)] = &[
    ("USD", "$", 2, "🇺🇸"),
    ("EUR", "€", 2, "🇪🇺"),
    ("GBP", "£", 2, "🇬🇧"),
    ("JPY", "¥", 0, "🇯🇵"),
    ("CAD", "$", 2, "🇨🇦"),
    ("AUD", "$", 2, "🇦🇺"),
    ("CHF", "Fr", 2, "🇨🇭"),
    ("CNY", "¥", 2, "🇨🇳"),
    ("KRW", "₩", 0, "🇰🇷"),
    ("MXN", "$", 2, "🇲🇽"),
    ("SGD", "$", 2, "🇸🇬"),
    ("HKD", "$", 2, "🇭🇰"),
    ("INR", "₹", 2, "🇮🇳"),
    ("SEK", "kr", 2, "🇸🇪"),
    ("NOK", "kr", 2, "🇳🇴"),
];

// =============================================================================
// Currency Table
// =============================================================================

/// Immutable code → metadata lookup.
///
/// Built once at process start and passed by reference (or `Arc`) to every
/// caller. It is never mutated after construction, so unsynchronized
/// concurrent reads are safe under any threading model.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    /// Rows in picker display order.
    infos: Vec<CurrencyInfo>,
    /// code → index into `infos`.
    index: HashMap<String, usize>,
}

impl CurrencyTable {
    /// Builds the table of commonly used currencies.
    pub fn common() -> Self {
        let infos: Vec<CurrencyInfo> = COMMON_CURRENCIES
            .iter()
            .map(|(code, symbol, exponent, flag)| CurrencyInfo {
                code: (*code).to_string(),
                symbol: (*symbol).to_string(),
                exponent: *exponent,
                flag: (*flag).to_string(),
            })
            .collect();

        let index = infos
            .iter()
            .enumerate()
            .map(|(i, info)| (info.code.clone(), i))
            .collect();

        CurrencyTable { infos, index }
    }

    /// Looks up metadata for a code. Case-insensitive, `None` if unknown.
    pub fn get(&self, code: &str) -> Option<&CurrencyInfo> {
        let key = code.trim().to_uppercase();
        self.index.get(&key).map(|&i| &self.infos[i])
    }

    /// Returns the number of fractional digits for a code.
    ///
    /// Unknown codes get [`DEFAULT_EXPONENT`]. This is an intentional
    /// fallback, not a failure: amounts must keep computing while a room's
    /// currency field holds something the table has never heard of.
    ///
    /// ## Example
    /// ```rust
    /// use split_core::currency::CurrencyTable;
    ///
    /// let currencies = CurrencyTable::common();
    /// assert_eq!(currencies.exponent_for("JPY"), 0);
    /// assert_eq!(currencies.exponent_for("ZZZ"), 2);
    /// ```
    pub fn exponent_for(&self, code: &str) -> u32 {
        self.get(code).map(|c| c.exponent).unwrap_or(DEFAULT_EXPONENT)
    }

    /// Returns the display symbol for a code, [`DEFAULT_SYMBOL`] if unknown.
    pub fn symbol_for(&self, code: &str) -> &str {
        self.get(code).map(|c| c.symbol.as_str()).unwrap_or(DEFAULT_SYMBOL)
    }

    /// Strict code normalization: trim + uppercase, known codes only.
    ///
    /// Used when committing a room currency choice, where an unknown code
    /// must be rejected rather than silently defaulted.
    pub fn normalize_code(&self, code: &str) -> Option<String> {
        let candidate = code.trim().to_uppercase();
        if candidate.is_empty() {
            return None;
        }
        self.index.contains_key(&candidate).then_some(candidate)
    }

    /// All known codes, sorted.
    pub fn supported_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.infos.iter().map(|c| c.code.clone()).collect();
        codes.sort();
        codes
    }

    /// Rows in picker display order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyInfo> {
        self.infos.iter()
    }

    /// Parses user-typed decimal text into minor units of `code`.
    ///
    /// See [`Money::parse_decimal`] for the exact degradation rules; this
    /// wrapper only supplies the exponent.
    pub fn to_minor_units(&self, text: &str, code: &str) -> i64 {
        Money::parse_decimal(text, self.exponent_for(code)).cents()
    }

    /// Formats minor units of `code` for display.
    pub fn format(&self, amount: i64, code: &str) -> String {
        format_minor_units(amount, self.symbol_for(code), self.exponent_for(code))
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        CurrencyTable::common()
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an integer minor-unit amount as `symbol` + major units + exactly
/// `exponent` fractional digits.
///
/// Pure presentation: the division here is exact integer math, so an
/// already-integer amount is never re-rounded.
///
/// ## Example
/// ```rust
/// use split_core::currency::format_minor_units;
///
/// assert_eq!(format_minor_units(1315, "$", 2), "$13.15");
/// assert_eq!(format_minor_units(5, "¥", 0), "¥5");
/// assert_eq!(format_minor_units(-550, "$", 2), "-$5.50");
/// ```
pub fn format_minor_units(amount: i64, symbol: &str, exponent: u32) -> String {
    if exponent == 0 {
        return format!("{symbol}{amount}");
    }
    let factor = 10i64.pow(exponent);
    let sign = if amount < 0 { "-" } else { "" };
    let major = (amount / factor).abs();
    let minor = (amount % factor).abs();
    format!(
        "{sign}{symbol}{major}.{minor:0width$}",
        width = exponent as usize
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponent_lookup() {
        let currencies = CurrencyTable::common();
        assert_eq!(currencies.exponent_for("USD"), 2);
        assert_eq!(currencies.exponent_for("EUR"), 2);
        assert_eq!(currencies.exponent_for("JPY"), 0);
        assert_eq!(currencies.exponent_for("KRW"), 0);
    }

    #[test]
    fn test_exponent_unknown_code_defaults_to_two() {
        let currencies = CurrencyTable::common();
        assert_eq!(currencies.exponent_for("ZZZ"), 2);
        assert_eq!(currencies.exponent_for(""), 2);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let currencies = CurrencyTable::common();
        assert_eq!(currencies.exponent_for("jpy"), 0);
        assert_eq!(currencies.symbol_for(" usd "), "$");
    }

    #[test]
    fn test_normalize_code() {
        let currencies = CurrencyTable::common();
        assert_eq!(currencies.normalize_code(" usd "), Some("USD".to_string()));
        assert_eq!(currencies.normalize_code("GBP"), Some("GBP".to_string()));
        assert_eq!(currencies.normalize_code("ZZZ"), None);
        assert_eq!(currencies.normalize_code(""), None);
    }

    #[test]
    fn test_supported_codes_sorted() {
        let currencies = CurrencyTable::common();
        let codes = currencies.supported_codes();
        assert_eq!(codes.len(), 15);
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert!(codes.contains(&"USD".to_string()));
        assert!(codes.contains(&"NOK".to_string()));
    }

    #[test]
    fn test_iter_preserves_picker_order() {
        let currencies = CurrencyTable::common();
        let codes: Vec<&str> = currencies.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes.first(), Some(&"USD"));
        assert_eq!(codes.len(), 15);
        assert_eq!(currencies.get("JPY").unwrap().flag, "🇯🇵");
    }

    #[test]
    fn test_format_two_digit_currency() {
        assert_eq!(format_minor_units(1315, "$", 2), "$13.15");
        assert_eq!(format_minor_units(500, "€", 2), "€5.00");
        assert_eq!(format_minor_units(9, "$", 2), "$0.09");
        assert_eq!(format_minor_units(0, "$", 2), "$0.00");
    }

    #[test]
    fn test_format_zero_exponent_currency() {
        assert_eq!(format_minor_units(5, "¥", 0), "¥5");
        assert_eq!(format_minor_units(1315, "₩", 0), "₩1315");
    }

    #[test]
    fn test_format_negative_amount() {
        assert_eq!(format_minor_units(-550, "$", 2), "-$5.50");
    }

    #[test]
    fn test_table_format_uses_code_metadata() {
        let currencies = CurrencyTable::common();
        assert_eq!(currencies.format(1315, "USD"), "$13.15");
        assert_eq!(currencies.format(1315, "JPY"), "¥1315");
        // unknown code: default symbol and exponent
        assert_eq!(currencies.format(1315, "ZZZ"), "$13.15");
    }

    #[test]
    fn test_to_minor_units_is_exponent_aware() {
        let currencies = CurrencyTable::common();
        assert_eq!(currencies.to_minor_units("1", "USD"), 100);
        assert_eq!(currencies.to_minor_units("1", "JPY"), 1);
        assert_eq!(currencies.to_minor_units("5", "JPY"), 5);
    }
}
