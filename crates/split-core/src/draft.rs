//! # Draft Module
//!
//! The live-editing side of the bill: line items as raw text fields, exactly
//! as a user is typing them, and the arithmetic that turns them into minor
//! units on every keystroke.
//!
//! ## Input Precedence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  How one draft line becomes a net amount                                │
//! │                                                                         │
//! │  quantity ──► clamp to >= 1 (malformed text counts as 1)               │
//! │                                                                         │
//! │  linePrice ─────────┐  non-zero line total WINS over                   │
//! │  unitPrice × qty ───┴► gross                                           │
//! │                                                                         │
//! │  discountCents ─────┐  non-zero flat discount WINS over               │
//! │  unit × percent ────┴► per-unit discount                               │
//! │                                                                         │
//! │  net = max(0, gross − per-unit discount × qty)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this module can fail. Half-typed numbers, stray words, and
//! negative signs all degrade to defined defaults, because partial input is
//! the normal state of a form being edited, not an error.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::CurrencyTable;
use crate::money::Money;
use crate::types::{Item, ReceiptItem};

// =============================================================================
// Item Draft
// =============================================================================

/// One bill line as it sits in the editable form.
///
/// Every field is the raw text of an input element. The front-end binds
/// these directly; recomputation is pull-based, calling [`ItemDraft::net_cents`]
/// after each change and re-rendering with the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ItemDraft {
    /// Positive integer text; anything else counts as 1.
    pub quantity: String,
    /// Decimal text, price per unit.
    pub unit_price: String,
    /// Decimal text, explicit total for the whole line. Overrides
    /// `unit_price` × `quantity` when non-zero.
    pub line_price: String,
    /// Decimal text, 0 to 100. Ignored when a flat discount is present.
    pub discount_percent: String,
    /// Decimal text, flat discount per unit.
    pub discount_cents: String,
}

impl ItemDraft {
    /// Net minor units for this draft line in the given currency.
    ///
    /// The evaluation order is the contract; it decides which of two
    /// competing inputs wins:
    ///
    /// 1. quantity clamps to at least 1,
    /// 2. a non-zero explicit line price beats unit price × quantity,
    /// 3. a non-zero flat per-unit discount beats the percentage, and the
    ///    percentage only applies when a unit price exists to take it from,
    /// 4. the result floors at zero.
    pub fn net_cents(&self, currencies: &CurrencyTable, code: &str) -> i64 {
        let exponent = currencies.exponent_for(code);

        let qty = parse_quantity(&self.quantity);
        let unit = Money::parse_decimal(&self.unit_price, exponent);
        let line = Money::parse_decimal(&self.line_price, exponent);

        let gross = if line.is_positive() {
            line
        } else {
            unit.multiply_quantity(qty)
        };

        let percent = parse_percent(&self.discount_percent);
        let mut per_unit_discount = Money::parse_decimal(&self.discount_cents, exponent);
        if per_unit_discount.is_zero() && unit.is_positive() {
            per_unit_discount = unit.percent_of(percent);
        }

        (gross - per_unit_discount.multiply_quantity(qty))
            .clamp_floor_zero()
            .cents()
    }

    /// Seeds a draft from one parsed receipt line.
    ///
    /// The parser's cents are a best guess; rendering them back to decimal
    /// text puts them in front of the user for correction before anything
    /// is committed.
    pub fn from_receipt(parsed: &ReceiptItem, exponent: u32) -> Self {
        ItemDraft {
            quantity: parsed
                .quantity
                .filter(|q| *q > 0)
                .map(|q| q.to_string())
                .unwrap_or_default(),
            unit_price: optional_cents_text(parsed.unit_price_cents, exponent),
            line_price: optional_cents_text(parsed.line_price_cents, exponent),
            discount_percent: parsed
                .discount_percent
                .filter(|p| *p > 0.0)
                .map(percent_text)
                .unwrap_or_default(),
            discount_cents: optional_cents_text(parsed.discount_cents, exponent),
        }
    }

    /// Seeds a draft from a committed item, for in-place editing.
    pub fn from_item(item: &Item, exponent: u32) -> Self {
        ItemDraft {
            quantity: if item.quantity > 0 {
                item.quantity.to_string()
            } else {
                "1".to_string()
            },
            unit_price: optional_cents_text(Some(item.unit_price_cents), exponent),
            line_price: optional_cents_text(Some(item.line_price_cents), exponent),
            discount_percent: if item.discount_percent > 0.0 {
                percent_text(item.discount_percent)
            } else {
                String::new()
            },
            discount_cents: optional_cents_text(Some(item.discount_cents), exponent),
        }
    }
}

/// Sums [`ItemDraft::net_cents`] over a draft list. Empty input totals zero.
pub fn subtotal_cents(items: &[ItemDraft], currencies: &CurrencyTable, code: &str) -> i64 {
    items
        .iter()
        .map(|item| Money::from_cents(item.net_cents(currencies, code)))
        .sum::<Money>()
        .cents()
}

// =============================================================================
// Field Parsers
// =============================================================================

/// Quantity text → integer, clamped to at least 1.
///
/// Malformed and non-positive values count as a single unit. A line with a
/// garbage quantity still prices its unit once rather than vanishing.
fn parse_quantity(text: &str) -> i64 {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|qty| *qty >= 1)
        .unwrap_or(1)
}

/// Percent text → f64, defaulting to 0 and clamped below at 0.
///
/// Values above 100 pass through as typed; the zero floor on the net is
/// the only guard. "150" mid-way to "15" must not error or invert.
fn parse_percent(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
        .max(0.0)
}

fn optional_cents_text(cents: Option<i64>, exponent: u32) -> String {
    cents
        .filter(|c| *c > 0)
        .map(|c| Money::from_cents(c).to_decimal_string(exponent))
        .unwrap_or_default()
}

fn percent_text(percent: f64) -> String {
    if percent == percent.trunc() {
        format!("{}", percent as i64)
    } else {
        percent.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
