//! # Domain Types
//!
//! Committed room state as the room data provider delivers it, plus the
//! receipt parser's output shape.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      RoomDoc        │        │  ReceiptParseResult │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  items: id → Item   │        │  items: ReceiptItem │                │
//! │  │  participants       │        │  subtotal_cents?    │                │
//! │  │  tax_cents          │        │  warnings           │                │
//! │  │  tip_cents          │        │  confidence         │                │
//! │  │  currency?          │        └─────────────────────┘                │
//! │  └─────────────────────┘                                               │
//! │                                                                         │
//! │  Item amounts are committed integers (minor units). Summing them       │
//! │  never re-parses text and never re-rounds: the stored path is exact.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Editable drafts ([`crate::draft::ItemDraft`]) exist only while a user is
//! typing. The room data provider commits them as [`Item`] records; this
//! crate only ever reads the committed form.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::DEFAULT_CURRENCY;
use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A committed bill line item.
///
/// All amounts are integer minor units of the room currency.
/// `line_price_cents` is the committed line gross; `discount_cents` is a
/// flat per-unit discount already resolved from whatever the user typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_price_cents: i64,
    pub discount_cents: i64,
    pub discount_percent: f64,
    /// participant-id → claimed. Absent ids have never touched the item.
    pub assigned: HashMap<String, bool>,
    /// Raw OCR text when the item came from a parsed receipt.
    pub raw_text: Option<String>,
    /// Parser warnings carried along with the item.
    pub warnings: Vec<String>,
    /// Last-write timestamp (unix millis), set by the room data provider.
    pub updated_at: i64,
}

impl Item {
    /// Net minor units for this line: committed gross minus the flat
    /// per-unit discount times quantity, floored at zero.
    ///
    /// A quantity of zero counts as one; committed records are already
    /// integers, so no parsing or rounding happens here.
    ///
    /// ## Example
    /// ```rust
    /// use split_core::types::Item;
    ///
    /// let item = Item {
    ///     quantity: 2,
    ///     line_price_cents: 1000,
    ///     discount_cents: 100,
    ///     ..Item::default()
    /// };
    /// assert_eq!(item.line_net_cents(), 800);
    /// ```
    pub fn line_net_cents(&self) -> i64 {
        let qty = if self.quantity == 0 { 1 } else { self.quantity };
        let gross = Money::from_cents(self.line_price_cents);
        let discount = Money::from_cents(self.discount_cents).multiply_quantity(qty);
        (gross - discount).clamp_floor_zero().cents()
    }

    /// Whether the given participant has claimed this item.
    pub fn is_assigned(&self, user_id: &str) -> bool {
        self.assigned.get(user_id).copied().unwrap_or(false)
    }
}

// =============================================================================
// Participant
// =============================================================================

/// A person in the room.
///
/// Used for display grouping only; the money math never consults this.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Participant {
    pub id: String,
    pub name: String,
    /// Precomputed display initials; may be empty, in which case they are
    /// derived from the name (see [`crate::identity::initials_from_name`]).
    pub initials: String,
    /// Hex seed for the avatar color, derived from room and user id.
    pub color_seed: String,
    pub present: bool,
    pub updated_at: i64,
}

// =============================================================================
// Room Document
// =============================================================================

/// The full shared bill state for one room.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RoomDoc {
    pub room_id: String,
    /// Restaurant / bill display name.
    pub name: String,
    pub items: HashMap<String, Item>,
    pub participants: HashMap<String, Participant>,
    pub tax_cents: i64,
    pub tip_cents: i64,
    /// Room currency code; treat `None` or empty as [`DEFAULT_CURRENCY`].
    pub currency: Option<String>,
    /// Optional currency the bill should be converted into for display.
    pub target_currency: Option<String>,
    /// Monotonic sequence number stamped by the room data provider.
    pub seq: i64,
}

impl RoomDoc {
    /// The room's effective currency code.
    pub fn currency_code(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    /// Pre-tax subtotal across all committed items, in minor units.
    ///
    /// Empty rooms total zero. Each line is floored at zero before summing,
    /// so the subtotal is never negative.
    pub fn pre_tax_subtotal_cents(&self) -> i64 {
        self.items
            .values()
            .map(|item| Money::from_cents(item.line_net_cents()))
            .sum::<Money>()
            .clamp_floor_zero()
            .cents()
    }

    /// Subtotal plus tax plus tip. Negative tax or tip contributions are
    /// ignored rather than reducing the bill.
    pub fn grand_total_cents(&self) -> i64 {
        self.pre_tax_subtotal_cents() + self.tax_cents.max(0) + self.tip_cents.max(0)
    }

    /// Ids of participants who have claimed at least one item.
    pub fn assigned_user_ids(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        for item in self.items.values() {
            for (uid, on) in &item.assigned {
                if *on {
                    ids.insert(uid.clone());
                }
            }
        }
        ids
    }

    /// Items in a stable display order (name, then id).
    pub fn sorted_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// Participants in a stable display order (name, then id).
    pub fn sorted_participants(&self) -> Vec<&Participant> {
        let mut participants: Vec<&Participant> = self.participants.values().collect();
        participants.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        participants
    }
}

// =============================================================================
// Receipt Parser Output
// =============================================================================

/// One line item as the receipt parser guessed it.
///
/// Every amount is a best guess and may be absent; users re-enter these
/// values through the editable form before anything is committed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ReceiptItem {
    pub name: String,
    pub quantity: Option<i64>,
    pub unit_price_cents: Option<i64>,
    pub line_price_cents: Option<i64>,
    pub discount_cents: Option<i64>,
    pub discount_percent: Option<f64>,
    pub raw_text: Option<String>,
}

/// The receipt parser's full response.
///
/// Produced by an external OCR service; consumed here read-only. The
/// totals are advisory (shown to the user for cross-checking), never fed
/// into the bill arithmetic directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ReceiptParseResult {
    pub merchant: Option<String>,
    pub items: Vec<ReceiptItem>,
    pub subtotal_cents: Option<i64>,
    pub tax_cents: Option<i64>,
    pub total_cents: Option<i64>,
    pub currency: Option<String>,
    pub fees: Vec<String>,
    pub warnings: Vec<String>,
    pub confidence: f64,
    pub unparsed_lines: Vec<String>,
}

impl ReceiptParseResult {
    /// Deserializes a parser response from its JSON wire form.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, line_price_cents: i64, discount_cents: i64) -> Item {
        Item {
            id: format!("item-{line_price_cents}"),
            name: "Test Item".to_string(),
            quantity,
            line_price_cents,
            discount_cents,
            ..Item::default()
        }
    }

    #[test]
    fn test_line_net_no_discount() {
        assert_eq!(item(1, 1000, 0).line_net_cents(), 1000);
        assert_eq!(item(3, 1500, 0).line_net_cents(), 1500);
    }

    #[test]
    fn test_line_net_discount_scales_with_quantity() {
        // 1000 gross, 100 off per unit, qty 2 => 800
        assert_eq!(item(2, 1000, 100).line_net_cents(), 800);
    }

    #[test]
    fn test_line_net_zero_quantity_counts_as_one() {
        assert_eq!(item(0, 1000, 100).line_net_cents(), 900);
    }

    #[test]
    fn test_line_net_floors_at_zero() {
        // discount exceeds gross
        assert_eq!(item(3, 500, 400).line_net_cents(), 0);
    }

    #[test]
    fn test_empty_room_subtotal_is_zero() {
        let doc = RoomDoc::default();
        assert_eq!(doc.pre_tax_subtotal_cents(), 0);
        assert_eq!(doc.grand_total_cents(), 0);
    }

    #[test]
    fn test_room_subtotal_sums_line_nets() {
        let mut doc = RoomDoc::default();
        doc.items.insert("a".into(), item(2, 1000, 0));
        doc.items.insert("b".into(), item(1, 350, 35));
        assert_eq!(doc.pre_tax_subtotal_cents(), 1315);
    }

    #[test]
    fn test_grand_total_adds_tax_and_tip() {
        let mut doc = RoomDoc {
            tax_cents: 120,
            tip_cents: 200,
            ..RoomDoc::default()
        };
        doc.items.insert("a".into(), item(1, 1000, 0));
        assert_eq!(doc.grand_total_cents(), 1320);

        // negative tax/tip never reduce the bill
        doc.tax_cents = -500;
        assert_eq!(doc.grand_total_cents(), 1200);
    }

    #[test]
    fn test_currency_code_fallback() {
        let mut doc = RoomDoc::default();
        assert_eq!(doc.currency_code(), "USD");

        doc.currency = Some(String::new());
        assert_eq!(doc.currency_code(), "USD");

        doc.currency = Some("JPY".to_string());
        assert_eq!(doc.currency_code(), "JPY");
    }

    #[test]
    fn test_assigned_user_ids_skips_false_entries() {
        let mut doc = RoomDoc::default();
        let mut it = item(1, 1000, 0);
        it.assigned.insert("alice".into(), true);
        it.assigned.insert("bob".into(), false);
        doc.items.insert("a".into(), it);

        let ids = doc.assigned_user_ids();
        assert!(ids.contains("alice"));
        assert!(!ids.contains("bob"));
    }

    #[test]
    fn test_room_doc_wire_format() {
        let json = r#"{
            "room_id": "ABC234",
            "name": "Shared Bill",
            "items": {
                "i1": {
                    "id": "i1",
                    "name": "Churro",
                    "quantity": 2,
                    "unit_price_cents": 500,
                    "line_price_cents": 1000,
                    "discount_cents": 0,
                    "discount_percent": 0,
                    "assigned": {"u1": true}
                }
            },
            "participants": {
                "u1": {
                    "id": "u1",
                    "name": "Ada Lovelace",
                    "initials": "AL",
                    "color_seed": "a1b2c3",
                    "present": true
                }
            },
            "tax_cents": 83,
            "tip_cents": 150,
            "currency": "USD",
            "seq": 7
        }"#;

        let doc: RoomDoc = serde_json::from_str(json).unwrap();
        assert_eq!(doc.room_id, "ABC234");
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.pre_tax_subtotal_cents(), 1000);
        assert_eq!(doc.grand_total_cents(), 1233);
        assert!(doc.items["i1"].is_assigned("u1"));
    }

    #[test]
    fn test_receipt_parse_result_from_json() {
        let json = r#"{
            "merchant": "Coaster Cafe",
            "items": [
                {"name": "Funnel Cake", "quantity": 1, "line_price_cents": 850, "raw_text": "FNL CAKE 8.50"}
            ],
            "subtotal_cents": 850,
            "tax_cents": null,
            "total_cents": 920,
            "warnings": ["tax line unreadable"],
            "confidence": 0.82
        }"#;

        let parsed = ReceiptParseResult::from_json(json).unwrap();
        assert_eq!(parsed.merchant.as_deref(), Some("Coaster Cafe"));
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].line_price_cents, Some(850));
        assert_eq!(parsed.tax_cents, None);
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn test_receipt_parse_result_rejects_malformed_json() {
        assert!(ReceiptParseResult::from_json("not json").is_err());
    }
}
