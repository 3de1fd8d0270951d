//! # split-core: Pure Business Logic for Themepark Split
//!
//! This crate is the **heart** of Themepark Split, a collaborative
//! bill-splitting app. It contains the money engine and its surrounding
//! domain types as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Themepark Split Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (Svelte/TypeScript)                   │   │
//! │  │    Room UI ──► Item Forms ──► Tax/Tip ──► Summary              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON (room snapshots, ops)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            Room Data Provider (external collaborator)           │   │
//! │  │    realtime item/participant state, receipt parser output       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ split-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ currency  │  │   money   │  │   draft   │  │   types   │  │   │
//! │  │   │  table,   │  │  parse,   │  │ editable  │  │ RoomDoc,  │  │   │
//! │  │   │  format   │  │  round    │  │ line math │  │   Item    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │    fx     │  │ identity  │  │ validation│                 │   │
//! │  │   │  rates    │  │ initials  │  │   rules   │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - Static currency table, exponents, display formatting
//! - [`money`] - Integer minor-unit money with text parsing at the boundary
//! - [`draft`] - Editable line items and the per-keystroke subtotal math
//! - [`types`] - Committed room state (RoomDoc, Item, Participant, receipts)
//! - [`identity`] - Initials, avatar colors, duplicate-initials badges
//! - [`fx`] - Cross rates and exponent-aware conversion
//! - [`validation`] - Business rule validation for committed records
//! - [`error`] - Typed errors for the validation and FX boundaries
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic and idempotent -
//!    same input, same output, no shared mutable state
//! 2. **No I/O**: Network, file system, clock, and RNG access are FORBIDDEN
//!    here (the avatar color hash is deterministic, not random)
//! 3. **Integer Money**: Amounts are i64 minor units; floats appear only at
//!    the text-parsing boundary and are rounded away immediately
//! 4. **Silent Degradation at the Edit Boundary**: the draft math never
//!    errors, because half-typed input is the normal state of a live form
//!
//! ## Example Usage
//!
//! ```rust
//! use split_core::currency::CurrencyTable;
//! use split_core::draft::{subtotal_cents, ItemDraft};
//!
//! let currencies = CurrencyTable::common();
//! let items = vec![
//!     ItemDraft {
//!         quantity: "2".to_string(),
//!         unit_price: "5.00".to_string(),
//!         ..ItemDraft::default()
//!     },
//!     ItemDraft {
//!         quantity: "1".to_string(),
//!         unit_price: "3.50".to_string(),
//!         discount_percent: "10".to_string(),
//!         ..ItemDraft::default()
//!     },
//! ];
//!
//! let subtotal = subtotal_cents(&items, &currencies, "USD");
//! assert_eq!(subtotal, 1315);
//! assert_eq!(currencies.format(subtotal, "USD"), "$13.15");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod draft;
pub mod error;
pub mod fx;
pub mod identity;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use split_core::Money` instead of
// `use split_core::money::Money`

pub use currency::{CurrencyInfo, CurrencyTable, DEFAULT_CURRENCY};
pub use error::{FxError, ValidationError};
pub use money::Money;
pub use types::{Item, Participant, ReceiptItem, ReceiptParseResult, RoomDoc};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single room.
///
/// ## Business Reason
/// Keeps a shared bill renderable on a phone and bounds snapshot size.
pub const MAX_ROOM_ITEMS: usize = 100;

/// Maximum quantity of a single item.
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
