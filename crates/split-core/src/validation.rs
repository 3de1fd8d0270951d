//! # Validation Module
//!
//! Business-rule checks for records on their way into the room data
//! provider.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Different Regimes                              │
//! │                                                                         │
//! │  Live editing (draft module)                                            │
//! │  └── NEVER errors: malformed text degrades to 0 / 1 defaults           │
//! │                                                                         │
//! │  Committing a record (THIS MODULE)                                      │
//! │  └── Typed errors: a record that breaks a rule must not be stored      │
//! │                                                                         │
//! │  A user may type "150" on the way to "15"; that is fine in a form.    │
//! │  A committed item with a 150% discount is a data bug.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_ITEM_QUANTITY, MAX_ROOM_ITEMS};

/// Room codes use this alphabet: uppercase letters and digits minus the
/// ambiguous I, O, 0, 1.
pub const ROOM_CODE_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Room codes are always this long.
pub const ROOM_CODE_LENGTH: usize = 6;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use split_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Funnel Cake").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a participant display name (required, at most 100 characters).
pub fn validate_participant_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a room code: exactly [`ROOM_CODE_LENGTH`] characters from
/// [`ROOM_CODE_ALPHABET`], case-insensitive.
pub fn validate_room_code(code: &str) -> ValidationResult<()> {
    let code = code.trim().to_uppercase();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "room_code".to_string(),
        });
    }

    if code.len() != ROOM_CODE_LENGTH || !code.chars().all(|c| ROOM_CODE_ALPHABET.contains(c)) {
        return Err(ValidationError::InvalidFormat {
            field: "room_code".to_string(),
            reason: format!(
                "must be {ROOM_CODE_LENGTH} characters from the unambiguous alphabet"
            ),
        });
    }

    Ok(())
}

/// Validates a participant id (UUID v4 string, as minted by the backend).
pub fn validate_participant_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a committed quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a committed amount in minor units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, no discount)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a committed discount percentage.
///
/// Committed records keep the percentage inside 0 to 100. The editable
/// form is looser (it tolerates transient out-of-range text), but data at
/// rest must make sense on its own.
pub fn validate_discount_percent(percent: f64) -> ValidationResult<()> {
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "discount_percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates room size (number of items) before adding another.
pub fn validate_room_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_ROOM_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "room items".to_string(),
            min: 0,
            max: MAX_ROOM_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Funnel Cake").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_participant_name() {
        assert!(validate_participant_name("Ada Lovelace").is_ok());
        assert!(validate_participant_name("").is_err());
        assert!(validate_participant_name(&"A".repeat(150)).is_err());
    }

    #[test]
    fn test_validate_room_code() {
        assert!(validate_room_code("ABC234").is_ok());
        assert!(validate_room_code("abc234").is_ok());
        assert!(validate_room_code(" ABC234 ").is_ok());

        assert!(validate_room_code("").is_err());
        assert!(validate_room_code("ABC23").is_err());
        assert!(validate_room_code("ABC2345").is_err());
        // 0, 1, I, O are excluded from the alphabet
        assert!(validate_room_code("ABC010").is_err());
        assert!(validate_room_code("ABCIO2").is_err());
    }

    #[test]
    fn test_validate_participant_id() {
        assert!(validate_participant_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_participant_id("").is_err());
        assert!(validate_participant_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0.0).is_ok());
        assert!(validate_discount_percent(50.0).is_ok());
        assert!(validate_discount_percent(100.0).is_ok());

        assert!(validate_discount_percent(-1.0).is_err());
        assert!(validate_discount_percent(100.1).is_err());
        assert!(validate_discount_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_room_size() {
        assert!(validate_room_size(0).is_ok());
        assert!(validate_room_size(MAX_ROOM_ITEMS - 1).is_ok());
        assert!(validate_room_size(MAX_ROOM_ITEMS).is_err());
    }
}
