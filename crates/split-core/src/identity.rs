//! # Identity Module
//!
//! Display-side participant helpers: initials, avatar colors, and badges
//! that disambiguate duplicate initials. None of this touches the money
//! math; it groups people on screen.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::types::Participant;

/// Fallback avatar color when a seed is missing or malformed.
pub const DEFAULT_AVATAR_COLOR: &str = "#94a3b8";

/// Derives display initials from a free-form name.
///
/// One word gives its first letter; several words give first word + last
/// word initials. Empty input gives "?".
///
/// ## Example
/// ```rust
/// use split_core::identity::initials_from_name;
///
/// assert_eq!(initials_from_name("Ada Lovelace"), "AL");
/// assert_eq!(initials_from_name("Plato"), "P");
/// assert_eq!(initials_from_name("   "), "?");
/// ```
pub fn initials_from_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => "?".to_string(),
        [only] => first_char_upper(only),
        [first, .., last] => format!("{}{}", first_char_upper(first), first_char_upper(last)),
    }
}

fn first_char_upper(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Deterministic avatar color seed for a participant in a room.
///
/// First six hex digits of SHA-256(room_id + user_id). Every client
/// derives the same color for the same person without coordination.
pub fn color_seed(room_id: &str, user_id: &str) -> String {
    let digest = Sha256::digest(format!("{room_id}{user_id}").as_bytes());
    hex::encode(digest)[..6].to_string()
}

/// Turns a color seed into a CSS hex color.
///
/// Seeds shorter than six chars or containing non-hex digits fall back to
/// [`DEFAULT_AVATAR_COLOR`].
pub fn color_hex(seed: &str) -> String {
    if seed.len() >= 6 && seed.chars().take(6).all(|c| c.is_ascii_hexdigit()) {
        format!("#{}", &seed[..6])
    } else {
        DEFAULT_AVATAR_COLOR.to_string()
    }
}

/// Effective initials for a participant: the stored ones, or derived from
/// the name when the stored field is empty.
pub fn effective_initials(participant: &Participant) -> String {
    if participant.initials.trim().is_empty() {
        initials_from_name(&participant.name)
    } else {
        participant.initials.clone()
    }
}

/// Numeric badges for participants whose initials collide.
///
/// Participants are numbered "1", "2", ... in the given order; ids with
/// unique initials get no badge. Mirrors the avatar row in the room view,
/// where two "AL"s render as AL¹ and AL².
pub fn initials_badges(participants: &[&Participant]) -> HashMap<String, String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for p in participants {
        *counts.entry(effective_initials(p)).or_insert(0) += 1;
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut badges = HashMap::new();
    for p in participants {
        let initials = effective_initials(p);
        let ordinal = seen.entry(initials.clone()).or_insert(0);
        *ordinal += 1;
        if counts[&initials] > 1 {
            badges.insert(p.id.clone(), ordinal.to_string());
        }
    }
    badges
}
