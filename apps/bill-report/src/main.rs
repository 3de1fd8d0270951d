//! # Bill Report
//!
//! Loads a Themepark Split room snapshot (JSON) and prints the bill the
//! way the room view computes it: per-item nets, pre-tax subtotal, tax,
//! tip, and grand total, formatted in the room currency.
//!
//! ## Usage
//! ```bash
//! # Path as argument
//! cargo run -p bill-report -- ./room.json
//!
//! # Or via environment
//! BILL_SNAPSHOT=./room.json cargo run -p bill-report
//!
//! # Force a display currency for snapshots missing one
//! BILL_CURRENCY=JPY cargo run -p bill-report -- ./room.json
//! ```

mod config;

use std::env;
use std::fs;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use split_core::currency::CurrencyTable;
use split_core::identity::{color_hex, effective_initials, initials_badges};
use split_core::types::RoomDoc;

use crate::config::{ConfigError, ReportConfig};

/// Report failure modes: config, file I/O, or a malformed snapshot.
#[derive(Debug, thiserror::Error)]
enum ReportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> Result<(), ReportError> {
    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = ReportConfig::load();
    let path = config.resolve_snapshot_path(env::args().nth(1))?;
    info!(%path, "Loading room snapshot");

    let raw = fs::read_to_string(&path)?;
    let doc: RoomDoc = serde_json::from_str(&raw)?;
    info!(
        room = %doc.room_id,
        items = doc.items.len(),
        participants = doc.participants.len(),
        "Snapshot loaded"
    );

    let currencies = CurrencyTable::common();
    let code = display_currency(&config, &doc, &currencies);

    print_report(&doc, &currencies, &code);
    Ok(())
}

/// Picks the currency the report is rendered in.
///
/// A valid BILL_CURRENCY override wins; otherwise the room currency with
/// its USD fallback. Overriding a snapshot that committed a different
/// currency only changes formatting, so it gets a warning.
fn display_currency(config: &ReportConfig, doc: &RoomDoc, currencies: &CurrencyTable) -> String {
    let room_code = doc.currency_code().to_string();
    let Some(requested) = config.currency_override.as_deref() else {
        return room_code;
    };

    match currencies.normalize_code(requested) {
        Some(code) => {
            if doc.currency.is_some() && code != room_code {
                warn!(
                    room_currency = %room_code,
                    override_currency = %code,
                    "Display override reformats amounts without conversion"
                );
            }
            code
        }
        None => {
            warn!(requested, "Unknown BILL_CURRENCY ignored");
            room_code
        }
    }
}

fn print_report(doc: &RoomDoc, currencies: &CurrencyTable, code: &str) {
    let title = if doc.name.trim().is_empty() {
        "Shared Bill"
    } else {
        doc.name.trim()
    };
    let flag = currencies
        .get(code)
        .map(|c| format!("{} ", c.flag))
        .unwrap_or_default();
    println!("{title} | room {} | {flag}{code}", doc.room_id);
    println!();

    let participants = doc.sorted_participants();
    if !participants.is_empty() {
        let badges = initials_badges(&participants);
        let claimants = doc.assigned_user_ids();
        println!("Participants:");
        for p in &participants {
            let mut initials = effective_initials(p);
            if let Some(badge) = badges.get(&p.id) {
                initials.push('#');
                initials.push_str(badge);
            }
            let presence = if p.present { "" } else { " (away)" };
            let claiming = if claimants.contains(&p.id) {
                " (claiming items)"
            } else {
                ""
            };
            println!(
                "  [{initials}] {} {}{presence}{claiming}",
                p.name,
                color_hex(&p.color_seed)
            );
        }
        println!();
    }

    println!("Items:");
    for item in doc.sorted_items() {
        let qty = if item.quantity > 1 {
            format!("{} × ", item.quantity)
        } else {
            String::new()
        };
        println!(
            "  {qty}{:<30} {:>12}",
            item.name,
            currencies.format(item.line_net_cents(), code)
        );
    }

    println!();
    println!(
        "  {:<32} {:>12}",
        "Subtotal",
        currencies.format(doc.pre_tax_subtotal_cents(), code)
    );
    println!(
        "  {:<32} {:>12}",
        "Tax",
        currencies.format(doc.tax_cents.max(0), code)
    );
    println!(
        "  {:<32} {:>12}",
        "Tip",
        currencies.format(doc.tip_cents.max(0), code)
    );
    println!(
        "  {:<32} {:>12}",
        "Total",
        currencies.format(doc.grand_total_cents(), code)
    );
}
