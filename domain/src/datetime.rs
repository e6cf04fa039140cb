//! Timestamp display helpers.
//!
//! The API returns RFC 3339 timestamps in UTC, while the create form submits
//! the raw `datetime-local` value (`YYYY-MM-DDTHH:MM`, no zone). Both shapes
//! are accepted. Callers pass the viewer's UTC offset so the same code runs
//! natively in tests and in the browser.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Parse `raw` and shift it into the viewer's offset.
fn parse_in_offset(raw: &str, offset_minutes: i32) -> Option<OffsetDateTime> {
    let offset = UtcOffset::from_whole_seconds(offset_minutes.checked_mul(60)?).ok()?;
    let raw = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed.to_offset(offset));
    }
    let local = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    PrimitiveDateTime::parse(raw, local)
        .ok()
        .map(|dt| dt.assume_offset(offset))
}

/// Expiry label shown on map cards, e.g. `Mar 1, 06:30 PM`.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_best_before(raw: &str, offset_minutes: i32) -> String {
    let fmt = format_description!("[month repr:short] [day padding:none], [hour repr:12]:[minute] [period]");
    parse_in_offset(raw, offset_minutes)
        .and_then(|dt| dt.format(fmt).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Date label for history items, e.g. `Feb 28, 2025`.
#[must_use]
pub fn format_history_date(raw: &str, offset_minutes: i32) -> String {
    let fmt = format_description!("[month repr:short] [day padding:none], [year]");
    parse_in_offset(raw, offset_minutes)
        .and_then(|dt| dt.format(fmt).ok())
        .unwrap_or_else(|| raw.to_owned())
}
