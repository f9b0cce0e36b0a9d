//! In-band pending-translation marker.
//!
//! A leaf that still needs translation holds `"[TODO] <master text>"`. The
//! marker is the only record of translation status, so it stays greppable.

pub const PENDING_PREFIX: &str = "[TODO]";

/// Build the pending value for a leaf whose master text is `master_text`.
pub fn pending_marker(master_text: &str) -> String {
    format!("{} {}", PENDING_PREFIX, master_text)
}

pub fn is_pending(value: &str) -> bool {
    pending_source(value).is_some()
}

/// The master text embedded in a pending value, if `value` is one.
pub fn pending_source(value: &str) -> Option<&str> {
    value
        .strip_prefix(PENDING_PREFIX)
        .and_then(|rest| rest.strip_prefix(' '))
}
