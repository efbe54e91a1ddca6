//! Merge logic: folds one validated fragment into a session's record.
//!
//! Everything here is pure; the store calls these inside its per-session
//! critical section.

use std::collections::HashMap;

use formsignal_common::{EventFragment, SessionEvent};

/// Seed a new record from the first fragment seen for a session.
///
/// Copies the identity fields plus whatever resize/time values the fragment
/// happens to carry; fields it doesn't carry stay empty/zero. The paste map
/// starts empty and belongs to this record alone.
pub fn seed(fragment: &EventFragment) -> SessionEvent {
    SessionEvent {
        website_url: fragment.website_url.clone(),
        session_id: fragment.session_id.clone(),
        resize_from: fragment.resize_from.clone(),
        resize_to: fragment.resize_to.clone(),
        copy_and_paste: HashMap::new(),
        form_completion_time: fragment.time_taken,
    }
}

/// Overwrite both dimension pairs. Last write wins.
pub fn apply_resize(event: &mut SessionEvent, fragment: &EventFragment) {
    event.resize_from = fragment.resize_from.clone();
    event.resize_to = fragment.resize_to.clone();
}

/// Record a paste flag for a form field. First write wins: once a field's
/// status is set, later fragments for the same field leave it unchanged.
pub fn apply_paste(event: &mut SessionEvent, fragment: &EventFragment) {
    event
        .copy_and_paste
        .entry(fragment.form_id.clone())
        .or_insert(fragment.pasted);
}

/// Overwrite the completion time. Last write wins.
pub fn apply_time_taken(event: &mut SessionEvent, fragment: &EventFragment) {
    event.form_completion_time = fragment.time_taken;
}
