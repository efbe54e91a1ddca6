//! Concurrent session registry and the per-session merge critical section.
//!
//! The map's entry guard is the per-session exclusion region: get-or-create
//! and merge both happen under it, so two fragments racing to create the
//! same session converge on one record and no caller observes a half-merged
//! record. Fragments for different sessions only contend at DashMap shard
//! granularity.

use dashmap::DashMap;
use tracing::info;

use formsignal_common::{EventFragment, EventKind, SessionEvent, ValidationError};

use crate::aggregate;
use crate::validate::validate;

/// Concurrent registry mapping session id → aggregated record.
///
/// Records are created lazily on first fragment and never evicted; the map
/// grows for process lifetime.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, SessionEvent>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Validate a fragment and fold it into its session's record, creating
    /// the record on first contact. Returns a snapshot of the post-merge
    /// state.
    pub fn process(&self, fragment: EventFragment) -> Result<SessionEvent, ValidationError> {
        let kind = validate(&fragment)?;

        let mut entry = self
            .sessions
            .entry(fragment.session_id.clone())
            .or_insert_with(|| {
                info!(
                    session_id = %fragment.session_id,
                    website_url = %fragment.website_url,
                    "Starting session"
                );
                aggregate::seed(&fragment)
            });
        apply(kind, entry.value_mut(), &fragment);
        let snapshot = entry.value().clone();
        drop(entry);

        audit(kind, &snapshot);
        Ok(snapshot)
    }

    /// Cloned snapshot of a session's record, if the session exists.
    pub fn get(&self, session_id: &str) -> Option<SessionEvent> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Dispatch: one merge operation per event kind.
fn apply(kind: EventKind, event: &mut SessionEvent, fragment: &EventFragment) {
    match kind {
        EventKind::ScreenResize => aggregate::apply_resize(event, fragment),
        EventKind::CopyAndPaste => aggregate::apply_paste(event, fragment),
        EventKind::TimeTaken => aggregate::apply_time_taken(event, fragment),
    }
}

/// One audit line per successful merge, carrying the full resulting record.
fn audit(kind: EventKind, event: &SessionEvent) {
    info!(
        kind = %kind,
        session_id = %event.session_id,
        record = ?event,
        "Fragment merged"
    );
    if kind == EventKind::TimeTaken {
        info!(session_id = %event.session_id, "Form submitted, session complete");
    }
}
