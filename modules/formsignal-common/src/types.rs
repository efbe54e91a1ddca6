use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// --- Wire Types ---

/// A width/height pair as reported by the client. Values are unit-less
/// strings taken verbatim from the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    pub width: String,
    pub height: String,
}

/// The three recognized client event kinds, as declared on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ScreenResize,
    CopyAndPaste,
    TimeTaken,
}

impl FromStr for EventKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "screenResize" => Ok(Self::ScreenResize),
            "copyAndPaste" => Ok(Self::CopyAndPaste),
            "timeTaken" => Ok(Self::TimeTaken),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ScreenResize => "screenResize",
            Self::CopyAndPaste => "copyAndPaste",
            Self::TimeTaken => "timeTaken",
        };
        f.write_str(s)
    }
}

/// One inbound partial-event payload referencing a session.
///
/// Transient input decoded from a POST body, never stored. `event_type` is
/// kept as the raw wire string so an unrecognized kind surfaces as a
/// validation error rather than a decode error. Payload fields default so
/// each event kind may omit the fields belonging to the other kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventFragment {
    pub website_url: String,
    pub session_id: String,
    pub event_type: String,
    pub resize_from: Dimension,
    pub resize_to: Dimension,
    /// Form completion time in seconds.
    pub time_taken: u64,
    pub pasted: bool,
    pub form_id: String,
}

// --- Session Record ---

/// The aggregated, canonical state for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEvent {
    pub website_url: String,
    pub session_id: String,
    pub resize_from: Dimension,
    pub resize_to: Dimension,
    /// Per-field paste flags, owned by this record alone. Entries are
    /// first-write-wins within the session.
    pub copy_and_paste: HashMap<String, bool>,
    /// Form completion time in seconds.
    pub form_completion_time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_round_trips_through_wire_strings() {
        for kind in [
            EventKind::ScreenResize,
            EventKind::CopyAndPaste,
            EventKind::TimeTaken,
        ] {
            assert_eq!(kind.to_string().parse::<EventKind>(), Ok(kind));
        }
    }

    #[test]
    fn event_kind_rejects_unknown_strings() {
        assert!("mouseMove".parse::<EventKind>().is_err());
        assert!("".parse::<EventKind>().is_err());
    }

    #[test]
    fn fragment_decodes_with_missing_payload_fields() {
        let fragment: EventFragment = serde_json::from_str(
            r#"{"websiteUrl":"https://example.com","sessionId":"s1","eventType":"timeTaken","timeTaken":72}"#,
        )
        .unwrap();

        assert_eq!(fragment.time_taken, 72);
        assert_eq!(fragment.resize_from, Dimension::default());
        assert!(fragment.form_id.is_empty());
        assert!(!fragment.pasted);
    }

    #[test]
    fn session_event_serializes_camel_case() {
        let event = SessionEvent {
            website_url: "https://example.com".to_string(),
            session_id: "s1".to_string(),
            form_completion_time: 12,
            ..Default::default()
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["websiteUrl"], "https://example.com");
        assert_eq!(value["formCompletionTime"], 12);
        assert!(value["copyAndPaste"].as_object().unwrap().is_empty());
    }
}
