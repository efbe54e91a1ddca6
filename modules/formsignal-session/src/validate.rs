//! Fragment-level structural checks.
//!
//! Failures short-circuit before any store access: a rejected fragment
//! never creates or mutates a session record.

use formsignal_common::{EventFragment, EventKind, ValidationError};

/// Check the fragment's required fields and resolve its declared kind.
///
/// The returned kind is the dispatch decision: it selects exactly one merge
/// operation inside the store's critical section. An unrecognized
/// `eventType` is rejected here rather than silently ignored.
pub fn validate(fragment: &EventFragment) -> Result<EventKind, ValidationError> {
    if fragment.website_url.is_empty() {
        return Err(ValidationError::MissingWebsiteUrl);
    }
    if fragment.session_id.is_empty() {
        return Err(ValidationError::MissingSessionId);
    }
    if fragment.event_type.is_empty() {
        return Err(ValidationError::MissingEventType);
    }

    let kind = fragment
        .event_type
        .parse::<EventKind>()
        .map_err(|()| ValidationError::UnknownEventType(fragment.event_type.clone()))?;

    if kind == EventKind::CopyAndPaste && fragment.form_id.is_empty() {
        return Err(ValidationError::MissingFormId);
    }

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(event_type: &str) -> EventFragment {
        EventFragment {
            website_url: "https://example.com".to_string(),
            session_id: "s1".to_string(),
            event_type: event_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_each_recognized_kind() {
        assert_eq!(
            validate(&fragment("screenResize")),
            Ok(EventKind::ScreenResize)
        );
        assert_eq!(validate(&fragment("timeTaken")), Ok(EventKind::TimeTaken));

        let mut paste = fragment("copyAndPaste");
        paste.form_id = "inputEmail".to_string();
        assert_eq!(validate(&paste), Ok(EventKind::CopyAndPaste));
    }

    #[test]
    fn rejects_missing_website_url() {
        let mut f = fragment("screenResize");
        f.website_url.clear();
        assert_eq!(validate(&f), Err(ValidationError::MissingWebsiteUrl));
    }

    #[test]
    fn rejects_missing_session_id() {
        let mut f = fragment("screenResize");
        f.session_id.clear();
        assert_eq!(validate(&f), Err(ValidationError::MissingSessionId));
    }

    #[test]
    fn rejects_missing_event_type() {
        assert_eq!(
            validate(&fragment("")),
            Err(ValidationError::MissingEventType)
        );
    }

    #[test]
    fn rejects_unknown_event_type() {
        assert_eq!(
            validate(&fragment("keyPress")),
            Err(ValidationError::UnknownEventType("keyPress".to_string()))
        );
    }

    #[test]
    fn rejects_paste_without_form_id() {
        assert_eq!(
            validate(&fragment("copyAndPaste")),
            Err(ValidationError::MissingFormId)
        );
    }
}
