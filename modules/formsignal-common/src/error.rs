use thiserror::Error;

/// Fragment-level validation failures.
///
/// Always caller-visible: the transport maps these to a 4xx response. They
/// never crash the process and never touch other sessions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: websiteUrl")]
    MissingWebsiteUrl,

    #[error("missing required field: sessionId")]
    MissingSessionId,

    #[error("missing required field: eventType")]
    MissingEventType,

    #[error("unrecognized eventType: {0}")]
    UnknownEventType(String),

    #[error("copyAndPaste event missing required field: formId")]
    MissingFormId,
}
