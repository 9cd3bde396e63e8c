use uuid::Uuid;

/// Runtime context for a single gateway request
///
/// Created by the server middleware before the handler runs. The
/// identifier exists for log correlation and is echoed in the response
/// body; it is never persisted or reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Identifier generated for this request
    pub request_id: Uuid,
}

impl RequestContext {
    /// Create a context with a freshly generated request identifier
    #[must_use]
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
