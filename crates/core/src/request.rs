use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An already-parsed summary of the HTTP request that was in flight when the
/// exception was raised.
///
/// Callers build this from their own framework's request type; notifiers never
/// see a raw request environment. Its presence in a
/// [`NotificationContext`](crate::NotificationContext) is what marks a failure
/// as request-bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestInfo {
    /// HTTP method, e.g. `GET`.
    pub method: String,

    /// Original request URL.
    pub url: String,

    /// Request parameters, already filtered of sensitive values by the
    /// caller. Sorted, so payloads built from the same request are identical.
    pub parameters: BTreeMap<String, String>,
}

impl RequestInfo {
    /// Create a request summary with no parameters.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Add a single filtered request parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}
