//! JSON response envelope shared by every endpoint.
//!
//! Successful responses carry an optional `message` and an optional `data`
//! payload; absent members are omitted rather than serialised as `null`.

use serde::Serialize;

/// `{ message?, data? }` success body.
///
/// # Examples
/// ```
/// use backend::inbound::http::envelope::Envelope;
///
/// let body = serde_json::to_value(Envelope::data(vec![1, 2])).expect("serialise");
/// assert_eq!(body, serde_json::json!({"data": [1, 2]}));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Payload without a message.
    pub fn data(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
        }
    }

    /// Payload with a confirmation message.
    pub fn with_message(message: &'static str, data: T) -> Self {
        Self {
            message: Some(message),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Confirmation message without a payload.
    pub fn message(message: &'static str) -> Self {
        Self {
            message: Some(message),
            data: None,
        }
    }
}
