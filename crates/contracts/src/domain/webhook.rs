use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Webhook subscription identifier issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebhookId(pub i64);

impl WebhookId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for WebhookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outbound webhook subscription. `last_response_status` stays absent
/// until the backend has attempted at least one delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: WebhookId,
    pub url: String,
    pub event_types: Vec<String>,
    pub enabled: bool,
    #[serde(default)]
    pub last_response_status: Option<u16>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /webhooks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookDraft {
    pub url: String,
    pub event_types: Vec<String>,
    pub enabled: bool,
}

impl WebhookDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::required("url"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_url() {
        let draft = WebhookDraft {
            url: String::new(),
            event_types: vec!["product.created".into()],
            enabled: true,
        };
        assert_eq!(draft.validate(), Err(ValidationError::required("url")));
    }

    #[test]
    fn last_response_status_defaults_to_absent() {
        let webhook: Webhook = serde_json::from_str(
            r#"{"id": 1, "url": "http://x/wh", "event_types": ["product.created"], "enabled": true}"#,
        )
        .unwrap();
        assert_eq!(webhook.last_response_status, None);
    }
}
