use serde::Deserialize;

/// List responses arrive either as a bare array or wrapped in an
/// `{ "items": [...] }` envelope; the paginated form carries extra
/// bookkeeping fields that are ignored here.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Wrapped { items: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Wrapped { items } => items,
            ListPayload::Bare(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    detail: String,
}

/// Extract the `detail` field of an error body, if the body is the
/// standard `{ "detail": "..." }` envelope.
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_array() {
        let payload: ListPayload<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(payload.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn accepts_items_envelope() {
        let payload: ListPayload<u32> = serde_json::from_str(r#"{"items": [4, 5]}"#).unwrap();
        assert_eq!(payload.into_items(), vec![4, 5]);
    }

    #[test]
    fn accepts_paginated_envelope() {
        let payload: ListPayload<u32> =
            serde_json::from_str(r#"{"total": 2, "limit": 20, "offset": 0, "items": [6]}"#)
                .unwrap();
        assert_eq!(payload.into_items(), vec![6]);
    }

    #[test]
    fn error_detail_falls_through_on_other_shapes() {
        assert_eq!(
            error_detail(r#"{"detail": "Job not found"}"#),
            Some("Job not found".into())
        );
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(error_detail(r#"{"message": "nope"}"#), None);
    }
}
