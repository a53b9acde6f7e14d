use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Product identifier issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog product as returned by the backend. The client never edits
/// `active` or `created_at`; they are server-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Payload for `POST /products`. The backend assigns the identifier and
/// timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProductDraft {
    /// Required-field check performed before anything is dispatched.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sku.trim().is_empty() {
            return Err(ValidationError::required("sku"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::required("name"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_sku_and_name() {
        let mut draft = ProductDraft {
            sku: "SKU-1".into(),
            name: "Widget".into(),
            description: None,
        };
        assert!(draft.validate().is_ok());

        draft.sku = "  ".into();
        assert_eq!(draft.validate(), Err(ValidationError::required("sku")));

        draft.sku = "SKU-1".into();
        draft.name = String::new();
        assert_eq!(draft.validate(), Err(ValidationError::required("name")));
    }

    #[test]
    fn product_tolerates_missing_optional_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": 7, "sku": "SKU-7", "name": "Widget"}"#).unwrap();
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.description, None);
        assert!(product.active);
        assert_eq!(product.created_at, None);
    }
}
