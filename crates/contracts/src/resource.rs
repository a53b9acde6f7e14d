//! Tagged union over the three managed resource variants.
//!
//! The sync engine is written once against `Resource`/`ResourceKind`; the
//! per-variant types stay in `domain`.

use serde_json::{json, Value};

use crate::domain::job::{Job, JobId};
use crate::domain::product::{Product, ProductDraft, ProductId};
use crate::domain::webhook::{Webhook, WebhookDraft, WebhookId};
use crate::envelope::ListPayload;
use crate::error::ValidationError;

/// The kind of managed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Product,
    Webhook,
    Job,
}

impl ResourceKind {
    /// Collection path on the backend, relative to the API base.
    pub fn collection_path(self) -> &'static str {
        match self {
            ResourceKind::Product => "/products",
            ResourceKind::Webhook => "/webhooks",
            ResourceKind::Job => "/jobs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Product => "Product",
            ResourceKind::Webhook => "Webhook",
            ResourceKind::Job => "Job",
        }
    }

    /// Decode a list response body (bare array or `items` envelope) into
    /// resources of this kind.
    pub fn decode_list(self, value: Value) -> Result<Vec<Resource>, serde_json::Error> {
        Ok(match self {
            ResourceKind::Product => serde_json::from_value::<ListPayload<Product>>(value)?
                .into_items()
                .into_iter()
                .map(Resource::Product)
                .collect(),
            ResourceKind::Webhook => serde_json::from_value::<ListPayload<Webhook>>(value)?
                .into_items()
                .into_iter()
                .map(Resource::Webhook)
                .collect(),
            ResourceKind::Job => serde_json::from_value::<ListPayload<Job>>(value)?
                .into_items()
                .into_iter()
                .map(Resource::Job)
                .collect(),
        })
    }

    /// Decode a single-resource response body.
    pub fn decode_one(self, value: Value) -> Result<Resource, serde_json::Error> {
        Ok(match self {
            ResourceKind::Product => Resource::Product(serde_json::from_value(value)?),
            ResourceKind::Webhook => Resource::Webhook(serde_json::from_value(value)?),
            ResourceKind::Job => Resource::Job(serde_json::from_value(value)?),
        })
    }
}

/// Identifier of a resource, uniform across variants. Products and
/// webhooks use numeric ids; jobs use UUIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceId {
    Num(i64),
    Job(JobId),
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceId::Num(n) => write!(f, "{}", n),
            ResourceId::Job(id) => write!(f, "{}", id),
        }
    }
}

impl From<ProductId> for ResourceId {
    fn from(id: ProductId) -> Self {
        ResourceId::Num(id.0)
    }
}

impl From<WebhookId> for ResourceId {
    fn from(id: WebhookId) -> Self {
        ResourceId::Num(id.0)
    }
}

impl From<JobId> for ResourceId {
    fn from(id: JobId) -> Self {
        ResourceId::Job(id)
    }
}

/// One managed resource instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Product(Product),
    Webhook(Webhook),
    Job(Job),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Product(_) => ResourceKind::Product,
            Resource::Webhook(_) => ResourceKind::Webhook,
            Resource::Job(_) => ResourceKind::Job,
        }
    }

    pub fn id(&self) -> ResourceId {
        match self {
            Resource::Product(p) => p.id.into(),
            Resource::Webhook(w) => w.id.into(),
            Resource::Job(j) => j.job_id.into(),
        }
    }
}

/// Creation payload for the variants that support client-side creation.
/// Jobs are created by the upload endpoint, never directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceDraft {
    Product(ProductDraft),
    Webhook(WebhookDraft),
}

impl ResourceDraft {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceDraft::Product(_) => ResourceKind::Product,
            ResourceDraft::Webhook(_) => ResourceKind::Webhook,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ResourceDraft::Product(d) => d.validate(),
            ResourceDraft::Webhook(d) => d.validate(),
        }
    }

    /// JSON body for the create request.
    pub fn to_body(&self) -> Value {
        match self {
            ResourceDraft::Product(d) => json!({
                "sku": d.sku,
                "name": d.name,
                "description": d.description,
            }),
            ResourceDraft::Webhook(d) => json!({
                "url": d.url,
                "event_types": d.event_types,
                "enabled": d.enabled,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_list_handles_both_shapes() {
        let bare = json!([{"id": 1, "sku": "A", "name": "a"}]);
        let wrapped = json!({"items": [{"id": 2, "sku": "B", "name": "b"}]});

        let from_bare = ResourceKind::Product.decode_list(bare).unwrap();
        let from_wrapped = ResourceKind::Product.decode_list(wrapped).unwrap();
        assert_eq!(from_bare.len(), 1);
        assert_eq!(from_wrapped.len(), 1);
        assert_eq!(from_bare[0].id(), ResourceId::Num(1));
        assert_eq!(from_wrapped[0].id(), ResourceId::Num(2));
    }

    #[test]
    fn product_body_keeps_null_description() {
        let draft = ResourceDraft::Product(ProductDraft {
            sku: "SKU-1".into(),
            name: "Widget".into(),
            description: None,
        });
        assert_eq!(
            draft.to_body(),
            json!({"sku": "SKU-1", "name": "Widget", "description": null})
        );
    }

    #[test]
    fn item_paths_compose_from_kind_and_id() {
        let path = format!(
            "{}/{}",
            ResourceKind::Product.collection_path(),
            ResourceId::Num(42)
        );
        assert_eq!(path, "/products/42");
    }
}
