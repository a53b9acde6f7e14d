//! Mutation coordinator: create/delete a resource and keep the store
//! reconciled with the server afterwards.
//!
//! Creates apply the server-returned resource (the server is
//! authoritative for generated fields); deletes touch the store only
//! after the server confirmed, never speculatively. Either mutation is
//! followed by a full refetch of the variant's collection; a failed
//! refetch keeps the local change and downgrades the feedback to a
//! staleness warning.

use contracts::error::{MutationError, TransportError};
use contracts::resource::{Resource, ResourceDraft, ResourceId, ResourceKind};
use leptos::prelude::*;

use crate::shared::session::Session;
use crate::shared::transport::{Method, Payload, Transport};

#[derive(Clone, Copy)]
pub struct MutationCoordinator<T> {
    transport: T,
    session: Session,
}

impl<T: Transport> MutationCoordinator<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self { transport, session }
    }

    /// User-triggered full list fetch. Starting a new action drops the
    /// previous feedback message, whatever it was.
    pub async fn refresh(&self, kind: ResourceKind) -> Result<(), TransportError> {
        self.session.clear_feedback();
        self.fetch_collection(kind).await
    }

    async fn fetch_collection(&self, kind: ResourceKind) -> Result<(), TransportError> {
        let value = self
            .transport
            .request(Method::Get, kind.collection_path(), None)
            .await?;
        let items = kind
            .decode_list(value)
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        self.session.store.update(|s| s.replace_all(kind, items));
        Ok(())
    }

    /// Validate locally, dispatch, then upsert the server-returned
    /// resource and reconcile the collection.
    pub async fn create(&self, draft: ResourceDraft) -> Result<Resource, MutationError> {
        self.session.clear_feedback();

        if let Err(e) = draft.validate() {
            self.session.report_error(e.to_string());
            return Err(e.into());
        }

        let kind = draft.kind();
        let value = match self
            .transport
            .request(
                Method::Post,
                kind.collection_path(),
                Some(Payload::Json(draft.to_body())),
            )
            .await
        {
            Ok(value) => value,
            Err(e) => {
                self.session.report_error(e.user_message());
                return Err(e.into());
            }
        };

        let created = match kind.decode_one(value) {
            Ok(resource) => resource,
            Err(e) => {
                let e = TransportError::Decode(e.to_string());
                self.session.report_error(e.user_message());
                return Err(e.into());
            }
        };

        self.session.store.update(|s| s.upsert(created.clone()));
        let note = format!("{} created", kind.label());
        self.session.report_success(&note);
        self.reconcile(kind, &note).await;
        Ok(created)
    }

    /// Delete on the server first; the store entry goes away only once
    /// the server confirmed.
    pub async fn delete(&self, kind: ResourceKind, id: ResourceId) -> Result<(), MutationError> {
        self.session.clear_feedback();

        let path = format!("{}/{}", kind.collection_path(), id);
        if let Err(e) = self.transport.request(Method::Delete, &path, None).await {
            self.session.report_error(e.user_message());
            return Err(e.into());
        }

        self.session.store.update(|s| s.remove(kind, &id));
        let note = format!("{} deleted", kind.label());
        self.session.report_success(&note);
        self.reconcile(kind, &note).await;
        Ok(())
    }

    /// Post-mutation refetch. It must not clear feedback (the success
    /// message of the mutation was just posted). Failure keeps the
    /// already-applied local change; the operator sees the confirmed
    /// outcome plus a warning that the list view may be stale.
    async fn reconcile(&self, kind: ResourceKind, note: &str) {
        if let Err(e) = self.fetch_collection(kind).await {
            log::warn!("refetch after mutation failed: {}", e);
            self.session.report_error(format!(
                "{}, but the list view may be stale: {}",
                note,
                e.user_message()
            ));
        }
    }
}
