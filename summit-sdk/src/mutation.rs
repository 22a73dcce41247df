//! One-shot mutations with collection invalidation.
//!
//! Every successful mutation invalidates all cached pages of its resource,
//! which is the cache's only consistency guarantee. Nothing is applied
//! optimistically: state is never marked mutated before the backend
//! confirms, and review actions a record's current status forbids are
//! rejected client-side without issuing a request.

use crate::client::ResourceHandle;
use crate::error::{PortalError, Result};
use serde::Deserialize;
use serde_json::json;
use summit_core::{Action, Lifecycle, Resource, Tracked};

/// Acknowledgement returned by action endpoints that do not echo a record.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub status: String,
}

impl<T: Resource> ResourceHandle<T> {
    pub async fn create(&self, record: &T) -> Result<T> {
        Self::ensure_valid(record)?;
        let value = self
            .transport
            .post(T::PATH, serde_json::to_value(record)?)
            .await?;
        self.store.invalidate(T::PATH).await;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn update(&self, record: &T) -> Result<T> {
        Self::ensure_valid(record)?;
        let path = format!("{}/{}", T::PATH, record.id());
        let value = self
            .transport
            .put(&path, serde_json::to_value(record)?)
            .await?;
        self.store.invalidate(T::PATH).await;
        Ok(serde_json::from_value(value)?)
    }

    /// Malformed input never reaches the backend.
    fn ensure_valid(record: &T) -> Result<()> {
        let errors = record.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(PortalError::Validation { errors })
        }
    }

    pub async fn delete(&self, id: u64) -> Result<Ack> {
        let path = format!("{}/delete", T::PATH);
        let value = self.transport.post(&path, json!({ "id": id })).await?;
        self.store.invalidate(T::PATH).await;
        Ok(serde_json::from_value(value)?)
    }
}

impl<T: Tracked> ResourceHandle<T> {
    pub async fn accept(&self, record: &T) -> Result<Ack> {
        self.review(record, Action::Accept, "accept").await
    }

    pub async fn refuse(&self, record: &T) -> Result<Ack> {
        self.review(record, Action::Refuse, "refuse").await
    }

    pub async fn cancel(&self, record: &T) -> Result<Ack> {
        self.review(record, Action::Cancel, "cancel").await
    }

    async fn review(&self, record: &T, action: Action, endpoint: &str) -> Result<Ack> {
        let status = record.status();
        if !status.allows(action) {
            tracing::warn!(%action, status = status.label(), "action refused client-side");
            return Err(PortalError::ActionNotAllowed {
                action,
                status: status.label(),
            });
        }

        let path = format!("{}/{}", T::PATH, endpoint);
        let value = self
            .transport
            .post(&path, json!({ "id": record.id() }))
            .await?;
        self.store.invalidate(T::PATH).await;
        Ok(serde_json::from_value(value)?)
    }
}
