//! Single-resource editor state: fetch, local edits, save, delete.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{error::DomainError, resource::Resource};

use super::transport::{ClientError, ResourceClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    New,
    Loading,
    Ready,
    Saving,
    Deleting,
    Error,
}

/// Whether the caller should stay on the editor or navigate away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Stayed,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    Confirmed,
    Declined,
}

/// User-decision checkpoint required before a delete request goes out.
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    async fn confirm(&self, prompt: &str) -> DeleteDecision;
}

#[derive(Debug, Clone, Error)]
pub enum EditorError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Read-only view of the editor state handed to presentation.
#[derive(Debug)]
pub struct EditorSnapshot<'a, R> {
    pub resource: &'a R,
    pub loading: bool,
    pub saving: bool,
    pub deleting: bool,
    pub error: Option<&'a EditorError>,
    pub can_delete: bool,
}

/// Owns the resource currently being created or edited.
///
/// At most one mutating operation is in flight at a time: the async methods
/// take `&mut self` and every entry point refuses to start while the phase is
/// `Loading`, `Saving` or `Deleting`. `create` is non-idempotent, so that
/// discipline is what prevents a double submit from creating two resources.
pub struct DetailEditor<R: Resource> {
    client: Arc<dyn ResourceClient<R>>,
    resource: R,
    phase: EditorPhase,
    error: Option<EditorError>,
}

impl<R: Resource> DetailEditor<R> {
    /// Open the editor on the type's zero value, for creating a resource.
    pub fn new(client: Arc<dyn ResourceClient<R>>) -> Self {
        Self {
            client,
            resource: R::default(),
            phase: EditorPhase::New,
            error: None,
        }
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn error(&self) -> Option<&EditorError> {
        self.error.as_ref()
    }

    fn in_flight(&self) -> bool {
        matches!(
            self.phase,
            EditorPhase::Loading | EditorPhase::Saving | EditorPhase::Deleting
        )
    }

    /// Fetch an existing resource into the editor.
    ///
    /// On failure the editor shows the error as-is; no blank resource is
    /// substituted for the one that could not be fetched.
    pub async fn load(&mut self, id: &str) {
        if self.in_flight() {
            return;
        }
        self.phase = EditorPhase::Loading;
        match self.client.get(id).await {
            Ok(resource) => {
                self.resource = resource;
                self.error = None;
                self.phase = EditorPhase::Ready;
            }
            Err(err) => {
                tracing::debug!(kind = R::KIND, id, error = %err, "editor fetch failed");
                self.error = Some(err.into());
                self.phase = EditorPhase::Error;
            }
        }
    }

    /// Apply a local field edit. Ignored while an operation is in flight.
    pub fn edit(&mut self, apply: impl FnOnce(&mut R)) {
        if self.in_flight() {
            return;
        }
        apply(&mut self.resource);
    }

    /// Save the edited state: create when no identifier has been assigned
    /// yet, update otherwise.
    ///
    /// Validation failures never reach the transport; the editor stays in its
    /// current phase with the input intact.
    pub async fn submit(&mut self) -> EditorOutcome {
        if self.in_flight() {
            return EditorOutcome::Stayed;
        }
        if let Err(err) = self.resource.validate() {
            self.error = Some(err.into());
            return EditorOutcome::Stayed;
        }

        self.phase = EditorPhase::Saving;
        let outcome = match self.resource.id().map(str::to_owned) {
            None => self.client.create(&self.resource).await,
            Some(id) => self.client.update(&id, &self.resource).await,
        };
        match outcome {
            Ok(saved) => {
                tracing::info!(kind = R::KIND, id = saved.id(), "saved");
                // The server's copy, id included, is authoritative from here on.
                self.resource = saved;
                self.error = None;
                self.phase = EditorPhase::Ready;
                EditorOutcome::Done
            }
            Err(err) => {
                tracing::debug!(kind = R::KIND, error = %err, "save failed");
                self.error = Some(err.into());
                self.phase = EditorPhase::Error;
                EditorOutcome::Stayed
            }
        }
    }

    /// Delete the resource after an affirmative gate decision.
    ///
    /// Unavailable until the resource has been persisted; declining the gate
    /// issues no network call.
    pub async fn delete(&mut self, gate: &dyn ConfirmationGate) -> EditorOutcome {
        if self.in_flight() {
            return EditorOutcome::Stayed;
        }
        let Some(id) = self.resource.id().map(str::to_owned) else {
            return EditorOutcome::Stayed;
        };

        let prompt = format!("Are you sure you want to delete this {}?", R::KIND);
        if gate.confirm(&prompt).await == DeleteDecision::Declined {
            return EditorOutcome::Stayed;
        }

        self.phase = EditorPhase::Deleting;
        match self.client.delete(&id).await {
            Ok(()) => {
                tracing::info!(kind = R::KIND, id, "deleted");
                self.phase = EditorPhase::Ready;
                EditorOutcome::Done
            }
            Err(err) => {
                tracing::debug!(kind = R::KIND, id, error = %err, "delete failed");
                self.error = Some(err.into());
                self.phase = EditorPhase::Error;
                EditorOutcome::Stayed
            }
        }
    }

    pub fn snapshot(&self) -> EditorSnapshot<'_, R> {
        EditorSnapshot {
            resource: &self.resource,
            loading: self.phase == EditorPhase::Loading,
            saving: self.phase == EditorPhase::Saving,
            deleting: self.phase == EditorPhase::Deleting,
            error: self.error.as_ref(),
            can_delete: self.resource.id().is_some() && !self.in_flight(),
        }
    }
}
