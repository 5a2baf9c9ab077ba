//! Transport trait describing the remote content API.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::resource::Resource;

#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("resource not found")]
    NotFound,
    #[error("transport failure: {message}")]
    Transport { message: String },
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Pagination/search/tag parameters driving a list fetch.
///
/// Empty `search`/`tag` mean unfiltered; all three parameters are always sent
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
    pub tag: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            tag: String::new(),
        }
    }
}

/// One page of summaries, replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "S: Deserialize<'de>"))]
pub struct ListResult<S> {
    #[serde(default)]
    pub items: Vec<S>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl<S> ListResult<S> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
        }
    }
}

/// Remote operations for one resource family.
///
/// Every call is an independent network round trip; only `create` is
/// non-idempotent, which is why callers must keep at most one mutating
/// operation in flight.
#[async_trait]
pub trait ResourceClient<R: Resource>: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<ListResult<R::Summary>, ClientError>;

    async fn list_tags(&self) -> Result<Vec<String>, ClientError>;

    async fn get(&self, id: &str) -> Result<R, ClientError>;

    /// Persist a new resource; the identifier in the response is authoritative.
    async fn create(&self, draft: &R) -> Result<R, ClientError>;

    /// Replace the stored resource with the full edited state.
    async fn update(&self, id: &str, resource: &R) -> Result<R, ClientError>;

    async fn delete(&self, id: &str) -> Result<(), ClientError>;
}
