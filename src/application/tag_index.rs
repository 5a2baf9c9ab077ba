//! Tag facet loading for the list views.

use std::sync::Arc;

use crate::domain::resource::Resource;

use super::transport::ResourceClient;

/// Fetches the distinct tag set once per list invocation.
///
/// Failure degrades silently to an empty facet: the list keeps working
/// unfiltered by tag, and no retry is attempted.
pub struct TagIndexLoader<R: Resource> {
    client: Arc<dyn ResourceClient<R>>,
}

impl<R: Resource> TagIndexLoader<R> {
    pub fn new(client: Arc<dyn ResourceClient<R>>) -> Self {
        Self { client }
    }

    pub async fn load(&self) -> Vec<String> {
        match self.client.list_tags().await {
            Ok(tags) => tags,
            Err(err) => {
                tracing::warn!(kind = R::KIND, error = %err, "tag facet fetch failed; filtering disabled");
                Vec::new()
            }
        }
    }
}
