//! Paginated, filtered list state for one resource family.

use std::sync::Arc;

use crate::domain::resource::Resource;

use super::transport::{ClientError, ListQuery, ListResult, ResourceClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Read-only view of the list state handed to presentation.
#[derive(Debug)]
pub struct ListSnapshot<'a, S> {
    pub items: &'a [S],
    pub page: u32,
    pub total_pages: u32,
    pub search: &'a str,
    pub tag: &'a str,
    pub loading: bool,
    pub error: Option<&'a ClientError>,
    pub can_prev: bool,
    pub can_next: bool,
}

/// Owns the current [`ListQuery`] and the last applied [`ListResult`].
///
/// Fetching is two-phase: [`begin`](Self::begin) parks the controller in
/// `Loading` and hands back the query generation, and
/// [`apply`](Self::apply) discards any outcome whose generation has since
/// been superseded. Responses therefore land in query-issuance order no
/// matter when they arrive.
pub struct ListController<R: Resource> {
    client: Arc<dyn ResourceClient<R>>,
    query: ListQuery,
    generation: u64,
    phase: ListPhase,
    result: ListResult<R::Summary>,
    error: Option<ClientError>,
}

impl<R: Resource> ListController<R> {
    pub fn new(client: Arc<dyn ResourceClient<R>>) -> Self {
        Self {
            client,
            query: ListQuery::default(),
            generation: 0,
            phase: ListPhase::Idle,
            result: ListResult::empty(),
            error: None,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn items(&self) -> &[R::Summary] {
        &self.result.items
    }

    pub fn total_pages(&self) -> u32 {
        self.result.total_pages
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    /// Move to another page. Pages start at 1.
    pub fn set_page(&mut self, page: u32) {
        let page = page.max(1);
        if page == self.query.page {
            return;
        }
        self.query.page = page;
        self.generation += 1;
    }

    /// Change the free-text filter; any page offset becomes meaningless and
    /// is reset to 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search == self.query.search {
            return;
        }
        self.query.search = search;
        self.query.page = 1;
        self.generation += 1;
    }

    /// Change the tag filter; resets the page like a search change.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if tag == self.query.tag {
            return;
        }
        self.query.tag = tag;
        self.query.page = 1;
        self.generation += 1;
    }

    /// Enter `Loading` and snapshot the query under its current generation.
    pub fn begin(&mut self) -> (u64, ListQuery) {
        self.phase = ListPhase::Loading;
        (self.generation, self.query.clone())
    }

    /// Apply a fetch outcome, unless the query has been superseded since
    /// [`begin`](Self::begin) handed out this generation.
    pub fn apply(
        &mut self,
        generation: u64,
        outcome: Result<ListResult<R::Summary>, ClientError>,
    ) {
        if generation != self.generation {
            tracing::debug!(
                kind = R::KIND,
                stale = generation,
                current = self.generation,
                "discarding stale list response"
            );
            return;
        }
        match outcome {
            Ok(result) => {
                self.result = result;
                self.error = None;
                self.phase = ListPhase::Loaded;
            }
            Err(err) => {
                tracing::debug!(kind = R::KIND, error = %err, "list fetch failed");
                self.result = ListResult::empty();
                self.error = Some(err);
                self.phase = ListPhase::Failed;
            }
        }
    }

    /// Run one begin → fetch → apply cycle for the current query.
    pub async fn refresh(&mut self) {
        let (generation, query) = self.begin();
        let outcome = self.client.list(&query).await;
        self.apply(generation, outcome);
    }

    pub fn can_go_prev(&self) -> bool {
        self.query.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.phase == ListPhase::Loaded && self.query.page < self.result.total_pages
    }

    pub fn snapshot(&self) -> ListSnapshot<'_, R::Summary> {
        ListSnapshot {
            items: &self.result.items,
            page: self.query.page,
            total_pages: self.result.total_pages,
            search: &self.query.search,
            tag: &self.query.tag,
            loading: self.phase == ListPhase::Loading,
            error: self.error.as_ref(),
            can_prev: self.can_go_prev(),
            can_next: self.can_go_next(),
        }
    }
}
