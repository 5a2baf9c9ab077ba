//! HTTP implementation of the transport trait: request construction,
//! response decoding, and failure classification over `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::application::transport::{ClientError, ListQuery, ListResult, ResourceClient};
use crate::domain::resource::Resource;

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::transport(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::transport(format!("invalid URL: {err}"))
    }
}

/// Stateless client for the content API, bound to a single base origin
/// resolved once at startup.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: &Url) -> Result<Self, ClientError> {
        let base = base.join("/")?;
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("vitrine/", env!("CARGO_PKG_VERSION"))
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<T, ClientError> {
        let resp = self.send(method, path, query, body).await?;
        Self::decode(resp).await
    }

    async fn request_unit(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
    ) -> Result<(), ClientError> {
        let resp = self.send(method, path, query, None).await?;
        Self::check_status(resp).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ClientError> {
        let mut url = self.url(path)?;
        if let Some(q) = query {
            url.set_query(None);
            let mut qp = url.query_pairs_mut();
            for (k, v) in q {
                qp.append_pair(k, v);
            }
        }

        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(&b);
        }
        Ok(req.send().await?)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let resp = Self::check_status(resp).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|err| ClientError::transport(format!("failed to parse body: {err}")))
    }

    async fn check_status(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        let text = resp.text().await.unwrap_or_default();
        tracing::debug!(%status, body = %text, "request failed");
        Err(ClientError::transport(format!(
            "status {status} body {text}"
        )))
    }

    fn item_path<R: Resource>(id: &str) -> String {
        format!("{}/{id}", R::BASE_PATH)
    }

    fn to_body<R: Resource>(resource: &R) -> Result<serde_json::Value, ClientError> {
        serde_json::to_value(resource)
            .map_err(|err| ClientError::transport(format!("failed to encode body: {err}")))
    }
}

#[async_trait]
impl<R: Resource> ResourceClient<R> for ApiClient {
    async fn list(&self, query: &ListQuery) -> Result<ListResult<R::Summary>, ClientError> {
        // Empty search/tag are sent as empty strings, meaning unfiltered.
        let q = [
            ("page", query.page.to_string()),
            ("search", query.search.clone()),
            ("tag", query.tag.clone()),
        ];
        self.request(Method::GET, R::BASE_PATH, Some(&q), None).await
    }

    async fn list_tags(&self) -> Result<Vec<String>, ClientError> {
        let path = format!("{}/tags", R::BASE_PATH);
        self.request(Method::GET, &path, None, None).await
    }

    async fn get(&self, id: &str) -> Result<R, ClientError> {
        self.request(Method::GET, &Self::item_path::<R>(id), None, None)
            .await
    }

    async fn create(&self, draft: &R) -> Result<R, ClientError> {
        self.request(Method::POST, R::BASE_PATH, None, Some(Self::to_body(draft)?))
            .await
    }

    async fn update(&self, id: &str, resource: &R) -> Result<R, ClientError> {
        self.request(
            Method::PATCH,
            &Self::item_path::<R>(id),
            None,
            Some(Self::to_body(resource)?),
        )
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.request_unit(Method::DELETE, &Self::item_path::<R>(id), None)
            .await
    }
}
