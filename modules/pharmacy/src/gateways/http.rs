//! HTTP implementation of the remote resource capability.
//!
//! JSON over the usual REST shape: `GET/POST {base}/{path}` and
//! `PUT/DELETE {base}/{path}/{id}`. Status mapping into the sync error
//! taxonomy: 404 is a stale identity, 400/422 a backend validation
//! rejection, anything else (including transport failures) a network
//! error.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use synckit::{ClientError, Draft, Resource, ResourceClient};

use crate::contract::model::{Product, User};
use crate::domain::draft::{ProductDraft, UserDraft};

/// Binds a resource type to its draft payload and collection path.
pub trait RestResource: Resource + DeserializeOwned {
    type Draft: Draft<Self> + Serialize;
    const PATH: &'static str;
}

impl RestResource for Product {
    type Draft = ProductDraft;
    const PATH: &'static str = "products";
}

impl RestResource for User {
    type Draft = UserDraft;
    const PATH: &'static str = "users";
}

/// Shared HTTP client bound to one API base URL. Cheap to clone; the
/// timeout lives here, not in the sync core.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base: Url,
}

impl RestClient {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::network(e.to_string()))?;
        Ok(Self { http, base })
    }

    /// The capability for one resource type, e.g.
    /// `rest.resource::<Product>()`.
    pub fn resource<T: RestResource>(&self) -> HttpResource<T> {
        HttpResource {
            rest: self.clone(),
            _marker: PhantomData,
        }
    }

    fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path)
    }

    fn item_url(&self, path: &str, id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.collection_url(path), id)
    }
}

/// `ResourceClient` over the wire for one resource type.
pub struct HttpResource<T> {
    rest: RestClient,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpResource<T> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest.clone(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T: RestResource> ResourceClient<T> for HttpResource<T> {
    type Draft = T::Draft;

    #[instrument(skip(self), fields(path = T::PATH))]
    async fn list(&self) -> Result<Vec<T>, ClientError> {
        let url = self.rest.collection_url(T::PATH);
        let resp = self.rest.http.get(&url).send().await.map_err(transport)?;
        let resp = check(resp).await?;
        let items: Vec<T> = resp.json().await.map_err(transport)?;
        debug!(count = items.len(), "listed collection");
        Ok(items)
    }

    #[instrument(skip_all, fields(path = T::PATH))]
    async fn create(&self, draft: &T::Draft) -> Result<T, ClientError> {
        let url = self.rest.collection_url(T::PATH);
        let resp = self
            .rest
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        let resp = check(resp).await?;
        resp.json().await.map_err(transport)
    }

    #[instrument(skip_all, fields(path = T::PATH, id = %id))]
    async fn update(&self, id: T::Id, draft: &T::Draft) -> Result<T, ClientError> {
        let url = self.rest.item_url(T::PATH, id);
        let resp = self
            .rest
            .http
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        let resp = check(resp).await?;
        resp.json().await.map_err(transport)
    }

    #[instrument(skip_all, fields(path = T::PATH, id = %id))]
    async fn delete(&self, id: T::Id) -> Result<(), ClientError> {
        let url = self.rest.item_url(T::PATH, id);
        let resp = self.rest.http.delete(&url).send().await.map_err(transport)?;
        check(resp).await?;
        Ok(())
    }
}

fn transport(e: reqwest::Error) -> ClientError {
    ClientError::network(e.to_string())
}

/// Map a non-success status into the error taxonomy, pulling the body
/// text into the message where the backend bothered to send one.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().path().to_string();
    let body = resp.text().await.unwrap_or_default();
    match status {
        StatusCode::NOT_FOUND => Err(ClientError::not_found(url)),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            Err(ClientError::validation(if body.is_empty() {
                status.to_string()
            } else {
                body
            }))
        }
        _ => Err(ClientError::network(format!("{status}: {body}"))),
    }
}
