//! Async client for the storefront backend.
//!
//! Thin request/response plumbing only: catalog snapshots in, orders out.
//! The bearer token is handed over by the auth layer — acquiring or
//! refreshing it is not this crate's concern. Errors carry request context
//! and are left to the caller; the search engine itself never sees them (an
//! unfetched catalog is just an empty snapshot).

use crate::catalog::Plant;
use crate::error::Result;
use anyhow::Context;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Assigned by the backend; absent on the create request.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Ids of the purchased records.
    #[serde(default)]
    pub product_ids: Vec<String>,
    pub total_price: f64,
}

/// HTTP client for the plants and orders endpoints.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl StoreClient {
    /// Builds a client against `base_url` (scheme + host, no trailing slash
    /// required).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Attaches the bearer token supplied by the auth layer; sent on every
    /// subsequent request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Fetches the full catalog snapshot.
    pub async fn fetch_plants(&self) -> Result<Vec<Plant>> {
        let plants: Vec<Plant> = self
            .request(Method::GET, "/api/plants")
            .send()
            .await
            .context("fetching catalog")?
            .error_for_status()
            .context("catalog request rejected")?
            .json()
            .await
            .context("decoding catalog payload")?;

        tracing::debug!(count = plants.len(), "fetched catalog snapshot");
        Ok(plants)
    }

    pub async fn fetch_plant(&self, id: &str) -> Result<Plant> {
        self.request(Method::GET, &format!("/api/plants/{id}"))
            .send()
            .await
            .with_context(|| format!("fetching plant {id}"))?
            .error_for_status()
            .with_context(|| format!("plant {id} request rejected"))?
            .json()
            .await
            .context("decoding plant payload")
    }

    /// Creates a record (admin dashboard).
    pub async fn create_plant(&self, plant: &Plant) -> Result<Plant> {
        self.request(Method::POST, "/api/plants/create-plant")
            .json(plant)
            .send()
            .await
            .context("creating plant")?
            .error_for_status()
            .context("create-plant request rejected")?
            .json()
            .await
            .context("decoding created plant")
    }

    /// Updates a record in place (admin dashboard).
    pub async fn update_plant(&self, id: &str, plant: &Plant) -> Result<Plant> {
        self.request(Method::PUT, &format!("/api/plants/edit/{id}"))
            .json(plant)
            .send()
            .await
            .with_context(|| format!("updating plant {id}"))?
            .error_for_status()
            .with_context(|| format!("update of plant {id} rejected"))?
            .json()
            .await
            .context("decoding updated plant")
    }

    pub async fn delete_plant(&self, id: &str) -> Result<()> {
        self.request(Method::DELETE, &format!("/api/plants/{id}"))
            .send()
            .await
            .with_context(|| format!("deleting plant {id}"))?
            .error_for_status()
            .with_context(|| format!("delete of plant {id} rejected"))?;
        Ok(())
    }

    /// Submits a checkout order.
    pub async fn create_order(&self, order: &Order) -> Result<Order> {
        self.request(Method::POST, "/api/orders")
            .json(order)
            .send()
            .await
            .context("creating order")?
            .error_for_status()
            .context("create-order request rejected")?
            .json()
            .await
            .context("decoding created order")
    }

    /// Orders previously placed under `email`.
    pub async fn orders_by_email(&self, email: &str) -> Result<Vec<Order>> {
        self.request(Method::GET, &format!("/api/orders/email/{email}"))
            .send()
            .await
            .with_context(|| format!("fetching orders for {email}"))?
            .error_for_status()
            .with_context(|| format!("orders request for {email} rejected"))?
            .json()
            .await
            .context("decoding orders payload")
    }
}
