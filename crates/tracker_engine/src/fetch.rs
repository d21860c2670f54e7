use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracker_core::{FetchOutcome, FetchRequest, Holding, ListingItem, StockInfo};

use crate::client::ApiClient;
use crate::decode::decode_page;

/// Where a listing lives and which field of the page body holds its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingEndpoint {
    pub path: &'static str,
    pub items_field: &'static str,
}

impl ListingEndpoint {
    pub const STOCKS: Self = Self {
        path: "/api/stocks",
        items_field: "content",
    };

    pub const HOLDINGS: Self = Self {
        path: "/api/portfolio/holdings",
        items_field: "holdings",
    };
}

/// Item types that know which endpoint serves them.
pub trait Listed: ListingItem + DeserializeOwned + Send + 'static {
    const ENDPOINT: ListingEndpoint;
}

impl Listed for StockInfo {
    const ENDPOINT: ListingEndpoint = ListingEndpoint::STOCKS;
}

impl Listed for Holding {
    const ENDPOINT: ListingEndpoint = ListingEndpoint::HOLDINGS;
}

#[async_trait::async_trait]
pub trait ListingFetcher<T>: Send + Sync {
    /// Runs one query. Never retries; every failure is folded into the outcome.
    async fn fetch(&self, request: &FetchRequest) -> FetchOutcome<T>;
}

pub struct ReqwestListingFetcher<T> {
    client: Arc<ApiClient>,
    endpoint: ListingEndpoint,
    _item: PhantomData<fn() -> T>,
}

impl<T: Listed> ReqwestListingFetcher<T> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self::with_endpoint(client, T::ENDPOINT)
    }
}

impl<T> ReqwestListingFetcher<T> {
    pub fn with_endpoint(client: Arc<ApiClient>, endpoint: ListingEndpoint) -> Self {
        Self {
            client,
            endpoint,
            _item: PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<T> ListingFetcher<T> for ReqwestListingFetcher<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch(&self, request: &FetchRequest) -> FetchOutcome<T> {
        let mut params = vec![("page", request.page.to_string())];
        if let Some(search) = request.search() {
            params.push(("search", search.to_string()));
        }

        match self.client.get(self.endpoint.path, &params).await {
            Ok(body) => decode_page(&body, self.endpoint.items_field),
            Err(reason) => FetchOutcome::failure(reason),
        }
    }
}
