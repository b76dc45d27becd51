use crate::config::{Config, Credentials};
use crate::fetcher::OrderSource;
use crate::shipstation::error::ShipStationError;
use crate::shipstation::models::*;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use tracing::{debug, error};

/// ShipStation API Client
pub struct ShipStationClient {
    base_url: String,
    credentials: Credentials,
    client: reqwest::Client,
}

impl ShipStationClient {
    /// Create a new ShipStation client
    pub fn new(config: &Config, credentials: Credentials) -> Result<Self, ShipStationError> {
        let base_url = config.api_url.trim_end_matches('/').to_string();

        if credentials.api_key.is_empty() || credentials.api_secret.is_empty() {
            return Err(ShipStationError::AuthenticationError(
                "ShipStation API key and secret are required".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ShipStationError::NetworkError)?;

        Ok(Self {
            base_url,
            credentials,
            client,
        })
    }

    /// Build URL for a ShipStation API endpoint
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// List one page of orders. `page` is 1-based.
    pub async fn list_orders(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<OrdersPage, ShipStationError> {
        let url = self.build_url("orders");
        debug!("Listing orders from ShipStation: {} (page {}, size {})", url, page, page_size);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .query(&[("pageSize", page_size), ("page", page)])
            .send()
            .await
            .map_err(ShipStationError::NetworkError)?;

        let status = response.status();
        let text = response.text().await.map_err(ShipStationError::NetworkError)?;

        if !status.is_success() {
            error!("ShipStation API error: {} - {}", status, text);
            return Err(ShipStationError::from_status_code(status.as_u16(), text));
        }

        serde_json::from_str(&text).map_err(ShipStationError::SerializationError)
    }
}

#[async_trait]
impl OrderSource for ShipStationClient {
    async fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Order>, ShipStationError> {
        let body = self.list_orders(page, page_size).await?;
        debug!(
            "ShipStation page {:?} of {:?}, {:?} orders in total",
            body.page, body.pages, body.total
        );
        Ok(body.into_orders())
    }
}
