//! Showcase API client implementation

use async_trait::async_trait;
use reqwest::Client;
use urlencoding::encode;

use crate::domain::entities::VehicleId;
use crate::domain::ports::{ListingUpdate, NewListing, ShowcaseClient};
use crate::error::ShowcaseError;

/// Implementation of the showcase service client
pub struct ShowcaseClientImpl {
    http: Client,
    base_url: String,
}

impl ShowcaseClientImpl {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn listings_url(&self, path: &str) -> String {
        format!("{}/listings{}", self.base_url, path)
    }

    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(), ShowcaseError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ShowcaseError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ShowcaseClient for ShowcaseClientImpl {
    async fn create_listing(&self, listing: &NewListing) -> Result<(), ShowcaseError> {
        let response = self
            .http
            .post(self.listings_url(""))
            .json(listing)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    async fn update_listing(
        &self,
        vehicle_id: &VehicleId,
        listing: &ListingUpdate,
    ) -> Result<(), ShowcaseError> {
        let response = self
            .http
            .put(self.listings_url(&format!("/{}", encode(vehicle_id.as_str()))))
            .json(listing)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
