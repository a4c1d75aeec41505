use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::CoreError;
use crate::models::asset::{AssetRecord, NewAsset};

use super::{api_error, build_http_client};

/// Client for the asset CRUD endpoints of the Financify API.
///
/// Every call takes the caller's bearer token; the client itself holds no
/// auth state. Responses are validated against the details-shape invariant
/// before they are handed back.
pub struct AssetApiClient {
    client: Client,
    config: Config,
}

impl AssetApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: build_http_client(),
            config,
        }
    }

    /// `GET /assets` — all holdings of the authenticated user.
    pub async fn list_assets(&self, token: &str) -> Result<Vec<AssetRecord>, CoreError> {
        let url = self.config.api_url("/assets");
        debug!(url = %url, "fetching asset list");

        let response = self.client.get(&url).bearer_auth(token).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response, "Failed to fetch assets").await);
        }

        let assets: Vec<AssetRecord> = response.json().await.map_err(|e| {
            CoreError::UnexpectedResponse(format!("asset list did not parse: {e}"))
        })?;

        for asset in &assets {
            asset.validate()?;
        }

        debug!(count = assets.len(), "asset list fetched");
        Ok(assets)
    }

    /// `POST /assets` — create a holding. Returns the server's echo,
    /// now carrying `_id` and `createdAt`.
    pub async fn create_asset(
        &self,
        token: &str,
        asset: &NewAsset,
    ) -> Result<AssetRecord, CoreError> {
        let url = self.config.api_url("/assets");
        debug!(url = %url, asset_type = %asset.asset_type, "creating asset");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(asset)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response, "Failed to create asset").await);
        }

        let created: AssetRecord = response.json().await.map_err(|e| {
            CoreError::UnexpectedResponse(format!("created asset did not parse: {e}"))
        })?;
        created.validate()?;
        Ok(created)
    }

    /// `PUT /assets/:id` — replace a holding. Returns the server's echo.
    pub async fn update_asset(
        &self,
        token: &str,
        asset: &AssetRecord,
    ) -> Result<AssetRecord, CoreError> {
        asset.validate()?;
        let url = self.config.api_url(&format!("/assets/{}", asset.id));
        debug!(url = %url, id = %asset.id, "updating asset");

        let response = self
            .client
            .put(&url)
            .bearer_auth(token)
            .json(asset)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response, "Failed to update asset").await);
        }

        let updated: AssetRecord = response.json().await.map_err(|e| {
            CoreError::UnexpectedResponse(format!("updated asset did not parse: {e}"))
        })?;
        updated.validate()?;
        Ok(updated)
    }

    /// `DELETE /assets/:id`.
    pub async fn delete_asset(&self, token: &str, id: &str) -> Result<(), CoreError> {
        let url = self.config.api_url(&format!("/assets/{id}"));
        debug!(url = %url, id = %id, "deleting asset");

        let response = self.client.delete(&url).bearer_auth(token).send().await?;
        if !response.status().is_success() {
            warn!(id = %id, status = response.status().as_u16(), "delete failed");
            return Err(api_error(response, "Failed to delete asset").await);
        }
        Ok(())
    }
}
