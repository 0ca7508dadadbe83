use crate::api::error::ApiError;
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Issues GET requests against the AirSight backend and decodes JSON bodies.
pub struct ApiLoader {
    base_url: String,
    client: Client,
}

impl ApiLoader {
    pub fn new(base_url: &str, timeout: Duration) -> Result<ApiLoader, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::ClientBuild)?;
        Ok(ApiLoader {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetches `path` with the given query parameters and decodes the body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        info!("Requesting {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ApiError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ApiError::NetworkRequest(url, e)
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::JsonDecode(url, e))
    }
}
