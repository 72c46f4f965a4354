//! Menu feed client and background refresh.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, instrument};
use url::Url;

use little_lemon_core::MenuItem;

use crate::catalog::MenuCatalog;
use crate::config::AppConfig;

use super::types::MenuResponse;

/// Errors raised while fetching or decoding the menu feed.
#[derive(Debug, Error)]
pub enum MenuFeedError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed endpoint answered with a non-success status.
    #[error("feed returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a valid feed document.
    #[error("feed decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the remote menu feed.
///
/// Cheaply cloneable; typically fetched once per app run at startup.
#[derive(Clone)]
pub struct MenuClient {
    inner: Arc<MenuClientInner>,
}

struct MenuClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl MenuClient {
    /// Create a new feed client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MenuFeedError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, MenuFeedError> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(MenuClientInner {
                client,
                endpoint: config.menu_url.clone(),
            }),
        })
    }

    /// Download and decode the full menu.
    ///
    /// # Errors
    ///
    /// Returns a [`MenuFeedError`] on transport failure, a non-success
    /// status, or an undecodable body.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuFeedError> {
        let response = self
            .inner
            .client
            .get(self.inner.endpoint.clone())
            .send()
            .await?;

        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "menu feed returned non-success status"
            );
            return Err(MenuFeedError::Status(status));
        }

        let decoded: MenuResponse = match serde_json::from_str(&body) {
            Ok(response) => response,
            Err(e) => {
                error!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "failed to decode menu feed"
                );
                return Err(MenuFeedError::Decode(e));
            }
        };

        Ok(decoded.menu.into_iter().map(MenuItem::from).collect())
    }

    /// Fetch the menu and replace the catalog with it.
    ///
    /// On failure the previous catalog is left intact.
    ///
    /// # Errors
    ///
    /// Propagates any [`MenuFeedError`] from the fetch; the catalog is only
    /// touched on success.
    pub async fn refresh(&self, catalog: &MenuCatalog) -> Result<usize, MenuFeedError> {
        let items = self.fetch_menu().await?;
        let count = items.len();
        catalog.replace_all(items);
        info!(count, "menu catalog refreshed");
        Ok(count)
    }
}

/// Spawn a background task that refreshes the catalog once.
///
/// The app starts immediately with an empty catalog; queries return the
/// fetched menu as soon as the task swaps it in.
pub fn spawn_refresh(client: MenuClient, catalog: MenuCatalog) -> tokio::task::JoinHandle<()> {
    info!("spawning background menu refresh task");
    tokio::spawn(async move {
        match client.refresh(&catalog).await {
            Ok(count) => info!(count, "background menu refresh complete"),
            Err(e) => error!(error = %e, "menu refresh failed; keeping previous catalog"),
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_default_config() {
        let config = AppConfig::default();
        let client = MenuClient::new(&config).unwrap();
        assert_eq!(client.inner.endpoint, config.menu_url);
    }

    #[tokio::test]
    #[ignore = "Requires network access to the live menu feed"]
    async fn test_refresh_populates_catalog_from_live_feed() {
        let config = AppConfig::default();
        let client = MenuClient::new(&config).unwrap();
        let catalog = MenuCatalog::new();

        let count = client.refresh(&catalog).await.unwrap();
        assert!(count > 0);
        assert_eq!(catalog.len(), count);
        assert!(!catalog.categories().is_empty());
    }
}
