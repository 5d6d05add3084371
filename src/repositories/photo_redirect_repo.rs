use std::time::Duration;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::Client;
use crate::repositories::RedirectResolver;

/// Reads the `Location` header of a redirecting photo endpoint.
pub struct PhotoRedirectRepo {
    client: Client,
}

impl PhotoRedirectRepo {
    pub fn new(
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(timeout)
            .build()
            .context("Failed to build photo redirect http client")?;

        Ok(Self {
            client
        })
    }
}

#[async_trait]
impl RedirectResolver for PhotoRedirectRepo {
    async fn resolve_location(
        &self,
        url: &str,
    ) -> anyhow::Result<String> {
        let response = self.client
            .get(url)
            .send()
            .await
            .context("Photo request failed")?;

        let location = response
            .headers()
            .get(LOCATION)
            .ok_or_else(|| anyhow!("Photo endpoint responded with {} and no redirect", response.status()))?
            .to_str()
            .context("Redirect location is not valid text")?;

        if location.is_empty() {
            return Err(anyhow!("Redirect location is empty"));
        }

        Ok(location.to_string())
    }
}
