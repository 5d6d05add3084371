use std::sync::Arc;
use futures::{stream, StreamExt, TryStreamExt};
use reqwest::Url;
use tracing::error;
use crate::repositories::RedirectResolver;
use crate::services::error::PhotoResolutionError;

pub const PHOTO_MAX_WIDTH: u32 = 800;

/// Exchanges provider photo references for direct image urls.
pub struct PhotoService {
    redirect_resolver: Arc<dyn RedirectResolver>,
    photo_url: String,
    api_key: String,
    fanout_limit: usize,
}

impl PhotoService {
    pub fn new(
        redirect_resolver: Arc<dyn RedirectResolver>,
        photo_url: &str,
        api_key: &str,
        fanout_limit: usize,
    ) -> Self {
        Self {
            redirect_resolver,
            photo_url: photo_url.to_string(),
            api_key: api_key.to_string(),
            fanout_limit: fanout_limit.max(1),
        }
    }

    pub async fn get_photo_url(
        &self,
        photo_reference: &str,
    ) -> Result<String, PhotoResolutionError> {
        let resolved = match self.build_photo_url(photo_reference) {
            Ok(url) => self.redirect_resolver.resolve_location(url.as_str()).await,
            Err(e) => Err(e),
        };

        resolved.map_err(|e| {
            error!("Error fetching photo: {:#}", e);
            PhotoResolutionError {
                reference: photo_reference.to_string(),
                source: e,
            }
        })
    }

    /// Resolves every reference concurrently. Output keeps the input order and
    /// the first failure fails the whole batch.
    pub async fn get_photo_urls(
        &self,
        photo_references: &[String],
    ) -> Result<Vec<String>, PhotoResolutionError> {
        stream::iter(photo_references.to_vec())
            .map(|reference| async move { self.get_photo_url(&reference).await })
            .buffered(self.fanout_limit)
            .try_collect()
            .await
    }

    fn build_photo_url(
        &self,
        photo_reference: &str,
    ) -> anyhow::Result<Url> {
        let max_width = PHOTO_MAX_WIDTH.to_string();
        let url = Url::parse_with_params(
            &self.photo_url,
            &[
                ("maxwidth", max_width.as_str()),
                ("photo_reference", photo_reference),
                ("key", self.api_key.as_str()),
            ],
        )?;
        Ok(url)
    }
}
