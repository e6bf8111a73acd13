//! Image-transform endpoint client

use async_trait::async_trait;
use gloo_net::http::Request;
use lib_core::model::share::{normalize_share_url, share_image_request_url};
use lib_core::service::ImageTransform;
use lib_core::{AppError, Result};
use shared::dto::ShareImageResponse;

/// Client of the endpoint that turns a token image into a shareable URL.
#[derive(Clone, Debug)]
pub struct ImageApi {
    base: String,
}

impl ImageApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait(?Send)]
impl ImageTransform for ImageApi {
    async fn share_url(&self, image: &str) -> Result<String> {
        let url = share_image_request_url(&self.base, image);
        log::debug!("Requesting share image: {}", url);

        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Share(format!("request failed: {}", e)))?;

        if !resp.ok() {
            return Err(AppError::Share(format!(
                "image endpoint answered {}",
                resp.status()
            )));
        }

        let body = resp
            .json::<ShareImageResponse>()
            .await
            .map_err(|e| AppError::Share(format!("invalid response: {}", e)))?;

        Ok(normalize_share_url(&body.url))
    }
}
