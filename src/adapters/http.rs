use crate::utils::error::{QrError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper around a reqwest client that downloads one image per call.
#[derive(Debug, Clone)]
pub struct QrClient {
    client: Client,
}

impl QrClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Issues a single GET and returns the body bytes. Non-2xx responses are errors.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("QR service response status: {}", status);

        if !status.is_success() {
            return Err(QrError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body.to_vec())
    }
}
