use async_trait::async_trait;
use tracing::debug;

use super::{ContentError, ContentSource};

/// Fetches content from a static web host: `GET <base>/<path>`
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, ContentError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ContentError::Http {
                path: path.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ContentError::Status {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|source| ContentError::Http {
            path: path.to_string(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
