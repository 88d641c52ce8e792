use std::time::Duration;

use async_trait::async_trait;

use super::LightStatuses;
use super::StateStore;
use super::StoreError;
use crate::config::StoreConfig;

/// Remote store reached over HTTP at `{base_url}/all`.
pub struct HttpStateStore {
    client: reqwest::Client,
    url: String,
}

impl HttpStateStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            url: all_url(&config.base_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(StoreError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            })
        }
    }
}

fn all_url(base_url: &str) -> String {
    format!("{}/all", base_url.trim_end_matches('/'))
}

#[async_trait]
impl StateStore for HttpStateStore {
    async fn fetch_all(&self) -> Result<serde_json::Value, StoreError> {
        let response = self.client.get(&self.url).send().await?;
        Ok(self.check(response)?.json().await?)
    }

    async fn push_all(&self, statuses: &LightStatuses) -> Result<(), StoreError> {
        let response = self.client.post(&self.url).json(statuses).send().await?;
        self.check(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_url() {
        assert_eq!(all_url("http://lights.local:5000/"), "http://lights.local:5000/all");
        assert_eq!(all_url("http://lights.local:5000"), "http://lights.local:5000/all");
        assert_eq!(all_url("http://hub/api/"), "http://hub/api/all");
    }
}
