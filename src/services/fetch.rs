use reqwest::blocking::{Client, Request};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;

use std::time::Duration;

use crate::config::{FetchConfig, CLIENT_USER_AGENT};
use crate::error::FetchError;
use crate::services::retry::RetryPolicy;

pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: FetchConfig) -> Self {
        // GetAppList is unauthenticated and answers 404 when handed a `key`
        // parameter, so the credential stays local.
        if ignores_credential(&config.api_key) {
            tracing::warn!(
                "Note: GetAppList endpoint does not require an API key; the provided key will be ignored."
            );
        }

        Fetcher { client, config }
    }

    fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.config.max_attempts,
            backoff: self.config.backoff,
        }
    }

    pub fn request(&self) -> Result<Request, FetchError> {
        let req = self
            .client
            .get(&self.config.endpoint)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/json")
            .build()?;

        Ok(req)
    }

    pub fn fetch_with<S>(&self, sleep: S) -> Result<Value, FetchError>
    where
        S: FnMut(Duration),
    {
        self.policy().run(
            |attempt| {
                tracing::debug!(attempt, endpoint = %self.config.endpoint, "requesting app list");
                self.fetch_once()
            },
            sleep,
        )
    }

    fn fetch_once(&self) -> Result<Value, FetchError> {
        let resp = self.client.execute(self.request()?)?.error_for_status()?;

        // Read as text first so a bad body is reported as a decode error.
        let text = resp.text()?;
        let json = serde_json::from_str(&text)?;

        Ok(json)
    }
}

pub fn ignores_credential(api_key: &str) -> bool {
    !api_key.is_empty()
}
