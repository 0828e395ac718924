use crate::config::Config;
use feedline_domain::api::client::HttpClient;
use feedline_domain::storage::StoragePath;
use feedline_domain::GetConfig;

use anyhow::Context;

#[derive(Clone)]
pub struct App {
    pub http_client: HttpClient,
    pub storage_path: StoragePath,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http_client =
            HttpClient::new(config.api_url.clone()).context("could not build the HTTP client")?;

        Ok(Self {
            http_client,
            storage_path: StoragePath(config.storage_path.clone()),
        })
    }
}

impl GetConfig for App {
    fn get_http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn get_storage_path(&self) -> &StoragePath {
        &self.storage_path
    }
}
