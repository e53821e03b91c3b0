use async_trait::async_trait;
use gloo_net::http::Request;

use crate::api::{FeedError, PlayerGateway, PlayerPage};
use crate::config::Config;

/// Player feed over `GET {base}/v1/players?per_page=N&page=N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpPlayerGateway {
    base_url: String,
    page_size: u32,
}

impl HttpPlayerGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            page_size: config.page_size,
        }
    }

    fn page_url(&self, page: u32) -> String {
        format!(
            "{}/v1/players?per_page={}&page={}",
            self.base_url, self.page_size, page
        )
    }
}

#[async_trait(?Send)]
impl PlayerGateway for HttpPlayerGateway {
    async fn fetch_page(&self, page: u32) -> Result<PlayerPage, FeedError> {
        let response = Request::get(&self.page_url(page))
            .send()
            .await
            .map_err(|err| FeedError::Request(err.to_string()))?;

        if !response.ok() {
            return Err(FeedError::Request(format!("status {}", response.status())));
        }

        response
            .json::<PlayerPage>()
            .await
            .map_err(|err| FeedError::Decode(err.to_string()))
    }
}
