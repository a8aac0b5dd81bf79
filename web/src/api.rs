use gloo::net::http::Request;
use jeopardy_core as game;
use thiserror::Error;

pub(crate) const DEFAULT_API_URL: &str = "https://jservice.io";

#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error(transparent)]
    Network(#[from] gloo::net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Category source backed by the jService HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CategoryApi {
    base_url: String,
}

impl CategoryApi {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn category_url(&self, id: game::CategoryId) -> String {
        format!("{}/api/category?id={}", self.base_url, id)
    }
}

impl game::CategorySource for CategoryApi {
    type Error = ApiError;

    async fn fetch_category(&self, id: game::CategoryId) -> Result<game::Category, ApiError> {
        let url = self.category_url(id);
        log::trace!("GET {}", url);

        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}
