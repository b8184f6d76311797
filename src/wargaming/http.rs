use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde_json::Value;
use tracing::debug;

use crate::{
    core::config::ApiConfig,
    wargaming::types::{ApiEnvelope, ClansMethod, QueryParams},
    Result,
};


/// Section of the application API this client talks to.
pub const CLANS_SECTION: &str = "clans";

/// Anything that can answer a `clans` API call with its unwrapped `data`.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    async fn request(&self, method: ClansMethod, params: &QueryParams) -> Result<Value>;
}

/// Gateway backed by the real HTTP API.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    application_id: String,
    language: Option<String>,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(concat!("wotblitz-clans/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            application_id: config.application_id.clone(),
            language: config.language.clone(),
        })
    }

    /// `{base}/clans/{method}/`
    pub fn method_url(&self, method: ClansMethod) -> String {
        format!("{}/{}/{}/", self.base_url, CLANS_SECTION, method.as_str())
    }

    fn query(&self, params: &QueryParams) -> Vec<(String, String)> {
        let mut query = vec![("application_id".to_string(), self.application_id.clone())];
        if let Some(language) = &self.language {
            query.push(("language".to_string(), language.clone()));
        }
        query.extend(params.pairs().iter().cloned());
        query
    }
}

impl Gateway for HttpGateway {
    async fn request(&self, method: ClansMethod, params: &QueryParams) -> Result<Value> {
        let url = self.method_url(method);
        // application_id stays out of the logs
        debug!(%url, params = ?params.pairs(), "request");

        let envelope = self
            .client
            .get(&url)
            .query(&self.query(params))
            .send()
            .await?
            .error_for_status()?
            .json::<ApiEnvelope>()
            .await?;

        envelope.into_data()
    }
}
