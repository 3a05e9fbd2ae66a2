//! NASA API client that injects the server-held API key

use std::{fmt, time::Duration};

use mission_common::{GatewayConfig, Rover, Sol};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{GatewayError, GatewayResult};

/// Key NASA hands out for unauthenticated, heavily rate-limited access
pub const DEMO_KEY: &str = "DEMO_KEY";

const MARS_PHOTOS_PATH: &str = "mars-photos/api/v1";

/// NASA API credential. Never printed.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn demo() -> Self {
        Self(DEMO_KEY.to_string())
    }

    pub fn is_demo(&self) -> bool {
        self.0 == DEMO_KEY
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Forwards requests to NASA and returns the JSON body verbatim
#[derive(Debug, Clone)]
pub struct NasaClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: ApiKey,
}

impl NasaClient {
    pub fn new(config: &GatewayConfig, api_key: ApiKey) -> GatewayResult<Self> {
        // A trailing slash keeps `Url::join` from dropping the last path segment
        let mut base = config.nasa_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|source| GatewayError::Upstream {
                endpoint: base_url.to_string(),
                source,
            })?;

        Ok(Self { http, base_url, api_key })
    }

    /// `GET planetary/apod`
    pub async fn image_of_the_day(&self) -> GatewayResult<Value> {
        self.get_json("planetary/apod", &[]).await
    }

    /// `GET mars-photos/api/v1/manifests/{rover}`
    pub async fn manifest(&self, rover: Rover) -> GatewayResult<Value> {
        let path = format!("{}/manifests/{}", MARS_PHOTOS_PATH, rover.as_str());
        self.get_json(&path, &[]).await
    }

    /// `GET mars-photos/api/v1/rovers/{rover}/photos?sol={sol}`
    pub async fn photos(&self, rover: Rover, sol: Sol) -> GatewayResult<Value> {
        let path = format!("{}/rovers/{}/photos", MARS_PHOTOS_PATH, rover.as_str());
        self.get_json(&path, &[("sol", sol.to_string())]).await
    }

    #[instrument(level = "debug", skip(self, query))]
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> GatewayResult<Value> {
        let mut url = self.base_url.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("api_key", self.api_key.expose());
        }

        debug!(endpoint = %path, "Forwarding request upstream");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Upstream {
                endpoint: path.to_string(),
                source: e.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| GatewayError::Decode {
            endpoint: path.to_string(),
            source: e.without_url(),
        })
    }
}
