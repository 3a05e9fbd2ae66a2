//! Client side of the remote data gateway

use std::time::Duration;

use async_trait::async_trait;
use mission_common::{
    ApodImage, ApodResponse, ErrorResponse, ManifestsResponse, Photo, PhotosResponse, Rover,
    RoverManifest, Sol,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ClientError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The three reads the dashboard makes
#[async_trait]
pub trait DataGateway: Send + Sync {
    async fn image_of_the_day(&self) -> Result<ApodImage>;

    /// One entry per rover, in roster order
    async fn rover_manifests(&self) -> Result<Vec<RoverManifest>>;

    async fn rover_photos(&self, rover: Rover, sol: Sol) -> Result<Vec<Photo>>;
}

/// [`DataGateway`] over HTTP against a running `mission-server`
#[derive(Clone)]
pub struct HttpGateway {
    http: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::from)?;

        // Joining relative paths only keeps the last segment with a trailing slash
        let mut base_url = Url::parse(base_url).map_err(ClientError::from)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.base_url.join(endpoint).map_err(ClientError::from)?;
        debug!(%url, "GET");

        let response = self.http.get(url.clone()).send().await.map_err(|source| {
            ClientError::ConnectionFailed {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|body| body.error);
            return Err(ClientError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|source| ClientError::ParseError {
                endpoint: endpoint.to_string(),
                source,
            })?;
        Ok(body)
    }
}

#[async_trait]
impl DataGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn image_of_the_day(&self) -> Result<ApodImage> {
        let response: ApodResponse = self.get_json("apod").await?;
        // An absent image would leave the loader up and be requested again forever
        response.image.ok_or_else(|| {
            ClientError::MissingField {
                endpoint: "apod".to_string(),
                field: "image",
            }
            .into()
        })
    }

    #[instrument(skip(self))]
    async fn rover_manifests(&self) -> Result<Vec<RoverManifest>> {
        let response: ManifestsResponse = self.get_json("roverData/manifests").await?;
        Ok(response.into_manifests())
    }

    #[instrument(skip(self))]
    async fn rover_photos(&self, rover: Rover, sol: Sol) -> Result<Vec<Photo>> {
        let endpoint = format!("photos/{}/{}", rover.as_str(), sol);
        let response: PhotosResponse = self.get_json(&endpoint).await?;
        Ok(response.photos)
    }
}
