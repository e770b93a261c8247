use async_trait::async_trait;
use attractions_shared::{
    mask_secret, AttractionsError, GoogleMapsConfig, NearbySearchRequest, NearbySearchResponse,
    Result,
};
use std::time::Duration;
use tracing::{debug, warn};

const NEARBY_SEARCH_PATH: &str = "/maps/api/place/nearbysearch/json";

/// Source of nearby places.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn nearby_search(&self, request: &NearbySearchRequest) -> Result<NearbySearchResponse>;
}

/// Google Places "Nearby Search" over plain HTTPS.
#[derive(Clone)]
pub struct GoogleMapsClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl GoogleMapsClient {
    pub fn new(config: &GoogleMapsConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("attractions-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, NEARBY_SEARCH_PATH)
    }

    /// The request URL carries the API key, so it is stripped before the
    /// error can reach logs or response bodies.
    fn map_transport_error(&self, err: reqwest::Error) -> AttractionsError {
        if err.is_timeout() {
            AttractionsError::Timeout(self.timeout_secs)
        } else {
            AttractionsError::Http(err.without_url())
        }
    }
}

#[async_trait]
impl PlacesProvider for GoogleMapsClient {
    async fn nearby_search(&self, request: &NearbySearchRequest) -> Result<NearbySearchResponse> {
        let location = format!("{},{}", request.location.lat, request.location.lon);
        let radius = request.radius.to_string();

        debug!(
            "Places nearby search at {} (radius {}m, type {}, language {}, key {})",
            location,
            radius,
            request.place_type,
            request.language,
            mask_secret(&self.api_key)
        );

        let response = self
            .http_client
            .get(self.endpoint())
            .query(&[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("type", request.place_type.as_str()),
                ("language", request.language.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let http_status = response.status();
        if !http_status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Places API answered HTTP {}", http_status);
            return Err(AttractionsError::Upstream {
                status: format!("HTTP {}", http_status.as_u16()),
                message: summarize_body(&body),
            });
        }

        let body: NearbySearchResponse = response
            .json()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        match body.status.as_str() {
            "OK" | "ZERO_RESULTS" => {
                debug!("Places API returned {} results", body.results.len());
                Ok(body)
            }
            other => {
                warn!("Places API rejected the request with status {}", other);
                Err(AttractionsError::Upstream {
                    status: other.to_string(),
                    message: body
                        .error_message
                        .unwrap_or_else(|| "no error message provided".to_string()),
                })
            }
        }
    }
}

fn summarize_body(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "empty response body".to_string();
    }
    let mut summary: String = body.chars().take(200).collect();
    if body.chars().count() > 200 {
        summary.push_str("...");
    }
    summary
}
