use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

// Query types

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Query string of `GET /attractions/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttractionQuery {
    pub lat: f64,
    pub lon: f64,
    pub language: Option<String>,
    /// Search radius in metres.
    pub radius: Option<u32>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
}

impl AttractionQuery {
    pub fn at(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            language: None,
            radius: None,
            place_type: None,
        }
    }

    pub fn origin(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

/// A nearby attraction as returned to API callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attraction {
    pub name: String,
    pub address: String,
    pub distance_km: f64,
    pub bearing_degrees: i32,
}

// Provider types

/// Fully resolved parameters of one nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearchRequest {
    pub location: Coordinates,
    pub radius: u32,
    pub place_type: String,
    pub language: String,
}

/// Body of a Places Nearby Search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub geometry: Option<PlaceGeometry>,
    #[serde(default)]
    pub permanently_closed: Option<bool>,
    #[serde(default)]
    pub business_status: Option<String>,
}

impl PlaceResult {
    /// Closed places are flagged either by the legacy `permanently_closed`
    /// field or by `business_status`.
    pub fn is_permanently_closed(&self) -> bool {
        self.permanently_closed.unwrap_or(false)
            || self.business_status.as_deref() == Some("CLOSED_PERMANENTLY")
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.geometry
            .as_ref()
            .map(|g| Coordinates::new(g.location.lat, g.location.lng))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceGeometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// API response types
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "Success".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Body of every non-2xx response from the attractions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

// Errors
#[derive(Debug, thiserror::Error)]
pub enum AttractionsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream provider error ({status}): {message}")]
    Upstream { status: String, message: String },

    #[error("Upstream provider did not answer within {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AttractionsError>;
