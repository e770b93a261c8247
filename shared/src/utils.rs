use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;
use crate::types::{AttractionsError, Result};

/// Upper bound the Places API accepts for `radius`.
pub const MAX_RADIUS_M: u32 = 50_000;

// Time helpers
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Rounds the exact binary value of `value`, so 0.015 (stored as
/// 0.01499...) becomes 0.01 the same way Python's `round` does.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Keeps the first four characters of a secret so logs can tell keys apart.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

// Validation helpers
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(AttractionsError::InvalidInput(format!(
            "lat must be between -90 and 90, got {}",
            lat
        )));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(AttractionsError::InvalidInput(format!(
            "lon must be between -180 and 180, got {}",
            lon
        )));
    }
    Ok(())
}

pub fn validate_radius(radius: u32) -> Result<()> {
    if radius == 0 || radius > MAX_RADIUS_M {
        return Err(AttractionsError::InvalidInput(format!(
            "radius must be between 1 and {} metres, got {}",
            MAX_RADIUS_M, radius
        )));
    }
    Ok(())
}

pub fn validate_language(language: &str) -> Result<()> {
    let language = language.trim();
    if language.is_empty() || language.len() > 16 {
        return Err(AttractionsError::InvalidInput(
            "language must be a non-empty code of at most 16 characters".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_place_type(place_type: &str) -> Result<()> {
    static PLACE_TYPE: OnceLock<Regex> = OnceLock::new();
    let re = PLACE_TYPE.get_or_init(|| Regex::new(r"^[a-z_]{1,64}$").expect("valid place type regex"));
    if !re.is_match(place_type) {
        return Err(AttractionsError::InvalidInput(format!(
            "type must be a Places API type such as tourist_attraction, got {:?}",
            place_type
        )));
    }
    Ok(())
}
