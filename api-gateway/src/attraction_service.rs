use std::sync::Arc;
use attractions_shared::{
    haversine_km, initial_bearing, round_to, validate_coordinates, validate_language,
    validate_place_type, validate_radius, Attraction, AttractionQuery, Coordinates,
    GoogleMapsConfig, NearbySearchRequest, NearbySearchResponse, Result,
};
use tracing::{info, warn};
use crate::google_maps_client::PlacesProvider;

/// Search parameters applied when a query leaves them out.
#[derive(Debug, Clone)]
pub struct SearchDefaults {
    pub language: String,
    pub radius_m: u32,
    pub place_type: String,
}

impl From<&GoogleMapsConfig> for SearchDefaults {
    fn from(config: &GoogleMapsConfig) -> Self {
        Self {
            language: config.default_language.clone(),
            radius_m: config.default_radius_m,
            place_type: config.default_place_type.clone(),
        }
    }
}

pub struct AttractionService {
    provider: Arc<dyn PlacesProvider>,
    defaults: SearchDefaults,
}

impl AttractionService {
    pub fn new(provider: Arc<dyn PlacesProvider>, defaults: SearchDefaults) -> Self {
        Self { provider, defaults }
    }

    /// Validates the query and fills in defaults. Never touches the provider.
    pub fn resolve_request(&self, query: &AttractionQuery) -> Result<NearbySearchRequest> {
        validate_coordinates(query.lat, query.lon)?;

        let radius = query.radius.unwrap_or(self.defaults.radius_m);
        validate_radius(radius)?;

        let language = query
            .language
            .as_deref()
            .map(str::trim)
            .unwrap_or(self.defaults.language.as_str())
            .to_string();
        validate_language(&language)?;

        let place_type = query
            .place_type
            .as_deref()
            .map(str::trim)
            .unwrap_or(self.defaults.place_type.as_str())
            .to_string();
        validate_place_type(&place_type)?;

        Ok(NearbySearchRequest {
            location: query.origin(),
            radius,
            place_type,
            language,
        })
    }

    /// Nearby open attractions, closest first.
    pub async fn find_attractions(&self, query: &AttractionQuery) -> Result<Vec<Attraction>> {
        let request = self.resolve_request(query)?;
        let response = self.provider.nearby_search(&request).await?;
        let attractions = to_attractions(request.location, response);

        info!(
            "Found {} attractions near {},{}",
            attractions.len(),
            request.location.lat,
            request.location.lon
        );

        Ok(attractions)
    }
}

/// Drops closed or unlocated places and orders the rest by distance.
pub fn to_attractions(origin: Coordinates, response: NearbySearchResponse) -> Vec<Attraction> {
    let mut attractions: Vec<Attraction> = response
        .results
        .into_iter()
        .filter(|place| !place.is_permanently_closed())
        .filter_map(|place| {
            let Some(location) = place.coordinates() else {
                warn!(
                    "Skipping place {:?} without coordinates",
                    place.name.as_deref().unwrap_or("<unnamed>")
                );
                return None;
            };

            Some(Attraction {
                name: place.name.unwrap_or_default(),
                address: place.vicinity.unwrap_or_default(),
                distance_km: round_to(haversine_km(origin, location), 2),
                bearing_degrees: initial_bearing(origin, location) as i32,
            })
        })
        .collect();

    // sort_by is stable, ties keep provider order
    attractions.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    attractions
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use attractions_shared::{AttractionsError, PlaceResult};
    use std::sync::Mutex;

    struct FakeProvider {
        response: serde_json::Value,
        calls: Mutex<Vec<NearbySearchRequest>>,
    }

    impl FakeProvider {
        fn new(response: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                response,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl PlacesProvider for FakeProvider {
        async fn nearby_search(&self, request: &NearbySearchRequest) -> Result<NearbySearchResponse> {
            self.calls.lock().unwrap().push(request.clone());
            Ok(serde_json::from_value(self.response.clone())?)
        }
    }

    fn defaults() -> SearchDefaults {
        SearchDefaults {
            language: "pl".to_string(),
            radius_m: 2000,
            place_type: "tourist_attraction".to_string(),
        }
    }

    fn place(name: &str, lat: f64, lng: f64) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "vicinity": format!("{} street", name),
            "geometry": {"location": {"lat": lat, "lng": lng}}
        })
    }

    #[tokio::test]
    async fn test_results_are_sorted_and_closed_places_dropped() {
        let mut closed = place("Closed Museum", 52.2300, 21.0125);
        closed["permanently_closed"] = serde_json::json!(true);

        let provider = FakeProvider::new(serde_json::json!({
            "status": "OK",
            "results": [
                place("Far Palace", 52.2500, 21.0122),
                closed,
                place("Near Column", 52.2310, 21.0122),
            ]
        }));
        let service = AttractionService::new(provider.clone(), defaults());

        let attractions = service
            .find_attractions(&AttractionQuery::at(52.2297, 21.0122))
            .await
            .unwrap();

        let names: Vec<&str> = attractions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Near Column", "Far Palace"]);
        assert_eq!(attractions[0].address, "Near Column street");
        assert_eq!(attractions[0].bearing_degrees, 0);
        assert_eq!(attractions[0].distance_km, 0.14);
        assert_eq!(provider.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_defaults_and_overrides_reach_provider() {
        let provider = FakeProvider::new(serde_json::json!({"status": "ZERO_RESULTS"}));
        let service = AttractionService::new(provider.clone(), defaults());

        let attractions = service
            .find_attractions(&AttractionQuery::at(50.0, 19.9))
            .await
            .unwrap();
        assert!(attractions.is_empty());

        let mut query = AttractionQuery::at(50.0, 19.9);
        query.language = Some("en".to_string());
        query.radius = Some(500);
        query.place_type = Some("museum".to_string());
        service.find_attractions(&query).await.unwrap();

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls[0].language, "pl");
        assert_eq!(calls[0].radius, 2000);
        assert_eq!(calls[0].place_type, "tourist_attraction");
        assert_eq!(calls[1].language, "en");
        assert_eq!(calls[1].radius, 500);
        assert_eq!(calls[1].place_type, "museum");
    }

    #[tokio::test]
    async fn test_invalid_query_skips_provider() {
        let provider = FakeProvider::new(serde_json::json!({"status": "OK"}));
        let service = AttractionService::new(provider.clone(), defaults());

        let err = service
            .find_attractions(&AttractionQuery::at(123.0, 19.9))
            .await
            .unwrap_err();
        assert!(matches!(err, AttractionsError::InvalidInput(_)));

        let mut query = AttractionQuery::at(50.0, 19.9);
        query.radius = Some(0);
        assert!(service.find_attractions(&query).await.is_err());

        assert!(provider.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_places_without_geometry_or_address() {
        let response = NearbySearchResponse {
            status: "OK".to_string(),
            results: vec![
                PlaceResult {
                    name: Some("Nowhere".to_string()),
                    ..Default::default()
                },
                serde_json::from_value(serde_json::json!({
                    "name": "No Address",
                    "geometry": {"location": {"lat": 50.0, "lng": 20.0}}
                }))
                .unwrap(),
            ],
            error_message: None,
        };

        let attractions = to_attractions(Coordinates::new(50.0, 19.9), response);
        assert_eq!(attractions.len(), 1);
        assert_eq!(attractions[0].name, "No Address");
        assert_eq!(attractions[0].address, "");
        assert_eq!(attractions[0].bearing_degrees, 89);
    }

    #[test]
    fn test_repeated_conversion_is_identical() {
        let response: NearbySearchResponse = serde_json::from_value(serde_json::json!({
            "status": "OK",
            "results": [place("A", 52.24, 21.01), place("B", 52.22, 21.02)]
        }))
        .unwrap();
        let origin = Coordinates::new(52.2297, 21.0122);

        let first = to_attractions(origin, response.clone());
        let second = to_attractions(origin, response);
        assert_eq!(first, second);
    }
}
