use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
    routing::get,
    Router,
};
use attractions_shared::{Attraction, AttractionQuery};
use tracing::info;
use crate::app_state::AppState;
use crate::error::ApiError;

/// Nearby tourist attractions sorted by distance from `lat`/`lon`.
pub async fn get_attractions(
    State(app_state): State<AppState>,
    query: Result<Query<AttractionQuery>, QueryRejection>,
) -> Result<Json<Vec<Attraction>>, ApiError> {
    let Query(query) = query?;

    info!("Attractions requested near {},{}", query.lat, query.lon);

    let attractions = app_state.attractions.find_attractions(&query).await?;
    Ok(Json(attractions))
}

/// Attraction routes, served with and without the trailing slash.
pub fn attraction_routes() -> Router<AppState> {
    Router::new()
        .route("/attractions/", get(get_attractions))
        .route("/attractions", get(get_attractions))
}
