use crate::{
    types::{
        app_state::AppState,
        place::{PlaceDetails, PlaceSummary},
    },
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetPlaceDetailsPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub place_id: String,
}

#[derive(Serialize)]
pub struct GetPlaceDetailsResponse {
    pub data: PlaceDetails,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_place_details(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetPlaceDetailsPayload>,
) -> Result<Response, AppError> {
    let place = state
        .session
        .find_place(&payload.place_id)
        .unwrap_or_else(|| PlaceSummary::from_id(&payload.place_id));

    let details = state
        .session
        .on_result_selected(&place)
        .await
        .ok_or_else(|| {
            error!("No details resolved for place {}", place.id);
            AppError::new(StatusCode::BAD_GATEWAY, "Failed to resolve place details")
        })?;

    Ok((StatusCode::OK, Json(GetPlaceDetailsResponse { data: details })).into_response())
}
