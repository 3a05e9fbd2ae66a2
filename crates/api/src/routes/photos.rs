use axum::{
    extract::{Path, State},
    Json,
};
use mission_common::{Rover, Sol};
use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    error::{GatewayError, GatewayResult},
    server::AppState,
};

/// Photos taken by `rover` on `sol`, forwarded verbatim
#[instrument(skip(state))]
pub async fn rover_photos(
    State(state): State<AppState>,
    Path((rover, sol)): Path<(String, Sol)>,
) -> GatewayResult<Json<Value>> {
    let known = Rover::parse(&rover).ok_or(GatewayError::UnknownRover(rover))?;
    let photos = state.nasa.photos(known, sol).await?;
    info!(rover = %known, sol, "Served rover photos");
    Ok(Json(photos))
}
