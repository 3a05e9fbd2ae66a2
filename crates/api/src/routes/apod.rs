use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::{error::GatewayResult, server::AppState};

/// Astronomy picture of the day
///
/// Responds with `{ "image": <NASA APOD body> }`.
#[instrument(skip(state))]
pub async fn image_of_the_day(State(state): State<AppState>) -> GatewayResult<Json<Value>> {
    let image = state.nasa.image_of_the_day().await?;
    info!("Served image of the day");
    Ok(Json(json!({ "image": image })))
}
