use axum::{extract::State, Json};
use futures::future::try_join_all;
use mission_common::Rover;
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::{error::GatewayResult, server::AppState};

/// Mission manifests for every known rover
///
/// All rovers are requested concurrently and returned in roster order as
/// `{ "roversManifest": [ <NASA manifest body>, ... ] }`. A single upstream
/// failure fails the whole request.
#[instrument(skip(state))]
pub async fn rover_manifests(State(state): State<AppState>) -> GatewayResult<Json<Value>> {
    let manifests = try_join_all(Rover::ALL.iter().map(|rover| state.nasa.manifest(*rover))).await?;
    info!(count = manifests.len(), "Served rover manifests");
    Ok(Json(json!({ "roversManifest": manifests })))
}
