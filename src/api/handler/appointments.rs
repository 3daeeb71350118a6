use crate::error::RelayResult;
use crate::models::{AppState, AppointmentParams, DownstreamResponse};
use axum::{
    extract::{Json, Query, State},
    response::IntoResponse,
};
use serde_json::{json, Value};

pub async fn get_appointments_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> RelayResult<DownstreamResponse> {
    let params = AppointmentParams::from_pairs(pairs);
    state.forwarder.fetch_appointments(params.email()).await
}

pub async fn create_appointment_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> RelayResult<DownstreamResponse> {
    state.forwarder.create_appointment(&payload).await
}

pub async fn health_check_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
