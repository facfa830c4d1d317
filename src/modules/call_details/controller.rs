use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::modules::call_details::{
    model::CallRecord,
    schema::{CallDetailsQuery, CallDetailsResponse, CallMetadata, ErrorResponse},
};
use crate::AppState;

fn to_response(call_id: &str, record: &CallRecord) -> CallDetailsResponse {
    CallDetailsResponse {
        summary: record.summary(),
        analysis: record.analysis(),
        structured_data: record.structured_data(),
        insights: record.insights(),
        transcript: record.transcript(),
        call: CallMetadata {
            id: Some(record.call_id(call_id)),
            assistant_id: record.assistant_id(),
            started_at: record.started_at(),
            ended_at: record.ended_at(),
            duration: record.duration(),
        },
    }
}

pub async fn get_call_details(
    State(state): State<AppState>,
    Query(query): Query<CallDetailsQuery>,
) -> Result<Json<CallDetailsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let call_id = query.call_id.unwrap_or_default();

    if call_id.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: "Call ID is required".to_string() }),
        ));
    }

    let record = state.vapi.fetch_call_details(&call_id).await.map_err(|e| {
        tracing::warn!(call_id = %call_id, error = %e, "call details fetch failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse { error: e.to_string() }),
        )
    })?;

    Ok(Json(to_response(&call_id, &record)))
}
