use axum::{
    extract::{Path, State},
    Extension, Json,
};
use service_core::middleware::RequestId;

use crate::models::NotificationResponse;
use crate::services::record_notifications;
use crate::startup::AppState;

/// `GET /api/v1/notifications/:user_id`
///
/// Any identifier is accepted and echoed back; there is no error path.
#[tracing::instrument(skip(state, request_id))]
pub async fn get_notifications(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    Path(user_id): Path<String>,
) -> Json<NotificationResponse> {
    tracing::info!(
        user_id = %user_id,
        request_id = request_id.as_ref().map(|Extension(id)| id.0.as_str()),
        "Fetching notifications for user"
    );

    let response = state.source.user_notifications(&user_id);
    record_notifications(&response.notifications);

    Json(response)
}
