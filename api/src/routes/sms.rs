//! Send endpoint

use actix_web::{web, HttpRequest, HttpResponse};

use sms_core::services::sms::SmsProvider;

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::request_id;

/// Handler for POST /api/sendSms
///
/// Accepts a simplified payload and sends (or schedules) one message per
/// receiver in a single provider call.
///
/// # Request Body
///
/// ```json
/// {
///     "receivers": ["4781549300", "+4781549301"],
///     "message": "Hello",
///     "sender": "Council",
///     "referenceId": "ref-1",
///     "scheduledIn": 600000
/// }
/// ```
///
/// # Responses
///
/// - 200 with the provider acknowledgement
/// - 400 `{ "message", "errors" }` when the payload or a built message is invalid
/// - provider status (or 502) `{ "message", "data" }` when the provider rejects the batch
pub async fn send_sms<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError>
where
    P: SmsProvider + 'static,
{
    tracing::debug!(request_id = ?request_id(&req), bytes = body.len(), "Send request received");

    let response = state
        .sms_service
        .send_sms_body(&body)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(HttpResponse::Ok().json(response))
}
