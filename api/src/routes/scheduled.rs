//! Scheduled message endpoints

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use sms_core::services::scheduled::ScheduledMessageFilter;
use sms_core::services::sms::SmsProvider;

use crate::app::AppState;
use crate::handlers::ApiError;

/// Query values read by the facade itself; everything else is forwarded
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub all: Option<String>,
}

impl ListQuery {
    fn walk_all(&self) -> bool {
        self.all
            .as_deref()
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQuery {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Handler for GET /api/scheduled/messages
///
/// The query string is passed to the provider unchanged. With `all=true`
/// every page is fetched and returned as one page.
pub async fn list_scheduled_messages<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError>
where
    P: SmsProvider + 'static,
{
    let raw_query = req.query_string();
    let raw_query = (!raw_query.is_empty()).then_some(raw_query);

    let result = if query.walk_all() {
        state.scheduled_service.list_all(raw_query).await
    } else {
        state.scheduled_service.list(raw_query).await
    };
    let page = result.map_err(|e| state.api_error(e))?;

    Ok(HttpResponse::Ok().json(page))
}

/// Handler for GET /api/scheduled/messages/{messageId}
pub async fn get_scheduled_message<P>(
    state: web::Data<AppState<P>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    P: SmsProvider + 'static,
{
    let message_id = path.into_inner();
    let detail = state
        .scheduled_service
        .get(&message_id)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(HttpResponse::Ok().json(detail))
}

/// Handler for DELETE /api/scheduled/messages?messageId=..&tag=..
///
/// At least one of `messageId` or `tag` is required. Responds 204.
pub async fn delete_scheduled_messages<P>(
    state: web::Data<AppState<P>>,
    query: web::Query<DeleteQuery>,
) -> Result<HttpResponse, ApiError>
where
    P: SmsProvider + 'static,
{
    let query = query.into_inner();
    let filter = ScheduledMessageFilter::new(query.message_id, query.tag)
        .map_err(|e| state.api_error(e))?;

    state
        .scheduled_service
        .delete(&filter)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(HttpResponse::NoContent().finish())
}
