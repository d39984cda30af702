//! Prometheus scrape endpoint

use actix_web::{web, HttpResponse};

use sms_core::services::sms::SmsProvider;

use crate::app::AppState;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Handler for GET /api/metrics
pub async fn metrics<P>(state: web::Data<AppState<P>>) -> HttpResponse
where
    P: SmsProvider + 'static,
{
    HttpResponse::Ok()
        .content_type(PROMETHEUS_CONTENT_TYPE)
        .body(state.metrics.render())
}
