//! Shared helpers for route tests

#![allow(dead_code)]

use actix_web::web;
use std::sync::Arc;

use sms_api::AppState;
use sms_core::services::sms::{MockSmsProvider, SmsServiceConfig};
use sms_infra::PrometheusExporter;

pub fn app_state(provider: Arc<MockSmsProvider>) -> web::Data<AppState<MockSmsProvider>> {
    app_state_with(provider, true)
}

pub fn app_state_with(
    provider: Arc<MockSmsProvider>,
    include_error_data: bool,
) -> web::Data<AppState<MockSmsProvider>> {
    web::Data::new(AppState::new(
        provider,
        SmsServiceConfig::new("Facade").with_obfuscation("Content"),
        PrometheusExporter::detached(),
        include_error_data,
    ))
}
