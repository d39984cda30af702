use serde_json::json;
use std::sync::Arc;

use sms_shared::errors::error_codes;

use crate::errors::{DomainError, ProviderError};
use crate::services::scheduled::{ScheduledMessageFilter, ScheduledMessageService};
use crate::services::sms::mock::{scheduled_message, MockSmsProvider};

fn items(count: usize) -> Vec<crate::domain::value_objects::ScheduledSmsMessage> {
    (1..=count)
        .map(|i| scheduled_message(&format!("m-{}", i), Some("campaign")))
        .collect()
}

#[tokio::test]
async fn test_list_passes_query_through() {
    let provider = Arc::new(MockSmsProvider::new().with_items(items(3), 2));
    let service = ScheduledMessageService::new(provider.clone());

    let page = service.list(Some("tag=campaign&page=2")).await.unwrap();

    assert_eq!(page.current_page, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.pages, 2);
    assert_eq!(
        provider.list_queries(),
        vec![Some("tag=campaign&page=2".to_string())]
    );
}

#[tokio::test]
async fn test_list_without_query() {
    let provider = Arc::new(MockSmsProvider::new().with_items(items(1), 10));
    let service = ScheduledMessageService::new(provider.clone());

    service.list(Some("")).await.unwrap();
    service.list(None).await.unwrap();

    assert_eq!(provider.list_queries(), vec![None, None]);
}

#[tokio::test]
async fn test_list_all_walks_every_page() {
    let provider = Arc::new(MockSmsProvider::new().with_items(items(5), 2));
    let service = ScheduledMessageService::new(provider.clone());

    let page = service.list_all(Some("all=true&tag=campaign")).await.unwrap();

    let ids: Vec<&str> = page.items.iter().map(|m| m.message_id.as_str()).collect();
    assert_eq!(ids, vec!["m-1", "m-2", "m-3", "m-4", "m-5"]);
    assert_eq!(page.results, 5);
    assert_eq!(page.pages, 1);
    assert_eq!(
        provider.list_queries(),
        vec![
            Some("tag=campaign&page=1".to_string()),
            Some("tag=campaign&page=2".to_string()),
            Some("tag=campaign&page=3".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_list_all_with_no_results() {
    let provider = Arc::new(MockSmsProvider::new());
    let service = ScheduledMessageService::new(provider.clone());

    let page = service.list_all(None).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(provider.list_queries(), vec![Some("page=1".to_string())]);
}

#[tokio::test]
async fn test_get_returns_detail() {
    let provider = Arc::new(MockSmsProvider::new().with_items(items(2), 10));
    let service = ScheduledMessageService::new(provider);

    let detail = service.get("m-2").await.unwrap();
    assert_eq!(detail.message_id, "m-2");
    assert_eq!(detail.tag.as_deref(), Some("campaign"));
}

#[tokio::test]
async fn test_get_blank_id_is_bad_request() {
    let service = ScheduledMessageService::new(Arc::new(MockSmsProvider::new()));

    let err = service.get("  ").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::BadRequest { ref message } if message == error_codes::MISSING_MESSAGE_ID
    ));
}

#[tokio::test]
async fn test_get_unknown_id_relays_not_found() {
    let service = ScheduledMessageService::new(Arc::new(MockSmsProvider::new()));

    match service.get("missing").await.unwrap_err() {
        DomainError::Provider(e) => assert_eq!(e.status, Some(404)),
        other => panic!("Expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_forwards_filter() {
    let provider = Arc::new(MockSmsProvider::new());
    let service = ScheduledMessageService::new(provider.clone());

    let filter = ScheduledMessageFilter::by_tag("campaign").unwrap();
    service.delete(&filter).await.unwrap();

    assert_eq!(provider.deleted_filters(), vec![filter]);
}

#[tokio::test]
async fn test_delete_failure_is_relayed() {
    let failure = ProviderError::http(
        500,
        "DELETE request to 'https://p.test/schedules' failed: Internal Server Error",
        Some(json!("boom")),
    );
    let service = ScheduledMessageService::new(Arc::new(MockSmsProvider::failing(failure.clone())));

    let filter = ScheduledMessageFilter::by_message_id("m-1").unwrap();
    match service.delete(&filter).await.unwrap_err() {
        DomainError::Provider(e) => assert_eq!(e, failure),
        other => panic!("Expected provider error, got {:?}", other),
    }
}
