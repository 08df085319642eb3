use anyhow::Result;
use httpmock::prelude::*;
use pythonpro_pages::adapters::HttpSubscriptionQueue;
use pythonpro_pages::core::SubscriptionQueue;
use pythonpro_pages::domain::model::SubscriptionRequest;
use pythonpro_pages::{build_page_service, PageKind, PageRequest, PagesError, Route, SiteConfig};
use std::collections::HashMap;

fn request(phone: Option<&str>, user_id: Option<u64>) -> SubscriptionRequest {
    SubscriptionRequest {
        session_id: Some("abc123".to_string()),
        name: "Moacir".to_string(),
        email: "moacir@python.pro.br".to_string(),
        marketing_tag: "webinario-data-science".to_string(),
        phone: phone.map(str::to_string),
        user_id,
    }
}

#[tokio::test]
async fn test_http_queue_posts_task_arguments() -> Result<()> {
    let server = MockServer::start_async().await;

    let task_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/tasks/subscribe").json_body(serde_json::json!({
                "session_id": "abc123",
                "name": "Moacir",
                "email": "moacir@python.pro.br",
                "marketing_tag": "webinario-data-science",
                "phone": "+5511999999999",
                "id": 7
            }));
            then.status(202);
        })
        .await;

    let queue = HttpSubscriptionQueue::new(server.url("/tasks/subscribe"), 5)?;
    queue
        .subscribe_with_no_role(request(Some("+5511999999999"), Some(7)))
        .await?;

    task_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_http_queue_omits_optional_arguments() -> Result<()> {
    let server = MockServer::start_async().await;

    let task_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/tasks/subscribe").json_body(serde_json::json!({
                "session_id": "abc123",
                "name": "Moacir",
                "email": "moacir@python.pro.br",
                "marketing_tag": "webinario-data-science"
            }));
            then.status(200);
        })
        .await;

    let queue = HttpSubscriptionQueue::new(server.url("/tasks/subscribe"), 5)?;
    queue.subscribe_with_no_role(request(None, None)).await?;

    task_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_http_queue_reports_rejection() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/tasks/subscribe");
            then.status(500);
        })
        .await;

    let queue = HttpSubscriptionQueue::new(server.url("/tasks/subscribe"), 5)?;
    let err = queue
        .subscribe_with_no_role(request(None, None))
        .await
        .unwrap_err();

    assert!(matches!(err, PagesError::QueueRejected { status: 500 }));
    Ok(())
}

#[tokio::test]
async fn test_configured_service_redirects_even_when_broker_fails() -> Result<()> {
    let server = MockServer::start_async().await;

    let task_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/tasks/subscribe");
            then.status(503);
        })
        .await;

    let config = SiteConfig::from_toml_str(&format!(
        r#"
[subscription]
endpoint = "{}"
timeout_seconds = 5

[cohort]
slug = "python-2024"
"#,
        server.url("/tasks/subscribe")
    ))?;

    let service = build_page_service(&config)?;
    let form: HashMap<String, String> = [("name", "Moacir"), ("email", "moacir@python.pro.br")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let response = service
        .handle(PageRequest::post(
            Route::Page(PageKind::DsWebinarLandingPage).path(),
            form,
        ))
        .await?;

    assert_eq!(response.status(), 302);
    task_mock.assert_async().await;
    Ok(())
}
