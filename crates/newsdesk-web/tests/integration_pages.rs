//! Integration tests for the dashboard pages against a mock backend

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use common::*;
use newsdesk_core::types::{BlogCounts, CountSummary, NewsletterCounts, SelectedYear};
use newsdesk_web::pages::blogs::BlogsView;
use newsdesk_web::pages::newsletters::FAILURE_MESSAGE;
use newsdesk_web::pages::subscribers::SubscribersView;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn test_subscriber_summary_passes_through_unchanged() {
    let app = TestApp::start().await;
    mount_subscribers_ok(&app.backend).await;

    let response = get(&app.router, "/subscribers").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        app.state.subscribers.snapshot().summary,
        CountSummary {
            total: 100,
            active: 80,
            inactive: 20
        }
    );
    assert!(response.body.contains("Total Subscribers"));
    assert!(response.body.contains(">100</p>"));
    assert!(response.body.contains(">80</p>"));
    assert!(response.body.contains(">20</p>"));
}

#[tokio::test]
async fn test_subscriber_page_renders_activity_and_chart() {
    let app = TestApp::start().await;
    mount_subscribers_ok(&app.backend).await;

    let response = get(&app.router, "/subscribers").await;
    let view = app.state.subscribers.snapshot();

    assert_eq!(view.monthly.len(), 12);
    assert_eq!(view.monthly[1].total, 65);
    assert_eq!(view.recent.len(), 2);
    assert_eq!(view.recent[0].display_name, "grace hopper");
    assert_eq!(view.recent[0].avatar_glyph, "G");
    assert_eq!(view.recent[1].display_name, "alan@example.com");
    assert_eq!(view.recent[1].action_label, "Unsubscribed from newsletter");
    assert!(view.recent[0].relative_time.ends_with("years ago"));

    assert!(response.body.contains("Subscribed to newsletter"));
    assert!(response.body.contains("id=\"subscribers-monthly\""));
    assert!(response.body.contains("<a href=\"/subscribers\" class=\"active\">"));
    assert!(!app.state.subscribers.is_loading());
}

#[tokio::test]
async fn test_one_failed_request_blocks_the_whole_batch() {
    let app = TestApp::start().await;
    mount_subscribers_ok(&app.backend).await;
    get(&app.router, "/subscribers").await;
    let before = app.state.subscribers.snapshot();

    app.backend.reset().await;
    mount_json(
        &app.backend,
        "/api/subscribers/count/total",
        json!({ "total": 500, "active": 400, "inactive": 100 }),
    )
    .await;
    mount_json(&app.backend, "/api/subscribers/count/monthly", json!([])).await;
    mount_status(&app.backend, "/api/subscribers/recent", 500).await;

    let response = get(&app.router, "/subscribers").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.state.subscribers.snapshot(), before);
    assert!(response.body.contains(">100</p>"));
    assert!(!response.body.contains("role=\"alert\""));
    assert!(!app.state.subscribers.is_loading());
}

#[tokio::test]
async fn test_failure_on_first_load_keeps_zero_values() {
    let app = TestApp::start().await;
    mount_status(&app.backend, "/api/subscribers/count/total", 503).await;
    mount_subscribers_ok(&app.backend).await;

    let response = get(&app.router, "/subscribers").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.state.subscribers.snapshot(), SubscribersView::default());
    assert!(response.body.contains("No recent activity."));
}

#[tokio::test]
async fn test_blogs_page_uses_selected_year() {
    let app = TestApp::start().await;
    mount_blogs_ok(&app.backend, "2023", 23).await;

    let response = get(&app.router, "/blogs?year=2023").await;
    let view = app.state.blogs.snapshot();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        view.counts,
        BlogCounts {
            total: 42,
            published: 30,
            draft: 12
        }
    );
    assert_eq!(view.monthly[0].count, 23);
    assert_eq!(view.monthly[5].count, 2);
    assert!(response.body.contains("<option value=\"2023\" selected>2023</option>"));
    assert!(response.body.contains("Blogs published in 2023"));
}

#[tokio::test]
async fn test_blogs_page_defaults_to_current_year() {
    let app = TestApp::start().await;
    let year = Utc::now().year().to_string();
    mount_blogs_ok(&app.backend, &year, 7).await;

    get(&app.router, "/blogs").await;

    assert_eq!(app.state.blogs.snapshot().monthly[0].count, 7);
    assert_eq!(app.state.blogs.current_key(), Some(year));
}

#[tokio::test]
async fn test_malformed_year_is_forwarded_verbatim() {
    let app = TestApp::start().await;
    mount_blogs_ok(&app.backend, "abc", 1).await;

    let response = get(&app.router, "/blogs?year=abc").await;

    assert_eq!(app.state.blogs.snapshot().monthly[0].count, 1);
    assert!(response.body.contains("<option value=\"abc\" selected>abc</option>"));
}

#[tokio::test]
async fn test_undecodable_body_is_a_failure() {
    let app = TestApp::start().await;
    mount_garbage(&app.backend, "/api/blogs/counts").await;
    mount_json(&app.backend, "/api/blogs/count/2022", blog_monthly(9)).await;

    let response = get(&app.router, "/blogs?year=2022").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.state.blogs.snapshot(), BlogsView::default());
    assert!(!response.body.contains("role=\"alert\""));
}

#[tokio::test]
async fn test_newsletters_page_merges_four_endpoints() {
    let app = TestApp::start().await;
    mount_newsletters_ok(&app.backend, "2025").await;

    let response = get(&app.router, "/newsletters?year=2025").await;
    let view = app.state.newsletters.snapshot();

    assert_eq!(
        view.counts,
        NewsletterCounts {
            total: 40,
            scheduled: 3,
            cancelled: 2
        }
    );
    assert_eq!(view.monthly[2].month_label, "Mar");
    assert_eq!(view.monthly[2].count, 7);
    assert!(!response.body.contains(FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_newsletters_failure_shows_toast() {
    let app = TestApp::start().await;
    mount_newsletters_ok(&app.backend, "2025").await;
    get(&app.router, "/newsletters?year=2025").await;

    app.backend.reset().await;
    mount_status(&app.backend, "/api/newsletters/scheduled/count", 500).await;
    mount_newsletters_ok(&app.backend, "2025").await;

    let response = get(&app.router, "/newsletters?year=2025").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(FAILURE_MESSAGE));
    assert!(response.body.contains("role=\"alert\""));
    assert_eq!(app.state.newsletters.snapshot().counts.total, 40);
}

#[tokio::test]
async fn test_backend_timeout_keeps_previous_newsletters() {
    let backend = wiremock::MockServer::start().await;
    let config = TestConfigBuilder::new(backend.uri())
        .with_request_timeout(1)
        .build();
    let app = TestApp::with_config(backend, config);
    mount_newsletters_ok(&app.backend, "2025").await;
    get(&app.router, "/newsletters?year=2025").await;

    app.backend.reset().await;
    mount_json_delayed(
        &app.backend,
        "/api/newsletters/counts/total",
        json!({ "total": 99 }),
        Duration::from_secs(3),
    )
    .await;
    mount_newsletters_ok(&app.backend, "2025").await;

    let response = get(&app.router, "/newsletters?year=2025").await;

    assert!(response.body.contains(FAILURE_MESSAGE));
    assert_eq!(app.state.newsletters.snapshot().counts.total, 40);
    assert!(!app.state.newsletters.is_loading());
}

#[tokio::test]
async fn test_latest_issued_year_wins_when_older_response_is_slower() {
    let app = TestApp::start().await;
    mount_json(&app.backend, "/api/blogs/counts", blog_counts()).await;
    mount_json_delayed(
        &app.backend,
        "/api/blogs/count/2023",
        blog_monthly(23),
        Duration::from_millis(400),
    )
    .await;
    mount_json(&app.backend, "/api/blogs/count/2024", blog_monthly(24)).await;

    let first = get(&app.router, "/blogs?year=2023");
    let second = async {
        sleep(Duration::from_millis(50)).await;
        get(&app.router, "/blogs?year=2024").await
    };
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(app.state.blogs.snapshot().monthly[0].count, 24);
    assert_eq!(app.state.blogs.current_key().as_deref(), Some("2024"));
    assert!(!app.state.blogs.is_loading());
}

#[tokio::test]
async fn test_latest_issued_year_wins_when_newer_response_is_slower() {
    let app = TestApp::start().await;
    mount_json(&app.backend, "/api/blogs/counts", blog_counts()).await;
    mount_json_delayed(
        &app.backend,
        "/api/blogs/count/2023",
        blog_monthly(23),
        Duration::from_millis(150),
    )
    .await;
    mount_json_delayed(
        &app.backend,
        "/api/blogs/count/2024",
        blog_monthly(24),
        Duration::from_millis(400),
    )
    .await;

    let first = get(&app.router, "/blogs?year=2023");
    let second = async {
        sleep(Duration::from_millis(50)).await;
        get(&app.router, "/blogs?year=2024").await
    };
    tokio::join!(first, second);

    assert_eq!(app.state.blogs.snapshot().monthly[0].count, 24);
    assert!(!app.state.blogs.is_loading());
}

#[tokio::test]
async fn test_superseded_request_renders_the_year_it_shows() {
    let app = TestApp::start().await;
    mount_blogs_ok(&app.backend, "2022", 22).await;
    get(&app.router, "/blogs?year=2022").await;
    mount_json_delayed(
        &app.backend,
        "/api/blogs/count/2023",
        blog_monthly(23),
        Duration::from_millis(300),
    )
    .await;
    mount_json_delayed(
        &app.backend,
        "/api/blogs/count/2024",
        blog_monthly(24),
        Duration::from_millis(150),
    )
    .await;

    let older = get(&app.router, "/blogs?year=2023");
    let newer = async {
        sleep(Duration::from_millis(50)).await;
        get(&app.router, "/blogs?year=2024").await
    };
    let (older, newer) = tokio::join!(older, newer);

    for response in [&older, &newer] {
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Blogs published in 2024"));
        assert!(response.body.contains("<option value=\"2024\" selected>2024</option>"));
        assert!(response.body.contains("<td>Jan</td><td class=\"num\">24</td>"));
        assert!(!response.body.contains("Blogs published in 2023"));
        assert!(!response.body.contains("<td>Jan</td><td class=\"num\">22</td>"));
        assert!(!response.body.contains("class=\"loading\""));
    }
    assert_eq!(
        app.state.blogs.snapshot().year,
        Some(SelectedYear::new("2024"))
    );
}

#[tokio::test]
async fn test_concurrent_loads_settle() {
    let app = TestApp::start().await;
    mount_subscribers_ok(&app.backend).await;

    let responses =
        futures::future::join_all((0..5).map(|_| get(&app.router, "/subscribers"))).await;

    assert!(responses.iter().all(|r| r.status == StatusCode::OK));
    for response in &responses {
        assert!(response.body.contains(">100</p>"));
        assert!(response.body.contains("grace hopper"));
        assert!(!response.body.contains("class=\"loading\""));
    }
    assert_eq!(app.state.subscribers.snapshot().summary.total, 100);
    assert!(!app.state.subscribers.is_loading());
}

#[tokio::test]
async fn test_pages_share_no_view_state() {
    let app = TestApp::start().await;
    mount_subscribers_ok(&app.backend).await;

    get(&app.router, "/subscribers").await;

    assert_eq!(app.state.blogs.snapshot(), BlogsView::default());
    assert_eq!(app.state.blogs.current_key(), None);
}
