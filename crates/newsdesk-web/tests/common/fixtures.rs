//! Canned backend responses

use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `GET {endpoint}` answers `body` with 200
pub async fn mount_json(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// `GET {endpoint}` answers `body` with 200 after `delay`
pub async fn mount_json_delayed(server: &MockServer, endpoint: &str, body: Value, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// `GET {endpoint}` answers with a bare `status`
pub async fn mount_status(server: &MockServer, endpoint: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// `GET {endpoint}` answers 200 with a body that is not JSON
pub async fn mount_garbage(server: &MockServer, endpoint: &str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(server)
        .await;
}

pub fn subscriber_totals() -> Value {
    json!({ "total": 100, "active": 80, "inactive": 20 })
}

pub fn subscriber_monthly() -> Value {
    json!([
        { "month": 1, "active": 30, "inactive": 5, "total": 35 },
        { "month": 2, "active": 50, "inactive": 15, "total": 65 }
    ])
}

pub fn recent_subscribers() -> Value {
    json!([
        {
            "_id": "64f1c0",
            "name": "grace hopper",
            "email": "grace@example.com",
            "status": "Subscribed",
            "updatedAt": "2020-01-01T00:00:00Z"
        },
        {
            "_id": "64f1c1",
            "email": "alan@example.com",
            "status": "Unsubscribed",
            "createdAt": "2020-01-01T00:00:00Z"
        }
    ])
}

pub fn blog_counts() -> Value {
    json!({ "total": 42, "published": 30, "draft": 12 })
}

/// Monthly blog counts whose January value identifies `year`
pub fn blog_monthly(marker: u64) -> Value {
    json!([{ "month": 1, "count": marker }, { "month": 6, "count": 2 }])
}

/// Every Subscribers endpoint succeeds
pub async fn mount_subscribers_ok(server: &MockServer) {
    mount_json(server, "/api/subscribers/count/total", subscriber_totals()).await;
    mount_json(server, "/api/subscribers/count/monthly", subscriber_monthly()).await;
    mount_json(server, "/api/subscribers/recent", recent_subscribers()).await;
}

/// Every Blogs endpoint succeeds for `year`
pub async fn mount_blogs_ok(server: &MockServer, year: &str, marker: u64) {
    mount_json(server, "/api/blogs/counts", blog_counts()).await;
    mount_json(server, &format!("/api/blogs/count/{year}"), blog_monthly(marker)).await;
}

/// Every Newsletters endpoint succeeds for `year`
pub async fn mount_newsletters_ok(server: &MockServer, year: &str) {
    mount_json(server, "/api/newsletters/counts/total", json!({ "total": 40 })).await;
    mount_json(
        server,
        &format!("/api/newsletters/counts/monthly/{year}"),
        json!([{ "month": 3, "count": 7 }]),
    )
    .await;
    mount_json(server, "/api/newsletters/scheduled/count", json!({ "count": 3 })).await;
    mount_json(server, "/api/newsletters/cancelled/count", json!({ "count": 2 })).await;
}
