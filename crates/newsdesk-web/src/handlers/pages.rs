//! Page handlers: run the page's fetch cycle, then render

use crate::components::{NavItem, page_shell, signed_out_page};
use crate::fetcher::{CycleOutcome, PageStore};
use crate::pages::{blogs, newsletters, subscribers};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::Uri,
    response::Redirect,
};
use chrono::{Datelike, Utc};
use maud::Markup;
use newsdesk_core::types::SelectedYear;
use serde::Deserialize;
use std::sync::Arc;

/// `?year=` on the year-scoped pages
#[derive(Debug, Default, Deserialize)]
pub struct YearQuery {
    /// Raw year, forwarded to the backend as typed
    pub year: Option<String>,
}

/// `GET /`
pub async fn root() -> Redirect {
    Redirect::to(NavItem::Subscribers.path())
}

/// `GET /blogs`
pub async fn blogs_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<YearQuery>,
    uri: Uri,
) -> Markup {
    let year = SelectedYear::from_query(query.year.as_deref());
    let outcome = blogs::refresh(&state.blogs, &state.api_client, &year).await;
    await_newest(&state.blogs, &outcome).await;

    let ctx = state.render_context(NavItem::Blogs, &uri);
    let palette = ctx.preferences.palette();
    let loading = state.blogs.is_loading();
    let body = state
        .blogs
        .read(|view| blogs::render(view, &year, current_year(), loading, palette));

    page_shell(&ctx, &body)
}

/// `GET /newsletters`
pub async fn newsletters_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<YearQuery>,
    uri: Uri,
) -> Markup {
    let year = SelectedYear::from_query(query.year.as_deref());
    let outcome = newsletters::refresh(&state.newsletters, &state.api_client, &year).await;
    await_newest(&state.newsletters, &outcome).await;
    let failed = outcome.error().is_some();

    let ctx = state.render_context(NavItem::Newsletters, &uri);
    let palette = ctx.preferences.palette();
    let loading = state.newsletters.is_loading();
    let body = state.newsletters.read(|view| {
        newsletters::render(view, &year, current_year(), loading, failed, palette)
    });

    page_shell(&ctx, &body)
}

/// `GET /subscribers`
pub async fn subscribers_page(State(state): State<Arc<AppState>>, uri: Uri) -> Markup {
    let outcome = subscribers::refresh(&state.subscribers, &state.api_client).await;
    await_newest(&state.subscribers, &outcome).await;

    let ctx = state.render_context(NavItem::Subscribers, &uri);
    let palette = ctx.preferences.palette();
    let loading = state.subscribers.is_loading();
    let body = state
        .subscribers
        .read(|view| subscribers::render(view, loading, palette));

    page_shell(&ctx, &body)
}

/// `GET /login`
pub async fn login_page(State(state): State<Arc<AppState>>) -> Markup {
    signed_out_page(&state.config.ui.title, state.preferences.get())
}

/// A superseded request renders whatever the newest cycle settles on
async fn await_newest<V: Send + Sync>(store: &PageStore<V>, outcome: &CycleOutcome) {
    if matches!(outcome, CycleOutcome::Superseded) {
        store.wait_settled().await;
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}
