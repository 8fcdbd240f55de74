//! Subscriber metrics page

use crate::api_client::ApiClient;
use crate::components::{
    Icon, Palette, StatCard, Tone, activity_list, chart_panel, stat_grid,
    subscriber_breakdown_chart,
};
use crate::error::FetchResult;
use crate::fetcher::{CycleOutcome, PageStore};
use chrono::{DateTime, Utc};
use maud::{Markup, html};
use newsdesk_core::transform::{recent_activity, subscriber_monthly_points};
use newsdesk_core::types::{
    CountSummary, MonthlyBreakdown, RecentActivityItem, SubscriberMonthlyPoint, SubscriptionEvent,
};

/// Cycle key; the subscriber endpoints are not year-scoped
pub const CYCLE_KEY: &str = "all";

/// View-state of the Subscribers page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribersView {
    /// Subscriber totals
    pub summary: CountSummary,
    /// Active/inactive breakdown per month
    pub monthly: Vec<SubscriberMonthlyPoint>,
    /// Latest subscription events
    pub recent: Vec<RecentActivityItem>,
}

impl Default for SubscribersView {
    fn default() -> Self {
        Self {
            summary: CountSummary::default(),
            monthly: subscriber_monthly_points(&[]),
            recent: Vec::new(),
        }
    }
}

/// Raw results of one Subscribers fetch cycle
#[derive(Debug, Clone)]
pub struct SubscribersBatch {
    /// `/api/subscribers/count/total`
    pub summary: CountSummary,
    /// `/api/subscribers/count/monthly`
    pub monthly: Vec<MonthlyBreakdown>,
    /// `/api/subscribers/recent`
    pub recent: Vec<SubscriptionEvent>,
    /// Clock reading used for relative times
    pub fetched_at: DateTime<Utc>,
}

impl SubscribersView {
    /// Replace the view-state with a complete batch
    pub fn merge(&mut self, batch: SubscribersBatch) {
        self.summary = batch.summary;
        self.monthly = subscriber_monthly_points(&batch.monthly);
        self.recent = recent_activity(&batch.recent, batch.fetched_at);
    }
}

/// Issue the three Subscribers requests concurrently and wait for all of them
///
/// # Errors
///
/// Returns the first request failure; the other results are dropped.
pub async fn fetch(client: &ApiClient) -> FetchResult<SubscribersBatch> {
    let (summary, monthly, recent) = tokio::try_join!(
        client.subscriber_totals(),
        client.subscriber_monthly_counts(),
        client.recent_subscribers(),
    )?;

    Ok(SubscribersBatch {
        summary,
        monthly,
        recent,
        fetched_at: Utc::now(),
    })
}

/// Run a fetch cycle against `store`
pub async fn refresh(store: &PageStore<SubscribersView>, client: &ApiClient) -> CycleOutcome {
    store
        .run_cycle(CYCLE_KEY, fetch(client), SubscribersView::merge)
        .await
}

/// Page body
#[must_use]
pub fn render(view: &SubscribersView, loading: bool, palette: &Palette) -> Markup {
    let cards = [
        StatCard::new("Total Subscribers", view.summary.total, Icon::People),
        StatCard::new("Active Subscribers", view.summary.active, Icon::PersonActive)
            .tone(Tone::Positive),
        StatCard::new("Inactive Subscribers", view.summary.inactive, Icon::PersonInactive)
            .tone(Tone::Negative),
    ];
    let chart = subscriber_breakdown_chart(
        "subscribers-monthly",
        "Subscribers per month",
        &view.monthly,
        palette,
    );

    html! {
        (super::loading_note(loading))
        (stat_grid(&cards, palette))
        (chart_panel(&chart, palette))
        (activity_list("Recent activity", &view.recent, palette))
    }
}
