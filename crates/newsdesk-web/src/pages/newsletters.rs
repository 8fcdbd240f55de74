//! Newsletter metrics page

use crate::api_client::ApiClient;
use crate::components::{
    Icon, Palette, StatCard, Tone, chart_panel, monthly_bar_chart, monthly_table, stat_grid,
    toast, year_selector,
};
use crate::error::FetchResult;
use crate::fetcher::{CycleOutcome, PageStore};
use maud::{Markup, html};
use newsdesk_core::transform::monthly_points;
use newsdesk_core::types::{MonthlyCount, MonthlyPoint, NewsletterCounts, SelectedYear};

/// Text of the toast shown when a cycle fails
pub const FAILURE_MESSAGE: &str = "Failed to load newsletter statistics";

/// View-state of the Newsletters page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewslettersView {
    /// Total, scheduled and cancelled newsletters
    pub counts: NewsletterCounts,
    /// Newsletters per month of `year`
    pub monthly: Vec<MonthlyPoint>,
    /// Year the monthly series belongs to; `None` until a cycle applies
    pub year: Option<SelectedYear>,
}

impl Default for NewslettersView {
    fn default() -> Self {
        Self {
            counts: NewsletterCounts::default(),
            monthly: monthly_points(&[]),
            year: None,
        }
    }
}

/// Raw results of one Newsletters fetch cycle
#[derive(Debug, Clone)]
pub struct NewslettersBatch {
    /// Merged counts from the three count endpoints
    pub counts: NewsletterCounts,
    /// `/api/newsletters/counts/monthly/{year}`
    pub monthly: Vec<MonthlyCount>,
    /// Year the batch was fetched for
    pub year: SelectedYear,
}

impl NewslettersView {
    /// Replace the view-state with a complete batch
    pub fn merge(&mut self, batch: NewslettersBatch) {
        self.counts = batch.counts;
        self.monthly = monthly_points(&batch.monthly);
        self.year = Some(batch.year);
    }
}

/// Issue the four Newsletters requests concurrently and wait for all of them
///
/// # Errors
///
/// Returns the first request failure; the other results are dropped.
pub async fn fetch(client: &ApiClient, year: &SelectedYear) -> FetchResult<NewslettersBatch> {
    let (total, monthly, scheduled, cancelled) = tokio::try_join!(
        client.newsletter_total(),
        client.newsletter_monthly_counts(year),
        client.scheduled_newsletter_count(),
        client.cancelled_newsletter_count(),
    )?;

    Ok(NewslettersBatch {
        counts: NewsletterCounts {
            total: total.total,
            scheduled: scheduled.count,
            cancelled: cancelled.count,
        },
        monthly,
        year: year.clone(),
    })
}

/// Run a fetch cycle for `year` against `store`
pub async fn refresh(
    store: &PageStore<NewslettersView>,
    client: &ApiClient,
    year: &SelectedYear,
) -> CycleOutcome {
    store
        .run_cycle(year.as_str(), fetch(client, year), NewslettersView::merge)
        .await
}

/// Page body; `failed` adds the error toast
///
/// Labelled with the year of the data on display, or `requested` before any
/// cycle has applied.
#[must_use]
pub fn render(
    view: &NewslettersView,
    requested: &SelectedYear,
    current_year: i32,
    loading: bool,
    failed: bool,
    palette: &Palette,
) -> Markup {
    let year = view.year.as_ref().unwrap_or(requested);
    let cards = [
        StatCard::new("Total Newsletters", view.counts.total, Icon::Mail),
        StatCard::new("Scheduled", view.counts.scheduled, Icon::Scheduled).tone(Tone::Neutral),
        StatCard::new("Cancelled", view.counts.cancelled, Icon::Cancelled).tone(Tone::Negative),
    ];
    let chart = monthly_bar_chart(
        "newsletters-monthly",
        format!("Newsletters sent in {year}"),
        "Newsletters",
        &view.monthly,
        palette,
    );

    html! {
        (year_selector("/newsletters", year, current_year))
        (super::loading_note(loading))
        (stat_grid(&cards, palette))
        (chart_panel(&chart, palette))
        (monthly_table("Monthly breakdown", &view.monthly))
        @if failed {
            (toast(FAILURE_MESSAGE))
        }
    }
}
