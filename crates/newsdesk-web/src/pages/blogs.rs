//! Blog metrics page

use crate::api_client::ApiClient;
use crate::components::{
    Icon, Palette, StatCard, Tone, chart_panel, monthly_bar_chart, monthly_table, stat_grid,
    year_selector,
};
use crate::error::FetchResult;
use crate::fetcher::{CycleOutcome, PageStore};
use maud::{Markup, html};
use newsdesk_core::transform::monthly_points;
use newsdesk_core::types::{BlogCounts, MonthlyCount, MonthlyPoint, SelectedYear};

/// View-state of the Blogs page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogsView {
    /// Post totals
    pub counts: BlogCounts,
    /// Posts per month of `year`
    pub monthly: Vec<MonthlyPoint>,
    /// Year the monthly series belongs to; `None` until a cycle applies
    pub year: Option<SelectedYear>,
}

impl Default for BlogsView {
    fn default() -> Self {
        Self {
            counts: BlogCounts::default(),
            monthly: monthly_points(&[]),
            year: None,
        }
    }
}

/// Raw results of one Blogs fetch cycle
#[derive(Debug, Clone)]
pub struct BlogsBatch {
    /// `/api/blogs/counts`
    pub counts: BlogCounts,
    /// `/api/blogs/count/{year}`
    pub monthly: Vec<MonthlyCount>,
    /// Year the batch was fetched for
    pub year: SelectedYear,
}

impl BlogsView {
    /// Replace the view-state with a complete batch
    pub fn merge(&mut self, batch: BlogsBatch) {
        self.counts = batch.counts;
        self.monthly = monthly_points(&batch.monthly);
        self.year = Some(batch.year);
    }
}

/// Issue both Blogs requests concurrently and wait for both
///
/// # Errors
///
/// Returns the first request failure; the other result is dropped.
pub async fn fetch(client: &ApiClient, year: &SelectedYear) -> FetchResult<BlogsBatch> {
    let (counts, monthly) =
        tokio::try_join!(client.blog_counts(), client.blog_monthly_counts(year))?;
    Ok(BlogsBatch {
        counts,
        monthly,
        year: year.clone(),
    })
}

/// Run a fetch cycle for `year` against `store`
pub async fn refresh(
    store: &PageStore<BlogsView>,
    client: &ApiClient,
    year: &SelectedYear,
) -> CycleOutcome {
    store
        .run_cycle(year.as_str(), fetch(client, year), BlogsView::merge)
        .await
}

/// Page body
///
/// The heading and selector follow the year of the data on display;
/// `requested` only labels a view no cycle has filled yet.
#[must_use]
pub fn render(
    view: &BlogsView,
    requested: &SelectedYear,
    current_year: i32,
    loading: bool,
    palette: &Palette,
) -> Markup {
    let year = view.year.as_ref().unwrap_or(requested);
    let cards = [
        StatCard::new("Total Blogs", view.counts.total, Icon::Article),
        StatCard::new("Published", view.counts.published, Icon::Published).tone(Tone::Positive),
        StatCard::new("Drafts", view.counts.draft, Icon::Draft).tone(Tone::Neutral),
    ];
    let chart = monthly_bar_chart(
        "blogs-monthly",
        format!("Blogs published in {year}"),
        "Blogs",
        &view.monthly,
        palette,
    );

    html! {
        (year_selector("/blogs", year, current_year))
        (super::loading_note(loading))
        (stat_grid(&cards, palette))
        (chart_panel(&chart, palette))
        (monthly_table("Monthly breakdown", &view.monthly))
    }
}
