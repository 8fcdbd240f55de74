//! Wire records returned by the backend and the view-models derived from them

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscriber aggregate from `/api/subscribers/count/total`
///
/// `active + inactive == total` is expected but never enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountSummary {
    /// All subscribers
    pub total: u64,
    /// Subscribers currently receiving the newsletter
    pub active: u64,
    /// Subscribers that opted out
    pub inactive: u64,
}

/// Blog aggregate from `/api/blogs/counts`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogCounts {
    /// All posts
    pub total: u64,
    /// Published posts
    pub published: u64,
    /// Unpublished drafts
    #[serde(alias = "drafts")]
    pub draft: u64,
}

/// Body shape `{ "total": n }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalCount {
    /// Total count
    pub total: u64,
}

/// Body shape `{ "count": n }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleCount {
    /// Count
    pub count: u64,
}

/// Newsletter aggregate assembled from three endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NewsletterCounts {
    /// All newsletters
    pub total: u64,
    /// Newsletters waiting for their send time
    pub scheduled: u64,
    /// Newsletters cancelled before sending
    pub cancelled: u64,
}

/// One raw monthly record, `month` in 1..=12
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyCount {
    /// Calendar month index
    pub month: u32,
    /// Count for that month
    pub count: u64,
}

/// One raw subscriber monthly record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyBreakdown {
    /// Calendar month index
    pub month: u32,
    /// Active subscribers in that month
    pub active: u64,
    /// Inactive subscribers in that month
    pub inactive: u64,
    /// All subscribers in that month
    pub total: u64,
}

/// Chart point for a single series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    /// Three-letter month abbreviation
    pub month_label: &'static str,
    /// Count for the month
    pub count: u64,
}

/// Chart point for the subscriber breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubscriberMonthlyPoint {
    /// Three-letter month abbreviation
    pub month_label: &'static str,
    /// Active subscribers
    pub active: u64,
    /// Inactive subscribers
    pub inactive: u64,
    /// All subscribers
    pub total: u64,
}

/// Subscription event from `/api/subscribers/recent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionEvent {
    /// Record identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Subscriber name, when collected
    #[serde(default)]
    pub name: Option<String>,

    /// Subscriber email
    #[serde(default)]
    pub email: Option<String>,

    /// Subscription status, `Subscribed` or anything else
    #[serde(default)]
    pub status: String,

    /// Record creation time
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last status change
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SubscriptionEvent {
    /// Name shown in activity lists
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.email.as_deref().filter(|email| !email.trim().is_empty()))
            .unwrap_or("Unknown subscriber")
    }

    /// When the status last changed
    #[must_use]
    pub fn event_time(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}

/// Recent activity row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentActivityItem {
    /// Record identifier
    pub id: String,
    /// Subscriber name or email
    pub display_name: String,
    /// Human readable action
    pub action_label: &'static str,
    /// "3 days ago" style text, frozen at transform time
    pub relative_time: String,
    /// Single character shown in the avatar bubble
    pub avatar_glyph: String,
}

/// Year chosen in the year selector
///
/// Kept as the raw query value: it is forwarded to the backend verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedYear(String);

impl SelectedYear {
    /// Wrap a raw value
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The current calendar year in UTC
    #[must_use]
    pub fn current() -> Self {
        Self(Utc::now().year().to_string())
    }

    /// Selected year from an optional query value, current year when blank
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => Self::new(value),
            _ => Self::current(),
        }
    }

    /// Raw value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SelectedYear {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for SelectedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
