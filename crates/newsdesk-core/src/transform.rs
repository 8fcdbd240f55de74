//! Pure mappings from backend records to the shapes the views consume
//!
//! Everything here is synchronous and deterministic: callers pass the
//! reference time in, so the same inputs always render the same text.

use crate::types::{
    MonthlyBreakdown, MonthlyCount, MonthlyPoint, RecentActivityItem, SubscriberMonthlyPoint,
    SubscriptionEvent,
};
use chrono::{DateTime, Utc};
use tracing::warn;

/// Short month names, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Divisors tried in order by [`format_relative_time`]
const TIME_BUCKETS: [(i64, &str); 6] = [
    (31_536_000, "year"),
    (2_592_000, "month"),
    (604_800, "week"),
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
];

/// Number of choices offered by the year selector
pub const YEAR_CHOICES: i32 = 10;

/// Status value that maps to the "subscribed" label
pub const SUBSCRIBED_STATUS: &str = "Subscribed";

/// Map a 1-based month index to its abbreviation
#[must_use]
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_ABBREVIATIONS.get(index).copied()
}

/// Inverse of [`month_abbreviation`]
#[must_use]
pub fn month_index(abbreviation: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|name| *name == abbreviation)
        .and_then(|index| u32::try_from(index + 1).ok())
}

/// Render an elapsed duration as "N unit(s) ago"
///
/// The first bucket whose quotient reaches one wins. Anything under a
/// minute, including negative values from clock skew, is "Just now".
#[must_use]
pub fn format_relative_time(elapsed_seconds: i64) -> String {
    for (divisor, unit) in TIME_BUCKETS {
        let quotient = elapsed_seconds / divisor;
        if quotient == 1 {
            return format!("1 {unit} ago");
        }
        if quotient > 1 {
            return format!("{quotient} {unit}s ago");
        }
    }
    "Just now".to_string()
}

/// Relative time between `timestamp` and `now`
#[must_use]
pub fn relative_time_since(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_relative_time((now - timestamp).num_seconds())
}

/// Action text for a subscription status
#[must_use]
pub fn status_label(status: &str) -> &'static str {
    if status == SUBSCRIBED_STATUS {
        "Subscribed to newsletter"
    } else {
        "Unsubscribed from newsletter"
    }
}

/// Avatar character for a display name
#[must_use]
pub fn avatar_glyph(display_name: &str) -> String {
    display_name
        .chars()
        .find(|c| !c.is_whitespace())
        .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect())
}

/// Years offered by the selector: `current` and the nine before it, newest first
#[must_use]
pub fn year_choices(current: i32) -> Vec<i32> {
    (0..YEAR_CHOICES).map(|offset| current - offset).collect()
}

/// Twelve chart points in calendar order
///
/// Months missing from `records` are zero. Records outside 1..=12 are
/// dropped with a warning; repeated months are summed.
#[must_use]
pub fn monthly_points(records: &[MonthlyCount]) -> Vec<MonthlyPoint> {
    let mut counts = [0_u64; 12];
    for record in records {
        match month_slot(record.month).and_then(|slot| counts.get_mut(slot)) {
            Some(count) => *count = count.saturating_add(record.count),
            None => warn!(month = record.month, "Dropping monthly record with invalid month"),
        }
    }

    MONTH_ABBREVIATIONS
        .into_iter()
        .zip(counts)
        .map(|(label, count)| MonthlyPoint {
            month_label: label,
            count,
        })
        .collect()
}

/// Twelve subscriber breakdown points in calendar order
///
/// Same filling rules as [`monthly_points`].
#[must_use]
pub fn subscriber_monthly_points(records: &[MonthlyBreakdown]) -> Vec<SubscriberMonthlyPoint> {
    let mut points: Vec<SubscriberMonthlyPoint> = MONTH_ABBREVIATIONS
        .into_iter()
        .map(|label| SubscriberMonthlyPoint {
            month_label: label,
            active: 0,
            inactive: 0,
            total: 0,
        })
        .collect();

    for record in records {
        let Some(point) = month_slot(record.month).and_then(|slot| points.get_mut(slot)) else {
            warn!(month = record.month, "Dropping subscriber record with invalid month");
            continue;
        };
        point.active = point.active.saturating_add(record.active);
        point.inactive = point.inactive.saturating_add(record.inactive);
        point.total = point.total.saturating_add(record.total);
    }

    points
}

/// Activity rows for recent subscription events, relative times frozen at `now`
///
/// Events without any timestamp read "Just now".
#[must_use]
pub fn recent_activity(
    events: &[SubscriptionEvent],
    now: DateTime<Utc>,
) -> Vec<RecentActivityItem> {
    events
        .iter()
        .map(|event| {
            let display_name = event.display_name().to_string();
            RecentActivityItem {
                id: event.id.clone(),
                avatar_glyph: avatar_glyph(&display_name),
                action_label: status_label(&event.status),
                relative_time: event
                    .event_time()
                    .map_or_else(|| format_relative_time(0), |at| relative_time_since(at, now)),
                display_name,
            }
        })
        .collect()
}

fn month_slot(month: u32) -> Option<usize> {
    usize::try_from(month)
        .ok()?
        .checked_sub(1)
        .filter(|slot| *slot < MONTH_ABBREVIATIONS.len())
}
