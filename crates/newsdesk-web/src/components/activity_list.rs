//! Recent subscriber activity list

use super::palette::Palette;
use maud::{Markup, html};
use newsdesk_core::transform::{SUBSCRIBED_STATUS, status_label};
use newsdesk_core::types::RecentActivityItem;

/// Render the activity list, or an empty-state line
#[must_use]
pub fn activity_list(title: &str, items: &[RecentActivityItem], palette: &Palette) -> Markup {
    html! {
        section class="card activity-list" {
            h3 class="panel-title" { (title) }
            @if items.is_empty() {
                p class="empty" { "No recent activity." }
            } @else {
                ul {
                    @for item in items {
                        (activity_row(item, palette))
                    }
                }
            }
        }
    }
}

fn activity_row(item: &RecentActivityItem, palette: &Palette) -> Markup {
    let subscribed = item.action_label == status_label(SUBSCRIBED_STATUS);
    let color = if subscribed {
        palette.positive
    } else {
        palette.negative
    };
    html! {
        li class="activity-row" data-id=(item.id) {
            span class="avatar" style={ "background:" (color) } { (item.avatar_glyph) }
            div class="activity-text" {
                p class="activity-name" { (item.display_name) }
                p class="activity-action" { (item.action_label) }
            }
            span class="activity-time" { (item.relative_time) }
        }
    }
}
