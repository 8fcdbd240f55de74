//! Chart panels
//!
//! Charts are rendered client-side by the chart library loaded in the page
//! head. Each panel carries its options as JSON in a `data-chart` attribute;
//! [`CHART_BOOTSTRAP`] initialises every such element on load.

use super::palette::Palette;
use super::stat_card::format_count;
use maud::{Markup, html};
use newsdesk_core::types::{MonthlyPoint, SubscriberMonthlyPoint};
use serde_json::{Value, json};

/// Script that mounts every `[data-chart]` element
pub const CHART_BOOTSTRAP: &str = r"document.addEventListener('DOMContentLoaded', function () {
  if (typeof echarts === 'undefined') { return; }
  document.querySelectorAll('[data-chart]').forEach(function (el) {
    var chart = echarts.init(el, el.dataset.theme === 'dark' ? 'dark' : null);
    chart.setOption(JSON.parse(el.dataset.chart));
    window.addEventListener('resize', function () { chart.resize(); });
  });
});";

/// A chart container and its options
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// DOM id of the container
    pub id: &'static str,
    /// Panel heading
    pub title: String,
    /// Chart library options
    pub options: Value,
}

/// Single-series bar chart of monthly counts
#[must_use]
pub fn monthly_bar_chart(
    id: &'static str,
    title: impl Into<String>,
    series_name: &str,
    points: &[MonthlyPoint],
    palette: &Palette,
) -> ChartSpec {
    let labels: Vec<&str> = points.iter().map(|p| p.month_label).collect();
    let counts: Vec<u64> = points.iter().map(|p| p.count).collect();

    ChartSpec {
        id,
        title: title.into(),
        options: json!({
            "backgroundColor": "transparent",
            "textStyle": { "color": palette.text },
            "tooltip": { "trigger": "axis" },
            "grid": { "left": "3%", "right": "4%", "bottom": "3%", "containLabel": true },
            "xAxis": base_category_axis(&labels, palette),
            "yAxis": base_value_axis(palette),
            "series": [{
                "name": series_name,
                "type": "bar",
                "data": counts,
                "itemStyle": { "color": palette.accent, "borderRadius": [4, 4, 0, 0] },
            }],
        }),
    }
}

/// Stacked active/inactive bars with a total line
#[must_use]
pub fn subscriber_breakdown_chart(
    id: &'static str,
    title: impl Into<String>,
    points: &[SubscriberMonthlyPoint],
    palette: &Palette,
) -> ChartSpec {
    let labels: Vec<&str> = points.iter().map(|p| p.month_label).collect();
    let active: Vec<u64> = points.iter().map(|p| p.active).collect();
    let inactive: Vec<u64> = points.iter().map(|p| p.inactive).collect();
    let total: Vec<u64> = points.iter().map(|p| p.total).collect();

    ChartSpec {
        id,
        title: title.into(),
        options: json!({
            "backgroundColor": "transparent",
            "textStyle": { "color": palette.text },
            "tooltip": { "trigger": "axis" },
            "legend": { "textStyle": { "color": palette.text } },
            "grid": { "left": "3%", "right": "4%", "bottom": "3%", "top": 48, "containLabel": true },
            "xAxis": base_category_axis(&labels, palette),
            "yAxis": base_value_axis(palette),
            "series": [
                { "name": "Active", "type": "bar", "stack": "subscribers", "data": active,
                  "itemStyle": { "color": palette.positive } },
                { "name": "Inactive", "type": "bar", "stack": "subscribers", "data": inactive,
                  "itemStyle": { "color": palette.negative } },
                { "name": "Total", "type": "line", "data": total, "smooth": true,
                  "itemStyle": { "color": palette.accent } },
            ],
        }),
    }
}

fn base_category_axis(labels: &[&str], palette: &Palette) -> Value {
    json!({
        "type": "category",
        "data": labels,
        "axisLabel": { "color": palette.muted },
        "axisLine": { "lineStyle": { "color": palette.border } },
    })
}

fn base_value_axis(palette: &Palette) -> Value {
    json!({
        "type": "value",
        "minInterval": 1,
        "axisLabel": { "color": palette.muted },
        "splitLine": { "lineStyle": { "color": palette.border } },
    })
}

/// Panel holding a chart container
#[must_use]
pub fn chart_panel(spec: &ChartSpec, palette: &Palette) -> Markup {
    html! {
        section class="card chart-panel" {
            h3 class="panel-title" { (spec.title) }
            div id=(spec.id)
                class="chart"
                data-theme=(palette.name)
                data-chart=(spec.options.to_string()) {}
        }
    }
}

/// Month-by-month table of a single series
#[must_use]
pub fn monthly_table(caption: &str, points: &[MonthlyPoint]) -> Markup {
    let total: u64 = points.iter().map(|p| p.count).sum();
    html! {
        details class="card monthly-table" {
            summary { (caption) }
            table {
                thead { tr { th { "Month" } th class="num" { "Count" } } }
                tbody {
                    @for point in points {
                        tr { td { (point.month_label) } td class="num" { (format_count(point.count)) } }
                    }
                }
                tfoot { tr { th { "Total" } th class="num" { (format_count(total)) } } }
            }
        }
    }
}
