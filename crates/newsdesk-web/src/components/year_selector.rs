//! Year selector form

use maud::{Markup, html};
use newsdesk_core::transform::year_choices;
use newsdesk_core::types::SelectedYear;

/// GET form that reloads `action` with `?year=`
///
/// Offers `current_year` and the nine years before it. A selected value that
/// matches none of those options verbatim (out of range, or spelled like
/// `02024`) is kept as an extra option so the control shows what was
/// actually requested.
#[must_use]
pub fn year_selector(action: &str, selected: &SelectedYear, current_year: i32) -> Markup {
    let choices: Vec<String> = year_choices(current_year)
        .iter()
        .map(ToString::to_string)
        .collect();
    let listed = choices.iter().any(|value| value == selected.as_str());

    html! {
        form class="year-selector" method="get" action=(action) {
            label for="year" { "Year" }
            select id="year" name="year" onchange="this.form.submit()" {
                @if !listed {
                    option value=(selected.as_str()) selected { (selected.as_str()) }
                }
                @for value in &choices {
                    option value=(value) selected[value == selected.as_str()] { (value) }
                }
            }
            noscript { button type="submit" { "Show" } }
        }
    }
}
