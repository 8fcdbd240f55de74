//! Dashboard pages
//!
//! Each page owns a view-state type, a `fetch` that issues its batch of
//! backend requests, a `refresh` that runs one fetch cycle against the
//! page's store and a `render` that turns the view-state into markup.

pub mod blogs;
pub mod newsletters;
pub mod subscribers;

use maud::{Markup, html};

fn loading_note(loading: bool) -> Markup {
    html! {
        @if loading {
            p class="loading" role="status" { "Loading\u{2026}" }
        }
    }
}
