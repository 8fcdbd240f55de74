//! Transient error notification

use maud::{Markup, html};

/// Toast shown at the bottom of the page; dismissed by click or after a few seconds
#[must_use]
pub fn toast(message: &str) -> Markup {
    html! {
        div class="toast" role="alert" onclick="this.remove()" {
            span class="toast-icon" aria-hidden="true" { "\u{26A0}" }
            span class="toast-message" { (message) }
        }
        script { "setTimeout(function(){var t=document.querySelector('.toast');if(t){t.remove();}},6000);" }
    }
}
