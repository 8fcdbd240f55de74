//! Page shell: document head, navigation drawer and top bar

use super::chart::CHART_BOOTSTRAP;
use super::stat_card::Icon;
use crate::preferences::UiPreferences;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const BASE_CSS: &str = r"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,'Segoe UI',Roboto,sans-serif;background:var(--bg);color:var(--text)}
.layout{display:flex;min-height:100vh}
.drawer{background:var(--drawer);color:#fff;width:232px;flex-shrink:0;transition:width .2s;overflow:hidden}
.drawer-closed .drawer{width:64px}
.drawer-closed .nav-label,.drawer-closed .brand-name{display:none}
.brand{padding:20px 16px;font-weight:700;font-size:1.1rem;white-space:nowrap}
.drawer nav a{display:flex;gap:12px;align-items:center;padding:12px 20px;color:inherit;text-decoration:none;opacity:.8}
.drawer nav a.active,.drawer nav a:hover{opacity:1;background:rgba(255,255,255,.08)}
.content{flex:1;min-width:0}
.topbar{display:flex;align-items:center;gap:12px;padding:12px 24px;background:var(--surface);border-bottom:1px solid var(--border)}
.topbar h1{font-size:1.25rem;margin:0;flex:1}
.topbar form{margin:0}
.topbar button{background:none;border:1px solid var(--border);color:var(--text);border-radius:6px;padding:6px 10px;cursor:pointer}
main{padding:24px;display:grid;gap:24px}
.card{background:var(--surface);border:1px solid var(--border);border-radius:10px;padding:16px}
.stat-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:16px}
.stat-card{display:flex;gap:16px;align-items:center}
.stat-icon{font-size:1.8rem}
.stat-title{margin:0;color:var(--muted);font-size:.85rem}
.stat-value{margin:4px 0 0;font-size:1.6rem;font-weight:700}
.panel-title{margin:0 0 12px;font-size:1rem}
.chart{height:320px;width:100%}
.monthly-table table{width:100%;border-collapse:collapse;margin-top:12px}
.monthly-table td,.monthly-table th{padding:6px 8px;border-bottom:1px solid var(--border);text-align:left}
.num{text-align:right!important}
.activity-list ul{list-style:none;margin:0;padding:0}
.activity-row{display:flex;gap:12px;align-items:center;padding:8px 0;border-bottom:1px solid var(--border)}
.avatar{width:36px;height:36px;border-radius:50%;color:#fff;display:flex;align-items:center;justify-content:center;font-weight:700}
.activity-text{flex:1}
.activity-text p{margin:0}
.activity-action,.activity-time,.empty{color:var(--muted);font-size:.85rem}
.year-selector{display:flex;gap:8px;align-items:center;justify-content:flex-end}
.year-selector select{padding:4px 8px;background:var(--surface);color:var(--text);border:1px solid var(--border);border-radius:6px}
.loading{color:var(--muted);font-size:.85rem}
.toast{position:fixed;bottom:24px;left:50%;transform:translateX(-50%);background:var(--negative);color:#fff;padding:12px 20px;border-radius:8px;display:flex;gap:8px;cursor:pointer}
";

/// Entries of the navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    /// Subscriber metrics
    Subscribers,
    /// Blog metrics
    Blogs,
    /// Newsletter metrics
    Newsletters,
}

impl NavItem {
    /// Every entry in drawer order
    pub const ALL: [Self; 3] = [Self::Subscribers, Self::Blogs, Self::Newsletters];

    /// Route of the page
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Subscribers => "/subscribers",
            Self::Blogs => "/blogs",
            Self::Newsletters => "/newsletters",
        }
    }

    /// Drawer and heading text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Subscribers => "Subscribers",
            Self::Blogs => "Blogs",
            Self::Newsletters => "Newsletters",
        }
    }

    const fn icon(self) -> Icon {
        match self {
            Self::Subscribers => Icon::People,
            Self::Blogs => Icon::Article,
            Self::Newsletters => Icon::Mail,
        }
    }
}

/// What the shell needs besides the page body
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Application title shown in the drawer and `<title>`
    pub app_title: &'a str,
    /// Page being rendered
    pub active: NavItem,
    /// Path (with query) the preference forms return to
    pub return_to: String,
    /// Chart library script URL
    pub chart_library_url: &'a str,
    /// Theme and drawer flags
    pub preferences: UiPreferences,
}

/// Wrap `body` in the full document
#[must_use]
pub fn page_shell(ctx: &RenderContext<'_>, body: &Markup) -> Markup {
    let palette = ctx.preferences.palette();
    let drawer_class = if ctx.preferences.drawer_open {
        "drawer-open"
    } else {
        "drawer-closed"
    };
    let theme_label = if ctx.preferences.dark_mode {
        "\u{2600} Light mode"
    } else {
        "\u{263E} Dark mode"
    };

    html! {
        (DOCTYPE)
        html lang="en" data-theme=(palette.name) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.active.label()) " \u{00B7} " (ctx.app_title) }
                style { (PreEscaped(palette.css_variables())) (PreEscaped(BASE_CSS)) }
                script src=(ctx.chart_library_url) defer {}
                script { (PreEscaped(CHART_BOOTSTRAP)) }
            }
            body class=(drawer_class) {
                div class="layout" {
                    aside class="drawer" {
                        div class="brand" {
                            span aria-hidden="true" { "\u{1F4CA} " }
                            span class="brand-name" { (ctx.app_title) }
                        }
                        nav {
                            @for item in NavItem::ALL {
                                a href=(item.path()) class=[(item == ctx.active).then_some("active")] {
                                    span aria-hidden="true" { (item.icon().glyph()) }
                                    span class="nav-label" { (item.label()) }
                                }
                            }
                        }
                    }
                    div class="content" {
                        header class="topbar" {
                            (preference_button("/preferences/drawer", &ctx.return_to, "\u{2630}", "Toggle navigation"))
                            h1 { (ctx.active.label()) }
                            (preference_button("/preferences/theme", &ctx.return_to, theme_label, "Toggle theme"))
                            form method="post" action="/logout" {
                                button type="submit" { "Logout" }
                            }
                        }
                        main { (body) }
                    }
                }
            }
        }
    }
}

fn preference_button(action: &str, return_to: &str, text: &str, aria_label: &str) -> Markup {
    html! {
        form method="post" action=(action) {
            input type="hidden" name="return_to" value=(return_to);
            button type="submit" aria-label=(aria_label) { (text) }
        }
    }
}

/// Minimal document for the signed-out landing page
#[must_use]
pub fn signed_out_page(app_title: &str, preferences: UiPreferences) -> Markup {
    let palette = preferences.palette();
    html! {
        (DOCTYPE)
        html lang="en" data-theme=(palette.name) {
            head {
                meta charset="utf-8";
                title { "Signed out \u{00B7} " (app_title) }
                style { (PreEscaped(palette.css_variables())) (PreEscaped(BASE_CSS)) }
            }
            body {
                main {
                    section class="card" {
                        h1 { (app_title) }
                        p { "You have been signed out." }
                        a href=(NavItem::Subscribers.path()) { "Back to the dashboard" }
                    }
                }
            }
        }
    }
}
