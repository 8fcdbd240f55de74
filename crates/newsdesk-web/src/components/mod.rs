//! Presentational building blocks shared by the pages

pub mod activity_list;
pub mod chart;
pub mod palette;
pub mod shell;
pub mod stat_card;
pub mod toast;
pub mod year_selector;

pub use activity_list::activity_list;
pub use chart::{
    ChartSpec, chart_panel, monthly_bar_chart, monthly_table, subscriber_breakdown_chart,
};
pub use palette::Palette;
pub use shell::{NavItem, RenderContext, page_shell, signed_out_page};
pub use stat_card::{Icon, StatCard, Tone, stat_grid};
pub use toast::toast;
pub use year_selector::year_selector;
