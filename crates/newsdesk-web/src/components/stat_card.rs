//! Summary cards: one number, a title and an icon

use super::palette::Palette;
use maud::{Markup, html};

/// Glyphs used on cards and in the navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Groups of people
    People,
    /// Person with a check mark
    PersonActive,
    /// Person with a cross
    PersonInactive,
    /// Document
    Article,
    /// Published document
    Published,
    /// Pencil
    Draft,
    /// Envelope
    Mail,
    /// Clock
    Scheduled,
    /// Prohibition sign
    Cancelled,
}

impl Icon {
    /// Text glyph rendered for the icon
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::People => "\u{1F465}",
            Self::PersonActive => "\u{2714}",
            Self::PersonInactive => "\u{2716}",
            Self::Article => "\u{1F4C4}",
            Self::Published => "\u{1F4F0}",
            Self::Draft => "\u{270E}",
            Self::Mail => "\u{2709}",
            Self::Scheduled => "\u{23F0}",
            Self::Cancelled => "\u{1F6AB}",
        }
    }
}

/// Which palette colour a card value is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Accent colour
    Accent,
    /// Positive colour
    Positive,
    /// Negative colour
    Negative,
    /// Neutral colour
    Neutral,
}

impl Tone {
    const fn color(self, palette: &Palette) -> &'static str {
        match self {
            Self::Accent => palette.accent,
            Self::Positive => palette.positive,
            Self::Negative => palette.negative,
            Self::Neutral => palette.neutral,
        }
    }
}

/// One summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    /// Caption above the value
    pub title: &'static str,
    /// Displayed value
    pub value: u64,
    /// Icon in the card corner
    pub icon: Icon,
    /// Colour of icon and value
    pub tone: Tone,
}

impl StatCard {
    /// Card in the accent colour
    #[must_use]
    pub const fn new(title: &'static str, value: u64, icon: Icon) -> Self {
        Self {
            title,
            value,
            icon,
            tone: Tone::Accent,
        }
    }

    /// Same card in another colour
    #[must_use]
    pub const fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

/// Render one card
#[must_use]
pub fn stat_card(card: &StatCard, palette: &Palette) -> Markup {
    let color = card.tone.color(palette);
    html! {
        div class="card stat-card" {
            div class="stat-icon" style={ "color:" (color) } aria-hidden="true" { (card.icon.glyph()) }
            div class="stat-body" {
                p class="stat-title" { (card.title) }
                p class="stat-value" style={ "color:" (color) } { (format_count(card.value)) }
            }
        }
    }
}

/// Render a row of cards
#[must_use]
pub fn stat_grid(cards: &[StatCard], palette: &Palette) -> Markup {
    html! {
        section class="stat-grid" {
            @for card in cards {
                (stat_card(card, palette))
            }
        }
    }
}

/// Thousands-separated integer
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
