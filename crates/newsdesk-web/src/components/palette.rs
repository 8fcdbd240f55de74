//! Light and dark colour palettes

/// Colours used by every component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Palette name, also the chart library theme
    pub name: &'static str,
    /// Page background
    pub background: &'static str,
    /// Card and panel background
    pub surface: &'static str,
    /// Drawer background
    pub drawer: &'static str,
    /// Primary text
    pub text: &'static str,
    /// Secondary text
    pub muted: &'static str,
    /// Borders and grid lines
    pub border: &'static str,
    /// Highlight colour
    pub accent: &'static str,
    /// "Good" values such as active subscribers
    pub positive: &'static str,
    /// "Bad" values such as cancellations
    pub negative: &'static str,
    /// Neutral values such as scheduled items
    pub neutral: &'static str,
}

impl Palette {
    /// Light theme
    pub const LIGHT: Self = Self {
        name: "light",
        background: "#f4f6fa",
        surface: "#ffffff",
        drawer: "#1f2a44",
        text: "#1c2333",
        muted: "#6b7385",
        border: "#e1e5ee",
        accent: "#3d5afe",
        positive: "#2e7d32",
        negative: "#c62828",
        neutral: "#ef8f00",
    };

    /// Dark theme
    pub const DARK: Self = Self {
        name: "dark",
        background: "#10141f",
        surface: "#1a2030",
        drawer: "#0b0e16",
        text: "#e6e9f2",
        muted: "#9aa3b8",
        border: "#2a3247",
        accent: "#8c9eff",
        positive: "#66bb6a",
        negative: "#ef5350",
        neutral: "#ffb74d",
    };

    /// CSS custom properties for this palette
    #[must_use]
    pub fn css_variables(&self) -> String {
        format!(
            ":root{{--bg:{};--surface:{};--drawer:{};--text:{};--muted:{};--border:{};--accent:{};--positive:{};--negative:{};--neutral:{};}}",
            self.background,
            self.surface,
            self.drawer,
            self.text,
            self.muted,
            self.border,
            self.accent,
            self.positive,
            self.negative,
            self.neutral,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::LIGHT.background, Palette::DARK.background);
        assert_ne!(Palette::LIGHT.text, Palette::DARK.text);
    }

    #[test]
    fn test_css_variables() {
        let css = Palette::DARK.css_variables();

        assert!(css.starts_with(":root{"));
        assert!(css.contains("--bg:#10141f;"));
        assert!(css.contains("--accent:#8c9eff;"));
    }
}
