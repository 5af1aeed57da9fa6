//! UI theme definitions.

use egui::{Color32, Visuals};

use crate::storage::ThemePreference;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Light => light_visuals(),
            Theme::Dark => dark_visuals(),
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl From<ThemePreference> for Theme {
    fn from(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        }
    }
}

/// Brand colors shared by both themes.
pub struct Brand;

impl Brand {
    /// Primary accent (ocean blue)
    pub const ACCENT: Color32 = Color32::from_rgb(14, 116, 144);
    /// Favorite heart
    pub const FAVORITE: Color32 = Color32::from_rgb(225, 29, 72);
    /// Rating star
    pub const STAR: Color32 = Color32::from_rgb(245, 158, 11);
    /// Confirmed status
    pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
    /// Pending status
    pub const PENDING: Color32 = Color32::from_rgb(234, 160, 0);
    /// Validation errors
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color (zinc-50)
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 250);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(250, 250, 250);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(24, 24, 27);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(82, 82, 91);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(228, 228, 231);
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(9, 9, 11);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(24, 24, 27);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(39, 39, 42);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(244, 244, 245);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(161, 161, 170);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(63, 63, 70);
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(244, 244, 245);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(228, 228, 231);
    visuals.widgets.active.bg_fill = Brand::ACCENT;

    visuals.selection.bg_fill = Brand::ACCENT.linear_multiply(0.25);
    visuals.selection.stroke.color = Brand::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 52, 58);
    visuals.widgets.active.bg_fill = Brand::ACCENT;

    visuals.selection.bg_fill = Brand::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = Brand::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}
