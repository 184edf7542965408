pub mod colors;

pub use colors::Color;

use buttonbar_config::{Placement, ThemeConfig};
use buttonbar_core::ButtonState;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to the classic red/green/blue state palette.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Fill for an idle button.
    pub normal: Color,
    /// Fill while the pointer is over the button.
    pub hovered: Color,
    /// Fill while a pointer button is held down.
    pub pressed: Color,
    /// Label text color.
    pub text: Color,
    /// Label placement policy.
    pub placement: Placement,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            normal: Color::from_hex(&cfg.normal).unwrap_or(Color::RED),
            hovered: Color::from_hex(&cfg.hovered).unwrap_or(Color::GREEN),
            pressed: Color::from_hex(&cfg.pressed).unwrap_or(Color::BLUE),
            text: Color::from_hex(&cfg.text).unwrap_or(Color::BLACK),
            placement: cfg.placement,
        }
    }

    /// Fill color for a button in `state`.
    #[must_use]
    pub fn fill(&self, state: ButtonState) -> Color {
        match state {
            ButtonState::Normal => self.normal,
            ButtonState::Hovered => self.hovered,
            ButtonState::Pressed => self.pressed,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
