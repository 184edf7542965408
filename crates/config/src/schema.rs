use buttonbar_core::{BarError, Result};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `buttonbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Dimensions of the window the bar is laid out against.
    pub window: WindowConfig,
    /// Fixed size of one button cell.
    pub cell: CellConfig,
    /// Padding between adjacent button cells.
    pub padding: PaddingConfig,
    /// Button labels created at startup, in layout order.
    pub buttons: Vec<String>,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            cell: CellConfig::default(),
            padding: PaddingConfig::default(),
            buttons: vec!["Hello".to_string(), "World".to_string()],
            theme: ThemeConfig::default(),
        }
    }
}

impl BarConfig {
    /// Reject dimensions the grid arithmetic cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(BarError::Config(format!(
                "window dimensions must be positive (got {}x{})",
                self.window.width, self.window.height
            )));
        }
        if self.cell.width <= 0 || self.cell.height <= 0 {
            return Err(BarError::Config(format!(
                "cell dimensions must be positive (got {}x{})",
                self.cell.width, self.cell.height
            )));
        }
        if self.padding.x < 0 || self.padding.y < 0 {
            return Err(BarError::Config(format!(
                "padding must not be negative (got {}x{})",
                self.padding.x, self.padding.y
            )));
        }
        Ok(())
    }
}

/// Window dimensions in logical pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
        }
    }
}

/// Size of one button cell in logical pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 25,
        }
    }
}

/// Gap between adjacent cells.  `0` packs buttons edge to edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PaddingConfig {
    pub x: i32,
    pub y: i32,
}

/// Where a button's label is anchored inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Centered via the rendered text's bounding box.
    #[default]
    Centered,
    /// Anchored at the rectangle's origin.
    TopLeft,
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Fill color for an idle button (hex, e.g. `"#ff0000"`).
    pub normal: String,
    /// Fill color while the pointer is over the button.
    pub hovered: String,
    /// Fill color while a pointer button is held down.
    pub pressed: String,
    /// Label text color.
    pub text: String,
    /// Label placement policy.
    pub placement: Placement,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            normal: "#ff0000".to_string(),
            hovered: "#00ff00".to_string(),
            pressed: "#0000ff".to_string(),
            text: "#000000".to_string(),
            placement: Placement::Centered,
        }
    }
}
