use buttonbar_core::{ButtonState, Point, PointerKind, Rect};
use buttonbar_theme::Theme;
use buttonbar_config::Placement;

use crate::surface::Surface;

/// One clickable, labeled rectangle with visual interaction state.
///
/// Buttons are owned by their [`Bar`](crate::Bar); the bar assigns the slot
/// rectangle exactly once at layout time and drives all state changes
/// through [`dispatch`](crate::Bar::dispatch).
#[derive(Debug)]
pub struct Button {
    name: String,
    rect: Option<Rect>,
    state: ButtonState,
}

impl Button {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rect: None,
            state: ButtonState::Normal,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assigned slot rectangle; `None` only before layout, which
    /// [`Bar::add_button`](crate::Bar::add_button) treats as fatal.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub(crate) fn assign(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }

    /// `true` iff `point` lies within the assigned rectangle.
    /// An unconfigured button contains nothing.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.rect.is_some_and(|r| r.contains(point))
    }

    /// Force the Normal state.  Called by the bar for every miss.
    pub(crate) fn reset(&mut self) {
        self.state = ButtonState::Normal;
    }

    /// Advance the state machine for a pointer event that hit this button.
    pub(crate) fn update(&mut self, kind: PointerKind) {
        self.state = self.state.on_hit(kind);
    }

    /// Draw the filled rectangle for the current state, then the label.
    pub fn render(&self, surface: &mut dyn Surface, theme: &Theme) {
        let Some(rect) = self.rect else {
            return;
        };

        surface.fill_rect(rect, theme.fill(self.state));

        let pos = match theme.placement {
            Placement::TopLeft => rect.origin(),
            Placement::Centered => {
                let extent = surface.text_extent(&self.name);
                let center = rect.center();
                Point::new(center.x - extent.width / 2, center.y - extent.height / 2)
            }
        };
        surface.draw_text(&self.name, pos, theme.text);
    }
}
