use crate::event::PointerKind;

/// Visual interaction state of a single button.
///
/// A closed three-state machine driven solely by pointer events whose
/// position hits the button; the bar forces `Normal` on every miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

impl ButtonState {
    /// The state after a pointer event lands inside the button.
    ///
    /// A release leaves the button `Hovered`: the pointer is still over it.
    #[must_use]
    pub fn on_hit(self, kind: PointerKind) -> Self {
        match kind {
            PointerKind::Motion => Self::Hovered,
            PointerKind::Press => Self::Pressed,
            PointerKind::Release => Self::Hovered,
        }
    }
}
