use crate::geometry::Point;

/// The pointer event kinds the bar reacts to.
///
/// Delivered by the external windowing/event-loop collaborator once per
/// polled event; everything else (keyboard, window management) never reaches
/// the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Pointer moved.
    Motion,
    /// A pointer button was pressed.
    Press,
    /// A pointer button was released — the only kind that reports hits.
    Release,
}

/// A pointer event with its screen-space position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: Point,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, pos: Point) -> Self {
        Self { kind, pos }
    }

    pub const fn motion(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Motion, Point::new(x, y))
    }

    pub const fn press(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Press, Point::new(x, y))
    }

    pub const fn release(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Release, Point::new(x, y))
    }
}
