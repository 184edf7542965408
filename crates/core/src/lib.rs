pub mod error;
pub mod event;
pub mod geometry;
pub mod state;

pub use error::{BarError, Result};
pub use event::{PointerEvent, PointerKind};
pub use geometry::{Point, Rect, Size};
pub use state::ButtonState;
