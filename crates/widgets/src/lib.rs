pub mod bar;
pub mod button;
pub mod surface;

pub use bar::{Bar, ButtonId};
pub use button::Button;
pub use surface::{DrawCall, RecordingSurface, Surface};
