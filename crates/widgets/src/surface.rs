use buttonbar_core::{Point, Rect, Size};
use buttonbar_theme::Color;

/// Drawing surface the bar renders onto.
///
/// The two primitives (rectangle fill, text draw) plus text measurement are
/// everything the widgets need; a windowing backend implements this against
/// its real canvas, tests and the headless demo use [`RecordingSurface`].
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, text: &str, pos: Point, color: Color);

    /// Bounding box of `text` as this surface would render it.
    /// Used by the centered label placement policy.
    fn text_extent(&self, text: &str) -> Size;
}

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect { rect: Rect, color: Color },
    Text { text: String, pos: Point, color: Color },
}

/// A [`Surface`] that records every draw call instead of rasterizing.
///
/// Text extents use fixed per-glyph metrics, which is all a headless
/// backend can offer; real backends measure with their font engine.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

/// Fixed glyph advance / line height for headless text measurement.
const GLYPH_WIDTH: i32 = 6;
const LINE_HEIGHT: i32 = 12;

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, pos: Point, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }

    fn text_extent(&self, text: &str) -> Size {
        Size::new(text.chars().count() as i32 * GLYPH_WIDTH, LINE_HEIGHT)
    }
}
