use buttonbar_config::BarConfig;
use buttonbar_core::{BarError, PointerEvent, PointerKind, Rect, Result, Size};
use buttonbar_theme::Theme;
use tracing::debug;

use crate::button::Button;
use crate::surface::Surface;

/// Stable handle to a button owned by a [`Bar`].
///
/// Buttons are never removed, so an id stays valid for the bar's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(usize);

/// The container widget: owns a grid of button slots in a rectangular
/// region at the bottom of the window, allocates slots in row-major order,
/// fans pointer events out to its buttons, and collects the hits.
#[derive(Debug)]
pub struct Bar {
    region: Rect,
    cell: Size,
    padding: Size,
    /// Grid capacity derived from region size ÷ (cell + padding).
    cols: i32,
    rows: i32,
    /// Insertion cursor: next free column / current row.
    across: i32,
    down: i32,
    /// Insertion order = layout order = draw order.
    buttons: Vec<Button>,
}

impl Bar {
    /// Lay the bar out as the bottom quarter of a `window`-sized screen:
    /// full width, a quarter of the height, anchored at the bottom.
    ///
    /// Dimensions must be positive; [`Bar::from_config`] validates them.
    pub fn new(window: Size, cell: Size, padding: Size) -> Self {
        let region = Rect::new(0, 3 * window.height / 4, window.width, window.height / 4);

        let cols = region.width / (cell.width + padding.width);
        let rows = region.height / (cell.height + padding.height);

        debug!(
            "bar region {}x{} at y={}, grid {}x{}",
            region.width, region.height, region.y, cols, rows
        );

        Self {
            region,
            cell,
            padding,
            cols,
            rows,
            across: 0,
            down: 0,
            buttons: Vec::new(),
        }
    }

    /// Build a bar from the loaded configuration and create its configured
    /// buttons in order.
    pub fn from_config(config: &BarConfig) -> Result<Self> {
        config.validate()?;

        let mut bar = Self::new(
            Size::new(config.window.width, config.window.height),
            Size::new(config.cell.width, config.cell.height),
            Size::new(config.padding.x, config.padding.y),
        );
        for name in &config.buttons {
            bar.add_button(name.clone())?;
        }
        Ok(bar)
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    /// Total number of grid slots.
    pub fn capacity(&self) -> usize {
        (self.cols.max(0) * self.rows.max(0)) as usize
    }

    /// Create a button named `name` and assign it the next free grid slot.
    ///
    /// Slots fill columns left-to-right within the current row, then wrap
    /// to the next row.  Errors with [`BarError::GridFull`] once the region
    /// cannot fit another row.
    pub fn add_button(&mut self, name: impl Into<String>) -> Result<ButtonId> {
        let mut button = Button::new(name);
        self.configure(&mut button)?;

        // Post-condition: configure must have assigned a rectangle.
        let Some(rect) = button.rect() else {
            return Err(BarError::Unconfigured {
                name: button.name().to_string(),
            });
        };
        debug_assert!(self.region.contains_rect(&rect));

        debug!("placed button '{}' at {:?}", button.name(), rect);

        self.buttons.push(button);
        Ok(ButtonId(self.buttons.len() - 1))
    }

    /// Assign the next slot rectangle and advance the cursor.
    fn configure(&mut self, button: &mut Button) -> Result<()> {
        if self.across == self.cols {
            self.across = 0;
            self.down += 1;
        }

        if self.cols <= 0 || self.down >= self.rows {
            return Err(BarError::GridFull {
                cols: self.cols,
                rows: self.rows,
            });
        }

        let rect = Rect::new(
            self.region.x + self.across * (self.cell.width + self.padding.width),
            self.region.y + self.down * (self.cell.height + self.padding.height),
            self.cell.width,
            self.cell.height,
        );
        button.assign(rect);
        self.across += 1;

        Ok(())
    }

    /// Fan a pointer event out to every button.
    ///
    /// Buttons the event misses are reset to Normal; buttons it hits advance
    /// their state machine.  The hit list is reported only for release
    /// events — hover and press are state changes only.
    pub fn dispatch(&mut self, event: PointerEvent) -> Vec<ButtonId> {
        let mut hits = Vec::new();

        for (index, button) in self.buttons.iter_mut().enumerate() {
            if button.contains(event.pos) {
                hits.push(ButtonId(index));
                button.update(event.kind);
            } else {
                button.reset();
            }
        }

        if event.kind == PointerKind::Release {
            hits
        } else {
            Vec::new()
        }
    }

    /// Ask each button, in insertion order, to draw itself.
    pub fn render(&self, surface: &mut dyn Surface, theme: &Theme) {
        for button in &self.buttons {
            button.render(surface, theme);
        }
    }

    pub fn get(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.get(id.0)
    }

    /// Read-only traversal in insertion order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};
    use buttonbar_core::ButtonState;

    /// 320x240 window → region 320x60 at y=180; cell 50x25, no padding →
    /// grid 6x2.
    fn test_bar() -> Bar {
        Bar::new(Size::new(320, 240), Size::new(50, 25), Size::new(0, 0))
    }

    fn names(bar: &Bar, ids: &[ButtonId]) -> Vec<String> {
        ids.iter()
            .map(|&id| bar.get(id).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn region_is_bottom_quarter() {
        let bar = test_bar();
        assert_eq!(bar.region(), Rect::new(0, 180, 320, 60));
        assert_eq!(bar.capacity(), 12);
    }

    #[test]
    fn ten_buttons_fill_row_major() {
        let mut bar = test_bar();
        for i in 1..=10 {
            bar.add_button(format!("Button {i}")).unwrap();
        }

        let rects: Vec<Rect> = bar.buttons().map(|b| b.rect().unwrap()).collect();

        // First row: columns 0-5.
        for col in 0..6 {
            assert_eq!(rects[col], Rect::new(50 * col as i32, 180, 50, 25));
        }
        // Remaining four wrap to the second row.
        for col in 0..4 {
            assert_eq!(rects[6 + col], Rect::new(50 * col as i32, 205, 50, 25));
        }
    }

    #[test]
    fn rects_stay_inside_region_without_overlap() {
        let mut bar = Bar::new(Size::new(320, 240), Size::new(50, 25), Size::new(1, 1));
        for i in 0..bar.capacity() {
            bar.add_button(format!("B{i}")).unwrap();
        }

        let region = bar.region();
        let rects: Vec<Rect> = bar.buttons().map(|b| b.rect().unwrap()).collect();
        for (i, a) in rects.iter().enumerate() {
            assert!(region.contains_rect(a), "button {i} leaves the region");
            for b in &rects[i + 1..] {
                assert!(!a.intersects(b));
            }
        }
    }

    #[test]
    fn one_button_past_capacity_is_grid_full() {
        let mut bar = test_bar();
        for i in 0..12 {
            bar.add_button(format!("B{i}")).unwrap();
        }
        assert!(matches!(
            bar.add_button("too many"),
            Err(BarError::GridFull { cols: 6, rows: 2 })
        ));
        assert_eq!(bar.len(), 12);
    }

    #[test]
    fn window_smaller_than_one_cell_fits_nothing() {
        let mut bar = Bar::new(Size::new(40, 80), Size::new(50, 25), Size::new(0, 0));
        assert_eq!(bar.capacity(), 0);
        assert!(matches!(
            bar.add_button("X"),
            Err(BarError::GridFull { .. })
        ));
    }

    #[test]
    fn release_on_third_button_reports_it() {
        let mut bar = test_bar();
        for i in 1..=10 {
            bar.add_button(format!("Button {i}")).unwrap();
        }

        // Third button occupies columns x=100..150 in the first row.
        let center = Rect::new(100, 180, 50, 25).center();
        let hits = bar.dispatch(PointerEvent::release(center.x, center.y));
        assert_eq!(names(&bar, &hits), vec!["Button 3"]);

        // Everyone else was reset.
        for button in bar.buttons().filter(|b| b.name() != "Button 3") {
            assert_eq!(button.state(), ButtonState::Normal);
        }
    }

    #[test]
    fn press_then_release_leaves_button_hovered() {
        let mut bar = test_bar();
        let id = bar.add_button("Hello").unwrap();
        let center = bar.get(id).unwrap().rect().unwrap().center();

        let press_hits = bar.dispatch(PointerEvent::press(center.x, center.y));
        assert!(press_hits.is_empty());
        assert_eq!(bar.get(id).unwrap().state(), ButtonState::Pressed);

        let release_hits = bar.dispatch(PointerEvent::release(center.x, center.y));
        assert_eq!(release_hits, vec![id]);
        assert_eq!(bar.get(id).unwrap().state(), ButtonState::Hovered);
    }

    #[test]
    fn motion_outside_resets_everything() {
        let mut bar = test_bar();
        let hello = bar.add_button("Hello").unwrap();
        let world = bar.add_button("World").unwrap();

        let center = bar.get(hello).unwrap().rect().unwrap().center();
        bar.dispatch(PointerEvent::motion(center.x, center.y));
        assert_eq!(bar.get(hello).unwrap().state(), ButtonState::Hovered);

        // (0, 0) is far above the bar region.
        let hits = bar.dispatch(PointerEvent::motion(0, 0));
        assert!(hits.is_empty());
        assert_eq!(bar.get(hello).unwrap().state(), ButtonState::Normal);
        assert_eq!(bar.get(world).unwrap().state(), ButtonState::Normal);

        // A release outside everything is also an empty hit list.
        assert!(bar.dispatch(PointerEvent::release(0, 0)).is_empty());
    }

    #[test]
    fn hover_and_press_report_no_hits() {
        let mut bar = test_bar();
        let id = bar.add_button("Hello").unwrap();
        let center = bar.get(id).unwrap().rect().unwrap().center();

        assert!(bar.dispatch(PointerEvent::motion(center.x, center.y)).is_empty());
        assert!(bar.dispatch(PointerEvent::press(center.x, center.y)).is_empty());
    }

    #[test]
    fn render_draws_in_insertion_order() {
        let mut bar = test_bar();
        bar.add_button("Hello").unwrap();
        bar.add_button("World").unwrap();

        let mut surface = RecordingSurface::new();
        bar.render(&mut surface, &Theme::default());

        let labels: Vec<&str> = surface
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Hello", "World"]);
    }

    #[test]
    fn from_config_creates_configured_buttons() {
        let config = BarConfig::default();
        let bar = Bar::from_config(&config).unwrap();
        let names: Vec<&str> = bar.buttons().map(Button::name).collect();
        assert_eq!(names, vec!["Hello", "World"]);
    }

    #[test]
    fn from_config_rejects_bad_dimensions() {
        let mut config = BarConfig::default();
        config.cell.width = -5;
        assert!(matches!(
            Bar::from_config(&config),
            Err(BarError::Config(_))
        ));
    }

    #[test]
    fn boundary_point_hits_exactly_one_button() {
        let mut bar = test_bar();
        bar.add_button("A").unwrap();
        bar.add_button("B").unwrap();

        // x=50 is the shared edge of the first two cells.
        let hits = bar.dispatch(PointerEvent::release(50, 190));
        assert_eq!(names(&bar, &hits), vec!["B"]);
    }
}
