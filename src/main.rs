//! buttonbar — a clickable button-bar widget for a graphical event loop.
//!
//! The windowing layer is an external collaborator, so this binary drives
//! the bar headlessly: it loads the config, lays out the configured
//! buttons, replays a scripted hover/press/release pass over each one, and
//! renders onto a recording surface.
//!
//! Run with:  `RUST_LOG=debug buttonbar`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use buttonbar_core::{Point, PointerEvent};
use buttonbar_theme::Theme;
use buttonbar_widgets::{Bar, RecordingSurface};

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("buttonbar v{} starting", env!("CARGO_PKG_VERSION"));

    let config = buttonbar_config::load(buttonbar_config::default_path())?;
    let theme = Theme::from_config(&config.theme);
    let mut bar = Bar::from_config(&config)?;

    tracing::info!(
        "bar region {:?}, {} of {} slots used",
        bar.region(),
        bar.len(),
        bar.capacity()
    );

    // Scripted stand-in for the external event loop: sweep the pointer over
    // the center of each button and click it.
    let centers: Vec<Point> = bar
        .buttons()
        .filter_map(|b| b.rect())
        .map(|r| r.center())
        .collect();

    let mut surface = RecordingSurface::new();
    for center in centers {
        for event in [
            PointerEvent::motion(center.x, center.y),
            PointerEvent::press(center.x, center.y),
            PointerEvent::release(center.x, center.y),
        ] {
            for id in bar.dispatch(event) {
                if let Some(button) = bar.get(id) {
                    tracing::info!("clicked: {}", button.name());
                }
            }
        }

        surface.clear();
        bar.render(&mut surface, &theme);
    }

    tracing::info!("replay finished, {} draw calls in the last frame", surface.calls().len());

    Ok(())
}
