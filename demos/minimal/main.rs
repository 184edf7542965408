//! Minimal example — a default bar with "Hello" / "World" buttons and one
//! scripted click.
//!
//! ```
//! cargo run --example minimal
//! ```

use buttonbar_core::PointerEvent;
use buttonbar_widgets::Bar;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let mut bar = Bar::from_config(&buttonbar_config::BarConfig::default())?;

    let center = bar.buttons().next().unwrap().rect().unwrap().center();
    for id in bar.dispatch(PointerEvent::release(center.x, center.y)) {
        if let Some(button) = bar.get(id) {
            println!("{}", button.name());
        }
    }

    Ok(())
}
