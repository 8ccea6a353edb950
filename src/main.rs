//! Dodge the Blocks entry point
//!
//! Loads settings, opens the window, and runs sessions until the player
//! quits.

use dodge_blocks::platform::WindowPresentation;
use dodge_blocks::{GameContext, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Dodge the Blocks starting...");

    let settings = Settings::load();
    let presentation = WindowPresentation::new(&settings).map_err(|e| {
        log::error!("Failed to start: {}", e);
        e
    })?;

    let mut game = GameContext::new(presentation, settings);
    game.run();

    log::info!("Goodbye");
    Ok(())
}
