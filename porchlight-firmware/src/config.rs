//! Board wiring loading
//!
//! Parses the embedded board.toml, falling back to the reference wiring.

use defmt::*;
use porchlight_core::config::{parse_board_config, BoardConfig};

/// Load the board wiring
///
/// build.rs already rejected any board.toml the parser would refuse, so
/// the fallback only triggers if the two ever disagree.
pub fn load(source: &str) -> BoardConfig {
    match parse_board_config(source) {
        Ok(config) => {
            info!("Loaded board wiring from board.toml");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded board.toml: {}", e);
            error!("Using reference wiring");
            BoardConfig::default()
        }
    }
}
