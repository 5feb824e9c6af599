//! Presence task
//!
//! Sense, map, report, forever.

use defmt::*;
use porchlight_core::control::ControlLoop;

use crate::board::Board;

/// Presence task - owns the board I/O and runs the control loop
#[embassy_executor::task]
pub async fn presence_task(io: Board) {
    info!("Presence task started");

    let mut control = ControlLoop::new(io);
    control.run(|outcome| match outcome {
        Ok(iteration) => {
            if iteration.changed {
                info!("Light {} (pass {})", iteration.light, iteration.number);
            }
            trace!("Pass {}: light {}", iteration.number, iteration.light);
        }
        Err(e) => warn!("I/O error: {}", e),
    })
}
