use macroquad::input::{is_quit_requested, prevent_quit};
use macroquad::prelude::*;

/// Route window close through `quit_requested` instead of exiting the process,
/// so the loop can shut down on its own terms.
pub fn capture_quit() {
    prevent_quit();
}

/// Cooperative stop flag, polled once per frame
pub fn quit_requested() -> bool {
    is_quit_requested() || is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q)
}
