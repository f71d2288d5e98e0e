//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};

use crate::system::Host;

pub mod layer;
pub mod ruler_face;
pub mod text_layer;
pub mod window;

/// Color mode of the PineTime LCD
pub type ColorMode = Rgb565;

pub trait WatchFace {
    /// Create new watchface showing placeholders
    fn new() -> Self;

    /// Recompute the time labels
    fn update<H: Host>(&mut self, host: &H);

    /// Draw every layer onto `target`
    fn draw<H, D>(&mut self, host: &H, target: &mut D) -> Result<(), D::Error>
    where
        H: Host,
        D: DrawTarget<Color = ColorMode>;
}
