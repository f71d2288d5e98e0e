//! PineTime hardware used by the watch face

pub(super) mod backlight;
pub(super) mod button;
pub(super) mod display;
pub(super) mod system;

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// LCD controller did not accept the init sequence
    DisplayInit,
    /// Writing pixels to the LCD failed
    Draw,
}
