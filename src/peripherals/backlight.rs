//! Backlight control
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/backlight.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::gpio::{AnyPin, Output};

/// Highest brightness level
pub const MAX_BRIGHTNESS: u8 = 7;

/// Three active-low pins, each switching the backlight through a resistor
/// (low: 2.2 kΩ, mid: 100 Ω, high: 30 Ω). Their combinations give seven
/// brightness levels plus off.
pub struct Backlight {
    low: Output<'static, AnyPin>,
    mid: Output<'static, AnyPin>,
    high: Output<'static, AnyPin>,
    /// Current level, 0 is off
    brightness: u8,
}

impl Backlight {
    /// Configure backlight pins on boot
    pub fn init(
        low: Output<'static, AnyPin>,
        mid: Output<'static, AnyPin>,
        high: Output<'static, AnyPin>,
        brightness: u8,
    ) -> Self {
        let mut backlight = Self {
            low,
            mid,
            high,
            brightness,
        };
        backlight.set(brightness);
        backlight
    }

    /// Set the brightness level, values above [`MAX_BRIGHTNESS`] are clamped.
    pub fn set(&mut self, brightness: u8) {
        let brightness = brightness.min(MAX_BRIGHTNESS);
        defmt::debug!("Setting backlight brightness to {}", brightness);

        for (bit, pin) in [&mut self.low, &mut self.mid, &mut self.high]
            .into_iter()
            .enumerate()
        {
            if brightness & (1 << bit) != 0 {
                pin.set_low();
            } else {
                pin.set_high();
            }
        }
        self.brightness = brightness;
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }
}
