//! Display control module for PineTime

use display_interface_spi::SPIInterface;
use embassy_nrf::{
    gpio::{AnyPin, Output},
    peripherals::SPI2,
    spim::Spim,
};
use embassy_time::Delay;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use mipidsi::{models::ST7789, Builder, Orientation};

use pinetime_ruler_face::{
    system::Host,
    ui::{ruler_face::face_area, window::Window, WatchFace},
};

use super::Error;

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

/// Color around the face
const BACKGROUND_COLOR: Rgb565 = Rgb565::WHITE;

type Lcd = mipidsi::Display<
    SPIInterface<Spim<'static, SPI2>, Output<'static, AnyPin>, Output<'static, AnyPin>>,
    ST7789,
    Output<'static, AnyPin>,
>;

pub struct Display {
    lcd: Lcd,
}

impl Display {
    /// Configure display settings on boot
    pub fn init(
        spim: Spim<'static, SPI2>,
        cs_pin: Output<'static, AnyPin>,
        dc_pin: Output<'static, AnyPin>,
        rst_pin: Output<'static, AnyPin>,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst_pin))
            .map_err(|_| Error::DisplayInit)?;

        Ok(Self { lcd })
    }

    /// Clear the whole panel
    pub fn clear(&mut self) -> Result<(), Error> {
        self.lcd.clear(BACKGROUND_COLOR).map_err(|_| Error::Draw)
    }

    /// Draw the window into the face area in the middle of the panel
    pub fn render<A, H>(&mut self, window: &mut Window<A, H>, host: &H) -> Result<(), Error>
    where
        A: WatchFace,
        H: Host,
    {
        let area = face_area(Size::new(LCD_W as u32, LCD_H as u32));
        window
            .render(host, &mut self.lcd.cropped(&area))
            .map_err(|_| Error::Draw)
    }
}
