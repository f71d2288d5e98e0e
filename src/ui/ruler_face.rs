//! Ruler watchface
//!
//! Large hour on top and minute below, the current hour at the left end of a
//! ruler and the next hour at its right end. Behind the ruler a cyan bar
//! reaches the tick of the current minute.

use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_10X20, MonoFont},
    prelude::*,
    primitives::Rectangle,
    text::Alignment,
};
use profont::PROFONT_24_POINT;

use super::{
    layer::{self, FaceLayer, BACKGROUND_COLOR, FILL_COLOR},
    text_layer::TextLayer,
    ColorMode, WatchFace,
};
use crate::{
    clock::{self, ClockReading},
    system::Host,
};

/// Size of the face, centered on the panel
pub const FACE_SIZE: Size = Size::new(144, 168);

const TIME_FONT: &MonoFont<'static> = &PROFONT_24_POINT;
const SMALL_FONT: &MonoFont<'static> = &FONT_10X20;

/// Area of the face on a panel of `panel` size
pub fn face_area(panel: Size) -> Rectangle {
    let offset = Point::new(
        (panel.width.saturating_sub(FACE_SIZE.width) / 2) as i32,
        (panel.height.saturating_sub(FACE_SIZE.height) / 2) as i32,
    );
    Rectangle::new(offset, FACE_SIZE)
}

pub struct RulerFace {
    /// Big hour label
    hour_label: TextLayer,
    /// Big minute label
    minute_label: TextLayer,
    /// Current hour, left end of the ruler
    hours_label: TextLayer,
    /// Next hour, right end of the ruler
    next_hours_label: TextLayer,
    /// Last successful reading
    reading: ClockReading,
    /// Last successfully computed fill width
    fill_width: u32,
}

impl RulerFace {
    pub fn reading(&self) -> ClockReading {
        self.reading
    }

    /// Labels of the time layer
    pub fn labels(&self) -> [&TextLayer; 4] {
        [
            &self.hour_label,
            &self.minute_label,
            &self.hours_label,
            &self.next_hours_label,
        ]
    }

    pub fn fill_width(&self) -> u32 {
        self.fill_width
    }

    fn apply(&mut self, reading: ClockReading) {
        self.hour_label.set_text(reading.hour);
        self.minute_label.set_text(reading.minute);
        self.hours_label.set_text(reading.hour);
        self.next_hours_label.set_text(reading.next_hour);
        self.reading = reading;
    }

    fn draw_layer<D>(&self, kind: FaceLayer, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        match kind {
            FaceLayer::Solid => layer::fill(
                target,
                Rectangle::new(Point::zero(), FACE_SIZE),
                BACKGROUND_COLOR,
            ),
            FaceLayer::FillBox => layer::fill(
                target,
                layer::fill_geometry(self.fill_width, FACE_SIZE.height),
                FILL_COLOR,
            ),
            FaceLayer::Ruler => layer::draw_ruler(target),
            FaceLayer::Time => self
                .labels()
                .iter()
                .try_for_each(|label| label.draw(target)),
        }
    }
}

impl WatchFace for RulerFace {
    fn new() -> Self {
        Self {
            hour_label: TextLayer::new(
                Rectangle::new(Point::new(0, 7), Size::new(144, 64)),
                TIME_FONT,
                Alignment::Center,
            ),
            minute_label: TextLayer::new(
                Rectangle::new(Point::new(0, 96), Size::new(144, 64)),
                TIME_FONT,
                Alignment::Center,
            ),
            hours_label: TextLayer::new(
                Rectangle::new(Point::new(1, 89), Size::new(144, 30)),
                SMALL_FONT,
                Alignment::Left,
            ),
            next_hours_label: TextLayer::new(
                Rectangle::new(Point::new(0, 89), Size::new(143, 30)),
                SMALL_FONT,
                Alignment::Right,
            ),
            reading: ClockReading::PLACEHOLDER,
            fill_width: clock::fill_width(0),
        }
    }

    fn update<H: Host>(&mut self, host: &H) {
        // Style is read on every update so a changed setting shows on the next tick
        match clock::compute_clock_reading(
            host.now(),
            host.utc_offset(),
            host.clock_is_24h_style(),
        ) {
            Ok(reading) => {
                debug!(
                    "Time {}:{}, next hour {}",
                    reading.hour.as_str(),
                    reading.minute.as_str(),
                    reading.next_hour.as_str()
                );
                self.apply(reading);
            }
            Err(_err) => warn!("Clock update failed, keeping previous labels: {}", _err),
        }
    }

    fn draw<H, D>(&mut self, host: &H, target: &mut D) -> Result<(), D::Error>
    where
        H: Host,
        D: DrawTarget<Color = ColorMode>,
    {
        // Fresh read, the bar may run a few milliseconds ahead of the labels
        match clock::compute_fill_width(host.now(), host.utc_offset()) {
            Ok(width) => self.fill_width = width,
            Err(_err) => warn!("Fill width failed, keeping {}: {}", self.fill_width, _err),
        }

        for kind in FaceLayer::Z_ORDER {
            self.draw_layer(kind, target)?;
        }
        Ok(())
    }
}
