//! Background layers of the ruler face

use embedded_graphics::{
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};

use super::ColorMode;
use crate::clock::{fill_width, FILL_BASE_WIDTH};

/// Layers of the face, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceLayer {
    /// Flat background
    Solid,
    /// Bar growing with the minute
    FillBox,
    /// Ruler ticks, one per minute
    Ruler,
    /// Hour and minute labels
    Time,
}

impl FaceLayer {
    pub const Z_ORDER: [FaceLayer; 4] = [
        FaceLayer::Solid,
        FaceLayer::FillBox,
        FaceLayer::Ruler,
        FaceLayer::Time,
    ];
}

pub const BACKGROUND_COLOR: ColorMode = ColorMode::WHITE;
pub const FILL_COLOR: ColorMode = ColorMode::CYAN;
pub const RULER_COLOR: ColorMode = ColorMode::BLACK;

/// Band the ruler ticks hang down into
const RULER_BOTTOM: i32 = 84;
const TICK_MINOR: i32 = 6;
const TICK_FIVE: i32 = 12;
const TICK_QUARTER: i32 = 20;

/// Fill box anchored at the face origin, spanning the full face height.
pub fn fill_geometry(width: u32, height: u32) -> Rectangle {
    Rectangle::new(Point::zero(), Size::new(width, height))
}

pub fn fill<D>(target: &mut D, area: Rectangle, color: ColorMode) -> Result<(), D::Error>
where
    D: DrawTarget<Color = ColorMode>,
{
    area.into_styled(PrimitiveStyle::with_fill(color)).draw(target)
}

/// Horizontal position of the tick for a minute, lines up with the fill edge.
pub fn tick_x(minute: u32) -> i32 {
    fill_width(minute) as i32
}

pub fn draw_ruler<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = ColorMode>,
{
    let style = PrimitiveStyle::with_stroke(RULER_COLOR, 1);

    // Baseline from the first to the last minute
    Line::new(
        Point::new(FILL_BASE_WIDTH as i32, RULER_BOTTOM),
        Point::new(tick_x(59), RULER_BOTTOM),
    )
    .into_styled(style)
    .draw(target)?;

    for minute in 0..60 {
        let length = match minute {
            m if m % 15 == 0 => TICK_QUARTER,
            m if m % 5 == 0 => TICK_FIVE,
            _ => TICK_MINOR,
        };
        let x = tick_x(minute);
        Line::new(Point::new(x, RULER_BOTTOM - length), Point::new(x, RULER_BOTTOM))
            .into_styled(style)
            .draw(target)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_box_from_origin() {
        let area = fill_geometry(fill_width(30), 168);
        assert_eq!(area.top_left, Point::zero());
        assert_eq!(area.size, Size::new(72, 168));
    }

    #[test]
    fn ticks_follow_fill_edge() {
        assert_eq!(tick_x(0), 12);
        assert_eq!(tick_x(59), 130);
    }

    #[test]
    fn background_is_drawn_first() {
        assert_eq!(FaceLayer::Z_ORDER[0], FaceLayer::Solid);
        assert_eq!(FaceLayer::Z_ORDER[3], FaceLayer::Time);
    }
}
