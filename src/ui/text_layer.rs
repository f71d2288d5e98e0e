//! Text labels

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::ColorMode;
use crate::clock::Digits;

/// Two-digit label drawn inside a frame, with a transparent background.
pub struct TextLayer {
    frame: Rectangle,
    text: Digits,
    font: &'static MonoFont<'static>,
    color: ColorMode,
    alignment: Alignment,
}

impl TextLayer {
    /// Create new label showing the placeholder
    pub fn new(frame: Rectangle, font: &'static MonoFont<'static>, alignment: Alignment) -> Self {
        Self {
            frame,
            text: Digits::PLACEHOLDER,
            font,
            color: ColorMode::BLACK,
            alignment,
        }
    }

    pub fn set_text(&mut self, text: Digits) {
        self.text = text;
    }

    pub fn text(&self) -> Digits {
        self.text
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Point the text is aligned to, on the top edge of the frame
    fn anchor(&self) -> Point {
        let Rectangle { top_left, size } = self.frame;
        let x = match self.alignment {
            Alignment::Left => top_left.x,
            Alignment::Center => top_left.x + size.width as i32 / 2,
            Alignment::Right => top_left.x + size.width as i32 - 1,
        };
        Point::new(x, top_left.y)
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        let character_style = MonoTextStyle::new(self.font, self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Top)
            .build();

        Text::with_text_style(self.text.as_str(), self.anchor(), character_style, text_style)
            .draw(&mut target.clipped(&self.frame))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    fn layer(alignment: Alignment) -> TextLayer {
        TextLayer::new(
            Rectangle::new(Point::new(10, 20), Size::new(100, 30)),
            &FONT_6X10,
            alignment,
        )
    }

    #[test]
    fn starts_with_placeholder() {
        assert_eq!(layer(Alignment::Left).text().as_str(), "00");
    }

    #[test]
    fn anchors() {
        assert_eq!(layer(Alignment::Left).anchor(), Point::new(10, 20));
        assert_eq!(layer(Alignment::Center).anchor(), Point::new(60, 20));
        assert_eq!(layer(Alignment::Right).anchor(), Point::new(109, 20));
    }
}
