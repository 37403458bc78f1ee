//! Primitives shared by every [`crate::traits::Screen`] implementation

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

/// Stroke an unfilled square into `target`
pub fn draw_square<D>(target: &mut D, origin: Point, size: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(origin, Size::new(size, size))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target)
}

/// Stroke (or erase) a border along the edge of the whole target
pub fn draw_border<D>(target: &mut D, visible: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    let color = if visible {
        BinaryColor::On
    } else {
        BinaryColor::Off
    };
    Rectangle::new(Point::zero(), target.size())
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(target)
}
