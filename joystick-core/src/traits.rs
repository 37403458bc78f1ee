//! Peripheral seams
//!
//! The render loop and button handler only talk to hardware through these
//! traits. The board binary implements them on embassy-stm32 peripherals;
//! the `sim` module implements them for host tests.

use embedded_graphics::prelude::Point;

/// Joystick axis, in conversion order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// Single-shot analog reader for the two joystick axes
#[allow(async_fn_in_trait)]
pub trait AxisReader {
    type Error;

    /// Select the channel for `axis` and return one 12-bit conversion
    async fn read(&mut self, axis: Axis) -> Result<u16, Self::Error>;
}

/// One PWM-driven colour channel
pub trait DutyOutput {
    /// Set the duty level on the nominal 12-bit scale
    ///
    /// Levels above the wrap value must be tolerated.
    fn set_level(&mut self, level: u16);
}

/// On/off indicator
pub trait Led {
    fn on(&mut self);
    fn off(&mut self);

    fn set(&mut self, on: bool) {
        if on { self.on() } else { self.off() }
    }
}

/// Buffered monochrome display
///
/// Drawing calls only touch the frame buffer; nothing reaches the panel
/// until [`Screen::flush`].
pub trait Screen {
    type Error;

    /// Blank the frame buffer
    fn clear(&mut self);

    /// Draw the outline of a `size`×`size` square with its top-left at `origin`
    fn draw_square(&mut self, origin: Point, size: u32) -> Result<(), Self::Error>;

    /// Draw (`true`) or erase (`false`) a one-pixel border around the canvas
    fn set_border(&mut self, visible: bool) -> Result<(), Self::Error>;

    /// Transmit the frame buffer to the panel
    fn flush(&mut self) -> Result<(), Self::Error>;
}
