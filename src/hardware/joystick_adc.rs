use core::convert::Infallible;

use embassy_stm32::adc::{Adc, AdcChannel, Instance};
use joystick_core::traits::{Axis, AxisReader};

/// Two-axis joystick on one ADC
///
/// Each read selects the axis channel and runs one regular conversion;
/// the axes are never sampled together.
pub struct JoystickAdc<'d, T: Instance, X, Y> {
    adc: Adc<'d, T>,
    x: X,
    y: Y,
}

impl<'d, T, X, Y> JoystickAdc<'d, T, X, Y>
where
    T: Instance,
    X: AdcChannel<T>,
    Y: AdcChannel<T>,
{
    pub fn new(adc: Adc<'d, T>, x: X, y: Y) -> Self {
        Self { adc, x, y }
    }
}

impl<'d, T, X, Y> AxisReader for JoystickAdc<'d, T, X, Y>
where
    T: Instance,
    X: AdcChannel<T>,
    Y: AdcChannel<T>,
{
    type Error = Infallible;

    async fn read(&mut self, axis: Axis) -> Result<u16, Infallible> {
        let raw = match axis {
            Axis::X => self.adc.read(&mut self.x).await,
            Axis::Y => self.adc.read(&mut self.y).await,
        };
        Ok(raw)
    }
}
