use embassy_futures::select::{Either, select};
use embassy_stm32::exti::ExtiInput;
use joystick_core::Button;

/// The two pull-up buttons, both wired to falling-edge EXTI lines
pub struct GpioButtons<'d> {
    mode: ExtiInput<'d>,
    joystick: ExtiInput<'d>,
}

impl<'d> GpioButtons<'d> {
    pub fn new(mode: ExtiInput<'d>, joystick: ExtiInput<'d>) -> Self {
        Self { mode, joystick }
    }

    /// Wait for the next high-to-low transition on either button
    pub async fn next_edge(&mut self) -> Button {
        match select(
            self.mode.wait_for_falling_edge(),
            self.joystick.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => Button::Mode,
            Either::Second(()) => Button::Joystick,
        }
    }
}
