use embassy_stm32::timer::GeneralInstance4Channel;
use embassy_stm32::timer::simple_pwm::SimplePwmChannel;
use joystick_core::brightness;
use joystick_core::traits::DutyOutput;

/// One colour of the RGB LED on a timer PWM channel
///
/// Levels arrive on a fixed `0..=wrap` scale and are clamped, then rescaled
/// to whatever maximum duty the timer ended up with for its frequency.
pub struct PwmLed<'d, T: GeneralInstance4Channel> {
    channel: SimplePwmChannel<'d, T>,
    wrap: u16,
}

impl<'d, T: GeneralInstance4Channel> PwmLed<'d, T> {
    /// Take over `channel`, start it dark and enable the output
    pub fn new(mut channel: SimplePwmChannel<'d, T>, wrap: u16) -> Self {
        channel.set_duty_cycle(0);
        channel.enable();
        Self { channel, wrap }
    }
}

impl<'d, T: GeneralInstance4Channel> DutyOutput for PwmLed<'d, T> {
    fn set_level(&mut self, level: u16) {
        let max = self.channel.max_duty_cycle();
        self.channel.set_duty_cycle(brightness::to_duty(level, self.wrap, max));
    }
}
