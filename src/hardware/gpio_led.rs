use embedded_hal::digital::OutputPin;
use joystick_core::traits::Led;

/// Indicator between an output pin and ground, lit when the pin is high
pub struct GpioLed<P> {
    pin: P,
}

impl<P: OutputPin> GpioLed<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

// embassy-stm32 GPIO errors are `Infallible`.
impl<P: OutputPin> Led for GpioLed<P> {
    fn on(&mut self) {
        let _ = self.pin.set_high();
    }

    fn off(&mut self) {
        let _ = self.pin.set_low();
    }
}
