use embedded_graphics::prelude::*;
use joystick_core::graphics;
use joystick_core::traits::Screen;
use ssd1306::{Ssd1306, mode::BufferedGraphicsMode, prelude::*};

type Driver<DI> = Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Bus or controller error reported by the SSD1306 driver
pub type OledError<DI> = <Driver<DI> as DrawTarget>::Error;

/// 128x64 SSD1306 in buffered graphics mode
pub struct Oled<DI> {
    display: Driver<DI>,
}

impl<DI: WriteOnlyDataCommand> Oled<DI> {
    pub fn new(interface: DI) -> Self {
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self { display }
    }

    /// Initialise the controller and leave a blank panel
    ///
    /// Sends one frame straight after init, then a cleared one.
    pub fn init(&mut self) -> Result<(), OledError<DI>> {
        self.display.init()?;
        self.display.flush()?;
        self.display.clear_buffer();
        self.display.flush()
    }
}

impl<DI: WriteOnlyDataCommand> Screen for Oled<DI> {
    type Error = OledError<DI>;

    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn draw_square(&mut self, origin: Point, size: u32) -> Result<(), Self::Error> {
        graphics::draw_square(&mut self.display, origin, size)
    }

    fn set_border(&mut self, visible: bool) -> Result<(), Self::Error> {
        graphics::draw_border(&mut self.display, visible)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.display.flush()
    }
}

