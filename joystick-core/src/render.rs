//! One iteration of the joystick/display/PWM loop

use crate::brightness::Brightness;
use crate::config::Config;
use crate::motion::{Cursor, Sample};
use crate::state::ModeFlags;
use crate::traits::{Axis, AxisReader, DutyOutput, Screen};

/// Failure of a peripheral during a render iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<A, S> {
    /// Analog conversion failed
    Adc(A),
    /// Drawing or transmitting the frame failed
    Display(S),
}

/// What one iteration read, drew and output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub sample: Sample,
    pub cursor: Cursor,
    pub brightness: Brightness,
}

/// Render loop state: the cursor position persists across iterations
pub struct RenderLoop<'a> {
    config: Config,
    flags: &'a ModeFlags,
    cursor: Cursor,
}

impl<'a> RenderLoop<'a> {
    pub fn new(config: Config, flags: &'a ModeFlags) -> Self {
        Self {
            cursor: Cursor::centered(&config),
            config,
            flags,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Draw the cursor at its current position and transmit the frame
    pub fn draw<S: Screen>(&self, screen: &mut S) -> Result<(), S::Error> {
        screen.clear();
        screen.draw_square(self.cursor.as_point(), self.config.square_size as u32)?;
        screen.flush()
    }

    /// Convert X, then Y
    pub async fn sample<A: AxisReader>(&self, joystick: &mut A) -> Result<Sample, A::Error> {
        let x = joystick.read(Axis::X).await?;
        let y = joystick.read(Axis::Y).await?;
        Ok(Sample::new(x, y))
    }

    /// Move and redraw the cursor for `sample`, then update the LEDs
    ///
    /// The PWM flag is read once, after the frame has been transmitted.
    pub fn present<S, R, B>(
        &mut self,
        sample: Sample,
        screen: &mut S,
        red: &mut R,
        blue: &mut B,
    ) -> Result<Frame, S::Error>
    where
        S: Screen,
        R: DutyOutput,
        B: DutyOutput,
    {
        self.cursor = self.cursor.advance(sample, &self.config);
        self.draw(screen)?;

        let brightness = Brightness::for_mode(self.flags.pwm_enabled(), sample, &self.config);
        red.set_level(brightness.red);
        blue.set_level(brightness.blue);

        Ok(Frame {
            sample,
            cursor: self.cursor,
            brightness,
        })
    }

    /// One full iteration: [`RenderLoop::sample`] then [`RenderLoop::present`]
    pub async fn tick<A, S, R, B>(
        &mut self,
        joystick: &mut A,
        screen: &mut S,
        red: &mut R,
        blue: &mut B,
    ) -> Result<Frame, Error<A::Error, S::Error>>
    where
        A: AxisReader,
        S: Screen,
        R: DutyOutput,
        B: DutyOutput,
    {
        let sample = self.sample(joystick).await.map_err(Error::Adc)?;
        self.present(sample, screen, red, blue).map_err(Error::Display)
    }
}
