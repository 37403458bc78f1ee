//! Button edges to mode toggles

use crate::state::ModeFlags;
use crate::traits::{Led, Screen};

/// Which monitored input produced a falling edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Enables or disables brightness tracking
    Mode,
    /// Push switch built into the joystick
    Joystick,
}

/// Flag change caused by an accepted edge, carrying the new value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Toggle {
    Pwm(bool),
    Green(bool),
}

/// Handles edges from both buttons
///
/// Owns the green indicator; borrows the display per edge because the render
/// loop shares it.
pub struct ToggleHandler<'a, L> {
    flags: &'a ModeFlags,
    green: L,
}

impl<'a, L: Led> ToggleHandler<'a, L> {
    /// Create the handler and drive the indicator to the current flag
    pub fn new(flags: &'a ModeFlags, mut green: L) -> Self {
        green.set(flags.green_on());
        Self { flags, green }
    }

    /// Process a falling edge seen at `now_us`
    ///
    /// Returns `Ok(None)` when the debouncer drops the edge. The display
    /// buffer is modified but never flushed here.
    pub fn on_edge<S: Screen>(
        &mut self,
        button: Button,
        now_us: u32,
        screen: &mut S,
    ) -> Result<Option<Toggle>, S::Error> {
        if !self.flags.debouncer().accept(now_us) {
            return Ok(None);
        }

        match button {
            Button::Mode => Ok(Some(Toggle::Pwm(self.flags.toggle_pwm()))),
            Button::Joystick => {
                let on = self.flags.toggle_green();
                self.green.set(on);
                screen.set_border(on)?;
                if on {
                    screen.set_border(on)?;
                }
                screen.clear();
                Ok(Some(Toggle::Green(on)))
            }
        }
    }

    pub fn flags(&self) -> &ModeFlags {
        self.flags
    }

    pub fn green(&self) -> &L {
        &self.green
    }
}
