//! Mode flags shared by the render loop and the button handler

use core::sync::atomic::{AtomicBool, Ordering};

use crate::config::Config;
use crate::debounce::Debouncer;

/// Flags toggled by the buttons, plus the debouncer guarding them
///
/// Meant to live in a `static`; both execution contexts hold `&ModeFlags`.
pub struct ModeFlags {
    pwm_enabled: AtomicBool,
    green_on: AtomicBool,
    debouncer: Debouncer,
}

impl ModeFlags {
    pub const fn new(config: &Config) -> Self {
        Self {
            pwm_enabled: AtomicBool::new(config.pwm_enabled_at_boot),
            green_on: AtomicBool::new(config.green_on_at_boot),
            debouncer: Debouncer::new(config.debounce_us),
        }
    }

    /// Whether brightness tracks the joystick
    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::Acquire)
    }

    /// Whether the green indicator (and display border) is on
    pub fn green_on(&self) -> bool {
        self.green_on.load(Ordering::Acquire)
    }

    /// Invert the PWM flag, returning the new value
    pub fn toggle_pwm(&self) -> bool {
        !self.pwm_enabled.fetch_xor(true, Ordering::AcqRel)
    }

    /// Invert the green flag, returning the new value
    pub fn toggle_green(&self) -> bool {
        !self.green_on.fetch_xor(true, Ordering::AcqRel)
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}

impl Default for ModeFlags {
    fn default() -> Self {
        Self::new(&Config::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_values() {
        let flags = ModeFlags::default();
        assert!(flags.pwm_enabled());
        assert!(!flags.green_on());
        assert_eq!(flags.debouncer().window_us(), 300_000);
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let flags = ModeFlags::default();
        assert!(!flags.toggle_pwm());
        assert!(!flags.pwm_enabled());
        assert!(flags.toggle_pwm());

        assert!(flags.toggle_green());
        assert!(flags.green_on());
    }

    #[test]
    fn test_usable_as_static() {
        static FLAGS: ModeFlags = ModeFlags::new(&Config::DEFAULT);
        assert!(FLAGS.pwm_enabled());
    }
}
