//! Compile-time configuration
//!
//! Every tuning constant of the firmware lives here so the host tests and
//! the board binary agree on the same numbers.

/// Application constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Display width in pixels
    pub canvas_width: i32,
    /// Display height in pixels
    pub canvas_height: i32,
    /// Edge length of the cursor square
    pub square_size: i32,
    /// ADC reading of a centred joystick axis
    pub axis_center: i32,
    /// Raw counts per pixel of cursor movement per frame
    pub axis_divisor: i32,
    /// Deflection (in counts) below which a colour channel stays dark
    pub dead_zone: i32,
    /// Bias added to the Y reading before the blue dead-zone test
    pub blue_bias: i32,
    /// Multiplier from deflection to duty level
    pub brightness_gain: i32,
    /// Minimum spacing between accepted button edges, in microseconds
    pub debounce_us: u32,
    /// Sleep between render iterations
    pub frame_period_ms: u64,
    /// Nominal PWM wrap value; duty levels are expressed on this scale
    pub pwm_wrap: u16,
    pub pwm_enabled_at_boot: bool,
    pub green_on_at_boot: bool,
    /// 7-bit I2C address of the SSD1306
    pub display_address: u8,
    pub i2c_frequency_hz: u32,
}

impl Config {
    pub const DEFAULT: Config = Config {
        canvas_width: 128,
        canvas_height: 64,
        square_size: 10,
        axis_center: 2048,
        axis_divisor: 400,
        dead_zone: 300,
        blue_bias: 50,
        brightness_gain: 2,
        debounce_us: 300_000,
        frame_period_ms: 50,
        pwm_wrap: 4095,
        pwm_enabled_at_boot: true,
        green_on_at_boot: false,
        display_address: 0x3C,
        i2c_frequency_hz: 400_000,
    };

    /// Largest X the cursor's top-left corner may take
    pub const fn max_x(&self) -> i32 {
        self.canvas_width - self.square_size
    }

    /// Largest Y the cursor's top-left corner may take
    pub const fn max_y(&self) -> i32 {
        self.canvas_height - self.square_size
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
