//! Core peripheral traits implemented on embassy-stm32 drivers

pub mod gpio_button;
pub mod gpio_led;
pub mod joystick_adc;
pub mod oled;
pub mod pwm_led;
