//! Joystick deflection to RGB duty levels

use crate::config::Config;
use crate::motion::Sample;

/// Duty levels for the PWM-driven colour channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness {
    pub red: u16,
    pub blue: u16,
}

impl Brightness {
    pub const OFF: Brightness = Brightness { red: 0, blue: 0 };

    /// Levels for a sample with brightness tracking enabled
    pub fn from_sample(sample: Sample, config: &Config) -> Self {
        Self {
            red: red_level(sample.x, config),
            blue: blue_level(sample.y, config),
        }
    }

    /// Levels for a sample, or [`Brightness::OFF`] when tracking is disabled
    pub fn for_mode(pwm_enabled: bool, sample: Sample, config: &Config) -> Self {
        if pwm_enabled {
            Self::from_sample(sample, config)
        } else {
            Self::OFF
        }
    }
}

/// Red follows X deflection outside the dead zone
pub fn red_level(raw_x: u16, config: &Config) -> u16 {
    let deflection = (config.axis_center - raw_x as i32).abs();
    if deflection > config.dead_zone {
        scale(deflection, config)
    } else {
        0
    }
}

/// Blue follows Y deflection outside the dead zone
///
/// The dead-zone test is taken on the biased reading, the level on the
/// unbiased one.
pub fn blue_level(raw_y: u16, config: &Config) -> u16 {
    let biased = (config.axis_center - (raw_y as i32 + config.blue_bias)).abs();
    if biased > config.dead_zone {
        scale((config.axis_center - raw_y as i32).abs(), config)
    } else {
        0
    }
}

fn scale(deflection: i32, config: &Config) -> u16 {
    // Full deflection lands one above a 12-bit wrap; `to_duty` clamps it.
    u16::try_from(deflection * config.brightness_gain).unwrap_or(u16::MAX)
}

/// Map a level on the `0..=wrap` scale to a timer compare value in `0..=max`
///
/// Levels above `wrap` are clamped first. A zero `wrap` has no scale to map
/// from and always yields 0.
pub fn to_duty(level: u16, wrap: u16, max: u16) -> u16 {
    if wrap == 0 {
        return 0;
    }
    let level = u32::from(level.min(wrap));
    let duty = level * u32::from(max) / u32::from(wrap);
    u16::try_from(duty).unwrap_or(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CONFIG: Config = Config::DEFAULT;

    #[test]
    fn test_red_dead_zone() {
        assert_eq!(red_level(2048, &CONFIG), 0);
        assert_eq!(red_level(2348, &CONFIG), 0);
        assert_eq!(red_level(1748, &CONFIG), 0);
        assert_eq!(red_level(2349, &CONFIG), 602);
        assert_eq!(red_level(1747, &CONFIG), 602);
    }

    #[test]
    fn test_red_level() {
        assert_eq!(red_level(2500, &CONFIG), 904);
        assert_eq!(red_level(0, &CONFIG), 4096);
    }

    #[test]
    fn test_blue_centered_is_dark() {
        assert_eq!(blue_level(2048, &CONFIG), 0);
    }

    #[test]
    fn test_blue_level_ignores_bias() {
        // Biased test: |2048 - 2550| = 502 passes; level uses |2048 - 2500|
        assert_eq!(blue_level(2500, &CONFIG), 904);
    }

    #[test]
    fn test_blue_bias_shifts_dead_zone() {
        // 2299 + 50 = 2349 is outside the dead zone even though 2299 is not
        assert_eq!(blue_level(2299, &CONFIG), 502);
        assert_eq!(blue_level(2298, &CONFIG), 0);
        // 1698 + 50 = 1748 stays inside
        assert_eq!(blue_level(1698, &CONFIG), 0);
        assert_eq!(blue_level(1697, &CONFIG), 702);
    }

    #[test]
    fn test_disabled_mode_is_dark() {
        let sample = Sample::new(0, 4095);
        assert_eq!(Brightness::for_mode(false, sample, &CONFIG), Brightness::OFF);
        assert_eq!(
            Brightness::for_mode(true, sample, &CONFIG),
            Brightness { red: 4096, blue: 4094 }
        );
    }

    #[test]
    fn test_out_of_range_reading_saturates() {
        // Only reachable past 12 bits: |2048 - 65535| * 2 does not fit a u16
        assert_eq!(red_level(u16::MAX, &CONFIG), u16::MAX);
        assert_eq!(blue_level(u16::MAX, &CONFIG), u16::MAX);
    }

    #[test]
    fn test_duty_clamps_full_deflection() {
        assert_eq!(to_duty(4096, CONFIG.pwm_wrap, 4095), 4095);
        assert_eq!(to_duty(4096, CONFIG.pwm_wrap, 1000), 1000);
        assert_eq!(to_duty(u16::MAX, CONFIG.pwm_wrap, 1000), 1000);
    }

    #[test]
    fn test_duty_rescales_to_timer_max() {
        assert_eq!(to_duty(0, 4095, 1000), 0);
        assert_eq!(to_duty(904, 4095, 4095), 904);
        // 4095 * 65535 needs more than 16 bits before the divide
        assert_eq!(to_duty(4095, 4095, u16::MAX), u16::MAX);
        assert_eq!(to_duty(2048, 4095, u16::MAX), 32775);
        assert_eq!(to_duty(u16::MAX, u16::MAX, u16::MAX), u16::MAX);
    }

    #[test]
    fn test_duty_zero_wrap_is_dark() {
        assert_eq!(to_duty(0, 0, 1000), 0);
        assert_eq!(to_duty(4096, 0, 1000), 0);
    }

    proptest! {
        #[test]
        fn prop_duty_never_exceeds_max(level: u16, wrap: u16, max: u16) {
            let duty = to_duty(level, wrap, max);
            prop_assert!(duty <= max);
            if wrap != 0 && level >= wrap {
                prop_assert_eq!(duty, max);
            }
        }

        #[test]
        fn prop_levels_bounded_by_full_deflection(x in 0u16..=4095, y in 0u16..=4095) {
            let level = Brightness::from_sample(Sample::new(x, y), &CONFIG);
            prop_assert!(level.red <= 4096);
            prop_assert!(level.blue <= 4096);
            prop_assert!(level.red == 0 || level.red > 600);
        }
    }
}
