//! Joystick samples and cursor movement

use embedded_graphics::prelude::Point;

use crate::config::Config;

/// One pair of raw ADC readings, X converted first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub x: u16,
    pub y: u16,
}

impl Sample {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// A joystick at rest
    pub const fn centered(config: &Config) -> Self {
        let c = config.axis_center as u16;
        Self { x: c, y: c }
    }
}

/// Per-frame cursor step for one axis reading
///
/// Integer division truncates toward zero, so readings within one divisor of
/// centre produce no movement.
pub fn axis_offset(raw: u16, config: &Config) -> i32 {
    (raw as i32 - config.axis_center) / config.axis_divisor
}

/// Top-left corner of the cursor square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    /// Cursor at the centre of the canvas
    pub const fn centered(config: &Config) -> Self {
        Self {
            x: config.canvas_width / 2,
            y: config.canvas_height / 2,
        }
    }

    /// Apply one sample and clamp to the canvas
    ///
    /// The joystick is mounted rotated: the Y reading drives screen X and the
    /// X reading drives screen Y, inverted.
    pub fn advance(self, sample: Sample, config: &Config) -> Self {
        let offset_x = axis_offset(sample.x, config);
        let offset_y = axis_offset(sample.y, config);
        Self {
            x: self.x + offset_y,
            y: self.y - offset_x,
        }
        .clamp(config)
    }

    /// Keep the whole square on the canvas
    pub fn clamp(self, config: &Config) -> Self {
        Self {
            x: self.x.clamp(0, config.max_x()),
            y: self.y.clamp(0, config.max_y()),
        }
    }

    pub fn as_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CONFIG: Config = Config::DEFAULT;

    #[test]
    fn test_offset_truncates_toward_zero() {
        assert_eq!(axis_offset(2048, &CONFIG), 0);
        assert_eq!(axis_offset(2447, &CONFIG), 0);
        assert_eq!(axis_offset(2448, &CONFIG), 1);
        assert_eq!(axis_offset(1649, &CONFIG), 0);
        assert_eq!(axis_offset(1648, &CONFIG), -1);
        assert_eq!(axis_offset(0, &CONFIG), -5);
        assert_eq!(axis_offset(4095, &CONFIG), 5);
    }

    #[test]
    fn test_starts_centered() {
        assert_eq!(Cursor::centered(&CONFIG), Cursor { x: 64, y: 32 });
    }

    #[test]
    fn test_x_reading_moves_cursor_up() {
        let next = Cursor::centered(&CONFIG).advance(Sample::new(2448, 2048), &CONFIG);
        assert_eq!(next, Cursor { x: 64, y: 31 });
    }

    #[test]
    fn test_y_reading_moves_cursor_right() {
        let next = Cursor::centered(&CONFIG).advance(Sample::new(2048, 2848), &CONFIG);
        assert_eq!(next, Cursor { x: 66, y: 32 });
    }

    #[test]
    fn test_rest_position_is_stable() {
        let start = Cursor::centered(&CONFIG);
        assert_eq!(start.advance(Sample::centered(&CONFIG), &CONFIG), start);
    }

    #[test]
    fn test_clamp_at_corners() {
        let mut cursor = Cursor::centered(&CONFIG);
        for _ in 0..100 {
            cursor = cursor.advance(Sample::new(0, 4095), &CONFIG);
        }
        assert_eq!(cursor, Cursor { x: 118, y: 54 });

        for _ in 0..100 {
            cursor = cursor.advance(Sample::new(4095, 0), &CONFIG);
        }
        assert_eq!(cursor, Cursor { x: 0, y: 0 });
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_on_canvas(
            samples in proptest::collection::vec((0u16..=4095, 0u16..=4095), 0..200)
        ) {
            let mut cursor = Cursor::centered(&CONFIG);
            for (x, y) in samples {
                cursor = cursor.advance(Sample::new(x, y), &CONFIG);
                prop_assert!((0..=CONFIG.max_x()).contains(&cursor.x));
                prop_assert!((0..=CONFIG.max_y()).contains(&cursor.y));
            }
        }

        #[test]
        fn prop_clamp_holds_for_any_reading(x in any::<u16>(), y in any::<u16>()) {
            let cursor = Cursor { x: 0, y: CONFIG.max_y() }.advance(Sample::new(x, y), &CONFIG);
            prop_assert!((0..=CONFIG.max_x()).contains(&cursor.x));
            prop_assert!((0..=CONFIG.max_y()).contains(&cursor.y));
        }
    }
}
