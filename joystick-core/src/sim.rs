//! Simulated peripherals for host tests
//!
//! Each simulator records what the application asked of it. Check the
//! recorded calls instead of timing or electrical behaviour.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use heapless::{Deque, Vec};

use crate::graphics;
use crate::motion::Sample;
use crate::traits::{Axis, AxisReader, DutyOutput, Led, Screen};

/// Capacity of [`SimJoystick::reads`]
pub const READ_LOG_LEN: usize = 128;
/// Capacity of [`SimScreen::ops`]
pub const OP_LOG_LEN: usize = 128;

/// Simulated bus failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SimError {
    Disconnected,
}

/// Joystick fed from a queue of samples
///
/// Reading X pops the next queued sample (or repeats the last one); reading Y
/// returns the Y half of that sample.
///
/// Panics on the read after [`READ_LOG_LEN`] have been recorded.
pub struct SimJoystick {
    queue: Deque<Sample, 64>,
    current: Sample,
    reads: Vec<Axis, READ_LOG_LEN>,
    fail: bool,
}

impl SimJoystick {
    pub fn new(initial: Sample) -> Self {
        Self {
            queue: Deque::new(),
            current: initial,
            reads: Vec::new(),
            fail: false,
        }
    }

    /// Queue a sample; returns `false` when the queue is full
    pub fn push(&mut self, sample: Sample) -> bool {
        self.queue.push_back(sample).is_ok()
    }

    /// Make every following read fail
    pub fn disconnect(&mut self) {
        self.fail = true;
    }

    /// Axes read so far, in order
    pub fn reads(&self) -> &[Axis] {
        &self.reads
    }
}

impl AxisReader for SimJoystick {
    type Error = SimError;

    async fn read(&mut self, axis: Axis) -> Result<u16, SimError> {
        if self.fail {
            return Err(SimError::Disconnected);
        }
        self.reads.push(axis).expect("sim joystick read log full");
        match axis {
            Axis::X => {
                if let Some(next) = self.queue.pop_front() {
                    self.current = next;
                }
                Ok(self.current.x)
            }
            Axis::Y => Ok(self.current.y),
        }
    }
}

/// Recorded [`Screen`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenOp {
    Clear,
    Square(Point, u32),
    Border(bool),
    Flush,
}

const WIDTH: usize = 128;
const HEIGHT: usize = 64;

type Pixels = [[bool; WIDTH]; HEIGHT];

/// 128×64 frame buffer with a separate "panel" updated on flush
pub struct SimScreen {
    buffer: Pixels,
    panel: Pixels,
    ops: Vec<ScreenOp, OP_LOG_LEN>,
    flushes: u32,
    fail_flush: bool,
}

impl Default for SimScreen {
    fn default() -> Self {
        Self {
            buffer: [[false; WIDTH]; HEIGHT],
            panel: [[false; WIDTH]; HEIGHT],
            ops: Vec::new(),
            flushes: 0,
            fail_flush: false,
        }
    }
}

impl SimScreen {
    /// Calls recorded since creation or the last [`SimScreen::reset_ops`]
    ///
    /// Recording a call past [`OP_LOG_LEN`] panics.
    pub fn ops(&self) -> &[ScreenOp] {
        &self.ops
    }

    pub fn reset_ops(&mut self) {
        self.ops.clear();
    }

    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    /// Make every following flush fail
    pub fn fail_flush(&mut self) {
        self.fail_flush = true;
    }

    /// Pixel in the frame buffer
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.buffer[y][x]
    }

    /// Pixel as of the last successful flush
    pub fn panel_pixel(&self, x: usize, y: usize) -> bool {
        self.panel[y][x]
    }

    /// Number of lit pixels in the frame buffer
    pub fn lit(&self) -> usize {
        self.buffer.iter().flatten().filter(|p| **p).count()
    }

    fn record(&mut self, op: ScreenOp) {
        self.ops.push(op).expect("sim screen op log full");
    }
}

impl OriginDimensions for SimScreen {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for SimScreen {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                if x < WIDTH && y < HEIGHT {
                    self.buffer[y][x] = color.is_on();
                }
            }
        }
        Ok(())
    }
}

impl Screen for SimScreen {
    type Error = SimError;

    fn clear(&mut self) {
        self.record(ScreenOp::Clear);
        self.buffer = [[false; WIDTH]; HEIGHT];
    }

    fn draw_square(&mut self, origin: Point, size: u32) -> Result<(), SimError> {
        self.record(ScreenOp::Square(origin, size));
        graphics::draw_square(self, origin, size).map_err(|never| match never {})
    }

    fn set_border(&mut self, visible: bool) -> Result<(), SimError> {
        self.record(ScreenOp::Border(visible));
        graphics::draw_border(self, visible).map_err(|never| match never {})
    }

    fn flush(&mut self) -> Result<(), SimError> {
        self.record(ScreenOp::Flush);
        if self.fail_flush {
            return Err(SimError::Disconnected);
        }
        self.panel = self.buffer;
        self.flushes += 1;
        Ok(())
    }
}

/// PWM channel remembering the last requested level
#[derive(Debug, Default)]
pub struct SimPwm {
    level: u16,
    writes: u32,
}

impl SimPwm {
    pub fn level(&self) -> u16 {
        self.level
    }

    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl DutyOutput for SimPwm {
    fn set_level(&mut self, level: u16) {
        self.level = level;
        self.writes += 1;
    }
}

/// Indicator remembering its state and how often it was driven
#[derive(Debug, Default)]
pub struct SimLed {
    on: bool,
    writes: u32,
}

impl SimLed {
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl Led for SimLed {
    fn on(&mut self) {
        self.on = true;
        self.writes += 1;
    }

    fn off(&mut self) {
        self.on = false;
        self.writes += 1;
    }
}
