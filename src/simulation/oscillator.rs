use crate::config::{DEFAULT_AMPLITUDE, DEFAULT_WAVELENGTH};

/// Integer position relative to the field center
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One unit step. Screen coordinates: up is negative y.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A point wave source
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    pub center: Point,
    pub amplitude: f64,
    pub wavelength: f64,
}

impl Oscillator {
    /// Oscillator at the field origin with default amplitude and wavelength
    pub const DEFAULT: Oscillator = Oscillator {
        center: Point::ORIGIN,
        amplitude: DEFAULT_AMPLITUDE,
        wavelength: DEFAULT_WAVELENGTH,
    };

    pub fn at(center: Point) -> Self {
        Self {
            center,
            ..Self::DEFAULT
        }
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::DEFAULT
    }
}
