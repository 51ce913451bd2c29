pub mod dissipation;
pub mod field;
pub mod geometry;
pub mod normalize;
pub mod oscillator;
pub mod registry;
pub mod session;
pub mod trig_cache;

#[cfg(test)]
mod log_capture;

pub use dissipation::{dissipate, DissipationModel};
pub use field::Field;
pub use normalize::{normalize, DisplayMatrix};
pub use oscillator::{Direction, Oscillator, Point};
pub use registry::Registry;
pub use session::{Action, HighlightMode, Session};
pub use trig_cache::TrigCache;
