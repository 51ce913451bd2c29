pub mod config;
pub mod error;
pub mod present;
pub mod simulation;

pub use crate::error::{Result, WaveError};
pub use crate::simulation::{Action, DisplayMatrix, Field, Registry, Session, TrigCache};
