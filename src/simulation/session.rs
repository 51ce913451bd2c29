use std::sync::Arc;

use crate::error::Result;
use crate::simulation::field::Field;
use crate::simulation::normalize::{normalize, DisplayMatrix};
use crate::simulation::oscillator::Direction;
use crate::simulation::registry::Registry;
use crate::simulation::trig_cache::TrigCache;

/// Whether oscillator centers are marked on the rendered frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HighlightMode {
    None,
    #[default]
    Dot,
}

/// A discrete user request against the simulation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Move(Direction),
    Select(usize),
    DeleteCurrent,
    IncreaseAmplitude,
    DecreaseAmplitude,
    ToggleRendering,
    CycleDissipation,
    ToggleHighlight,
}

/// Owns the field and registry and shares the trig cache
pub struct Session {
    pub field: Field,
    pub registry: Registry,
    cache: Arc<TrigCache>,
    pub highlight: HighlightMode,
}

impl Session {
    pub fn new(width: u32, height: u32, cache: Arc<TrigCache>) -> Result<Self> {
        Ok(Self {
            field: Field::new(width, height)?,
            registry: Registry::new(),
            cache,
            highlight: HighlightMode::default(),
        })
    }

    /// Apply one action. Returns true if anything changed.
    pub fn apply(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Move(direction) => self.registry.move_selected(direction),
            Action::Select(index) => {
                if index == self.registry.selection() {
                    return Ok(false);
                }
                self.registry.select(index)?;
                log::info!("Selected oscillator #{}", index + 1);
            }
            Action::DeleteCurrent => self.registry.delete_current(),
            Action::IncreaseAmplitude | Action::DecreaseAmplitude => {
                let before = self.registry.selected().amplitude;
                if action == Action::IncreaseAmplitude {
                    self.registry.increase_amplitude();
                } else {
                    self.registry.decrease_amplitude();
                }
                let after = self.registry.selected().amplitude;
                if after == before {
                    return Ok(false);
                }
                log::info!("Amplitude of #{}: {:.1}", self.registry.selection() + 1, after);
            }
            Action::ToggleRendering => {
                self.field.toggle_rendering();
            }
            Action::CycleDissipation => {
                self.field.cycle_dissipation_model();
            }
            Action::ToggleHighlight => {
                self.highlight = match self.highlight {
                    HighlightMode::None => HighlightMode::Dot,
                    HighlightMode::Dot => HighlightMode::None,
                };
            }
        }
        Ok(true)
    }

    /// Recompute the field (unless frozen) and rescale it for display
    pub fn recompute_and_normalize(&mut self) -> DisplayMatrix {
        self.field.recompute(&self.registry, &self.cache);
        normalize(self.field.intensity(), self.field.width(), self.field.height())
    }

    /// Pixels of every live oscillator center inside the field, when highlighting
    pub fn highlights(&self) -> Vec<(u32, u32)> {
        match self.highlight {
            HighlightMode::None => Vec::new(),
            HighlightMode::Dot => self
                .registry
                .iter()
                .filter_map(|(_, osc)| self.field.pixel_of(osc.center))
                .collect(),
        }
    }
}
