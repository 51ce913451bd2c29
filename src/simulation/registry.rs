use crate::config::{AMPLITUDE_TICK, MAX_AMPLITUDE, MAX_OSCILLATORS, MIN_AMPLITUDE};
use crate::error::{Result, WaveError};
use crate::simulation::geometry::{maximum, minimum};
use crate::simulation::oscillator::{Direction, Oscillator};

/// Fixed-capacity set of oscillators with a current selection.
///
/// The selected slot is always occupied: selecting an empty slot creates a
/// default oscillator there, and deleting the selected oscillator moves the
/// selection to the first live slot (recreating slot 0 if none is left).
#[derive(Clone, Debug)]
pub struct Registry {
    slots: [Option<Oscillator>; MAX_OSCILLATORS],
    selection: usize,
}

impl Registry {
    /// One default oscillator in slot 0, selected
    pub fn new() -> Self {
        let mut slots = [None; MAX_OSCILLATORS];
        slots[0] = Some(Self::create_default());
        Self {
            slots,
            selection: 0,
        }
    }

    pub fn create_default() -> Oscillator {
        Oscillator::default()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected(&self) -> &Oscillator {
        debug_assert!(self.slots[self.selection].is_some());
        self.slots[self.selection]
            .as_ref()
            .unwrap_or(&Oscillator::DEFAULT)
    }

    fn selected_mut(&mut self) -> &mut Oscillator {
        self.slots[self.selection].get_or_insert_with(Self::create_default)
    }

    pub fn get(&self, index: usize) -> Option<&Oscillator> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Live oscillators with their slot index, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Oscillator)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|osc| (index, osc)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select `index`, creating a default oscillator there if the slot is empty
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.slots.len() {
            return Err(WaveError::SlotOutOfRange {
                index,
                capacity: self.slots.len(),
            });
        }
        self.selection = index;
        if self.slots[index].is_none() {
            self.slots[index] = Some(Self::create_default());
            log::info!("Created oscillator #{}", index + 1);
        }
        Ok(())
    }

    /// Remove the selected oscillator and select the first remaining one
    pub fn delete_current(&mut self) {
        self.slots[self.selection] = None;
        log::info!("Deleted oscillator #{}", self.selection + 1);
        match self.slots.iter().position(Option::is_some) {
            Some(index) => self.selection = index,
            None => {
                self.selection = 0;
                self.slots[0] = Some(Self::create_default());
            }
        }
    }

    /// Translate the selected oscillator one unit; centers are not clamped
    pub fn move_selected(&mut self, direction: Direction) {
        let osc = self.selected_mut();
        osc.center = osc.center.step(direction);
    }

    /// Add `delta` to the selected amplitude, clamped to the allowed range
    pub fn adjust_amplitude(&mut self, delta: f64) {
        let osc = self.selected_mut();
        osc.amplitude = minimum(maximum(osc.amplitude + delta, MIN_AMPLITUDE), MAX_AMPLITUDE);
    }

    pub fn increase_amplitude(&mut self) {
        self.adjust_amplitude(AMPLITUDE_TICK);
    }

    pub fn decrease_amplitude(&mut self) {
        self.adjust_amplitude(-AMPLITUDE_TICK);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
