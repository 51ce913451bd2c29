use crate::simulation::DissipationModel;

// ============================================
// Field
// ============================================

/// Field dimensions (500x500 pixels, one cell per pixel)
pub const FIELD_WIDTH: u32 = 500;
pub const FIELD_HEIGHT: u32 = 500;

/// Window pixels per field cell
pub const WINDOW_SCALE: u32 = 1;

// ============================================
// Wave Parameters
// ============================================

pub const TAU: f64 = std::f64::consts::TAU;

/// The only wavelength the trig cache covers
pub const DEFAULT_WAVELENGTH: f64 = 50.0;

/// Largest offset N such that (N, N) is in the trig cache
pub const TRIG_CACHE_BOUND: usize = 640;

// ============================================
// Oscillators
// ============================================

/// Maximum number of oscillators (one per digit key, 1 through 0)
pub const MAX_OSCILLATORS: usize = 10;

pub const MIN_AMPLITUDE: f64 = 0.1;
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
pub const MAX_AMPLITUDE: f64 = 2.0;

/// Amplitude change per key press
pub const AMPLITUDE_TICK: f64 = 0.1;

// ============================================
// Dissipation
// ============================================

/// Distance below which no dissipation is applied
pub const DISSIPATION_START: f64 = 10.0;

/// Model a new field starts with
pub const DEFAULT_DISSIPATION_MODEL: DissipationModel = DissipationModel::None;

// ============================================
// Presentation
// ============================================

/// Redraw budget; events arriving faster only mutate state
pub const FRAMES_PER_SEC: u32 = 10;

/// RGB color of the oscillator center dots
pub const HIGHLIGHT_COLOR: [u8; 3] = [255, 0, 0];
