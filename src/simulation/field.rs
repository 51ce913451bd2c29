use std::time::Instant;

use crate::config::{DEFAULT_DISSIPATION_MODEL, DISSIPATION_START};
use crate::error::{Result, WaveError};
use crate::simulation::dissipation::{dissipate, DissipationModel};
use crate::simulation::geometry::distance_to_origin;
use crate::simulation::oscillator::Point;
use crate::simulation::registry::Registry;
use crate::simulation::trig_cache::{evaluate_sin_of_distance, TrigCache, MISS_TARGET};

/// The simulated rectangle and its raw intensity matrix.
///
/// Cell `(px, py)` sits at logical position `(px - width / 2, py - height / 2)`,
/// so an oscillator at (0, 0) lands on the center pixel.
pub struct Field {
    width: u32,
    height: u32,
    /// Row-major, `width * height`, indexed `[py][px]`
    intensity: Vec<f64>,
    pub dissipation_model: DissipationModel,
    /// When false, `recompute` keeps the last matrix
    pub rendering: bool,
    dissipation_start: f64,
}

impl Field {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(WaveError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            intensity: vec![0.0; width as usize * height as usize],
            dissipation_model: DEFAULT_DISSIPATION_MODEL,
            rendering: true,
            dissipation_start: DISSIPATION_START,
        })
    }

    /// Same field with a different dissipation start threshold
    pub fn with_dissipation_start(mut self, start: f64) -> Self {
        self.dissipation_start = start;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn intensity(&self) -> &[f64] {
        &self.intensity
    }

    pub fn intensity_at(&self, px: u32, py: u32) -> f64 {
        self.intensity[(py * self.width + px) as usize]
    }

    /// Logical offset of pixel (0, 0)
    fn origin_offset(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Pixel holding a logical position, if it lies inside the field
    pub fn pixel_of(&self, point: Point) -> Option<(u32, u32)> {
        let offset = self.origin_offset();
        let px = u32::try_from(point.x + offset.x).ok()?;
        let py = u32::try_from(point.y + offset.y).ok()?;
        (px < self.width && py < self.height).then_some((px, py))
    }

    /// Largest `|dx|` and `|dy|` between `center` and any pixel
    fn reach(&self, center: Point) -> (u32, u32) {
        let offset = self.origin_offset();
        let span = |origin: i32, size: u32, c: i32| {
            let low = -origin - c;
            let high = size as i32 - 1 - origin - c;
            low.unsigned_abs().max(high.unsigned_abs())
        };
        (
            span(offset.x, self.width, center.x),
            span(offset.y, self.height, center.y),
        )
    }

    /// Advance to the next dissipation model, returning the previous one
    pub fn cycle_dissipation_model(&mut self) -> DissipationModel {
        let old = self.dissipation_model;
        self.dissipation_model = old.next();
        log::info!("Toggled from '{}' to '{}'", old, self.dissipation_model);
        old
    }

    pub fn toggle_rendering(&mut self) -> bool {
        self.rendering = !self.rendering;
        log::info!("Rendering {}", if self.rendering { "resumed" } else { "frozen" });
        self.rendering
    }

    /// Superpose every live oscillator into the intensity matrix.
    ///
    /// Contributions are summed without clamping; normalization handles
    /// the range. Does nothing while rendering is frozen.
    pub fn recompute(&mut self, registry: &Registry, cache: &TrigCache) {
        if !self.rendering {
            return;
        }
        let start = Instant::now();
        self.intensity.fill(0.0);

        let offset = self.origin_offset();
        let width = self.width as usize;
        let model = self.dissipation_model;
        let threshold = self.dissipation_start;
        for (index, osc) in registry.iter() {
            let (reach_x, reach_y) = self.reach(osc.center);
            let covered = cache.covers(reach_x, reach_y, osc.wavelength);
            if !covered {
                log::warn!(
                    target: MISS_TARGET,
                    "Oscillator #{} reaches ({}, {}), beyond the cache; evaluating directly.",
                    index + 1,
                    reach_x,
                    reach_y
                );
            }
            for (py, row) in self.intensity.chunks_exact_mut(width).enumerate() {
                let dy = py as i32 - offset.y - osc.center.y;
                for (px, cell) in row.iter_mut().enumerate() {
                    let dx = px as i32 - offset.x - osc.center.x;
                    let wave = if covered {
                        cache.lookup(dx, dy)
                    } else {
                        evaluate_sin_of_distance(dx, dy, osc.wavelength)
                    };
                    let value = osc.amplitude * (wave + 1.0) / 2.0;
                    let dist = distance_to_origin(dx, dy);
                    *cell += dissipate(value, dist, model, threshold);
                }
            }
            log::debug!("Evaluated oscillator #{}", index + 1);
        }

        log::debug!("Took {} ms to recompute", start.elapsed().as_millis());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_AMPLITUDE;
    use crate::simulation::log_capture::count_miss_warnings;
    use crate::simulation::oscillator::Direction;

    fn small_cache() -> TrigCache {
        TrigCache::with_bound(64)
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Field::new(0, 4),
            Err(WaveError::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(Field::new(4, 0).is_err());
    }

    #[test]
    fn test_center_pixel_of_single_oscillator() {
        let cache = small_cache();
        let registry = Registry::new();
        let mut field = Field::new(4, 4).unwrap();
        field.recompute(&registry, &cache);

        // sin(0) = 0, mapped to [0, amplitude] gives amplitude / 2
        assert_eq!(field.intensity_at(2, 2), 0.5 * DEFAULT_AMPLITUDE);
        assert_eq!(field.pixel_of(Point::ORIGIN), Some((2, 2)));
    }

    #[test]
    fn test_superposition_is_linear() {
        let cache = small_cache();
        let mut single = Registry::new();
        single.move_selected(Direction::Right);
        let mut double = single.clone();
        double.select(1).unwrap();
        double.move_selected(Direction::Right);

        for model in DissipationModel::ALL {
            let mut a = Field::new(16, 12).unwrap();
            let mut b = Field::new(16, 12).unwrap();
            a.dissipation_model = model;
            b.dissipation_model = model;
            a.recompute(&single, &cache);
            b.recompute(&double, &cache);
            for (x, y) in a.intensity().iter().zip(b.intensity()) {
                assert_eq!(*y, 2.0 * x, "model {}", model);
            }
        }
    }

    #[test]
    fn test_recompute_resets_previous_values() {
        let cache = small_cache();
        let registry = Registry::new();
        let mut field = Field::new(8, 8).unwrap();
        field.recompute(&registry, &cache);
        let first = field.intensity().to_vec();
        field.recompute(&registry, &cache);
        assert_eq!(field.intensity(), first.as_slice());
    }

    #[test]
    fn test_frozen_field_keeps_matrix() {
        let cache = small_cache();
        let mut registry = Registry::new();
        let mut field = Field::new(8, 8).unwrap();
        field.recompute(&registry, &cache);
        let before = field.intensity().to_vec();

        assert!(!field.toggle_rendering());
        registry.move_selected(Direction::Down);
        registry.move_selected(Direction::Down);
        field.recompute(&registry, &cache);
        assert_eq!(field.intensity(), before.as_slice());

        assert!(field.toggle_rendering());
        field.recompute(&registry, &cache);
        assert_ne!(field.intensity(), before.as_slice());
    }

    #[test]
    fn test_dissipation_never_exceeds_undamped() {
        let cache = small_cache();
        let registry = Registry::new();
        let mut plain = Field::new(40, 40).unwrap();
        plain.recompute(&registry, &cache);
        for model in [DissipationModel::InverseLinear, DissipationModel::InverseSquare] {
            let mut damped = Field::new(40, 40).unwrap();
            damped.dissipation_model = model;
            damped.recompute(&registry, &cache);
            for (d, p) in damped.intensity().iter().zip(plain.intensity()) {
                assert!(*d <= *p + 1e-12, "{} amplified {} to {}", model, p, d);
            }
        }
    }

    #[test]
    fn test_odd_dimensions_center() {
        let field = Field::new(5, 3).unwrap();
        assert_eq!(field.pixel_of(Point::ORIGIN), Some((2, 1)));
        assert_eq!(field.pixel_of(Point::new(-2, -1)), Some((0, 0)));
        assert_eq!(field.pixel_of(Point::new(3, 0)), None);
        assert_eq!(field.pixel_of(Point::new(0, -2)), None);
    }

    #[test]
    fn test_cycle_dissipation_returns_to_start() {
        let mut field = Field::new(2, 2).unwrap();
        assert_eq!(field.dissipation_model, DEFAULT_DISSIPATION_MODEL);
        assert_eq!(DEFAULT_DISSIPATION_MODEL, DissipationModel::None);
        field.cycle_dissipation_model();
        field.cycle_dissipation_model();
        assert_eq!(field.cycle_dissipation_model(), DissipationModel::InverseSquare);
        assert_eq!(field.dissipation_model, DEFAULT_DISSIPATION_MODEL);
    }

    #[test]
    fn test_custom_dissipation_start() {
        let cache = small_cache();
        let registry = Registry::new();
        let mut field = Field::new(4, 4).unwrap().with_dissipation_start(1.0);
        field.dissipation_model = DissipationModel::InverseLinear;
        field.recompute(&registry, &cache);
        // Pixel (0, 2) is 2 units left of the oscillator
        let wave = cache.query(-2, 0, crate::config::DEFAULT_WAVELENGTH);
        let expected = (wave + 1.0) / 2.0 / 2.0;
        assert!((field.intensity_at(0, 2) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_reach_spans_whole_field() {
        let field = Field::new(40, 40).unwrap();
        assert_eq!(field.reach(Point::ORIGIN), (20, 20));
        assert_eq!(field.reach(Point::new(60, -3)), (80, 22));
    }

    #[test]
    fn test_uncovered_oscillator_warns_once_per_recompute() {
        let cache = small_cache();
        let mut registry = Registry::new();
        for _ in 0..60 {
            registry.move_selected(Direction::Right);
        }
        let mut field = Field::new(40, 40).unwrap();

        let (_, warnings) = count_miss_warnings(|| field.recompute(&registry, &cache));
        assert_eq!(warnings, 1);

        // A second far oscillator adds one more; a near one adds none
        registry.select(1).unwrap();
        for _ in 0..70 {
            registry.move_selected(Direction::Up);
        }
        registry.select(2).unwrap();
        let (_, warnings) = count_miss_warnings(|| field.recompute(&registry, &cache));
        assert_eq!(warnings, 2);

        let (_, warnings) = count_miss_warnings(|| field.recompute(&registry, &cache));
        assert_eq!(warnings, 2);
    }

    #[test]
    fn test_uncovered_oscillator_matches_direct_evaluation() {
        let cache = small_cache();
        let mut registry = Registry::new();
        for _ in 0..60 {
            registry.move_selected(Direction::Left);
        }
        let mut field = Field::new(40, 40).unwrap();
        field.recompute(&registry, &cache);

        // Pixel (0, 20) sits at logical (-20, 0), 40 units right of the source
        let expected = (evaluate_sin_of_distance(40, 0, crate::config::DEFAULT_WAVELENGTH) + 1.0) / 2.0;
        assert_eq!(field.intensity_at(0, 20), expected);
        assert!(field.intensity().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_covered_field_logs_nothing() {
        let cache = small_cache();
        let registry = Registry::new();
        let mut field = Field::new(40, 40).unwrap();
        let (_, warnings) = count_miss_warnings(|| field.recompute(&registry, &cache));
        assert_eq!(warnings, 0);
    }
}
