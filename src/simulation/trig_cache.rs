use crate::config::{DEFAULT_WAVELENGTH, TAU, TRIG_CACHE_BOUND};
use crate::simulation::geometry::distance_to_origin;

/// Log target of cache miss diagnostics
pub const MISS_TARGET: &str = "waves::trig_cache";

/// Precomputed `sin(2π · |(x, y)| / DEFAULT_WAVELENGTH)` for every offset in
/// `[0, TRIG_CACHE_BOUND]²`.
///
/// Built once by [`TrigCache::new`] and read-only afterwards, so one instance
/// can be shared behind an `Arc` by every field.
pub struct TrigCache {
    /// Row-major, `side * side` entries, indexed `[y][x]`
    table: Vec<f64>,
    side: usize,
}

impl TrigCache {
    /// Populate the table for the default wavelength
    pub fn new() -> Self {
        Self::with_bound(TRIG_CACHE_BOUND)
    }

    /// Populate a table covering offsets `0..=bound` on both axes
    pub fn with_bound(bound: usize) -> Self {
        let side = bound + 1;
        let mut table = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                table.push(evaluate_sin_of_distance(x as i32, y as i32, DEFAULT_WAVELENGTH));
            }
        }
        log::debug!("Trig cache ready: {}x{} entries", side, side);
        Self { table, side }
    }

    /// Largest offset N such that (N, N) is cached
    pub fn bound(&self) -> usize {
        self.side - 1
    }

    /// True if every offset with `|x| <= reach_x` and `|y| <= reach_y` can be
    /// read from the table at this wavelength
    pub fn covers(&self, reach_x: u32, reach_y: u32, wavelength: f64) -> bool {
        wavelength == DEFAULT_WAVELENGTH
            && (reach_x as usize) < self.side
            && (reach_y as usize) < self.side
    }

    /// Table read without a coverage check; callers check `covers` first
    #[inline]
    pub(crate) fn lookup(&self, x: i32, y: i32) -> f64 {
        let (ax, ay) = (x.unsigned_abs() as usize, y.unsigned_abs() as usize);
        debug_assert!(ax < self.side && ay < self.side);
        self.table[ay * self.side + ax]
    }

    /// Sine of the distance from (0, 0) to (x, y) for the given wavelength.
    ///
    /// Offsets inside the table at the default wavelength are an O(1) read.
    /// Anything else is evaluated directly and reported as a cache miss, so
    /// per-pixel callers should check `covers` once and use `lookup` instead.
    pub fn query(&self, x: i32, y: i32, wavelength: f64) -> f64 {
        if self.covers(x.unsigned_abs(), y.unsigned_abs(), wavelength) {
            self.lookup(x, y)
        } else {
            log::warn!(
                target: MISS_TARGET,
                "Failed to fetch ({}, {}) from the cache.",
                x.unsigned_abs(),
                y.unsigned_abs()
            );
            evaluate_sin_of_distance(x, y, wavelength)
        }
    }

    /// Approximate `sin(t)` for any real `t` using the table's x axis.
    ///
    /// The angle is reduced into `[0, 2π)` and rounded to the nearest whole
    /// distance, so the absolute error stays below `π / DEFAULT_WAVELENGTH`.
    pub fn cached_sin(&self, t: f64) -> f64 {
        let reduced = t.rem_euclid(TAU);
        let offset = (reduced * DEFAULT_WAVELENGTH / TAU).round() as usize;
        // Row y = 0 holds the x axis
        if offset < self.side {
            self.table[offset]
        } else {
            t.sin()
        }
    }
}

impl Default for TrigCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn evaluate_sin_of_distance(x: i32, y: i32, wavelength: f64) -> f64 {
    (distance_to_origin(x, y) * TAU / wavelength).sin()
}
