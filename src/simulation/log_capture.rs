//! Counts warnings per thread so parallel tests see only their own records.

use std::cell::Cell;
use std::sync::Once;

use log::{Level, Log, Metadata, Record};

thread_local! {
    static WARNINGS: Cell<usize> = const { Cell::new(0) };
}

struct CountingLogger {
    target: &'static str,
}

impl Log for CountingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn && metadata.target() == self.target
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) && record.level() == Level::Warn {
            WARNINGS.with(|count| count.set(count.get() + 1));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger {
    target: crate::simulation::trig_cache::MISS_TARGET,
};
static INSTALL: Once = Once::new();

/// Warnings logged to the cache miss target on this thread while `f` runs
pub fn count_miss_warnings<R>(f: impl FnOnce() -> R) -> (R, usize) {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Warn);
        }
    });
    WARNINGS.with(|count| count.set(0));
    let result = f();
    (result, WARNINGS.with(Cell::get))
}
