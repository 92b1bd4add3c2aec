//! Helpers shared by the unit tests.


use simplelog::{Config, LevelFilter, SimpleLogger};

/// Routes `log` output through the test harness so rotations show up with `--nocapture`. Safe to
/// call from every test; only the first call installs the logger.
pub(crate) fn init_logging() {
    let _ = SimpleLogger::init(LevelFilter::Trace, Config::default());
}
