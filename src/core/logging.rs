//! Logger setup for the fixture libraries

use log::LevelFilter;
use std::sync::Once;

pub const LOG_TAG: &str = "jni-fixtures";

static INIT: Once = Once::new();

/// Installs the platform logger; later calls are no-ops.
pub fn init_logging() {
    INIT.call_once(|| {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(LevelFilter::Debug)
                .with_tag(LOG_TAG),
        );

        #[cfg(not(target_os = "android"))]
        {
            // 宿主进程可能已经装好了 logger
            let _ = env_logger::Builder::new()
                .filter_level(LevelFilter::Info)
                .parse_default_env()
                .try_init();
        }
    });
}
