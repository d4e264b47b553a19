use crate::domain::ports::PageChrome;
use tracing::debug;

/// A `PageChrome` for headless runs: the DOM side effects the browser build
/// performs become trace events.
pub struct LoggingChrome;

impl PageChrome for LoggingChrome {
    fn inject_script(&self) {
        debug!("injecting checkout script");
    }

    fn remove_script(&self) {
        debug!("removing checkout script");
    }

    fn lock_scroll(&self) {
        debug!("locking background scroll");
    }

    fn unlock_scroll(&self) {
        debug!("unlocking background scroll");
    }
}
