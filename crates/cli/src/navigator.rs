//! Navigation for a terminal front end.

use tracing::debug;

use catalog_app::navigation::{Navigator, Route};

/// There are no views to switch between; requested transitions are only logged.
#[derive(Debug, Default)]
pub(crate) struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        debug!(%route, "navigation requested");
    }
}
