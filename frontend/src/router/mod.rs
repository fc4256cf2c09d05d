mod history;
mod params;
mod pattern;
mod table;

use std::rc::Rc;

pub use history::{HashHistoryDriver, HistoryDriver, MemoryHistory};
use leptos::*;
pub use params::{parse_query, ParamValue, ParamsMapExt};
pub use pattern::{is_numeric, PatternError, RoutePattern, Segment};
pub use table::{
    route_table, Page, ResolvedRoute, Resolution, RouteEntry, RouteTable,
    RouteTableBuilder,
};

/// The link target for an in-app location.
pub fn href(location: &str) -> String {
    format!("#{}", normalize(location))
}

fn normalize(location: &str) -> String {
    let location = location.trim_start_matches('#');
    if location.starts_with('/') {
        location.to_owned()
    } else {
        format!("/{location}")
    }
}

/// Current location and its resolution against a [`RouteTable`].
///
/// Programmatic navigation updates the state right away. Changes made
/// outside the app (back/forward, editing the address) reach the router
/// through the driver's listener.
#[derive(Clone)]
pub struct Router {
    driver: Rc<dyn HistoryDriver>,
    location: RwSignal<String>,
    resolution: Memo<Resolution>,
}

impl Router {
    pub fn new(table: &'static RouteTable, driver: Rc<dyn HistoryDriver>) -> Self {
        let location = create_rw_signal(driver.current());
        let resolution =
            create_memo(move |_| location.with(|location| table.resolve(location)));

        driver.listen(Rc::new(move |current| set_location(location, current)));

        Self {
            driver,
            location,
            resolution,
        }
    }

    pub fn location(&self) -> Signal<String> {
        self.location.into()
    }

    pub fn resolution(&self) -> Memo<Resolution> {
        self.resolution
    }

    /// Push `location` onto the history.
    pub fn navigate(&self, location: &str) {
        let location = normalize(location);
        tracing::debug!(%location, "navigate");
        self.driver.push(&location);
        set_location(self.location, location);
    }

    /// Replace the current history entry with `location`.
    pub fn replace(&self, location: &str) {
        let location = normalize(location);
        tracing::debug!(%location, "replace");
        self.driver.replace(&location);
        set_location(self.location, location);
    }

    /// Re-read the driver, for changes whose notification was missed.
    pub fn sync(&self) {
        set_location(self.location, self.driver.current());
    }
}

fn set_location(signal: RwSignal<String>, location: String) {
    if signal.with_untracked(|current| *current != location) {
        signal.set(location);
    }
}

pub fn provide_router(router: Router) {
    provide_context(router);
}

pub fn use_router() -> Router {
    expect_context::<Router>()
}
