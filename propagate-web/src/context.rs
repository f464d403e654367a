//! Host navigation context
//!
//! Wraps `window.location` behind an explicit value so callers receive
//! the current query string through a parameter instead of reading
//! ambient global state. The pure merge logic never sees this type.

use web_sys::Location;

use lib_params::{parse_query, PropagateError, QueryParamMap, Result};

use crate::sinks::PageSink;

/// Read/write access to the current page's location.
pub struct NavigationContext {
    location: Location,
}

impl NavigationContext {
    /// Build a context from the global window.
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(PropagateError::NoWindow)?;
        Ok(Self::new(window.location()))
    }

    pub fn new(location: Location) -> Self {
        Self { location }
    }

    /// The current search string, empty when the host read fails.
    pub fn search(&self) -> String {
        self.location.search().unwrap_or_default()
    }

    /// The current page's query parameters, parsed fresh on every call.
    pub fn query_params(&self) -> QueryParamMap {
        parse_query(&self.search())
    }

    /// A sink that navigates the current page.
    pub fn page_sink(&self) -> PageSink {
        PageSink::new(self.location.clone())
    }
}
