//! # Navigation Sinks
//!
//! A sink is anything with a settable navigation-target attribute: an
//! embedded frame's `src`, a hyperlink's `href`, or the page's own
//! location. The capability is a trait plus a kind tag, so dispatch never
//! refers to concrete host element types and the merge logic stays
//! host-free.

use std::fmt;

use crate::error::Result;
use crate::merge::append_query_params;
use crate::query::QueryParamMap;

/// The kind of navigation target a sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// An embedded frame element; assignment sets its source.
    Frame,
    /// A hyperlink element; assignment sets its target reference.
    Anchor,
    /// The current page's navigation target.
    Page,
}

impl SinkKind {
    pub fn name(&self) -> &'static str {
        match self {
            SinkKind::Frame => "iframe",
            SinkKind::Anchor => "anchor element",
            SinkKind::Page => "page",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A settable navigation target.
pub trait QuerySink {
    /// The kind tag for this sink.
    fn kind(&self) -> SinkKind;

    /// Assign the resolved URL to the sink's navigation-target attribute.
    fn assign(&self, url: &str) -> Result<()>;
}

/// Merge `params` into `base_url` and assign the result to `sink`.
///
/// The sink is never touched when the merge fails, so a malformed base URL
/// causes no partial assignment. Returns the merged URL.
pub fn propagate(sink: &dyn QuerySink, base_url: &str, params: &QueryParamMap) -> Result<String> {
    let target = append_query_params(base_url, params)?;
    log::debug!(
        "propagating {} parameter(s) to {}",
        params.len(),
        sink.kind()
    );
    sink.assign(&target)?;
    Ok(target)
}
