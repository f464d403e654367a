//! Concrete navigation-target sinks
//!
//! Each sink wraps the host element (or location) it writes to. Element
//! sinks are built through a capability check: the element must downcast
//! to the expected host type before it can be assigned a URL.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, HtmlIFrameElement, Location};

use lib_params::{PropagateError, QuerySink, Result, SinkKind};

/// An embedded frame; assignment sets its `src`.
pub struct IframeSink {
    frame: HtmlIFrameElement,
}

impl IframeSink {
    /// Capability-check `element`; fails when it is not an iframe.
    pub fn from_element(element: &Element) -> Result<Self> {
        element
            .dyn_ref::<HtmlIFrameElement>()
            .cloned()
            .map(|frame| Self { frame })
            .ok_or(PropagateError::TypeMismatch(SinkKind::Frame))
    }
}

impl QuerySink for IframeSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Frame
    }

    fn assign(&self, url: &str) -> Result<()> {
        self.frame.set_src(url);
        Ok(())
    }
}

/// A hyperlink; assignment sets its `href`.
pub struct AnchorSink {
    anchor: HtmlAnchorElement,
}

impl AnchorSink {
    /// Capability-check `element`; fails when it is not an anchor.
    pub fn from_element(element: &Element) -> Result<Self> {
        element
            .dyn_ref::<HtmlAnchorElement>()
            .cloned()
            .map(|anchor| Self { anchor })
            .ok_or(PropagateError::TypeMismatch(SinkKind::Anchor))
    }
}

impl QuerySink for AnchorSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Anchor
    }

    fn assign(&self, url: &str) -> Result<()> {
        self.anchor.set_href(url);
        Ok(())
    }
}

/// The current page; assignment navigates away from the caller.
pub struct PageSink {
    location: Location,
}

impl PageSink {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

impl QuerySink for PageSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Page
    }

    fn assign(&self, url: &str) -> Result<()> {
        self.location
            .set_href(url)
            .map_err(|err| PropagateError::Navigation(format!("{:?}", err)))
    }
}
