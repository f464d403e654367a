//! # Query Parameter Library
//!
//! Pure query-string parsing, parameter merging, and the navigation-sink
//! capability used by the browser bindings. Nothing here touches the DOM,
//! so every operation is natively testable.

pub mod error;
pub mod merge;
pub mod query;
pub mod sink;

// Re-export commonly used types
pub use error::{PropagateError, Result};
pub use merge::append_query_params;
pub use query::{get_query_param, parse_query, QueryParamMap};
pub use sink::{propagate, QuerySink, SinkKind};
