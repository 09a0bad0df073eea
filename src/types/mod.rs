//! Value and error types shared across the library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Weight reported for an edge that does not exist.
pub const NO_EDGE_WEIGHT: f64 = f64::INFINITY;
