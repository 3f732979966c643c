//! Shortest-path exploration over road graphs.
//!
//! The [`search`] module holds the engine: an immutable [`RoadGraph`], three
//! traversal strategies that emit their state changes as lazy event streams,
//! and the path reconstructor that turns a finished run into a route with
//! reporting metrics.

pub mod search;

pub use search::error::SearchError;
pub use search::graph::{GraphDocument, RoadGraph};
pub use search::reconstruct::{Reconstruction, UsageLedger, reconstruct_path};
pub use search::types::{Algorithm, EdgeClass, Event, Outcome, PathMetrics, SearchOptions};
pub use search::{Exploration, RouteReport, find_route};
