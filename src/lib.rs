//! Shortest path routing over 2D embedded graphs
//!
//! A graph loads from token-delimited vertex and edge records, with edge
//! weights either given or derived from a pluggable distance metric.
//! One best-first engine answers both uninformed (Dijkstra's) and
//! heuristic-guided (A*) queries, toggled per search.

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use geometry::{DistanceMetric, Point};
pub use graph::{Graph, VertexId};
pub use graph_algos::{SearchEvent, SearchResult, find_shortest_path, find_shortest_path_observed};
