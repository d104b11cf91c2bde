//! # maze_graph
//!
//! Shortest paths through grid mazes. A [GridGraph] treats every cell of a rectangular grid as
//! a vertex and connects orthogonally adjacent cells, except where obstacles have been placed.
//! Obstacles can be added and removed at any time; the adjacency is updated incrementally.
//! A [PathFinder] then finds the shortest path between the start and finish cells with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search). Note that this
//! assumes a uniform-cost grid without diagonal moves. Connected
//! [components](https://en.wikipedia.org/wiki/Component_(graph_theory)) are tracked alongside
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use maze_graph::GridGraph;
//!
//! let mut graph = GridGraph::new(3, 3).unwrap();
//! graph.set_start(1, 1).unwrap();
//! graph.set_finish(3, 3).unwrap();
//! graph.add_obstacle(2, 2).unwrap();
//! let result = graph.shortest_path().unwrap();
//! assert_eq!(result.distance, 4);
//! ```
pub mod bfs;
pub mod coordinate;
pub mod error;
pub mod grid_graph;
pub mod path_finder;
pub mod render;

pub use coordinate::{Coordinate, Direction};
pub use error::GraphError;
pub use grid_graph::{GridGraph, Role, Vertex};
pub use path_finder::{PathFinder, PathResult};
pub use render::PathDisplay;
