use crate::bfs::bfs;
use crate::coordinate::Coordinate;
use crate::error::GraphError;
use crate::grid_graph::GridGraph;
use log::{debug, info, warn};
use smallvec::SmallVec;

/// A shortest path from start to finish, both included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Number of edges on the path, always `path.len() - 1`.
    pub distance: usize,
    pub path: Vec<Coordinate>,
}

impl PathResult {
    /// Checks whether `c` lies on the path strictly between its two endpoints.
    pub fn passes_through(&self, c: &Coordinate) -> bool {
        match self.path.len() {
            0..=2 => false,
            n => self.path[1..n - 1].contains(c),
        }
    }
}

/// Breadth-first shortest path search between the start and finish of a [GridGraph]. All search
/// state lives in the call, so a single graph can be queried from several threads at once.
#[derive(Clone, Debug)]
pub struct PathFinder {
    /// Stop searching as soon as the finish is discovered instead of sweeping every reachable
    /// vertex.
    pub early_exit: bool,
    /// Consult the connected components of the graph before searching, which avoids flood
    /// filling when start and finish are known to be disconnected.
    pub component_check: bool,
}

impl PathFinder {
    pub fn new() -> PathFinder {
        PathFinder {
            early_exit: true,
            component_check: true,
        }
    }

    pub fn shortest_path(&self, graph: &GridGraph) -> Result<PathResult, GraphError> {
        let start = graph.start().ok_or(GraphError::NoStartAssigned)?;
        let finish = graph.finish().ok_or(GraphError::NoFinishAssigned)?;
        let no_path = GraphError::NoPathExists { start, finish };
        if self.component_check && graph.unreachable(&start, &finish) {
            info!("{} is not reachable from {}", finish, start);
            return Err(no_path);
        }
        let (path, distance): (Vec<Coordinate>, usize) = bfs(
            &start,
            // Only the start and coordinates taken from the adjacency are expanded, all of
            // which lie on the grid.
            |c| match graph.adjacent_coordinates(c) {
                Ok(adjacent) => adjacent,
                Err(e) => {
                    warn!("Search reached an invalid vertex: {}", e);
                    debug_assert!(false, "search reached an invalid vertex: {e}");
                    SmallVec::new()
                }
            },
            |c| *c == finish,
            self.early_exit,
        )
        .ok_or(no_path)?;
        debug_assert!(distance as u64 >= start.manhattan_distance(&finish));
        debug!("Found path of length {} from {} to {}", distance, start, finish);
        Ok(PathResult { distance, path })
    }
}

impl Default for PathFinder {
    fn default() -> PathFinder {
        PathFinder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_finders() -> Vec<PathFinder> {
        let mut finders = Vec::new();
        for early_exit in [true, false] {
            for component_check in [true, false] {
                finders.push(PathFinder {
                    early_exit,
                    component_check,
                });
            }
        }
        finders
    }

    fn scenario_graph() -> GridGraph {
        let mut graph = GridGraph::new(5, 3).unwrap();
        graph.set_start(1, 1).unwrap();
        graph.set_finish(1, 3).unwrap();
        graph.add_obstacle(1, 2).unwrap();
        graph.add_obstacle(2, 2).unwrap();
        graph.add_obstacle(4, 2).unwrap();
        graph
    }

    #[test]
    fn detour_around_wall() {
        let expected = [(1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (2, 3), (1, 3)]
            .into_iter()
            .map(Coordinate::from)
            .collect::<Vec<_>>();
        let graph = scenario_graph();
        for finder in all_finders() {
            let result = finder.shortest_path(&graph).unwrap();
            assert_eq!(result.distance, 6);
            assert_eq!(result.path, expected);
        }
    }

    #[test]
    fn missing_roles() {
        let mut graph = GridGraph::new(3, 3).unwrap();
        let finder = PathFinder::new();
        assert_eq!(finder.shortest_path(&graph), Err(GraphError::NoStartAssigned));
        graph.set_finish(3, 3).unwrap();
        assert_eq!(finder.shortest_path(&graph), Err(GraphError::NoStartAssigned));
        let mut graph = GridGraph::new(3, 3).unwrap();
        graph.set_start(1, 1).unwrap();
        assert_eq!(finder.shortest_path(&graph), Err(GraphError::NoFinishAssigned));
    }

    #[test]
    fn enclosed_finish_has_no_path() {
        let mut graph = GridGraph::new(3, 3).unwrap();
        graph.set_start(1, 1).unwrap();
        graph.set_finish(2, 2).unwrap();
        for (row, col) in [(1, 2), (2, 1), (2, 3), (3, 2)] {
            graph.add_obstacle(row, col).unwrap();
        }
        let expected = GraphError::NoPathExists {
            start: Coordinate::new(1, 1),
            finish: Coordinate::new(2, 2),
        };
        for finder in all_finders() {
            assert_eq!(finder.shortest_path(&graph), Err(expected.clone()));
        }
        // Same answer once the components are exact.
        graph.update();
        assert_eq!(graph.shortest_path(), Err(expected));
    }

    #[test]
    fn adjacent_start_and_finish() {
        let mut graph = GridGraph::new(1, 2).unwrap();
        graph.set_start(1, 1).unwrap();
        graph.set_finish(1, 2).unwrap();
        let result = graph.shortest_path().unwrap();
        assert_eq!(result.distance, 1);
        assert_eq!(result.path, vec![Coordinate::new(1, 1), Coordinate::new(1, 2)]);
        assert!(!result.passes_through(&Coordinate::new(1, 1)));
    }

    #[test]
    fn symmetric_distance() {
        let mut graph = scenario_graph();
        let forward = graph.shortest_path().unwrap();
        graph.set_start(5, 3).unwrap();
        graph.set_finish(1, 1).unwrap();
        let there = graph.shortest_path().unwrap();
        // Move start away first so the finish can take its place.
        graph.set_start(2, 1).unwrap();
        graph.set_finish(5, 3).unwrap();
        graph.set_start(1, 1).unwrap();
        let back = graph.shortest_path().unwrap();
        assert_eq!(there.distance, back.distance);
        assert_eq!(forward.distance, 6);
        assert_eq!(there.distance, 6);
    }

    #[test]
    fn reopening_a_cell_shortens_the_path() {
        let mut graph = scenario_graph();
        graph.remove_obstacle(1, 2).unwrap();
        let result = graph.shortest_path().unwrap();
        assert_eq!(result.distance, 2);
        assert!(result.passes_through(&Coordinate::new(1, 2)));
    }

    #[test]
    fn repeated_queries_agree() {
        let graph = scenario_graph();
        let first = graph.shortest_path().unwrap();
        let second = graph.shortest_path().unwrap();
        assert_eq!(first, second);
    }
}
