//! ASCII drawing of a [GridGraph]. Cells are drawn as boxes; walls appear wherever two
//! neighbouring cells are not connected by an edge, so obstacles show up fully enclosed.
//!
//! ```text
//! .-------.-------.
//! | ( s ) | (1,2) |
//! :       +-------+
//! | ( p )   ( f ) |
//! '-------'-------'
//! ```
use crate::coordinate::{Coordinate, Direction};
use crate::error::GraphError;
use crate::grid_graph::{GridGraph, Role};
use crate::path_finder::PathResult;
use core::fmt;

const START_LABEL: &str = "( s )";
const FINISH_LABEL: &str = "( f )";
const PATH_LABEL: &str = "( p )";

/// Draws a graph together with a path through it and the length of that path.
#[derive(Clone, Copy, Debug)]
pub struct PathDisplay<'a> {
    graph: &'a GridGraph,
    path: &'a PathResult,
}

impl GridGraph {
    pub fn display_path<'a>(&'a self, path: &'a PathResult) -> PathDisplay<'a> {
        PathDisplay { graph: self, path }
    }

    /// Computes the shortest path and draws it, see [PathDisplay].
    pub fn render_shortest_path(&self) -> Result<String, GraphError> {
        let path = self.shortest_path()?;
        Ok(self.display_path(&path).to_string())
    }
}

fn label(graph: &GridGraph, c: &Coordinate, path: Option<&PathResult>) -> String {
    let vertex = match graph.vertex(c) {
        Ok(vertex) => vertex,
        Err(_) => return c.to_string(),
    };
    match vertex.role() {
        Some(Role::Start) => START_LABEL.to_owned(),
        Some(Role::Finish) => FINISH_LABEL.to_owned(),
        None if path.map_or(false, |p| p.passes_through(c)) => PATH_LABEL.to_owned(),
        None => c.to_string(),
    }
}

fn write_grid(f: &mut fmt::Formatter, graph: &GridGraph, path: Option<&PathResult>) -> fmt::Result {
    let (height, width) = (graph.height() as i32, graph.width() as i32);
    // The bottom right label is the widest one.
    let lw = Coordinate::new(height, width).to_string().len().max(START_LABEL.len());
    let dashes = "-".repeat(lw + 2);
    let blank = " ".repeat(lw + 2);

    writeln!(f, ".{}", format!("{dashes}.").repeat(width as usize))?;
    for row in 1..=height {
        write!(f, "|")?;
        for col in 1..=width {
            let c = Coordinate::new(row, col);
            let open = c
                .step(Direction::Right)
                .map_or(false, |n| graph.has_edge(&c, &n));
            let text = label(graph, &c, path);
            write!(f, " {:^lw$} {}", text, if open { ' ' } else { '|' })?;
        }
        writeln!(f)?;
        if row < height {
            write!(f, ":")?;
            for col in 1..=width {
                let c = Coordinate::new(row, col);
                let open = c
                    .step(Direction::Down)
                    .map_or(false, |n| graph.has_edge(&c, &n));
                write!(f, "{}+", if open { &blank } else { &dashes })?;
            }
            writeln!(f)?;
        }
    }
    writeln!(f, "'{}", format!("{dashes}'").repeat(width as usize))
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_grid(f, self, None)
    }
}

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_grid(f, self.graph, Some(self.path))?;
        write!(f, "\ndistance = {}", self.path.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_open_grid() {
        let graph = GridGraph::new(1, 2).unwrap();
        assert_eq!(
            graph.to_string(),
            ".-------.-------.\n| (1,1)   (1,2) |\n'-------'-------'\n"
        );
    }

    #[test]
    fn draws_walls_and_roles() {
        let mut graph = GridGraph::new(5, 5).unwrap();
        graph.set_start(1, 1).unwrap();
        graph.set_finish(1, 5).unwrap();
        for row in 1..=3 {
            graph.add_obstacle(row, 3).unwrap();
        }
        let expected = [
            ".-------.-------.-------.-------.-------.",
            "| ( s )   (1,2) | (1,3) | (1,4)   ( f ) |",
            ":       +       +-------+       +       +",
            "| (2,1)   (2,2) | (2,3) | (2,4)   (2,5) |",
            ":       +       +-------+       +       +",
            "| (3,1)   (3,2) | (3,3) | (3,4)   (3,5) |",
            ":       +       +-------+       +       +",
            "| (4,1)   (4,2)   (4,3)   (4,4)   (4,5) |",
            ":       +       +       +       +       +",
            "| (5,1)   (5,2)   (5,3)   (5,4)   (5,5) |",
            "'-------'-------'-------'-------'-------'",
            "",
        ]
        .join("\n");
        assert_eq!(graph.to_string(), expected);
    }

    #[test]
    fn draws_shortest_path() {
        let mut graph = GridGraph::new(5, 3).unwrap();
        graph.set_start(1, 1).unwrap();
        graph.set_finish(1, 3).unwrap();
        graph.add_obstacle(1, 2).unwrap();
        graph.add_obstacle(2, 2).unwrap();
        graph.add_obstacle(4, 2).unwrap();
        let expected = [
            ".-------.-------.-------.",
            "| ( s ) | (1,2) | ( f ) |",
            ":       +-------+       +",
            "| ( p ) | (2,2) | ( p ) |",
            ":       +-------+       +",
            "| ( p )   ( p )   ( p ) |",
            ":       +-------+       +",
            "| (4,1) | (4,2) | (4,3) |",
            ":       +-------+       +",
            "| (5,1)   (5,2)   (5,3) |",
            "'-------'-------'-------'",
            "",
            "distance = 6",
        ]
        .join("\n");
        assert_eq!(graph.render_shortest_path().unwrap(), expected);
    }

    #[test]
    fn widens_cells_for_long_labels() {
        let graph = GridGraph::new(10, 1).unwrap();
        let text = graph.to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], ".--------.");
        assert_eq!(lines[1], "| (1,1)  |");
        assert_eq!(lines[19], "| (10,1) |");
        assert!(lines.iter().all(|l| l.chars().count() == 10));
    }

    #[test]
    fn render_reports_missing_path() {
        let mut graph = GridGraph::new(1, 3).unwrap();
        graph.set_start(1, 1).unwrap();
        graph.set_finish(1, 3).unwrap();
        graph.add_obstacle(1, 2).unwrap();
        assert!(matches!(
            graph.render_shortest_path(),
            Err(GraphError::NoPathExists { .. })
        ));
    }
}
