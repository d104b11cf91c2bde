use maze_graph::{GraphError, GridGraph};

// In this example a path is found on a 5x3 grid with shape
//  ___
// |S#F|
// | # |
// |   |
// | # |
// |   |
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - F marks the finish
//
// Afterwards the finish is walled in, so no path is left.

fn main() -> Result<(), GraphError> {
    let mut graph = GridGraph::new(5, 3)?;
    graph.set_start(1, 1)?;
    graph.set_finish(1, 3)?;
    for (row, col) in [(1, 2), (2, 2), (4, 2)] {
        graph.add_obstacle(row, col)?;
    }
    println!("{}", graph);

    let result = graph.shortest_path()?;
    println!("{}", graph.display_path(&result));
    println!("Path:");
    for c in &result.path {
        println!("{}", c);
    }

    graph.add_obstacle(2, 3)?;
    match graph.shortest_path() {
        Ok(result) => println!("Unexpected path of length {}", result.distance),
        Err(e) => println!("\n{}", e),
    }
    Ok(())
}
