use crate::coordinate::{Coordinate, Direction};
use crate::error::GraphError;
use crate::path_finder::{PathFinder, PathResult};
use log::{debug, trace};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::mem::size_of;

/// Bytes a single vertex takes up across the arena and the union-find parent and rank vectors.
const BYTES_PER_VERTEX: usize = size_of::<Vertex>() + size_of::<usize>() + size_of::<u8>();

/// The role a vertex can play in a path query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Start,
    Finish,
}

/// A single cell. Adjacency is kept as a bitmask indexed by [Direction::num].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vertex {
    pub is_start: bool,
    pub is_finish: bool,
    pub is_obstacle: bool,
    pub neighbours: u8,
}

impl Vertex {
    pub fn role(&self) -> Option<Role> {
        if self.is_start {
            Some(Role::Start)
        } else if self.is_finish {
            Some(Role::Finish)
        } else {
            None
        }
    }
    pub fn has_neighbour(&self, direction: Direction) -> bool {
        self.neighbours & direction.bit() != 0
    }
    pub fn neighbour_count(&self) -> u32 {
        self.neighbours.count_ones()
    }
}

/// [GridGraph] models a maze as an unweighted graph on a `height` x `width` grid of cells. Every
/// cell is a vertex, edges connect orthogonally adjacent cells of which neither is an obstacle.
/// In addition to the per-vertex neighbour masks it maintains connected components using a
/// [UnionFind] structure so that queries between disconnected cells can be answered without
/// searching.
#[derive(Clone, Debug)]
pub struct GridGraph {
    height: usize,
    width: usize,
    start: Option<Coordinate>,
    finish: Option<Coordinate>,
    vertices: Vec<Vertex>,
    pub(crate) components: UnionFind<usize>,
    pub(crate) components_dirty: bool,
}

impl GridGraph {
    /// Creates a fully connected grid without obstacles, start or finish. Fails with
    /// [GraphError::InvalidDimensions] if a dimension is not positive or the grid is too large
    /// to allocate.
    pub fn new(height: i32, width: i32) -> Result<GridGraph, GraphError> {
        let invalid = GraphError::InvalidDimensions { height, width };
        if height <= 0 || width <= 0 {
            return Err(invalid);
        }
        let (h, w) = (height as usize, width as usize);
        let n = h
            .checked_mul(w)
            .filter(|n| {
                n.checked_mul(BYTES_PER_VERTEX)
                    .map_or(false, |bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| invalid.clone())?;
        let mut vertices = Vec::new();
        vertices.try_reserve_exact(n).map_err(|_| invalid)?;
        vertices.resize(n, Vertex::default());
        let mut graph = GridGraph {
            height: h,
            width: w,
            start: None,
            finish: None,
            vertices,
            components: UnionFind::new(n),
            components_dirty: false,
        };
        for ix in 0..graph.vertices.len() {
            let c = graph.coordinate_of(ix);
            for dir in Direction::ALL {
                if c.step(dir).map_or(false, |n| graph.contains(&n)) {
                    graph.vertices[ix].neighbours |= dir.bit();
                }
            }
        }
        graph.generate_components();
        Ok(graph)
    }

    /// `(height, width)` of the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }
    pub fn finish(&self) -> Option<Coordinate> {
        self.finish
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        c.row >= 1 && c.col >= 1 && c.row as usize <= self.height && c.col as usize <= self.width
    }

    /// Row-major index of a coordinate into the vertex arena.
    fn index_of(&self, c: &Coordinate) -> Result<usize, GraphError> {
        if self.contains(c) {
            Ok((c.row as usize - 1) * self.width + (c.col as usize - 1))
        } else {
            Err(GraphError::InvalidVertex(*c))
        }
    }
    fn coordinate_of(&self, ix: usize) -> Coordinate {
        Coordinate::new((ix / self.width) as i32 + 1, (ix % self.width) as i32 + 1)
    }

    /// All coordinates of the grid in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.vertices.len()).map(|ix| self.coordinate_of(ix))
    }

    pub fn vertex(&self, c: &Coordinate) -> Result<&Vertex, GraphError> {
        Ok(&self.vertices[self.index_of(c)?])
    }

    pub fn role_of(&self, c: &Coordinate) -> Result<Option<Role>, GraphError> {
        Ok(self.vertex(c)?.role())
    }

    pub fn is_obstacle(&self, c: &Coordinate) -> Result<bool, GraphError> {
        Ok(self.vertex(c)?.is_obstacle)
    }

    /// The coordinates currently connected to `c` by an edge, in [Direction::ALL] order.
    pub fn adjacent_coordinates(
        &self,
        c: &Coordinate,
    ) -> Result<SmallVec<[Coordinate; 4]>, GraphError> {
        let vertex = self.vertex(c)?;
        Ok(Direction::ALL
            .into_iter()
            .filter(|dir| vertex.has_neighbour(*dir))
            .filter_map(|dir| c.step(dir))
            .collect())
    }

    /// Checks whether an edge currently connects `a` and `b`. Out of range coordinates have no
    /// edges.
    pub fn has_edge(&self, a: &Coordinate, b: &Coordinate) -> bool {
        match self.vertex(a) {
            Ok(vertex) => Direction::ALL
                .into_iter()
                .any(|dir| a.step(dir) == Some(*b) && vertex.has_neighbour(dir)),
            Err(_) => false,
        }
    }

    /// Connects or disconnects the vertex `ix` at `c` and its neighbour in `dir`. Directions
    /// leading off the grid are ignored.
    fn set_edge(&mut self, ix: usize, c: Coordinate, dir: Direction, connected: bool) {
        let n_ix = match c.step(dir).map(|n| self.index_of(&n)) {
            Some(Ok(n_ix)) => n_ix,
            _ => return,
        };
        if connected {
            self.vertices[ix].neighbours |= dir.bit();
            self.vertices[n_ix].neighbours |= dir.opposite().bit();
            self.components.union(ix, n_ix);
        } else {
            self.vertices[ix].neighbours &= !dir.bit();
            self.vertices[n_ix].neighbours &= !dir.opposite().bit();
        }
    }

    /// Turns the cell at `(row, col)` into an obstacle, removing every edge it has. Marks the
    /// components as dirty since the cell may have been the only link between two regions.
    pub fn add_obstacle(&mut self, row: i32, col: i32) -> Result<(), GraphError> {
        let c = Coordinate::new(row, col);
        let ix = self.index_of(&c)?;
        if self.vertices[ix].role().is_some() {
            return Err(GraphError::ProtectedVertex(c));
        }
        for dir in Direction::ALL {
            self.set_edge(ix, c, dir, false);
        }
        self.vertices[ix].is_obstacle = true;
        self.components_dirty = true;
        debug!("Added obstacle at {}", c);
        Ok(())
    }

    /// Clears an obstacle at `(row, col)`. Edges are only restored towards neighbours that are
    /// not obstacles themselves, so clearing a cluster of obstacles reconnects it one cell at a
    /// time. Calling this on a cell that is not an obstacle does nothing.
    pub fn remove_obstacle(&mut self, row: i32, col: i32) -> Result<(), GraphError> {
        let c = Coordinate::new(row, col);
        let ix = self.index_of(&c)?;
        if !self.vertices[ix].is_obstacle {
            return Ok(());
        }
        for dir in Direction::ALL {
            if let Some(Ok(n_ix)) = c.step(dir).map(|n| self.index_of(&n)) {
                if !self.vertices[n_ix].is_obstacle {
                    self.set_edge(ix, c, dir, true);
                }
            }
        }
        self.vertices[ix].is_obstacle = false;
        debug!("Removed obstacle at {}", c);
        Ok(())
    }

    fn check_role_target(&self, c: &Coordinate, other: Role) -> Result<usize, GraphError> {
        let ix = self.index_of(c)?;
        let vertex = &self.vertices[ix];
        if vertex.is_obstacle {
            return Err(GraphError::ObstaclePresent(*c));
        }
        if vertex.role() == Some(other) {
            return Err(GraphError::RoleConflict(*c));
        }
        Ok(ix)
    }

    /// Makes `(row, col)` the start vertex, demoting the previous start if there was one.
    pub fn set_start(&mut self, row: i32, col: i32) -> Result<(), GraphError> {
        let c = Coordinate::new(row, col);
        let ix = self.check_role_target(&c, Role::Finish)?;
        if let Some(old) = self.start.take() {
            let old_ix = self.index_of(&old)?;
            self.vertices[old_ix].is_start = false;
        }
        self.vertices[ix].is_start = true;
        self.start = Some(c);
        trace!("Start set to {}", c);
        Ok(())
    }

    /// Makes `(row, col)` the finish vertex, demoting the previous finish if there was one.
    pub fn set_finish(&mut self, row: i32, col: i32) -> Result<(), GraphError> {
        let c = Coordinate::new(row, col);
        let ix = self.check_role_target(&c, Role::Start)?;
        if let Some(old) = self.finish.take() {
            let old_ix = self.index_of(&old)?;
            self.vertices[old_ix].is_finish = false;
        }
        self.vertices[ix].is_finish = true;
        self.finish = Some(c);
        trace!("Finish set to {}", c);
        Ok(())
    }

    /// Computes the shortest path between start and finish with a default [PathFinder].
    pub fn shortest_path(&self) -> Result<PathResult, GraphError> {
        PathFinder::new().shortest_path(self)
    }

    /// Retrieves the component id a given [Coordinate] belongs to.
    pub fn get_component(&self, c: &Coordinate) -> Result<usize, GraphError> {
        Ok(self.components.find(self.index_of(c)?))
    }

    /// Checks if `a` and `b` are on different components. Components only ever merge between
    /// regenerations, so this holds even while they are dirty.
    pub fn unreachable(&self, a: &Coordinate, b: &Coordinate) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Ok(a_ix), Ok(b_ix)) => !self.components.equiv(a_ix, b_ix),
            _ => true,
        }
    }

    /// Checks if `a` and `b` are on the same component. Only exact after [update](Self::update).
    pub fn reachable(&self, a: &Coordinate, b: &Coordinate) -> bool {
        !self.unreachable(a, b)
    }

    /// Whether obstacles were added since the components were last generated, in which case
    /// [reachable](Self::reachable) may report cells as connected that no longer are.
    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up every pair of vertices sharing an edge.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        self.components = UnionFind::new(self.vertices.len());
        self.components_dirty = false;
        for ix in 0..self.vertices.len() {
            let vertex = self.vertices[ix];
            // Down and right suffice, every edge is seen from its upper or left endpoint.
            if vertex.has_neighbour(Direction::Down) {
                self.components.union(ix, ix + self.width);
            }
            if vertex.has_neighbour(Direction::Right) {
                self.components.union(ix, ix + 1);
            }
        }
    }
}
