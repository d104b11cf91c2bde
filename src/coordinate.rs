use core::fmt;
use grid_util::point::Point;

/// A cell position on the maze grid. Both `row` and `col` are 1-based, so the top left cell of
/// any grid is `(1,1)`. Signed components allow out of range input to be reported as an error
/// instead of being unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Coordinate {
        Coordinate { row, col }
    }

    /// The grid-adjacent coordinate in `direction`, or [None] if it is not representable. May
    /// lie outside the grid.
    pub fn step(&self, direction: Direction) -> Option<Coordinate> {
        let (d_row, d_col) = direction.delta();
        Some(Coordinate::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }

    /// Number of orthogonal steps between two coordinates, a lower bound on any path length.
    pub fn manhattan_distance(&self, other: &Coordinate) -> u64 {
        self.row.abs_diff(other.row) as u64 + self.col.abs_diff(other.col) as u64
    }

    /// Checks whether the two coordinates differ by exactly one along a single axis.
    pub fn is_grid_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Coordinate::new(row, col)
    }
}

/// Columns map to `x` and rows to `y`, both shifted to be 0-based.
impl From<Coordinate> for Point {
    fn from(c: Coordinate) -> Self {
        Point::new(c.col.saturating_sub(1), c.row.saturating_sub(1))
    }
}

impl From<Point> for Coordinate {
    fn from(p: Point) -> Self {
        Coordinate::new(p.y.saturating_add(1), p.x.saturating_add(1))
    }
}

/// The four orthogonal moves on the grid. The discriminant is the bit a direction occupies in a
/// vertex neighbour mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Fixed order in which neighbours are visited during search.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn num(&self) -> u8 {
        *self as u8
    }

    pub fn bit(&self) -> u8 {
        1 << self.num()
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(row, col)` offset of a single step.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
