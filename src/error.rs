use core::fmt;

use crate::coordinate::Coordinate;

/// Every way an operation on a [GridGraph](crate::GridGraph) or a path query can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Construction with a height or width that is not positive.
    InvalidDimensions { height: i32, width: i32 },
    /// The coordinate lies outside the grid.
    InvalidVertex(Coordinate),
    /// Obstacles cannot be placed on the start or finish.
    ProtectedVertex(Coordinate),
    /// A start or finish cannot be placed on an obstacle.
    ObstaclePresent(Coordinate),
    /// The cell already holds the other role.
    RoleConflict(Coordinate),
    NoStartAssigned,
    NoFinishAssigned,
    NoPathExists { start: Coordinate, finish: Coordinate },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { height, width } => {
                write!(f, "grid dimensions must be positive (height={height}, width={width})")
            }
            Self::InvalidVertex(c) => write!(f, "vertex {c} lies outside the grid"),
            Self::ProtectedVertex(c) => {
                write!(f, "vertex {c} is the start or finish and cannot become an obstacle")
            }
            Self::ObstaclePresent(c) => write!(f, "vertex {c} is an obstacle"),
            Self::RoleConflict(c) => {
                write!(f, "vertex {c} already holds the other start/finish role")
            }
            Self::NoStartAssigned => f.write_str("no start vertex assigned"),
            Self::NoFinishAssigned => f.write_str("no finish vertex assigned"),
            Self::NoPathExists { start, finish } => {
                write!(f, "no path exists between {start} and {finish}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
