use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;

/// Position struct that holds a coordinate pair on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// the position one unit ahead when facing the given orientation
    pub fn stepped(&self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::North => Self::new(self.x, self.y + 1),
            Orientation::South => Self::new(self.x, self.y - 1),
            Orientation::East => Self::new(self.x + 1, self.y),
            Orientation::West => Self::new(self.x - 1, self.y),
        }
    }
}
