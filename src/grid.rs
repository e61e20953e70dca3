use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Inclusive upper corner of the valid coordinate rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl GridBounds {
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self { max_x, max_y }
    }
}

/// Grid struct that holds the bounds and the scents left by lost robots
#[derive(Debug)]
pub struct Grid {
    bounds: GridBounds,
    scents: HashSet<Position>,
}

impl Grid {
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            scents: HashSet::new(),
        }
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    pub fn is_within_bounds(&self, position: &Position) -> bool {
        position.x >= 0
            && position.x <= self.bounds.max_x
            && position.y >= 0
            && position.y <= self.bounds.max_y
    }

    pub fn has_scent(&self, position: &Position) -> bool {
        self.scents.contains(position)
    }

    pub fn add_scent(&mut self, position: Position) {
        self.scents.insert(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_inside_the_rectangle_are_within_bounds() {
        let grid = Grid::new(GridBounds::new(5, 3));
        assert!(grid.is_within_bounds(&Position::new(0, 0)));
        assert!(grid.is_within_bounds(&Position::new(2, 2)));
        assert!(grid.is_within_bounds(&Position::new(5, 3)));
    }

    #[test]
    fn corners_are_within_bounds() {
        let grid = Grid::new(GridBounds::new(5, 3));
        assert!(grid.is_within_bounds(&Position::new(0, 0)));
        assert!(grid.is_within_bounds(&Position::new(5, 0)));
        assert!(grid.is_within_bounds(&Position::new(0, 3)));
        assert!(grid.is_within_bounds(&Position::new(5, 3)));
    }

    #[test]
    fn positions_outside_the_rectangle_are_out_of_bounds() {
        let grid = Grid::new(GridBounds::new(5, 3));
        assert!(!grid.is_within_bounds(&Position::new(-1, 0)));
        assert!(!grid.is_within_bounds(&Position::new(0, -1)));
        assert!(!grid.is_within_bounds(&Position::new(6, 3)));
        assert!(!grid.is_within_bounds(&Position::new(5, 4)));
        assert!(!grid.is_within_bounds(&Position::new(10, 10)));
    }

    #[test]
    fn scents_are_tracked_per_exact_position() {
        let mut grid = Grid::new(GridBounds::new(5, 3));
        assert!(!grid.has_scent(&Position::new(1, 1)));

        grid.add_scent(Position::new(1, 1));
        assert!(grid.has_scent(&Position::new(1, 1)));
        assert!(!grid.has_scent(&Position::new(1, 2)));
        assert!(!grid.has_scent(&Position::new(2, 1)));
    }

    #[test]
    fn adding_a_scent_twice_is_a_no_op() {
        let mut grid = Grid::new(GridBounds::new(5, 3));
        grid.add_scent(Position::new(3, 3));
        grid.add_scent(Position::new(3, 3));
        grid.add_scent(Position::new(3, 3));
        assert!(grid.has_scent(&Position::new(3, 3)));
    }

    #[test]
    fn zero_sized_grid_only_contains_the_origin() {
        let grid = Grid::new(GridBounds::new(0, 0));
        assert!(grid.is_within_bounds(&Position::new(0, 0)));
        assert!(!grid.is_within_bounds(&Position::new(1, 0)));
        assert!(!grid.is_within_bounds(&Position::new(0, 1)));
    }
}
