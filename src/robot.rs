use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::grid::Grid;
use crate::orientation::Orientation;
use crate::position::Position;

/// Snapshot of a robot after command execution
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotState {
    pub position: Position,
    pub orientation: Orientation,
    pub is_lost: bool,
}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position.x, self.position.y, self.orientation
        )?;
        if self.is_lost {
            write!(f, " LOST")?;
        }
        Ok(())
    }
}

/// Robot that executes commands against the shared grid
pub struct Robot<'g> {
    position: Position,
    orientation: Orientation,
    is_lost: bool,
    grid: &'g mut Grid,
}

impl<'g> Robot<'g> {
    pub fn new(position: Position, orientation: Orientation, grid: &'g mut Grid) -> Self {
        Self {
            position,
            orientation,
            is_lost: false,
            grid,
        }
    }

    /// Executes commands in order, stopping as soon as the robot is lost
    pub fn execute_commands(&mut self, commands: &[Command]) {
        for command in commands {
            if self.is_lost {
                break;
            }

            match command {
                Command::Left => self.orientation = self.orientation.turned_left(),
                Command::Right => self.orientation = self.orientation.turned_right(),
                Command::Forward => self.move_forward(),
            }
        }
    }

    // bounds check first, then the scent check on the pre-move position
    fn move_forward(&mut self) {
        let next = self.position.stepped(self.orientation);

        if self.grid.is_within_bounds(&next) {
            self.position = next;
            return;
        }

        if !self.grid.has_scent(&self.position) {
            self.grid.add_scent(self.position);
            self.is_lost = true;
        }
    }

    pub fn state(&self) -> RobotState {
        RobotState {
            position: self.position,
            orientation: self.orientation,
            is_lost: self.is_lost,
        }
    }
}
