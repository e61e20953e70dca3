use anyhow::{anyhow, ensure};
use itertools::Itertools;

use crate::command::Command;
use crate::grid::GridBounds;
use crate::orientation::Orientation;
use crate::position::Position;

/// largest coordinate accepted for grid bounds
pub const MAX_COORDINATE: i32 = 50;

/// longest instruction string accepted for a single robot
pub const MAX_INSTRUCTIONS: usize = 100;

/// Starting state and instructions for one robot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotInput {
    pub position: Position,
    pub orientation: Orientation,
    pub commands: Vec<Command>,
}

/// Decoded simulation input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationInput {
    pub bounds: GridBounds,
    pub robots: Vec<RobotInput>,
}

/// Parses the raw input text into grid bounds and robot definitions.
///
/// The first line holds the grid bounds, the rest are robot definitions
/// as line pairs. A trailing position line with no instruction line is
/// dropped.
pub fn parse_input(input: &str) -> anyhow::Result<SimulationInput> {
    let mut lines = input.trim().lines().map(str::trim);

    let bounds_line = lines
        .next()
        .ok_or_else(|| anyhow!("Input must contain at least the grid bounds"))?;
    let bounds = parse_grid_bounds(bounds_line)?;

    let robots = lines
        .tuples()
        .map(|(position_line, instruction_line)| parse_robot(position_line, instruction_line))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(SimulationInput { bounds, robots })
}

fn parse_grid_bounds(line: &str) -> anyhow::Result<GridBounds> {
    let parts = line.split_whitespace().collect_vec();
    ensure!(parts.len() == 2, "Invalid grid bounds format: {}", line);

    let max_x = parts[0]
        .parse::<i32>()
        .map_err(|_| anyhow!("Invalid grid bounds: {}", line))?;
    let max_y = parts[1]
        .parse::<i32>()
        .map_err(|_| anyhow!("Invalid grid bounds: {}", line))?;

    ensure!(max_x >= 0 && max_y >= 0, "Invalid grid bounds: {}", line);
    ensure!(
        max_x <= MAX_COORDINATE && max_y <= MAX_COORDINATE,
        "Grid coordinates cannot exceed {}",
        MAX_COORDINATE
    );

    Ok(GridBounds { max_x, max_y })
}

fn parse_robot(position_line: &str, instruction_line: &str) -> anyhow::Result<RobotInput> {
    let parts = position_line.split_whitespace().collect_vec();
    ensure!(
        parts.len() == 3,
        "Invalid robot position format: {}",
        position_line
    );

    let x = parts[0]
        .parse::<i32>()
        .map_err(|_| anyhow!("Invalid coordinates: {}", position_line))?;
    let y = parts[1]
        .parse::<i32>()
        .map_err(|_| anyhow!("Invalid coordinates: {}", position_line))?;
    let orientation = Orientation::try_parse(parts[2])?;
    let commands = parse_instructions(instruction_line)?;

    Ok(RobotInput {
        position: Position::new(x, y),
        orientation,
        commands,
    })
}

fn parse_instructions(line: &str) -> anyhow::Result<Vec<Command>> {
    ensure!(
        line.len() <= MAX_INSTRUCTIONS,
        "Instruction string cannot exceed {} characters",
        MAX_INSTRUCTIONS
    );
    line.chars().map(Command::try_parse).collect()
}
