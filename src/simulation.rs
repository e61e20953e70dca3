use itertools::Itertools;

use crate::grid::Grid;
use crate::parser::{parse_input, SimulationInput};
use crate::robot::{Robot, RobotState};

/// Runs every robot in input order against one shared grid.
///
/// Robots are processed strictly sequentially so that a scent left by
/// an earlier robot is visible to every later one.
pub fn simulate(input: &SimulationInput) -> Vec<RobotState> {
    let mut grid = Grid::new(input.bounds);

    input
        .robots
        .iter()
        .map(|robot_input| {
            let mut robot = Robot::new(robot_input.position, robot_input.orientation, &mut grid);
            robot.execute_commands(&robot_input.commands);
            robot.state()
        })
        .collect()
}

/// Renders final states as newline-joined report lines in input order
pub fn format_states(states: &[RobotState]) -> String {
    states.iter().map(|state| state.to_string()).join("\n")
}

/// Parses the input text, runs the simulation, and formats the report
pub fn run(input: &str) -> anyhow::Result<String> {
    let parsed = parse_input(input)?;
    let states = simulate(&parsed);
    Ok(format_states(&states))
}
