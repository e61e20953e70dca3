use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mars_robots::prelude::{format_states, parse_input, simulate};

#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    /// input file with the grid bounds and robot instructions (stdin when omitted)
    input: Option<PathBuf>,

    /// emit the final robot states as json instead of report lines
    #[clap(long)]
    json: bool,
}

fn read_input(args: &Args) -> anyhow::Result<String> {
    match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.to_string_lossy())),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn handler(args: &Args) -> anyhow::Result<String> {
    let input = read_input(args)?;
    let parsed = parse_input(&input)?;
    let states = simulate(&parsed);

    if args.json {
        Ok(serde_json::to_string_pretty(&states)?)
    } else {
        Ok(format_states(&states))
    }
}

fn main() {
    let args = Args::parse();
    match handler(&args) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_args(json: bool) -> Args {
        Args {
            input: Some(PathBuf::from("data/sample.txt")),
            json,
        }
    }

    #[test]
    fn sample_file_report() {
        let output = handler(&sample_args(false)).unwrap();
        assert_eq!(output, "1 1 E\n3 3 N LOST\n2 3 S");
    }

    #[test]
    fn sample_file_json_report() {
        use mars_robots::prelude::RobotState;

        let output = handler(&sample_args(true)).unwrap();
        let states: Vec<RobotState> = serde_json::from_str(&output).unwrap();

        assert_eq!(states.len(), 3);
        assert!(states[1].is_lost);
        assert_eq!(states[2].position.x, 2);
        assert_eq!(states[2].position.y, 3);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let args = Args {
            input: Some(PathBuf::from("data/no_such_file.txt")),
            json: false,
        };
        let err = handler(&args).unwrap_err();
        assert!(err.to_string().contains("no_such_file.txt"));
    }
}
