use anyhow::bail;

/// A single robot instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Forward,
}

impl Command {
    pub fn try_parse(c: char) -> anyhow::Result<Self> {
        match c {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'F' => Ok(Command::Forward),
            _ => bail!("Invalid command: {}", c),
        }
    }
}
