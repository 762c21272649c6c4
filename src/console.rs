use crate::config::*;
use crate::error::*;
use crate::path::PathWalk;
use crate::queens;
use crate::search::{SearchContext, MAX_DIMENSION};
use grid_2d::{Coord, Size};
use std::collections::VecDeque;
use std::convert::TryFrom;
use std::error;
use std::fmt;
use std::io::{self, BufRead, Write};

#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    UnexpectedEof { expected: &'static str },
    Malformed { expected: &'static str, token: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::Io(err) => write!(f, "failed to read input: {}", err),
            InputError::UnexpectedEof { expected } => {
                write!(f, "input ended while reading {}", expected)
            }
            InputError::Malformed { expected, token } => {
                write!(f, "expected an integer for {}, got {:?}", expected, token)
            }
        }
    }
}

impl error::Error for InputError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Writes prompts and reads whitespace separated integers, which may be
/// spread over any number of lines.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn prompt(&mut self, message: &str) -> io::Result<()> {
        write!(self.output, "{}", message)?;
        self.output.flush()
    }

    pub fn read_i64(&mut self, expected: &'static str) -> Result<i64, InputError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof { expected });
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        let token = self
            .pending
            .pop_front()
            .ok_or(InputError::UnexpectedEof { expected })?;
        token
            .parse()
            .map_err(|_| InputError::Malformed { expected, token })
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Completed,
    InvalidInput,
}

impl SessionStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            SessionStatus::Completed => 0,
            SessionStatus::InvalidInput => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridSessionOptions {
    pub config: SearchConfig,
    pub show_path: bool,
}

fn to_coord(x: i64, y: i64) -> Option<Coord> {
    Some(Coord::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

fn to_dimension(value: i64) -> Option<u32> {
    u32::try_from(value)
        .ok()
        .filter(|&value| value > 0)
        .map(|value| value.min(MAX_DIMENSION))
}

/// Prompts for grid dimensions, start and goal, then runs a single search
/// and reports the outcome.
pub fn grid_session<R, W>(
    console: &mut Console<R, W>,
    options: GridSessionOptions,
) -> Result<SessionStatus, InputError>
where
    R: BufRead,
    W: Write,
{
    console.prompt("Enter the number of rows and columns in the grid: ")?;
    let rows = console.read_i64("rows")?;
    let cols = console.read_i64("columns")?;

    console.prompt("Enter the monkey's coordinates (x y): ")?;
    let monkey_x = console.read_i64("monkey x")?;
    let monkey_y = console.read_i64("monkey y")?;

    console.prompt("Enter the banana's coordinates (x y): ")?;
    let banana_x = console.read_i64("banana x")?;
    let banana_y = console.read_i64("banana y")?;

    let size = match (to_dimension(rows), to_dimension(cols)) {
        (Some(rows), Some(cols)) => Size::new(rows, cols),
        _ => {
            writeln!(console.output(), "invalid input: {}", Error::EmptyGrid)?;
            return Ok(SessionStatus::InvalidInput);
        }
    };

    let start = to_coord(monkey_x, monkey_y);
    let goal = to_coord(banana_x, banana_y);

    let mut ctx: SearchContext<u32> = SearchContext::new(size);
    let mut path = Vec::new();
    let result = match (start, goal) {
        (None, _) => Err(Error::StartOutsideGrid),
        (_, None) => Err(Error::GoalOutsideGrid),
        (Some(start), Some(goal)) => {
            ctx.astar_euclidean_distance_heuristic(start, goal, options.config, &mut path)
        }
    };

    match result {
        Ok(metadata) => {
            writeln!(console.output(), "reached goal with cost {}", metadata.cost)?;
            if let (true, Some(start)) = (options.show_path, start) {
                let out = console.output();
                write!(out, "path: ({}, {})", start.x, start.y)?;
                for (coord, _) in PathWalk::new(start, &path) {
                    write!(out, " -> ({}, {})", coord.x, coord.y)?;
                }
                writeln!(out)?;
            }
            Ok(SessionStatus::Completed)
        }
        Err(Error::NoPath) => {
            writeln!(console.output(), "no path found")?;
            Ok(SessionStatus::Completed)
        }
        Err(err) => {
            writeln!(console.output(), "invalid input: {}", err)?;
            Ok(SessionStatus::InvalidInput)
        }
    }
}

/// Largest board `queens_session` will attempt.
pub const MAX_QUEENS: usize = 20;

/// Prompts for N and prints the first placement found, if any.
pub fn queens_session<R, W>(console: &mut Console<R, W>) -> Result<SessionStatus, InputError>
where
    R: BufRead,
    W: Write,
{
    console.prompt("Enter the value of N: ")?;
    let n = console.read_i64("N")?;

    let n = match usize::try_from(n) {
        Ok(n) if n > 0 && n <= MAX_QUEENS => n,
        _ => {
            writeln!(
                console.output(),
                "invalid input: N must be between 1 and {}",
                MAX_QUEENS
            )?;
            return Ok(SessionStatus::InvalidInput);
        }
    };

    match queens::solve(n) {
        Some(placement) => {
            writeln!(console.output(), "Solution for N = {}:", n)?;
            write!(console.output(), "{}", placement)?;
        }
        None => {
            writeln!(console.output(), "No solution found for N = {}", n)?;
        }
    }

    Ok(SessionStatus::Completed)
}
