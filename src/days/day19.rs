use tracing::debug;

use crate::error::{PuzzleError, Result};

pub fn solve(part: u8, input: &str) -> Result<String> {
    let maze = Maze::parse(input);
    let walk = maze.walk()?;
    debug!(letters = %walk.letters, steps = walk.steps, "walked the maze");
    Ok(if part == 1 {walk.letters} else {walk.steps.to_string()})
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {Up, Down, Left, Right}

impl Direction {
    fn turns(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }

    /// The line a path heading this way is drawn with.
    fn line(self) -> u8 {
        match self {
            Direction::Up | Direction::Down => b'|',
            Direction::Left | Direction::Right => b'-',
        }
    }

    fn step(self, (row, column): (usize, usize)) -> Option<(usize, usize)> {
        Some(match self {
            Direction::Up => (row.checked_sub(1)?, column),
            Direction::Down => (row + 1, column),
            Direction::Left => (row, column.checked_sub(1)?),
            Direction::Right => (row, column + 1),
        })
    }
}

pub struct Maze<'a> {
    rows: Vec<&'a [u8]>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Walk {
    pub letters: String,
    pub steps: usize,
}

impl<'a> Maze<'a> {
    pub fn parse(input: &'a str) -> Maze<'a> {
        Maze {rows: input.lines().map(|line| line.trim_end_matches('\r').as_bytes()).collect()}
    }

    /// Short rows are padded with spaces.
    fn at(&self, (row, column): (usize, usize)) -> u8 {
        self.rows.get(row).and_then(|r| r.get(column)).copied().unwrap_or(b' ')
    }

    /// The path enters from the top row, heading down.
    pub fn start(&self) -> Option<(usize, usize)> {
        let column = self.rows.first()?.iter().position(|&c| c == b'|')?;
        Some((0, column))
    }

    pub fn walk(&self) -> Result<Walk> {
        let mut at = self.start().ok_or(PuzzleError::NoSolution("no path enters the top of the maze"))?;
        let mut heading = Direction::Down;
        let mut walk = Walk {letters: String::new(), steps: 0};
        loop {
            let cell = self.at(at);
            match cell {
                b' ' => return Ok(walk),
                b'+' => {
                    heading = heading.turns().into_iter().find(|turn| {
                        turn.step(at).map(|next| self.at(next)).is_some_and(|c| c == turn.line() || c.is_ascii_uppercase())
                    }).ok_or(PuzzleError::DeadEnd(at.0, at.1))?;
                },
                c if c.is_ascii_uppercase() => walk.letters.push(c as char),
                _ => {}
            }
            walk.steps += 1;
            match heading.step(at) {
                Some(next) => at = next,
                None => return Ok(walk),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "     |
     |  +--+
     A  |  C
 F---|----E|--+
     |  |  |  D
     +B-+  +--+ ";

    #[test]
    fn finds_start() {
        assert_eq!(Maze::parse(EXAMPLE).start(), Some((0, 5)));
        assert_eq!(Maze::parse("  -\n  |").start(), None);
    }

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "ABCDEF");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "38");
    }

    #[test]
    fn ragged_rows() {
        let trimmed = EXAMPLE.lines().map(str::trim_end).collect::<Vec<_>>().join("\r\n");
        assert_eq!(Maze::parse(&trimmed).walk().unwrap(), Walk {letters: "ABCDEF".to_owned(), steps: 38});
    }

    #[test]
    fn walks_off_the_edge() {
        assert_eq!(solve(1, " |\n A\n |").unwrap(), "A");
        assert_eq!(solve(2, " |\n A\n |").unwrap(), "3");
    }

    #[test]
    fn dead_end() {
        assert!(matches!(solve(1, " |\n +\n  "), Err(PuzzleError::DeadEnd(1, 1))));
        assert!(matches!(solve(1, "\n |"), Err(PuzzleError::NoSolution(_))));
    }
}
