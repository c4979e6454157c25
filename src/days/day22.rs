use rustc_hash::FxHashMap;

use crate::error::{PuzzleError, Result};
use crate::input::lines;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = parse(input)?;
    let infections = if part == 1 {
        Carrier::new(grid, false).run(10_000)
    } else {
        Carrier::new(grid, true).run(10_000_000)
    };
    Ok(infections.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {Clean, Weakened, Infected, Flagged}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {Up, Right, Down, Left}

impl Direction {
    fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    fn turn_left(self) -> Direction {self.turn_right().turn_right().turn_right()}
    fn reverse(self) -> Direction {self.turn_right().turn_right()}

    fn step(self, (row, column): (i64, i64)) -> (i64, i64) {
        match self {
            Direction::Up => (row - 1, column),
            Direction::Right => (row, column + 1),
            Direction::Down => (row + 1, column),
            Direction::Left => (row, column - 1),
        }
    }
}

/// Infected nodes of the map, with (0, 0) at its middle and rows growing
/// downwards. Nodes that are not listed are clean.
pub type Grid = FxHashMap<(i64, i64), Node>;

pub fn parse(input: &str) -> Result<Grid> {
    let rows = lines(input).collect::<Vec<_>>();
    let offset = (rows.len() / 2) as i64;
    let mut grid = Grid::default();
    for (r, row) in rows.iter().enumerate() {
        for (c, node) in row.char_indices() {
            match node {
                '#' => {grid.insert((r as i64 - offset, c as i64 - offset), Node::Infected);},
                '.' => {}
                other => return Err(PuzzleError::InvalidChar(other, c)),
            }
        }
    }
    Ok(grid)
}

pub struct Carrier {
    grid: Grid,
    at: (i64, i64),
    facing: Direction,
    evolved: bool,
}

impl Carrier {
    /// Starts in the middle, facing up. An evolved virus weakens and flags
    /// nodes on the way to infecting and cleaning them.
    pub fn new(grid: Grid, evolved: bool) -> Carrier {
        Carrier {grid, at: (0, 0), facing: Direction::Up, evolved}
    }

    /// One burst. Returns whether it infected the node it was on.
    pub fn burst(&mut self) -> bool {
        let node = self.grid.get(&self.at).copied().unwrap_or(Node::Clean);
        self.facing = match node {
            Node::Clean => self.facing.turn_left(),
            Node::Weakened => self.facing,
            Node::Infected => self.facing.turn_right(),
            Node::Flagged => self.facing.reverse(),
        };
        let next = match (node, self.evolved) {
            (Node::Clean, true) => Node::Weakened,
            (Node::Clean, false) | (Node::Weakened, _) => Node::Infected,
            (Node::Infected, true) => Node::Flagged,
            (Node::Infected, false) | (Node::Flagged, _) => Node::Clean,
        };
        if next == Node::Clean {self.grid.remove(&self.at)} else {self.grid.insert(self.at, next)};
        self.at = self.facing.step(self.at);
        next == Node::Infected
    }

    /// How many of `bursts` bursts caused an infection.
    pub fn run(&mut self, bursts: usize) -> usize {
        (0 .. bursts).filter(|_| self.burst()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "..#\n#..\n...";

    #[test]
    fn parses_centred() {
        let grid = parse(EXAMPLE).unwrap();
        let mut infected = grid.keys().copied().collect::<Vec<_>>();
        infected.sort();
        assert_eq!(infected, vec![(-1, 1), (0, -1)]);
        assert!(parse("..\n.x").is_err());
    }

    #[test]
    fn first_burst() {
        let mut carrier = Carrier::new(parse(EXAMPLE).unwrap(), false);
        assert!(carrier.burst());
        assert_eq!(carrier.grid.len(), 3);
        assert_eq!(carrier.grid.get(&(0, 0)), Some(&Node::Infected));
        assert_eq!((carrier.at, carrier.facing), ((0, -1), Direction::Left));
        // lands on an infected node, turns right and cleans it
        assert!(!carrier.burst());
        assert_eq!((carrier.at, carrier.facing), ((-1, -1), Direction::Up));
        assert_eq!(carrier.grid.get(&(0, -1)), None);
    }

    #[test]
    fn example() {
        assert_eq!(Carrier::new(parse(EXAMPLE).unwrap(), false).run(7), 5);
        assert_eq!(Carrier::new(parse(EXAMPLE).unwrap(), false).run(70), 41);
        assert_eq!(solve(1, EXAMPLE).unwrap(), "5587");
    }

    #[test]
    fn evolved_example() {
        assert_eq!(Carrier::new(parse(EXAMPLE).unwrap(), true).run(100), 26);
    }
}
