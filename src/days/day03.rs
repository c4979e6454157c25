use rustc_hash::FxHashMap;

use crate::error::{PuzzleError, Result};

pub fn solve(part: u8, input: &str) -> Result<String> {
    let square: u64 = input.trim().parse()?;
    if part == 1 {
        let (x, y) = location(square)?;
        Ok((x.abs() + y.abs()).to_string())
    } else {
        Ok(first_larger_sum(square).to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {Right, Up, Left, Down}

impl Direction {
    fn turn_left(self) -> Direction {
        match self {
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }

    fn step(self, (x, y): (i64, i64)) -> (i64, i64) {
        match self {
            Direction::Right => (x + 1, y),
            Direction::Up => (x, y + 1),
            Direction::Left => (x - 1, y),
            Direction::Down => (x, y - 1),
        }
    }
}

/// Coordinates of squares 1, 2, 3, ... spiralling anticlockwise out of the
/// origin, starting to the right. Positive y is up.
struct Spiral {point: (i64, i64), direction: Direction, side: u64, walked: u64, turns: u64}

impl Spiral {
    fn new() -> Spiral {
        Spiral {point: (0, 0), direction: Direction::Right, side: 1, walked: 0, turns: 0}
    }
}

impl Iterator for Spiral {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        let point = self.point;
        self.point = self.direction.step(self.point);
        self.walked += 1;
        if self.walked == self.side {
            self.walked = 0;
            self.direction = self.direction.turn_left();
            self.turns += 1;
            if self.turns % 2 == 0 {self.side += 1};
        }
        Some(point)
    }
}

pub fn location(square: u64) -> Result<(i64, i64)> {
    if square == 0 {
        return Err(PuzzleError::NoSolution("squares are numbered from 1"));
    }
    Ok(Spiral::new().nth(square as usize - 1).unwrap_or_default())
}

/// Fills the spiral with the sum of each square's already-filled neighbours
/// and returns the first value written that exceeds `limit`.
pub fn first_larger_sum(limit: u64) -> u64 {
    if limit < 1 {return 1};
    let mut values = FxHashMap::default();
    values.insert((0, 0), 1u64);
    for (x, y) in Spiral::new().skip(1) {
        let sum = (-1 ..= 1).flat_map(|dx| (-1 ..= 1).map(move |dy| (x + dx, y + dy)))
            .filter_map(|neighbour| values.get(&neighbour))
            .sum::<u64>();
        if sum > limit {return sum};
        values.insert((x, y), sum);
    }
    unreachable!("the spiral is endless")
}
