use bitvec::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::input::lines;

const START: &str = ".#./..#/###";

pub fn solve(part: u8, input: &str) -> Result<String> {
    let rules = parse_rules(input)?;
    let iterations = if part == 1 {5} else {18};
    Ok(pixels_on(&rules, iterations)?.to_string())
}

/// A square of pixels, row by row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    size: usize,
    pixels: BitVec,
}

impl Square {
    fn blank(size: usize) -> Square {
        Square {size, pixels: bitvec![0; size * size]}
    }

    /// Reads the `../.#` notation: rows separated by slashes.
    pub fn parse(text: &str) -> Result<Square> {
        let rows = text.split('/').collect::<Vec<_>>();
        let size = rows.len();
        let mut square = Square::blank(size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {return Err(PuzzleError::InvalidLine(text.to_owned()))};
            for (c, pixel) in row.char_indices() {
                match pixel {
                    '#' => square.set(r, c, true),
                    '.' => {}
                    other => return Err(PuzzleError::InvalidChar(other, c)),
                }
            }
        }
        Ok(square)
    }

    pub fn get(&self, row: usize, column: usize) -> bool {self.pixels[row * self.size + column]}

    fn set(&mut self, row: usize, column: usize, on: bool) {
        self.pixels.set(row * self.size + column, on);
    }

    pub fn on(&self) -> usize {self.pixels.count_ones()}

    fn mapped(&self, from: impl Fn(usize, usize) -> (usize, usize)) -> Square {
        let mut square = Square::blank(self.size);
        for r in 0 .. self.size {
            for c in 0 .. self.size {
                let (fr, fc) = from(r, c);
                square.set(r, c, self.get(fr, fc));
            }
        }
        square
    }

    /// Quarter turn clockwise.
    pub fn rotate(&self) -> Square {
        self.mapped(|r, c| (self.size - c - 1, r))
    }

    pub fn flip(&self) -> Square {
        self.mapped(|r, c| (r, self.size - c - 1))
    }

    /// All eight rotations and reflections, possibly with repeats.
    pub fn orientations(&self) -> Vec<Square> {
        let mut all = Vec::with_capacity(8);
        for mut square in [self.clone(), self.flip()] {
            for _ in 0 .. 4 {
                let next = square.rotate();
                all.push(square);
                square = next;
            }
        }
        all
    }

    fn block(&self, row: usize, column: usize, size: usize) -> Square {
        let mut block = Square::blank(size);
        for r in 0 .. size {
            for c in 0 .. size {
                block.set(r, c, self.get(row + r, column + c));
            }
        }
        block
    }

    /// Splits into 2x2 blocks when the size is even, 3x3 otherwise, and
    /// replaces every block by its rule's output.
    pub fn enhance(&self, rules: &Rules) -> Result<Square> {
        let from = if self.size % 2 == 0 {2} else {3};
        if self.size % from != 0 {
            return Err(PuzzleError::NoSolution("the grid cannot be split into 2x2 or 3x3 blocks"));
        }
        let to = from + 1;
        let mut grown = Square::blank(self.size / from * to);
        for br in 0 .. self.size / from {
            for bc in 0 .. self.size / from {
                let replacement = rules.get(&self.block(br * from, bc * from, from))
                    .ok_or(PuzzleError::NoSolution("no rule matches a block"))?;
                for r in 0 .. to {
                    for c in 0 .. to {
                        grown.set(br * to + r, bc * to + c, replacement.get(r, c));
                    }
                }
            }
        }
        Ok(grown)
    }
}

/// Every orientation of every rule's input, mapped to that rule's output.
pub type Rules = FxHashMap<Square, Square>;

pub fn parse_rules(input: &str) -> Result<Rules> {
    let mut rules = Rules::default();
    for line in lines(input) {
        let (from, to) = line.split_once(" => ").ok_or_else(|| PuzzleError::InvalidLine(line.to_owned()))?;
        let (from, to) = (Square::parse(from)?, Square::parse(to)?);
        if !matches!((from.size, to.size), (2, 3) | (3, 4)) {
            return Err(PuzzleError::InvalidLine(line.to_owned()));
        }
        for orientation in from.orientations() {
            rules.insert(orientation, to.clone());
        }
    }
    Ok(rules)
}

pub fn pixels_on(rules: &Rules, iterations: usize) -> Result<usize> {
    let mut grid = Square::parse(START)?;
    for iteration in 0 .. iterations {
        grid = grid.enhance(rules)?;
        debug!(iteration, size = grid.size, "enhanced");
    }
    Ok(grid.on())
}
