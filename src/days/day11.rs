use std::str::FromStr;

use crate::error::{PuzzleError, Result};

pub fn solve(part: u8, input: &str) -> Result<String> {
    let path = input.trim().split(',').map(str::parse).collect::<Result<Vec<Hex>>>()?;
    let (end, furthest) = walk(&path);
    Ok(if part == 1 {end} else {furthest}.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hex {N, Ne, Se, S, Sw, Nw}

impl FromStr for Hex {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Hex> {
        Ok(match s.trim() {
            "n" => Hex::N, "ne" => Hex::Ne, "se" => Hex::Se,
            "s" => Hex::S, "sw" => Hex::Sw, "nw" => Hex::Nw,
            other => return Err(PuzzleError::Direction(other.to_owned()))
        })
    }
}

/// Cube coordinates: +x at 3 o'clock, +y at 11, +z at 7; x + y + z == 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cube {x: i64, y: i64, z: i64}

impl Cube {
    fn step(self, dir: Hex) -> Cube {
        let Cube {x, y, z} = self;
        match dir {
            Hex::N => Cube {x, y: y + 1, z: z - 1},
            Hex::Ne => Cube {x: x + 1, y, z: z - 1},
            Hex::Se => Cube {x: x + 1, y: y - 1, z},
            Hex::S => Cube {x, y: y - 1, z: z + 1},
            Hex::Sw => Cube {x: x - 1, y, z: z + 1},
            Hex::Nw => Cube {x: x - 1, y: y + 1, z},
        }
    }

    fn distance(self) -> u64 {
        self.x.unsigned_abs().max(self.y.unsigned_abs()).max(self.z.unsigned_abs())
    }
}

/// Steps from the origin at the end of the path, and the most it ever was.
pub fn walk(path: &[Hex]) -> (u64, u64) {
    let mut at = Cube::default();
    let mut furthest = 0;
    for &dir in path {
        at = at.step(dir);
        furthest = furthest.max(at.distance());
    }
    (at.distance(), furthest)
}
