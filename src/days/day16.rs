use arrayvec::ArrayVec;
use std::str::FromStr;
use tracing::debug;

use crate::error::{PuzzleError, Result};

pub const PROGRAMS: usize = 16;
const DANCES: usize = 1_000_000_000;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let moves = parse_moves(input)?;
    dance(PROGRAMS, &moves, if part == 1 {1} else {DANCES})
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Spin(usize),
    Exchange(usize, usize),
    Partner(u8, u8),
}

impl FromStr for Move {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Move> {
        let invalid = || PuzzleError::InvalidMove(s.to_owned());
        let kind = s.get(.. 1).ok_or_else(invalid)?;
        let args = &s[1 ..];
        Ok(match kind {
            "s" => Move::Spin(args.parse().map_err(|_| invalid())?),
            "x" => {
                let (a, b) = args.split_once('/').ok_or_else(invalid)?;
                Move::Exchange(a.parse().map_err(|_| invalid())?, b.parse().map_err(|_| invalid())?)
            },
            "p" => match args.as_bytes() {
                &[a, b'/', b] => Move::Partner(a, b),
                _ => return Err(invalid())
            },
            _ => return Err(invalid())
        })
    }
}

impl Move {
    fn fits(self, programs: usize) -> bool {
        let named = |p: u8| p >= b'a' && ((p - b'a') as usize) < programs;
        match self {
            Move::Spin(_) => true,
            Move::Exchange(a, b) => a < programs && b < programs,
            Move::Partner(a, b) => named(a) && named(b),
        }
    }
}

pub fn parse_moves(input: &str) -> Result<Vec<Move>> {
    input.trim().split(',').map(|s| s.trim().parse()).collect()
}

type Line = ArrayVec<u8, PROGRAMS>;

fn perform(line: &mut Line, moves: &[Move]) {
    for &step in moves {
        match step {
            Move::Spin(n) => {
                let len = line.len();
                line.rotate_right(n % len);
            },
            Move::Exchange(a, b) => line.swap(a, b),
            Move::Partner(a, b) => {
                if let (Some(i), Some(j)) = (line.iter().position(|&p| p == a), line.iter().position(|&p| p == b)) {
                    line.swap(i, j);
                }
            },
        }
    }
}

/// Order of `programs` programs, named `a`, `b`, ..., after `rounds` dances.
/// The line returns to an earlier order after a few dances, so only the
/// remainder of `rounds` past that loop is danced out.
pub fn dance(programs: usize, moves: &[Move], rounds: usize) -> Result<String> {
    if programs == 0 || programs > PROGRAMS {
        return Err(PuzzleError::NoSolution("a dance needs between 1 and 16 programs"));
    }
    if let Some(bad) = moves.iter().find(|step| !step.fits(programs)) {
        return Err(PuzzleError::InvalidMove(format!("{:?}", bad)));
    }

    let mut line: Line = (b'a' ..).take(programs).collect();
    let mut seen = vec![line.clone()];
    for round in 1 ..= rounds {
        perform(&mut line, moves);
        if let Some(start) = seen.iter().position(|earlier| *earlier == line) {
            let period = round - start;
            debug!(period, start, "dance loops");
            line = seen[start + (rounds - start) % period].clone();
            break;
        }
        seen.push(line.clone());
    }
    Ok(String::from_utf8_lossy(&line).into_owned())
}
