//! Advent of Code 2017.
//!
//! Every day is a `solve(part, input)` function returning the answer as a
//! string; [`solver`] maps a day number to it. Days 10 and 14 share the
//! [`knothash`] module, and days 18 and 23 share an instruction operand.

pub mod days;
pub mod error;
pub mod input;
pub mod knothash;

pub use error::{PuzzleError, Result};

pub type Solver = fn(u8, &str) -> Result<String>;

pub fn solver(day: u8) -> Option<Solver> {
    use days::*;
    let solver: Solver = match day {
        1 => day01::solve,
        2 => day02::solve,
        3 => day03::solve,
        4 => day04::solve,
        6 => day06::solve,
        7 => day07::solve,
        8 => day08::solve,
        9 => day09::solve,
        10 => day10::solve,
        11 => day11::solve,
        12 => day12::solve,
        13 => day13::solve,
        14 => day14::solve,
        15 => day15::solve,
        16 => day16::solve,
        17 => day17::solve,
        18 => day18::solve,
        19 => day19::solve,
        20 => day20::solve,
        21 => day21::solve,
        22 => day22::solve,
        23 => day23::solve,
        24 => day24::solve,
        25 => day25::solve,
        _ => return None
    };
    Some(solver)
}

/// Looks up and runs the solver for `day`.
pub fn solve(day: u8, part: u8, input: &str) -> Result<String> {
    let solver = solver(day).ok_or(PuzzleError::UnknownDay(day))?;
    solver(part, input)
}
