use itertools::{Itertools, MinMaxResult};

use crate::error::{PuzzleError, Result};
use crate::input::lines;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let rows = parse(input)?;
    let checksum = if part == 1 {
        rows.iter().map(|row| spread(row)).sum::<u32>()
    } else {
        rows.iter().map(|row| quotient(row)).sum::<Result<u32>>()?
    };
    Ok(checksum.to_string())
}

fn parse(input: &str) -> Result<Vec<Vec<u32>>> {
    lines(input).map(|line|
        line.split_whitespace().map(|n| n.parse::<u32>().map_err(PuzzleError::from)).collect()
    ).collect()
}

fn spread(row: &[u32]) -> u32 {
    match row.iter().minmax() {
        MinMaxResult::MinMax(min, max) => max - min,
        _ => 0
    }
}

/// The result of the only division in the row that leaves no remainder.
fn quotient(row: &[u32]) -> Result<u32> {
    row.iter().tuple_combinations().find_map(|(&a, &b)| {
        let (big, small) = if a >= b {(a, b)} else {(b, a)};
        (small != 0 && big % small == 0).then(|| big / small)
    }).ok_or(PuzzleError::NoSolution("row has no evenly divisible pair"))
}
