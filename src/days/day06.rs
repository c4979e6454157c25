use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{PuzzleError, Result};

pub fn solve(part: u8, input: &str) -> Result<String> {
    let banks = input.split_whitespace().map(|n| n.parse::<u32>().map_err(PuzzleError::from))
        .collect::<Result<Vec<_>>>()?;
    if banks.is_empty() {return Err(PuzzleError::EmptyInput)};
    let (steps, loop_len) = cycles(banks);
    Ok(if part == 1 {steps} else {loop_len}.to_string())
}

/// Empties the fullest bank (lowest index wins ties) and deals its blocks out
/// one at a time to the following banks.
pub fn balance(banks: &mut [u32]) {
    let Some(&most) = banks.iter().max() else {return};
    let Some(from) = banks.iter().position(|&blocks| blocks == most) else {return};
    banks[from] = 0;
    let len = banks.len();
    for i in 1 ..= most as usize {
        banks[(from + i) % len] += 1;
    }
}

/// Balances until a configuration repeats. Returns the number of balancing
/// steps taken and the length of the loop that was entered.
pub fn cycles(mut banks: Vec<u32>) -> (usize, usize) {
    let mut seen = FxHashMap::default();
    for step in 0 .. {
        if let Some(first) = seen.insert(banks.clone(), step) {
            debug!(step, first, "memory configuration repeated");
            return (step, step - first);
        }
        balance(&mut banks);
    }
    unreachable!()
}
