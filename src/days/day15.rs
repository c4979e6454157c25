use regex::Regex;

use crate::error::{PuzzleError, Result};

pub const A_FACTOR: u64 = 16807;
pub const B_FACTOR: u64 = 48271;
const MODULUS: u64 = 2147483647;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (a, b) = parse(input)?;
    let count = if part == 1 {
        judge(Generator::new(a, A_FACTOR, 1), Generator::new(b, B_FACTOR, 1), 40_000_000)
    } else {
        judge(Generator::new(a, A_FACTOR, 4), Generator::new(b, B_FACTOR, 8), 5_000_000)
    };
    Ok(count.to_string())
}

/// Reads `Generator A starts with 65` / `Generator B starts with 8921`.
fn parse(input: &str) -> Result<(u64, u64)> {
    let re = Regex::new(r"Generator ([AB]) starts with (\d+)").unwrap();
    let (mut a, mut b) = (None, None);
    for caps in re.captures_iter(input) {
        let start: u64 = caps[2].parse()?;
        if &caps[1] == "A" {a = Some(start)} else {b = Some(start)};
    }
    a.zip(b).ok_or_else(|| PuzzleError::InvalidLine(input.trim().to_owned()))
}

/// Yields successive values, skipping those that are not multiples of `multiple`.
#[derive(Clone, Debug)]
pub struct Generator {
    value: u64,
    factor: u64,
    multiple: u64,
}

impl Generator {
    /// The start is reduced modulo 2147483647 so every product fits in a `u64`.
    pub fn new(start: u64, factor: u64, multiple: u64) -> Generator {
        Generator {value: start % MODULUS, factor, multiple}
    }
}

impl Iterator for Generator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            self.value = self.value * self.factor % MODULUS;
            if self.value % self.multiple == 0 {return Some(self.value)};
        }
    }
}

/// How many of the first `pairs` pairs agree in their lowest 16 bits.
pub fn judge(a: Generator, b: Generator, pairs: usize) -> usize {
    a.zip(b).take(pairs).filter(|(x, y)| x & 0xFFFF == y & 0xFFFF).count()
}
