use crate::error::{PuzzleError, Result};

pub fn solve(part: u8, input: &str) -> Result<String> {
    let digits = parse_digits(input.trim())?;
    let offset = if part == 1 {1} else {digits.len() / 2};
    Ok(captcha(&digits, offset).to_string())
}

fn parse_digits(s: &str) -> Result<Vec<u32>> {
    s.char_indices().map(|(at, c)| c.to_digit(10).ok_or(PuzzleError::InvalidChar(c, at))).collect()
}

/// Sums the digits that match the digit `offset` places further round the circle.
pub fn captcha(digits: &[u32], offset: usize) -> u32 {
    let len = digits.len();
    (0 .. len).filter(|&i| digits[i] == digits[(i + offset) % len]).map(|i| digits[i]).sum()
}
