use itertools::Itertools;

use crate::error::Result;
use crate::input::lines;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let valid: fn(&str) -> bool = if part == 1 {is_valid} else {has_no_anagrams};
    Ok(lines(input).filter(|line| valid(line)).count().to_string())
}

pub fn is_valid(passphrase: &str) -> bool {
    passphrase.split_whitespace().all_unique()
}

pub fn has_no_anagrams(passphrase: &str) -> bool {
    passphrase.split_whitespace().map(|word| word.chars().sorted_unstable().collect::<String>()).all_unique()
}
