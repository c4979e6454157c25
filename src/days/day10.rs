use crate::error::{PuzzleError, Result};
use crate::knothash::{self, RING_SIZE};

pub fn solve(part: u8, input: &str) -> Result<String> {
    if part == 1 {
        let lengths = input.trim().split(',').map(|n| n.trim().parse::<usize>().map_err(PuzzleError::from))
            .collect::<Result<Vec<_>>>()?;
        Ok(knot_product(RING_SIZE, &lengths)?.to_string())
    } else {
        Ok(knothash::hash(input.trim()).to_string())
    }
}

/// Product of the first two ring elements after a single pass of knots.
pub fn knot_product(size: usize, lengths: &[usize]) -> Result<u32> {
    let ring = knothash::tie_knots(size, lengths)?;
    match ring.elements() {
        [first, second, ..] => Ok(*first as u32 * *second as u32),
        _ => Err(PuzzleError::NoSolution("the ring has fewer than two elements"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knothash::KnotError;

    #[test]
    fn single_pass() {
        assert_eq!(knot_product(5, &[3, 4, 1, 5]).unwrap(), 12);
        assert!(solve(1, "3, 4, 1, 5\n").is_ok());
    }

    #[test]
    fn overlong_length() {
        assert!(matches!(
            knot_product(5, &[3, 6]),
            Err(PuzzleError::Knot(KnotError::LengthOutOfRange {length: 6, size: 5}))
        ));
        assert!(matches!(solve(1, "3,257"), Err(PuzzleError::Knot(_))));
        assert!(matches!(solve(1, "3,x"), Err(PuzzleError::Number(_))));
    }

    #[test]
    fn full_hash() {
        assert_eq!(solve(2, "AoC 2017\n").unwrap(), "33efeb34ea91902bb2f59c9920caa6cd");
        assert_eq!(solve(2, "").unwrap(), "a2582a3a0e66e6e86e3812dcb672a272");
    }
}
