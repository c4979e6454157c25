//! The knot hash first introduced on day 10 and reused by day 14.
//!
//! A [`Ring`] of the numbers `0..size` is twisted by a list of lengths: each
//! knot reverses `length` elements starting at the cursor, then moves the
//! cursor forward by the length plus a skip that grows with every knot. The
//! full [`hash`] runs 64 rounds of this over the bytes of the input (plus a
//! fixed suffix) and XOR-folds the 256-element ring into 16 bytes.

use bitvec::prelude::*;
use std::fmt;
use thiserror::Error;

pub const RING_SIZE: usize = 256;
pub const ROUNDS: usize = 64;
pub const BLOCK_SIZE: usize = 16;
pub const LENGTH_SUFFIX: [u8; 5] = [17, 31, 73, 47, 23];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum KnotError {
    #[error("ring size {0} is outside 1..=256")]
    RingSize(usize),

    #[error("knot length {length} does not fit a ring of {size}")]
    LengthOutOfRange { length: usize, size: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ring {
    elements: Vec<u8>,
    cursor: usize,
    skip: usize,
}

impl Ring {
    /// A ring holding `0 .. size` in order, with the cursor at the start.
    pub fn new(size: usize) -> Result<Ring, KnotError> {
        if !(1 ..= RING_SIZE).contains(&size) {
            return Err(KnotError::RingSize(size));
        }
        Ok(Ring::seeded(size))
    }

    fn seeded(size: usize) -> Ring {
        Ring {elements: (0 .. size).map(|x| x as u8).collect(), cursor: 0, skip: 0}
    }

    pub fn elements(&self) -> &[u8] {&self.elements}
    pub fn cursor(&self) -> usize {self.cursor}
    pub fn skip(&self) -> usize {self.skip}
    pub fn size(&self) -> usize {self.elements.len()}

    /// Ties a single knot. Lengths longer than the ring are rejected and leave
    /// the ring untouched.
    pub fn knot(&mut self, length: usize) -> Result<(), KnotError> {
        if length > self.size() {
            return Err(KnotError::LengthOutOfRange {length, size: self.size()});
        }
        self.twist(length);
        Ok(())
    }

    // caller guarantees length <= size
    fn twist(&mut self, length: usize) {
        let n = self.size();
        for i in 0 .. length / 2 {
            self.elements.swap((self.cursor + i) % n, (self.cursor + length - i - 1) % n);
        }
        self.cursor = (self.cursor + length + self.skip % n) % n;
        self.skip += 1;
    }

    fn dense(&self) -> KnotHash {
        let mut dense = [0u8; RING_SIZE / BLOCK_SIZE];
        for (byte, block) in dense.iter_mut().zip(self.elements.chunks(BLOCK_SIZE)) {
            *byte = block.iter().fold(0, |acc, x| acc ^ x);
        }
        KnotHash(dense)
    }
}

/// One pass of knots over raw lengths, without the encoding, the repeated
/// rounds or the folding of the full hash.
pub fn tie_knots(size: usize, lengths: &[usize]) -> Result<Ring, KnotError> {
    let mut ring = Ring::new(size)?;
    for &length in lengths {
        ring.knot(length)?;
    }
    Ok(ring)
}

pub fn encode_lengths(text: &str) -> Vec<u8> {
    text.bytes().chain(LENGTH_SUFFIX).collect()
}

pub fn hash(text: &str) -> KnotHash {
    let lengths = encode_lengths(text);
    let mut ring = Ring::seeded(RING_SIZE);
    for _ in 0 .. ROUNDS {
        for &length in &lengths {
            ring.twist(length as usize);
        }
    }
    ring.dense()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KnotHash([u8; RING_SIZE / BLOCK_SIZE]);

impl KnotHash {
    pub fn as_bytes(&self) -> &[u8; RING_SIZE / BLOCK_SIZE] {&self.0}

    /// The 128 bits of the hash, most significant bit of the first byte first.
    pub fn bits(&self) -> &BitSlice<u8, Msb0> {self.0.view_bits::<Msb0>()}
}

impl fmt::Display for KnotHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn knot_sequence_on_small_ring() {
        let mut ring = Ring::new(5).unwrap();
        let steps: [(usize, [u8; 5], usize, usize); 4] = [
            (3, [2, 1, 0, 3, 4], 3, 1),
            (4, [4, 3, 0, 1, 2], 3, 2),
            (1, [4, 3, 0, 1, 2], 1, 3),
            (5, [3, 4, 2, 1, 0], 4, 4),
        ];
        for (length, elements, cursor, skip) in steps {
            ring.knot(length).unwrap();
            assert_eq!(ring.elements(), &elements, "after length {}", length);
            assert_eq!(ring.cursor(), cursor, "after length {}", length);
            assert_eq!(ring.skip(), skip, "after length {}", length);
        }
    }

    #[test]
    fn zero_length_still_moves() {
        let mut ring = Ring::new(5).unwrap();
        ring.knot(0).unwrap();
        assert_eq!(ring.elements(), &[0, 1, 2, 3, 4]);
        assert_eq!((ring.cursor(), ring.skip()), (0, 1));
        ring.knot(0).unwrap();
        assert_eq!((ring.cursor(), ring.skip()), (1, 2));
    }

    #[test]
    fn repeated_knot_does_not_undo_itself() {
        let mut ring = Ring::new(5).unwrap();
        ring.knot(3).unwrap();
        ring.knot(3).unwrap();
        assert_ne!(ring.elements(), &[0, 1, 2, 3, 4]);
        assert_eq!(ring.elements(), &[3, 1, 0, 2, 4]);
    }

    #[test]
    fn rejects_bad_sizes_and_lengths() {
        assert_eq!(Ring::new(0), Err(KnotError::RingSize(0)));
        assert_eq!(Ring::new(257), Err(KnotError::RingSize(257)));
        assert!(Ring::new(256).is_ok());

        let mut ring = Ring::new(5).unwrap();
        assert_eq!(ring.knot(6), Err(KnotError::LengthOutOfRange {length: 6, size: 5}));
        assert_eq!(ring, Ring::new(5).unwrap());
        assert!(tie_knots(5, &[3, 4, 7]).is_err());
    }

    #[test]
    fn single_pass_example() {
        let ring = tie_knots(5, &[3, 4, 1, 5]).unwrap();
        assert_eq!(ring.elements(), &[3, 4, 2, 1, 0]);
    }

    #[test]
    fn encodes_bytes_and_suffix() {
        assert_eq!(encode_lengths("1,2,3"), vec![49, 44, 50, 44, 51, 17, 31, 73, 47, 23]);
        assert_eq!(encode_lengths(""), LENGTH_SUFFIX.to_vec());
    }

    #[test]
    fn known_hashes() {
        for (input, expected) in [
            ("", "a2582a3a0e66e6e86e3812dcb672a272"),
            ("AoC 2017", "33efeb34ea91902bb2f59c9920caa6cd"),
            ("1,2,3", "3efbe78a8d82f29979031a4aa0b16a9d"),
            ("1,2,4", "63960835bcdc130f0b66d7ff4f6a5a8e"),
        ] {
            assert_eq!(hash(input).to_string(), expected, "hash of {:?}", input);
        }
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash("flqrgnkx-0"), hash("flqrgnkx-0"));
        assert_eq!(hash("flqrgnkx-0").to_string().len(), 32);
    }

    #[test]
    fn bits_are_msb_first() {
        let hash = hash("");
        assert_eq!(hash.bits().len(), 128);
        // a2 = 1010_0010
        assert_eq!(
            hash.bits()[.. 8].iter().map(|b| *b).collect::<Vec<_>>(),
            [true, false, true, false, false, false, true, false]
        );
    }

    proptest! {
        #[test]
        fn knots_keep_a_permutation(
            size in 1usize ..= RING_SIZE,
            seeds in prop::collection::vec(any::<u16>(), 0 .. 200)
        ) {
            let mut ring = Ring::new(size).unwrap();
            for seed in seeds {
                ring.knot(seed as usize % (size + 1)).unwrap();
                prop_assert!(ring.cursor() < size);
            }
            let mut sorted = ring.elements().to_vec();
            sorted.sort_unstable();
            prop_assert!(sorted.iter().copied().eq((0 .. size).map(|x| x as u8)));
        }

        #[test]
        fn overlong_lengths_are_rejected(size in 1usize ..= RING_SIZE, extra in 1usize .. 1000) {
            let mut ring = Ring::new(size).unwrap();
            prop_assert!(ring.knot(size + extra).is_err());
            prop_assert_eq!(ring.skip(), 0);
        }
    }
}
