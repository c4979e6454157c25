use bitvec::prelude::*;
use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::knothash;

pub const DISK_SIZE: usize = 128;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let key = input.trim();
    if key.is_empty() {return Err(PuzzleError::EmptyInput)};
    let disk = Disk::new(key);
    Ok(if part == 1 {disk.used()} else {disk.regions()}.to_string())
}

type Row = BitArray<[u8; DISK_SIZE / 8], Msb0>;

/// A 128x128 grid of squares; row `r` holds the bits of the knot hash of `key-r`.
pub struct Disk {
    rows: Vec<Row>,
}

impl Disk {
    pub fn new(key: &str) -> Disk {
        let rows = (0 .. DISK_SIZE).map(|row| {
            Row::new(*knothash::hash(&format!("{}-{}", key, row)).as_bytes())
        }).collect::<Vec<_>>();
        debug!(key, "built disk");
        Disk {rows}
    }

    pub fn used(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// Counts groups of used squares connected horizontally or vertically.
    pub fn regions(&self) -> usize {
        let mut unvisited = self.rows.clone();
        let mut regions = 0;
        let mut stack = vec![];
        for ri in 0 .. DISK_SIZE {
            for ci in 0 .. DISK_SIZE {
                if !unvisited[ri][ci] {continue};
                regions += 1;
                unvisited[ri].set(ci, false);
                stack.push((ri, ci));
                while let Some((r, c)) = stack.pop() {
                    let neighbours = [
                        (r.wrapping_sub(1), c), (r + 1, c), (r, c.wrapping_sub(1)), (r, c + 1)
                    ];
                    for (nr, nc) in neighbours {
                        if nr < DISK_SIZE && nc < DISK_SIZE && unvisited[nr][nc] {
                            unvisited[nr].set(nc, false);
                            stack.push((nr, nc));
                        }
                    }
                }
            }
        }
        regions
    }

    /// Renders the top-left `size`x`size` corner, `#` for used and `.` for free.
    pub fn corner(&self, size: usize) -> String {
        let size = size.min(DISK_SIZE);
        self.rows[.. size].iter().map(|row| {
            row[.. size].iter().map(|used| if *used {'#'} else {'.'}).chain(['\n']).collect::<String>()
        }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "flqrgnkx";

    #[test]
    fn corner() {
        let expected = "\
##.#.#..
.#.#.#.#
....#.#.
#.#.##.#
.##.#...
##..#..#
.#...#..
##.#.##.
";
        assert_eq!(Disk::new(KEY).corner(8), expected);
    }

    #[test]
    fn used_and_regions() {
        let disk = Disk::new(KEY);
        assert_eq!(disk.used(), 8108);
        assert_eq!(disk.regions(), 1242);
    }

    #[test]
    fn empty_key() {
        assert!(matches!(solve(1, " \n"), Err(PuzzleError::EmptyInput)));
    }
}
