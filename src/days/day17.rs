use crate::error::Result;

const INSERTIONS: usize = 2017;
const ANGRY_INSERTIONS: usize = 50_000_000;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let step: usize = input.trim().parse()?;
    Ok(if part == 1 {
        spin(step, INSERTIONS).after(INSERTIONS as u32) as usize
    } else {
        after_zero(step, ANGRY_INSERTIONS)
    }.to_string())
}

/// The circular buffer of the spinlock, starting out as just `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    position: usize,
    values: Vec<u32>,
}

impl Default for Buffer {
    fn default() -> Buffer {
        Buffer {position: 0, values: vec![0]}
    }
}

impl Buffer {
    pub fn position(&self) -> usize {self.position}
    pub fn values(&self) -> &[u32] {&self.values}

    pub fn step(&mut self, steps: usize) {
        self.position = (self.position + steps) % self.values.len();
    }

    /// Inserts `value` after the current position and moves onto it.
    pub fn insert_after(&mut self, value: u32) {
        self.position += 1;
        self.values.insert(self.position, value);
    }

    pub fn position_of(&self, value: u32) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }

    /// The value following `value` around the buffer, or 0 if it is absent.
    pub fn after(&self, value: u32) -> u32 {
        self.position_of(value).map_or(0, |at| self.values[(at + 1) % self.values.len()])
    }
}

pub fn spin(step: usize, times: usize) -> Buffer {
    let mut buffer = Buffer::default();
    for value in 1 ..= times as u32 {
        buffer.step(step);
        buffer.insert_after(value);
    }
    buffer
}

/// 0 never moves from the front of the buffer, so only insertions landing
/// right after it matter and the buffer itself is never built.
pub fn after_zero(step: usize, times: usize) -> usize {
    let (mut position, mut after) = (0, 0);
    for len in 1 ..= times {
        position = (position + step) % len + 1;
        if position == 1 {after = len};
    }
    after
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(position: usize, values: &[u32]) -> Buffer {
        Buffer {position, values: values.to_vec()}
    }

    #[test]
    fn steps_around() {
        let mut zero = Buffer::default();
        zero.step(3);
        assert_eq!(zero, Buffer::default());

        let mut four = buffer(1, &[0, 2, 3, 1]);
        four.step(3);
        assert_eq!(four, buffer(0, &[0, 2, 3, 1]));
    }

    #[test]
    fn inserts() {
        let mut zero = Buffer::default();
        zero.insert_after(1);
        assert_eq!(zero, buffer(1, &[0, 1]));

        let mut four = buffer(1, &[0, 2, 3, 1]);
        four.insert_after(4);
        assert_eq!(four, buffer(2, &[0, 2, 4, 3, 1]));

        let mut start = buffer(0, &[0, 1, 2]);
        start.insert_after(3);
        assert_eq!(start, buffer(1, &[0, 3, 1, 2]));

        let mut end = buffer(2, &[0, 1, 2]);
        end.insert_after(3);
        assert_eq!(end, buffer(3, &[0, 1, 2, 3]));
    }

    #[test]
    fn finds_values() {
        let four = buffer(1, &[0, 2, 3, 1]);
        assert_eq!(four.position_of(4), None);
        assert_eq!(four.position_of(3), Some(2));
        assert_eq!(four.after(1), 0);
    }

    #[test]
    fn example() {
        assert_eq!(spin(3, 9), buffer(1, &[0, 9, 5, 7, 2, 4, 3, 8, 6, 1]));
        assert_eq!(solve(1, "3").unwrap(), "638");
    }

    #[test]
    fn tracks_the_value_after_zero() {
        for times in 1 .. 200 {
            assert_eq!(after_zero(3, times), spin(3, times).after(0) as usize, "after {} insertions", times);
        }
        assert_eq!(after_zero(3, 9), 9);
    }
}
