use crate::error::{PuzzleError, Result};

pub fn solve(part: u8, input: &str) -> Result<String> {
    let stream = process(input.trim())?;
    Ok(if part == 1 {stream.score} else {stream.garbage}.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {Group, Garbage, Cancelled}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stream {
    pub score: u64,
    pub garbage: u64,
}

pub fn process(input: &str) -> Result<Stream> {
    let mut stream = Stream::default();
    let mut depth = 0u64;
    let mut state = State::Group;
    for (at, c) in input.char_indices() {
        state = match (state, c) {
            (State::Group, '{') => {depth += 1; State::Group},
            (State::Group, '}') if depth > 0 => {stream.score += depth; depth -= 1; State::Group},
            (State::Group, ',') => State::Group,
            (State::Group, '<') => State::Garbage,
            (State::Group, c) => return Err(PuzzleError::InvalidChar(c, at)),
            (State::Garbage, '!') => State::Cancelled,
            (State::Garbage, '>') => State::Group,
            (State::Garbage, _) => {stream.garbage += 1; State::Garbage},
            (State::Cancelled, _) => State::Garbage,
        };
    }
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores() {
        for (input, expected) in [
            ("{}", 1), ("{{{}}}", 6), ("{{},{}}", 5), ("{{{},{},{{}}}}", 16),
            ("{<a>,<a>,<a>,<a>}", 1), ("{{<ab>},{<ab>},{<ab>},{<ab>}}", 9),
            ("{{<!!>},{<!!>},{<!!>},{<!!>}}", 9), ("{{<a!>},{<a!>},{<a!>},{<ab>}}", 3),
        ] {
            assert_eq!(process(input).unwrap().score, expected, "{}", input);
        }
    }

    #[test]
    fn garbage() {
        for (input, expected) in [
            ("<>", 0), ("<random characters>", 17), ("<<<<>", 3), ("<{!>}>", 2),
            ("<!!>", 0), ("<!!!>>", 0), ("<{o\"i!a,<{i<a>", 10),
        ] {
            assert_eq!(solve(2, input).unwrap(), expected.to_string(), "{}", input);
        }
    }

    #[test]
    fn unbalanced_close() {
        assert!(matches!(process("{}}"), Err(PuzzleError::InvalidChar('}', 2))));
        assert!(matches!(process("{x}"), Err(PuzzleError::InvalidChar('x', 1))));
    }
}
