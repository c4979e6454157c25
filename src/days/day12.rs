use regex::Regex;
use std::collections::VecDeque;

use crate::error::{PuzzleError, Result};
use crate::input::lines;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let pipes = Pipes::parse(input)?;
    Ok(if part == 1 {pipes.group_of(0).len()} else {pipes.groups().len()}.to_string())
}

/// Adjacency lists, indexed by program id.
pub struct Pipes {
    adjacent: Vec<Vec<usize>>,
}

impl Pipes {
    /// Parses lines like `2 <-> 0, 3, 4`.
    pub fn parse(input: &str) -> Result<Pipes> {
        let re = Regex::new(r"^(\d+) <-> ([\d, ]+)$").unwrap();
        let mut adjacent: Vec<Vec<usize>> = vec![];
        for line in lines(input) {
            let caps = re.captures(line).ok_or_else(|| PuzzleError::InvalidLine(line.to_owned()))?;
            let program: usize = caps[1].parse()?;
            let neighbours = caps[2].split(',').map(|n| n.trim().parse::<usize>().map_err(PuzzleError::from))
                .collect::<Result<Vec<_>>>()?;
            let top = neighbours.iter().copied().chain([program]).max().unwrap_or(program);
            if adjacent.len() <= top {adjacent.resize(top + 1, vec![])};
            for &n in &neighbours {
                adjacent[program].push(n);
                adjacent[n].push(program);
            }
        }
        Ok(Pipes {adjacent})
    }

    fn flood(&self, start: usize, seen: &mut [bool]) -> Vec<usize> {
        let mut group = vec![];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        while let Some(program) = queue.pop_front() {
            group.push(program);
            for &n in &self.adjacent[program] {
                if !seen[n] {
                    seen[n] = true;
                    queue.push_back(n);
                }
            }
        }
        group
    }

    pub fn group_of(&self, program: usize) -> Vec<usize> {
        if program >= self.adjacent.len() {return vec![]};
        self.flood(program, &mut vec![false; self.adjacent.len()])
    }

    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.adjacent.len()];
        (0 .. self.adjacent.len()).filter_map(|program|
            (!seen[program]).then(|| self.flood(program, &mut seen))
        ).collect()
    }
}
