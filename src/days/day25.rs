use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::error::{PuzzleError, Result};

pub fn solve(part: u8, input: &str) -> Result<String> {
    if part == 2 {return Err(PuzzleError::NoSolution("day 25 only has one puzzle"))};
    let blueprint = Blueprint::parse(input)?;
    let mut machine = Machine::new(&blueprint);
    machine.run(blueprint.steps);
    Ok(machine.tape.checksum().to_string())
}

/// The cells set to 1; everything else on the infinite tape is 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tape {
    on: FxHashSet<i64>,
}

impl Tape {
    pub fn get(&self, cursor: i64) -> bool {self.on.contains(&cursor)}

    pub fn write(&mut self, cursor: i64, value: bool) -> &mut Tape {
        if value {self.on.insert(cursor);} else {self.on.remove(&cursor);}
        self
    }

    pub fn checksum(&self) -> usize {self.on.len()}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub write: bool,
    /// -1 for left, 1 for right.
    pub step: i64,
    pub next: usize,
}

/// States are numbered in the order the blueprint describes them; each one
/// has an action for reading 0 and for reading 1.
#[derive(Debug, PartialEq, Eq)]
pub struct Blueprint {
    pub start: usize,
    pub steps: usize,
    pub states: Vec<[Action; 2]>,
}

impl Blueprint {
    pub fn parse(input: &str) -> Result<Blueprint> {
        let header = Regex::new(r"Begin in state (\w+)\.\s*Perform a diagnostic checksum after (\d+) steps\.").unwrap();
        let state = Regex::new(r"In state (\w+):").unwrap();
        let action = Regex::new(concat!(
            r"If the current value is ([01]):\s*",
            r"- Write the value ([01])\.\s*",
            r"- Move one slot to the (left|right)\.\s*",
            r"- Continue with state (\w+)\.",
        )).unwrap();

        let caps = header.captures(input).ok_or_else(|| PuzzleError::InvalidLine(first_line(input)))?;
        let (start, steps) = (caps.get(1).map_or("", |m| m.as_str()), caps[2].parse()?);

        let names = state.captures_iter(input).map(|caps| caps.get(1).map_or("", |m| m.as_str()));
        let blocks = names.zip(state.split(input).skip(1)).collect::<Vec<_>>();
        let ids = blocks.iter().enumerate().map(|(id, &(name, _))| (name, id)).collect::<FxHashMap<_, _>>();
        let id = |name: &str| ids.get(name).copied().ok_or_else(|| PuzzleError::InvalidLine(format!("no state {}", name)));

        let mut states = Vec::with_capacity(blocks.len());
        for &(name, body) in &blocks {
            let mut actions = [None; 2];
            for caps in action.captures_iter(body) {
                let read = (&caps[1] == "1") as usize;
                actions[read] = Some(Action {
                    write: &caps[2] == "1",
                    step: if &caps[3] == "left" {-1} else {1},
                    next: id(&caps[4])?,
                });
            }
            match actions {
                [Some(zero), Some(one)] => states.push([zero, one]),
                _ => return Err(PuzzleError::InvalidLine(format!("state {} needs an action for 0 and for 1", name))),
            }
        }
        Ok(Blueprint {start: id(start)?, steps, states})
    }
}

fn first_line(input: &str) -> String {
    input.lines().next().unwrap_or_default().to_owned()
}

pub struct Machine<'a> {
    blueprint: &'a Blueprint,
    pub tape: Tape,
    cursor: i64,
    state: usize,
}

impl<'a> Machine<'a> {
    pub fn new(blueprint: &'a Blueprint) -> Machine<'a> {
        Machine {blueprint, tape: Tape::default(), cursor: 0, state: blueprint.start}
    }

    pub fn run(&mut self, steps: usize) {
        for _ in 0 .. steps {
            let action = self.blueprint.states[self.state][self.tape.get(self.cursor) as usize];
            self.tape.write(self.cursor, action.write);
            self.cursor += action.step;
            self.state = action.next;
        }
        debug!(steps, cursor = self.cursor, "machine stopped");
    }
}
