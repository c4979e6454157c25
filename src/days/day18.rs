use regex::Regex;
use std::collections::VecDeque;

use crate::error::{PuzzleError, Result};
use crate::input::lines;

/// Steps either machine may take before it is considered stuck in a loop.
const STEP_LIMIT: usize = 100_000_000;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let code = parse_program(input)?;
    Ok(if part == 1 {recover(&code)?.to_string()} else {duet(&code)?.to_string()})
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Register(usize),
    Value(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Snd(Operand),
    Set(usize, Operand),
    Add(usize, Operand),
    Mul(usize, Operand),
    Mod(usize, Operand),
    Rcv(usize),
    Jgz(Operand, Operand),
}

fn instruction_regex() -> Regex {
    Regex::new(r"^([a-z]{3}) ([a-z]|-?\d+)(?: ([a-z]|-?\d+))?$").unwrap()
}

pub fn operand(arg: &str) -> Result<Operand> {
    Ok(match arg.as_bytes() {
        &[name @ b'a' ..= b'z'] => Operand::Register((name - b'a') as usize),
        _ => Operand::Value(arg.parse()?),
    })
}

pub fn parse_instruction(re: &Regex, line: &str) -> Result<Instruction> {
    let invalid = || PuzzleError::InvalidLine(line.to_owned());
    let caps = re.captures(line.trim()).ok_or_else(invalid)?;
    let x = operand(&caps[2])?;
    let y = caps.get(3).map(|m| operand(m.as_str())).transpose()?;
    let register = match x {
        Operand::Register(r) => Some(r),
        Operand::Value(_) => None,
    };
    Ok(match (&caps[1], register, y) {
        ("snd", _, None) => Instruction::Snd(x),
        ("set", Some(r), Some(y)) => Instruction::Set(r, y),
        ("add", Some(r), Some(y)) => Instruction::Add(r, y),
        ("mul", Some(r), Some(y)) => Instruction::Mul(r, y),
        ("mod", Some(r), Some(y)) => Instruction::Mod(r, y),
        ("rcv", Some(r), None) => Instruction::Rcv(r),
        ("jgz", _, Some(y)) => Instruction::Jgz(x, y),
        _ => return Err(invalid())
    })
}

pub fn parse_program(input: &str) -> Result<Vec<Instruction>> {
    let re = instruction_regex();
    lines(input).map(|line| parse_instruction(&re, line)).collect()
}

/// What a single step did that the surrounding machine has to deal with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Ran,
    Sent(i64),
    /// Stopped on a `rcv` into this register; the counter stays on it until
    /// the caller moves past it.
    Receive(usize),
    Halted,
}

#[derive(Clone, Debug)]
pub struct Program<'a> {
    code: &'a [Instruction],
    registers: [i64; 26],
    counter: i64,
}

impl<'a> Program<'a> {
    /// A fresh program with register `p` holding its id.
    pub fn new(code: &'a [Instruction], id: i64) -> Program<'a> {
        let mut registers = [0; 26];
        registers[(b'p' - b'a') as usize] = id;
        Program {code, registers, counter: 0}
    }

    fn value(&self, operand: Operand) -> i64 {
        match operand {
            Operand::Register(r) => self.registers[r],
            Operand::Value(v) => v,
        }
    }

    pub fn register(&self, name: char) -> i64 {
        self.registers[(name as u8 - b'a') as usize]
    }

    pub fn step(&mut self) -> Effect {
        let Some(&instruction) = usize::try_from(self.counter).ok().and_then(|at| self.code.get(at)) else {
            return Effect::Halted;
        };
        let mut effect = Effect::Ran;
        match instruction {
            Instruction::Snd(x) => effect = Effect::Sent(self.value(x)),
            Instruction::Set(r, y) => self.registers[r] = self.value(y),
            Instruction::Add(r, y) => self.registers[r] = self.registers[r].wrapping_add(self.value(y)),
            Instruction::Mul(r, y) => self.registers[r] = self.registers[r].wrapping_mul(self.value(y)),
            Instruction::Mod(r, y) => {
                // a zero divisor leaves the register alone
                if let Some(rem) = self.registers[r].checked_rem(self.value(y)) {self.registers[r] = rem};
            },
            Instruction::Rcv(r) => return Effect::Receive(r),
            Instruction::Jgz(x, y) => if self.value(x) > 0 {
                self.counter = self.counter.saturating_add(self.value(y));
                return effect;
            },
        }
        self.counter += 1;
        effect
    }

    pub fn advance(&mut self) {
        self.counter += 1;
    }

    pub fn receive(&mut self, register: usize, value: i64) {
        self.registers[register] = value;
        self.advance();
    }
}

/// Plays sounds until the first `rcv` on a non-zero register, and returns
/// the last sound played by then.
pub fn recover(code: &[Instruction]) -> Result<i64> {
    let mut program = Program::new(code, 0);
    let mut played = None;
    for _ in 0 .. STEP_LIMIT {
        match program.step() {
            Effect::Ran => {}
            Effect::Sent(frequency) => played = Some(frequency),
            Effect::Receive(r) if program.registers[r] != 0 => {
                return played.ok_or(PuzzleError::NoSolution("nothing was played before the first recovery"));
            },
            Effect::Receive(_) => program.advance(),
            Effect::Halted => return Err(PuzzleError::NoSolution("the program ends without recovering a sound")),
        }
    }
    Err(PuzzleError::NoSolution("the program never recovers a sound"))
}

/// Runs two copies side by side, each sending to the other's queue, until
/// both are waiting or finished. Returns how many values program 1 sent.
pub fn duet(code: &[Instruction]) -> Result<usize> {
    let mut programs = [Program::new(code, 0), Program::new(code, 1)];
    let mut inboxes = [VecDeque::new(), VecDeque::new()];
    let mut sent = 0;
    for _ in 0 .. STEP_LIMIT {
        let mut progressed = false;
        for id in 0 .. 2 {
            match programs[id].step() {
                Effect::Ran => progressed = true,
                Effect::Sent(value) => {
                    inboxes[1 - id].push_back(value);
                    if id == 1 {sent += 1};
                    progressed = true;
                },
                Effect::Receive(r) => if let Some(value) = inboxes[id].pop_front() {
                    programs[id].receive(r, value);
                    progressed = true;
                },
                Effect::Halted => {}
            }
        }
        if !progressed {return Ok(sent)};
    }
    Err(PuzzleError::NoSolution("the programs never deadlock or finish"))
}
