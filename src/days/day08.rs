use regex::Regex;
use rustc_hash::FxHashMap;

use crate::error::{PuzzleError, Result};
use crate::input::lines;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut cpu = Cpu::default();
    let re = instruction_regex();
    for line in lines(input) {
        cpu.apply(&parse_instruction(&re, line)?);
    }
    Ok(if part == 1 {cpu.largest()} else {cpu.highest_seen}.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {Lt, Le, Gt, Ge, Eq, Ne}

impl Comparison {
    fn holds(self, a: i64, b: i64) -> bool {
        match self {
            Comparison::Lt => a < b,
            Comparison::Le => a <= b,
            Comparison::Gt => a > b,
            Comparison::Ge => a >= b,
            Comparison::Eq => a == b,
            Comparison::Ne => a != b,
        }
    }
}

/// `b inc 5 if a > 1`, with `dec` folded into a negated amount.
#[derive(Debug, PartialEq, Eq)]
pub struct Instruction<'a> {
    pub register: &'a str,
    pub amount: i64,
    pub condition_register: &'a str,
    pub comparison: Comparison,
    pub condition_value: i64,
}

fn instruction_regex() -> Regex {
    Regex::new(r"^([a-z]+) (inc|dec) (-?\d+) if ([a-z]+) (<=|>=|==|!=|<|>) (-?\d+)$").unwrap()
}

pub fn parse_instruction<'a>(re: &Regex, line: &'a str) -> Result<Instruction<'a>> {
    let caps = re.captures(line.trim()).ok_or_else(|| PuzzleError::InvalidLine(line.to_owned()))?;
    let amount: i64 = caps[3].parse()?;
    let comparison = match &caps[5] {
        "<" => Comparison::Lt, "<=" => Comparison::Le,
        ">" => Comparison::Gt, ">=" => Comparison::Ge,
        "==" => Comparison::Eq, "!=" => Comparison::Ne,
        _ => return Err(PuzzleError::InvalidLine(line.to_owned()))
    };
    Ok(Instruction {
        register: caps.get(1).map_or("", |m| m.as_str()),
        amount: if &caps[2] == "dec" {-amount} else {amount},
        condition_register: caps.get(4).map_or("", |m| m.as_str()),
        comparison,
        condition_value: caps[6].parse()?,
    })
}

/// Registers spring into existence at zero the first time an instruction
/// names them.
#[derive(Debug, Default)]
pub struct Cpu {
    registers: FxHashMap<String, i64>,
    highest_seen: i64,
}

impl Cpu {
    pub fn apply(&mut self, instruction: &Instruction) {
        let tested = *self.registers.entry(instruction.condition_register.to_owned()).or_insert(0);
        let register = self.registers.entry(instruction.register.to_owned()).or_insert(0);
        if instruction.comparison.holds(tested, instruction.condition_value) {
            *register += instruction.amount;
            self.highest_seen = self.highest_seen.max(*register);
        }
    }

    pub fn register(&self, name: &str) -> i64 {
        self.registers.get(name).copied().unwrap_or(0)
    }

    pub fn largest(&self) -> i64 {
        self.registers.values().copied().max().unwrap_or(0)
    }
}
