use regex::Regex;
use tracing::debug;

use super::day18::{operand, Operand};
use crate::error::{PuzzleError, Result};
use crate::input::lines;

const STEP_LIMIT: usize = 100_000_000;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let code = parse_program(input)?;
    Ok(if part == 1 {count_muls(&code)?} else {count_composites(&code)?}.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Set(usize, Operand),
    Sub(usize, Operand),
    Mul(usize, Operand),
    Jnz(Operand, Operand),
}

pub fn parse_program(input: &str) -> Result<Vec<Instruction>> {
    let re = Regex::new(r"^(set|sub|mul|jnz) ([a-z]|-?\d+) ([a-z]|-?\d+)$").unwrap();
    lines(input).map(|line| -> Result<Instruction> {
        let invalid = || PuzzleError::InvalidLine(line.to_owned());
        let caps = re.captures(line).ok_or_else(invalid)?;
        let (x, y) = (operand(&caps[2])?, operand(&caps[3])?);
        Ok(match (&caps[1], x) {
            ("jnz", _) => Instruction::Jnz(x, y),
            (_, Operand::Value(_)) => return Err(invalid()),
            ("set", Operand::Register(r)) => Instruction::Set(r, y),
            ("sub", Operand::Register(r)) => Instruction::Sub(r, y),
            (_, Operand::Register(r)) => Instruction::Mul(r, y),
        })
    }).collect()
}

/// Registers `a` to `h` and the instruction counter.
#[derive(Clone, Debug)]
pub struct Coprocessor<'a> {
    code: &'a [Instruction],
    registers: [i64; 26],
    counter: i64,
}

impl<'a> Coprocessor<'a> {
    pub fn new(code: &'a [Instruction], a: i64) -> Coprocessor<'a> {
        let mut registers = [0; 26];
        registers[0] = a;
        Coprocessor {code, registers, counter: 0}
    }

    fn value(&self, operand: Operand) -> i64 {
        match operand {
            Operand::Register(r) => self.registers[r],
            Operand::Value(v) => v,
        }
    }

    fn current(&self) -> Option<Instruction> {
        usize::try_from(self.counter).ok().and_then(|at| self.code.get(at)).copied()
    }

    /// Runs one instruction, or returns `None` once the counter has left the program.
    pub fn step(&mut self) -> Option<Instruction> {
        let instruction = self.current()?;
        match instruction {
            Instruction::Set(r, y) => self.registers[r] = self.value(y),
            Instruction::Sub(r, y) => self.registers[r] = self.registers[r].wrapping_sub(self.value(y)),
            Instruction::Mul(r, y) => self.registers[r] = self.registers[r].wrapping_mul(self.value(y)),
            Instruction::Jnz(x, y) => if self.value(x) != 0 {
                self.counter = self.counter.saturating_add(self.value(y));
                return Some(instruction);
            },
        }
        self.counter += 1;
        Some(instruction)
    }
}

/// How many `mul` instructions run in debug mode (`a` = 0) before the program exits.
pub fn count_muls(code: &[Instruction]) -> Result<usize> {
    let mut cpu = Coprocessor::new(code, 0);
    let mut muls = 0;
    for _ in 0 .. STEP_LIMIT {
        match cpu.step() {
            Some(Instruction::Mul(..)) => muls += 1,
            Some(_) => {}
            None => return Ok(muls),
        }
    }
    Err(PuzzleError::NoSolution("the program does not exit"))
}

/// With `a` = 1 the program slowly counts the values of `b`, from its start
/// up to `c`, that are not prime. Only the setup that computes `b` and `c`
/// is run, up to the first `set f`. The step between values is read from the
/// last `sub b`.
pub fn count_composites(code: &[Instruction]) -> Result<usize> {
    let unexpected = || PuzzleError::NoSolution("the program does not have the expected shape");
    let (b, c, f) = (1, 2, 5);
    let mut cpu = Coprocessor::new(code, 1);
    let at_loop = |cpu: &Coprocessor| matches!(cpu.current(), Some(Instruction::Set(r, _)) if r == f);
    for _ in 0 .. code.len() {
        if at_loop(&cpu) {break};
        cpu.step().ok_or_else(unexpected)?;
    }
    if !at_loop(&cpu) {return Err(unexpected())};
    let step = code.iter().rev().find_map(|&instruction| match instruction {
        Instruction::Sub(r, Operand::Value(v)) if r == b && v < 0 => Some(-v),
        _ => None
    }).ok_or_else(unexpected)?;
    let (low, high) = (cpu.registers[b], cpu.registers[c]);
    debug!(low, high, step, "counting composites");
    Ok((low ..= high).step_by(step as usize).filter(|&n| !is_prime(n)).count())
}

fn is_prime(n: i64) -> bool {
    n >= 2 && (2 ..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = "\
set b 81
set c b
jnz a 2
jnz 1 5
mul b 100
sub b -100000
set c b
sub c -17000
set f 1
set d 2
set e 2
set g d
mul g e
sub g b
jnz g 2
set f 0
sub e -1
set g e
sub g b
jnz g -8
sub d -1
set g d
sub g b
jnz g -13
jnz f 2
sub h -1
set g b
sub g c
jnz g 2
jnz 1 3
sub b -17
jnz 1 -23
";

    #[test]
    fn parses_instructions() {
        assert_eq!(parse_program("jnz 1 -23").unwrap(), vec![Instruction::Jnz(Operand::Value(1), Operand::Value(-23))]);
        assert_eq!(parse_program("sub c -17000").unwrap(), vec![Instruction::Sub(2, Operand::Value(-17000))]);
        assert!(parse_program("set 1 2").is_err());
        assert!(parse_program("snd a").is_err());
    }

    #[test]
    fn runs_small_programs() {
        let code = parse_program("set a 3\nmul a a\nsub a 1\nmul a 2\njnz 0 5").unwrap();
        let mut cpu = Coprocessor::new(&code, 0);
        while cpu.step().is_some() {}
        assert_eq!(cpu.registers[0], 16);
        assert_eq!(count_muls(&code).unwrap(), 2);
    }

    #[test]
    fn primes() {
        let primes = (0 .. 30).filter(|&n| is_prime(n)).collect::<Vec<_>>();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn coprocessor() {
        assert_eq!(solve(1, PROGRAM).unwrap(), "6241");
        assert_eq!(solve(2, PROGRAM).unwrap(), "909");
        assert!(solve(2, "set a 1").is_err());
        assert!(solve(2, "jnz 1 0\nset f 1\nsub b -17").is_err());
    }
}
