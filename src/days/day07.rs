use itertools::Itertools;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{PuzzleError, Result};
use crate::input::lines;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let tower = Tower::parse(input)?;
    if part == 1 {
        Ok(tower.root.to_string())
    } else {
        let (_, fix) = tower.weigh(tower.root);
        fix.map(|weight| weight.to_string()).ok_or(PuzzleError::NoSolution("the tower is already balanced"))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Program<'a> {
    pub name: &'a str,
    pub weight: i64,
    pub holds: Vec<&'a str>,
}

fn program_regex() -> Regex {
    Regex::new(r"^([a-z]+) \((\d+)\)(?: -> ([a-z, ]+))?$").unwrap()
}

/// Parses a line like `fwft (72) -> ktlj, cntj, xhth`.
pub fn parse_program<'a>(re: &Regex, line: &'a str) -> Result<Program<'a>> {
    let caps = re.captures(line.trim()).ok_or_else(|| PuzzleError::InvalidLine(line.to_owned()))?;
    Ok(Program {
        name: caps.get(1).map_or("", |m| m.as_str()),
        weight: caps[2].parse()?,
        holds: caps.get(3).map_or(vec![], |m| m.as_str().split(", ").collect()),
    })
}

pub struct Tower<'a> {
    root: &'a str,
    programs: FxHashMap<&'a str, Program<'a>>,
}

impl<'a> Tower<'a> {
    pub fn parse(input: &'a str) -> Result<Tower<'a>> {
        let re = program_regex();
        let programs = lines(input)
            .map(|line| parse_program(&re, line).map(|program| (program.name, program)))
            .collect::<Result<FxHashMap<_, _>>>()?;

        let held = programs.values().flat_map(|program| program.holds.iter().copied()).collect::<FxHashSet<_>>();
        if let Some(missing) = held.iter().find(|name| !programs.contains_key(*name)) {
            return Err(PuzzleError::InvalidLine(format!("nobody called {} exists", missing)));
        }
        let root = programs.keys().copied().filter(|name| !held.contains(name)).exactly_one()
            .map_err(|_| PuzzleError::NoSolution("the tower has no single bottom program"))?;
        check_acyclic(&programs)?;
        Ok(Tower {root, programs})
    }

    pub fn root(&self) -> &'a str {self.root}

    /// Total weight of the subtower on `name`, plus the weight the single
    /// odd program out would need to balance it, if one is found.
    fn weigh(&self, name: &str) -> (i64, Option<i64>) {
        let program = &self.programs[name];
        let mut totals = Vec::with_capacity(program.holds.len());
        for &child in &program.holds {
            let (total, fix) = self.weigh(child);
            if fix.is_some() {return (0, fix)};
            totals.push(total);
        }

        let counts = totals.iter().counts();
        if let (Some((&&odd, _)), Some((&&usual, _))) = (
            counts.iter().find(|(_, &n)| n == 1),
            counts.iter().find(|(_, &n)| n > 1),
        ) {
            let odd_at = totals.iter().position(|&t| t == odd).unwrap_or_default();
            let fix = self.programs[program.holds[odd_at]].weight + usual - odd;
            return (0, Some(fix));
        }
        (program.weight + totals.iter().sum::<i64>(), None)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {Open, Done}

/// Walks every program depth first without recursion and rejects any
/// program that ends up holding itself, directly or further up.
fn check_acyclic(programs: &FxHashMap<&str, Program<'_>>) -> Result<()> {
    let mut marks = FxHashMap::<&str, Mark>::default();
    for &start in programs.keys() {
        if marks.contains_key(start) {continue};
        marks.insert(start, Mark::Open);
        let mut stack = vec![(start, 0)];
        while let Some((name, next)) = stack.pop() {
            let Some(&child) = programs[name].holds.get(next) else {
                marks.insert(name, Mark::Done);
                continue;
            };
            stack.push((name, next + 1));
            match marks.get(child) {
                Some(Mark::Open) => return Err(PuzzleError::InvalidLine(format!("{} sits on itself", child))),
                Some(Mark::Done) => {}
                None => {
                    marks.insert(child, Mark::Open);
                    stack.push((child, 0));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
pbga (66)
xhth (57)
ebii (61)
havc (66)
ktlj (57)
fwft (72) -> ktlj, cntj, xhth
qoyq (66)
padx (45) -> pbga, havc, qoyq
tknk (41) -> ugml, padx, fwft
jptl (61)
ugml (68) -> gyxo, ebii, jptl
gyxo (61)
cntj (57)
";

    #[test]
    fn parses_rows() {
        let re = program_regex();
        assert_eq!(parse_program(&re, "pbga (66)").unwrap(), Program {name: "pbga", weight: 66, holds: vec![]});
        assert_eq!(
            parse_program(&re, "fwft (72) -> ktlj, cntj, xhth").unwrap(),
            Program {name: "fwft", weight: 72, holds: vec!["ktlj", "cntj", "xhth"]}
        );
        assert!(parse_program(&re, "fwft 72").is_err());
    }

    #[test]
    fn subtower_weights() {
        let tower = Tower::parse(EXAMPLE).unwrap();
        assert_eq!(tower.weigh("ugml"), (251, None));
        assert_eq!(tower.weigh("padx"), (243, None));
        assert_eq!(tower.weigh("fwft"), (243, None));
    }

    #[test]
    fn example() {
        assert_eq!(Tower::parse(EXAMPLE).unwrap().root(), "tknk");
        assert_eq!(solve(1, EXAMPLE).unwrap(), "tknk");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "60");
    }

    #[test]
    fn dangling_child() {
        assert!(Tower::parse("tknk (41) -> ugml").is_err());
    }

    #[test]
    fn loops_are_rejected() {
        let looped = "a (1) -> b\nb (1) -> c\nc (1) -> b";
        assert!(matches!(Tower::parse(looped), Err(PuzzleError::InvalidLine(_))));
        assert!(solve(2, looped).is_err());
        assert!(matches!(Tower::parse("a (1) -> b\nb (1) -> b"), Err(PuzzleError::InvalidLine(_))));
        assert!(check_acyclic(&Tower::parse(EXAMPLE).unwrap().programs).is_ok());
    }
}
