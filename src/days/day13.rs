use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::input::lines;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let firewall = Firewall::parse(input)?;
    if part == 1 {
        Ok(firewall.severity(0).to_string())
    } else {
        Ok(firewall.safe_delay()?.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layer {
    pub depth: u64,
    pub range: u64,
}

impl Layer {
    /// Whether the scanner sits at the top when a packet sent after `delay`
    /// picoseconds reaches this layer. A scanner bounces with period 2(range-1).
    pub fn catches(self, delay: u64) -> bool {
        self.range <= 1 || (self.depth + delay) % (2 * (self.range - 1)) == 0
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Firewall {
    layers: Vec<Layer>,
}

impl Firewall {
    /// Parses `depth: range` lines. Layers without a scanner are simply absent.
    pub fn parse(input: &str) -> Result<Firewall> {
        let layers = lines(input).map(|line| -> Result<Layer> {
            let (depth, range) = line.split_once(": ").ok_or_else(|| PuzzleError::InvalidLine(line.to_owned()))?;
            Ok(Layer {depth: depth.trim().parse()?, range: range.trim().parse()?})
        }).filter(|layer| !matches!(layer, Ok(Layer {range: 0, ..})))
          .collect::<Result<Vec<_>>>()?;
        Ok(Firewall {layers})
    }

    pub fn severity(&self, delay: u64) -> u64 {
        self.layers.iter().filter(|layer| layer.catches(delay)).map(|layer| layer.depth * layer.range).sum()
    }

    /// The smallest delay that gets a packet through without any scanner catching it.
    pub fn safe_delay(&self) -> Result<u64> {
        if self.layers.iter().any(|layer| layer.range == 1) {
            return Err(PuzzleError::NoSolution("a scanner of range 1 catches every packet"));
        }
        // the whole firewall repeats after the lcm of the scanner periods
        let period = self.layers.iter().try_fold(1u64, |acc, layer| {
            let step = 2 * (layer.range - 1);
            (acc / gcd(acc, step)).checked_mul(step)
        }).ok_or(PuzzleError::NoSolution("the scanner periods overflow"))?;
        let delay = (0 .. period).find(|&delay| !self.layers.iter().any(|layer| layer.catches(delay)))
            .ok_or(PuzzleError::NoSolution("no delay passes every scanner"))?;
        debug!(delay, period, "found a delay that passes every scanner");
        Ok(delay)
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {a} else {gcd(b, a % b)}
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "0: 3\n1: 2\n4: 4\n6: 4\n";

    #[test]
    fn parses_layers() {
        let firewall = Firewall::parse(EXAMPLE).unwrap();
        assert_eq!(firewall.layers, vec![
            Layer {depth: 0, range: 3}, Layer {depth: 1, range: 2},
            Layer {depth: 4, range: 4}, Layer {depth: 6, range: 4},
        ]);
        assert!(Firewall::parse("0 3").is_err());
    }

    #[test]
    fn scanners_bounce() {
        let layer = Layer {depth: 0, range: 3};
        let caught = (0 .. 9).filter(|&t| layer.catches(t)).collect::<Vec<_>>();
        assert_eq!(caught, vec![0, 4, 8]);
        assert!(Layer {depth: 5, range: 1}.catches(17));
    }

    #[test]
    fn trip_severity() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "24");
        assert_eq!(Firewall::parse(EXAMPLE).unwrap().severity(10), 0);
    }

    #[test]
    fn delay() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "10");
        assert!(solve(2, "0: 3\n2: 1").is_err());
    }

    #[test]
    fn blocked_firewall_gives_up() {
        // one scanner catches every even delay, the other every odd one
        assert!(matches!(solve(2, "0: 2\n1: 2"), Err(PuzzleError::NoSolution(_))));
        assert!(matches!(solve(2, "0: 2\n1: 4\n3: 2"), Err(PuzzleError::NoSolution(_))));
        assert_eq!(solve(2, "").unwrap(), "0");
        assert_eq!(gcd(12, 18), 6);
    }
}
