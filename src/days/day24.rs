use rustc_hash::FxHashMap;
use std::str::FromStr;

use crate::error::{PuzzleError, Result};
use crate::input::lines;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let components = lines(input).map(str::parse).collect::<Result<Vec<Component>>>()?;
    let mut best = (0, 0);
    for_each_bridge(&components, |bridge| {
        let strength = bridge.iter().map(|c| c.strength()).sum::<u32>();
        best = best.max(if part == 1 {(0, strength)} else {(bridge.len(), strength)});
    });
    Ok(best.1.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Component {
    pub left: u32,
    pub right: u32,
}

impl Component {
    pub fn low(self) -> u32 {self.left.min(self.right)}
    pub fn high(self) -> u32 {self.left.max(self.right)}
    pub fn strength(self) -> u32 {self.left + self.right}

    /// The port left free when this component is attached by `port`.
    fn other(self, port: u32) -> u32 {
        if self.left == port {self.right} else {self.left}
    }
}

impl FromStr for Component {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Component> {
        let (left, right) = s.split_once('/').ok_or_else(|| PuzzleError::InvalidLine(s.to_owned()))?;
        Ok(Component {left: left.trim().parse()?, right: right.trim().parse()?})
    }
}

/// Indices of the components having each port.
fn port_map(components: &[Component]) -> FxHashMap<u32, Vec<usize>> {
    let mut ports = FxHashMap::<u32, Vec<usize>>::default();
    for (i, c) in components.iter().enumerate() {
        ports.entry(c.left).or_default().push(i);
        if c.right != c.left {ports.entry(c.right).or_default().push(i)};
    }
    ports
}

/// Calls `visit` with every non-empty bridge that starts from a zero port,
/// with each component used at most once.
pub fn for_each_bridge(components: &[Component], mut visit: impl FnMut(&[Component])) {
    let ports = port_map(components);
    let mut used = vec![false; components.len()];
    let mut bridge = Vec::with_capacity(components.len());
    extend(components, &ports, 0, &mut used, &mut bridge, &mut visit);
}

fn extend(
    components: &[Component],
    ports: &FxHashMap<u32, Vec<usize>>,
    port: u32,
    used: &mut [bool],
    bridge: &mut Vec<Component>,
    visit: &mut impl FnMut(&[Component]),
) {
    for &i in ports.get(&port).map_or(&[][..], |fits| &fits[..]) {
        if used[i] {continue};
        used[i] = true;
        bridge.push(components[i]);
        visit(bridge);
        extend(components, ports, components[i].other(port), used, bridge, visit);
        bridge.pop();
        used[i] = false;
    }
}
