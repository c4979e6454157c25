use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::input::lines;

/// Ticks simulated before giving up on the swarm settling. Components are
/// read as `i32`, so positions stay well inside `i64` for this long.
const TICKS: usize = 10_000;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let particles = parse(input)?;
    Ok(if part == 1 {closest(particles)?} else {survivors(particles)}.to_string())
}

pub type Vector = [i64; 3];

fn magnitude(v: Vector) -> i64 {
    v.iter().map(|c| c.abs()).sum()
}

fn plus(a: Vector, b: Vector) -> Vector {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Particle {
    pub id: usize,
    pub position: Vector,
    pub velocity: Vector,
    pub acceleration: Vector,
}

impl Particle {
    pub fn update(&mut self) {
        self.velocity = plus(self.velocity, self.acceleration);
        self.position = plus(self.position, self.velocity);
    }
}

pub fn parse(input: &str) -> Result<Vec<Particle>> {
    let n = r"\s*(-?\d+)";
    let re = Regex::new(&format!(r"^p=<{n},{n},{n}>,\s*v=<{n},{n},{n}>,\s*a=<{n},{n},{n}>$")).unwrap();
    lines(input).enumerate().map(|(id, line)| -> Result<Particle> {
        let caps = re.captures(line).ok_or_else(|| PuzzleError::InvalidLine(line.to_owned()))?;
        let mut c = [0i64; 9];
        for (i, value) in c.iter_mut().enumerate() {
            *value = caps[i + 1].parse::<i32>()?.into();
        }
        Ok(Particle {id, position: [c[0], c[1], c[2]], velocity: [c[3], c[4], c[5]], acceleration: [c[6], c[7], c[8]]})
    }).collect()
}

/// Ids of the particles scoring lowest on `key`.
fn lowest(particles: &[Particle], key: impl Fn(&Particle) -> i64) -> Vec<usize> {
    let min = particles.iter().map(&key).min();
    particles.iter().filter(|&p| Some(key(p)) == min).map(|p| p.id).collect()
}

/// The particle that stays closest to the origin in the long run. The swarm
/// is stepped until a single particle is at once the closest, the slowest
/// and the least accelerated.
pub fn closest(mut particles: Vec<Particle>) -> Result<usize> {
    for tick in 0 .. TICKS {
        let nearest = lowest(&particles, |p| magnitude(p.position));
        let slowest = lowest(&particles, |p| magnitude(p.velocity));
        let steadiest = lowest(&particles, |p| magnitude(p.acceleration));
        let mut settled = nearest.iter().filter(|&&id| slowest.contains(&id) && steadiest.contains(&id));
        if let (Some(&id), None) = (settled.next(), settled.next()) {
            debug!(tick, id, "swarm settled");
            return Ok(id);
        }
        particles.iter_mut().for_each(Particle::update);
    }
    Err(PuzzleError::NoSolution("no single particle pulls ahead"))
}

/// Particles left once every collision has been resolved. Particles that
/// meet in the same spot are all destroyed.
pub fn survivors(mut particles: Vec<Particle>) -> usize {
    for _ in 0 .. TICKS {
        let mut taken = FxHashMap::<Vector, usize>::default();
        for particle in &particles {
            *taken.entry(particle.position).or_default() += 1;
        }
        particles.retain(|particle| taken[&particle.position] == 1);
        particles.iter_mut().for_each(Particle::update);
    }
    particles.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARTICLE: Particle = Particle {id: 0, position: [-717, -4557, 2578], velocity: [153, 21, 30], acceleration: [-8, 8, -7]};

    #[test]
    fn parses_particles() {
        assert_eq!(parse("p=<-717,-4557,2578>, v=<153,21,30>, a=<-8,8,-7>").unwrap(), vec![PARTICLE]);
        assert_eq!(parse("p=< 3,0,0>, v=< 2,0,0>, a=<-1,0,0>").unwrap()[0].position, [3, 0, 0]);
        assert!(parse("p=<1,2>, v=<1,2,3>, a=<1,2,3>").is_err());
        assert!(parse("p=<99999999999,0,0>, v=<0,0,0>, a=<0,0,0>").is_err());
    }

    #[test]
    fn updates() {
        let mut particle = PARTICLE;
        particle.update();
        assert_eq!(particle.velocity, [145, 29, 23]);
        assert_eq!(particle.position, [-572, -4528, 2601]);
        assert_eq!(particle.acceleration, PARTICLE.acceleration);
    }

    #[test]
    fn vectors() {
        assert_eq!(plus([1, 2, 3], [4, 5, 6]), [5, 7, 9]);
        assert_eq!(magnitude([3, -3, 3]), 9);
    }

    #[test]
    fn closest_in_the_long_run() {
        assert_eq!(solve(1, "p=<3,0,0>, v=<2,0,0>, a=<-1,0,0>\np=<4,0,0>, v=<0,0,0>, a=<-2,0,0>").unwrap(), "0");
        // all three accelerate equally; one starts further out and one slower
        let tie = "\
p=<3,0,0>, v=<-2,0,0>, a=<-1,0,0>
p=<0,4,0>, v=<0,0,0>, a=<0,1,0>
p=<4,0,4>, v=<0,0,1>, a=<0,0,-1>
";
        assert_eq!(solve(1, tie).unwrap(), "2");
    }

    #[test]
    fn twins_never_separate() {
        let twins = "p=<1,0,0>, v=<0,0,0>, a=<1,0,0>\np=<1,0,0>, v=<0,0,0>, a=<1,0,0>";
        assert!(matches!(solve(1, twins), Err(PuzzleError::NoSolution(_))));
        assert_eq!(solve(2, twins).unwrap(), "0");
    }

    #[test]
    fn collisions() {
        let example = "\
p=<-6,0,0>, v=<3,0,0>, a=<0,0,0>
p=<-4,0,0>, v=<2,0,0>, a=<0,0,0>
p=<-2,0,0>, v=<1,0,0>, a=<0,0,0>
p=<3,0,0>, v=<-1,0,0>, a=<0,0,0>
";
        assert_eq!(solve(2, example).unwrap(), "1");
    }
}
