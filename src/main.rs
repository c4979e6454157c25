use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aoc2017::input::read_trimmed;

#[derive(Parser)]
#[command(name = "aoc2017", about = "Advent of Code 2017 solutions")]
struct Cli {
    /// Day to solve
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 25))]
    day: u8,

    /// Part to solve
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 2))]
    part: u8,

    /// Use example input N (`day{DAY}test{N}.in`) instead of `day{DAY}.in`
    #[arg(short, long, value_name = "N")]
    test: Option<u32>,

    /// Directory holding the puzzle inputs
    #[arg(long, env = "AOC_INPUT_DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Read the puzzle input from this file instead
    #[arg(short, long, conflicts_with = "test")]
    input: Option<PathBuf>,
}

impl Cli {
    fn input_path(&self) -> PathBuf {
        match (&self.input, self.test) {
            (Some(path), _) => path.clone(),
            (None, Some(test)) => self.input_dir.join(format!("day{}test{}.in", self.day, test)),
            (None, None) => self.input_dir.join(format!("day{}.in", self.day)),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aoc2017=info")))
        .with_writer(std::io::stderr)
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> aoc2017::Result<()> {
    let path = cli.input_path();
    info!(day = cli.day, part = cli.part, input = %path.display(), "solving");

    let input = read_trimmed(&path)?;
    let time = std::time::Instant::now();
    let answer = aoc2017::solve(cli.day, cli.part, &input)?;
    println!("{}", answer);
    info!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
