use clap::Parser;
use tracing_subscriber::EnvFilter;

use water_jug::{DEFAULT_TARGET, PuzzleState, Solver};

#[derive(Parser)]
#[command(version, about = "Searches for a pour sequence that leaves a container holding the target amount", long_about = None)]
struct Cli {
    /// Containers as capacity:fill pairs, e.g. `3:0 5:0 8:8`.
    /// Omitting them uses the classic three-jug puzzle.
    #[arg(value_parser = parse_container)]
    containers: Vec<(usize, usize)>,

    /// Amount of water some container must end up holding
    #[arg(short, long, default_value_t = DEFAULT_TARGET)]
    target: usize,
}

fn parse_container(raw: &str) -> Result<(usize, usize), String> {
    let (capacity, fill) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected capacity:fill, got `{raw}`"))?;
    let capacity = capacity
        .parse()
        .map_err(|e| format!("bad capacity `{capacity}`: {e}"))?;
    let fill = fill.parse().map_err(|e| format!("bad fill `{fill}`: {e}"))?;
    Ok((capacity, fill))
}

fn main() -> water_jug::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let initial = if cli.containers.is_empty() {
        PuzzleState::default()
    } else {
        PuzzleState::new(&cli.containers)?
    };

    println!("Puzzle: {initial}  (target {})", cli.target);
    let mut solver = Solver::new(initial, cli.target);
    if solver.is_solvable()? {
        println!("Solvable. Pour sequence:");
        if let Some(trace) = solver.solution_trace() {
            for state in trace {
                println!("  {state}");
            }
        }
    } else {
        println!(
            "Not solvable ({} states explored).",
            solver.get_tree().len()
        );
    }
    Ok(())
}
