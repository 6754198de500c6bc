use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use slider_search::{
    config::SearchConfig,
    input::{format_result, PuzzleInput},
    puzzle::Board,
    render,
    search::{self, Algorithm, SearchOutcome},
};

#[derive(Parser)]
#[command(name = "slider-search", version, about = "Sliding-tile puzzle search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle described in INPUT and write the result line.
    Solve {
        input: PathBuf,

        /// Result file (defaults to the config value, `output.txt`).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Depth cap for iterative deepening.
        #[arg(long)]
        max_depth: Option<usize>,

        /// Print every board along the solution.
        #[arg(long)]
        show: bool,
    },
    /// Write a random solvable puzzle file.
    Generate {
        #[arg(short, long, default_value_t = 3)]
        size: usize,

        /// Random-walk length from the goal. Without it the board is
        /// shuffled uniformly.
        #[arg(short, long)]
        moves: Option<usize>,

        /// Selector written on the first line (1 IDS, 2 BFS, 3 A*).
        #[arg(short, long, default_value = "3")]
        algorithm: String,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, default_value = "input.txt")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Solve {
            input,
            output,
            config,
            max_depth,
            show,
        } => {
            let mut config = match config {
                Some(path) => SearchConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => SearchConfig::default(),
            };
            if let Some(depth) = max_depth {
                config = config.with_ids_max_depth(depth);
            }
            if let Some(path) = output {
                config = config.with_output(path);
            }
            solve(&input, &config, show)
        }
        Command::Generate {
            size,
            moves,
            algorithm,
            seed,
            output,
        } => generate(size, moves, &algorithm, seed, &output),
    }
}

fn solve(input: &Path, config: &SearchConfig, show: bool) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let puzzle: PuzzleInput = text
        .parse()
        .with_context(|| format!("Invalid puzzle file {}", input.display()))?;

    if config.precheck_solvable && !puzzle.board.is_solvable() {
        bail!("board {} cannot reach the goal (parity)", puzzle.board);
    }

    let problem = puzzle.problem();
    info!("Running {} on {}", puzzle.algorithm, puzzle.board);
    let outcome = search::solve(&problem, puzzle.algorithm, config.ids_max_depth)?;

    let solution = match outcome {
        SearchOutcome::Found(solution) => solution,
        SearchOutcome::Exhausted { expanded } => {
            bail!("no solution: search space exhausted after {} expansions", expanded)
        }
        SearchOutcome::DepthLimitReached {
            max_depth,
            expanded,
        } => bail!(
            "no solution within depth {} ({} expansions)",
            max_depth,
            expanded
        ),
    };

    if puzzle.algorithm == Algorithm::Ids && solution.total_expanded != solution.expanded {
        info!(
            "IDS expanded {} boards across all depths",
            solution.total_expanded
        );
    }

    let line = format_result(&solution);
    std::fs::write(&config.output, &line)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    info!("Wrote '{}' to {}", line, config.output.display());

    if show {
        let mut stdout = std::io::stdout();
        render::replay(&mut stdout, &puzzle.board, &solution.actions)
            .context("Failed to draw solution")?;
    }
    Ok(())
}

fn generate(
    size: usize,
    moves: Option<usize>,
    algorithm: &str,
    seed: Option<u64>,
    output: &Path,
) -> anyhow::Result<()> {
    if size == 0 {
        bail!("board size must be at least 1");
    }
    let algorithm: Algorithm = algorithm.parse()?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let board = match moves {
        Some(moves) => Board::scrambled(size, moves, &mut rng),
        None => {
            if size > 3 {
                warn!("uniformly shuffled {}x{} boards can take very long to solve", size, size);
            }
            Board::shuffled(size, &mut rng)
        }
    };

    let puzzle = PuzzleInput { algorithm, board };
    std::fs::write(output, puzzle.to_string())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {} to {}", puzzle.board, output.display());
    Ok(())
}
