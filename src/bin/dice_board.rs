//! Command-line runner.
//!
//! Loads a JSON config from the config directory, builds the board, simulates
//! the configured number of turns and writes the results.
//!
//! ```text
//! dice-board --config data.json --format json --runs 3
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn, LevelFilter};

use dice_board::board::{base_board, build_board};
use dice_board::core::{GameRng, SimulationConfig};
use dice_board::output::{result_stem, timestamp_millis, OutputFormat, RunResult};
use dice_board::simulation::{simulate_batch, summarize, VisitSummary};

#[derive(Parser, Debug)]
#[command(name = "dice-board")]
#[command(version)]
#[command(about = "Dice-driven board walk simulator", long_about = None)]
struct Cli {
    /// Config file name, resolved inside --config-dir
    #[arg(short, long, default_value = "data.json")]
    config: PathBuf,

    /// Directory holding config files
    #[arg(long, default_value = "configs")]
    config_dir: PathBuf,

    /// Directory results are written to (created if missing)
    #[arg(short, long, default_value = "results")]
    output_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Number of independent runs on the same board
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Print the built board before simulating
    #[arg(long, default_value_t = false)]
    print_board: bool,

    /// Verbose output
    ///
    /// When specified, sets the log level to `info` and ignores the `RUST_LOG`
    /// environment variable. When not specified, uses `RUST_LOG`
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.main()
}

impl Cli {
    fn main(self) -> Result<()> {
        if self.verbose {
            env_logger::builder().filter_level(LevelFilter::Info).init();
            info!("Verbose output enabled (ignoring RUST_LOG environment variable)");
        } else {
            env_logger::init();
            debug!("Logging configured from environment variables");
        }

        let config_path = self.config_dir.join(&self.config);
        let scenario = SimulationConfig::load(&config_path)
            .with_context(|| format!("Error parsing the config {}", config_path.display()))?;
        info!(
            "loaded {} blocker(s) and {} teleporter(s) from {}",
            scenario.blockers.len(),
            scenario.teleporters.len(),
            config_path.display()
        );

        let board = build_board(base_board(), &scenario.blockers, &scenario.teleporters);
        for dangling in board.dangling_edges() {
            warn!("{dangling}: a run landing there will fail");
        }

        if self.print_board {
            print!("{board}");
        }

        let mut rng = GameRng::from_entropy();
        let runs = simulate_batch(
            &board,
            scenario.starting_position,
            scenario.turns_to_simulate,
            self.runs as usize,
            &mut rng,
        )
        .context("Simulation aborted")?;

        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Could not create {}", self.output_dir.display()))?;

        let writer = self.format.writer();
        let millis = timestamp_millis();
        let mut combined = VisitSummary::new();

        for (i, history) in runs.iter().enumerate() {
            let summary = summarize(history);
            combined.merge(&summary);

            let run = (runs.len() > 1).then_some(i + 1);
            let stem = result_stem(&self.config, millis, run);
            let written = writer
                .write(&self.output_dir, &stem, &RunResult { history, summary: &summary })
                .with_context(|| format!("Could not write results for run {}", i + 1))?;
            for path in written {
                println!("{}", path.display());
            }
        }

        info!(
            "{} run(s) of {} turn(s): {} distinct tile(s) visited",
            runs.len(),
            scenario.turns_to_simulate,
            combined.len()
        );
        if let Some(top) = combined.most_visited() {
            info!("most visited: {} ({} visits)", top.tile, top.visits);
        }

        Ok(())
    }
}
