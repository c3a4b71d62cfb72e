mod algorithms;
mod cli;
mod logging;
mod maze;
mod solvers;

use clap::Parser;
use eyre::Result;
use log::{debug, info};

use algorithms::exploration::{Theseus, WallFollower};
use cli::{Args, ExplorationAlgorithm};
use logging::Logger;
use maze::Grid;
use solvers::{BlindSolver, ExplorationReport};

const DEFAULT_MAP: &str = include_str!("../maps/dungeon.txt");

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let grid = match &args.map {
        Some(path) => {
            info!("loading map: {}", path.display());
            Grid::from_text(&std::fs::read_to_string(path)?)?
        }
        None => {
            debug!("using the bundled dungeon");
            Grid::from_text(DEFAULT_MAP)?
        }
    };

    info!("exploring with {}", args.exploration.name());
    if args.delay > 0 {
        debug!("delay: {}ms", args.delay);
    }

    let report = match args.exploration {
        ExplorationAlgorithm::Theseus => {
            BlindSolver::new(Theseus::new(), args.delay, args.max_steps).solve(&grid)?
        }
        ExplorationAlgorithm::WallFollower => {
            BlindSolver::new(WallFollower::new(), args.delay, args.max_steps).solve(&grid)?
        }
    };

    print_report(&report);
    Ok(())
}

fn print_report(report: &ExplorationReport) {
    info!(
        "covered {} of {} reachable cells in {} steps ({:?})",
        report.visited, report.reachable, report.steps, report.elapsed
    );
}
