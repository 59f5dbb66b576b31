#![deny(clippy::all)]

use clap::{value_t, App, Arg};

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::fs::File;
use std::io::{self, Read};

use geometry::coord2d::layout::{Layout, LayoutError};
use geometry::coord2d::{ParsePointError, Point};

pub mod agents;

pub use agents::{solve, Algorithm, Heuristic, ProblemKind, SearchOptions, Solution};

type Error = anyhow::Error;

pub fn solver() -> Result<(), Error> {
    let matches = App::new("pacsearch")
        .version("0.1")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Search maze layouts with classic graph search algorithms")
        .arg(
            Arg::with_name("layout")
                .value_name("LAYOUT")
                .help("Layout file to search, or - for stdin")
                .required(true)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("ALGORITHM")
                .help("dfs, bfs, ucs or astar (or depthFirstSearch, ...)")
                .takes_value(true)
                .default_value("dfs"),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .value_name("HEURISTIC")
                .help("null, manhattan, euclidean or corners, used by astar")
                .takes_value(true)
                .default_value("null"),
        )
        .arg(
            Arg::with_name("problem")
                .short("p")
                .long("problem")
                .value_name("PROBLEM")
                .possible_values(&["position", "corners"])
                .takes_value(true)
                .default_value("position"),
        )
        .arg(
            Arg::with_name("goal")
                .short("g")
                .long("goal")
                .value_name("X,Y")
                .help("Goal square for the position problem")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more about the search, repeat for more detail"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let options = SearchOptions {
        algorithm: value_t!(matches, "algorithm", Algorithm)?,
        heuristic: value_t!(matches, "heuristic", Heuristic)?,
        problem: value_t!(matches, "problem", ProblemKind)?,
        goal: matches
            .value_of("goal")
            .map(|g| g.parse::<Point>())
            .transpose()
            .map_err(AppError::InvalidGoal)?,
    };
    debug!(?options, "Parsed options");

    let layout = read_layout(matches.value_of("layout").unwrap_or("-"))?;
    let solution = solve(&layout, &options)?;

    if solution.actions.is_empty() && !solution.reached_goal {
        println!("No path found");
        return Ok(());
    }

    println!(
        "Path found with total cost of {} in {:.3} seconds",
        solution.cost,
        solution.elapsed.as_secs_f64()
    );
    println!("Search nodes expanded: {}", solution.expanded);
    let actions: Vec<String> = solution.actions.iter().map(|a| a.to_string()).collect();
    println!("{}", actions.join(", "));

    Ok(())
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Read a layout from a file, or from stdin when the filename is `-`.
pub fn read_layout(filename: &str) -> Result<Layout, AppError> {
    let mut reader: Box<dyn Read + 'static> = match filename {
        "-" => Box::new(io::stdin()),
        path => {
            let f = File::open(path)
                .map_err(|e| AppError::LayoutNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };

    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(source.parse()?)
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown search algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown heuristic: {0}")]
    UnknownHeuristic(String),

    #[error("Unknown problem: {0}")]
    UnknownProblem(String),

    #[error("Heuristic {0:?} does not apply to the {1} problem")]
    HeuristicNotApplicable(Heuristic, ProblemKind),

    #[error("Goal {0} is not an open square")]
    GoalNotTraversable(Point),

    #[error("Invalid goal")]
    InvalidGoal(#[source] ParsePointError),

    #[error("Layout not found: {0}")]
    LayoutNotFound(String, #[source] io::Error),

    #[error("Invalid layout")]
    InvalidLayout(#[from] LayoutError),

    #[error("Unable to read layout")]
    ReadLayout(#[from] io::Error),
}
