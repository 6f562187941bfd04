//! monopoly-sim - Runs a scripted game and prints its status report
//!
//! Loads the players, tiles and rolls files, plays the roll script to the
//! end and writes every snapshot plus the verdict to stdout.

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use monopoly_sim::{
    load_rules, GameResult, GameSetup, JsonLinesReporter, ReportError, RulesConfig, SetupError,
    Simulation, StatusSink, TableReporter,
};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "monopoly-sim")]
#[command(about = "Simulate a Monopoly-style game from a scripted sequence of dice rolls")]
struct Cli {
    /// Players file: `<name> <money>` per line
    players: PathBuf,

    /// Tiles file: `<TYPE> <name> [cost]` per line
    tiles: PathBuf,

    /// Rolls file: `PRINT` or `<d1> <d2>` per line
    rolls: PathBuf,

    /// JSON file overriding the default rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Log every game event once the game is over
    #[arg(long)]
    events: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() {
    let cli = Cli::parse();

    // --events needs info-level output from this binary
    let default_filter = if cli.events { "warn,monopoly_sim=info" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let setup = match load(&cli) {
        Ok(setup) => setup,
        Err(e) => {
            debug!("Failed to load game: {:?}", e);
            println!("{e}");
            std::process::exit(1);
        }
    };

    let board = setup.board.clone();
    let mut simulation = setup.into_simulation();

    let stdout = io::stdout();
    let out = stdout.lock();
    let result = match cli.format {
        Format::Table => run(&mut simulation, TableReporter::new(out, &board)),
        Format::Json => run(&mut simulation, JsonLinesReporter::new(out)),
    };

    match result {
        Ok(result) => info!(%result, "finished"),
        Err(e) => {
            error!("Failed to write report: {}", e);
            std::process::exit(1);
        }
    }

    if cli.events {
        for event in simulation.state().events.iter() {
            info!(%event, "event");
        }
    }
}

fn load(cli: &Cli) -> Result<GameSetup, SetupError> {
    let rules = match &cli.rules {
        Some(path) => load_rules(path)?,
        None => RulesConfig::default(),
    };
    GameSetup::load(&cli.players, &cli.tiles, &cli.rolls, rules)
}

fn run<S: StatusSink>(simulation: &mut Simulation, mut sink: S) -> Result<GameResult, ReportError> {
    simulation.run(&mut sink)
}
