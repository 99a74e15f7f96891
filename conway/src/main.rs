// main.rs - Terminal front end for Conway's Game of Life

use anyhow::Context;
use clap::{CommandFactory, Parser, error::ErrorKind};
use conway::patterns::PATTERNS;
use conway::{Glyphs, Simulation, SimulationConfig, TerminalClearer, TextRenderer};
use log::info;
use std::io;
use std::time::Duration;

/// Plays Conway's Game of Life in the terminal.
///
/// Without --iterations the board is redrawn in place until interrupted (Ctrl-C).
#[derive(Debug, Parser)]
#[command(name = "conway", version)]
struct Cli {
    /// Number of rows on the board.
    #[arg(
        short,
        long,
        value_name = "ROWS",
        required_unless_present = "list_patterns",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    rows: Option<u32>,

    /// Number of columns on the board.
    #[arg(
        short,
        long,
        value_name = "COLUMNS",
        required_unless_present = "list_patterns",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    columns: Option<u32>,

    /// Run this many generations and exit instead of streaming forever.
    #[arg(short, long, value_name = "COUNT")]
    iterations: Option<u64>,

    /// Chance that each cell of a random board starts alive.
    #[arg(short, long, value_name = "P", default_value_t = conway::seed::DEFAULT_LIVE_PROBABILITY, value_parser = parse_probability)]
    probability: f64,

    /// Seed for the random board, for reproducible runs.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Start from a named pattern instead of a random board (see --list-patterns).
    #[arg(long, value_name = "NAME")]
    pattern: Option<String>,

    /// List the available patterns and exit.
    #[arg(long)]
    list_patterns: bool,

    /// Character drawn for live cells.
    #[arg(long, value_name = "CHAR", default_value_t = Glyphs::default().alive)]
    alive: char,

    /// Character drawn for dead cells.
    #[arg(long, value_name = "CHAR", default_value_t = Glyphs::default().dead)]
    dead: char,

    /// Milliseconds to wait between streamed generations.
    #[arg(
        long = "delay-ms",
        value_name = "MILLISECONDS",
        default_value_t = 200,
        value_parser = clap::value_parser!(u64).range(0..=60_000)
    )]
    delay_ms: u64,

    /// Stop streaming once the board repeats one of the last few generations.
    #[arg(long)]
    halt_on_cycle: bool,
}

fn parse_probability(arg: &str) -> Result<f64, String> {
    let p: f64 = arg.parse().map_err(|_| format!("'{arg}' is not a number"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{p} is not between 0 and 1"))
    }
}

impl Cli {
    fn into_config(self) -> SimulationConfig {
        let (Some(rows), Some(columns)) = (self.rows, self.columns) else {
            Cli::command()
                .error(ErrorKind::MissingRequiredArgument, "--rows and --columns are required")
                .exit();
        };

        let mut config = SimulationConfig::new(rows as usize, columns as usize)
            .probability(self.probability)
            .glyphs(Glyphs::new(self.alive, self.dead))
            .frame_delay(Duration::from_millis(self.delay_ms))
            .halt_on_cycle(self.halt_on_cycle);
        if let Some(times) = self.iterations {
            config = config.iterations(times);
        }
        if let Some(seed) = self.seed {
            config = config.seed(seed);
        }
        if let Some(pattern) = self.pattern {
            config = config.pattern(pattern);
        }
        config
    }
}

fn list_patterns() {
    for pattern in PATTERNS {
        let (height, width) = pattern.size();
        println!("{:<20} {height}x{width}", pattern.name);
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; default to warnings only so the board stays readable.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();
    if cli.list_patterns {
        list_patterns();
        return Ok(());
    }

    let config = cli.into_config();
    info!("configuration: {config:?}");

    let mut simulation = Simulation::from_config(&config).context("could not set up the board")?;

    match config.iterations {
        Some(times) => {
            let mut renderer = TextRenderer::new(io::stdout(), config.glyphs).with_iteration_headers(true);
            simulation.run(times, &mut renderer).context("bounded run failed")?;
        }
        None => {
            let mut renderer = TextRenderer::new(io::stdout(), config.glyphs);
            let mut clearer = TerminalClearer::stdout();
            simulation.stream(&mut renderer, &mut clearer).context("stream stopped")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rows_and_columns_are_required() {
        let err = Cli::try_parse_from(["conway", "-r", "5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn non_positive_sizes_are_usage_errors() {
        assert!(Cli::try_parse_from(["conway", "-r", "0", "-c", "5"]).is_err());
        assert!(Cli::try_parse_from(["conway", "-r", "-3", "-c", "5"]).is_err());
        assert!(Cli::try_parse_from(["conway", "-r", "abc", "-c", "5"]).is_err());
    }

    #[test]
    fn probability_must_be_a_fraction() {
        assert!(Cli::try_parse_from(["conway", "-r", "5", "-c", "5", "-p", "1.5"]).is_err());
        assert_eq!(parse_probability("0.25"), Ok(0.25));
    }

    #[test]
    fn full_command_line_maps_onto_config() {
        let cli = Cli::try_parse_from([
            "conway", "-r", "8", "-c", "9", "-i", "3", "--seed", "11", "--alive", "#", "--dead", ".",
            "--delay-ms", "0", "--halt-on-cycle",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!((config.rows, config.columns), (8, 9));
        assert_eq!(config.iterations, Some(3));
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.glyphs, Glyphs::new('#', '.'));
        assert_eq!(config.frame_delay, Duration::ZERO);
        assert!(config.halt_on_cycle);
        assert_eq!(config.probability, 0.5);
    }

    #[test]
    fn list_patterns_needs_no_size() {
        let cli = Cli::try_parse_from(["conway", "--list-patterns"]).unwrap();
        assert!(cli.list_patterns);
    }
}
