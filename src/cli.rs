use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::solver;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Krypto - Solve Krypto numbers puzzles
#[derive(Parser, Debug)]
#[command(name = "krypto")]
#[command(about = "Find every way to combine the cards into the target value")]
#[command(version)]
pub struct CliArgs {
    /// Target value every solution must evaluate to
    pub target: i32,

    /// The puzzle's cards (3 to 5 of them)
    #[arg(num_args = 3..=5, required = true)]
    pub cards: Vec<i32>,

    /// Stop after the first solution instead of enumerating all of them
    #[arg(short, long)]
    pub first: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    info!(
        "Searching for ways to combine {:?} into {}",
        args.cards, args.target
    );

    let mut candidates = solver::solve(args.target, &args.cards).context("Invalid puzzle")?;

    if args.first {
        match candidates.next() {
            Some(solution) => println!("{}", solution.simplify()),
            None => {
                warn!("No solution found");
                println!("No solution.");
            }
        }
        return Ok(());
    }

    let solutions = solver::simplify_all(candidates);
    if solutions.is_empty() {
        warn!("No solution found");
        println!("No solution.");
    } else {
        let solutions = solver::ordered(solutions);
        for solution in &solutions {
            println!("{}", solution);
        }
        println!("Total {} solutions.", solutions.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["krypto", "23", "16", "4", "1", "1", "8"]);
        let args = args.expect("six positional integers should parse");
        assert_eq!(args.target, 23);
        assert_eq!(args.cards, vec![16, 4, 1, 1, 8]);
        assert!(!args.first);
        assert!(matches!(args.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_cli_rejects_too_few_cards() {
        let args = CliArgs::try_parse_from(["krypto", "23", "16", "4"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
