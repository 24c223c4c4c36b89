use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use std::path::PathBuf;

use crate::lang::Lang;
use crate::snek::Cell;

/// Terminal columns per grid cell, so the board reads as square.
pub const CELL_WIDTH: u16 = 2;
pub const DEFAULT_TILES: i32 = 20;
pub const BASE_SPEED: u32 = 7;
pub const REWARD: u32 = 10;
pub const SPEED_THRESHOLD: u32 = 50;
pub const SPEED_INCREMENT: u32 = 1;
pub const START_CELL: Cell = Cell { x: 5, y: 5 };

// Speed-ups are checked with `score % SPEED_THRESHOLD`, which only ever
// fires if the threshold is reachable in whole rewards.
const _: () = assert!(SPEED_THRESHOLD % REWARD == 0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    /// Board side, in cells.
    pub tile_count: i32,
    /// Ticks per second at the start of every game.
    pub base_speed: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tile_count: DEFAULT_TILES,
            base_speed: BASE_SPEED,
            seed: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gridsnek")]
#[command(version, about = "Grid snake in the terminal")]
pub struct Cli {
    /// Board side length in cells
    #[arg(long, default_value_t = DEFAULT_TILES, value_parser = clap::value_parser!(i32).range(6..=60))]
    pub tiles: i32,

    /// Starting speed in ticks per second
    #[arg(long, default_value_t = BASE_SPEED, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub speed: u32,

    /// UI language
    #[arg(long, value_enum, default_value_t = Lang::Zh)]
    pub lang: Lang,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "gridsnek.log")]
    pub log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            tile_count: self.tiles,
            base_speed: self.speed,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tile_count, 20);
        assert_eq!(config.base_speed, 7);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["gridsnek"]);
        assert_eq!(cli.game_config(), GameConfig::default());
        assert_eq!(cli.lang, Lang::Zh);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert_eq!(cli.log_file, PathBuf::from("gridsnek.log"));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "gridsnek", "--tiles", "12", "--speed", "3", "--lang", "en", "--seed", "42",
        ]);
        let config = cli.game_config();
        assert_eq!(config.tile_count, 12);
        assert_eq!(config.base_speed, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(cli.lang, Lang::En);
    }

    #[test]
    fn test_cli_rejects_tiny_board() {
        // The start cell must be on the board.
        assert!(Cli::try_parse_from(["gridsnek", "--tiles", "5"]).is_err());
        assert!(Cli::try_parse_from(["gridsnek", "--speed", "0"]).is_err());
    }
}
