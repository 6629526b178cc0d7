//! Game tuning: padding, token sizes per board width and difficulty counts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::SizeRange;

pub const DEFAULT_PADDING: f64 = 16.0;
/// Count used when a difficulty has no entry in the table.
pub const FALLBACK_COUNT: usize = 120;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Insane => "insane",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Insane => "Insane",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.key() == s)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown difficulty '{s}'")))
    }
}

/// Token counts per difficulty. Missing entries fall back to [`FALLBACK_COUNT`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    pub easy: Option<usize>,
    pub normal: Option<usize>,
    pub hard: Option<usize>,
    pub insane: Option<usize>,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: Some(45),
            normal: Some(90),
            hard: Some(150),
            insane: Some(240),
        }
    }
}

impl DifficultyTable {
    pub fn count(&self, difficulty: Difficulty) -> usize {
        let entry = match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
            Difficulty::Insane => self.insane,
        };
        entry.unwrap_or(FALLBACK_COUNT)
    }
}

/// Token size range that applies from `min_board_width` upward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeBreakpoint {
    pub min_board_width: f64,
    pub sizes: SizeRange,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub padding: f64,
    /// Sorted by `min_board_width` on load.
    pub size_breakpoints: Vec<SizeBreakpoint>,
    pub amounts: DifficultyTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            size_breakpoints: vec![SizeBreakpoint {
                min_board_width: 0.0,
                sizes: SizeRange::default(),
            }],
            amounts: DifficultyTable::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: GameConfig = serde_json::from_str(raw)?;
        config
            .size_breakpoints
            .sort_by(|a, b| a.min_board_width.total_cmp(&b.min_board_width));
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::Invalid(format!("padding {} must be >= 0", self.padding)));
        }
        if self.size_breakpoints.is_empty() {
            return Err(ConfigError::Invalid("at least one size breakpoint is required".into()));
        }
        for bp in &self.size_breakpoints {
            bp.sizes
                .validate()
                .map_err(|err| ConfigError::Invalid(format!("breakpoint {}: {err}", bp.min_board_width)))?;
        }
        Ok(())
    }

    pub fn count_for(&self, difficulty: Difficulty) -> usize {
        self.amounts.count(difficulty)
    }

    /// Size range of the widest breakpoint not exceeding `board_width`.
    pub fn size_range_for(&self, board_width: f64) -> SizeRange {
        self.size_breakpoints
            .iter()
            .rev()
            .find(|bp| bp.min_board_width <= board_width)
            .or_else(|| self.size_breakpoints.first())
            .map(|bp| bp.sizes)
            .unwrap_or_default()
    }
}
