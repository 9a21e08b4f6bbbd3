//! Session configuration, validated once before a controller is built.

use crate::core::actions::render_frame::RenderStrategy;
use crate::core::data::grid_size::{GridSize, GridSizeError};
use crate::core::data::iteration_budget::{
    BudgetOptions, DEFAULT_BUDGET_OPTIONS, IterationBudget, IterationBudgetError,
};
use std::error::Error;
use std::fmt;

pub const DEFAULT_GRID_EDGE: u32 = 600;

pub const ENV_GRID: &str = "MANDELBROT_GRID";
pub const ENV_BUDGET: &str = "MANDELBROT_BUDGET";
pub const ENV_BUDGET_OPTIONS: &str = "MANDELBROT_BUDGET_OPTIONS";
pub const ENV_STRATEGY: &str = "MANDELBROT_STRATEGY";

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Grid(GridSizeError),
    Budget(IterationBudgetError),
    InvalidEnvValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "invalid grid configuration: {}", err),
            Self::Budget(err) => write!(f, "invalid budget configuration: {}", err),
            Self::InvalidEnvValue { key, value } => {
                write!(f, "invalid value {:?} for {}", value, key)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::Budget(err) => Some(err),
            Self::InvalidEnvValue { .. } => None,
        }
    }
}

impl From<GridSizeError> for ConfigError {
    fn from(err: GridSizeError) -> Self {
        Self::Grid(err)
    }
}

impl From<IterationBudgetError> for ConfigError {
    fn from(err: IterationBudgetError) -> Self {
        Self::Budget(err)
    }
}

/// Unvalidated settings as a caller or the environment supplies them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub grid_edge: u32,
    pub budget_options: Vec<u32>,
    pub initial_budget: u32,
    pub render_strategy: RenderStrategy,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            grid_edge: DEFAULT_GRID_EDGE,
            budget_options: DEFAULT_BUDGET_OPTIONS.to_vec(),
            initial_budget: DEFAULT_BUDGET_OPTIONS[0],
            render_strategy: RenderStrategy::default(),
        }
    }
}

/// Settings that passed validation; the controller only ever holds these.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub grid: GridSize,
    pub budget_options: BudgetOptions,
    pub initial_budget: IterationBudget,
    pub render_strategy: RenderStrategy,
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let grid = GridSize::new(self.grid_edge)?;
        let budget_options = BudgetOptions::new(self.budget_options.clone())?;
        let initial_budget = budget_options.select(self.initial_budget)?;

        Ok(ValidatedConfig {
            grid,
            budget_options,
            initial_budget,
            render_strategy: self.render_strategy,
        })
    }

    /// Defaults overlaid with `MANDELBROT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_GRID) {
            config.grid_edge = parse_u32(ENV_GRID, &value)?;
        }

        if let Some(value) = lookup(ENV_BUDGET_OPTIONS) {
            config.budget_options = value
                .split(',')
                .map(|part| parse_u32(ENV_BUDGET_OPTIONS, part))
                .collect::<Result<_, _>>()?;
            config.initial_budget = config.budget_options.first().copied().unwrap_or(0);
        }

        if let Some(value) = lookup(ENV_BUDGET) {
            config.initial_budget = parse_u32(ENV_BUDGET, &value)?;
        }

        if let Some(value) = lookup(ENV_STRATEGY) {
            config.render_strategy = match value.trim().to_ascii_lowercase().as_str() {
                "serial" => RenderStrategy::Serial,
                "parallel" => RenderStrategy::Parallel,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        key: ENV_STRATEGY,
                        value,
                    });
                }
            };
        }

        Ok(config)
    }
}

fn parse_u32(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnvValue {
            key,
            value: value.to_string(),
        })
}
