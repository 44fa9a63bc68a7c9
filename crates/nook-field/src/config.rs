//! Field configuration, validation, and error types.
//!
//! [`FieldConfig`] holds the grid dimensions and the exclusion distance
//! used by the [`Aggregator`](crate::Aggregator).
//! [`validate()`](FieldConfig::validate) checks structural invariants
//! before anything is allocated.

use std::error::Error;
use std::fmt;

use nook_core::{Distance, GridError};
use nook_grid::Grid;
use tracing::warn;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`FieldConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid construction failed.
    Grid(GridError),
    /// A dimension is zero.
    ZeroDimension {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
    },
    /// A dimension exceeds [`Grid::MAX_DIM`].
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The configured value.
        value: u32,
    },
    /// The exclusion distance is zero or infinite.
    InvalidExclusion {
        /// The invalid value.
        value: Distance,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ZeroDimension { name } => write!(f, "{name} must be at least 1"),
            Self::DimensionTooLarge { name, value } => {
                write!(f, "{name} = {value} exceeds maximum of {}", Grid::MAX_DIM)
            }
            Self::InvalidExclusion { value } => {
                write!(
                    f,
                    "exclusion_distance must be finite and positive, got {value}"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── FieldConfig ────────────────────────────────────────────────────

/// Dimensions and aggregation parameters for one visualization setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    /// Number of grid rows. Default: 20.
    pub rows: u32,
    /// Number of grid columns. Default: 50.
    pub cols: u32,
    /// Distance pre-loaded on the previous source before each run after
    /// the first. Should exceed any real path length on the grid.
    /// Default: 600.
    pub exclusion_distance: Distance,
}

impl FieldConfig {
    /// Default exclusion distance.
    pub const DEFAULT_EXCLUSION: Distance = Distance::new(600);

    /// Check structural invariants.
    ///
    /// An exclusion distance that does not exceed the Manhattan diameter of
    /// the grid [`grid()`](Self::grid) builds is accepted but logged at
    /// `warn`: a previous source that far from the current one keeps the
    /// sentinel and its surroundings are expanded from it. `rows` and
    /// `cols` only describe that grid; [`Aggregator::aggregate`] repeats
    /// the check against whatever base grid it is given.
    ///
    /// [`Aggregator::aggregate`]: crate::Aggregator::aggregate
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value == 0 {
                return Err(ConfigError::ZeroDimension { name });
            }
            if value > Grid::MAX_DIM {
                return Err(ConfigError::DimensionTooLarge { name, value });
            }
        }
        match self.exclusion_distance.get() {
            Some(d) if d > 0 => {
                if u64::from(d) <= self.diameter() {
                    warn!(
                        exclusion_distance = d,
                        diameter = self.diameter(),
                        rows = self.rows,
                        cols = self.cols,
                        "exclusion distance does not exceed the grid diameter"
                    );
                }
                Ok(())
            }
            _ => Err(ConfigError::InvalidExclusion {
                value: self.exclusion_distance,
            }),
        }
    }

    /// Longest shortest path on an open grid of these dimensions:
    /// corner to opposite corner.
    pub fn diameter(&self) -> u64 {
        (u64::from(self.rows) + u64::from(self.cols)).saturating_sub(2)
    }

    /// Validate and build an empty base grid with these dimensions.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        self.validate()?;
        Ok(Grid::new(self.rows, self.cols)?)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            exclusion_distance: Self::DEFAULT_EXCLUSION,
        }
    }
}
