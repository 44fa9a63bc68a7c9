//! Multi-source aggregation.

use crate::config::{ConfigError, FieldConfig};
use crate::field::DistanceField;
use crate::filter::WallAdjacentField;
use nook_core::{Coord, Distance, GridError};
use nook_grid::Grid;
use nook_search::SearchRun;
use tracing::{debug, debug_span, warn};

/// Runs one traversal per source and merges them into one field.
///
/// Sources are processed in selection order. Each run works on its own
/// deep copy of the base grid. Before run `i > 0`, the cell of source
/// `i - 1` is pre-loaded with the exclusion distance so it does not act
/// as a second origin; only the immediately preceding source is treated
/// this way. Each run's wall-adjacent cells are merged with a
/// strictly-less comparison, so the earliest run wins ties.
///
/// The aggregator holds only configuration, so the same inputs always
/// produce the same output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aggregator {
    exclusion_distance: Distance,
}

impl Aggregator {
    /// An aggregator with the default exclusion distance (600).
    pub fn new() -> Self {
        Self {
            exclusion_distance: FieldConfig::DEFAULT_EXCLUSION,
        }
    }

    /// An aggregator using a validated configuration's exclusion distance.
    pub fn with_config(config: &FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            exclusion_distance: config.exclusion_distance,
        })
    }

    /// The distance pre-loaded on the previous source.
    pub fn exclusion_distance(&self) -> Distance {
        self.exclusion_distance
    }

    /// Whether the exclusion distance exceeds every shortest path on
    /// `base`, so a preceding source that keeps it can never win a merge.
    pub fn exclusion_clears(&self, base: &Grid) -> bool {
        self.exclusion_distance
            .get()
            .is_some_and(|d| u64::from(d) > base.diameter())
    }

    /// Run `sources[i]` on its own copy of `base`, pre-loading
    /// `sources[i - 1]` with the exclusion distance when `i > 0`.
    fn run_for(&self, base: &Grid, sources: &[Coord], i: usize) -> Result<SearchRun, GridError> {
        let source = sources[i];
        match i.checked_sub(1).map(|prev| sources[prev]) {
            Some(previous) => {
                SearchRun::with_exclusion(base, source, previous, self.exclusion_distance)
            }
            None => SearchRun::from_source(base, source),
        }
    }

    /// Run every source and return the full accumulator.
    ///
    /// # Errors
    ///
    /// `GridError::CoordOutOfBounds` if any source lies outside `base`.
    /// All sources are checked before the first run.
    pub fn accumulate(&self, base: &Grid, sources: &[Coord]) -> Result<DistanceField, GridError> {
        for source in sources {
            base.check_bounds(*source)?;
        }

        let _span = debug_span!(
            "aggregate",
            sources = sources.len(),
            rows = base.rows(),
            cols = base.cols()
        )
        .entered();

        if sources.len() > 1 && !self.exclusion_clears(base) {
            warn!(
                exclusion_distance = %self.exclusion_distance,
                diameter = base.diameter(),
                "exclusion distance does not exceed the base grid diameter"
            );
        }

        let mut field = DistanceField::for_grid(base);
        for (i, source) in sources.iter().copied().enumerate() {
            let run = self.run_for(base, sources, i)?;
            let overwritten = field.merge(run.visited());
            debug!(
                run = i,
                %source,
                visited = run.visited().len(),
                overwritten,
                "merged source run"
            );
        }
        Ok(field)
    }

    /// Run every source and return the wall-adjacent subset.
    ///
    /// An empty `sources` yields an empty field with `max_distance` zero.
    pub fn aggregate(
        &self,
        base: &Grid,
        sources: &[Coord],
    ) -> Result<WallAdjacentField, GridError> {
        let field = self.accumulate(base, sources)?.wall_adjacent();
        debug!(
            reported = field.len(),
            max_distance = %field.max_distance(),
            "wall-adjacent field ready"
        );
        Ok(field)
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Aggregator::aggregate`] with the default configuration.
pub fn aggregate(base: &Grid, sources: &[Coord]) -> Result<WallAdjacentField, GridError> {
    Aggregator::new().aggregate(base, sources)
}
