//! Fluent builder for constructing a [`Sim`].

use seg_core::{Round, SimConfig, SimRng};
use seg_grid::SegregationGrid;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: dimensions, ratios, seed, round count, snapshot interval
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                                  |
/// |---------------|----------------------------------------------------------|
/// | `.grid(g)`    | Random layout from `config` via `SegregationGrid::new`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .grid(SegregationGrid::from_layout(2, 2, 0.5, cells)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    grid:   Option<SegregationGrid>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, grid: None }
    }

    /// Start from an explicit grid instead of a random layout.
    ///
    /// Its dimensions must match `config`.  The grid's own threshold and
    /// empty fraction replace `config.similarity_threshold` and
    /// `config.empty_ratio`, so `Sim::config` describes the grid that runs.
    /// The RNG is still seeded from `config.seed`, but no shuffle is drawn
    /// from it.
    pub fn grid(mut self, grid: SegregationGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Validate inputs, seed the RNG, lay out the grid, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let mut config = self.config;
        config.validate()?;

        let mut rng = SimRng::new(config.seed);

        let grid = match self.grid {
            Some(g) => {
                if (g.width(), g.height()) != (config.width, config.height) {
                    return Err(SimError::GridMismatch {
                        width:      config.width,
                        height:     config.height,
                        got_width:  g.width(),
                        got_height: g.height(),
                    });
                }
                config.similarity_threshold = g.threshold();
                config.empty_ratio = g.empty_count() as f64 / g.cell_count() as f64;
                g
            }
            None => SegregationGrid::from_config(&config, &mut rng)?,
        };

        Ok(Sim {
            config,
            current_round:   Round::ZERO,
            grid,
            rng,
            initial_emitted: false,
        })
    }
}
