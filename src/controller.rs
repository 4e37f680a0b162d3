use rand::Rng;
use rand::distr::Bernoulli;
use rand::distr::Distribution;
use tracing::debug;
use tracing::info;

use crate::cell::CellState;
use crate::evolution;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::rule_set::RuleSet;

/// Chance of a cell starting out alive when a grid is randomly initialized.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.2;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    #[default]
    Stopped,
    Running,
}

/// Owns the live grid, the rules it evolves under, and whether it is running.
///
/// A `Simulation` holds no timer. Whoever drives it pairs [`Simulation::start`] and
/// [`Simulation::stop`] with arming and cancelling their own clock, and calls
/// [`Simulation::step`] when that clock fires. It is meant for single threaded use: callers
/// stop the clock before editing cells through [`Simulation::grid_mut`].
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    rules: RuleSet,
    state: SimulationState,

    /// Number of steps since the grid was last initialized or cleared
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid, rules: RuleSet) -> Self {
        Self {
            grid,
            rules,
            state: SimulationState::Stopped,
            generation: 0,
        }
    }

    /// Create a stopped simulation over a randomly filled grid.
    pub fn random(
        rows: usize,
        columns: usize,
        live_probability: f64,
        rules: RuleSet,
    ) -> Result<Self, GridError> {
        let grid = random_grid(rows, columns, live_probability, &mut rand::rng())?;

        Ok(Self::new(grid, rules))
    }

    /// Replace the grid with a new random one, see [`Simulation::initialize_with`].
    pub fn initialize(
        &mut self,
        rows: usize,
        columns: usize,
        live_probability: f64,
    ) -> Result<(), GridError> {
        self.initialize_with(rows, columns, live_probability, &mut rand::rng())
    }

    /// Replace the grid with a new `rows x columns` one where each cell is independently alive
    /// with probability `live_probability`. The run state is left as is.
    pub fn initialize_with<R>(
        &mut self,
        rows: usize,
        columns: usize,
        live_probability: f64,
        rng: &mut R,
    ) -> Result<(), GridError>
    where
        R: Rng + ?Sized,
    {
        self.grid = random_grid(rows, columns, live_probability, rng)?;
        self.generation = 0;

        info!(
            rows,
            columns,
            live_probability,
            population = self.grid.population(),
            "initialized grid"
        );

        Ok(())
    }

    /// Replace the grid with an all dead one of the same dimensions.
    pub fn clear(&mut self) {
        let (rows, columns) = self.grid.dimensions();

        self.grid = self.grid.map(|_, _| CellState::Dead);
        self.generation = 0;

        info!(rows, columns, "cleared grid");
    }

    /// Advance by one generation. Allowed whether running or not.
    pub fn step(&mut self) {
        self.grid = evolution::compute_next(&self.grid, &self.rules);
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "step"
        );
    }

    /// Returns whether the simulation was stopped before this call.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }

        self.state = SimulationState::Running;
        info!(generation = self.generation, "started");

        true
    }

    /// Returns whether the simulation was running before this call.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.state = SimulationState::Stopped;
        info!(generation = self.generation, "stopped");

        true
    }

    /// Start if stopped, stop if running. Returns the new state.
    pub fn toggle_running(&mut self) -> SimulationState {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }

        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Edit access to the live grid, for use with [`crate::editor`]. Don't hold on to it across
    /// a [`Simulation::step`], which replaces the grid.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn random_grid<R>(
    rows: usize,
    columns: usize,
    live_probability: f64,
    rng: &mut R,
) -> Result<Grid, GridError>
where
    R: Rng + ?Sized,
{
    let alive =
        Bernoulli::new(live_probability).map_err(|_| GridError::Probability(live_probability))?;

    Grid::from_fn(rows, columns, |_| alive.sample(rng).into())
}
