use std::time::Duration;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing::warn;

use crate::brush::Brush;
use crate::clock::IntervalClock;
use crate::config::Config;
use crate::controller::Simulation;
use crate::controller::SimulationState;
use crate::editor;
use crate::events::AppEvent;
use crate::events::Event;
use crate::events::PointerEvent;
use crate::events::SimEvent;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::render::Renderer;
use crate::rule_set::RuleSet;
use crate::viewport::Point;
use crate::viewport::Viewport;

/// How long the event loop may block while the clock is stopped.
const IDLE_TIMEOUT: Duration = Duration::from_millis(250);

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Summary shown alongside the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub generation: u64,
    pub population: usize,
    pub state: SimulationState,
    pub rules: RuleSet,
}

/// Ties a [`Simulation`] to the clock that steps it, the canvas it is drawn on, and the pointer
/// strokes that edit it.
pub struct App {
    sim: Simulation,
    clock: IntervalClock,
    brush: Brush,
    viewport: Viewport,
    rng: StdRng,

    /// Dimensions and density used when re-initializing
    rows: usize,
    columns: usize,
    live_probability: f64,

    show_gridlines: bool,

    /// Canvas dimensions fixed by the config. The others follow the terminal size.
    width: Option<u16>,
    height: Option<u16>,

    /// Set whenever the canvas needs to be redrawn
    dirty: bool,
}

impl App {
    /// Create an app with a random grid on `canvas`, running unless `config.start_paused` is set.
    ///
    /// The grid is shrunk to at most one cell per pixel so that every cell can be seen and
    /// edited, and the canvas is shrunk so that every cell is a whole number of pixels.
    pub fn new(config: &Config, canvas: Viewport, now: Instant) -> Result<Self, GridError> {
        let rows = config.rows.min(usize::from(canvas.height.max(1)));
        let columns = config.columns.min(usize::from(canvas.width.max(1)));

        if (rows, columns) != (config.rows, config.columns) {
            warn!(
                rows,
                columns,
                "{}x{} grid does not fit a {}x{} canvas, shrinking it",
                config.rows,
                config.columns,
                canvas.width,
                canvas.height
            );
        }

        let mut rng = seeded_rng(config.seed);

        let mut sim = Simulation::new(Grid::new(rows, columns)?, config.rules);
        sim.initialize_with(rows, columns, config.live_probability, &mut rng)?;

        let mut app = Self::build(sim, config, canvas.fit(rows, columns), rng);

        if !config.start_paused {
            app.start(now);
        }

        Ok(app)
    }

    /// Wrap an existing simulation, keeping its grid and rules. The clock starts out stopped.
    pub fn with_simulation(sim: Simulation, config: &Config, viewport: Viewport) -> Self {
        Self::build(sim, config, viewport, seeded_rng(config.seed))
    }

    fn build(sim: Simulation, config: &Config, viewport: Viewport, rng: StdRng) -> Self {
        let (rows, columns) = sim.grid().dimensions();

        Self {
            sim,
            clock: IntervalClock::new(config.step_interval),
            brush: Brush::new(),
            viewport,
            rng,
            rows,
            columns,
            live_probability: config.live_probability,
            show_gridlines: config.show_gridlines,
            width: config.width,
            height: config.height,
            dirty: true,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn clock(&self) -> &IntervalClock {
        &self.clock
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn show_gridlines(&self) -> bool {
        self.show_gridlines
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Start the simulation and arm the clock.
    pub fn start(&mut self, now: Instant) {
        self.sim.start();
        self.clock.start(now);
        self.dirty = true;
    }

    /// Stop the simulation and cancel the clock. Returns whether it was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.sim.stop();
        self.clock.stop();
        self.dirty = true;

        was_running
    }

    pub fn handle(&mut self, event: Event, now: Instant) -> Control {
        match event {
            Event::Sim(event) => self.handle_sim(event, now),
            Event::Pointer(event) => self.handle_pointer(event, now),
            Event::App(AppEvent::ToggleGridlines) => {
                self.show_gridlines = !self.show_gridlines;
                self.dirty = true;
            }
            Event::App(AppEvent::Resize { cols, rows }) => self.resize(cols, rows),
            Event::App(AppEvent::Exit) => return Control::Exit,
        }

        Control::Continue
    }

    fn handle_sim(&mut self, event: SimEvent, now: Instant) {
        match event {
            SimEvent::Initialize => {
                let res = self.sim.initialize_with(
                    self.rows,
                    self.columns,
                    self.live_probability,
                    &mut self.rng,
                );

                // Dimensions and probability were validated when the app was built
                if let Err(e) = res {
                    warn!("Failed to initialize grid: {e}");
                }
            }
            SimEvent::Clear => self.sim.clear(),
            SimEvent::ToggleAuto => {
                if self.sim.is_running() {
                    self.stop();
                } else {
                    self.start(now);
                }
            }
            SimEvent::Step => self.sim.step(),
        }

        self.dirty = true;
    }

    fn handle_pointer(&mut self, event: PointerEvent, now: Instant) {
        match event {
            PointerEvent::Press(point) => self.press(point),
            PointerEvent::Drag(point) => self.drag(point),
            PointerEvent::Release => self.release(now),
        }
    }

    /// Begin a stroke at `point`, pausing the simulation until the stroke is released.
    fn press(&mut self, point: Point) {
        let coord = self.viewport.cell_at(point, self.sim.grid());
        let under = editor::get_state(self.sim.grid(), coord);

        let resume = self.stop();
        let paint = self.brush.begin(under, resume);

        editor::set_state(self.sim.grid_mut(), coord, paint);
        self.dirty = true;

        debug!(row = coord.row, column = coord.column, ?paint, resume, "stroke began");
    }

    fn drag(&mut self, point: Point) {
        let Some(paint) = self.brush.paint() else {
            return;
        };

        let coord = self.viewport.cell_at(point, self.sim.grid());
        if editor::set_state(self.sim.grid_mut(), coord, paint) {
            self.dirty = true;
        }
    }

    fn release(&mut self, now: Instant) {
        if self.brush.end() {
            self.start(now);
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        let canvas = canvas_size(self.width, self.height, cols, rows);
        self.viewport = canvas.fit(self.rows, self.columns);

        self.dirty = true;
    }

    /// Step the simulation if the clock says a tick is due. Returns whether it stepped.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.sim.is_running() || !self.clock.fire(now) {
            return false;
        }

        self.sim.step();
        self.dirty = true;

        true
    }

    /// How long the event loop may wait for input before the next tick.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.clock.timeout(now, IDLE_TIMEOUT)
    }

    pub fn status(&self) -> Status {
        Status {
            generation: self.sim.generation(),
            population: self.sim.grid().population(),
            state: self.sim.state(),
            rules: *self.sim.rules(),
        }
    }

    /// Draw the grid if anything changed since the last draw. Returns whether it drew.
    pub fn render<R: Renderer>(&mut self, renderer: &mut R) -> Result<bool, R::Error> {
        if !self.dirty {
            return Ok(false);
        }

        renderer.set_gridlines(self.show_gridlines);
        renderer.draw(self.sim.grid(), self.viewport.width, self.viewport.height)?;
        self.dirty = false;

        Ok(true)
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Canvas for a `cols x rows` terminal. Dimensions not given fill the terminal, leaving the last
/// line for the status bar.
pub fn canvas_size(width: Option<u16>, height: Option<u16>, cols: u16, rows: u16) -> Viewport {
    Viewport::new(
        width.unwrap_or(cols.max(1)),
        height.unwrap_or(rows.saturating_sub(1).max(1)),
    )
}
