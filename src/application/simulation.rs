use crate::application::{
    Command, Settings, MAX_CELL_SIZE, MAX_UPDATES_PER_SECOND, MIN_CELL_SIZE,
    MIN_UPDATES_PER_SECOND,
};
use crate::domain::{presets, Grid};

/// Grids at or above this edge length step on the row-parallel path
const PARALLEL_THRESHOLD: usize = 200;

/// SimulationState owns everything the animation loop touches: the current
/// grid, the user settings, and the run/pause flag. Commands and ticks
/// consume the state and return its successor, so no other module holds
/// mutable simulation data.
pub struct SimulationState {
    pub grid: Grid,
    pub settings: Settings,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    /// Preset index armed for placement (None = normal editing)
    pub pending_pattern: Option<usize>,
}

impl SimulationState {
    /// Create a paused state with an all-dead grid of the configured size
    pub fn new(settings: Settings) -> Self {
        Self {
            grid: Grid::new(settings.grid_size, settings.grid_size),
            settings,
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            pending_pattern: None,
        }
    }

    /// Apply one user command and return the updated state
    pub fn apply(mut self, command: Command) -> Self {
        match command {
            Command::Reset => {
                self.grid = Grid::new(self.settings.grid_size, self.settings.grid_size);
                self.generation = 0;
                self.is_running = false;
            }
            Command::TogglePause => {
                self.is_running = !self.is_running;
            }
            Command::Randomize => {
                log::debug!(
                    "randomizing {0}x{0} grid at p={1}",
                    self.settings.grid_size,
                    self.settings.live_probability
                );
                self.grid = Grid::random(
                    self.settings.grid_size,
                    self.settings.grid_size,
                    self.settings.live_probability,
                );
                self.generation = 0;
                self.is_running = false;
            }
            Command::StepOnce => {
                self.grid = self.step_grid();
                self.generation += 1;
                self.is_running = false;
            }
            Command::Resize(size) => {
                let size = size.max(1);
                log::debug!("resizing grid to {0}x{0}", size);
                self.settings.grid_size = size;
                self.grid = Grid::new(size, size);
                self.generation = 0;
                self.is_running = false;
            }
            Command::SetCellSize(pixels) => {
                self.settings.cell_size = pixels.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
            }
            Command::AdjustSpeed(delta) => {
                self.settings.updates_per_second = (self.settings.updates_per_second + delta)
                    .clamp(MIN_UPDATES_PER_SECOND, MAX_UPDATES_PER_SECOND);
            }
            Command::ToggleCell { x, y } => {
                // Pointer edits pause the animation
                self.grid.toggle(x, y);
                self.is_running = false;
            }
            Command::SelectPattern(index) => {
                if index < presets::all_patterns().len() {
                    self.pending_pattern = Some(index);
                    self.is_running = false;
                }
            }
            Command::PlacePattern { x, y } => {
                if let Some(index) = self.pending_pattern.take() {
                    let pattern = &presets::all_patterns()[index];
                    let left = x.saturating_sub(pattern.width / 2);
                    let top = y.saturating_sub(pattern.height / 2);
                    pattern.place_on(&mut self.grid, left, top);
                }
            }
            Command::CancelPattern => {
                self.pending_pattern = None;
            }
        }
        self
    }

    /// Advance the animation clock by one frame. Steps the grid once per
    /// due update interval while running; each tick performs at most one
    /// complete, non-overlapping stepper call.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.settings.updates_per_second;

        if self.update_timer >= update_interval {
            self.grid = self.step_grid();
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }

    fn step_grid(&self) -> Grid {
        let (width, _) = self.grid.dimensions();
        if width >= PARALLEL_THRESHOLD {
            self.grid.step_parallel()
        } else {
            self.grid.step()
        }
    }
}
