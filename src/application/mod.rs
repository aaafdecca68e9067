mod command;
mod settings;
mod simulation;
mod viewport;

pub use command::Command;
pub use settings::{
    Settings, SettingsError, MAX_CELL_SIZE, MAX_UPDATES_PER_SECOND, MIN_CELL_SIZE,
    MIN_UPDATES_PER_SECOND,
};
pub use simulation::SimulationState;
pub use viewport::Viewport;
