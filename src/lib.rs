// Domain layer - the generation stepper and its data model
pub mod domain;

// Application layer - commands, settings, simulation state
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{presets, Cell, Grid, Pattern};
pub use application::{Command, Settings, SimulationState, Viewport};
pub use ui::Button;
