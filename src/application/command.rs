/// Command is the vocabulary of user actions.
///
/// The input layer and the control panel translate raw events into
/// commands; `SimulationState::apply` is the single place they take
/// effect. This keeps the stepper and the event sources fully decoupled.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    /// Replace the grid with an all-dead one and pause
    Reset,
    /// Pause or resume the animation
    TogglePause,
    /// Replace the grid with a fresh random one and pause
    Randomize,
    /// Advance exactly one generation, pausing if running
    StepOnce,
    /// Rebuild as an n x n all-dead grid
    Resize(usize),
    /// Change the cell edge length in pixels
    SetCellSize(f32),
    /// Nudge the update rate by the given generations-per-second delta
    AdjustSpeed(f32),
    /// Flip a single cell under the pointer
    ToggleCell { x: usize, y: usize },
    /// Arm pattern placement with a preset index
    SelectPattern(usize),
    /// Stamp the armed pattern centered on the given cell
    PlacePattern { x: usize, y: usize },
    /// Disarm pattern placement
    CancelPattern,
}
