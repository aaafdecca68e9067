use macroquad::prelude::*;

use crate::application::{Command, Viewport};
use crate::ui::{grid_area_width, Button};

/// Translate this frame's keyboard state into commands
pub fn keyboard_commands() -> Vec<Command> {
    type KeyCommand = (KeyCode, Command);

    let bindings: [KeyCommand; 7] = [
        (KeyCode::Space, Command::TogglePause),
        (KeyCode::C, Command::Reset),
        (KeyCode::R, Command::Randomize),
        (KeyCode::N, Command::StepOnce),
        (KeyCode::Up, Command::AdjustSpeed(1.0)),
        (KeyCode::Down, Command::AdjustSpeed(-1.0)),
        (KeyCode::Escape, Command::CancelPattern),
    ];

    bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect()
}

/// Translate mouse activity over the grid area into commands.
/// `placing` switches a left click between toggling the cell under the
/// cursor and stamping the armed pattern there.
pub fn mouse_commands(
    viewport: &Viewport,
    cell_size: f32,
    grid_dimensions: (usize, usize),
    placing: bool,
) -> Vec<Command> {
    let mut commands = Vec::new();
    let (mouse_x, mouse_y) = mouse_position();

    // Wheel steps the cell size, the zoom equivalent
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        commands.push(Command::SetCellSize(cell_size + 1.0));
    } else if wheel < 0.0 {
        commands.push(Command::SetCellSize(cell_size - 1.0));
    }

    if mouse_x >= grid_area_width() {
        return commands;
    }

    if placing && is_mouse_button_pressed(MouseButton::Right) {
        commands.push(Command::CancelPattern);
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let (grid_x, grid_y) = viewport.screen_to_grid(mouse_x, mouse_y, cell_size);
        let (width, height) = grid_dimensions;

        if grid_x >= 0 && grid_y >= 0 && (grid_x as usize) < width && (grid_y as usize) < height {
            let (x, y) = (grid_x as usize, grid_y as usize);
            commands.push(if placing {
                Command::PlacePattern { x, y }
            } else {
                Command::ToggleCell { x, y }
            });
        }
    }

    commands
}

/// Map panel button clicks to commands; order matches `ui::create_buttons`
pub fn panel_commands(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    let actions = [
        Command::TogglePause,
        Command::Reset,
        Command::Randomize,
        Command::StepOnce,
    ];

    buttons
        .iter()
        .zip(actions)
        .filter(|(button, _)| button.is_clicked(mouse_pos))
        .map(|(_, command)| command)
        .collect()
}

/// Middle-drag pans the viewport, 'H' homes it. The pan anchor lives in
/// the caller's loop state instead of a module-level static.
pub fn handle_pan(
    viewport: &mut Viewport,
    pan_anchor: &mut Option<(f32, f32)>,
    mouse_pos: (f32, f32),
) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some((last_x, last_y)) = *pan_anchor {
            viewport.pan(mouse_pos.0 - last_x, mouse_pos.1 - last_y);
        }
        *pan_anchor = Some(mouse_pos);
    } else {
        *pan_anchor = None;
    }

    if is_key_pressed(KeyCode::H) {
        viewport.reset();
    }
}
