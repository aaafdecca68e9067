use macroquad::prelude::*;

use crate::application::{SimulationState, Viewport};
use crate::domain::{Cell, Grid, Pattern};
use crate::ui::{grid_area_height, grid_area_width, panel_x, Button, Dropdown, PANEL_WIDTH};

/// Draw the grid through the viewport, culled to the visible cell range
pub fn draw_grid(grid: &Grid, viewport: &Viewport, cell_size: f32) {
    let (grid_width, grid_height) = grid.dimensions();
    let area_width = grid_area_width();
    let area_height = grid_area_height();

    let (min_x, min_y, max_x, max_y) = viewport.visible_bounds(area_width, area_height, cell_size);

    // Clamp to grid bounds
    let start_x = min_x.max(0) as usize;
    let start_y = min_y.max(0) as usize;
    let end_x = (max_x + 1).clamp(0, grid_width as i32) as usize;
    let end_y = (max_y + 1).clamp(0, grid_height as i32) as usize;

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let dead_cell_color = Color::from_rgba(15, 15, 15, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);

    // Grid lines only once cells are big enough to separate
    let draw_grid_lines = cell_size >= 4.0;

    for y in start_y..end_y {
        for x in start_x..end_x {
            let (screen_x, screen_y) = viewport.grid_to_screen(x, y, cell_size);

            // Skip if outside viewport
            if screen_x + cell_size < 0.0
                || screen_x > area_width
                || screen_y + cell_size < 0.0
                || screen_y > area_height
            {
                continue;
            }

            if grid.get(x, y) == Some(Cell::Alive) {
                draw_rectangle(screen_x, screen_y, cell_size, cell_size, alive_color);
            } else if draw_grid_lines {
                // Faint backing so the editable area is visible
                draw_rectangle(screen_x, screen_y, cell_size, cell_size, dead_cell_color);
            }

            if draw_grid_lines {
                draw_rectangle_lines(screen_x, screen_y, cell_size, cell_size, 1.0, grid_line_color);
            }
        }
    }
}

/// Draw a translucent preview of the armed pattern centered on the cursor
pub fn draw_pattern_ghost(pattern: &Pattern, viewport: &Viewport, cell_size: f32, mouse_pos: (f32, f32)) {
    let (grid_x, grid_y) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1, cell_size);
    let start_x = grid_x - (pattern.width as i32 / 2);
    let start_y = grid_y - (pattern.height as i32 / 2);

    for &(dx, dy) in &pattern.cells {
        let gx = start_x + dx as i32;
        let gy = start_y + dy as i32;

        if gx >= 0 && gy >= 0 {
            let (screen_x, screen_y) = viewport.grid_to_screen(gx as usize, gy as usize, cell_size);
            draw_rectangle(
                screen_x,
                screen_y,
                cell_size,
                cell_size,
                Color::from_rgba(0, 255, 150, 120),
            );
            draw_rectangle_lines(
                screen_x,
                screen_y,
                cell_size,
                cell_size,
                1.5,
                Color::from_rgba(0, 255, 150, 200),
            );
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, dropdowns, and readouts
pub fn draw_controls(
    state: &SimulationState,
    buttons: &[Button],
    dropdowns: &[Dropdown],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|button| button.draw(mouse_pos));

    let px = panel_x();

    let help = [
        ("Controls:", 460.0, 14.0, WHITE),
        ("LMB: Toggle cell", 475.0, 12.0, GRAY),
        ("RMB/Esc: Cancel stamp", 488.0, 12.0, GRAY),
        ("Space: Play  N: Step", 501.0, 12.0, GRAY),
        ("C: Reset  R: Random", 514.0, 12.0, GRAY),
        ("Wheel: Cell size", 527.0, 12.0, GRAY),
        ("Mid-drag: Pan  H: Home", 540.0, 12.0, GRAY),
    ];
    help.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let (grid_width, grid_height) = state.grid.dimensions();
    let labels = [
        (
            format!("Grid: {}×{}", grid_width, grid_height),
            580.0,
            14.0,
            Color::from_rgba(150, 150, 150, 255),
        ),
        (
            format!("Alive: {}", state.grid.population()),
            598.0,
            14.0,
            Color::from_rgba(150, 150, 150, 255),
        ),
        (
            format!("Cell: {:.0} px", state.settings.cell_size),
            616.0,
            14.0,
            Color::from_rgba(150, 150, 150, 255),
        ),
        ("Speed:".to_string(), 650.0, 16.0, WHITE),
        (
            format!("{:.0} gen/s", state.settings.updates_per_second),
            670.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        ("Generation:".to_string(), 700.0, 16.0, WHITE),
        (
            format!("{}", state.generation),
            722.0,
            20.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        ("Status:".to_string(), 752.0, 16.0, WHITE),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let (status, status_color) = if state.pending_pattern.is_some() {
        ("Placing", Color::from_rgba(100, 200, 255, 255))
    } else if state.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status, px, 772.0, 16.0, status_color);

    // Dropdowns last so an open menu sits on top of everything
    let mut open_dropdown: Option<&Dropdown> = None;
    for dropdown in dropdowns {
        if dropdown.is_open() {
            open_dropdown = Some(dropdown);
        } else {
            dropdown.draw(mouse_pos);
        }
    }
    if let Some(dropdown) = open_dropdown {
        dropdown.draw(mouse_pos);
    }
}
