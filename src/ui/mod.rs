mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Grid edge length options, in cells
pub const GRID_SIZES: &[(usize, &str)] = &[
    (10, "10×10"),
    (20, "20×20"),
    (30, "30×30"),
    (50, "50×50"),
    (100, "100×100"),
    (200, "200×200"),
];

/// Cell edge length options, in pixels
pub const CELL_SIZES: &[(f32, &str)] = &[
    (5.0, "5 px"),
    (10.0, "10 px"),
    (15.0, "15 px"),
    (20.0, "20 px"),
    (30.0, "30 px"),
];

/// Create panel buttons; `input::panel_commands` relies on this order
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 240.0, PANEL_WIDTH, BUTTON_HEIGHT, "Play/Pause"),
        Button::new(px, 290.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset"),
        Button::new(px, 340.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
        Button::new(px, 390.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step"),
    ]
}
