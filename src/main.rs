use macroquad::prelude::*;

use canvas_life::{
    input, presets, rendering,
    ui::{self, Dropdown, CELL_SIZES, GRID_SIZES},
    Command, Settings, SimulationState, Viewport,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Build startup settings from an optional JSON path in argv[1]
fn startup_settings() -> Settings {
    match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path);
                settings
            }
            Err(err) => {
                log::warn!("{}; falling back to default settings", err);
                Settings::default()
            }
        },
        None => Settings::default(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut state = SimulationState::new(startup_settings());
    let mut viewport = Viewport::new();
    let mut pan_anchor = None;

    let patterns = presets::all_patterns();
    let px = ui::panel_x();

    let size_items: Vec<String> = GRID_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut grid_size_dropdown = Dropdown::new(px, 20.0, ui::PANEL_WIDTH, "Grid Size", size_items);
    grid_size_dropdown.set_selected(
        GRID_SIZES
            .iter()
            .position(|(size, _)| *size == state.settings.grid_size)
            .unwrap_or(2),
    );

    let cell_items: Vec<String> = CELL_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut cell_size_dropdown = Dropdown::new(px, 70.0, ui::PANEL_WIDTH, "Cell Size", cell_items);
    cell_size_dropdown.set_selected(
        CELL_SIZES
            .iter()
            .position(|(size, _)| *size == state.settings.cell_size)
            .unwrap_or(2),
    );

    let pattern_items: Vec<String> = patterns.iter().map(|p| p.name.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(px, 120.0, ui::PANEL_WIDTH, "Pattern", pattern_items);

    loop {
        let mouse_pos = mouse_position();

        // Track window resizes
        let px = ui::panel_x();
        grid_size_dropdown.set_position(px, 20.0);
        cell_size_dropdown.set_position(px, 70.0);
        pattern_dropdown.set_position(px, 120.0);
        let buttons = ui::create_buttons();

        let mut commands: Vec<Command> = Vec::new();

        // Only one dropdown menu open at a time
        if grid_size_dropdown.update(mouse_pos) {
            commands.push(Command::Resize(GRID_SIZES[grid_size_dropdown.selected()].0));
        }
        if grid_size_dropdown.is_open() {
            cell_size_dropdown.close();
            pattern_dropdown.close();
        }

        if cell_size_dropdown.update(mouse_pos) {
            commands.push(Command::SetCellSize(
                CELL_SIZES[cell_size_dropdown.selected()].0,
            ));
        }
        if cell_size_dropdown.is_open() {
            grid_size_dropdown.close();
            pattern_dropdown.close();
        }

        if pattern_dropdown.update(mouse_pos) {
            commands.push(Command::SelectPattern(pattern_dropdown.selected()));
        }
        if pattern_dropdown.is_open() {
            grid_size_dropdown.close();
            cell_size_dropdown.close();
        }

        commands.extend(input::panel_commands(&buttons, mouse_pos));
        commands.extend(input::keyboard_commands());
        commands.extend(input::mouse_commands(
            &viewport,
            state.settings.cell_size,
            state.grid.dimensions(),
            state.pending_pattern.is_some(),
        ));

        input::handle_pan(&mut viewport, &mut pan_anchor, mouse_pos);

        state = commands.into_iter().fold(state, SimulationState::apply);
        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&state.grid, &viewport, state.settings.cell_size);

        if let Some(index) = state.pending_pattern {
            if mouse_pos.0 < ui::grid_area_width() {
                rendering::draw_pattern_ghost(
                    &patterns[index],
                    &viewport,
                    state.settings.cell_size,
                    mouse_pos,
                );
            }
        }

        let dropdowns = [
            grid_size_dropdown.clone(),
            cell_size_dropdown.clone(),
            pattern_dropdown.clone(),
        ];
        rendering::draw_controls(&state, &buttons, &dropdowns, mouse_pos);

        next_frame().await;
    }
}
