use macroquad::prelude::*;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    row_height: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            row_height: 30.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Check if dropdown is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Close the dropdown
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Handle interaction and return true if the selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.is_hovered_main(mouse_pos) && is_mouse_button_pressed(MouseButton::Left) {
            // Opening or closing is not a selection change
            self.is_open = !self.is_open;
            return false;
        }

        if !self.is_open {
            return false;
        }

        for i in 0..self.items.len() {
            if self.is_hovered_item(mouse_pos, i) && is_mouse_button_pressed(MouseButton::Left) {
                let changed = self.selected != i;
                self.selected = i;
                self.is_open = false;
                return changed;
            }
        }

        // Click anywhere else closes the menu
        if is_mouse_button_pressed(MouseButton::Left) {
            self.is_open = false;
        }

        false
    }

    /// Draw without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };

        draw_rectangle(self.x, self.y, self.width, self.row_height, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.row_height, 2.0, WHITE);
        draw_text(&self.items[self.selected], self.x + 5.0, self.y + 21.0, 16.0, WHITE);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 14.0, WHITE);

        if !self.is_open {
            return;
        }

        // Opaque backing so the menu reads over the grid
        let menu_height = self.items.len() as f32 * self.row_height;
        draw_rectangle(
            self.x,
            self.y + self.row_height,
            self.width,
            menu_height,
            Color::from_rgba(30, 30, 30, 255),
        );

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.y + self.row_height + (i as f32 * self.row_height);

            let item_color = if self.is_hovered_item(mouse_pos, i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };

            draw_rectangle(self.x, item_y, self.width, self.row_height, item_color);
            draw_rectangle_lines(
                self.x,
                item_y,
                self.width,
                self.row_height,
                1.0,
                Color::from_rgba(80, 80, 80, 255),
            );
            draw_text(item, self.x + 5.0, item_y + 21.0, 16.0, WHITE);
        }

        draw_rectangle_lines(
            self.x,
            self.y + self.row_height,
            self.width,
            menu_height,
            2.0,
            WHITE,
        );
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.row_height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.y + self.row_height + (index as f32 * self.row_height);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.row_height
    }
}
