use macroquad::prelude::*;

/// Panel push button with hover highlight
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
        }
    }

    /// Check if mouse is over the button
    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Check if the button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    /// Draw with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.contains(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };

        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, fill);
        draw_rectangle_lines(self.rect.x, self.rect.y, self.rect.w, self.rect.h, 2.0, WHITE);

        let measure = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.rect.x + (self.rect.w - measure.width) / 2.0,
            self.rect.y + (self.rect.h + measure.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
