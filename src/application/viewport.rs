/// Viewport maps between window pixels and grid cells.
///
/// The grid's on-screen origin can be dragged around; scale comes from the
/// user-adjustable cell size, passed in per call so the viewport holds no
/// copy of the settings.
pub struct Viewport {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Drag the grid origin
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert window coordinates to cell coordinates.
    /// The result may lie outside the grid; callers bounds-check.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> (i32, i32) {
        let grid_x = ((screen_x - self.offset_x) / cell_size).floor() as i32;
        let grid_y = ((screen_y - self.offset_y) / cell_size).floor() as i32;
        (grid_x, grid_y)
    }

    /// Convert cell coordinates to the window position of the cell's
    /// top-left corner
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize, cell_size: f32) -> (f32, f32) {
        let screen_x = grid_x as f32 * cell_size + self.offset_x;
        let screen_y = grid_y as f32 * cell_size + self.offset_y;
        (screen_x, screen_y)
    }

    /// Cell bounds covering the given window area, for render culling
    pub fn visible_bounds(
        &self,
        viewport_width: f32,
        viewport_height: f32,
        cell_size: f32,
    ) -> (i32, i32, i32, i32) {
        let (min_x, min_y) = self.screen_to_grid(0.0, 0.0, cell_size);
        let (max_x, max_y) = self.screen_to_grid(viewport_width, viewport_height, cell_size);
        (min_x, min_y, max_x, max_y)
    }

    /// Return the origin to the window corner
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_grid_floors() {
        let viewport = Viewport::new();
        assert_eq!(viewport.screen_to_grid(0.0, 0.0, 15.0), (0, 0));
        assert_eq!(viewport.screen_to_grid(14.9, 14.9, 15.0), (0, 0));
        assert_eq!(viewport.screen_to_grid(15.0, 30.0, 15.0), (1, 2));
    }

    #[test]
    fn test_negative_positions_map_below_zero() {
        let mut viewport = Viewport::new();
        viewport.pan(30.0, 30.0);

        // Pixels left of the panned origin land on negative cells,
        // not on cell zero
        assert_eq!(viewport.screen_to_grid(15.0, 15.0, 10.0), (-2, -2));
    }

    #[test]
    fn test_round_trip_through_screen_space() {
        let mut viewport = Viewport::new();
        viewport.pan(7.0, -3.0);

        let (sx, sy) = viewport.grid_to_screen(4, 9, 12.0);
        assert_eq!(viewport.screen_to_grid(sx, sy, 12.0), (4, 9));
    }

    #[test]
    fn test_reset_restores_origin() {
        let mut viewport = Viewport::new();
        viewport.pan(100.0, 50.0);
        viewport.reset();

        assert_eq!(viewport.screen_to_grid(0.0, 0.0, 10.0), (0, 0));
    }
}
