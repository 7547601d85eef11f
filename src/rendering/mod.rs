use macroquad::prelude::*;
use crate::domain::{Cell, Grid};

const ALIVE_COLOR: Color = WHITE;
const DEAD_COLOR: Color = BLACK;
const BORDER_COLOR: Color = Color::new(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0);

/// Fill color for a cell
pub fn cell_color(cell: Cell) -> Color {
    if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR }
}

/// Draw every cell as a filled square with a thin border.
/// Column x maps to screen x, row y to screen y.
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    for (x, y, cell) in grid.iter_cells() {
        let screen_x = x as f32 * cell_size;
        let screen_y = y as f32 * cell_size;

        draw_rectangle(screen_x, screen_y, cell_size, cell_size, cell_color(cell));
        draw_rectangle_lines(screen_x, screen_y, cell_size, cell_size, 1.0, BORDER_COLOR);
    }
}
