//! Braille dot canvas.
//!
//! Every character cell holds a 2x4 grid of dots encoded as one braille
//! scalar in U+2800..U+28FF. Dot `(col, row)` maps to a fixed bit of the
//! scalar's low byte:
//!
//! ```text
//! 0x01 0x08
//! 0x02 0x10
//! 0x04 0x20
//! 0x40 0x80
//! ```
//!
//! Cells also remember which series last drew into them so the chart can
//! colour them.

/// Dots per character cell, horizontally
pub const DOTS_PER_CELL_X: usize = 2;
/// Dots per character cell, vertically
pub const DOTS_PER_CELL_Y: usize = 4;

const DOT_BITS: [[u8; DOTS_PER_CELL_Y]; DOTS_PER_CELL_X] =
    [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

const BRAILLE_BASE: u32 = 0x2800;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub mask: u8,
    /// Index of the series that last set a dot here
    pub owner: Option<usize>,
}

impl Cell {
    pub fn glyph(&self) -> char {
        char::from_u32(BRAILLE_BASE + u32::from(self.mask)).unwrap_or(' ')
    }

    pub fn is_blank(&self) -> bool {
        self.mask == 0
    }
}

/// Row-major grid of braille cells; dot `(0, 0)` is the top-left corner
pub struct BrailleCanvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl BrailleCanvas {
    /// Canvas of `width` x `height` character cells
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dot_width(&self) -> usize {
        self.width * DOTS_PER_CELL_X
    }

    pub fn dot_height(&self) -> usize {
        self.height * DOTS_PER_CELL_Y
    }

    /// Set one dot; coordinates outside the canvas are ignored
    pub fn set(&mut self, x: usize, y: usize, owner: usize) {
        if x >= self.dot_width() || y >= self.dot_height() {
            return;
        }
        let cell = &mut self.cells[(y / DOTS_PER_CELL_Y) * self.width + x / DOTS_PER_CELL_X];
        cell.mask |= DOT_BITS[x % DOTS_PER_CELL_X][y % DOTS_PER_CELL_Y];
        cell.owner = Some(owner);
    }

    /// Straight line between two dots, endpoints included (Bresenham)
    pub fn line(&mut self, from: (usize, usize), to: (usize, usize), owner: usize) {
        let (mut x, mut y) = (from.0 as isize, from.1 as isize);
        let (x1, y1) = (to.0 as isize, to.1 as isize);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x as usize, y as usize, owner);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Cells of one character row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }
}
