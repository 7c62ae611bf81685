/// The shared drawing surface.
///
/// A fixed-size grid of character cells that every task draws into during a
/// scheduler pass.  The terminal frontend presents it after each pass and
/// feeds key presses back in; nothing here touches the terminal directly.

use std::collections::VecDeque;

use crossterm::event::KeyCode;

use crate::frames::Frame;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Normal,
    Dim,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Cell { glyph: ' ', style: Style::Normal }
    }
}

#[derive(Clone, Debug)]
pub struct Canvas {
    rows: u16,
    columns: u16,
    cells: Vec<Cell>,
    /// Width of the protected border ring; zero when unframed.
    border: u16,
    pending_keys: VecDeque<KeyCode>,
    bell: bool,
}

impl Canvas {
    pub fn new(rows: u16, columns: u16) -> Self {
        Canvas {
            rows,
            columns,
            cells: vec![Cell::default(); rows as usize * columns as usize],
            border: 0,
            pending_keys: VecDeque::new(),
            bell: false,
        }
    }

    /// A canvas with a box border drawn around it.  Later drawing is
    /// clipped to the interior so the border survives erasing.
    pub fn framed(rows: u16, columns: u16, border: u16) -> Self {
        let mut canvas = Canvas::new(rows, columns);
        canvas.draw_border();
        canvas.border = border;
        canvas
    }

    /// `(rows, columns)`.
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    pub fn border(&self) -> u16 {
        self.border
    }

    pub fn cell(&self, row: i32, column: i32) -> Option<Cell> {
        self.index(row, column).map(|i| self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write one glyph.  Positions outside the drawable area are ignored.
    pub fn draw_char(&mut self, row: i32, column: i32, glyph: char, style: Style) {
        if !self.is_drawable(row, column) {
            return;
        }
        if let Some(i) = self.index(row, column) {
            self.cells[i] = Cell { glyph, style };
        }
    }

    /// Paint a multi-line frame with its top-left corner at the rounded
    /// position.  Spaces in the frame are transparent.  With `erase` set,
    /// every glyph the frame would draw is blanked instead.
    pub fn draw_frame(&mut self, row: f64, column: f64, frame: &Frame, erase: bool) {
        self.draw_text(row, column, frame.text(), erase);
    }

    pub fn draw_text(&mut self, row: f64, column: f64, text: &str, erase: bool) {
        let start_row = row.round() as i32;
        let start_column = column.round() as i32;
        for (dr, line) in text.lines().enumerate() {
            let r = start_row + dr as i32;
            if r < 0 {
                continue;
            }
            if r >= self.rows as i32 {
                break;
            }
            for (dc, symbol) in line.chars().enumerate() {
                let c = start_column + dc as i32;
                if c < 0 {
                    continue;
                }
                if c >= self.columns as i32 {
                    break;
                }
                if symbol == ' ' {
                    continue;
                }
                // The bottom-right cell scrolls some terminals.
                if r == self.rows as i32 - 1 && c == self.columns as i32 - 1 {
                    continue;
                }
                let glyph = if erase { ' ' } else { symbol };
                self.draw_char(r, c, glyph, Style::Normal);
            }
        }
    }

    /// Queue key presses delivered by the frontend.
    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = KeyCode>) {
        self.pending_keys.extend(keys);
    }

    /// Drain every key pressed since the last read, oldest first.
    pub fn read_pending_keys(&mut self) -> Vec<KeyCode> {
        self.pending_keys.drain(..).collect()
    }

    pub fn beep(&mut self) {
        self.bell = true;
    }

    /// Returns and clears the pending bell request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }

    fn index(&self, row: i32, column: i32) -> Option<usize> {
        if row < 0 || column < 0 || row >= self.rows as i32 || column >= self.columns as i32 {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    fn is_drawable(&self, row: i32, column: i32) -> bool {
        let b = self.border as i32;
        row >= b
            && column >= b
            && row < self.rows as i32 - b
            && column < self.columns as i32 - b
    }

    fn draw_border(&mut self) {
        if self.rows < 2 || self.columns < 2 {
            return;
        }
        let bottom = self.rows as i32 - 1;
        let right = self.columns as i32 - 1;
        for c in 1..right {
            self.draw_char(0, c, '─', Style::Normal);
            self.draw_char(bottom, c, '─', Style::Normal);
        }
        for r in 1..bottom {
            self.draw_char(r, 0, '│', Style::Normal);
            self.draw_char(r, right, '│', Style::Normal);
        }
        self.draw_char(0, 0, '┌', Style::Normal);
        self.draw_char(0, right, '┐', Style::Normal);
        self.draw_char(bottom, 0, '└', Style::Normal);
        self.draw_char(bottom, right, '┘', Style::Normal);
    }
}
