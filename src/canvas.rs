//! Fixed-size character grid that clips everything drawn outside it.

use crossterm::{cursor, queue, style};
use std::io::{self, Write};

pub struct Canvas {
    w: i32,
    h: i32,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(w: i32, h: i32) -> Self {
        let (w, h) = (w.max(0), h.max(0));
        Self {
            w,
            h,
            cells: vec![' '; (w * h) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.w
    }

    pub fn height(&self) -> i32 {
        self.h
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    pub fn set(&mut self, row: i32, col: i32, ch: char) {
        if row >= 0 && col >= 0 && row < self.h && col < self.w {
            self.cells[(row * self.w + col) as usize] = ch;
        }
    }

    pub fn get(&self, row: i32, col: i32) -> Option<char> {
        if row >= 0 && col >= 0 && row < self.h && col < self.w {
            Some(self.cells[(row * self.w + col) as usize])
        } else {
            None
        }
    }

    /// Writes `text` left to right starting at `(row, col)`. Characters that
    /// land off the grid are dropped.
    pub fn put(&mut self, row: i32, col: i32, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.set(row, col + i as i32, ch);
        }
    }

    pub fn row_text(&self, row: i32) -> String {
        if row < 0 || row >= self.h {
            return String::new();
        }
        let start = (row * self.w) as usize;
        self.cells[start..start + self.w as usize].iter().collect()
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for row in 0..self.h {
            queue!(
                out,
                cursor::MoveTo(0, row as u16),
                style::Print(self.row_text(row))
            )?;
        }
        out.flush()
    }
}
