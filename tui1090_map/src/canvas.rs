/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// a single character cell of the canvas
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Cell {
    pub symbol: char,
    pub style: Style,
}

impl Cell {
    pub const BLANK: Cell = Cell { symbol: ' ', style: Style::new() };

    pub fn new (symbol: char, style: Style)->Self { Cell { symbol, style } }
}

impl Default for Cell {
    fn default()->Self { Cell::BLANK }
}

/// fixed size character grid we draw the map into, addressed by (col,row) from the top left.
/// All drawing operations silently clip at the grid boundaries, projected coordinates are routinely off-grid
#[derive(Debug,Clone,PartialEq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new (width: u16, height: u16)->Self {
        Canvas { width, height, cells: vec![Cell::BLANK; width as usize * height as usize] }
    }

    pub fn width (&self)->u16 { self.width }
    pub fn height (&self)->u16 { self.height }

    /// change dimensions. This also clears the canvas
    pub fn resize (&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize( width as usize * height as usize, Cell::BLANK);
    }

    pub fn clear (&mut self) {
        self.cells.fill( Cell::BLANK);
    }

    #[inline]
    fn index (&self, col: i32, row: i32)->Option<usize> {
        self.index_i64( col as i64, row as i64)
    }

    #[inline]
    fn index_i64 (&self, col: i64, row: i64)->Option<usize> {
        if col >= 0 && row >= 0 && col < self.width as i64 && row < self.height as i64 {
            Some( row as usize * self.width as usize + col as usize)
        } else {
            None
        }
    }

    pub fn contains (&self, col: i32, row: i32)->bool { self.index( col, row).is_some() }

    pub fn set (&mut self, col: i32, row: i32, symbol: char, style: Style) {
        self.set_i64( col as i64, row as i64, symbol, style)
    }

    fn set_i64 (&mut self, col: i64, row: i64, symbol: char, style: Style) {
        if let Some(i) = self.index_i64( col, row) {
            self.cells[i] = Cell { symbol, style };
        }
    }

    /// the cell at (col,row), blank if outside of the grid
    pub fn get (&self, col: i32, row: i32)->Cell {
        self.index( col, row).map( |i| self.cells[i]).unwrap_or( Cell::BLANK)
    }

    pub fn cells (&self)->&[Cell] { &self.cells }

    /// Bresenham line from p0 to p1 (both inclusive)
    pub fn draw_line (&mut self, p0: (i32,i32), p1: (i32,i32), symbol: char, style: Style) {
        // i64 so that distant (saturated) endpoints can't overflow the error term
        let (x0,y0) = (p0.0 as i64, p0.1 as i64);
        let (x1,y1) = (p1.0 as i64, p1.1 as i64);

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        let (mut x, mut y) = (x0, y0);

        if dx >= dy { // x is the dominant axis
            let mut err = 2*dy - dx;
            for _ in 0..=dx {
                self.set_i64( x, y, symbol, style);
                if err > 0 {
                    y += sy;
                    err -= 2*dx;
                }
                err += 2*dy;
                x += sx;
            }
        } else {
            let mut err = 2*dx - dy;
            for _ in 0..=dy {
                self.set_i64( x, y, symbol, style);
                if err > 0 {
                    x += sx;
                    err -= 2*dy;
                }
                err += 2*dx;
                y += sy;
            }
        }
    }

    /// write text into consecutive cells of a row, starting at `col`. Characters outside the grid are dropped
    pub fn draw_text (&mut self, col: i32, row: i32, text: &str, style: Style) {
        for (i,c) in text.chars().enumerate() {
            self.set_i64( col as i64 + i as i64, row as i64, c, style);
        }
    }

    /// the symbols of a row as a string (mostly for tests and debugging)
    pub fn row_string (&self, row: i32)->String {
        (0..self.width as i32).map( |col| self.get( col, row).symbol).collect()
    }

    pub fn count_symbol (&self, symbol: char)->usize {
        self.cells.iter().filter( |c| c.symbol == symbol).count()
    }
}

impl Widget for &Canvas {
    fn render (self, area: Rect, buf: &mut Buffer) {
        let w = self.width.min( area.width);
        let h = self.height.min( area.height);

        for row in 0..h {
            for col in 0..w {
                let cell = &self.cells[ row as usize * self.width as usize + col as usize];
                if let Some(bc) = buf.cell_mut( (area.x + col, area.y + row)) {
                    bc.set_char( cell.symbol).set_style( cell.style);
                }
            }
        }
    }
}
