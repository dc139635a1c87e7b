//! An off-screen grid of terminal cells addressed in logical pixels.
//!
//! The `Viewport` fixes how the `WIDTH` × `HEIGHT` field maps onto the
//! terminal; the `Canvas` rasterises simple shapes into cells.  A cell is
//! painted when its centre lies inside the shape, and a shape too small to
//! cover any centre still paints the cell under its own centre.

use crossterm::style::Color;

use crate::assets::Sprite;
use crate::entities::{Rect, HEIGHT, WIDTH};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Terminal column / row of the field's top-left cell.
    pub origin_col: u16,
    pub origin_row: u16,
    pub cols: u16,
    pub rows: u16,
    /// Logical pixels covered by one cell horizontally.
    pub px_per_col: f32,
    pub px_per_row: f32,
    /// Size of the terminal the field was fitted into.
    pub term_cols: u16,
    pub term_rows: u16,
}

impl Viewport {
    /// Largest aspect-correct field that fits inside a `term_cols` ×
    /// `term_rows` terminal with a one-cell border, centred.
    pub fn fit(term_cols: u16, term_rows: u16) -> Self {
        let avail_cols = term_cols.saturating_sub(2).max(1);
        let avail_rows = term_rows.saturating_sub(2).max(1);

        let px_per_col = (WIDTH as f32 / avail_cols as f32)
            .max(HEIGHT as f32 / (avail_rows as f32 * CELL_ASPECT));
        let px_per_row = px_per_col * CELL_ASPECT;

        // Round before ceil so float noise doesn't add a spare cell.
        let span = |px: f32, per: f32| ((px / per * 1000.0).round() / 1000.0).ceil() as u16;
        let cols = span(WIDTH as f32, px_per_col).clamp(1, avail_cols);
        let rows = span(HEIGHT as f32, px_per_row).clamp(1, avail_rows);

        Viewport {
            origin_col: (term_cols.saturating_sub(cols)) / 2,
            origin_row: (term_rows.saturating_sub(rows)) / 2,
            cols,
            rows,
            px_per_col,
            px_per_row,
            term_cols,
            term_rows,
        }
    }

    /// Cell (relative to the field) that contains logical point `(x, y)`.
    pub fn cell_at(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.px_per_col).floor() as i32,
            (y / self.px_per_row).floor() as i32,
        )
    }

    /// Logical position of a cell's centre.
    pub fn cell_center(&self, col: i32, row: i32) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.px_per_col,
            (row as f32 + 0.5) * self.px_per_row,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub const fn blank(bg: Color) -> Self {
        Cell { ch: ' ', fg: Color::White, bg }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Text starts at the point.
    West,
    /// Text is centred on the point.
    Center,
}

pub struct Canvas {
    viewport: Viewport,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(viewport: Viewport) -> Self {
        let len = viewport.cols as usize * viewport.rows as usize;
        Canvas {
            viewport,
            cells: vec![Cell::blank(Color::Black); len],
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.viewport.cols || row >= self.viewport.rows {
            return None;
        }
        self.cells
            .get(row as usize * self.viewport.cols as usize + col as usize)
    }

    /// One text row of the canvas, characters only.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.viewport.cols)
            .filter_map(|col| self.cell(col, row).map(|c| c.ch))
            .collect()
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.viewport.cols as i32 || row >= self.viewport.rows as i32
        {
            return None;
        }
        let idx = row as usize * self.viewport.cols as usize + col as usize;
        self.cells.get_mut(idx)
    }

    fn paint(&mut self, col: i32, row: i32, bg: Color) {
        if let Some(cell) = self.cell_mut(col, row) {
            *cell = Cell::blank(bg);
        }
    }

    pub fn clear(&mut self, bg: Color) {
        self.cells.fill(Cell::blank(bg));
    }

    /// Paint every cell whose centre satisfies `inside`, scanning only the
    /// cells under `bounds`.
    fn fill_where(&mut self, bounds: Rect, color: Color, inside: impl Fn(f32, f32) -> bool) {
        let vp = self.viewport;
        let (c0, r0) = vp.cell_at(bounds.left as f32, bounds.top as f32);
        let (c1, r1) = vp.cell_at(bounds.right as f32, bounds.bottom as f32);
        let mut painted = false;
        for row in r0.max(0)..=r1.min(vp.rows as i32 - 1) {
            for col in c0.max(0)..=c1.min(vp.cols as i32 - 1) {
                let (x, y) = vp.cell_center(col, row);
                if inside(x, y) {
                    self.paint(col, row, color);
                    painted = true;
                }
            }
        }
        if !painted {
            let cx = (bounds.left + bounds.right) as f32 / 2.0;
            let cy = (bounds.top + bounds.bottom) as f32 / 2.0;
            let (col, row) = vp.cell_at(cx, cy);
            self.paint(col, row, color);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_where(rect, color, |x, y| {
            x >= rect.left as f32
                && x < rect.right as f32
                && y >= rect.top as f32
                && y < rect.bottom as f32
        });
    }

    /// Ellipse inscribed in `rect`.
    pub fn fill_oval(&mut self, rect: Rect, color: Color) {
        let cx = (rect.left + rect.right) as f32 / 2.0;
        let cy = (rect.top + rect.bottom) as f32 / 2.0;
        let rx = (rect.width() as f32 / 2.0).max(f32::EPSILON);
        let ry = (rect.height() as f32 / 2.0).max(f32::EPSILON);
        self.fill_where(rect, color, |x, y| {
            let dx = (x - cx) / rx;
            let dy = (y - cy) / ry;
            dx * dx + dy * dy <= 1.0
        });
    }

    pub fn fill_triangle(&mut self, points: [(i32, i32); 3], color: Color) {
        let [a, b, c] = points.map(|(x, y)| (x as f32, y as f32));
        let bounds = Rect::new(
            points.iter().map(|p| p.0).min().unwrap_or(0),
            points.iter().map(|p| p.1).min().unwrap_or(0),
            points.iter().map(|p| p.0).max().unwrap_or(0),
            points.iter().map(|p| p.1).max().unwrap_or(0),
        );
        let edge = |p: (f32, f32), q: (f32, f32), x: f32, y: f32| {
            (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
        };
        self.fill_where(bounds, color, |x, y| {
            let d0 = edge(a, b, x, y);
            let d1 = edge(b, c, x, y);
            let d2 = edge(c, a, x, y);
            let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
            let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
            !(has_neg && has_pos)
        });
    }

    /// Stretch `sprite` over `rect`, skipping transparent pixels.
    pub fn blit(&mut self, rect: Rect, sprite: &Sprite) {
        let vp = self.viewport;
        let (c0, r0) = vp.cell_at(rect.left as f32, rect.top as f32);
        let (c1, r1) = vp.cell_at(rect.right as f32, rect.bottom as f32);
        let (w, h) = (rect.width().max(1) as f32, rect.height().max(1) as f32);
        for row in r0.max(0)..=r1.min(vp.rows as i32 - 1) {
            for col in c0.max(0)..=c1.min(vp.cols as i32 - 1) {
                let (x, y) = vp.cell_center(col, row);
                let u = (x - rect.left as f32) / w;
                let v = (y - rect.top as f32) / h;
                if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                    continue;
                }
                if let Some((r, g, b)) = sprite.sample(u, v) {
                    self.paint(col, row, Color::Rgb { r, g, b });
                }
            }
        }
    }

    /// Draw `text` at logical `(x, y)`, keeping the background underneath.
    pub fn text(&mut self, x: i32, y: i32, text: &str, color: Color, anchor: Anchor) {
        let (col, row) = self.viewport.cell_at(x as f32, y as f32);
        let len = text.chars().count() as i32;
        let start = match anchor {
            Anchor::West => col,
            Anchor::Center => col - len / 2,
        };
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(start + i as i32, row) {
                cell.ch = ch;
                cell.fg = color;
            }
        }
    }
}
