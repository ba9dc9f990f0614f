//! GridView: maps a `GridSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The view also owns the terminal's notion of "pixels": one pixel per
//! terminal column, and `cell_w` pixels per terminal row, so a grid cell drawn
//! `cell_w` columns wide and one row tall is square in pixel space. Mouse
//! positions go through [`GridView::pointer_to_pixel`] and land in the same
//! space as the [`Layout`] returned by [`GridView::layout`].

use crate::core::GridSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Layout, LifeConfig};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Columns reserved to the right of the grid for the status panel.
const PANEL_W: u16 = 14;

const BG: Rgb = Rgb::new(20, 22, 28);

/// A lightweight terminal renderer for the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    /// Grid cell width in terminal columns (cell height is always one row).
    cell_w: u16,
    /// Dead cells get a dot when non-zero.
    edge_width: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            edge_width: 1,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_edge_width(mut self, edge_width: u16) -> Self {
        self.edge_width = edge_width;
        self
    }

    /// Pixel layout matching where this view draws the grid (inside a
    /// one-character border at the top-left of the screen).
    pub fn layout(&self) -> Layout {
        Layout::new(
            self.cell_w,
            self.edge_width,
            1,
            i32::from(self.cell_w),
        )
    }

    /// Convert a terminal mouse position to grid pixel space.
    pub fn pointer_to_pixel(&self, column: u16, row: u16) -> (i32, i32) {
        (
            i32::from(column),
            i32::from(row) * i32::from(self.cell_w),
        )
    }

    /// Adopt this view's layout and shrink the grid so it fits the viewport.
    pub fn fit(&self, config: LifeConfig, viewport: Viewport) -> LifeConfig {
        let max_cols = viewport.width.saturating_sub(2 + PANEL_W) / self.cell_w;
        let max_rows = viewport.height.saturating_sub(2);
        let rows = config.rows.min(max_rows).max(1);
        let cols = config.cols.min(max_cols).max(1);
        config.with_size(rows, cols).with_layout(self.layout())
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        // Saturating: a snapshot wider than u16 columns still clips to the
        // screen instead of overflowing.
        let frame_w = snap.cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.rows.saturating_add(2);

        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, frame_w, frame_h, border);

        let live = Style::new(Rgb::new(120, 230, 140), BG).bold();
        let dead = Style::new(Rgb::new(90, 90, 100), BG).dim();
        let dead_ch = if self.edge_width > 0 { '·' } else { ' ' };

        // Only cells that can land on screen are visited.
        let visible_rows = snap.rows.min(viewport.height.saturating_sub(1));
        let visible_cols = snap.cols.min(viewport.width.saturating_sub(1) / self.cell_w);
        for row in 0..visible_rows {
            for col in 0..visible_cols {
                let x = 1 + col * self.cell_w;
                let y = 1 + row;
                if snap.is_alive(col, row) {
                    fb.fill_span(x, y, self.cell_w, '█', live);
                } else {
                    fb.fill_span(x, y, self.cell_w, dead_ch, dead);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(0, 0, '┌', style);
        fb.put_char(w - 1, 0, '┐', style);
        fb.put_char(0, h - 1, '└', style);
        fb.put_char(w - 1, h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(dx, 0, '─', style);
            fb.put_char(dx, h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(0, dy, '│', style);
            fb.put_char(w - 1, dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        viewport: Viewport,
        frame_w: u16,
    ) {
        let panel_x = frame_w.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_W - 2 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = 0u16;
        fb.put_str(panel_x, y, "STATE", label);
        y += 1;
        if snap.running {
            fb.put_str(panel_x, y, "RUNNING", value);
        } else {
            fb.put_str(panel_x, y, "PAUSED", value);
        }
        y += 2;

        fb.put_str(panel_x, y, "GEN", label);
        y += 1;
        fb.put_u64(panel_x, y, snap.generation, value);
        y += 2;

        fb.put_str(panel_x, y, "POP", label);
        y += 1;
        fb.put_u64(panel_x, y, snap.population as u64, value);
        y += 2;

        for line in ["SPC run/pause", "N   step", "C   clear", "R   random", "Q   quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }
}
