//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Each row is compared with the previous frame and only the span between its
//! first and last changed glyph is re-sent. Style changes are sent as deltas.
//! Entering the renderer also turns on mouse capture so the host receives
//! click and drag events.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style, Weight};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, mouse capture.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(EnableMouseCapture)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(DisableMouseCapture)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint the whole screen (after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb` and keep it as the reference for the next frame.
    ///
    /// The previous frame's buffer is handed back through `fb`, so the host
    /// keeps reusing two allocations.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let prev = self.last.take();
        encode_frame_into(prev.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        let mut prev = prev.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// Without a usable previous frame (none yet, or a different size) the screen
/// is cleared and every row is drawn.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let Some(row) = next.row(y) else { break };
        let (start, end) = match prev.and_then(|p| p.row(y)) {
            Some(old) => match dirty_span(old, row) {
                Some(span) => span,
                None => continue,
            },
            None => (0, row.len()),
        };

        out.queue(cursor::MoveTo(start as u16, y))?;
        for glyph in &row[start..end] {
            pen.apply(out, glyph.style)?;
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Half-open column range covering every glyph that differs between two
/// equally long rows.
fn dirty_span(old: &[Glyph], new: &[Glyph]) -> Option<(usize, usize)> {
    let start = old.iter().zip(new).position(|(a, b)| a != b)?;
    let end = old.iter().zip(new).rposition(|(a, b)| a != b)?;
    Some((start, end + 1))
}

/// Last style sent to the terminal.
#[derive(Debug, Default)]
struct Pen {
    style: Option<Style>,
}

impl Pen {
    fn apply(&mut self, out: &mut Vec<u8>, style: Style) -> Result<()> {
        let prev = self.style.replace(style);
        if prev == Some(style) {
            return Ok(());
        }

        // An attribute reset also drops colors, so both get re-sent after it.
        let weight_changed = prev.map_or(true, |p| p.weight != style.weight);
        if weight_changed {
            out.queue(SetAttribute(Attribute::Reset))?;
            match style.weight {
                Weight::Normal => {}
                Weight::Bold => {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                Weight::Dim => {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
            }
        }
        if weight_changed || prev.map(|p| p.fg) != Some(style.fg) {
            out.queue(SetForegroundColor(style.fg.into()))?;
        }
        if weight_changed || prev.map(|p| p.bg) != Some(style.bg) {
            out.queue(SetBackgroundColor(style.bg.into()))?;
        }
        Ok(())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(out: &[u8]) -> String {
        String::from_utf8_lossy(out).into_owned()
    }

    #[test]
    fn dirty_span_covers_first_to_last_change() {
        let a = FrameBuffer::new(6, 1);
        let mut b = a.clone();
        b.put_char(1, 0, 'x', Style::PLAIN);
        b.put_char(4, 0, 'y', Style::PLAIN);

        let (old, new) = (a.row(0).unwrap_or(&[]), b.row(0).unwrap_or(&[]));
        assert_eq!(dirty_span(old, new), Some((1, 5)));
        assert_eq!(dirty_span(old, old), None);
    }

    #[test]
    fn unchanged_frame_emits_no_glyphs() {
        let a = FrameBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_frame_into(Some(&a), &a.clone(), &mut out).unwrap();
        let text = text(&out);
        assert!(!text.contains(' '), "no glyphs expected, got {:?}", text);
    }

    #[test]
    fn first_frame_clears_and_draws_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        for (x, y, ch) in [(0, 0, 'A'), (1, 0, 'B'), (0, 1, 'C'), (1, 1, 'D')] {
            fb.put_char(x, y, ch, Style::PLAIN);
        }

        let mut out = Vec::new();
        encode_frame_into(None, &fb, &mut out).unwrap();
        let text = text(&out);
        assert!(text.contains("\x1b[2J"));
        for ch in ['A', 'B', 'C', 'D'] {
            assert!(text.contains(ch));
        }
    }

    #[test]
    fn resized_frame_is_redrawn_in_full() {
        let small = FrameBuffer::new(2, 2);
        let big = FrameBuffer::new(3, 3);
        let mut out = Vec::new();
        encode_frame_into(Some(&small), &big, &mut out).unwrap();
        assert!(text(&out).contains("\x1b[2J"));
    }

    #[test]
    fn single_change_moves_to_its_cell() {
        let a = FrameBuffer::new(5, 3);
        let mut b = a.clone();
        b.put_char(2, 1, 'X', Style::PLAIN);

        let mut out = Vec::new();
        encode_frame_into(Some(&a), &b, &mut out).unwrap();
        let text = text(&out);
        // Cursor positions are 1-based: row 2, column 3.
        assert!(text.contains("\x1b[2;3H"), "got {:?}", text);
        assert_eq!(text.matches('X').count(), 1);
        assert!(!text.contains("\x1b[2J"));
    }

    #[test]
    fn pen_skips_repeated_styles() {
        let mut pen = Pen::default();
        let mut out = Vec::new();
        pen.apply(&mut out, Style::PLAIN.bold()).unwrap();
        let first = out.len();
        assert!(first > 0);
        pen.apply(&mut out, Style::PLAIN.bold()).unwrap();
        assert_eq!(out.len(), first);

        // Only the background differs: one color command, no attribute reset.
        let style = Style::new(Style::PLAIN.fg, Rgb::new(1, 2, 3)).bold();
        out.clear();
        pen.apply(&mut out, style).unwrap();
        let text = text(&out);
        assert!(text.contains("48;2;1;2;3"));
        assert!(!text.contains("\x1b[0m"));
    }
}
